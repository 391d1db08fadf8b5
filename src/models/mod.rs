pub mod event;

pub use event::{BudgetPolicy, Event, EventRow, NewEvent};
