use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{EventRow, NewEvent};
use crate::utils::error::{AppError, AppResult};

// No ORDER BY: callers get whatever order the store produces.
const LIST_EVENTS: &str = "SELECT id, titulo, descripcion, fecha, hora, ubicacion, \
     cupo_maximo, presupuesto, categoria, estado FROM eventos";

const INSERT_EVENT: &str = "INSERT INTO eventos \
     (titulo, descripcion, fecha, hora, ubicacion, cupo_maximo, presupuesto, categoria, estado) \
     VALUES ($1, $2, $3::date, $4::time, $5, $6, $7, $8, $9) \
     RETURNING id";

/// Persistence seam for event records.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// All rows of the event table, in store order.
    async fn list(&self) -> AppResult<Vec<EventRow>>;

    /// Stores a new event and returns the id the store assigned.
    async fn insert(&self, event: &NewEvent) -> AppResult<i32>;

    /// Round-trips a trivial statement to prove the store is reachable.
    async fn ping(&self) -> AppResult<()>;
}

#[derive(Clone)]
pub struct PgEventStore {
    pool: PgPool,
}

impl PgEventStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for PgEventStore {
    async fn list(&self) -> AppResult<Vec<EventRow>> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(AppError::ConnectionError)?;

        let rows = sqlx::query_as::<_, EventRow>(LIST_EVENTS)
            .fetch_all(&mut *conn)
            .await
            .map_err(AppError::QueryError)?;

        tracing::debug!(count = rows.len(), "Listed events");
        Ok(rows)
    }

    async fn insert(&self, event: &NewEvent) -> AppResult<i32> {
        let mut tx = self.pool.begin().await.map_err(AppError::ConnectionError)?;

        // Dropping an uncommitted transaction rolls it back.
        let id: i32 = sqlx::query_scalar(INSERT_EVENT)
            .bind(&event.titulo)
            .bind(&event.descripcion)
            .bind(&event.fecha)
            .bind(&event.hora)
            .bind(&event.ubicacion)
            .bind(event.cupo_maximo)
            .bind(event.presupuesto)
            .bind(&event.categoria)
            .bind(&event.estado)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::InsertError)?;

        tx.commit().await.map_err(AppError::InsertError)?;

        tracing::info!(id, titulo = %event.titulo, "Event created");
        Ok(id)
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(AppError::ConnectionError)?;
        Ok(())
    }
}
