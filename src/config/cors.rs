use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

const ANY_ORIGIN: &str = "*";

const PREFLIGHT_MAX_AGE_SECS: u64 = 86400;

/// Origins accepted by the CORS layer, parsed once from configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AllowedOrigins {
    #[default]
    Any,
    List(Vec<HeaderValue>),
}

impl AllowedOrigins {
    /// `*` or a comma-separated origin list. Unparsable entries are skipped;
    /// if nothing valid remains, any origin is allowed.
    pub fn parse(origins_str: &str) -> Self {
        if origins_str.trim() == ANY_ORIGIN {
            return AllowedOrigins::Any;
        }

        let origins: Vec<HeaderValue> = origins_str
            .split(',')
            .filter_map(|origin| {
                let trimmed = origin.trim();
                if trimmed.is_empty() || trimmed == ANY_ORIGIN {
                    None
                } else {
                    match trimmed.parse::<HeaderValue>() {
                        Ok(value) => {
                            tracing::debug!("CORS: Allowing origin: {}", trimmed);
                            Some(value)
                        }
                        Err(e) => {
                            tracing::warn!("CORS: Invalid origin '{}': {}", trimmed, e);
                            None
                        }
                    }
                }
            })
            .collect();

        if origins.is_empty() {
            tracing::warn!("CORS: No valid origins configured, allowing any origin");
            AllowedOrigins::Any
        } else {
            AllowedOrigins::List(origins)
        }
    }
}

/// Any method and header from the configured origins. Credentials stay off:
/// browsers refuse a wildcard origin combined with credentials.
pub fn create_cors_layer(origins: &AllowedOrigins) -> CorsLayer {
    let allow_origin = match origins {
        AllowedOrigins::Any => {
            tracing::info!("CORS: Allowing any origin");
            AllowOrigin::any()
        }
        AllowedOrigins::List(list) => {
            tracing::info!("CORS: Configured with {} allowed origin(s)", list.len());
            AllowOrigin::list(list.iter().cloned())
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(PREFLIGHT_MAX_AGE_SECS))
}
