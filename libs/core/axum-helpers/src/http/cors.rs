use axum::http::{HeaderValue, Method, header};
use core_config::cors::CorsConfig;
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::info;

const ALLOWED_METHODS: [Method; 6] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::PATCH,
    Method::OPTIONS,
];

/// Creates the CORS layer described by `config`.
///
/// With no configured origins every origin is allowed (no credentials).
/// Otherwise only the listed origins are allowed, with credentials and a
/// one hour preflight cache.
///
/// # Errors
/// Returns `InvalidInput` if an origin is not a valid header value.
pub fn create_cors_layer(config: &CorsConfig) -> io::Result<CorsLayer> {
    if config.is_permissive() {
        info!("CORS configured to allow any origin");
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(ALLOWED_METHODS)
            .allow_headers(Any));
    }

    let allowed_origins = config
        .allowed_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS origin: {}", e),
            )
        })?;

    info!(origins = ?config.allowed_origins, "CORS configured with allowed origins");

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods(ALLOWED_METHODS)
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permissive_layer_builds() {
        assert!(create_cors_layer(&CorsConfig::default()).is_ok());
    }

    #[test]
    fn test_listed_origins_build() {
        let config = CorsConfig::new(["http://localhost:3000", "https://example.com"]);
        assert!(create_cors_layer(&config).is_ok());
    }

    #[test]
    fn test_invalid_origin_is_rejected() {
        let config = CorsConfig::new(["http://bad\norigin"]);
        let err = create_cors_layer(&config).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
