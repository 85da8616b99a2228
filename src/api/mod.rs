pub mod error;
pub mod v1;

use axum::Router;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::Config;

pub fn router(cfg: &Config) -> Router {
    let mut router = Router::new().nest("/api/v1", v1::router());

    if cfg.server.enable_cors {
        use tower_http::cors::{AllowOrigin, CorsLayer};
        // The geometry editor is a browser app served from its own origin.
        let origin = cfg
            .server
            .cors_origin
            .parse()
            .expect("server.cors_origin must be a valid origin");
        let cors = CorsLayer::new()
            .allow_origin(AllowOrigin::exact(origin))
            .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
            .allow_headers([axum::http::header::CONTENT_TYPE]);
        router = router.layer(cors);
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(axum::extract::DefaultBodyLimit::max(1024 * 1024))
                .layer(TimeoutLayer::new(Duration::from_secs(
                    cfg.server.request_timeout_secs,
                ))),
        )
        .layer(TraceLayer::new_for_http())
}
