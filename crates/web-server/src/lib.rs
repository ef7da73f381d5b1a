use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, routing::get};
use database::{AnyPool, VisitorRegistry};
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access.
#[derive(Clone)]
pub struct AppState {
    pub registry: VisitorRegistry,
}

/// Builds the application router.
///
/// Split out of [`run_server`] so the test suite can drive the routes
/// in-process with `tower::ServiceExt::oneshot`.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any());

    Router::new()
        .route("/ping", get(handlers::ping))
        .route(
            "/visitors",
            get(handlers::get_visitors).post(handlers::add_visitor),
        )
        .route(
            "/visitors/:plate",
            get(handlers::get_visitors_by_plate).delete(handlers::remove_visitor),
        )
        .with_state(state)
        .layer(cors)
        // This middleware will automatically log information about every incoming request.
        .layer(TraceLayer::new_for_http())
}

/// The main function to configure and run the web server.
///
/// Takes the already-established pool; startup (config, connect, schema) is
/// the caller's job, and nothing past this point terminates the process on a
/// per-request failure.
pub async fn run_server(addr: SocketAddr, pool: AnyPool) -> anyhow::Result<()> {
    let registry = VisitorRegistry::new(pool);
    let app = router(Arc::new(AppState { registry }));

    tracing::info!("Web server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
