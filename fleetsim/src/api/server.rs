//! Router assembly and the serve loop.

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use super::v0;
use crate::simulator::FleetSimulator;

pub type SharedState = Arc<FleetSimulator>;

#[derive(OpenApi)]
#[openapi(info(
    title = "fleetsim",
    description = "Synthetic telemetry for a Scrypt mining fleet"
))]
struct ApiDoc;

/// Build the full application router with OpenAPI docs mounted at
/// `/docs`.
pub fn router(state: SharedState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/api/v0", v0::routes())
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/docs").url("/api/v0/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(addr: &str, simulator: FleetSimulator) -> anyhow::Result<()> {
    let app = router(Arc::new(simulator));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("API listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
