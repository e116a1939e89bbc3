use axum::Json;
use axum::response::IntoResponse;
use axum::routing::{Router, get};
use compass_model::status::Status;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(get_status)).with_state(())
}

#[utoipa::path(
    get,
    path = "/api/status",
    responses(
        (status = OK, body = Status, description = "Service liveness and version"),
    ),
    tag = "api"
)]
pub(crate) async fn get_status() -> impl IntoResponse {
    Json(Status {
        service: env!("CARGO_PKG_NAME").to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
    })
}
