use super::api;
use axum::Json;
use axum::Router;
use axum::routing::get;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(api::assess::assess, api::status::get_status),
    tags((name = "api", description = "Platform maturity assessment API"))
)]
struct ApiDoc;

pub(crate) fn create_router() -> Router {
    Router::new().route("/api/openapi.json", get(openapi))
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
