pub(crate) mod api;
mod docs;

use axum::Router;

pub(crate) fn create_router() -> Router {
    Router::new()
        .nest("/api", api::create_router())
        .merge(docs::create_router())
}
