pub(crate) mod assess;
pub(crate) mod status;

use axum::Router;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .nest("/assess", assess::create_router())
        .nest("/status", status::create_router())
}
