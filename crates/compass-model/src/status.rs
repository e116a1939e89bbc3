use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Liveness reply of the relay.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct Status {
    pub service: String,
    pub version: String,
}
