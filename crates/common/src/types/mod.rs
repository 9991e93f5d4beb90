use serde::Serialize;
use utoipa::ToSchema;

/// Liveness payload returned by `GET /health`.
#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct Health {
    pub status: String,
}

impl Health {
    pub fn ok() -> Self {
        Self { status: "ok".to_string() }
    }
}
