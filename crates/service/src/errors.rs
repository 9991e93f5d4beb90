use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("record {0} not found")]
    NotFound(Uuid),
    /// Backend failure reported by a `RecordRepository`. The in-memory
    /// repository never fails.
    #[error("storage error: {0}")]
    Storage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_mentions_id() {
        let id = Uuid::new_v4();
        assert!(ServiceError::NotFound(id).to_string().contains(&id.to_string()));
    }
}
