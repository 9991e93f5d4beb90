use std::sync::Arc;

use service::records::{MemoryRecordRepository, RecordRepository, RecordService};

/// Shared handler state. Cloning is cheap; every clone points at the same store.
#[derive(Clone)]
pub struct ServerState {
    pub records: Arc<RecordService<dyn RecordRepository>>,
}

impl ServerState {
    pub fn new(repo: Arc<dyn RecordRepository>) -> Self {
        Self { records: Arc::new(RecordService::new(repo)) }
    }

    /// State backed by an empty process-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryRecordRepository::new()))
    }
}
