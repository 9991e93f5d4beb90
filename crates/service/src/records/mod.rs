//! Maintenance record storage and business rules.

pub mod repository;
pub mod service;

use models::MaintenanceRecord;

pub use repository::{MemoryRecordRepository, RecordRepository};
pub use service::RecordService;

/// Outcome of a full replace: the same operation both overwrites and upserts,
/// and callers need to tell the two apart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Replaced {
    Updated(MaintenanceRecord),
    Created(MaintenanceRecord),
}

impl Replaced {
    pub fn was_created(&self) -> bool {
        matches!(self, Replaced::Created(_))
    }

    pub fn into_record(self) -> MaintenanceRecord {
        match self {
            Replaced::Updated(r) | Replaced::Created(r) => r,
        }
    }
}
