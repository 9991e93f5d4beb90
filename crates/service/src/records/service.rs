use std::sync::Arc;

use chrono::Utc;
use models::{MaintenanceRecord, RecordInput, RecordPatch};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::records::{RecordRepository, Replaced};

/// Application service for maintenance records.
/// Assigns identifiers and timestamps and turns absent ids into `NotFound`.
pub struct RecordService<R: RecordRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: RecordRepository + ?Sized> RecordService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip_all)]
    pub async fn create(&self, input: RecordInput) -> Result<MaintenanceRecord, ServiceError> {
        let record = MaintenanceRecord::new(Uuid::new_v4(), input, Utc::now());
        self.repo.insert(record.clone()).await?;
        info!(id = %record.id, equipment = %record.equipment_name, "record_created");
        Ok(record)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> Result<MaintenanceRecord, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| not_found(id))
    }

    pub async fn list(&self) -> Result<Vec<MaintenanceRecord>, ServiceError> {
        let records = self.repo.list().await?;
        info!(count = records.len(), "list records");
        Ok(records)
    }

    /// Full replace. Creates the record under `id` when it does not exist yet.
    #[instrument(skip(self, input))]
    pub async fn replace(&self, id: Uuid, input: RecordInput) -> Result<Replaced, ServiceError> {
        let outcome = self.repo.replace(id, input, Utc::now()).await?;
        info!(id = %id, created = outcome.was_created(), "record_replaced");
        Ok(outcome)
    }

    #[instrument(skip(self, patch), fields(fields = patch.len()))]
    pub async fn patch(&self, id: Uuid, patch: RecordPatch) -> Result<MaintenanceRecord, ServiceError> {
        let record = self.repo.patch(id, patch, Utc::now()).await?.ok_or_else(|| not_found(id))?;
        info!(id = %id, "record_patched");
        Ok(record)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(not_found(id));
        }
        info!(id = %id, "record_deleted");
        Ok(())
    }
}

fn not_found(id: Uuid) -> ServiceError {
    warn!(id = %id, "record not found");
    ServiceError::NotFound(id)
}
