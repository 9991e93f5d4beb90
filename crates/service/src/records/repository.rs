use async_trait::async_trait;
use chrono::{DateTime, Utc};
use models::{MaintenanceRecord, RecordInput, RecordPatch};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::records::Replaced;
use crate::storage::memory_map_store::MemoryMapStore;

/// Trait abstraction for maintenance record storage.
///
/// Every method is a single atomic step: `replace` decides between overwrite
/// and insert, and `patch` reads and writes, without another caller observing
/// an intermediate state.
#[async_trait]
pub trait RecordRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<MaintenanceRecord>, ServiceError>;
    async fn get(&self, id: Uuid) -> Result<Option<MaintenanceRecord>, ServiceError>;
    async fn insert(&self, record: MaintenanceRecord) -> Result<(), ServiceError>;
    async fn replace(&self, id: Uuid, input: RecordInput, now: DateTime<Utc>) -> Result<Replaced, ServiceError>;
    async fn patch(&self, id: Uuid, patch: RecordPatch, now: DateTime<Utc>) -> Result<Option<MaintenanceRecord>, ServiceError>;
    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError>;
}

/// Process-memory repository. Starts empty; contents are lost on shutdown.
#[derive(Clone, Default)]
pub struct MemoryRecordRepository {
    store: MemoryMapStore<Uuid, MaintenanceRecord>,
}

impl MemoryRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordRepository for MemoryRecordRepository {
    async fn list(&self) -> Result<Vec<MaintenanceRecord>, ServiceError> {
        Ok(self.store.list().await.into_iter().map(|(_, v)| v).collect())
    }

    async fn get(&self, id: Uuid) -> Result<Option<MaintenanceRecord>, ServiceError> {
        Ok(self.store.get(&id).await)
    }

    async fn insert(&self, record: MaintenanceRecord) -> Result<(), ServiceError> {
        self.store.insert(record.id, record).await;
        Ok(())
    }

    async fn replace(&self, id: Uuid, input: RecordInput, now: DateTime<Utc>) -> Result<Replaced, ServiceError> {
        let (record, existed) = self
            .store
            .upsert_with(id, |current| match current {
                Some(prev) => prev.replaced(input, now),
                None => MaintenanceRecord::new(id, input, now),
            })
            .await;
        Ok(if existed { Replaced::Updated(record) } else { Replaced::Created(record) })
    }

    async fn patch(&self, id: Uuid, patch: RecordPatch, now: DateTime<Utc>) -> Result<Option<MaintenanceRecord>, ServiceError> {
        Ok(self
            .store
            .update(&id, |rec| {
                rec.apply(patch, now);
                rec.clone()
            })
            .await)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        Ok(self.store.remove(&id).await.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn input(name: &str) -> RecordInput {
        RecordInput {
            equipment_name: name.into(),
            description: "leak".into(),
            priority: "high".into(),
            status: "open".into(),
            technician: "Jo".into(),
            department: "Plant".into(),
        }
    }

    #[tokio::test]
    async fn replace_distinguishes_created_and_updated() -> anyhow::Result<()> {
        let repo = MemoryRecordRepository::new();
        let id = Uuid::new_v4();
        let t0 = Utc::now();

        let first = repo.replace(id, input("Pump-1"), t0).await?;
        assert!(first.was_created());
        let first = first.into_record();
        assert_eq!(first.id, id);
        assert_eq!(first.created_at, t0);

        let t1 = t0 + Duration::seconds(3);
        let second = repo.replace(id, input("Pump-2"), t1).await?;
        assert!(!second.was_created());
        let rec = second.into_record();
        assert_eq!(rec.created_at, t0);
        assert_eq!(rec.updated_at, t1);
        assert_eq!(rec.equipment_name, "Pump-2");
        assert_eq!(repo.list().await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn patch_missing_returns_none_and_leaves_store_untouched() -> anyhow::Result<()> {
        let repo = MemoryRecordRepository::new();
        let out = repo.patch(Uuid::new_v4(), RecordPatch::default(), Utc::now()).await?;
        assert!(out.is_none());
        assert!(repo.list().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn list_follows_insertion_order() -> anyhow::Result<()> {
        let repo = MemoryRecordRepository::new();
        let now = Utc::now();
        let mut ids = Vec::new();
        for name in ["a", "b", "c"] {
            let rec = MaintenanceRecord::new(Uuid::new_v4(), input(name), now);
            ids.push(rec.id);
            repo.insert(rec).await?;
        }
        let upserted = Uuid::new_v4();
        repo.replace(upserted, input("d"), now).await?;
        repo.replace(ids[0], input("a2"), now).await?;
        ids.push(upserted);

        let listed: Vec<Uuid> = repo.list().await?.into_iter().map(|r| r.id).collect();
        assert_eq!(listed, ids);
        Ok(())
    }

    #[tokio::test]
    async fn delete_reports_existence() -> anyhow::Result<()> {
        let repo = MemoryRecordRepository::new();
        let rec = MaintenanceRecord::new(Uuid::new_v4(), input("x"), Utc::now());
        repo.insert(rec.clone()).await?;
        assert!(repo.delete(rec.id).await?);
        assert!(!repo.delete(rec.id).await?);
        assert!(repo.get(rec.id).await?.is_none());
        Ok(())
    }
}
