use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A single equipment maintenance ticket.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct MaintenanceRecord {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub equipment_name: String,
    pub description: String,
    pub priority: String,
    pub status: String,
    pub technician: String,
    pub department: String,
}

/// Create/replace payload. Identifier and timestamps are server-assigned,
/// so they are not part of the input and are ignored if sent.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct RecordInput {
    pub equipment_name: String,
    pub description: String,
    pub priority: String,
    pub status: String,
    pub technician: String,
    pub department: String,
}

/// Partial update payload.
///
/// `None` means the field was omitted and stays untouched; `Some` overwrites,
/// including `Some(String::new())`. A JSON `null` is rejected since record
/// fields are not nullable.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct RecordPatch {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub equipment_name: Option<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub technician: Option<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

// Only reached when the key is present; `default` covers the omitted case.
fn present<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(Some)
}

impl MaintenanceRecord {
    /// Build a fresh record: both timestamps are `now`.
    pub fn new(id: Uuid, input: RecordInput, now: DateTime<Utc>) -> Self {
        Self {
            id,
            created_at: now,
            updated_at: now,
            equipment_name: input.equipment_name,
            description: input.description,
            priority: input.priority,
            status: input.status,
            technician: input.technician,
            department: input.department,
        }
    }

    /// Full replacement of the text fields. `id` and `created_at` carry over.
    pub fn replaced(&self, input: RecordInput, now: DateTime<Utc>) -> Self {
        let mut next = Self::new(self.id, input, now);
        next.created_at = self.created_at;
        next.updated_at = now.max(self.created_at);
        next
    }

    /// Overwrite the fields set in `patch` and refresh `updated_at`.
    pub fn apply(&mut self, patch: RecordPatch, now: DateTime<Utc>) {
        let RecordPatch { equipment_name, description, priority, status, technician, department } = patch;
        if let Some(v) = equipment_name { self.equipment_name = v; }
        if let Some(v) = description { self.description = v; }
        if let Some(v) = priority { self.priority = v; }
        if let Some(v) = status { self.status = v; }
        if let Some(v) = technician { self.technician = v; }
        if let Some(v) = department { self.department = v; }
        self.updated_at = now.max(self.created_at);
    }
}

impl RecordPatch {
    /// Number of fields explicitly set.
    pub fn len(&self) -> usize {
        [
            &self.equipment_name,
            &self.description,
            &self.priority,
            &self.status,
            &self.technician,
            &self.department,
        ]
        .iter()
        .filter(|f| f.is_some())
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
