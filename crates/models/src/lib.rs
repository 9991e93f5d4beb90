//! Data types of the maintenance records service.
//!
//! These are plain values: construction and mutation rules for a record live
//! here, storage and concurrency live in the `service` crate.

pub mod record;

pub use record::{MaintenanceRecord, RecordInput, RecordPatch};
