//! Service layer for maintenance records.
//! - `storage` holds the generic in-memory map the records live in.
//! - `records` exposes the repository abstraction and the business-facing
//!   `RecordService` used by the HTTP handlers.

pub mod errors;
pub mod records;
pub mod storage;
