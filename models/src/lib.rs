// models/src/lib.rs

pub mod entity;
pub mod errors;
pub mod util;
pub mod medical;

// Re-export common types for convenience when other crates use 'models::*'
pub use entity::StoredEntity;
pub use errors::{RecordsError, RecordsResult};
pub use medical::{AuditLog, MedicalRecord, Patient, Role, User};
