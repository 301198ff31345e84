// lib/src/storage_engine/mod.rs
// One JSON file per entity collection, each guarded by its own in-process lock.

pub mod json_store;
pub mod repository;
pub mod patient_storage;
pub mod medical_record_storage;
pub mod user_storage;
pub mod role_storage;
pub mod audit_log_storage;

pub use json_store::{Change, JsonFileStore};
pub use repository::{
    AuditLogRepository, MedicalRecordRepository, PatientRepository, RoleRepository, UserRepository,
};
pub use patient_storage::JsonPatientStorage;
pub use medical_record_storage::JsonMedicalRecordStorage;
pub use user_storage::JsonUserStorage;
pub use role_storage::JsonRoleStorage;
pub use audit_log_storage::JsonAuditLogStorage;
