// lib/src/storage_engine/repository.rs
//! Repository contracts. The JSON stores implement them, and the
//! access-control proxies implement the patient and record contracts too, so
//! callers cannot tell a guarded repository from a raw one.

use models::errors::RecordsResult;
use models::{AuditLog, MedicalRecord, Patient, User};

pub trait PatientRepository: Send + Sync {
    /// `Ok(None)` when no patient has that id.
    fn get_patient_by_id(&self, id: &str) -> RecordsResult<Option<Patient>>;
    fn add_patient(&self, patient: &Patient) -> RecordsResult<()>;
    fn update_patient(&self, patient: &Patient) -> RecordsResult<()>;
    /// Lenient: deleting an unknown id is not an error.
    fn delete_patient(&self, id: &str) -> RecordsResult<()>;
    /// Case-insensitive substring match on name. A blank filter returns everyone.
    fn search_patients(&self, name_filter: &str) -> RecordsResult<Vec<Patient>>;
}

pub trait MedicalRecordRepository: Send + Sync {
    fn add_record(&self, record: &MedicalRecord) -> RecordsResult<()>;
    fn get_records_by_patient_id(&self, patient_id: &str) -> RecordsResult<Vec<MedicalRecord>>;
    /// Lenient: deleting an unknown record id is not an error.
    fn delete_record(&self, record_id: &str) -> RecordsResult<()>;
}

pub trait UserRepository: Send + Sync {
    fn get_by_username(&self, username: &str) -> RecordsResult<Option<User>>;
    fn get_all(&self) -> RecordsResult<Vec<User>>;
    fn upsert(&self, user: &User) -> RecordsResult<()>;
    /// Adds a new user. Fails with `DuplicateUsername` when the name is
    /// already taken; the check and the write happen under one lock.
    fn insert(&self, user: &User) -> RecordsResult<()>;
}

pub trait RoleRepository: Send + Sync {
    fn get_all_roles(&self) -> RecordsResult<Vec<String>>;
}

pub trait AuditLogRepository: Send + Sync {
    fn append(&self, entry: &AuditLog) -> RecordsResult<()>;
    fn get_all(&self) -> RecordsResult<Vec<AuditLog>>;
}
