// models/src/medical/mod.rs
pub mod audit_log;
pub mod medical_record;
pub mod patient;
pub mod role;
pub mod user;

pub use audit_log::AuditLog;
pub use medical_record::MedicalRecord;
pub use patient::Patient;
pub use role::Role;
pub use user::User;
