// lib/src/lib.rs
// Storage, services and access control for the patient records system.

pub mod config;
pub mod database;
pub mod initializer;
pub mod security;
pub mod services;
pub mod storage_engine;

pub use config::{load_app_config, AppConfig};
pub use database::Database;
pub use initializer::DatabaseInitializer;
pub use security::{MedicalRecordRepositoryProxy, Operation, PatientRepositoryProxy, Session};
pub use services::{AuditLogService, AuthService, PasswordHasher};
pub use storage_engine::{
    AuditLogRepository, MedicalRecordRepository, PatientRepository, RoleRepository, UserRepository,
};

// Re-export the entity types so callers only need this crate.
pub use models::{AuditLog, MedicalRecord, Patient, RecordsError, RecordsResult, Role, User};
