// lib/src/initializer.rs
use std::fs;
use std::path::Path;
use log::{debug, info};
use models::errors::RecordsResult;
use models::{MedicalRecord, Patient, Role, User};
use crate::config::AppConfig;
use crate::services::PasswordHasher;
use crate::storage_engine::{
    JsonAuditLogStorage, JsonMedicalRecordStorage, JsonPatientStorage, JsonRoleStorage, JsonUserStorage,
};

/// Default accounts created on first start: (username, password, role).
pub const DEFAULT_USERS: [(&str, &str, Role); 3] = [
    ("admin1", "Admin@123", Role::Admin),
    ("doctor1", "Doctor@123", Role::Doctor),
    ("nurse1", "Nurse@123", Role::Nurse),
];

/// Creates the data directory and any missing collection file with its seed
/// content. Files that already exist are left untouched, even when empty.
pub struct DatabaseInitializer {
    config: AppConfig,
    hasher: PasswordHasher,
}

impl DatabaseInitializer {
    pub fn new(config: AppConfig) -> Self {
        let hasher = PasswordHasher::with_cost(config.bcrypt_cost);
        DatabaseInitializer { config, hasher }
    }

    /// Returns the number of files created.
    pub fn ensure_created(&self) -> RecordsResult<usize> {
        fs::create_dir_all(&self.config.data_directory)?;
        let mut created = 0;

        let roles_path = self.config.roles_path();
        if missing(&roles_path) {
            JsonRoleStorage::new(&roles_path).save(&Role::all_names())?;
            created += 1;
        }

        let users_path = self.config.users_path();
        if missing(&users_path) {
            let mut users = Vec::with_capacity(DEFAULT_USERS.len());
            for (username, password, role) in DEFAULT_USERS {
                users.push(User::new(username, self.hasher.hash(password)?, role));
            }
            JsonUserStorage::new(&users_path).save(&users)?;
            created += 1;
        }

        let patients_path = self.config.patients_path();
        if missing(&patients_path) {
            JsonPatientStorage::new(&patients_path).save(&[
                Patient::new("P-1001", "Alice Smith", "1985-07-12"),
                Patient::new("P-1002", "Bayo Ade", "1990-02-03"),
            ])?;
            created += 1;
        }

        let records_path = self.config.medical_records_path();
        if missing(&records_path) {
            JsonMedicalRecordStorage::new(&records_path).save(&[MedicalRecord::new(
                "R-2001",
                "P-1001",
                "2025-08-01",
                "Hypertension | Lisinopril 10mg",
            )])?;
            created += 1;
        }

        let audit_path = self.config.audit_logs_path();
        if missing(&audit_path) {
            JsonAuditLogStorage::new(&audit_path).save(&[])?;
            created += 1;
        }

        if created > 0 {
            info!("Seeded {} data file(s) in {}", created, self.config.data_directory.display());
        } else {
            debug!("All data files present in {}", self.config.data_directory.display());
        }
        Ok(created)
    }
}

fn missing(path: &Path) -> bool {
    !path.exists()
}
