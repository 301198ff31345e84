// lib/src/database.rs
//! One handle over every collection in the data directory. Stores are built
//! once and shared, so each file has exactly one lock in the process.

use std::sync::Arc;
use log::info;
use models::errors::RecordsResult;
use crate::config::AppConfig;
use crate::initializer::DatabaseInitializer;
use crate::security::{MedicalRecordRepositoryProxy, PatientRepositoryProxy, Session};
use crate::services::{AuditLogService, AuthService, PasswordHasher};
use crate::storage_engine::{
    JsonAuditLogStorage, JsonMedicalRecordStorage, JsonPatientStorage, JsonRoleStorage, JsonUserStorage,
};

#[derive(Clone)]
pub struct Database {
    config: AppConfig,
    patients: Arc<JsonPatientStorage>,
    records: Arc<JsonMedicalRecordStorage>,
    users: Arc<JsonUserStorage>,
    roles: Arc<JsonRoleStorage>,
    audit_logs: Arc<JsonAuditLogStorage>,
}

impl Database {
    /// Validates the config and wires the stores. Seeds missing files when
    /// `seed_on_startup` is set.
    pub fn open(config: AppConfig) -> RecordsResult<Self> {
        config.validate()?;
        if config.seed_on_startup {
            DatabaseInitializer::new(config.clone()).ensure_created()?;
        }

        let db = Database {
            patients: Arc::new(JsonPatientStorage::new(config.patients_path())),
            records: Arc::new(JsonMedicalRecordStorage::new(config.medical_records_path())),
            users: Arc::new(JsonUserStorage::new(config.users_path())),
            roles: Arc::new(JsonRoleStorage::new(config.roles_path())),
            audit_logs: Arc::new(JsonAuditLogStorage::new(config.audit_logs_path())),
            config,
        };
        info!("Opened patient records database at {}", db.config.data_directory.display());
        Ok(db)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn patients(&self) -> Arc<JsonPatientStorage> {
        Arc::clone(&self.patients)
    }

    pub fn records(&self) -> Arc<JsonMedicalRecordStorage> {
        Arc::clone(&self.records)
    }

    pub fn users(&self) -> Arc<JsonUserStorage> {
        Arc::clone(&self.users)
    }

    pub fn roles(&self) -> Arc<JsonRoleStorage> {
        Arc::clone(&self.roles)
    }

    pub fn audit_logs(&self) -> Arc<JsonAuditLogStorage> {
        Arc::clone(&self.audit_logs)
    }

    pub fn audit_service(&self) -> AuditLogService {
        AuditLogService::new(self.audit_logs.clone())
    }

    pub fn password_hasher(&self) -> PasswordHasher {
        PasswordHasher::with_cost(self.config.bcrypt_cost)
    }

    pub fn auth_service(&self) -> AuthService {
        AuthService::new(
            self.users.clone(),
            self.roles.clone(),
            self.audit_service(),
            self.password_hasher(),
        )
    }

    pub fn patient_proxy(&self, session: &Session) -> PatientRepositoryProxy {
        PatientRepositoryProxy::new(session.clone(), self.patients.clone(), self.audit_service())
    }

    pub fn record_proxy(&self, session: &Session) -> MedicalRecordRepositoryProxy {
        MedicalRecordRepositoryProxy::new(session.clone(), self.records.clone(), self.audit_service())
    }
}
