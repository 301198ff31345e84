// lib/src/config/config_structs.rs
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use models::errors::{RecordsError, RecordsResult};
use models::util::is_blank;
use crate::config::config_constants::*;

/// Where the JSON collections live and how passwords are hashed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data_directory: PathBuf,
    pub patients_file: String,
    pub medical_records_file: String,
    pub users_file: String,
    pub roles_file: String,
    pub audit_logs_file: String,
    pub bcrypt_cost: u32,
    /// Create missing data files with seed content at startup.
    pub seed_on_startup: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            data_directory: PathBuf::from(DEFAULT_DATA_DIRECTORY),
            patients_file: DEFAULT_PATIENTS_FILE.to_string(),
            medical_records_file: DEFAULT_MEDICAL_RECORDS_FILE.to_string(),
            users_file: DEFAULT_USERS_FILE.to_string(),
            roles_file: DEFAULT_ROLES_FILE.to_string(),
            audit_logs_file: DEFAULT_AUDIT_LOGS_FILE.to_string(),
            bcrypt_cost: bcrypt::DEFAULT_COST,
            seed_on_startup: true,
        }
    }
}

/// Root of the YAML file: everything sits under an `app:` key.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppConfigWrapper {
    #[serde(default)]
    pub app: AppConfig,
}

impl AppConfig {
    /// Default layout rooted at `data_directory`.
    pub fn with_data_directory(data_directory: impl AsRef<Path>) -> Self {
        AppConfig {
            data_directory: data_directory.as_ref().to_path_buf(),
            ..AppConfig::default()
        }
    }

    pub fn patients_path(&self) -> PathBuf {
        self.data_directory.join(&self.patients_file)
    }

    pub fn medical_records_path(&self) -> PathBuf {
        self.data_directory.join(&self.medical_records_file)
    }

    pub fn users_path(&self) -> PathBuf {
        self.data_directory.join(&self.users_file)
    }

    pub fn roles_path(&self) -> PathBuf {
        self.data_directory.join(&self.roles_file)
    }

    pub fn audit_logs_path(&self) -> PathBuf {
        self.data_directory.join(&self.audit_logs_file)
    }

    pub fn validate(&self) -> RecordsResult<()> {
        if self.data_directory.as_os_str().is_empty() {
            return Err(RecordsError::ConfigurationError("data_directory must not be empty".to_string()));
        }
        let files = [
            ("patients_file", &self.patients_file),
            ("medical_records_file", &self.medical_records_file),
            ("users_file", &self.users_file),
            ("roles_file", &self.roles_file),
            ("audit_logs_file", &self.audit_logs_file),
        ];
        for (field, value) in files {
            if is_blank(value) {
                return Err(RecordsError::ConfigurationError(format!("{} must not be blank", field)));
            }
        }
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.bcrypt_cost) {
            return Err(RecordsError::ConfigurationError(format!(
                "bcrypt_cost must be between {} and {}, got {}",
                MIN_BCRYPT_COST, MAX_BCRYPT_COST, self.bcrypt_cost
            )));
        }
        Ok(())
    }
}
