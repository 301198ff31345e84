// lib/src/config/config_constants.rs

pub const DEFAULT_DATA_DIRECTORY: &str = "data";
pub const DEFAULT_APP_CONFIG_PATH_RELATIVE: &str = "./config/medrecords_config.yaml";

pub const DEFAULT_PATIENTS_FILE: &str = "patients.json";
pub const DEFAULT_MEDICAL_RECORDS_FILE: &str = "medicalrecords.json";
pub const DEFAULT_USERS_FILE: &str = "users.json";
pub const DEFAULT_ROLES_FILE: &str = "roles.json";
pub const DEFAULT_AUDIT_LOGS_FILE: &str = "auditlogs.json";

pub const MIN_BCRYPT_COST: u32 = 4;
pub const MAX_BCRYPT_COST: u32 = 31;
