// models/src/medical/audit_log.rs
use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use uuid::Uuid;

/// One attempted operation. Entries are only ever appended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AuditLog {
    pub log_id: String,
    pub timestamp_utc: DateTime<Utc>,
    pub username: String,
    pub action: String,
    pub success: bool,
    pub details: Option<String>,
}

impl AuditLog {
    pub fn new(username: &str, action: &str, success: bool, details: Option<&str>) -> Self {
        AuditLog {
            log_id: Uuid::new_v4().simple().to_string(),
            timestamp_utc: Utc::now(),
            username: username.to_string(),
            action: action.to_string(),
            success,
            details: details.map(str::to_string),
        }
    }
}
