// lib/src/storage_engine/audit_log_storage.rs
use std::path::PathBuf;
use models::errors::RecordsResult;
use models::AuditLog;
use crate::storage_engine::json_store::{Change, JsonFileStore};
use crate::storage_engine::repository::AuditLogRepository;

/// Append-only from the outside; internally the whole file is rewritten.
#[derive(Debug)]
pub struct JsonAuditLogStorage {
    store: JsonFileStore<AuditLog>,
}

impl JsonAuditLogStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonAuditLogStorage { store: JsonFileStore::new(path) }
    }

    pub fn save(&self, logs: &[AuditLog]) -> RecordsResult<()> {
        self.store.save(logs)
    }
}

impl AuditLogRepository for JsonAuditLogStorage {
    fn append(&self, entry: &AuditLog) -> RecordsResult<()> {
        self.store.mutate(|logs| {
            logs.push(entry.clone());
            Ok(Change::Persist(()))
        })
    }

    fn get_all(&self) -> RecordsResult<Vec<AuditLog>> {
        self.store.load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn append_preserves_earlier_entries() {
        let dir = tempdir().unwrap();
        let audit = JsonAuditLogStorage::new(dir.path().join("auditlogs.json"));
        audit.append(&AuditLog::new("doctor1", "Authenticate", true, None)).unwrap();
        audit.append(&AuditLog::new("nurse1", "AddPatient(PX-1)", false, Some("denied"))).unwrap();

        let logs = audit.get_all().unwrap();
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].username, "doctor1");
        assert_eq!(logs[1].details.as_deref(), Some("denied"));
        assert!(!logs[1].success);
    }
}
