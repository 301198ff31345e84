// lib/src/services/audit_service.rs
use std::sync::Arc;
use log::debug;
use models::errors::RecordsResult;
use models::AuditLog;
use crate::storage_engine::AuditLogRepository;

/// Records who attempted what. Failing to persist an entry is reported to the
/// caller as a storage error, never swallowed.
#[derive(Clone)]
pub struct AuditLogService {
    repo: Arc<dyn AuditLogRepository>,
}

impl AuditLogService {
    pub fn new(repo: Arc<dyn AuditLogRepository>) -> Self {
        AuditLogService { repo }
    }

    pub fn log(&self, username: &str, action: &str, success: bool, details: Option<&str>) -> RecordsResult<()> {
        let entry = AuditLog::new(username, action, success, details);
        debug!("Audit: user={} action={} success={}", username, action, success);
        self.repo.append(&entry)
    }

    pub fn entries(&self) -> RecordsResult<Vec<AuditLog>> {
        self.repo.get_all()
    }
}
