// lib/src/security/access_guard.rs
use log::warn;
use models::errors::{RecordsError, RecordsResult};
use crate::security::permissions::{denial_message, Operation};
use crate::security::session::Session;
use crate::services::AuditLogService;

/// Check, audit, then allow or refuse. Shared by both proxies.
#[derive(Clone)]
pub struct AccessGuard {
    session: Session,
    audit: AuditLogService,
}

impl AccessGuard {
    pub fn new(session: Session, audit: AuditLogService) -> Self {
        AccessGuard { session, audit }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The attempt is written to the audit log before the caller is told the
    /// outcome. A refused attempt never reaches storage.
    pub fn check(&self, op: Operation, action: &str) -> RecordsResult<()> {
        let allowed = self.session.can(op);
        if allowed {
            self.audit.log(self.session.username(), action, true, None)?;
            return Ok(());
        }

        let message = denial_message(op);
        self.audit.log(self.session.username(), action, false, Some(message.as_str()))?;
        warn!(
            "Denied {} for {} ({})",
            action,
            self.session.username(),
            self.session.role()
        );
        Err(RecordsError::Authorization(message))
    }
}
