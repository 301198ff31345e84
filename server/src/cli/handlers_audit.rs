// server/src/cli/handlers_audit.rs
use lib::AuditLogService;
use models::util::eq_ignore_case;
use models::AuditLog;
use crate::cli::handlers_utils::render_error;

/// Filters for the `audit` subcommand.
#[derive(Debug, Clone, Default)]
pub struct AuditFilter {
    pub user: Option<String>,
    pub failures_only: bool,
    /// Keep only the last `n` matching entries.
    pub limit: Option<usize>,
}

pub fn filter_entries(entries: Vec<AuditLog>, filter: &AuditFilter) -> Vec<AuditLog> {
    let mut kept: Vec<AuditLog> = entries
        .into_iter()
        .filter(|e| filter.user.as_deref().map_or(true, |u| eq_ignore_case(&e.username, u)))
        .filter(|e| !filter.failures_only || !e.success)
        .collect();
    if let Some(limit) = filter.limit {
        if kept.len() > limit {
            kept.drain(..kept.len() - limit);
        }
    }
    kept
}

pub fn format_entry(entry: &AuditLog) -> String {
    let outcome = if entry.success { "OK" } else { "DENIED" };
    let mut line = format!(
        "{} {} {} {}",
        entry.timestamp_utc.format("%Y-%m-%d %H:%M:%S"),
        entry.username,
        entry.action,
        outcome
    );
    if let Some(details) = &entry.details {
        line.push_str(&format!(" ({})", details));
    }
    line
}

pub fn handle_audit(audit: &AuditLogService, filter: &AuditFilter) -> String {
    match audit.entries() {
        Ok(entries) => {
            let kept = filter_entries(entries, filter);
            if kept.is_empty() {
                return "No audit entries.".to_string();
            }
            kept.iter().map(format_entry).collect::<Vec<_>>().join("\n")
        }
        Err(e) => render_error(&e),
    }
}
