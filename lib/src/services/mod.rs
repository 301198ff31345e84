// lib/src/services/mod.rs
pub mod audit_service;
pub mod auth_service;
pub mod password_hasher;

pub use audit_service::AuditLogService;
pub use auth_service::AuthService;
pub use password_hasher::PasswordHasher;
