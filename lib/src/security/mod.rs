// lib/src/security/mod.rs
//! Role-based access control: the permission table, the session that carries
//! the caller's role, and the protection proxies that enforce both.

pub mod access_guard;
pub mod medical_record_proxy;
pub mod patient_proxy;
pub mod permissions;
pub mod session;

pub use access_guard::AccessGuard;
pub use medical_record_proxy::MedicalRecordRepositoryProxy;
pub use patient_proxy::PatientRepositoryProxy;
pub use permissions::{allowed_roles, denial_message, is_allowed, Operation};
pub use session::Session;
