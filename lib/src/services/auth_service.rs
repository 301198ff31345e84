// lib/src/services/auth_service.rs
use std::sync::Arc;
use log::{info, warn};
use models::errors::{RecordsError, RecordsResult};
use models::util::is_blank;
use models::{Role, User};
use crate::services::audit_service::AuditLogService;
use crate::services::password_hasher::PasswordHasher;
use crate::storage_engine::{RoleRepository, UserRepository};

pub const AUTHENTICATE_ACTION: &str = "Authenticate";
pub const REGISTER_ACTION: &str = "Register";

#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    roles: Arc<dyn RoleRepository>,
    audit: AuditLogService,
    hasher: PasswordHasher,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        roles: Arc<dyn RoleRepository>,
        audit: AuditLogService,
        hasher: PasswordHasher,
    ) -> Self {
        AuthService { users, roles, audit, hasher }
    }

    /// Returns the user when the credentials match. Bad credentials are
    /// `Ok(None)`; the attempt is always audited under the supplied username.
    pub fn authenticate(&self, username: &str, password: &str) -> RecordsResult<Option<User>> {
        let user = self.users.get_by_username(username)?;
        let ok = user
            .as_ref()
            .map(|u| self.hasher.verify(password, &u.password_hash))
            .unwrap_or(false);

        self.audit.log(username, AUTHENTICATE_ACTION, ok, None)?;

        if ok {
            info!("User {} authenticated", username);
            Ok(user)
        } else {
            warn!("Failed authentication attempt for {}", username);
            Ok(None)
        }
    }

    pub fn register(&self, username: &str, password: &str, role: &str) -> RecordsResult<User> {
        if !self.roles.get_all_roles()?.iter().any(|r| r == role) {
            return Err(RecordsError::InvalidRole(role.to_string()));
        }
        let role: Role = role.parse()?;

        if is_blank(username) || is_blank(password) {
            return Err(RecordsError::Validation("Username and password required".to_string()));
        }
        if self.users.get_by_username(username)?.is_some() {
            return Err(RecordsError::DuplicateUsername(username.to_string()));
        }

        // Rechecked under the store lock by `insert`.
        let user = User::new(username, self.hasher.hash(password)?, role);
        self.users.insert(&user)?;
        self.audit.log(username, REGISTER_ACTION, true, None)?;
        info!("Registered user {} with role {}", user.username, user.role);
        Ok(user)
    }
}
