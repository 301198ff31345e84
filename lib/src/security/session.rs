// lib/src/security/session.rs
use models::{Role, User};
use crate::security::permissions::{is_allowed, Operation};

/// The authenticated caller. The role is captured once; a different role
/// needs a new session and new proxies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    username: String,
    role: Role,
}

impl Session {
    pub fn new(user: &User) -> Self {
        Session {
            username: user.username.clone(),
            role: user.role,
        }
    }

    pub fn for_role(username: impl Into<String>, role: Role) -> Self {
        Session { username: username.into(), role }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn can(&self, op: Operation) -> bool {
        is_allowed(self.role, op)
    }
}
