// models/src/medical/user.rs
use serde::{Serialize, Deserialize};
use uuid::Uuid;
use crate::entity::StoredEntity;
use crate::medical::Role;

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    /// Opaque identifier, generated once at creation.
    pub id: String,
    pub username: String,
    /// Bcrypt hash of the user's password.
    pub password_hash: String,
    pub role: Role,
}

impl User {
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>, role: Role) -> Self {
        User {
            id: Uuid::new_v4().simple().to_string(),
            username: username.into(),
            password_hash: password_hash.into(),
            role,
        }
    }
}

impl StoredEntity for User {
    const ENTITY_NAME: &'static str = "User";
    const KEY_NAME: &'static str = "Username";

    fn key(&self) -> &str {
        &self.username
    }
}
