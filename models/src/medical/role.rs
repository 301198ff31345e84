// models/src/medical/role.rs
use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use crate::errors::RecordsError;

/// The closed set of roles. Every authorization decision is made on this value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Doctor,
    /// Least access; the role a user gets when none is specified.
    #[default]
    Nurse,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Doctor, Role::Nurse];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Doctor => "Doctor",
            Role::Nurse => "Nurse",
        }
    }

    /// Role names as persisted in the roles reference file.
    pub fn all_names() -> Vec<String> {
        Role::ALL.iter().map(|r| r.as_str().to_string()).collect()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RecordsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .iter()
            .copied()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| RecordsError::InvalidRole(s.to_string()))
    }
}
