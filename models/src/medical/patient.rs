// models/src/medical/patient.rs
use serde::{Serialize, Deserialize};
use crate::entity::StoredEntity;

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Patient {
    pub id: String,
    pub name: String,
    /// ISO date (YYYY-MM-DD). Kept as entered.
    pub date_of_birth: String,
}

impl Patient {
    pub fn new(id: impl Into<String>, name: impl Into<String>, date_of_birth: impl Into<String>) -> Self {
        Patient {
            id: id.into(),
            name: name.into(),
            date_of_birth: date_of_birth.into(),
        }
    }
}

impl StoredEntity for Patient {
    const ENTITY_NAME: &'static str = "Patient";
    const KEY_NAME: &'static str = "Id";

    fn key(&self) -> &str {
        &self.id
    }
}
