// models/src/medical/medical_record.rs
use serde::{Serialize, Deserialize};
use crate::entity::StoredEntity;

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MedicalRecord {
    pub record_id: String,
    /// References a Patient id. Not enforced as a foreign key.
    pub patient_id: String,
    pub record_date: String,
    /// Diagnosis and treatment, conventionally "<diagnosis> | <treatment>".
    pub description: String,
}

impl MedicalRecord {
    pub fn new(
        record_id: impl Into<String>,
        patient_id: impl Into<String>,
        record_date: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        MedicalRecord {
            record_id: record_id.into(),
            patient_id: patient_id.into(),
            record_date: record_date.into(),
            description: description.into(),
        }
    }
}

impl StoredEntity for MedicalRecord {
    const ENTITY_NAME: &'static str = "MedicalRecord";
    const KEY_NAME: &'static str = "RecordId";

    fn key(&self) -> &str {
        &self.record_id
    }
}
