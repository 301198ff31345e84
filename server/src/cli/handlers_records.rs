// server/src/cli/handlers_records.rs
use lib::MedicalRecordRepository;
use models::MedicalRecord;
use crate::cli::handlers_utils::render_error;

/// Fields collected by the "add medical record" form.
#[derive(Debug, Clone, Default)]
pub struct RecordForm {
    pub patient_id: String,
    pub record_id: String,
    pub record_date: String,
    pub diagnosis: String,
    pub treatment: String,
}

impl RecordForm {
    pub fn description(&self) -> String {
        format!("{} | {}", self.diagnosis, self.treatment)
    }

    pub fn to_record(&self) -> MedicalRecord {
        MedicalRecord::new(&self.record_id, &self.patient_id, &self.record_date, self.description())
    }
}

pub fn handle_add_record(repo: &dyn MedicalRecordRepository, form: &RecordForm) -> String {
    match repo.add_record(&form.to_record()) {
        Ok(()) => "Medical record added.".to_string(),
        Err(e) => render_error(&e),
    }
}

pub fn handle_view_records(repo: &dyn MedicalRecordRepository, patient_id: &str) -> String {
    match repo.get_records_by_patient_id(patient_id) {
        Ok(records) => {
            let mut out = format!("Found {} record(s).", records.len());
            for r in &records {
                out.push_str(&format!("\n{} - {} - {}", r.record_id, r.record_date, r.description));
            }
            out
        }
        Err(e) => render_error(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use lib::storage_engine::{JsonAuditLogStorage, JsonMedicalRecordStorage};
    use lib::{AuditLogService, MedicalRecordRepositoryProxy, Role, Session};
    use tempfile::tempdir;

    fn form() -> RecordForm {
        RecordForm {
            patient_id: "P-1001".to_string(),
            record_id: "R-3000".to_string(),
            record_date: "2025-09-01".to_string(),
            diagnosis: "Flu".to_string(),
            treatment: "Rest".to_string(),
        }
    }

    #[test]
    fn description_joins_diagnosis_and_treatment() {
        assert_eq!(form().description(), "Flu | Rest");
    }

    #[test]
    fn doctor_adds_then_views_record() {
        let dir = tempdir().unwrap();
        let store = Arc::new(JsonMedicalRecordStorage::new(dir.path().join("medicalrecords.json")));
        let audit = AuditLogService::new(Arc::new(JsonAuditLogStorage::new(dir.path().join("auditlogs.json"))));
        let doctor = MedicalRecordRepositoryProxy::new(Session::for_role("doctor1", Role::Doctor), store, audit);

        assert_eq!(handle_add_record(&doctor, &form()), "Medical record added.");
        assert_eq!(
            handle_view_records(&doctor, "p-1001"),
            "Found 1 record(s).\nR-3000 - 2025-09-01 - Flu | Rest"
        );
    }

    #[test]
    fn admin_add_record_is_denied() {
        let dir = tempdir().unwrap();
        let store = Arc::new(JsonMedicalRecordStorage::new(dir.path().join("medicalrecords.json")));
        let audit = AuditLogService::new(Arc::new(JsonAuditLogStorage::new(dir.path().join("auditlogs.json"))));
        let admin = MedicalRecordRepositoryProxy::new(Session::for_role("admin1", Role::Admin), store.clone(), audit);

        assert_eq!(handle_add_record(&admin, &form()), "ACCESS DENIED: AddRecord requires role Doctor.");
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn blank_patient_id_is_an_error() {
        let dir = tempdir().unwrap();
        let store = JsonMedicalRecordStorage::new(dir.path().join("medicalrecords.json"));
        let mut blank = form();
        blank.patient_id = " ".to_string();
        assert!(handle_add_record(&store, &blank).starts_with("ERROR: "));
    }
}
