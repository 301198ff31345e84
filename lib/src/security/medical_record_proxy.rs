// lib/src/security/medical_record_proxy.rs
use std::sync::Arc;
use models::errors::RecordsResult;
use models::MedicalRecord;
use crate::security::access_guard::AccessGuard;
use crate::security::permissions::Operation;
use crate::security::session::Session;
use crate::services::AuditLogService;
use crate::storage_engine::MedicalRecordRepository;

/// Protection proxy over a medical record repository.
#[derive(Clone)]
pub struct MedicalRecordRepositoryProxy {
    guard: AccessGuard,
    real: Arc<dyn MedicalRecordRepository>,
}

impl MedicalRecordRepositoryProxy {
    pub fn new(session: Session, real: Arc<dyn MedicalRecordRepository>, audit: AuditLogService) -> Self {
        MedicalRecordRepositoryProxy {
            guard: AccessGuard::new(session, audit),
            real,
        }
    }

    pub fn session(&self) -> &Session {
        self.guard.session()
    }
}

impl MedicalRecordRepository for MedicalRecordRepositoryProxy {
    fn add_record(&self, record: &MedicalRecord) -> RecordsResult<()> {
        let action = format!("AddRecord({} -> {})", record.record_id, record.patient_id);
        self.guard.check(Operation::AddRecord, &action)?;
        self.real.add_record(record)
    }

    fn get_records_by_patient_id(&self, patient_id: &str) -> RecordsResult<Vec<MedicalRecord>> {
        let action = format!("GetRecordsByPatientId({})", patient_id);
        self.guard.check(Operation::GetRecordsByPatientId, &action)?;
        self.real.get_records_by_patient_id(patient_id)
    }

    fn delete_record(&self, record_id: &str) -> RecordsResult<()> {
        self.guard.check(Operation::DeleteRecord, &format!("DeleteRecord({})", record_id))?;
        self.real.delete_record(record_id)
    }
}
