// lib/src/storage_engine/medical_record_storage.rs
use std::path::PathBuf;
use log::debug;
use models::errors::{RecordsError, RecordsResult};
use models::util::{eq_ignore_case, is_blank};
use models::MedicalRecord;
use crate::storage_engine::json_store::JsonFileStore;
use crate::storage_engine::repository::MedicalRecordRepository;

#[derive(Debug)]
pub struct JsonMedicalRecordStorage {
    store: JsonFileStore<MedicalRecord>,
}

impl JsonMedicalRecordStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonMedicalRecordStorage { store: JsonFileStore::new(path) }
    }

    pub fn load(&self) -> RecordsResult<Vec<MedicalRecord>> {
        self.store.load()
    }

    pub fn save(&self, records: &[MedicalRecord]) -> RecordsResult<()> {
        self.store.save(records)
    }

    pub fn find_by_record_id(&self, record_id: &str) -> RecordsResult<Option<MedicalRecord>> {
        self.store.find(record_id)
    }
}

impl MedicalRecordRepository for JsonMedicalRecordStorage {
    fn add_record(&self, record: &MedicalRecord) -> RecordsResult<()> {
        if is_blank(&record.patient_id) {
            return Err(RecordsError::Validation("MedicalRecord.PatientId required".to_string()));
        }
        self.store.insert_unique(record)?;
        debug!("Added medical record {} for patient {}", record.record_id, record.patient_id);
        Ok(())
    }

    fn get_records_by_patient_id(&self, patient_id: &str) -> RecordsResult<Vec<MedicalRecord>> {
        self.store.read(|records| {
            records
                .into_iter()
                .filter(|r| eq_ignore_case(&r.patient_id, patient_id))
                .collect()
        })
    }

    fn delete_record(&self, record_id: &str) -> RecordsResult<()> {
        let removed = self.store.remove_all(record_id)?;
        debug!("Deleted {} medical record(s) with id {}", removed, record_id);
        Ok(())
    }
}
