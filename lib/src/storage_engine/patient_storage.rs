// lib/src/storage_engine/patient_storage.rs
use std::path::PathBuf;
use log::debug;
use models::errors::RecordsResult;
use models::util::{contains_ignore_case, is_blank};
use models::Patient;
use crate::storage_engine::json_store::JsonFileStore;
use crate::storage_engine::repository::PatientRepository;

#[derive(Debug)]
pub struct JsonPatientStorage {
    store: JsonFileStore<Patient>,
}

impl JsonPatientStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonPatientStorage { store: JsonFileStore::new(path) }
    }

    pub fn load(&self) -> RecordsResult<Vec<Patient>> {
        self.store.load()
    }

    pub fn save(&self, patients: &[Patient]) -> RecordsResult<()> {
        self.store.save(patients)
    }
}

impl PatientRepository for JsonPatientStorage {
    fn get_patient_by_id(&self, id: &str) -> RecordsResult<Option<Patient>> {
        self.store.find(id)
    }

    fn add_patient(&self, patient: &Patient) -> RecordsResult<()> {
        self.store.insert_unique(patient)?;
        debug!("Added patient {}", patient.id);
        Ok(())
    }

    fn update_patient(&self, patient: &Patient) -> RecordsResult<()> {
        self.store.replace_existing(patient)?;
        debug!("Updated patient {}", patient.id);
        Ok(())
    }

    fn delete_patient(&self, id: &str) -> RecordsResult<()> {
        let removed = self.store.remove_all(id)?;
        debug!("Deleted {} patient(s) with id {}", removed, id);
        Ok(())
    }

    fn search_patients(&self, name_filter: &str) -> RecordsResult<Vec<Patient>> {
        self.store.read(|patients| {
            if is_blank(name_filter) {
                return patients;
            }
            patients
                .into_iter()
                .filter(|p| contains_ignore_case(&p.name, name_filter))
                .collect()
        })
    }
}
