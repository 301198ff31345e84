// server/src/cli/handlers_patient.rs
// Patient menu actions. Each returns the text to show; failures are rendered
// in place so the menu loop keeps running.

use lib::PatientRepository;
use models::Patient;
use crate::cli::handlers_utils::{keep_if_blank, render_error};

pub fn format_patient(patient: &Patient) -> String {
    format!("{} - {} (DOB: {})", patient.id, patient.name, patient.date_of_birth)
}

pub fn handle_search_patients(repo: &dyn PatientRepository, name_filter: &str) -> String {
    match repo.search_patients(name_filter) {
        Ok(found) => {
            let mut out = format!("Found {} patient(s).", found.len());
            for patient in &found {
                out.push('\n');
                out.push_str(&format_patient(patient));
            }
            out
        }
        Err(e) => render_error(&e),
    }
}

pub fn handle_view_patient(repo: &dyn PatientRepository, id: &str) -> String {
    match repo.get_patient_by_id(id) {
        Ok(Some(patient)) => format_patient(&patient),
        Ok(None) => "Patient not found.".to_string(),
        Err(e) => render_error(&e),
    }
}

pub fn handle_add_patient(repo: &dyn PatientRepository, id: &str, name: &str, date_of_birth: &str) -> String {
    match repo.add_patient(&Patient::new(id, name, date_of_birth)) {
        Ok(()) => "Patient added.".to_string(),
        Err(e) => render_error(&e),
    }
}

/// Applies the edits from the update form to `existing`.
pub fn apply_patient_edits(existing: &Patient, new_name: &str, new_date_of_birth: &str) -> Patient {
    Patient {
        id: existing.id.clone(),
        name: keep_if_blank(&existing.name, new_name),
        date_of_birth: keep_if_blank(&existing.date_of_birth, new_date_of_birth),
    }
}

pub fn handle_update_patient(repo: &dyn PatientRepository, existing: &Patient, new_name: &str, new_date_of_birth: &str) -> String {
    match repo.update_patient(&apply_patient_edits(existing, new_name, new_date_of_birth)) {
        Ok(()) => "Patient updated.".to_string(),
        Err(e) => render_error(&e),
    }
}

pub fn handle_delete_patient(repo: &dyn PatientRepository, id: &str) -> String {
    match repo.delete_patient(id) {
        Ok(()) => "Patient deleted (if existed).".to_string(),
        Err(e) => render_error(&e),
    }
}
