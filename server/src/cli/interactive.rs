// server/src/cli/interactive.rs
use std::thread;
use std::time::Duration;
use anyhow::Result;
use log::{debug, info, warn};
use rustyline::DefaultEditor;
use lib::{Database, MedicalRecordRepositoryProxy, PatientRepository, PatientRepositoryProxy, Session};
use crate::cli::handlers_patient::{
    handle_add_patient, handle_delete_patient, handle_search_patients, handle_update_patient,
    handle_view_patient,
};
use crate::cli::handlers_records::{handle_add_record, handle_view_records, RecordForm};
use crate::cli::handlers_user::login_message;
use crate::cli::handlers_utils::{
    clear_terminal_screen, pause, print_banner, prompt, prompt_or_empty, read_password, render_error,
};

const MENU: &str = "\
Main Menu:
1. Search patients
2. View patient by ID
3. Add patient (Doctor/Admin)
4. Update patient (Doctor/Admin)
5. Delete patient (Admin)
6. Add medical record to patient (Doctor)
7. View medical records for patient
8. Logout";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    SearchPatients,
    ViewPatient,
    AddPatient,
    UpdatePatient,
    DeletePatient,
    AddRecord,
    ViewRecords,
    Logout,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<MenuChoice> {
        match input.trim() {
            "1" => Some(MenuChoice::SearchPatients),
            "2" => Some(MenuChoice::ViewPatient),
            "3" => Some(MenuChoice::AddPatient),
            "4" => Some(MenuChoice::UpdatePatient),
            "5" => Some(MenuChoice::DeletePatient),
            "6" => Some(MenuChoice::AddRecord),
            "7" => Some(MenuChoice::ViewRecords),
            "8" => Some(MenuChoice::Logout),
            _ => None,
        }
    }
}

enum MenuExit {
    Logout,
    Quit,
}

/// Login loop. Each successful login gets a fresh session and fresh proxies;
/// logging out returns here. Closing the input stream ends the program.
pub fn run_cli_interactive(db: &Database) -> Result<()> {
    let mut rl = DefaultEditor::new()?;

    loop {
        if let Err(e) = clear_terminal_screen() {
            debug!("Could not clear screen: {}", e);
        }
        print_banner("Secure Patient Records System");

        let Some(username) = prompt(&mut rl, "Username: ")? else {
            break;
        };
        let username = username.trim().to_string();
        let Some(password) = read_password(&mut rl, "Password: ")? else {
            println!("Login cancelled.");
            continue;
        };

        let user = match db.auth_service().authenticate(&username, &password) {
            Ok(Some(user)) => user,
            Ok(None) => {
                println!("Invalid credentials.");
                pause(&mut rl)?;
                continue;
            }
            Err(e) => {
                warn!("Authentication could not be completed: {}", e);
                println!("{}", render_error(&e));
                pause(&mut rl)?;
                continue;
            }
        };

        println!("{}", login_message(&user));
        thread::sleep(Duration::from_millis(800));

        let session = Session::new(&user);
        let patients = db.patient_proxy(&session);
        let records = db.record_proxy(&session);

        match main_menu_loop(&mut rl, &patients, &records)? {
            MenuExit::Logout => info!("User {} logged out", session.username()),
            MenuExit::Quit => break,
        }
    }

    println!("Goodbye!");
    Ok(())
}

fn main_menu_loop(
    rl: &mut DefaultEditor,
    patients: &PatientRepositoryProxy,
    records: &MedicalRecordRepositoryProxy,
) -> Result<MenuExit> {
    loop {
        if let Err(e) = clear_terminal_screen() {
            debug!("Could not clear screen: {}", e);
        }
        println!("{}", MENU);
        let Some(input) = prompt(rl, "Select option: ")? else {
            return Ok(MenuExit::Quit);
        };

        let output = match MenuChoice::parse(&input) {
            Some(MenuChoice::SearchPatients) => {
                let filter = prompt_or_empty(rl, "Enter name filter: ")?;
                handle_search_patients(patients, &filter)
            }
            Some(MenuChoice::ViewPatient) => {
                let id = prompt_or_empty(rl, "Enter patient ID: ")?;
                handle_view_patient(patients, &id)
            }
            Some(MenuChoice::AddPatient) => {
                let id = prompt_or_empty(rl, "New patient ID: ")?;
                let name = prompt_or_empty(rl, "Name: ")?;
                let dob = prompt_or_empty(rl, "DOB (YYYY-MM-DD): ")?;
                handle_add_patient(patients, &id, &name, &dob)
            }
            Some(MenuChoice::UpdatePatient) => update_patient_form(rl, patients)?,
            Some(MenuChoice::DeletePatient) => {
                let id = prompt_or_empty(rl, "Patient ID to delete: ")?;
                handle_delete_patient(patients, &id)
            }
            Some(MenuChoice::AddRecord) => {
                let form = RecordForm {
                    patient_id: prompt_or_empty(rl, "Patient ID: ")?,
                    record_id: prompt_or_empty(rl, "Record ID: ")?,
                    record_date: prompt_or_empty(rl, "Record Date (YYYY-MM-DD): ")?,
                    diagnosis: prompt_or_empty(rl, "Diagnosis: ")?,
                    treatment: prompt_or_empty(rl, "Treatment: ")?,
                };
                handle_add_record(records, &form)
            }
            Some(MenuChoice::ViewRecords) => {
                let patient_id = prompt_or_empty(rl, "Patient ID: ")?;
                handle_view_records(records, &patient_id)
            }
            Some(MenuChoice::Logout) => return Ok(MenuExit::Logout),
            None => "Invalid option.".to_string(),
        };

        println!("{}", output);
        pause(rl)?;
    }
}

fn update_patient_form(rl: &mut DefaultEditor, patients: &PatientRepositoryProxy) -> Result<String> {
    let id = prompt_or_empty(rl, "Patient ID to update: ")?;
    let existing = match patients.get_patient_by_id(&id) {
        Ok(Some(patient)) => patient,
        Ok(None) => return Ok("Not found.".to_string()),
        Err(e) => return Ok(render_error(&e)),
    };
    let new_name = prompt_or_empty(rl, &format!("New name (blank to keep '{}'): ", existing.name))?;
    let new_dob = prompt_or_empty(rl, &format!("New DOB (blank to keep '{}'): ", existing.date_of_birth))?;
    Ok(handle_update_patient(patients, &existing, &new_name, &new_dob))
}
