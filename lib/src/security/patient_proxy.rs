// lib/src/security/patient_proxy.rs
use std::sync::Arc;
use models::errors::RecordsResult;
use models::Patient;
use crate::security::access_guard::AccessGuard;
use crate::security::permissions::Operation;
use crate::security::session::Session;
use crate::services::AuditLogService;
use crate::storage_engine::PatientRepository;

/// Protection proxy over a patient repository.
#[derive(Clone)]
pub struct PatientRepositoryProxy {
    guard: AccessGuard,
    real: Arc<dyn PatientRepository>,
}

impl PatientRepositoryProxy {
    pub fn new(session: Session, real: Arc<dyn PatientRepository>, audit: AuditLogService) -> Self {
        PatientRepositoryProxy {
            guard: AccessGuard::new(session, audit),
            real,
        }
    }

    pub fn session(&self) -> &Session {
        self.guard.session()
    }
}

impl PatientRepository for PatientRepositoryProxy {
    fn get_patient_by_id(&self, id: &str) -> RecordsResult<Option<Patient>> {
        self.guard.check(Operation::GetPatientById, &format!("GetPatientById({})", id))?;
        self.real.get_patient_by_id(id)
    }

    fn add_patient(&self, patient: &Patient) -> RecordsResult<()> {
        self.guard.check(Operation::AddPatient, &format!("AddPatient({})", patient.id))?;
        self.real.add_patient(patient)
    }

    fn update_patient(&self, patient: &Patient) -> RecordsResult<()> {
        self.guard.check(Operation::UpdatePatient, &format!("UpdatePatient({})", patient.id))?;
        self.real.update_patient(patient)
    }

    fn delete_patient(&self, id: &str) -> RecordsResult<()> {
        self.guard.check(Operation::DeletePatient, &format!("DeletePatient({})", id))?;
        self.real.delete_patient(id)
    }

    fn search_patients(&self, name_filter: &str) -> RecordsResult<Vec<Patient>> {
        self.guard.check(Operation::SearchPatients, &format!("SearchPatients('{}')", name_filter))?;
        self.real.search_patients(name_filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use models::{RecordsError, Role};
    use crate::security::permissions::is_allowed;
    use crate::storage_engine::{AuditLogRepository, JsonAuditLogStorage, JsonPatientStorage};
    use tempfile::{tempdir, TempDir};

    /// Counts calls and otherwise does nothing.
    #[derive(Default)]
    struct SpyPatientRepo {
        calls: AtomicUsize,
    }

    impl SpyPatientRepo {
        fn hit(&self) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    impl PatientRepository for SpyPatientRepo {
        fn get_patient_by_id(&self, _id: &str) -> RecordsResult<Option<Patient>> {
            self.hit();
            Ok(None)
        }
        fn add_patient(&self, _patient: &Patient) -> RecordsResult<()> {
            self.hit();
            Ok(())
        }
        fn update_patient(&self, _patient: &Patient) -> RecordsResult<()> {
            self.hit();
            Ok(())
        }
        fn delete_patient(&self, _id: &str) -> RecordsResult<()> {
            self.hit();
            Ok(())
        }
        fn search_patients(&self, _name_filter: &str) -> RecordsResult<Vec<Patient>> {
            self.hit();
            Ok(Vec::new())
        }
    }

    fn audit_in(dir: &TempDir) -> Arc<JsonAuditLogStorage> {
        Arc::new(JsonAuditLogStorage::new(dir.path().join("auditlogs.json")))
    }

    fn invoke(proxy: &PatientRepositoryProxy, op: Operation) -> RecordsResult<()> {
        let patient = Patient::new("PX-1", "Test", "2000-01-01");
        match op {
            Operation::GetPatientById => proxy.get_patient_by_id("PX-1").map(|_| ()),
            Operation::SearchPatients => proxy.search_patients("Te").map(|_| ()),
            Operation::AddPatient => proxy.add_patient(&patient),
            Operation::UpdatePatient => proxy.update_patient(&patient),
            Operation::DeletePatient => proxy.delete_patient("PX-1"),
            other => panic!("{} is not a patient operation", other),
        }
    }

    const PATIENT_OPS: [Operation; 5] = [
        Operation::GetPatientById,
        Operation::SearchPatients,
        Operation::AddPatient,
        Operation::UpdatePatient,
        Operation::DeletePatient,
    ];

    #[test]
    fn every_role_and_operation_follows_the_table() {
        for role in Role::ALL {
            for op in PATIENT_OPS {
                let dir = tempdir().unwrap();
                let audit = audit_in(&dir);
                let spy = Arc::new(SpyPatientRepo::default());
                let proxy = PatientRepositoryProxy::new(
                    Session::for_role("tester", role),
                    spy.clone(),
                    AuditLogService::new(audit.clone()),
                );

                let result = invoke(&proxy, op);
                let expected = is_allowed(role, op);

                assert_eq!(result.is_ok(), expected, "{} / {}", role, op);
                assert_eq!(spy.calls.load(Ordering::SeqCst), usize::from(expected), "{} / {}", role, op);
                if !expected {
                    assert!(matches!(result, Err(RecordsError::Authorization(_))));
                }

                let logs = audit.get_all().unwrap();
                assert_eq!(logs.len(), 1, "{} / {}", role, op);
                assert_eq!(logs[0].success, expected);
                assert_eq!(logs[0].username, "tester");
                assert!(logs[0].action.starts_with(op.name()));
            }
        }
    }

    #[test]
    fn nurse_cannot_add_patient() {
        let dir = tempdir().unwrap();
        let audit = audit_in(&dir);
        let real = Arc::new(JsonPatientStorage::new(dir.path().join("patients.json")));
        let proxy = PatientRepositoryProxy::new(
            Session::for_role("nurseX", Role::Nurse),
            real.clone(),
            AuditLogService::new(audit.clone()),
        );

        let err = proxy.add_patient(&Patient::new("PX-1", "Test", "2000-01-01")).unwrap_err();
        assert!(err.is_authorization());
        assert!(err.to_string().contains("Admin or Doctor"));
        assert!(real.load().unwrap().is_empty());

        let logs = audit.get_all().unwrap();
        assert_eq!(logs.len(), 1);
        assert!(logs[0].action.contains("AddPatient(PX-1)"));
        assert!(!logs[0].success);
    }

    #[test]
    fn storage_errors_pass_through_unchanged() {
        let dir = tempdir().unwrap();
        let audit = audit_in(&dir);
        let real = Arc::new(JsonPatientStorage::new(dir.path().join("patients.json")));
        let proxy = PatientRepositoryProxy::new(
            Session::for_role("doc", Role::Doctor),
            real,
            AuditLogService::new(audit.clone()),
        );

        proxy.add_patient(&Patient::new("P-1", "Alice", "1985-07-12")).unwrap();
        assert!(matches!(
            proxy.add_patient(&Patient::new("p-1", "Alice", "1985-07-12")),
            Err(RecordsError::DuplicateKey(_))
        ));
        assert!(matches!(
            proxy.update_patient(&Patient::new("P-404", "Ghost", "1985-07-12")),
            Err(RecordsError::NotFound(_))
        ));

        // Allowed attempts are logged as successful even when storage rejects them.
        let logs = audit.get_all().unwrap();
        assert_eq!(logs.len(), 3);
        assert!(logs.iter().all(|l| l.success));
    }

    #[test]
    fn admin_delete_patient_round_trip() {
        let dir = tempdir().unwrap();
        let real = Arc::new(JsonPatientStorage::new(dir.path().join("patients.json")));
        let proxy = PatientRepositoryProxy::new(
            Session::for_role("admin", Role::Admin),
            real,
            AuditLogService::new(audit_in(&dir)),
        );

        proxy.add_patient(&Patient::new("PX-DEL", "Temp", "1999-09-09")).unwrap();
        assert!(proxy.get_patient_by_id("PX-DEL").unwrap().is_some());

        proxy.delete_patient("PX-DEL").unwrap();
        assert!(proxy.get_patient_by_id("PX-DEL").unwrap().is_none());
    }

    #[test]
    fn search_action_quotes_the_filter() {
        let dir = tempdir().unwrap();
        let audit = audit_in(&dir);
        let proxy = PatientRepositoryProxy::new(
            Session::for_role("nurse1", Role::Nurse),
            Arc::new(SpyPatientRepo::default()),
            AuditLogService::new(audit.clone()),
        );
        proxy.search_patients("Alice").unwrap();
        assert_eq!(audit.get_all().unwrap()[0].action, "SearchPatients('Alice')");
    }
}
