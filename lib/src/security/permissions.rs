// lib/src/security/permissions.rs
//! The fixed role → operation policy. Kept as data so it can be checked in
//! isolation from the proxies that enforce it.

use std::fmt;
use models::Role;

/// Every operation the access-control proxies guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    GetPatientById,
    SearchPatients,
    AddPatient,
    UpdatePatient,
    DeletePatient,
    GetRecordsByPatientId,
    AddRecord,
    DeleteRecord,
}

impl Operation {
    pub const ALL: [Operation; 8] = [
        Operation::GetPatientById,
        Operation::SearchPatients,
        Operation::AddPatient,
        Operation::UpdatePatient,
        Operation::DeletePatient,
        Operation::GetRecordsByPatientId,
        Operation::AddRecord,
        Operation::DeleteRecord,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::GetPatientById => "GetPatientById",
            Operation::SearchPatients => "SearchPatients",
            Operation::AddPatient => "AddPatient",
            Operation::UpdatePatient => "UpdatePatient",
            Operation::DeletePatient => "DeletePatient",
            Operation::GetRecordsByPatientId => "GetRecordsByPatientId",
            Operation::AddRecord => "AddRecord",
            Operation::DeleteRecord => "DeleteRecord",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const ALL_CLINICAL: &[Role] = &[Role::Admin, Role::Doctor, Role::Nurse];
const ADMIN_OR_DOCTOR: &[Role] = &[Role::Admin, Role::Doctor];
const ADMIN_ONLY: &[Role] = &[Role::Admin];
const DOCTOR_ONLY: &[Role] = &[Role::Doctor];

const PERMISSION_TABLE: [(Operation, &[Role]); 8] = [
    (Operation::GetPatientById, ALL_CLINICAL),
    (Operation::SearchPatients, ALL_CLINICAL),
    (Operation::AddPatient, ADMIN_OR_DOCTOR),
    (Operation::UpdatePatient, ADMIN_OR_DOCTOR),
    (Operation::DeletePatient, ADMIN_ONLY),
    (Operation::GetRecordsByPatientId, ALL_CLINICAL),
    (Operation::AddRecord, DOCTOR_ONLY),
    (Operation::DeleteRecord, ADMIN_ONLY),
];

/// Roles permitted to perform `op`.
pub fn allowed_roles(op: Operation) -> &'static [Role] {
    PERMISSION_TABLE
        .iter()
        .find(|(candidate, _)| *candidate == op)
        .map(|(_, roles)| *roles)
        .unwrap_or(&[])
}

pub fn is_allowed(role: Role, op: Operation) -> bool {
    allowed_roles(op).contains(&role)
}

/// Names the roles that would have been allowed, e.g.
/// "AddPatient requires role Admin or Doctor."
pub fn denial_message(op: Operation) -> String {
    let roles = allowed_roles(op)
        .iter()
        .map(Role::as_str)
        .collect::<Vec<_>>()
        .join(" or ");
    format!("{} requires role {}.", op, roles)
}
