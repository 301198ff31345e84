// lib/src/storage_engine/role_storage.rs
use std::path::PathBuf;
use models::errors::RecordsResult;
use models::Role;
use crate::storage_engine::json_store::JsonFileStore;
use crate::storage_engine::repository::RoleRepository;

/// The persisted set of valid role names.
#[derive(Debug)]
pub struct JsonRoleStorage {
    store: JsonFileStore<String>,
}

impl JsonRoleStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonRoleStorage { store: JsonFileStore::new(path) }
    }

    pub fn save(&self, roles: &[String]) -> RecordsResult<()> {
        self.store.save(roles)
    }
}

impl RoleRepository for JsonRoleStorage {
    /// Falls back to the built-in roles when the reference file is absent.
    fn get_all_roles(&self) -> RecordsResult<Vec<String>> {
        Ok(self.store.load_if_exists()?.unwrap_or_else(Role::all_names))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_builtin_roles() {
        let dir = tempdir().unwrap();
        let roles = JsonRoleStorage::new(dir.path().join("roles.json"));
        assert_eq!(roles.get_all_roles().unwrap(), vec!["Admin", "Doctor", "Nurse"]);
    }

    #[test]
    fn persisted_roles_are_returned_as_stored() {
        let dir = tempdir().unwrap();
        let roles = JsonRoleStorage::new(dir.path().join("roles.json"));
        roles.save(&["Admin".to_string(), "Doctor".to_string()]).unwrap();
        assert_eq!(roles.get_all_roles().unwrap(), vec!["Admin", "Doctor"]);
    }

    #[test]
    fn empty_roles_file_is_not_replaced_by_builtins() {
        let dir = tempdir().unwrap();
        let roles = JsonRoleStorage::new(dir.path().join("roles.json"));
        roles.save(&[]).unwrap();
        assert!(roles.get_all_roles().unwrap().is_empty());
    }
}
