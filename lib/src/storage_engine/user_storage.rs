// lib/src/storage_engine/user_storage.rs
use std::path::PathBuf;
use models::errors::{RecordsError, RecordsResult};
use models::util::{eq_ignore_case, is_blank};
use models::User;
use crate::storage_engine::json_store::{Change, JsonFileStore};
use crate::storage_engine::repository::UserRepository;

#[derive(Debug)]
pub struct JsonUserStorage {
    store: JsonFileStore<User>,
}

impl JsonUserStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonUserStorage { store: JsonFileStore::new(path) }
    }

    pub fn save(&self, users: &[User]) -> RecordsResult<()> {
        self.store.save(users)
    }
}

impl UserRepository for JsonUserStorage {
    fn get_by_username(&self, username: &str) -> RecordsResult<Option<User>> {
        self.store.find(username)
    }

    fn get_all(&self) -> RecordsResult<Vec<User>> {
        self.store.load()
    }

    fn upsert(&self, user: &User) -> RecordsResult<()> {
        self.store.upsert(user)
    }

    fn insert(&self, user: &User) -> RecordsResult<()> {
        if is_blank(&user.username) {
            return Err(RecordsError::Validation("User.Username required".to_string()));
        }
        self.store.mutate(|users| {
            if users.iter().any(|u| eq_ignore_case(&u.username, &user.username)) {
                return Err(RecordsError::DuplicateUsername(user.username.clone()));
            }
            users.push(user.clone());
            Ok(Change::Persist(()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use models::Role;
    use tempfile::tempdir;

    #[test]
    fn insert_rejects_taken_username_ignoring_case() {
        let dir = tempdir().unwrap();
        let users = JsonUserStorage::new(dir.path().join("users.json"));
        let first = User::new("doctor1", "first", Role::Doctor);
        users.insert(&first).unwrap();

        let err = users.insert(&User::new("DOCTOR1", "second", Role::Nurse)).unwrap_err();
        assert!(matches!(err, RecordsError::DuplicateUsername(_)));
        let all = users.get_all().unwrap();
        assert_eq!(all, vec![first]);
    }

    #[test]
    fn concurrent_inserts_of_same_username_admit_exactly_one() {
        let dir = tempdir().unwrap();
        let users = Arc::new(JsonUserStorage::new(dir.path().join("users.json")));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let users = Arc::clone(&users);
                thread::spawn(move || users.insert(&User::new("dup", format!("hash{}", i), Role::Nurse)))
            })
            .collect();

        let mut ok = 0;
        for handle in handles {
            match handle.join().unwrap() {
                Ok(()) => ok += 1,
                Err(e) => assert!(matches!(e, RecordsError::DuplicateUsername(_))),
            }
        }
        assert_eq!(ok, 1);
        assert_eq!(users.get_all().unwrap().len(), 1);
    }

    #[test]
    fn lookup_by_username_ignores_case() {
        let dir = tempdir().unwrap();
        let users = JsonUserStorage::new(dir.path().join("users.json"));
        users.upsert(&User::new("Doctor1", "hash", Role::Doctor)).unwrap();

        let found = users.get_by_username("doctor1").unwrap().unwrap();
        assert_eq!(found.role, Role::Doctor);
        assert!(users.get_by_username("doctor2").unwrap().is_none());
    }

    #[test]
    fn upsert_replaces_matching_username() {
        let dir = tempdir().unwrap();
        let users = JsonUserStorage::new(dir.path().join("users.json"));
        users.upsert(&User::new("nurse1", "old", Role::Nurse)).unwrap();
        users.upsert(&User::new("admin1", "x", Role::Admin)).unwrap();
        users.upsert(&User::new("NURSE1", "new", Role::Nurse)).unwrap();

        let all = users.get_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].password_hash, "new");
    }
}
