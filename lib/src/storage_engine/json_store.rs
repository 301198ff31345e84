// lib/src/storage_engine/json_store.rs
//! A whole collection of one entity type persisted as a single pretty-printed
//! JSON array. Every operation loads the full file and every mutation rewrites
//! it, all under one mutex per store instance. Writes are not crash-safe.

use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use models::entity::StoredEntity;
use models::errors::{RecordsError, RecordsResult};
use models::util::{eq_ignore_case, is_blank};

/// Outcome of a mutation closure: whether the collection must be written back.
pub enum Change<R> {
    Persist(R),
    Unchanged(R),
}

#[derive(Debug)]
pub struct JsonFileStore<T> {
    path: PathBuf,
    lock: Mutex<()>,
    _entity: PhantomData<fn() -> T>,
}

impl<T> JsonFileStore<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore {
            path: path.into(),
            lock: Mutex::new(()),
            _entity: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn acquire(&self) -> RecordsResult<MutexGuard<'_, ()>> {
        self.lock
            .lock()
            .map_err(|e| RecordsError::LockError(format!("{}: {}", self.path.display(), e)))
    }

    // Callers must hold the lock.
    fn read_all(&self) -> RecordsResult<Vec<T>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let items: Option<Vec<T>> = serde_json::from_str(&content)?;
        Ok(items.unwrap_or_default())
    }

    // Callers must hold the lock.
    fn write_all(&self, items: &[T]) -> RecordsResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(items)?;
        fs::write(&self.path, json)?;
        debug!("Wrote {} item(s) to {}", items.len(), self.path.display());
        Ok(())
    }

    /// Current on-disk collection. A missing file is an empty collection.
    pub fn load(&self) -> RecordsResult<Vec<T>> {
        let _guard = self.acquire()?;
        self.read_all()
    }

    /// Like `load`, but distinguishes a missing file (`None`) from an empty
    /// collection. The existence check happens under the lock.
    pub fn load_if_exists(&self) -> RecordsResult<Option<Vec<T>>> {
        let _guard = self.acquire()?;
        if !self.path.exists() {
            return Ok(None);
        }
        self.read_all().map(Some)
    }

    /// Replaces the on-disk collection.
    pub fn save(&self, items: &[T]) -> RecordsResult<()> {
        let _guard = self.acquire()?;
        self.write_all(items)
    }

    /// Runs `f` over a freshly loaded collection while holding the lock.
    pub fn read<R>(&self, f: impl FnOnce(Vec<T>) -> R) -> RecordsResult<R> {
        let _guard = self.acquire()?;
        Ok(f(self.read_all()?))
    }

    /// Load, mutate and (when asked) persist as one unit under the lock.
    pub fn mutate<R>(&self, f: impl FnOnce(&mut Vec<T>) -> RecordsResult<Change<R>>) -> RecordsResult<R> {
        let _guard = self.acquire()?;
        let mut items = self.read_all()?;
        match f(&mut items)? {
            Change::Persist(result) => {
                self.write_all(&items)?;
                Ok(result)
            }
            Change::Unchanged(result) => Ok(result),
        }
    }
}

fn require_key<T: StoredEntity>(entity: &T) -> RecordsResult<()> {
    if is_blank(entity.key()) {
        return Err(RecordsError::Validation(format!("{}.{} required", T::ENTITY_NAME, T::KEY_NAME)));
    }
    Ok(())
}

impl<T> JsonFileStore<T>
where
    T: StoredEntity + Serialize + DeserializeOwned + Clone,
{
    /// First entity whose key matches, ignoring case.
    pub fn find(&self, key: &str) -> RecordsResult<Option<T>> {
        self.read(|items| items.into_iter().find(|item| eq_ignore_case(item.key(), key)))
    }

    pub fn insert_unique(&self, entity: &T) -> RecordsResult<()> {
        require_key(entity)?;
        self.mutate(|items| {
            if items.iter().any(|item| eq_ignore_case(item.key(), entity.key())) {
                return Err(RecordsError::DuplicateKey(format!(
                    "{} {} '{}' already exists",
                    T::ENTITY_NAME, T::KEY_NAME, entity.key()
                )));
            }
            items.push(entity.clone());
            Ok(Change::Persist(()))
        })
    }

    /// Replaces the matching entity in place, keeping its position.
    pub fn replace_existing(&self, entity: &T) -> RecordsResult<()> {
        require_key(entity)?;
        self.mutate(|items| {
            let idx = items
                .iter()
                .position(|item| eq_ignore_case(item.key(), entity.key()))
                .ok_or_else(|| RecordsError::NotFound(format!("{} '{}'", T::ENTITY_NAME, entity.key())))?;
            items[idx] = entity.clone();
            Ok(Change::Persist(()))
        })
    }

    /// Replaces on match or appends.
    pub fn upsert(&self, entity: &T) -> RecordsResult<()> {
        require_key(entity)?;
        self.mutate(|items| {
            match items.iter().position(|item| eq_ignore_case(item.key(), entity.key())) {
                Some(idx) => items[idx] = entity.clone(),
                None => items.push(entity.clone()),
            }
            Ok(Change::Persist(()))
        })
    }

    /// Removes every matching entity and returns how many went. Nothing is
    /// written when nothing matched.
    pub fn remove_all(&self, key: &str) -> RecordsResult<usize> {
        self.mutate(|items| {
            let before = items.len();
            items.retain(|item| !eq_ignore_case(item.key(), key));
            let removed = before - items.len();
            if removed > 0 {
                Ok(Change::Persist(removed))
            } else {
                Ok(Change::Unchanged(0))
            }
        })
    }
}
