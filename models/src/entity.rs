// models/src/entity.rs

/// Implemented by every type persisted as one JSON collection. The key is the
/// value the stores compare (case-insensitively) for uniqueness and lookup.
pub trait StoredEntity {
    /// Human-readable entity name used in error messages and logs.
    const ENTITY_NAME: &'static str;
    /// Name of the key field, as persisted.
    const KEY_NAME: &'static str;

    fn key(&self) -> &str;
}
