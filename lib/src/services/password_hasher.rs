// lib/src/services/password_hasher.rs
use log::warn;
use models::errors::{RecordsError, RecordsResult};

/// Bcrypt hashing and verification. Verification compares in constant time.
#[derive(Clone, Copy, Debug)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        PasswordHasher { cost: bcrypt::DEFAULT_COST }
    }
}

impl PasswordHasher {
    pub fn with_cost(cost: u32) -> Self {
        PasswordHasher { cost }
    }

    pub fn hash(&self, password: &str) -> RecordsResult<String> {
        bcrypt::hash(password, self.cost).map_err(|e| RecordsError::PasswordHashing(e.to_string()))
    }

    /// A stored hash that bcrypt cannot parse never verifies.
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        match bcrypt::verify(password, hash) {
            Ok(matches) => matches,
            Err(e) => {
                warn!("Stored password hash could not be verified: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_only_the_original_password() {
        let hasher = PasswordHasher::with_cost(4);
        let hash = hasher.hash("Doctor@123").unwrap();
        assert_ne!(hash, "Doctor@123");
        assert!(hasher.verify("Doctor@123", &hash));
        assert!(!hasher.verify("doctor@123", &hash));
    }

    #[test]
    fn malformed_hash_does_not_verify() {
        let hasher = PasswordHasher::with_cost(4);
        assert!(!hasher.verify("anything", "x"));
    }

    #[test]
    fn invalid_cost_is_a_hashing_error() {
        let hasher = PasswordHasher::with_cost(2);
        assert!(matches!(hasher.hash("pw"), Err(RecordsError::PasswordHashing(_))));
    }
}
