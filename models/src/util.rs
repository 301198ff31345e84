// models/src/util.rs
//! String helpers shared by the stores. Keys and names are compared
//! case-insensitively everywhere in the system.

/// True when the value is empty or only whitespace.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_detects_whitespace_only() {
        assert!(is_blank(""));
        assert!(is_blank("   \t"));
        assert!(!is_blank(" P-1 "));
    }

    #[test]
    fn case_insensitive_comparisons() {
        assert!(eq_ignore_case("p-1001", "P-1001"));
        assert!(!eq_ignore_case("P-1001", "P-1002"));
        assert!(contains_ignore_case("Alice Smith", "aLiCe"));
        assert!(!contains_ignore_case("Bayo Ade", "alice"));
    }
}
