//! Checksum validation for migrations

use ontologyops_core::snapshot::digest::hash_bytes;

/// SHA256 checksum of a migration's SQL text
pub fn compute_checksum(content: &str) -> String {
    hash_bytes(content.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_deterministic() {
        let checksum1 = compute_checksum("SELECT 1");
        let checksum2 = compute_checksum("SELECT 1");
        assert_eq!(checksum1, checksum2);
        assert_eq!(checksum1.len(), 64);
        assert_ne!(checksum1, compute_checksum("SELECT 2"));
    }
}
