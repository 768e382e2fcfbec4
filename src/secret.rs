//! Merchant signing secret.
//!
//! The secret is read-only, process-wide configuration loaded once at
//! startup; concurrent readers share it without synchronization. How it is
//! provisioned (environment, config file) is the embedding application's
//! concern. This type is only the in-process representation, wiping the
//! key bytes on drop.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Symmetric merchant secret used as the raw HMAC-SHA256 key.
///
/// The remote verifier keys HMAC with the secret string's raw bytes, with
/// no key derivation. That is a known weakness of the legacy wire format
/// and must not be changed here: wire compatibility depends on it.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct MerchantSecret(Vec<u8>);

impl MerchantSecret {
    /// Wrap raw secret bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// The raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// True when the secret is empty (and therefore unusable for signing).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for MerchantSecret {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl fmt::Debug for MerchantSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print key material.
        write!(f, "MerchantSecret({} bytes)", self.0.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_from_str() {
        let secret = MerchantSecret::from("s3cr3t");
        assert_eq!(secret.as_bytes(), b"s3cr3t");
        assert!(!secret.is_empty());
    }

    #[test]
    fn test_empty_secret() {
        let secret = MerchantSecret::new(Vec::new());
        assert!(secret.is_empty());
    }

    #[test]
    fn test_debug_redacts_key_material() {
        let secret = MerchantSecret::from("super-secret-key");
        let printed = format!("{:?}", secret);
        assert!(!printed.contains("super-secret-key"));
        assert!(printed.contains("16 bytes"));
    }
}
