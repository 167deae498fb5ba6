//! Password digests
//!
//! A single unsalted SHA-256 over the UTF-8 password, hex encoded. The same
//! function runs at staff creation and at login, so equal plaintexts always
//! produce equal digests.

use sha2::{Digest, Sha256};
use workload_core_types::Sensitive;

/// Length of a hex-encoded SHA-256 digest
pub const DIGEST_HEX_LEN: usize = 64;

/// Hash a plaintext password into its stored form
pub fn hash_password(password: &Sensitive<String>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.expose().as_bytes());
    hex::encode(hasher.finalize())
}

/// Whether `value` has the shape of a stored digest
pub fn is_password_digest(value: &str) -> bool {
    value.len() == DIGEST_HEX_LEN
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pw(s: &str) -> Sensitive<String> {
        Sensitive::new(s.to_string())
    }

    #[test]
    fn test_known_digests() {
        assert_eq!(
            hash_password(&pw("")),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            hash_password(&pw("abc")),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_digest_shape_check() {
        assert!(!is_password_digest("pw1"));
        assert!(!is_password_digest(&"G".repeat(DIGEST_HEX_LEN)));
        assert!(is_password_digest(&hash_password(&pw("pw1"))));
    }

    proptest! {
        #[test]
        fn prop_digest_is_hex_and_never_plaintext(s in ".{1,40}") {
            let digest = hash_password(&pw(&s));
            prop_assert!(is_password_digest(&digest));
            prop_assert_ne!(digest, s);
        }

        #[test]
        fn prop_digest_is_deterministic_and_suffix_sensitive(s in ".{0,40}") {
            prop_assert_eq!(hash_password(&pw(&s)), hash_password(&pw(&s)));
            prop_assert_ne!(hash_password(&pw(&s)), hash_password(&pw(&format!("{}x", s))));
        }
    }
}
