//! Utilities for cryptographic algorithms
//!
//! Requests and responses are authenticated with a two-stage SHA-1 construction:
//! the protocol fields are joined with `.`, digested, and the lowercase hex digest is
//! digested again together with the shared secret.

use hyperswitch_masking::{PeekInterface, Secret};
use subtle::ConstantTimeEq;

use crate::consts::HASH_FIELD_SEPARATOR;

/// Trait for generating a digest
pub trait GenerateDigest {
    /// takes a message and creates a digest for it
    fn generate_digest(&self, message: &[u8]) -> Vec<u8>;
}

/// Secure Hash Algorithm 1
///
/// Kept only because the processor's hash contract is defined in terms of it.
#[derive(Debug)]
pub struct Sha1;

impl GenerateDigest for Sha1 {
    fn generate_digest(&self, message: &[u8]) -> Vec<u8> {
        let digest = ring::digest::digest(&ring::digest::SHA1_FOR_LEGACY_USE_ONLY, message);
        digest.as_ref().to_vec()
    }
}

/// Joins hash fields in the order given, absent fields contributing an empty string.
pub fn build_hash_input<'a, I>(fields: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    fields
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect::<Vec<_>>()
        .join(HASH_FIELD_SEPARATOR)
}

/// `hex(SHA1(hex(SHA1(to_hash)) + "." + secret))`
pub fn generate_hash(to_hash: &str, secret: &Secret<String>) -> String {
    let first_stage = hex::encode(Sha1.generate_digest(to_hash.as_bytes()));
    let second_stage_input = format!("{first_stage}{HASH_FIELD_SEPARATOR}{}", secret.peek());
    hex::encode(Sha1.generate_digest(second_stage_input.as_bytes()))
}

/// Builds the canonical string from ordered fields and hashes it with the secret.
pub fn compute_hash<'a, I>(fields: I, secret: &Secret<String>) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    generate_hash(&build_hash_input(fields), secret)
}

/// Compares two hex digests without short-circuiting on the first differing byte.
pub fn hashes_match(expected: &str, received: &str) -> bool {
    expected.as_bytes().ct_eq(received.as_bytes()).into()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sha1_hex(input: &str) -> String {
        hex::encode(ring::digest::digest(
            &ring::digest::SHA1_FOR_LEGACY_USE_ONLY,
            input.as_bytes(),
        ))
    }

    fn secret(value: &str) -> Secret<String> {
        Secret::new(value.to_string())
    }

    #[test]
    fn sha1_produces_twenty_byte_digests() {
        assert_eq!(Sha1.generate_digest(b"").len(), 20);
        assert_eq!(
            hex::encode(Sha1.generate_digest(b"abc")),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
    }

    #[test]
    fn absent_fields_hash_as_empty_strings() {
        assert_eq!(
            build_hash_input([Some("a"), None, Some("c"), None]),
            "a..c."
        );
        assert_eq!(build_hash_input([None, None, None]), "..");
        assert_eq!(build_hash_input(std::iter::empty()), "");
    }

    #[test]
    fn hash_follows_the_two_stage_formula() {
        let fields = [
            Some("20150131094559"),
            Some("merch1"),
            Some("ord1"),
            Some("100"),
            Some("EUR"),
            Some("sofort"),
        ];
        let expected = sha1_hex(&format!(
            "{}.mysecret",
            sha1_hex("20150131094559.merch1.ord1.100.EUR.sofort")
        ));

        assert_eq!(compute_hash(fields, &secret("mysecret")), expected);
    }

    #[test]
    fn hash_is_deterministic_including_all_empty_fields() {
        let empty = [None, None, None, None, None, None];
        assert_eq!(
            compute_hash(empty, &secret("s")),
            compute_hash(empty, &secret("s"))
        );
        assert_eq!(
            compute_hash(empty, &secret("s")),
            sha1_hex(&format!("{}.s", sha1_hex(".....")))
        );
    }

    #[test]
    fn changing_any_single_field_changes_the_hash() {
        let base = ["20150131094559", "merch1", "ord1", "100", "EUR", "sofort"];
        let reference = compute_hash(base.map(Some), &secret("mysecret"));

        for position in 0..base.len() {
            let mut changed = base.map(Some);
            if let Some(field) = changed.get_mut(position) {
                *field = Some("x");
            }
            assert_ne!(compute_hash(changed, &secret("mysecret")), reference);

            let mut removed = base.map(Some);
            if let Some(field) = removed.get_mut(position) {
                *field = None;
            }
            assert_ne!(compute_hash(removed, &secret("mysecret")), reference);
        }

        assert_ne!(compute_hash(base.map(Some), &secret("other")), reference);
    }

    #[test]
    fn hashes_match_compares_full_digests() {
        let digest = generate_hash("a.b", &secret("s"));
        assert!(hashes_match(&digest, &digest.clone()));
        assert!(!hashes_match(&digest, &digest[..39]));
        assert!(!hashes_match(&digest, &digest.to_uppercase()));
        assert!(!hashes_match(&digest, ""));
    }
}
