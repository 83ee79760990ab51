// services/checksum.rs
use sha2::{Digest, Sha256};

/// X-VERIFY signature the gateway requires on every pay call:
/// `sha256(base64_payload + api_path + salt_key)` as lowercase hex, then
/// the literal `###` and the salt index. Concatenation order and separator
/// are fixed by the gateway; any deviation is rejected as a signature
/// mismatch.
pub fn x_verify(encoded_payload: &str, api_path: &str, salt_key: &str, salt_index: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(encoded_payload.as_bytes());
    hasher.update(api_path.as_bytes());
    hasher.update(salt_key.as_bytes());
    format!("{:x}###{}", hasher.finalize(), salt_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_is_deterministic() {
        let a = x_verify("cGF5bG9hZA==", "/pg/v1/pay", "salt-key", "1");
        let b = x_verify("cGF5bG9hZA==", "/pg/v1/pay", "salt-key", "1");
        assert_eq!(a, b);
    }

    #[test]
    fn signature_ends_with_separator_and_salt_index() {
        let signature = x_verify("cGF5bG9hZA==", "/pg/v1/pay", "salt-key", "7");
        assert!(signature.ends_with("###7"));
    }

    #[test]
    fn digest_covers_payload_path_and_salt() {
        let base = x_verify("a", "b", "c", "1");
        assert_ne!(base, x_verify("x", "b", "c", "1"));
        assert_ne!(base, x_verify("a", "x", "c", "1"));
        assert_ne!(base, x_verify("a", "b", "x", "1"));
    }

    #[test]
    fn digest_matches_known_sha256_vector() {
        // sha256("abc")
        let signature = x_verify("a", "b", "c", "0");
        assert_eq!(
            signature,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad###0"
        );
    }
}
