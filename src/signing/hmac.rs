/// HMAC-SHA256 signature generation and validation
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Prefix of the `X-Signature-256` header value
pub const SIGNATURE_PREFIX: &str = "sha256=";

/// Create HMAC-SHA256 signature
///
/// # Arguments
/// * `payload` - Canonical payload bytes
/// * `secret` - Shared secret key (used as its UTF-8 bytes)
///
/// # Returns
/// Lowercase hex-encoded HMAC signature (64 characters)
pub fn create_signature(payload: &[u8], secret: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(payload);
    hex::encode(mac.finalize().into_bytes())
}

/// Verify HMAC signature
///
/// Accepts the bare hex digest or the `sha256=` header form.
pub fn verify_signature(payload: &[u8], secret: &str, signature: &str) -> bool {
    let expected = create_signature(payload, secret);
    let provided = signature.strip_prefix(SIGNATURE_PREFIX).unwrap_or(signature);

    // Use constant-time comparison to prevent timing attacks
    use subtle::ConstantTimeEq;
    expected.as_bytes().ct_eq(provided.as_bytes()).into()
}

/// Value for the `X-Signature-256` header
pub fn signature_header(signature: &str) -> String {
    format!("{}{}", SIGNATURE_PREFIX, signature)
}
