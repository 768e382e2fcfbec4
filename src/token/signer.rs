//! HMAC-SHA256 signer over the JWS signing input.
//!
//! The merchant secret's raw bytes key the MAC directly, with no key
//! derivation. The remote verifier expects exactly this, so the weakness
//! stays: deriving or stretching the key here would break every deployed
//! integration.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use super::{Result, TokenError};

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA256 output size in bytes.
pub const SIGNATURE_SIZE: usize = 32;

/// Sign `base64url(header) . base64url(claims)` with the merchant secret.
///
/// # Arguments
/// * `signing_input` - ASCII bytes of the two encoded segments joined by a dot
/// * `secret` - Raw key bytes; must be non-empty
///
/// # Returns
/// The raw 32-byte HMAC-SHA256 tag.
pub fn sign(signing_input: &[u8], secret: &[u8]) -> Result<[u8; SIGNATURE_SIZE]> {
    if secret.is_empty() {
        return Err(TokenError::InvalidSecret);
    }

    let mut mac =
        <HmacSha256 as Mac>::new_from_slice(secret).map_err(|_| TokenError::InvalidSecret)?;
    mac.update(signing_input);
    Ok(mac.finalize().into_bytes().into())
}
