//! Validate path: decode, check the signature in constant time, check
//! expiry.
//!
//! Single atomic pass per token, every step a hard gate:
//! `Received → Decoded → SignatureChecked → TimeChecked → Accepted`, with a
//! rejection reachable from each state. Nothing is cached between calls
//! and no step is retried.

use serde_json::Value;
use subtle::ConstantTimeEq;

use super::{codec, signer, Result, TokenError, ALG_HS256};
use crate::claims::Claims;

/// Decode `token`, verify its signature against `secret`, and check time
/// validity at `now_millis`.
///
/// The MAC is recomputed over the received header and claims segments
/// exactly as they arrived on the wire, then compared against the received
/// signature in constant time. The audience claim is never compared
/// against an expected value: any audience, including absent, is accepted
/// once the signature holds. Ignoring the audience does not mean the
/// signature is ignored. A missing `exp` means no expiry is enforced.
///
/// # Returns
/// The claims as a generic JSON object; binding to a typed payload via
/// `typ` is the caller's next step.
pub fn verify(token: &str, secret: &[u8], now_millis: i64) -> Result<Claims> {
    let decoded = codec::decode(token)?;

    if decoded.header.alg != ALG_HS256 {
        return Err(TokenError::InvalidSignature);
    }

    let expected = signer::sign(decoded.signing_input.as_bytes(), secret)?;
    if !signatures_match(&expected, &decoded.signature) {
        return Err(TokenError::InvalidSignature);
    }

    if let Some(exp) = decoded.claims.get("exp").and_then(Value::as_i64) {
        if now_millis >= exp {
            return Err(TokenError::TokenExpired);
        }
    }

    Ok(decoded.claims)
}

/// Constant-time signature comparison. Length is public information; the
/// content comparison must not leak through timing.
fn signatures_match(expected: &[u8], received: &[u8]) -> bool {
    if expected.len() != received.len() {
        return false;
    }
    expected.ct_eq(received).into()
}
