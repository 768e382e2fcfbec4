//! Compact token codec.
//!
//! Wire format, ASCII with no embedded whitespace:
//! ```text
//! base64url(header) . base64url(claims) . base64url(signature)
//! ```
//! Base64url alphabet (`-`/`_`), no padding emitted; padding is tolerated
//! and stripped on decode. The decoded result keeps the header and claims
//! segments exactly as received so the verifier can recompute the MAC over
//! byte-identical input instead of re-serializing parsed objects.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde_json::Value;

use super::{Header, Result, TokenError};
use crate::claims::Claims;

/// A parsed token, with the raw signing input retained.
#[derive(Debug, Clone)]
pub struct DecodedToken {
    pub header: Header,
    /// Claims as a generic JSON object; `typ` dispatch is the caller's job.
    pub claims: Claims,
    /// Raw signature bytes from the third segment.
    pub signature: Vec<u8>,
    /// `header_segment.claims_segment` exactly as received.
    pub signing_input: String,
}

/// The ASCII signing input for the given encoded header and claims.
pub fn signing_input(header_json: &[u8], claims_json: &[u8]) -> String {
    format!(
        "{}.{}",
        URL_SAFE_NO_PAD.encode(header_json),
        URL_SAFE_NO_PAD.encode(claims_json)
    )
}

/// Encode header, claims, and signature into the three-segment compact
/// form.
pub fn encode(header_json: &[u8], claims_json: &[u8], signature: &[u8]) -> String {
    format!(
        "{}.{}",
        signing_input(header_json, claims_json),
        URL_SAFE_NO_PAD.encode(signature)
    )
}

/// Parse a compact token into header, claims, and signature.
///
/// Fails with [`TokenError::MalformedToken`] unless the string splits into
/// exactly three non-empty dot-separated segments, each base64url
/// decodable, with a JSON-object claims body.
pub fn decode(token: &str) -> Result<DecodedToken> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 || segments.iter().any(|segment| segment.is_empty()) {
        return Err(TokenError::MalformedToken);
    }

    let header_bytes = decode_segment(segments[0])?;
    let claims_bytes = decode_segment(segments[1])?;
    let signature = decode_segment(segments[2])?;

    let header: Header =
        serde_json::from_slice(&header_bytes).map_err(|_| TokenError::MalformedToken)?;
    let claims = match serde_json::from_slice(&claims_bytes) {
        Ok(Value::Object(claims)) => claims,
        _ => return Err(TokenError::MalformedToken),
    };

    Ok(DecodedToken {
        header,
        claims,
        signature,
        signing_input: format!("{}.{}", segments[0], segments[1]),
    })
}

fn decode_segment(segment: &str) -> Result<Vec<u8>> {
    URL_SAFE_NO_PAD
        .decode(segment.trim_end_matches('='))
        .map_err(|_| TokenError::MalformedToken)
}
