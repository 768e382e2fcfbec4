//! JWT construction, signing, and verification engine.
//!
//! Compact token wire format, ASCII with no embedded whitespace:
//! ```text
//! base64url(header) . base64url(claims) . base64url(signature)
//! ```
//! The header is `{"alg":"HS256"}`, the claims are the flattened envelope
//! plus one `request` object, and the signature is raw HMAC-SHA256 output
//! keyed with the merchant secret's bytes.
//!
//! Issue path: canonicalize → sign → encode. Validate path: decode →
//! constant-time signature check → time check. Every operation is a
//! synchronous pure computation over its own arguments; calls are safe to
//! run concurrently without locking.

pub mod canonical;
pub mod codec;
pub mod signer;
pub mod verifier;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::claims::{Claims, Envelope, WalletRequest};
use crate::clock::Clock;

pub use canonical::canonicalize;
pub use codec::{decode, encode, DecodedToken};
pub use signer::sign;
pub use verifier::verify;

/// The only signing algorithm this engine speaks.
pub const ALG_HS256: &str = "HS256";

/// Every way a token operation can fail. Failures are returned as values;
/// the engine never logs, retries, or swallows them. The caller decides
/// user-facing behavior.
#[derive(Error, Debug)]
pub enum TokenError {
    /// The signing key is empty. Fatal to the operation, never retried.
    #[error("signing secret is empty")]
    InvalidSecret,
    /// Not three valid non-empty base64url segments, or a body that is not
    /// a JSON object.
    #[error("malformed token")]
    MalformedToken,
    /// Recomputed signature does not match, or the header declares an
    /// unsupported algorithm.
    #[error("signature verification failed")]
    InvalidSignature,
    /// The current time is at or past the token's `exp` claim.
    #[error("token expired")]
    TokenExpired,
    /// Resolved expiry does not fall strictly after the issue time.
    #[error("expiry {exp} is not after issue time {iat}")]
    InvalidLifetime { iat: i64, exp: i64 },
    /// Claims that cannot be serialized. The only internal-fault channel.
    #[error("claims serialization failed: {0}")]
    Json(serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TokenError>;

/// JWS header. Only HS256 is ever emitted; `kid` is tolerated on parse and
/// may carry an informational key hint, it is not security-relevant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Header {
    #[serde(default)]
    pub alg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,
}

impl Header {
    /// The fixed `{"alg":"HS256"}` header.
    pub fn hs256() -> Self {
        Self {
            alg: ALG_HS256.to_string(),
            kid: None,
        }
    }
}

/// Canonicalize, sign, and encode a payment request into a compact token.
///
/// Missing envelope timestamps are defaulted from `clock` (now, and now
/// plus one hour); the resolved lifetime must satisfy `exp > iat`.
///
/// # Arguments
/// * `envelope` - Issuer, audience, and optional lifetime
/// * `request` - The typed payload; its kind fixes the `typ` claim
/// * `secret` - Raw merchant secret bytes, used directly as the HMAC key
/// * `clock` - Time source for the `iat`/`exp` defaults
pub fn issue_token(
    envelope: &Envelope,
    request: &WalletRequest,
    secret: &[u8],
    clock: &dyn Clock,
) -> Result<String> {
    let resolved = envelope.resolve(clock);
    if resolved.expires_at <= resolved.issued_at {
        return Err(TokenError::InvalidLifetime {
            iat: resolved.issued_at,
            exp: resolved.expires_at,
        });
    }

    debug!(
        "issuing {} token for issuer {}",
        request.typ(),
        resolved.issuer
    );

    let claims = canonical::canonicalize(&resolved, request)?;
    let header_json = serde_json::to_vec(&Header::hs256()).map_err(TokenError::Json)?;
    let claims_json = serde_json::to_vec(&claims).map_err(TokenError::Json)?;

    let signing_input = codec::signing_input(&header_json, &claims_json);
    let signature = signer::sign(signing_input.as_bytes(), secret)?;

    Ok(codec::encode(&header_json, &claims_json, &signature))
}

/// Decode and verify a compact token, returning its claims.
///
/// The signature is recomputed over the received bytes and compared in
/// constant time; the audience claim is deliberately never checked; `exp`
/// is compared against `clock`. See [`verifier::verify`] for the gate
/// order.
pub fn verify_token(token: &str, secret: &[u8], clock: &dyn Clock) -> Result<Claims> {
    debug!("verifying token ({} bytes)", token.len());
    verifier::verify(token, secret, clock.now_millis())
}
