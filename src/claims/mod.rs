//! Typed payment-request payloads and their common claim envelope.
//!
//! Three request kinds travel between merchant and wallet provider, each
//! identified by a fixed `typ` discriminator and wrapped in the same
//! envelope (`iss`, `aud`, `typ`, `iat`, `exp`, `request`). Wire key names
//! are fixed by the remote verifier and preserved exactly.

pub mod envelope;
pub mod full_wallet;
pub mod masked_wallet;
pub mod transaction_status;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

pub use envelope::{Envelope, ResolvedEnvelope};
pub use full_wallet::{Cart, FullWalletRequest, LineItem, LineItemRole};
pub use masked_wallet::{MaskedWalletRequest, Pay, Ship};
pub use transaction_status::{FailureReason, Status, TransactionStatusNotification};

/// `typ` discriminator for a masked-wallet request.
pub const MASKED_WALLET_REQUEST_TYP: &str = "google/wallet/online/masked/v2/request";

/// `typ` discriminator for a full-wallet request.
pub const FULL_WALLET_REQUEST_TYP: &str = "google/wallet/online/full/v2/request";

/// `typ` discriminator for a transaction-status notification.
pub const TRANSACTION_STATUS_TYP: &str = "google/wallet/online/transactionstatus/v2";

/// Fixed audience emitted in every envelope. Present on the wire but never
/// validated on verify.
pub const DEFAULT_AUDIENCE: &str = "Google";

/// Default token lifetime: one hour, in milliseconds.
pub const EXPIRATION_DELTA_MILLIS: i64 = 60 * 60 * 1000;

/// A token's claims as a generic JSON object, in wire key order.
pub type Claims = serde_json::Map<String, Value>;

/// The three payment-request payload kinds, keyed by `typ`.
///
/// Serializes untagged: the wire carries the inner object under the
/// `request` claim and the discriminator separately under `typ`.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum WalletRequest {
    MaskedWallet(MaskedWalletRequest),
    FullWallet(FullWalletRequest),
    TransactionStatus(TransactionStatusNotification),
}

impl WalletRequest {
    /// The `typ` discriminator string for this payload kind.
    pub fn typ(&self) -> &'static str {
        match self {
            WalletRequest::MaskedWallet(_) => MASKED_WALLET_REQUEST_TYP,
            WalletRequest::FullWallet(_) => FULL_WALLET_REQUEST_TYP,
            WalletRequest::TransactionStatus(_) => TRANSACTION_STATUS_TYP,
        }
    }
}

#[derive(Error, Debug)]
pub enum BindError {
    #[error("missing claim: {0}")]
    MissingClaim(&'static str),
    #[error("unknown request type: {0}")]
    UnknownType(String),
    #[error("request payload does not match its declared type: {0}")]
    Payload(serde_json::Error),
}

/// Bind verified claims back to a typed request, dispatching on `typ`.
///
/// The verifier returns claims as a generic JSON object; this is the
/// explicit, statically declared inverse of canonicalization.
pub fn bind_request(claims: &Claims) -> Result<WalletRequest, BindError> {
    let typ = claims
        .get("typ")
        .and_then(Value::as_str)
        .ok_or(BindError::MissingClaim("typ"))?;
    let request = claims
        .get("request")
        .ok_or(BindError::MissingClaim("request"))?
        .clone();

    match typ {
        MASKED_WALLET_REQUEST_TYP => serde_json::from_value(request)
            .map(WalletRequest::MaskedWallet)
            .map_err(BindError::Payload),
        FULL_WALLET_REQUEST_TYP => serde_json::from_value(request)
            .map(WalletRequest::FullWallet)
            .map_err(BindError::Payload),
        TRANSACTION_STATUS_TYP => serde_json::from_value(request)
            .map(WalletRequest::TransactionStatus)
            .map_err(BindError::Payload),
        other => Err(BindError::UnknownType(other.to_string())),
    }
}

/// Envelope plus typed request, rebuilt from verified claims.
#[derive(Debug, Clone)]
pub struct WalletClaims {
    pub envelope: Envelope,
    pub request: WalletRequest,
}

impl WalletClaims {
    /// Rebuild the typed container from a verified claims object.
    ///
    /// `iss` is required; a missing `aud` falls back to the default
    /// audience (the verifier accepts any audience, including none).
    pub fn from_claims(claims: &Claims) -> Result<Self, BindError> {
        let issuer = claims
            .get("iss")
            .and_then(Value::as_str)
            .ok_or(BindError::MissingClaim("iss"))?;
        let audience = claims
            .get("aud")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_AUDIENCE);
        let envelope = Envelope {
            issuer: issuer.to_string(),
            audience: audience.to_string(),
            issued_at: claims.get("iat").and_then(Value::as_i64),
            expires_at: claims.get("exp").and_then(Value::as_i64),
        };
        Ok(Self {
            envelope,
            request: bind_request(claims)?,
        })
    }
}
