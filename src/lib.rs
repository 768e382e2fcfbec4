//! # Wallet JWT
//!
//! **Signed payment-request tokens between a merchant server and an online
//! wallet provider.**
//!
//! Wallet JWT is the token engine of a merchant integration: it builds a
//! canonical claim set from a typed payment request (masked-wallet request,
//! full-wallet request, or transaction-status notification), signs it with
//! the symmetric merchant secret using HMAC-SHA256, and serializes it to
//! the compact three-segment JWT wire format. On the inverse path it
//! parses a received token, verifies the signature in constant time, and
//! checks time validity — while deliberately accepting any audience claim,
//! which the remote wallet provider never enforces.
//!
//! ## Quick Start
//!
//! ```rust
//! use wallet_jwt::claims::{Envelope, Status, TransactionStatusNotification, WalletRequest};
//! use wallet_jwt::clock::SystemClock;
//! use wallet_jwt::{issue_token, verify_token};
//!
//! let envelope = Envelope::new("merchant-123");
//! let request = WalletRequest::TransactionStatus(TransactionStatusNotification::new(
//!     "G-456", "Acme Corp", Status::Success,
//! ));
//!
//! let token = issue_token(&envelope, &request, b"merchant-secret", &SystemClock).unwrap();
//! let claims = verify_token(&token, b"merchant-secret", &SystemClock).unwrap();
//! assert_eq!(claims["iss"], "merchant-123");
//! ```
//!
//! ## Architecture
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`claims`] | Typed request payloads, the claim envelope, typed rebinding |
//! | [`token`] | Canonicalizer, HMAC-SHA256 signer, compact codec, verifier |
//! | [`clock`] | Injectable wall clock (system and fixed test clocks) |
//! | [`secret`] | Zeroizing wrapper for the process-wide merchant secret |
//!
//! ## Scope
//!
//! Symmetric HS256 only: no asymmetric signing, no key rotation or
//! discovery, no audience enforcement, no replay store, no persistence of
//! issued tokens. Every operation is a pure synchronous computation over
//! its own arguments and safe to call from many request-handling threads
//! without locking.

// ── Public modules ──────────────────────────────────────────────────────────

/// Typed payment-request payloads, the common claim envelope, and typed
/// rebinding of verified claims.
pub mod claims;

/// Injectable wall clock used for `iat`/`exp` defaults and expiry checks.
pub mod clock;

/// Zeroizing wrapper for the merchant signing secret.
pub mod secret;

/// JWT canonicalization, signing, encoding, and verification.
pub mod token;

// ── Re-exports for convenience ──────────────────────────────────────────────

pub use claims::{
    bind_request, Cart, Claims, Envelope, FailureReason, FullWalletRequest, LineItem,
    LineItemRole, MaskedWalletRequest, Pay, Ship, Status, TransactionStatusNotification,
    WalletClaims, WalletRequest,
};

pub use clock::{Clock, FixedClock, SystemClock};

pub use secret::MerchantSecret;

pub use token::{issue_token, verify_token, Header, TokenError};

// ── Library metadata ────────────────────────────────────────────────────────

/// Wallet JWT library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version string.
pub fn version() -> &'static str {
    VERSION
}

// ── Tests ───────────────────────────────────────────────────────────────────
