//! Common claim envelope shared by every request kind.
//!
//! The envelope carries the issuer, audience, and token lifetime. It is
//! value data: constructed once per interaction, fully populated before it
//! reaches the canonicalizer, and independent of any live connection.

use serde::{Deserialize, Serialize};

use super::{DEFAULT_AUDIENCE, EXPIRATION_DELTA_MILLIS};
use crate::clock::Clock;

/// Issuer, audience, and optional lifetime of a token to be issued.
///
/// `issued_at` and `expires_at` are milliseconds since the Unix epoch.
/// Either may be left unset; [`Envelope::resolve`] fills the defaults at
/// sign time (now, and now plus one hour respectively).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    pub issuer: String,
    pub audience: String,
    pub issued_at: Option<i64>,
    pub expires_at: Option<i64>,
}

impl Envelope {
    /// Envelope for `issuer` with the fixed default audience and defaulted
    /// lifetime.
    pub fn new(issuer: impl Into<String>) -> Self {
        Self {
            issuer: issuer.into(),
            audience: DEFAULT_AUDIENCE.to_string(),
            issued_at: None,
            expires_at: None,
        }
    }

    /// Envelope with an explicit issue time; expiry still defaults to
    /// `issued_at` plus one hour at resolution.
    pub fn with_issued_at(issuer: impl Into<String>, issued_at: i64) -> Self {
        Self {
            issued_at: Some(issued_at),
            ..Self::new(issuer)
        }
    }

    /// Fill in missing timestamps from `clock`.
    ///
    /// `issued_at` defaults to now; `expires_at` defaults to `issued_at`
    /// plus [`EXPIRATION_DELTA_MILLIS`]. The `expires_at > issued_at`
    /// invariant is enforced by the issue pipeline after resolution.
    pub fn resolve(&self, clock: &dyn Clock) -> ResolvedEnvelope {
        let issued_at = self.issued_at.unwrap_or_else(|| clock.now_millis());
        let expires_at = self
            .expires_at
            .unwrap_or(issued_at + EXPIRATION_DELTA_MILLIS);
        ResolvedEnvelope {
            issuer: self.issuer.clone(),
            audience: self.audience.clone(),
            issued_at,
            expires_at,
        }
    }
}

/// An [`Envelope`] with both timestamps resolved, ready to canonicalize.
#[derive(Debug, Clone)]
pub struct ResolvedEnvelope {
    pub issuer: String,
    pub audience: String,
    pub issued_at: i64,
    pub expires_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    #[test]
    fn test_resolve_defaults_both_timestamps() {
        let clock = FixedClock::new(1000);
        let resolved = Envelope::new("merchant").resolve(&clock);
        assert_eq!(resolved.issued_at, 1000);
        assert_eq!(resolved.expires_at, 1000 + EXPIRATION_DELTA_MILLIS);
    }

    #[test]
    fn test_resolve_keeps_explicit_timestamps() {
        let clock = FixedClock::new(99_999);
        let mut envelope = Envelope::with_issued_at("merchant", 5000);
        envelope.expires_at = Some(6000);
        let resolved = envelope.resolve(&clock);
        assert_eq!(resolved.issued_at, 5000);
        assert_eq!(resolved.expires_at, 6000);
    }

    #[test]
    fn test_resolve_defaults_expiry_from_explicit_iat() {
        let clock = FixedClock::new(99_999);
        let resolved = Envelope::with_issued_at("merchant", 5000).resolve(&clock);
        assert_eq!(resolved.issued_at, 5000);
        assert_eq!(resolved.expires_at, 5000 + EXPIRATION_DELTA_MILLIS);
    }

    #[test]
    fn test_default_audience() {
        let envelope = Envelope::new("merchant");
        assert_eq!(envelope.audience, DEFAULT_AUDIENCE);
    }
}
