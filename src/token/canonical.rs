//! Canonicalizer: typed envelope + payload → ordered claims object.
//!
//! A pure transform with no validation of its own; anything the request
//! structs guarantee at construction is taken as given. Claim keys come
//! out in fixed wire order (`iss`, `aud`, `typ`, `iat`, `exp`, `request`)
//! with the payload nested under `request`.

use serde_json::Value;

use super::{Result, TokenError};
use crate::claims::{Claims, ResolvedEnvelope, WalletRequest};

/// Flatten a resolved envelope and its payload into the claims object.
///
/// Nested structures keep their declared field order; unset optional
/// fields are absent rather than `null`.
pub fn canonicalize(envelope: &ResolvedEnvelope, request: &WalletRequest) -> Result<Claims> {
    let mut claims = Claims::new();
    claims.insert("iss".to_string(), Value::from(envelope.issuer.clone()));
    claims.insert("aud".to_string(), Value::from(envelope.audience.clone()));
    claims.insert("typ".to_string(), Value::from(request.typ()));
    claims.insert("iat".to_string(), Value::from(envelope.issued_at));
    claims.insert("exp".to_string(), Value::from(envelope.expires_at));
    claims.insert(
        "request".to_string(),
        serde_json::to_value(request).map_err(TokenError::Json)?,
    );
    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claims::{
        Envelope, Status, TransactionStatusNotification, DEFAULT_AUDIENCE, TRANSACTION_STATUS_TYP,
    };
    use crate::clock::FixedClock;

    fn canonical_status_claims() -> Claims {
        let envelope = Envelope::new("merchant-1").resolve(&FixedClock::new(1000));
        let request = WalletRequest::TransactionStatus(TransactionStatusNotification::new(
            "T1",
            "Acme",
            Status::Success,
        ));
        canonicalize(&envelope, &request).unwrap()
    }

    #[test]
    fn test_claim_keys_in_wire_order() {
        let claims = canonical_status_claims();
        let keys: Vec<&str> = claims.keys().map(String::as_str).collect();
        assert_eq!(keys, ["iss", "aud", "typ", "iat", "exp", "request"]);
    }

    #[test]
    fn test_envelope_fields_flattened() {
        let claims = canonical_status_claims();
        assert_eq!(claims["iss"], "merchant-1");
        assert_eq!(claims["aud"], DEFAULT_AUDIENCE);
        assert_eq!(claims["typ"], TRANSACTION_STATUS_TYP);
        assert_eq!(claims["iat"], 1000);
    }

    #[test]
    fn test_payload_nested_under_request() {
        let claims = canonical_status_claims();
        let request = claims["request"].as_object().unwrap();
        assert_eq!(request["googleTransactionId"], "T1");
        assert_eq!(request["status"], "SUCCESS");
        assert!(!request.contains_key("reason"));
    }

    #[test]
    fn test_canonicalize_is_deterministic() {
        let a = serde_json::to_string(&canonical_status_claims()).unwrap();
        let b = serde_json::to_string(&canonical_status_claims()).unwrap();
        assert_eq!(a, b);
    }
}
