//! Transaction-status notification payload: the merchant reports the
//! outcome of a processed payment back to the wallet provider.

use serde::{Deserialize, Serialize};

/// Outcome of the transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Success,
    Failure,
}

/// Why the transaction failed. Only meaningful alongside
/// [`Status::Failure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FailureReason {
    BadCvc,
    BadCard,
    Declined,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionStatusNotification {
    pub google_transaction_id: String,
    pub merchant_name: String,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<FailureReason>,
}

impl TransactionStatusNotification {
    pub fn new(
        google_transaction_id: impl Into<String>,
        merchant_name: impl Into<String>,
        status: Status,
    ) -> Self {
        Self {
            google_transaction_id: google_transaction_id.into(),
            merchant_name: merchant_name.into(),
            status,
            reason: None,
        }
    }

    /// Failure notification with its reason.
    pub fn failure(
        google_transaction_id: impl Into<String>,
        merchant_name: impl Into<String>,
        reason: FailureReason,
    ) -> Self {
        Self {
            reason: Some(reason),
            ..Self::new(google_transaction_id, merchant_name, Status::Failure)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_strings() {
        let success = TransactionStatusNotification::new("T1", "Acme", Status::Success);
        let json = serde_json::to_value(success).unwrap();
        assert_eq!(json["status"], "SUCCESS");
        assert!(!json.as_object().unwrap().contains_key("reason"));
    }

    #[test]
    fn test_failure_carries_reason() {
        let failure = TransactionStatusNotification::failure("T1", "Acme", FailureReason::BadCvc);
        let json = serde_json::to_value(failure).unwrap();
        assert_eq!(json["status"], "FAILURE");
        assert_eq!(json["reason"], "BAD_CVC");
    }

    #[test]
    fn test_reason_wire_strings() {
        for (reason, wire) in [
            (FailureReason::BadCvc, "BAD_CVC"),
            (FailureReason::BadCard, "BAD_CARD"),
            (FailureReason::Declined, "DECLINED"),
            (FailureReason::Other, "OTHER"),
        ] {
            assert_eq!(serde_json::to_value(reason).unwrap(), wire);
        }
    }

    #[test]
    fn test_notification_round_trips_through_json() {
        let failure = TransactionStatusNotification::failure("T2", "Acme", FailureReason::Declined);
        let json = serde_json::to_string(&failure).unwrap();
        let back: TransactionStatusNotification = serde_json::from_str(&json).unwrap();
        assert_eq!(back.status, Status::Failure);
        assert_eq!(back.reason, Some(FailureReason::Declined));
        assert_eq!(back.google_transaction_id, "T2");
    }
}
