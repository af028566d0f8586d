//! Quote request types
//!
//! A `QuoteRequest` is the message a caller submits when asking for a price.
//! It is created once by the submission path, stored in the pending-request
//! registry, and published on the request channel; it is never mutated.

use crate::ids::RequestId;
use serde::{Deserialize, Serialize};

/// A request for a quote on a subject
///
/// Wire shape: `{ "id": "<uuid>", "subject": "<string>" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Correlation identifier, minted at submission
    pub id: RequestId,
    /// Free-form description of what is being priced
    pub subject: String,
}

impl QuoteRequest {
    /// Create a new request with a fresh correlation identifier
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            id: RequestId::new(),
            subject: subject.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_requests_get_distinct_ids() {
        let a = QuoteRequest::new("Widget");
        let b = QuoteRequest::new("Widget");
        assert_ne!(a.id, b.id);
        assert_eq!(a.subject, b.subject);
    }

    #[test]
    fn test_wire_roundtrip() {
        let request = QuoteRequest::new("Widget");
        let json = serde_json::to_string(&request).unwrap();
        let parsed: QuoteRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request, parsed);
    }

    #[test]
    fn test_wire_field_names() {
        let request = QuoteRequest::new("Widget");
        let value: serde_json::Value = serde_json::to_value(&request).unwrap();
        assert!(value.get("id").is_some());
        assert_eq!(value.get("subject").unwrap(), "Widget");
    }

    #[test]
    fn test_missing_subject_is_rejected() {
        let result: Result<QuoteRequest, _> =
            serde_json::from_str(r#"{"id":"8b6f0c1e-9f7a-4e65-b2fc-1d2f0a4c9e11"}"#);
        assert!(result.is_err());
    }
}
