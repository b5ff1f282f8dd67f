//! Wire types exchanged with the AI service.

use bytes::Bytes;
use serde::Serialize;
use serde::de::IgnoredAny;

use super::error::UpstreamError;

/// Request body sent to the AI service.
#[derive(Debug, Serialize)]
pub struct AskPayload<'a> {
    pub question: &'a str,
}

/// Response body received from the AI service.
///
/// The bytes are kept exactly as received so callers see the upstream payload
/// unmodified. Construction only checks that the body is well-formed JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    body: Bytes,
}

impl Answer {
    /// Wrap a raw response body, rejecting anything that is not JSON.
    pub fn from_json_bytes(body: impl Into<Bytes>) -> Result<Self, UpstreamError> {
        let body = body.into();
        serde_json::from_slice::<IgnoredAny>(&body)?;
        Ok(Self { body })
    }

    /// Serialize a value into an answer body.
    #[cfg(test)]
    pub fn from_value(value: &serde_json::Value) -> Self {
        Self {
            body: Bytes::from(value.to_string()),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.body
    }

    pub fn into_bytes(self) -> Bytes {
        self.body
    }

    /// Parse the body as a JSON value.
    pub fn json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_serialization() {
        let payload = AskPayload {
            question: "What is 2+2?",
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"question":"What is 2+2?"}"#);
    }

    #[test]
    fn test_answer_keeps_bytes_verbatim() {
        let raw = r#"{ "relevant": true,  "answer": "4", "context_used": false }"#;
        let answer = Answer::from_json_bytes(raw).unwrap();
        assert_eq!(answer.as_bytes(), raw.as_bytes());
        assert_eq!(answer.json().unwrap()["answer"], "4");
    }

    #[test]
    fn test_answer_rejects_non_json() {
        let result = Answer::from_json_bytes("<html>502 Bad Gateway</html>");
        assert!(matches!(result, Err(UpstreamError::Malformed(_))));
    }

    #[test]
    fn test_answer_rejects_empty_body() {
        assert!(Answer::from_json_bytes(Bytes::new()).is_err());
    }

    #[test]
    fn test_answer_from_value() {
        let answer = Answer::from_value(&json!({"answer": "4"}));
        assert_eq!(answer.json().unwrap(), json!({"answer": "4"}));
    }
}
