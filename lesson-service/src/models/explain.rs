use serde::Serialize;
use serde_json::Value;

/// Body of `POST /explain-ai/`.
#[derive(Debug, Default)]
pub struct ExplainRequest {
    pub question: Option<Value>,
}

impl ExplainRequest {
    /// Parse a raw request body leniently.
    ///
    /// An empty, malformed or non-object body is treated like a body without
    /// a `question` field.
    pub fn from_body(body: &[u8]) -> Self {
        let question = serde_json::from_slice::<Value>(body)
            .ok()
            .and_then(|value| match value {
                Value::Object(mut fields) => fields.remove("question"),
                _ => None,
            });

        Self { question }
    }

    /// The question text; a missing field yields an empty string and a
    /// non-string value is rendered as JSON text.
    pub fn question_text(&self) -> String {
        match &self.question {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

/// Outcome of an explain call. Both variants are returned with HTTP 200.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExplainResponse {
    Answer(String),
    Error(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_question_is_empty() {
        assert_eq!(ExplainRequest::from_body(b"{}").question_text(), "");
        assert_eq!(ExplainRequest::from_body(b"").question_text(), "");
        assert_eq!(ExplainRequest::from_body(b"not json").question_text(), "");
        assert_eq!(ExplainRequest::from_body(br#""just text""#).question_text(), "");
    }

    #[test]
    fn array_body_is_not_read_positionally() {
        assert_eq!(ExplainRequest::from_body(br#"["text"]"#).question_text(), "");
        assert_eq!(
            ExplainRequest::from_body(br#"[{"question": "text"}]"#).question_text(),
            ""
        );
    }

    #[test]
    fn question_string_is_used_verbatim() {
        let req = ExplainRequest::from_body(br#"{"question": "What is a noun?"}"#);
        assert_eq!(req.question_text(), "What is a noun?");
    }

    #[test]
    fn non_string_question_is_rendered() {
        assert_eq!(
            ExplainRequest::from_body(br#"{"question": 42}"#).question_text(),
            "42"
        );
        assert_eq!(
            ExplainRequest::from_body(br#"{"question": null}"#).question_text(),
            ""
        );
    }

    #[test]
    fn response_serializes_as_single_key_object() {
        assert_eq!(
            serde_json::to_value(ExplainResponse::Answer("short".into())).unwrap(),
            json!({"answer": "short"})
        );
        assert_eq!(
            serde_json::to_value(ExplainResponse::Error("boom".into())).unwrap(),
            json!({"error": "boom"})
        );
    }
}
