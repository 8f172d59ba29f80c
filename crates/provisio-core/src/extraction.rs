//! Request and result of a single snippet extraction.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{self, DocumentError};
use crate::snippet::SnippetExtractor;

/// Language code echoed back when the request does not carry one.
pub const DEFAULT_LANGUAGE: &str = "FR";

/// One decision's text, as sent by the preprocessing pipeline.
///
/// Missing or `null` fields fall back to `""` (`decision_id`,
/// `markdown_text`) and [`DEFAULT_LANGUAGE`] (`language`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExtractionRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub decision_id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub markdown_text: String,
    #[serde(default = "default_language", deserialize_with = "null_as_default_language")]
    pub language: String,
}

impl Default for ExtractionRequest {
    fn default() -> Self {
        Self {
            decision_id: String::new(),
            markdown_text: String::new(),
            language: default_language(),
        }
    }
}

impl ExtractionRequest {
    pub fn from_value(value: serde_json::Value) -> Result<Self, DocumentError> {
        error::from_object(value)
    }
}

/// Unique snippets found in one decision.
///
/// `text_rows` carries no ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    #[serde(rename = "decisionId")]
    pub decision_id: String,
    pub language: String,
    pub text_rows: Vec<String>,
}

impl SnippetExtractor {
    /// Run the extraction for `request`. Empty text short-circuits to an
    /// empty result.
    pub fn extract(&self, request: &ExtractionRequest) -> ExtractionResult {
        let text_rows = if request.markdown_text.is_empty() {
            Vec::new()
        } else {
            self.snippets(&request.markdown_text).into_iter().collect()
        };
        ExtractionResult {
            decision_id: request.decision_id.clone(),
            language: request.language.clone(),
            text_rows,
        }
    }
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_default_language<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_language))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snippet::CONTEXT_WINDOW_SIZE;
    use serde_json::json;

    fn extractor() -> SnippetExtractor {
        SnippetExtractor::new(CONTEXT_WINDOW_SIZE).unwrap()
    }

    #[test]
    fn empty_request_yields_empty_rows() {
        let req = ExtractionRequest::from_value(json!({
            "decision_id": "",
            "markdown_text": "",
            "language": "NL"
        }))
        .unwrap();
        let result = extractor().extract(&req);
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"decisionId": "", "language": "NL", "text_rows": []})
        );
    }

    #[test]
    fn missing_fields_take_defaults() {
        let req = ExtractionRequest::from_value(json!({})).unwrap();
        assert_eq!(req, ExtractionRequest::default());
        assert_eq!(req.language, "FR");
    }

    #[test]
    fn null_fields_take_defaults() {
        let req = ExtractionRequest::from_value(json!({
            "decision_id": null,
            "markdown_text": null,
            "language": null
        }))
        .unwrap();
        assert_eq!(req, ExtractionRequest::default());
    }

    #[test]
    fn non_string_text_rejected() {
        let err = ExtractionRequest::from_value(json!({"markdown_text": 12})).unwrap_err();
        assert!(matches!(err, DocumentError::Json(_)));
    }

    #[test]
    fn result_echoes_id_and_language() {
        let req = ExtractionRequest {
            decision_id: "ECLI:BE:CASS:2021:ARR.1".into(),
            markdown_text: "Gelet op artikel 1382 van het Burgerlijk Wetboek.".into(),
            language: "NL".into(),
        };
        let result = extractor().extract(&req);
        assert_eq!(result.decision_id, "ECLI:BE:CASS:2021:ARR.1");
        assert_eq!(result.language, "NL");
        assert_eq!(
            result.text_rows,
            vec!["Gelet op artikel 1382 van het Burgerlijk Wetboek.".to_string()]
        );
    }

    #[test]
    fn duplicate_snippets_appear_once() {
        let req = ExtractionRequest {
            markdown_text: format!("Art. 10 {} article 10 du Code", "y".repeat(45)),
            ..Default::default()
        };
        let result = extractor().extract(&req);
        assert_eq!(result.text_rows.len(), 1);
    }

    #[test]
    fn result_serializes_camel_case_id() {
        let result = ExtractionResult {
            decision_id: "d1".into(),
            language: "FR".into(),
            text_rows: vec!["article 1".into()],
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["decisionId"], "d1");
        assert!(value.get("decision_id").is_none());
    }
}
