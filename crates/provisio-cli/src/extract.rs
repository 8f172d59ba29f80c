//! Single-shot stdin → stdout snippet extraction, called once per decision
//! by the preprocessing pipeline.
//!
//! Success writes `{decisionId, language, text_rows}` to the output stream.
//! Failure writes `{error, type}` to the error stream and the process exits
//! with status 1.

use std::io::{self, Read, Write};

use provisio_core::{DocumentError, ExtractionRequest, SnippetExtractor};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read request: {0}")]
    Read(#[source] io::Error),

    #[error("invalid JSON request: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("invalid request: {0}")]
    Request(#[from] DocumentError),

    #[error("failed to write result: {0}")]
    Write(#[source] serde_json::Error),

    #[error("failed to flush result: {0}")]
    Flush(#[source] io::Error),

    #[error("keyword pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl ExtractError {
    /// Category written to the `type` field of the error payload.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Read(_) | Self::Flush(_) => "Io",
            Self::Decode(_) | Self::Request(_) => "InvalidInput",
            Self::Write(e) if e.is_io() => "Io",
            Self::Write(_) => "Serialization",
            Self::Pattern(_) => "Internal",
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorPayload<'a> {
    error: String,
    #[serde(rename = "type")]
    kind: &'a str,
}

/// Read one request from `input`, extract, and write the result to `output`.
pub fn run<R: Read, W: Write>(
    mut input: R,
    mut output: W,
    extractor: &SnippetExtractor,
) -> Result<(), ExtractError> {
    let mut raw = String::new();
    input.read_to_string(&mut raw).map_err(ExtractError::Read)?;

    let value: serde_json::Value = serde_json::from_str(&raw).map_err(ExtractError::Decode)?;
    let request = ExtractionRequest::from_value(value)?;
    debug!(
        decision_id = %request.decision_id,
        language = %request.language,
        chars = request.markdown_text.chars().count(),
        "extracting provision snippets"
    );

    let result = extractor.extract(&request);
    debug!(rows = result.text_rows.len(), "extraction complete");

    serde_json::to_writer(&mut output, &result).map_err(ExtractError::Write)?;
    output.flush().map_err(ExtractError::Flush)
}

/// Write the structured error payload for `err`.
pub fn write_error<W: Write>(mut output: W, err: &ExtractError) -> io::Result<()> {
    let payload = ErrorPayload {
        error: err.to_string(),
        kind: err.kind(),
    };
    serde_json::to_writer(&mut output, &payload)?;
    output.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use provisio_core::{CONTEXT_WINDOW_SIZE, ExtractionResult};
    use serde_json::json;

    fn extract(input: &str) -> Result<serde_json::Value, ExtractError> {
        let extractor = SnippetExtractor::new(CONTEXT_WINDOW_SIZE).unwrap();
        let mut out = Vec::new();
        run(input.as_bytes(), &mut out, &extractor)?;
        Ok(serde_json::from_slice(&out).unwrap())
    }

    #[test]
    fn empty_text_round_trip() {
        let out = extract(r#"{"decision_id": "", "markdown_text": "", "language": "NL"}"#).unwrap();
        assert_eq!(out, json!({"decisionId": "", "language": "NL", "text_rows": []}));
    }

    #[test]
    fn defaults_for_missing_fields() {
        let out = extract("{}").unwrap();
        assert_eq!(out, json!({"decisionId": "", "language": "FR", "text_rows": []}));
    }

    #[test]
    fn snippets_written_to_output() {
        let input = json!({
            "decision_id": "ECLI:BE:CASS:2019:ARR.1",
            "markdown_text": "Vu l'article 1382 du Code civil.\n\nArt. 6 CEDH.",
            "language": "FR"
        })
        .to_string();
        let out = extract(&input).unwrap();
        let result: ExtractionResult = serde_json::from_value(out).unwrap();
        assert_eq!(result.decision_id, "ECLI:BE:CASS:2019:ARR.1");
        assert_eq!(
            result.text_rows,
            vec!["Vu l'article 1382 du Code civil. Art. 6 CEDH.".to_string()]
        );
    }

    #[test]
    fn non_ascii_written_verbatim() {
        let extractor = SnippetExtractor::new(CONTEXT_WINDOW_SIZE).unwrap();
        let mut out = Vec::new();
        run(
            r#"{"markdown_text": "Selon l'article 3, la société réclame"}"#.as_bytes(),
            &mut out,
            &extractor,
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("société réclame"));
    }

    #[test]
    fn malformed_json_is_invalid_input() {
        let err = extract("{\"decision_id\": ").unwrap_err();
        assert!(matches!(err, ExtractError::Decode(_)));
        assert_eq!(err.kind(), "InvalidInput");
    }

    #[test]
    fn non_object_is_invalid_input() {
        let err = extract(r#"["a", "b", "c"]"#).unwrap_err();
        assert!(matches!(err, ExtractError::Request(_)));
        assert_eq!(err.kind(), "InvalidInput");
    }

    #[test]
    fn wrong_field_type_is_invalid_input() {
        let err = extract(r#"{"markdown_text": ["article 1"]}"#).unwrap_err();
        assert_eq!(err.kind(), "InvalidInput");
    }

    #[test]
    fn invalid_utf8_is_io() {
        let extractor = SnippetExtractor::new(CONTEXT_WINDOW_SIZE).unwrap();
        let err = run(&[0xff, 0xfe, b'{'][..], Vec::new(), &extractor).unwrap_err();
        assert!(matches!(err, ExtractError::Read(_)));
        assert_eq!(err.kind(), "Io");
    }

    #[test]
    fn error_payload_shape() {
        let err = extract("not json").unwrap_err();
        let mut buf = Vec::new();
        write_error(&mut buf, &err).unwrap();
        let payload: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(payload["type"], "InvalidInput");
        assert!(
            payload["error"]
                .as_str()
                .unwrap()
                .starts_with("invalid JSON request:")
        );
        assert_eq!(payload.as_object().unwrap().len(), 2);
    }
}
