use crate::core::Severity;
use serde::Deserialize;

/// Wire shape of one review record, before validation. Every field is
/// optional so a missing or null field degrades to rejection instead of a
/// decode error with a different meaning.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(default)]
    line: Option<i64>,

    #[serde(default)]
    comment: Option<String>,

    #[serde(default)]
    severity: Option<Severity>,
}

/// A validated record that has passed the acceptance predicate but has not
/// yet been assigned an identity by the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRecord {
    pub line: u32,
    pub message: String,
    pub severity: Severity,
}

impl RawRecord {
    fn validate(self) -> Option<ReviewRecord> {
        let line = u32::try_from(self.line.filter(|&l| l > 0)?).ok()?;
        let message = self.comment.filter(|c| !c.is_empty())?;
        let severity = self.severity?;

        Some(ReviewRecord {
            line,
            message,
            severity,
        })
    }
}

/// Acceptance predicate for one newline-delimited candidate record.
/// `None` is the normal outcome for malformed input, never an error.
pub fn decode_line(candidate: &str) -> Option<ReviewRecord> {
    serde_json::from_str::<RawRecord>(candidate).ok()?.validate()
}

/// Same acceptance predicate, applied to one element of a batch-mode array.
pub fn decode_value(value: serde_json::Value) -> Option<ReviewRecord> {
    serde_json::from_value::<RawRecord>(value).ok()?.validate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_record() {
        let record = decode_line(r#"{"line":3,"comment":"ok","severity":"info"}"#).unwrap();
        assert_eq!(record.line, 3);
        assert_eq!(record.message, "ok");
        assert_eq!(record.severity, Severity::Info);
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(decode_line("<garbage>").is_none());
        assert!(decode_line("").is_none());
        assert!(decode_line("null").is_none());
        assert!(decode_line("[1,2,3]").is_none());
    }

    #[test]
    fn test_missing_fields_rejected() {
        assert!(decode_line(r#"{"line":3,"comment":"ok"}"#).is_none());
        assert!(decode_line(r#"{"line":3,"severity":"info"}"#).is_none());
        assert!(decode_line(r#"{"comment":"ok","severity":"info"}"#).is_none());
    }

    #[test]
    fn test_wrong_types_rejected() {
        assert!(decode_line(r#"{"line":"3","comment":"ok","severity":"info"}"#).is_none());
        assert!(decode_line(r#"{"line":3.5,"comment":"ok","severity":"info"}"#).is_none());
        assert!(decode_line(r#"{"line":3,"comment":42,"severity":"info"}"#).is_none());
        assert!(decode_line(r#"{"line":3,"comment":"ok","severity":"fatal"}"#).is_none());
    }

    #[test]
    fn test_line_must_be_positive() {
        assert!(decode_line(r#"{"line":0,"comment":"ok","severity":"info"}"#).is_none());
        assert!(decode_line(r#"{"line":-2,"comment":"ok","severity":"info"}"#).is_none());
    }

    #[test]
    fn test_empty_message_rejected() {
        assert!(decode_line(r#"{"line":3,"comment":"","severity":"info"}"#).is_none());
    }

    #[test]
    fn test_surrounding_whitespace_tolerated() {
        assert!(decode_line("  {\"line\":3,\"comment\":\"ok\",\"severity\":\"info\"}\r").is_some());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let record =
            decode_line(r#"{"line":7,"comment":"bad","severity":"critical","rule":"R1"}"#).unwrap();
        assert_eq!(record.severity, Severity::Critical);
    }

    #[test]
    fn test_value_path_matches_line_path() {
        let value = json!({"line": 9, "comment": "dup", "severity": "warning"});
        let text = value.to_string();
        assert_eq!(decode_value(value), decode_line(&text));
    }
}
