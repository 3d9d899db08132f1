use serde::Deserialize;
use serde_json::Value;

use super::number::TransportNumber;
use crate::domain::GatewayErrorCode;

/// Top-level shape of any SMSC JSON reply.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    /// `{ "error_code": .., "error": .. }`; wins over any other field present.
    Error {
        code: GatewayErrorCode,
        message: String,
    },
    Success(Value),
}

/// Parse the body, then classify it. The error shape is checked before any
/// success field is looked at, since success payloads carry numeric fields
/// (`status`, `err`) of their own.
pub fn decode_envelope(body: &str) -> Result<Envelope, serde_json::Error> {
    let value: Value = serde_json::from_str(body)?;

    if let Value::Object(map) = &value {
        let code = map.get("error_code").filter(|v| is_filled(v));
        let message = map.get("error").filter(|v| is_filled(v));
        if let (Some(code), Some(message)) = (code, message) {
            return Ok(Envelope::Error {
                code: GatewayErrorCode::new(error_code(code)),
                message: match message {
                    Value::String(text) => text.clone(),
                    other => other.to_string(),
                },
            });
        }
    }

    Ok(Envelope::Success(value))
}

/// Loose "has a value" check: `null`, `false`, `0`, `""` and `"0"` count as empty.
fn is_filled(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty() && text != "0",
        Value::Array(items) => !items.is_empty(),
        Value::Object(_) => true,
    }
}

/// Coerced like every other numeric field; a non-numeric code maps to 0.
fn error_code(value: &Value) -> i32 {
    TransportNumber::deserialize(value)
        .ok()
        .and_then(|code| code.to_i32())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use crate::domain::KnownGatewayErrorCode;

    use super::*;

    #[test]
    fn error_shape_is_classified_with_code_and_message() {
        let envelope = decode_envelope(r#"{"error_code": 2, "error": "authorise error"}"#).unwrap();
        match envelope {
            Envelope::Error { code, message } => {
                assert_eq!(code.known(), Some(KnownGatewayErrorCode::InvalidCredentials));
                assert_eq!(message, "authorise error");
            }
            other => panic!("unexpected envelope: {other:?}"),
        }
    }

    #[test]
    fn error_shape_wins_over_success_fields() {
        let envelope =
            decode_envelope(r#"{"id": 77, "status": 1, "error_code": "9", "error": "duplicate"}"#)
                .unwrap();
        assert_eq!(
            envelope,
            Envelope::Error {
                code: GatewayErrorCode::new(9),
                message: "duplicate".to_owned(),
            }
        );
    }

    #[test]
    fn fractional_codes_keep_their_value() {
        for body in [
            r#"{"error_code": 9.0, "error": "duplicate"}"#,
            r#"{"error_code": "9.0", "error": "duplicate"}"#,
            r#"{"error_code": " 9 ", "error": "duplicate"}"#,
        ] {
            match decode_envelope(body).unwrap() {
                Envelope::Error { code, .. } => {
                    assert_eq!(code, GatewayErrorCode::new(9), "{body}");
                    assert!(code.is_retryable(), "{body}");
                }
                other => panic!("unexpected envelope for {body}: {other:?}"),
            }
        }
    }

    #[test]
    fn empty_error_fields_are_not_errors() {
        for body in [
            r#"{"id": 1, "error_code": 0, "error": "x"}"#,
            r#"{"id": 1, "error_code": 3, "error": ""}"#,
            r#"{"id": 1, "error_code": null, "error": null}"#,
            r#"{"id": 1, "error": "only message"}"#,
        ] {
            assert!(
                matches!(decode_envelope(body).unwrap(), Envelope::Success(_)),
                "{body}"
            );
        }
    }

    #[test]
    fn status_numbers_are_not_mistaken_for_errors() {
        let envelope = decode_envelope(r#"{"status": 22, "err": 7}"#).unwrap();
        assert!(matches!(envelope, Envelope::Success(_)));
    }

    #[test]
    fn arrays_are_success_documents() {
        let envelope = decode_envelope("[]").unwrap();
        assert_eq!(envelope, Envelope::Success(Value::Array(Vec::new())));
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        assert!(decode_envelope("{ not json }").is_err());
        assert!(decode_envelope("ERROR = 2").is_err());
    }
}
