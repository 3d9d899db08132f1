use serde::Deserialize;
use serde_json::Value;

use super::TransportError;
use super::number::TransportNumber;
use crate::domain::{PhoneOperator, RawPhoneNumber};

#[derive(Debug, Clone, Deserialize)]
struct BalanceJsonResponse {
    balance: TransportNumber,
}

#[derive(Debug, Clone, Deserialize)]
struct OperatorJsonResponse {
    operator: String,
    region: String,
}

pub fn encode_get_balance_form() -> Vec<(String, String)> {
    Vec::new()
}

pub fn encode_phone_operator_form(phone: &RawPhoneNumber) -> Vec<(String, String)> {
    vec![
        ("phone".to_owned(), phone.raw().to_owned()),
        ("get_operator".to_owned(), "1".to_owned()),
    ]
}

pub fn decode_balance_response(document: Value) -> Result<f64, TransportError> {
    let parsed: BalanceJsonResponse = serde_json::from_value(document)?;
    parsed
        .balance
        .to_f64()
        .ok_or_else(|| TransportError::InvalidNumber {
            field: "balance",
            value: parsed.balance.describe(),
        })
}

pub fn decode_phone_operator_response(document: Value) -> Result<PhoneOperator, TransportError> {
    let parsed: OperatorJsonResponse = serde_json::from_value(document)?;
    Ok(PhoneOperator {
        operator: parsed.operator,
        region: parsed.region,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn balance_form_has_no_operation_fields() {
        assert!(encode_get_balance_form().is_empty());
    }

    #[test]
    fn decode_balance_supports_numeric_and_string_values() {
        assert_eq!(
            decode_balance_response(json!({"balance": "120.50"})).unwrap(),
            120.5
        );
        assert_eq!(
            decode_balance_response(json!({"balance": 7.25, "credit": "0"})).unwrap(),
            7.25
        );
    }

    #[test]
    fn decode_balance_rejects_missing_or_non_numeric_value() {
        assert!(matches!(
            decode_balance_response(json!({})).unwrap_err(),
            TransportError::Json(_)
        ));
        match decode_balance_response(json!({"balance": "lots"})).unwrap_err() {
            TransportError::InvalidNumber { field, value } => {
                assert_eq!(field, "balance");
                assert_eq!(value, "lots");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn encode_phone_operator_form_params() {
        let phone = RawPhoneNumber::new("79251234567").unwrap();
        assert_eq!(
            encode_phone_operator_form(&phone),
            vec![
                ("phone".to_owned(), "79251234567".to_owned()),
                ("get_operator".to_owned(), "1".to_owned()),
            ]
        );
    }

    #[test]
    fn decode_phone_operator_maps_fields() {
        let parsed = decode_phone_operator_response(json!({
            "operator": "MTS",
            "region": "Moscow",
            "mcc": 250,
            "mnc": 1
        }))
        .unwrap();
        assert_eq!(
            parsed,
            PhoneOperator {
                operator: "MTS".to_owned(),
                region: "Moscow".to_owned(),
            }
        );
    }
}
