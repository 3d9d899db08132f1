use serde::Deserialize;
use serde_json::Value;

use super::TransportError;
use super::date::parse_gateway_date;
use super::number::TransportNumber;
use crate::domain::{IncomingMessage, IncomingQuery, MessageId};

#[derive(Debug, Clone, Deserialize)]
struct IncomingJsonRecord {
    id: TransportNumber,
    sent: String,
    received: String,
    message: String,
    phone: String,
    to_phone: String,
}

pub fn encode_incoming_form(query: IncomingQuery) -> Vec<(String, String)> {
    vec![
        ("get_answers".to_owned(), "1".to_owned()),
        ("hour".to_owned(), query.hours().to_string()),
    ]
}

/// A single malformed record fails the whole batch.
pub fn decode_incoming_response(document: Value) -> Result<Vec<IncomingMessage>, TransportError> {
    let records: Vec<IncomingJsonRecord> = serde_json::from_value(document)?;

    records
        .into_iter()
        .map(|record| -> Result<IncomingMessage, TransportError> {
            let id = record
                .id
                .to_i64()
                .ok_or_else(|| TransportError::InvalidNumber {
                    field: "id",
                    value: record.id.describe(),
                })?;
            Ok(IncomingMessage {
                id: MessageId::new(id),
                sent: parse_gateway_date(&record.sent)?,
                received: parse_gateway_date(&record.received)?,
                message: record.message,
                phone: record.phone,
                to_phone: record.to_phone,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    use super::*;

    #[test]
    fn encode_clamps_hours() {
        assert_eq!(
            encode_incoming_form(IncomingQuery::new(100)),
            vec![
                ("get_answers".to_owned(), "1".to_owned()),
                ("hour".to_owned(), "70".to_owned()),
            ]
        );
        assert_eq!(encode_incoming_form(IncomingQuery::new(5))[1].1, "5");
    }

    #[test]
    fn decode_maps_records_and_dates() {
        let document = json!([
            {
                "id": "101",
                "sent": "01.06.2024 10:30:00",
                "received": "01.06.2024 10:30:05",
                "message": "STOP",
                "phone": "79251234567",
                "to_phone": "79991112233"
            },
            {
                "id": 102,
                "sent": "02.06.2024 00:00:00",
                "received": "02.06.2024 00:00:01",
                "message": "hi",
                "phone": "79251234568",
                "to_phone": "79991112233"
            }
        ]);

        let messages = decode_incoming_response(document).unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].id, MessageId::new(101));
        assert_eq!(
            messages[0].sent,
            Utc.with_ymd_and_hms(2024, 6, 1, 7, 30, 0).unwrap()
        );
        assert_eq!(
            messages[0].received,
            Utc.with_ymd_and_hms(2024, 6, 1, 7, 30, 5).unwrap()
        );
        assert_eq!(messages[0].message, "STOP");
        assert_eq!(messages[0].phone, "79251234567");
        assert_eq!(messages[0].to_phone, "79991112233");
        assert_eq!(
            messages[1].sent,
            Utc.with_ymd_and_hms(2024, 6, 1, 21, 0, 0).unwrap()
        );
    }

    #[test]
    fn decode_empty_list() {
        assert!(decode_incoming_response(json!([])).unwrap().is_empty());
    }

    #[test]
    fn one_bad_date_aborts_the_batch() {
        let document = json!([
            {
                "id": 1,
                "sent": "01.06.2024 10:30:00",
                "received": "01.06.2024 10:30:00",
                "message": "ok",
                "phone": "1",
                "to_phone": "2"
            },
            {
                "id": 2,
                "sent": "2024-06-01",
                "received": "01.06.2024 10:30:00",
                "message": "bad",
                "phone": "1",
                "to_phone": "2"
            }
        ]);

        let err = decode_incoming_response(document).unwrap_err();
        match err {
            TransportError::Date(err) => assert_eq!(err.input(), "2024-06-01"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_text_fields_are_rejected() {
        for field in ["message", "phone", "to_phone"] {
            let mut record = json!({
                "id": 1,
                "sent": "01.06.2024 10:30:00",
                "received": "01.06.2024 10:30:00",
                "message": "",
                "phone": "1",
                "to_phone": "2"
            });
            record.as_object_mut().unwrap().remove(field);

            let err = decode_incoming_response(json!([record])).unwrap_err();
            assert!(matches!(err, TransportError::Json(_)), "{field}: {err:?}");
        }
    }

    #[test]
    fn non_array_payload_is_rejected() {
        let err = decode_incoming_response(json!({"balance": "1.0"})).unwrap_err();
        assert!(matches!(err, TransportError::Json(_)));
    }
}
