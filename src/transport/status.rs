use serde::Deserialize;
use serde_json::Value;

use super::TransportError;
use super::date::parse_gateway_date;
use super::number::TransportNumber;
use crate::domain::{
    DeliveryStatusCode, MessageError, MessageId, MessageInfo, MessageStatus, StatusQuery,
};

#[derive(Debug, Clone, Deserialize)]
struct StatusJsonResponse {
    status: TransportNumber,
    #[serde(default)]
    err: Option<TransportNumber>,
    #[serde(default)]
    last_date: Option<String>,
}

pub fn encode_status_form(query: &StatusQuery) -> Vec<(String, String)> {
    vec![
        ("phone".to_owned(), query.phone().raw().to_owned()),
        (MessageId::FIELD.to_owned(), query.id().to_string()),
        (
            "all".to_owned(),
            if query.more_info() { "2" } else { "0" }.to_owned(),
        ),
    ]
}

pub fn decode_status_response(
    query: &StatusQuery,
    document: Value,
) -> Result<MessageStatus, TransportError> {
    let parsed: StatusJsonResponse = serde_json::from_value(document)?;
    let status = parsed
        .status
        .to_i32()
        .map(DeliveryStatusCode::new)
        .ok_or_else(|| TransportError::InvalidNumber {
            field: "status",
            value: parsed.status.describe(),
        })?;

    if status.is_error() {
        return Ok(MessageStatus::Error(MessageError {
            id: query.id(),
            status,
            error: parsed.err.as_ref().and_then(TransportNumber::to_i32),
            raw_error: parsed.err.as_ref().map(TransportNumber::describe),
        }));
    }

    let last_date = parsed
        .last_date
        .as_deref()
        .filter(|date| !date.is_empty())
        .map(parse_gateway_date)
        .transpose()?;

    Ok(MessageStatus::Info(MessageInfo {
        id: query.id(),
        status,
        last_date,
    }))
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    use crate::domain::RawPhoneNumber;

    use super::*;

    fn query() -> StatusQuery {
        StatusQuery::new(
            RawPhoneNumber::new("79251234567").unwrap(),
            MessageId::new(12345),
        )
    }

    #[test]
    fn encode_status_form_params() {
        assert_eq!(
            encode_status_form(&query()),
            vec![
                ("phone".to_owned(), "79251234567".to_owned()),
                ("id".to_owned(), "12345".to_owned()),
                ("all".to_owned(), "0".to_owned()),
            ]
        );
        let extended = encode_status_form(&query().with_more_info(true));
        assert_eq!(extended[2], ("all".to_owned(), "2".to_owned()));
    }

    #[test]
    fn status_one_is_info_with_date() {
        let decoded = decode_status_response(
            &query(),
            json!({"status": 1, "last_date": "01.06.2024 10:30:00", "last_timestamp": 1717227000}),
        )
        .unwrap();
        assert_eq!(
            decoded,
            MessageStatus::Info(MessageInfo {
                id: MessageId::new(12345),
                status: DeliveryStatusCode::new(1),
                last_date: Some(Utc.with_ymd_and_hms(2024, 6, 1, 7, 30, 0).unwrap().into()),
            })
        );
    }

    #[test]
    fn status_two_is_error_with_detail() {
        let decoded = decode_status_response(&query(), json!({"status": "2", "err": "7"})).unwrap();
        assert_eq!(
            decoded,
            MessageStatus::Error(MessageError {
                id: MessageId::new(12345),
                status: DeliveryStatusCode::new(2),
                error: Some(7),
                raw_error: Some("7".to_owned()),
            })
        );
    }

    #[test]
    fn text_error_detail_is_kept_verbatim() {
        let decoded = decode_status_response(
            &query(),
            json!({"status": 20, "err": "absent subscriber"}),
        )
        .unwrap();
        match decoded {
            MessageStatus::Error(error) => {
                assert_eq!(error.status.as_i32(), 20);
                assert_eq!(error.error, None);
                assert_eq!(error.raw_error.as_deref(), Some("absent subscriber"));
            }
            other => panic!("unexpected status: {other:?}"),
        }

        let bare = decode_status_response(&query(), json!({"status": 3})).unwrap();
        match bare {
            MessageStatus::Error(error) => assert_eq!(error.raw_error, None),
            other => panic!("unexpected status: {other:?}"),
        }
    }

    #[test]
    fn pending_status_without_date_is_info() {
        let decoded = decode_status_response(&query(), json!({"status": -1})).unwrap();
        let blank = decode_status_response(&query(), json!({"status": -1, "last_date": ""}))
            .unwrap();
        assert_eq!(decoded, blank);
        match decoded {
            MessageStatus::Info(info) => {
                assert_eq!(info.status.as_i32(), -1);
                assert_eq!(info.last_date, None);
            }
            other => panic!("unexpected status: {other:?}"),
        }
    }

    #[test]
    fn error_status_ignores_malformed_date() {
        let decoded =
            decode_status_response(&query(), json!({"status": 20, "last_date": "garbage"}))
                .unwrap();
        assert!(decoded.is_error());
        assert_eq!(decoded.status().as_i32(), 20);
    }

    #[test]
    fn info_status_with_bad_date_fails() {
        let err = decode_status_response(&query(), json!({"status": 0, "last_date": "2024-06-01"}))
            .unwrap_err();
        assert!(matches!(err, TransportError::Date(_)));
    }

    #[test]
    fn missing_status_is_rejected() {
        let err = decode_status_response(&query(), json!({"err": 1})).unwrap_err();
        assert!(matches!(err, TransportError::Json(_)));
    }
}
