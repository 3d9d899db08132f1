use serde::Deserialize;
use serde_json::Value;

use super::TransportError;
use super::number::TransportNumber;
use crate::domain::{
    MessageFormat, MessageId, MessageText, RawPhoneNumber, ScheduleTime, SendMessages, SenderId,
};

const CHARSET: &str = "utf-8";

#[derive(Debug, Clone, Deserialize)]
struct SendJsonResponse {
    #[serde(default)]
    id: Option<TransportNumber>,
}

fn join_phones(phones: &[RawPhoneNumber]) -> String {
    phones
        .iter()
        .map(RawPhoneNumber::raw)
        .collect::<Vec<_>>()
        .join(";")
}

fn push_format(params: &mut Vec<(String, String)>, format: MessageFormat) {
    let (name, value) = format.wire_pair();
    params.push((name.to_owned(), value.to_owned()));
}

pub fn encode_send_form(request: &SendMessages, sender: &SenderId) -> Vec<(String, String)> {
    let mut params = vec![
        (
            RawPhoneNumber::FIELD.to_owned(),
            join_phones(request.phones()),
        ),
        (
            MessageText::FIELD.to_owned(),
            request
                .message()
                .map(MessageText::as_str)
                .unwrap_or_default()
                .to_owned(),
        ),
        (SenderId::FIELD.to_owned(), sender.as_str().to_owned()),
        ("charset".to_owned(), CHARSET.to_owned()),
    ];

    if let Some(time) = request.options().time.as_ref() {
        params.push((ScheduleTime::FIELD.to_owned(), time.as_str().to_owned()));
    }
    push_format(&mut params, request.options().format);

    params
}

/// HLR probe: only the phone and the `hlr` flag, no text or sender.
pub fn encode_check_number_form(phone: &RawPhoneNumber) -> Vec<(String, String)> {
    let mut params = vec![(RawPhoneNumber::FIELD.to_owned(), phone.raw().to_owned())];
    push_format(&mut params, MessageFormat::Hlr);
    params
}

/// A missing or non-numeric `id` decodes to `0` rather than failing.
pub fn decode_send_response(document: Value) -> Result<MessageId, TransportError> {
    let parsed: SendJsonResponse = serde_json::from_value(document)?;
    let id = parsed
        .id
        .as_ref()
        .and_then(TransportNumber::to_i64)
        .unwrap_or_default();
    Ok(MessageId::new(id))
}
