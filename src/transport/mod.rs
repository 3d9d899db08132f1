//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod account;
mod auth;
mod date;
mod envelope;
mod incoming;
mod number;
mod send;
mod status;

pub use account::{
    decode_balance_response, decode_phone_operator_response, encode_get_balance_form,
    encode_phone_operator_form,
};
pub use auth::encode_common_form;
pub use date::{DateParseError, GATEWAY_DATE_FORMAT, parse_gateway_date};
pub use envelope::{Envelope, decode_envelope};
pub use incoming::{decode_incoming_response, encode_incoming_form};
pub use send::{decode_send_response, encode_check_number_form, encode_send_form};
pub use status::{decode_status_response, encode_status_form};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("unexpected JSON shape: {0}")]
    Json(#[from] serde_json::Error),

    #[error("field {field} is not numeric: {value}")]
    InvalidNumber { field: &'static str, value: String },

    #[error(transparent)]
    Date(#[from] DateParseError),
}
