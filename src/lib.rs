//! Typed Rust client for the SMSC (smsc.ru) HTTP API.
//!
//! The crate is split into a domain layer of strong types, a transport layer
//! for wire-format quirks (form encoding, error envelopes, lenient numbers,
//! Moscow-time timestamps), and a small client layer orchestrating requests.
//!
//! ```rust,no_run
//! use smsc::{Credentials, MessageText, RawPhoneNumber, SendMessages, SmscClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), smsc::SmscError> {
//!     let client = SmscClient::new(Credentials::new("login", "password", "Sender")?)?;
//!     let phone = RawPhoneNumber::new("+79251234567")?;
//!     let msg = MessageText::new("hello")?;
//!     let request = SendMessages::text(vec![phone], msg)?;
//!     let _id = client.send(&request).await?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    BoxFuture, Credentials, HttpResponse, HttpTransport, RequestThrottle, SmscClient,
    SmscClientBuilder, SmscError,
};
pub use domain::{
    DeliveryStatusCode, GatewayErrorCode, INCOMING_DEFAULT_HOURS, INCOMING_MAX_HOURS,
    IncomingMessage, IncomingQuery, KnownDeliveryStatus, KnownGatewayErrorCode, Login,
    MessageError, MessageFormat, MessageId, MessageInfo, MessageStatus, MessageText, Operation,
    Password, PhoneNumber, PhoneOperator, RawPhoneNumber, ScheduleTime, SendMessages,
    SendOptions, SenderId, StatusQuery, ValidationError,
};
pub use transport::{DateParseError, GATEWAY_DATE_FORMAT, parse_gateway_date};
