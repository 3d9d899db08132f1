//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    INCOMING_DEFAULT_HOURS, INCOMING_MAX_HOURS, IncomingQuery, MessageFormat, Operation,
    SendMessages, SendOptions, StatusQuery,
};
pub use response::{IncomingMessage, MessageError, MessageInfo, MessageStatus, PhoneOperator};
pub use validation::ValidationError;
pub use value::{
    DeliveryStatusCode, GatewayErrorCode, KnownDeliveryStatus, KnownGatewayErrorCode, Login,
    MessageId, MessageText, Password, PhoneNumber, RawPhoneNumber, ScheduleTime, SenderId,
};
