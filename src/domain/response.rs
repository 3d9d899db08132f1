use chrono::{DateTime, FixedOffset};

use crate::domain::value::{DeliveryStatusCode, MessageId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    pub id: MessageId,
    pub sent: DateTime<FixedOffset>,
    pub received: DateTime<FixedOffset>,
    pub message: String,
    pub phone: String,
    pub to_phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageInfo {
    pub id: MessageId,
    pub status: DeliveryStatusCode,
    pub last_date: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageError {
    pub id: MessageId,
    pub status: DeliveryStatusCode,
    /// Numeric failure detail (`err`), when it parses as one.
    pub error: Option<i32>,
    /// `err` exactly as the gateway sent it, numeric or not.
    pub raw_error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome of `status.php`, tagged by the status range.
pub enum MessageStatus {
    Info(MessageInfo),
    Error(MessageError),
}

impl MessageStatus {
    pub fn id(&self) -> MessageId {
        match self {
            Self::Info(info) => info.id,
            Self::Error(error) => error.id,
        }
    }

    pub fn status(&self) -> DeliveryStatusCode {
        match self {
            Self::Info(info) => info.status,
            Self::Error(error) => error.status,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneOperator {
    pub operator: String,
    pub region: String,
}
