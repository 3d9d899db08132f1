use crate::domain::validation::ValidationError;
use crate::domain::value::{MessageId, MessageText, RawPhoneNumber, ScheduleTime};

/// Longest look-back window `get.php` accepts for incoming messages.
pub const INCOMING_MAX_HOURS: u32 = 70;
/// Look-back window used when the caller has no preference.
pub const INCOMING_DEFAULT_HOURS: u32 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Remote calls supported by the client.
pub enum Operation {
    Send,
    CheckNumber,
    GetIncomingMessages,
    GetBalance,
    GetStatus,
    GetPhoneOperator,
}

impl Operation {
    /// Script name under the API base path.
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Send | Self::CheckNumber => "send.php",
            Self::GetIncomingMessages => "get.php",
            Self::GetBalance => "balance.php",
            Self::GetStatus => "status.php",
            Self::GetPhoneOperator => "info.php",
        }
    }

    /// Stable lowercase name, used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Send => "send",
            Self::CheckNumber => "check_number",
            Self::GetIncomingMessages => "get_incoming_messages",
            Self::GetBalance => "get_balance",
            Self::GetStatus => "get_status",
            Self::GetPhoneOperator => "get_phone_operator",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Delivery mode of an outgoing message.
///
/// Exactly one wire pair is emitted per send; the variants are mutually exclusive.
pub enum MessageFormat {
    #[default]
    Normal,
    Flash,
    Push,
    Hlr,
    Binary,
    BinaryHex,
    Ping,
}

impl MessageFormat {
    /// All formats, in wire-code order.
    pub const ALL: [MessageFormat; 7] = [
        Self::Normal,
        Self::Flash,
        Self::Push,
        Self::Hlr,
        Self::Binary,
        Self::BinaryHex,
        Self::Ping,
    ];

    /// Every parameter name a format can occupy.
    pub const FIELDS: [&'static str; 5] = ["bin", "flash", "push", "hlr", "ping"];

    /// The `(name, value)` pair this format puts on the wire.
    pub fn wire_pair(self) -> (&'static str, &'static str) {
        match self {
            Self::Normal => ("bin", "0"),
            Self::Flash => ("flash", "1"),
            Self::Push => ("push", "1"),
            Self::Hlr => ("hlr", "1"),
            Self::Binary => ("bin", "1"),
            Self::BinaryHex => ("bin", "2"),
            Self::Ping => ("ping", "1"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SendOptions {
    pub format: MessageFormat,
    pub time: Option<ScheduleTime>,
}

#[derive(Debug, Clone)]
/// A `send.php` request: one text to one or more recipients.
pub struct SendMessages {
    phones: Vec<RawPhoneNumber>,
    message: Option<MessageText>,
    options: SendOptions,
}

impl SendMessages {
    /// Build a send request. `message` may be omitted for formats that carry no
    /// text (HLR, ping); it is then sent as an empty `mes`.
    pub fn new(
        phones: Vec<RawPhoneNumber>,
        message: Option<MessageText>,
        options: SendOptions,
    ) -> Result<Self, ValidationError> {
        if phones.is_empty() {
            return Err(ValidationError::Empty {
                field: RawPhoneNumber::FIELD,
            });
        }
        Ok(Self {
            phones,
            message,
            options,
        })
    }

    /// Shorthand for a plain text message with default options.
    pub fn text(phones: Vec<RawPhoneNumber>, message: MessageText) -> Result<Self, ValidationError> {
        Self::new(phones, Some(message), SendOptions::default())
    }

    pub fn phones(&self) -> &[RawPhoneNumber] {
        &self.phones
    }

    pub fn message(&self) -> Option<&MessageText> {
        self.message.as_ref()
    }

    pub fn options(&self) -> &SendOptions {
        &self.options
    }
}

#[derive(Debug, Clone)]
/// A `status.php` request for one previously sent message.
pub struct StatusQuery {
    phone: RawPhoneNumber,
    id: MessageId,
    more_info: bool,
}

impl StatusQuery {
    pub fn new(phone: RawPhoneNumber, id: MessageId) -> Self {
        Self {
            phone,
            id,
            more_info: false,
        }
    }

    /// Ask the gateway for its extended diagnostic detail (`all=2`).
    pub fn with_more_info(mut self, more_info: bool) -> Self {
        self.more_info = more_info;
        self
    }

    pub fn phone(&self) -> &RawPhoneNumber {
        &self.phone
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn more_info(&self) -> bool {
        self.more_info
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A `get.php` request for incoming messages.
///
/// Invariant: `hours <= INCOMING_MAX_HOURS`; larger values are clamped.
pub struct IncomingQuery {
    hours: u32,
}

impl IncomingQuery {
    pub fn new(hours: u32) -> Self {
        Self {
            hours: hours.min(INCOMING_MAX_HOURS),
        }
    }

    pub fn hours(self) -> u32 {
        self.hours
    }
}

impl Default for IncomingQuery {
    fn default() -> Self {
        Self::new(INCOMING_DEFAULT_HOURS)
    }
}
