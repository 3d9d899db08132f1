use std::fmt;

use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMSC account login.
///
/// Invariant: non-empty after trimming.
pub struct Login(String);

impl Login {
    /// Form field name used by SMSC (`login`).
    pub const FIELD: &'static str = "login";

    /// Create a validated [`Login`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated login.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// SMSC account password.
///
/// Invariant: must not be empty (whitespace is preserved and allowed). The cleartext
/// value never leaves the process; only its digest is sent as `psw`.
pub struct Password(String);

impl Password {
    /// Form field name used by SMSC for the password digest (`psw`).
    pub const FIELD: &'static str = "psw";

    /// Create a validated [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMSC sender id (`sender`).
///
/// Invariant: non-empty after trimming. The value must be registered in your SMSC account.
pub struct SenderId(String);

impl SenderId {
    /// Form field name used by SMSC (`sender`).
    pub const FIELD: &'static str = "sender";

    /// Create a validated [`SenderId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sender id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text (`mes`).
///
/// Invariant: non-empty after trimming. The original value (including whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// Form field name used by SMSC (`mes`).
    pub const FIELD: &'static str = "mes";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Scheduled send time (`time`).
///
/// Passed through to SMSC untouched. SMSC accepts several grammars here
/// (`DDMMYYhhmm`, `h1-h2`, `0ts`, `+m`); none of them is checked locally.
pub struct ScheduleTime(String);

impl ScheduleTime {
    /// Form field name used by SMSC (`time`).
    pub const FIELD: &'static str = "time";

    /// Create a non-empty schedule value.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the value as it will be sent.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Message id assigned by SMSC on send.
///
/// `0` is what a missing or non-numeric `id` decodes to, so it doubles as
/// "no id was issued".
pub struct MessageId(i64);

impl MessageId {
    /// Form field name used by SMSC (`id`).
    pub const FIELD: &'static str = "id";

    /// Wrap a raw id.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw id.
    pub fn value(self) -> i64 {
        self.0
    }

    /// Whether SMSC actually issued an id.
    pub fn is_issued(self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unvalidated phone number as sent to SMSC.
///
/// Invariant: non-empty after trimming. This type does not normalize; if you want E.164
/// normalization, parse into [`PhoneNumber`] and convert it into [`RawPhoneNumber`].
pub struct RawPhoneNumber(String);

impl RawPhoneNumber {
    /// Form field name used by SMSC for recipient lists (`phones`).
    pub const FIELD: &'static str = "phones";

    /// Create a validated (non-empty) raw phone number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent to SMSC.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for RawPhoneNumber {
    /// Convert an already-parsed phone number to a normalized raw value (E.164).
    fn from(value: PhoneNumber) -> Self {
        Self(value.e164)
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality, ordering, and hashing are based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty {
                field: RawPhoneNumber::FIELD,
            });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

impl std::cmp::PartialOrd for PhoneNumber {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::cmp::Ord for PhoneNumber {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.e164.cmp(&other.e164)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Error code reported by SMSC in `error_code`.
///
/// This value is preserved as-is even when the code is unknown to this crate.
pub struct GatewayErrorCode(i32);

impl GatewayErrorCode {
    /// Construct an error code from its integer representation.
    pub fn new(code: i32) -> Self {
        Self(code)
    }

    /// Get the integer code as provided by SMSC.
    pub fn as_i32(self) -> i32 {
        self.0
    }

    /// Map this code to a known variant, if one exists.
    pub fn known(self) -> Option<KnownGatewayErrorCode> {
        KnownGatewayErrorCode::from_code(self.0)
    }

    /// Returns `true` if the failure goes away after waiting (IP block, spam ban).
    pub fn is_retryable(self) -> bool {
        matches!(self.known(), Some(kind) if kind.is_retryable())
    }

    /// Returns `true` if the credentials were rejected.
    pub fn is_auth_error(self) -> bool {
        matches!(self.known(), Some(kind) if kind.is_auth_error())
    }
}

impl fmt::Display for GatewayErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Documented SMSC `error_code` values.
pub enum KnownGatewayErrorCode {
    ParametersError,
    InvalidCredentials,
    InsufficientFunds,
    IpTemporarilyBlocked,
    InvalidDateFormat,
    MessageDenied,
    InvalidPhoneFormat,
    Undeliverable,
    SpamBan,
}

impl KnownGatewayErrorCode {
    /// Convert a raw integer error code into a known variant.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            1 => Self::ParametersError,
            2 => Self::InvalidCredentials,
            3 => Self::InsufficientFunds,
            4 => Self::IpTemporarilyBlocked,
            5 => Self::InvalidDateFormat,
            6 => Self::MessageDenied,
            7 => Self::InvalidPhoneFormat,
            8 => Self::Undeliverable,
            9 => Self::SpamBan,
            _ => return None,
        })
    }

    /// Whether the same request may succeed later without changes.
    pub fn is_retryable(self) -> bool {
        matches!(self, Self::IpTemporarilyBlocked | Self::SpamBan)
    }

    /// Whether the login/password pair was rejected.
    pub fn is_auth_error(self) -> bool {
        matches!(self, Self::InvalidCredentials)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Delivery status reported by `status.php`.
///
/// Values `<= 1` are informational, anything above is an error state.
pub struct DeliveryStatusCode(i32);

impl DeliveryStatusCode {
    /// Highest status value that is still informational.
    pub const LAST_INFORMATIONAL: i32 = 1;

    /// Construct a status from its integer representation.
    pub fn new(code: i32) -> Self {
        Self(code)
    }

    /// Get the integer status as provided by SMSC.
    pub fn as_i32(self) -> i32 {
        self.0
    }

    /// Whether this status is an error state.
    pub fn is_error(self) -> bool {
        self.0 > Self::LAST_INFORMATIONAL
    }

    /// Map this status to a known variant, if one exists.
    pub fn known(self) -> Option<KnownDeliveryStatus> {
        KnownDeliveryStatus::from_code(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Known `status` values returned by `status.php`.
pub enum KnownDeliveryStatus {
    MessageNotFound,
    Pending,
    HandedToOperator,
    Delivered,
    Read,
    Expired,
    Undeliverable,
    InvalidNumber,
    Prohibited,
    InsufficientFunds,
    UnavailableNumber,
}

impl KnownDeliveryStatus {
    /// Convert a raw integer status into a known variant.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            -3 => Self::MessageNotFound,
            -1 => Self::Pending,
            0 => Self::HandedToOperator,
            1 => Self::Delivered,
            2 => Self::Read,
            3 => Self::Expired,
            20 => Self::Undeliverable,
            22 => Self::InvalidNumber,
            23 => Self::Prohibited,
            24 => Self::InsufficientFunds,
            25 => Self::UnavailableNumber,
            _ => return None,
        })
    }
}
