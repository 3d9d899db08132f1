use chrono::{DateTime, FixedOffset, NaiveDateTime};

/// Layout of every timestamp SMSC emits (`01.06.2024 10:30:00`).
pub const GATEWAY_DATE_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Moscow has been fixed at UTC+03:00 without DST since October 2014.
const GATEWAY_UTC_OFFSET_SECS: i32 = 3 * 3600;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateParseError {
    #[error("date {input:?} does not match dd.mm.yyyy HH:MM:SS")]
    Pattern {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("date {input:?} is out of range")]
    OutOfRange { input: String },
}

impl DateParseError {
    /// The timestamp text that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            Self::Pattern { input, .. } | Self::OutOfRange { input } => input,
        }
    }
}

/// Parse a gateway timestamp as Moscow wall-clock time.
///
/// The offset is always `+03:00`. Moscow observed UTC+04:00 from March 2011
/// to 26.10.2014 (and DST before that), so timestamps older than that come
/// out one hour late.
pub fn parse_gateway_date(input: &str) -> Result<DateTime<FixedOffset>, DateParseError> {
    let naive = NaiveDateTime::parse_from_str(input, GATEWAY_DATE_FORMAT).map_err(|source| {
        DateParseError::Pattern {
            input: input.to_owned(),
            source,
        }
    })?;

    FixedOffset::east_opt(GATEWAY_UTC_OFFSET_SECS)
        .and_then(|offset| naive.and_local_timezone(offset).single())
        .ok_or_else(|| DateParseError::OutOfRange {
            input: input.to_owned(),
        })
}
