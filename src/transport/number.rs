use serde::Deserialize;

/// Numeric field returned by SMSC as either a JSON number or a JSON string.
///
/// Anything else (booleans, objects, ...) is kept so callers can decide
/// whether to coerce or reject it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TransportNumber {
    Int(i64),
    Float(f64),
    String(String),
    Other(serde_json::Value),
}

impl TransportNumber {
    /// Integer value; fractional parts are truncated.
    pub fn to_i64(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            Self::Float(value) if value.is_finite() => Some(value.trunc() as i64),
            Self::Float(_) => None,
            Self::String(value) => {
                let trimmed = value.trim();
                trimmed.parse::<i64>().ok().or_else(|| {
                    trimmed
                        .parse::<f64>()
                        .ok()
                        .filter(|value| value.is_finite())
                        .map(|value| value.trunc() as i64)
                })
            }
            Self::Other(_) => None,
        }
    }

    pub fn to_i32(&self) -> Option<i32> {
        self.to_i64().and_then(|value| i32::try_from(value).ok())
    }

    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Self::Int(value) => Some(*value as f64),
            Self::Float(value) => Some(*value),
            Self::String(value) => value.trim().parse::<f64>().ok(),
            Self::Other(_) => None,
        }
    }

    /// Raw rendering for error messages.
    pub fn describe(&self) -> String {
        match self {
            Self::Int(value) => value.to_string(),
            Self::Float(value) => value.to_string(),
            Self::String(value) => value.clone(),
            Self::Other(value) => value.to_string(),
        }
    }
}
