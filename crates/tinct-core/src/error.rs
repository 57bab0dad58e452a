use thiserror::Error;

use crate::Channel;

/// Why an edit was rejected.
///
/// Both variants are recoverable: the store keeps the last valid color and the raw
/// text stays in its field until the user fixes it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// Malformed text: bad hex digits, wrong length, wrong number of parts, non-numeric tokens.
    #[error("malformed {channel} value {input:?}")]
    Parse { channel: Channel, input: String },

    /// Numeric, but outside the representation's domain.
    #[error("{channel} component {value} outside {min}..={max}")]
    Range {
        channel: Channel,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl ColorError {
    pub(crate) fn parse(channel: Channel, input: impl Into<String>) -> Self {
        ColorError::Parse {
            channel,
            input: input.into(),
        }
    }

    pub(crate) fn range(channel: Channel, value: f64, min: f64, max: f64) -> Self {
        ColorError::Range {
            channel,
            value,
            min,
            max,
        }
    }

    pub fn channel(&self) -> Channel {
        match self {
            ColorError::Parse { channel, .. } | ColorError::Range { channel, .. } => *channel,
        }
    }

    pub fn is_range(&self) -> bool {
        matches!(self, ColorError::Range { .. })
    }
}
