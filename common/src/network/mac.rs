//! # MAC Address Input
//!
//! Syntactic checks for the hardware addresses accepted on the command line.
//!
//! An address is accepted when it carries at least three octet-equivalent groups:
//! * Delimited by `:`, `.` or `-` (checked in that order), with at least 3 segments.
//! * Undelimited, with at least 6 characters.
//!
//! Nothing beyond that is checked; the remote API decides whether the OUI is known.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

const MIN_SEGMENTS: usize = 3;
const MIN_UNDELIMITED_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{input} needs to have at least 3 octets.")]
    TooFewOctets { input: String },
}

/// Separator detected in an address string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Colon,
    Dot,
    Hyphen,
    None,
}

impl Delimiter {
    /// Picks the delimiter by priority: colon, then dot, then hyphen.
    pub fn detect(s: &str) -> Self {
        if s.contains(':') {
            Delimiter::Colon
        } else if s.contains('.') {
            Delimiter::Dot
        } else if s.contains('-') {
            Delimiter::Hyphen
        } else {
            Delimiter::None
        }
    }

    pub fn as_char(self) -> Option<char> {
        match self {
            Delimiter::Colon => Some(':'),
            Delimiter::Dot => Some('.'),
            Delimiter::Hyphen => Some('-'),
            Delimiter::None => None,
        }
    }
}

/// A MAC address string that passed validation.
///
/// The original text is kept as typed so output echoes exactly what the user supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacAddress {
    raw: String,
    delimiter: Delimiter,
}

impl MacAddress {
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The vendor prefix portion, used in log lines.
    pub fn oui(&self) -> String {
        match self.delimiter.as_char() {
            Some(sep) => self
                .raw
                .split(sep)
                .take(MIN_SEGMENTS)
                .collect::<Vec<_>>()
                .join(&sep.to_string()),
            None => self.raw.chars().take(MIN_UNDELIMITED_LEN).collect(),
        }
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for MacAddress {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate(s)
    }
}

/// Checks a single address against the minimum-segment rule.
pub fn validate(input: &str) -> Result<MacAddress, ValidationError> {
    let delimiter = Delimiter::detect(input);

    let (segments, ok) = match delimiter.as_char() {
        // Empty segments count, so "aa::" has three.
        Some(sep) => {
            let count = input.split(sep).count();
            (count, count >= MIN_SEGMENTS)
        }
        None => (1, input.chars().count() >= MIN_UNDELIMITED_LEN),
    };

    if !ok {
        return Err(ValidationError::TooFewOctets {
            input: input.to_string(),
        });
    }

    debug!("{input} accepted ({delimiter:?}, {segments} segments)");
    Ok(MacAddress {
        raw: input.to_string(),
        delimiter,
    })
}

/// Validates every input in order, stopping at the first rejected one.
pub fn validate_all<I, S>(inputs: I) -> Result<Vec<MacAddress>, ValidationError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    inputs.into_iter().map(|s| validate(s.as_ref())).collect()
}
