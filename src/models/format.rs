//! Competition format codes and the crate error type.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Competition format, identified externally by a numeric code.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    /// Code 0: everyone plays everyone once.
    League,
    /// Code 1: single-elimination bracket.
    Elimination,
    /// Code 2: group round-robin, then elimination between qualifiers.
    GroupsElimination,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::League, Format::Elimination, Format::GroupsElimination];

    /// Resolve a format code. Unknown codes are a caller bug and fail immediately.
    pub fn from_code(code: u8) -> Result<Self, FixtureError> {
        match code {
            0 => Ok(Format::League),
            1 => Ok(Format::Elimination),
            2 => Ok(Format::GroupsElimination),
            other => Err(FixtureError::UnsupportedFormat(other)),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Format::League => 0,
            Format::Elimination => 1,
            Format::GroupsElimination => 2,
        }
    }
}

impl TryFrom<u8> for Format {
    type Error = FixtureError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Format::from_code(code)
    }
}

/// Errors that can occur while configuring or running fixture generation.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum FixtureError {
    /// Format code outside {0, 1, 2}.
    #[error("Unsupported tournament format code: {0}")]
    UnsupportedFormat(u8),
    /// Participants did not pass the format's validation; holds the validation message.
    #[error("{0}")]
    Rejected(String),
    /// End date earlier than start date.
    #[error("End date {end} is before start date {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
}
