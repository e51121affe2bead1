//! Format dispatcher: the single entry point callers use.

use crate::logic::{elimination, groups, league};
use crate::models::{
    FixtureError, Format, FormatDescription, GenerationParams, GenerationResult, Participant,
    Validation,
};
use log::{info, warn};

/// Generates fixtures for one format. Switching formats keeps the instance,
/// so the same participant list can be compared across formats.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FixtureGenerator {
    format: Format,
}

impl FixtureGenerator {
    /// Resolve `code` (0 league, 1 elimination, 2 groups + elimination).
    pub fn new(code: u8) -> Result<Self, FixtureError> {
        Ok(Self::from_format(Format::from_code(code)?))
    }

    pub fn from_format(format: Format) -> Self {
        Self { format }
    }

    pub fn format(&self) -> Format {
        self.format
    }

    /// Switch to another format. An unknown code leaves the current format untouched.
    pub fn set_format(&mut self, code: u8) -> Result<(), FixtureError> {
        self.format = Format::from_code(code)?;
        Ok(())
    }

    pub fn validate(&self, participants: &[Participant]) -> Validation {
        match self.format {
            Format::League => league::validate(participants),
            Format::Elimination => elimination::validate(participants),
            Format::GroupsElimination => groups::validate(participants),
        }
    }

    /// Validate, then build the schedule. Invalid input fails closed with the
    /// validation message instead of producing a partial schedule.
    pub fn generate(&self, params: &GenerationParams<'_>) -> Result<GenerationResult, FixtureError> {
        if let (Some(start), Some(end)) = (params.start_date, params.end_date) {
            if end < start {
                return Err(FixtureError::InvalidDateRange { start, end });
            }
        }
        let validation = self.validate(params.participants);
        if !validation.valid {
            warn!(
                "Refusing to generate {:?} fixtures for tournament {}: {}",
                self.format, params.tournament_id, validation.message
            );
            return Err(FixtureError::Rejected(validation.message));
        }

        let mut result = match self.format {
            Format::League => league::generate(params),
            Format::Elimination => elimination::generate(params),
            Format::GroupsElimination => groups::generate(params),
        };
        result.metadata.notes.insert(0, validation.message);
        info!(
            "Generated {:?} schedule for tournament {}: {} fixtures, {} matches",
            self.format,
            params.tournament_id,
            result.metadata.fixture_count,
            result.metadata.match_count
        );
        Ok(result)
    }

    /// Closed-form match count for `n` participants, usable before generating.
    pub fn count_matches(&self, n: usize) -> usize {
        match self.format {
            Format::League => league::count_matches(n),
            Format::Elimination => elimination::count_matches(n),
            Format::GroupsElimination => groups::count_matches(n),
        }
    }

    pub fn describe(&self) -> FormatDescription {
        match self.format {
            Format::League => league::describe(),
            Format::Elimination => elimination::describe(),
            Format::GroupsElimination => groups::describe(),
        }
    }

    /// Descriptions of every supported format, in code order.
    pub fn describe_all() -> Vec<FormatDescription> {
        Format::ALL
            .iter()
            .map(|&format| Self::from_format(format).describe())
            .collect()
    }
}

impl From<Format> for FixtureGenerator {
    fn from(format: Format) -> Self {
        Self::from_format(format)
    }
}
