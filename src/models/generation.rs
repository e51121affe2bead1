//! Inputs and outputs of a generation call.

use crate::models::fixture::{Fixture, Match, TournamentId};
use crate::models::format::Format;
use crate::models::participant::Participant;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Everything a strategy needs to build a schedule.
#[derive(Clone, Copy, Debug)]
pub struct GenerationParams<'a> {
    pub tournament_id: TournamentId,
    /// Seeding order; must be the same list that was validated.
    pub participants: &'a [Participant],
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl<'a> GenerationParams<'a> {
    pub fn new(tournament_id: TournamentId, participants: &'a [Participant]) -> Self {
        Self {
            tournament_id,
            participants,
            start_date: None,
            end_date: None,
        }
    }

    pub fn with_dates(mut self, start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }
}

/// Outcome of `validate`: a failed validation is a value, not an error.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Validation {
    pub valid: bool,
    /// Complete sentence, shown to the user verbatim.
    pub message: String,
}

impl Validation {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            valid: true,
            message: message.into(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }
}

/// Summary attached to every result.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub fixture_count: usize,
    /// Matches actually generated in this call.
    pub match_count: usize,
    /// Matches that will be generated later (elimination phase of the groups format).
    pub pending_match_estimate: usize,
    pub format: Format,
    /// Human-readable facts about the schedule, in display order.
    pub notes: Vec<String>,
}

/// Fixtures and matches produced by one `generate` call.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub fixtures: Vec<Fixture>,
    pub matches: Vec<Match>,
    pub metadata: Metadata,
}

impl GenerationResult {
    /// Wrap fixtures and matches, filling in the counts.
    pub fn new(
        format: Format,
        fixtures: Vec<Fixture>,
        matches: Vec<Match>,
        pending_match_estimate: usize,
        notes: Vec<String>,
    ) -> Self {
        let metadata = Metadata {
            fixture_count: fixtures.len(),
            match_count: matches.len(),
            pending_match_estimate,
            format,
            notes,
        };
        Self {
            fixtures,
            matches,
            metadata,
        }
    }

    /// Matches belonging to the fixture at `fixture_index`.
    pub fn matches_in(&self, fixture_index: usize) -> impl Iterator<Item = &Match> {
        self.matches
            .iter()
            .filter(move |m| m.fixture_index == fixture_index)
    }
}

/// Static description of a format, for pickers and comparisons.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct FormatDescription {
    pub format: Format,
    pub code: u8,
    pub name: String,
    pub description: String,
    pub min_participants: usize,
    pub max_participants: Option<usize>,
    pub requires_power_of_two: bool,
}
