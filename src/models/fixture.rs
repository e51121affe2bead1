//! Fixture (one round or phase), Match, Slot and MatchStatus.

use crate::models::format::Format;
use crate::models::participant::{ParticipantId, RecordId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier of the tournament the fixtures are generated for.
pub type TournamentId = u64;

/// One side of a match.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Occupied(ParticipantId),
    /// No opponent: the other side advances or rests.
    Bye,
    /// Winner of an earlier match, not known yet.
    Pending,
}

impl Slot {
    pub fn participant(&self) -> Option<ParticipantId> {
        match self {
            Slot::Occupied(id) => Some(*id),
            Slot::Bye | Slot::Pending => None,
        }
    }

    pub fn is_bye(&self) -> bool {
        matches!(self, Slot::Bye)
    }
}

/// Lifecycle status of a match.
///
/// Generation only produces `Scheduled`, `Bye` and `ToBeDetermined`; the
/// remaining states belong to whoever records results.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Scheduled,
    /// Decided at generation time: the real participant advances.
    Bye,
    ToBeDetermined,
    InProgress,
    Finished,
}

impl MatchStatus {
    /// Display label shown next to the match.
    pub fn label(self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "Programado",
            MatchStatus::Bye => "BYE",
            MatchStatus::ToBeDetermined => "Por definir",
            MatchStatus::InProgress => "En juego",
            MatchStatus::Finished => "Finalizado",
        }
    }

    /// Whether a caller may move a match from `self` to `next`.
    pub fn can_advance_to(self, next: MatchStatus) -> bool {
        use MatchStatus::*;
        matches!(
            (self, next),
            (Scheduled, Bye) | (Scheduled, InProgress) | (InProgress, Finished) | (ToBeDetermined, Scheduled)
        )
    }

    /// Bye and Finished matches never change again.
    pub fn is_terminal(self) -> bool {
        matches!(self, MatchStatus::Bye | MatchStatus::Finished)
    }
}

/// A round or phase container: "Fecha 3", "Semifinal", "Fase de Grupos - Grupo B".
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub format: Format,
    pub tournament_id: TournamentId,
    pub name: String,
    /// 1-based round number.
    pub round: u32,
    /// Group letter, only for group-phase fixtures.
    pub group: Option<char>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// A single game between two slots.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// Position of the owning fixture in the same result's `fixtures`.
    /// The caller rewrites it to the persisted fixture id.
    pub fixture_index: usize,
    pub home: Slot,
    pub away: Slot,
    pub venue: Option<String>,
    pub official_id: Option<RecordId>,
    pub status: MatchStatus,
    pub status_label: String,
}

impl Match {
    fn with_status(fixture_index: usize, home: Slot, away: Slot, status: MatchStatus) -> Self {
        Self {
            fixture_index,
            home,
            away,
            venue: None,
            official_id: None,
            status,
            status_label: status.label().to_string(),
        }
    }

    /// A playable match between two known participants.
    pub fn scheduled(fixture_index: usize, home: ParticipantId, away: ParticipantId) -> Self {
        Self::with_status(
            fixture_index,
            Slot::Occupied(home),
            Slot::Occupied(away),
            MatchStatus::Scheduled,
        )
    }

    /// A match already decided because one side is a bye.
    pub fn bye(fixture_index: usize, home: Slot, away: Slot) -> Self {
        Self::with_status(fixture_index, home, away, MatchStatus::Bye)
    }

    /// A placeholder whose occupants are winners of earlier matches.
    pub fn placeholder(fixture_index: usize) -> Self {
        Self::with_status(
            fixture_index,
            Slot::Pending,
            Slot::Pending,
            MatchStatus::ToBeDetermined,
        )
    }

    /// Participant ids on either side (byes and pending slots skipped).
    pub fn participants(&self) -> impl Iterator<Item = ParticipantId> {
        self.home.participant().into_iter().chain(self.away.participant())
    }

    /// Whether `id` plays in this match.
    pub fn involves(&self, id: ParticipantId) -> bool {
        self.participants().any(|p| p == id)
    }
}
