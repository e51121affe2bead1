//! Data structures for fixture generation: participants, fixtures, matches, results.

mod fixture;
mod format;
mod generation;
mod participant;

pub use fixture::{Fixture, Match, MatchStatus, Slot, TournamentId};
pub use format::{FixtureError, Format};
pub use generation::{FormatDescription, GenerationParams, GenerationResult, Metadata, Validation};
pub use participant::{Participant, ParticipantId, RecordId};
