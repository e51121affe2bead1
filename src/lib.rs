//! Tournament fixture generator: library with models and scheduling logic.

pub mod logic;
pub mod models;

pub use logic::{write_schedule_csv, ExportError, FixtureGenerator};
pub use models::{
    Fixture, FixtureError, Format, FormatDescription, GenerationParams, GenerationResult, Match,
    MatchStatus, Metadata, Participant, ParticipantId, RecordId, Slot, TournamentId, Validation,
};
