//! Participant: the input entity handed to every strategy.

use serde::{Deserialize, Serialize};

/// Identifier of a registered participant. Always positive; 0 is never a valid id.
pub type ParticipantId = u32;

/// Identifier of a member or team record owned by the caller.
pub type RecordId = u32;

/// A registered participant (individual or team), already in seeding order.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    #[serde(default)]
    pub is_team: bool,
    /// Member record for individuals, team record for teams.
    #[serde(default)]
    pub record_id: Option<RecordId>,
}

impl Participant {
    /// Create an individual participant.
    pub fn new(id: ParticipantId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            is_team: false,
            record_id: None,
        }
    }

    /// Create a team participant.
    pub fn team(id: ParticipantId, name: impl Into<String>) -> Self {
        Self {
            is_team: true,
            ..Self::new(id, name)
        }
    }

    /// Link the participant to a member or team record.
    pub fn with_record(mut self, record_id: RecordId) -> Self {
        self.record_id = Some(record_id);
        self
    }
}
