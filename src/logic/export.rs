//! CSV export of a generated schedule, one row per match.

use crate::models::{GenerationResult, Participant, ParticipantId, Slot};
use log::warn;
use serde::Serialize;
use std::collections::HashMap;
use std::io::Write;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Serialize)]
struct ScheduleRow<'a> {
    fixture: &'a str,
    round: u32,
    group: Option<char>,
    home: &'a str,
    away: &'a str,
    status: &'a str,
}

fn slot_label<'a>(slot: &Slot, names: &HashMap<ParticipantId, &'a str>) -> &'a str {
    match slot {
        Slot::Occupied(id) => names.get(id).copied().unwrap_or("?"),
        Slot::Bye => "BYE",
        Slot::Pending => "Por definir",
    }
}

/// Write `result` as CSV with a header row. Names come from `participants`.
pub fn write_schedule_csv<W: Write>(
    result: &GenerationResult,
    participants: &[Participant],
    writer: W,
) -> Result<(), ExportError> {
    let names: HashMap<ParticipantId, &str> = participants
        .iter()
        .map(|p| (p.id, p.name.as_str()))
        .collect();
    let mut out = csv::Writer::from_writer(writer);

    for m in &result.matches {
        let Some(fixture) = result.fixtures.get(m.fixture_index) else {
            warn!(
                "Skipping match with fixture index {} ({} fixtures in result)",
                m.fixture_index,
                result.fixtures.len()
            );
            continue;
        };
        out.serialize(ScheduleRow {
            fixture: &fixture.name,
            round: fixture.round,
            group: fixture.group,
            home: slot_label(&m.home, &names),
            away: slot_label(&m.away, &names),
            status: &m.status_label,
        })?;
    }
    out.flush()?;
    Ok(())
}
