//! League format: single round-robin, every participant plays every other once.

use crate::logic::rounds::{check_identities, fixture, round_robin_matches};
use crate::models::{
    Format, FormatDescription, GenerationParams, GenerationResult, Match, Participant, Slot,
    Validation,
};
use log::debug;

pub const MIN_PARTICIPANTS: usize = 3;
pub const MAX_PARTICIPANTS: usize = 16;

/// Accept 3..=16 participants; larger fields are pointed to the groups format.
pub fn validate(participants: &[Participant]) -> Validation {
    if let Some(rejected) = check_identities(participants) {
        return rejected;
    }
    let n = participants.len();
    if n < MIN_PARTICIPANTS {
        return Validation::rejected(format!(
            "La liga necesita al menos {MIN_PARTICIPANTS} participantes (hay {n})."
        ));
    }
    if n > MAX_PARTICIPANTS {
        return Validation::rejected(format!(
            "La liga admite como máximo {MAX_PARTICIPANTS} participantes (hay {n}). Para más participantes use el formato de grupos con eliminación."
        ));
    }
    Validation::ok(format!(
        "Liga válida: {n} participantes, {} fechas y {} partidos.",
        league_rounds(n),
        round_robin_matches(n)
    ))
}

/// N - 1 rounds for an even field, N for an odd one (everyone rests once).
fn league_rounds(n: usize) -> usize {
    if n % 2 == 0 {
        n.saturating_sub(1)
    } else {
        n
    }
}

/// Circle method: participant 0 stays fixed, the rest rotate one position per round.
///
/// An odd field gets a bye slot; pairings against it produce no match.
pub fn generate(params: &GenerationParams<'_>) -> GenerationResult {
    let n = params.participants.len();
    let mut slots: Vec<Slot> = params
        .participants
        .iter()
        .map(|p| Slot::Occupied(p.id))
        .collect();
    if n % 2 == 1 {
        slots.push(Slot::Bye);
    }

    let size = slots.len();
    let rounds = league_rounds(n);
    let mut fixtures = Vec::with_capacity(rounds);
    let mut matches = Vec::with_capacity(round_robin_matches(n));

    for round in 1..=rounds {
        let fixture_index = fixtures.len();
        fixtures.push(fixture(
            params,
            Format::League,
            format!("Fecha {round}"),
            round as u32,
            None,
        ));

        let before = matches.len();
        for i in 0..size / 2 {
            if let (Slot::Occupied(home), Slot::Occupied(away)) = (slots[i], slots[size - 1 - i]) {
                matches.push(Match::scheduled(fixture_index, home, away));
            }
        }
        debug!("league round {round}: {} matches", matches.len() - before);

        if size > 1 {
            slots[1..].rotate_right(1);
        }
    }

    let mut notes = vec![
        format!("{n} participantes"),
        format!("{rounds} fechas"),
        format!("Cada participante juega {} partidos", n.saturating_sub(1)),
    ];
    if n % 2 == 1 {
        notes.push("Número impar de participantes: cada uno descansa una fecha".to_string());
    }

    GenerationResult::new(Format::League, fixtures, matches, 0, notes)
}

pub fn count_matches(n: usize) -> usize {
    round_robin_matches(n)
}

pub fn describe() -> FormatDescription {
    FormatDescription {
        format: Format::League,
        code: Format::League.code(),
        name: "Liga".to_string(),
        description: "Todos contra todos a una sola vuelta.".to_string(),
        min_participants: MIN_PARTICIPANTS,
        max_participants: Some(MAX_PARTICIPANTS),
        requires_power_of_two: false,
    }
}
