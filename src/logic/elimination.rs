//! Elimination format: single-elimination bracket with byes and placeholder rounds.

use crate::logic::rounds::{check_identities, elimination_rounds, fixture, round_name};
use crate::models::{
    Format, FormatDescription, GenerationParams, GenerationResult, Match, Participant, Slot,
    Validation,
};
use log::debug;

pub const MIN_PARTICIPANTS: usize = 2;
pub const MAX_PARTICIPANTS: usize = 64;

/// Accept 2..=64 participants. A field that is not a power of two is still valid;
/// the message says how many byes will be inserted.
pub fn validate(participants: &[Participant]) -> Validation {
    if let Some(rejected) = check_identities(participants) {
        return rejected;
    }
    let n = participants.len();
    if n < MIN_PARTICIPANTS {
        return Validation::rejected(format!(
            "La eliminación directa necesita al menos {MIN_PARTICIPANTS} participantes (hay {n})."
        ));
    }
    if n > MAX_PARTICIPANTS {
        return Validation::rejected(format!(
            "La eliminación directa admite como máximo {MAX_PARTICIPANTS} participantes (hay {n})."
        ));
    }
    let byes = n.next_power_of_two() - n;
    if byes > 0 {
        return Validation::ok(format!(
            "{n} participantes no es potencia de 2: se insertarán {byes} byes para completar un cuadro de {}.",
            n.next_power_of_two()
        ));
    }
    Validation::ok(format!("Cuadro de {n} participantes sin byes."))
}

/// Lay out the first-round slots: byes spread proportionally over the pairs,
/// participants fill the rest in order.
///
/// `bracket_size` is the smallest power of two holding every participant, so
/// there are always fewer byes than pairs and no pair gets two.
fn seed_slots(participants: &[Participant], bracket_size: usize) -> Vec<Slot> {
    let pairs = bracket_size / 2;
    let byes = bracket_size.saturating_sub(participants.len());
    let mut slots = vec![Slot::Pending; bracket_size];

    for k in 0..byes {
        slots[2 * (k * pairs / byes) + 1] = Slot::Bye;
    }

    let mut entrants = participants.iter();
    for slot in slots.iter_mut().filter(|s| !s.is_bye()) {
        if let Some(p) = entrants.next() {
            *slot = Slot::Occupied(p.id);
        }
    }
    slots
}

/// Round 1 pairs consecutive slots; later rounds are `ToBeDetermined` placeholders,
/// `bracket_size / 2^r` of them in round `r`.
pub fn generate(params: &GenerationParams<'_>) -> GenerationResult {
    let n = params.participants.len();
    let bracket_size = n.max(1).next_power_of_two();
    let rounds = elimination_rounds(bracket_size);
    let byes = bracket_size - n;

    let fixtures: Vec<_> = (1..=rounds)
        .map(|round| fixture(params, Format::Elimination, round_name(rounds, round), round, None))
        .collect();

    let mut matches = Vec::with_capacity(bracket_size.saturating_sub(1));
    if rounds > 0 {
        let slots = seed_slots(params.participants, bracket_size);
        for pair in slots.chunks_exact(2) {
            match (pair[0], pair[1]) {
                (Slot::Occupied(home), Slot::Occupied(away)) => {
                    matches.push(Match::scheduled(0, home, away));
                }
                (Slot::Bye, Slot::Bye) => debug!("skipping double bye pairing"),
                (home, away) => matches.push(Match::bye(0, home, away)),
            }
        }
    }

    for round in 2..=rounds {
        let placeholders = bracket_size >> round;
        let fixture_index = (round - 1) as usize;
        matches.extend((0..placeholders).map(|_| Match::placeholder(fixture_index)));
    }
    debug!("elimination bracket of {bracket_size}: {rounds} rounds, {byes} byes");

    let mut notes = vec![
        format!("{n} participantes en un cuadro de {bracket_size}"),
        format!("{rounds} rondas"),
    ];
    if byes > 0 {
        notes.push(format!("{byes} participantes avanzan directamente por bye"));
    }
    if rounds > 1 {
        notes.push(
            "Los partidos desde la segunda ronda se definirán con los ganadores de la ronda anterior"
                .to_string(),
        );
    }

    GenerationResult::new(Format::Elimination, fixtures, matches, 0, notes)
}

/// Bracket size minus one: every match, including decided byes and placeholders.
pub fn count_matches(n: usize) -> usize {
    if n < 2 {
        return 0;
    }
    n.checked_next_power_of_two()
        .map_or(usize::MAX, |bracket| bracket - 1)
}

pub fn describe() -> FormatDescription {
    FormatDescription {
        format: Format::Elimination,
        code: Format::Elimination.code(),
        name: "Eliminación directa".to_string(),
        description: "Cuadro de eliminación simple; el perdedor de cada partido queda fuera."
            .to_string(),
        min_participants: MIN_PARTICIPANTS,
        max_participants: Some(MAX_PARTICIPANTS),
        requires_power_of_two: false,
    }
}
