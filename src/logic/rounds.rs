//! Helpers shared by the strategies: round naming, fixture construction, common checks.

use crate::models::{Fixture, Format, GenerationParams, Participant, Validation};
use std::collections::HashSet;

/// Names by distance from the final (0 = final).
const ROUND_NAMES: [&str; 5] = [
    "Final",
    "Semifinal",
    "Cuartos de Final",
    "Octavos de Final",
    "Dieciseisavos de Final",
];

/// Name of elimination round `round` (1-based) out of `total_rounds`.
///
/// Only the distance to the final matters; rounds too far from it fall back to "Ronda {round}".
pub(crate) fn round_name(total_rounds: u32, round: u32) -> String {
    let distance = total_rounds.saturating_sub(round) as usize;
    match ROUND_NAMES.get(distance) {
        Some(name) => (*name).to_string(),
        None => format!("Ronda {round}"),
    }
}

/// Rounds needed for a single-elimination bracket of `entrants` (ceil(log2)).
pub(crate) fn elimination_rounds(entrants: usize) -> u32 {
    if entrants < 2 {
        return 0;
    }
    entrants.next_power_of_two().trailing_zeros()
}

/// Number of pairings in a full round-robin of `n` participants, saturating at `usize::MAX`.
pub(crate) fn round_robin_matches(n: usize) -> usize {
    let (a, b) = if n % 2 == 0 {
        (n / 2, n.saturating_sub(1))
    } else {
        (n, (n - 1) / 2)
    };
    a.checked_mul(b).unwrap_or(usize::MAX)
}

/// Build a fixture carrying the tournament id and date bounds from `params`.
pub(crate) fn fixture(
    params: &GenerationParams<'_>,
    format: Format,
    name: impl Into<String>,
    round: u32,
    group: Option<char>,
) -> Fixture {
    Fixture {
        format,
        tournament_id: params.tournament_id,
        name: name.into(),
        round,
        group,
        start_date: params.start_date,
        end_date: params.end_date,
    }
}

/// Checks every format applies before its own count rule: no zero ids, no duplicates.
pub(crate) fn check_identities(participants: &[Participant]) -> Option<Validation> {
    if let Some(p) = participants.iter().find(|p| p.id == 0) {
        return Some(Validation::rejected(format!(
            "El participante \"{}\" no tiene un identificador válido.",
            p.name
        )));
    }
    let mut seen = HashSet::with_capacity(participants.len());
    for p in participants {
        if !seen.insert(p.id) {
            return Some(Validation::rejected(format!(
                "El participante \"{}\" está inscrito más de una vez.",
                p.name
            )));
        }
    }
    None
}
