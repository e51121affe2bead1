//! Groups + elimination format: round-robin groups of four, top two advance.
//!
//! Only the group phase gets matches here. Elimination fixtures are emitted
//! empty; their matches are generated once group standings are final.

use crate::logic::rounds::{
    check_identities, elimination_rounds, fixture, round_name, round_robin_matches,
};
use crate::models::{
    Format, FormatDescription, GenerationParams, GenerationResult, Match, Participant, Validation,
};
use log::debug;
use std::ops::Range;

pub const MIN_PARTICIPANTS: usize = 6;
/// One letter per group, A to Z.
pub const MAX_GROUPS: usize = 26;
pub const GROUP_SIZE: usize = 4;
pub const QUALIFIERS_PER_GROUP: usize = 2;
pub const MIN_QUALIFIERS: usize = 4;
pub const MAX_PARTICIPANTS: usize = MAX_GROUPS * GROUP_SIZE;

fn group_count(n: usize) -> usize {
    n.div_ceil(GROUP_SIZE)
}

/// Contiguous slices of the input order; the last group takes the remainder.
fn group_ranges(n: usize) -> Vec<Range<usize>> {
    let groups = group_count(n);
    if groups == 0 {
        return Vec::new();
    }
    let size = n / groups;
    (0..groups)
        .map(|g| {
            let end = if g + 1 == groups { n } else { (g + 1) * size };
            g * size..end
        })
        .collect()
}

fn group_letter(index: usize) -> char {
    char::from(b'A' + (index % MAX_GROUPS) as u8)
}

pub fn validate(participants: &[Participant]) -> Validation {
    if let Some(rejected) = check_identities(participants) {
        return rejected;
    }
    let n = participants.len();
    if n < MIN_PARTICIPANTS {
        return Validation::rejected(format!(
            "El formato de grupos necesita al menos {MIN_PARTICIPANTS} participantes para formar dos grupos (hay {n})."
        ));
    }
    if n > MAX_PARTICIPANTS {
        return Validation::rejected(format!(
            "El formato de grupos admite como máximo {MAX_PARTICIPANTS} participantes ({MAX_GROUPS} grupos; hay {n})."
        ));
    }
    let groups = group_count(n);
    let qualifiers = groups * QUALIFIERS_PER_GROUP;
    if qualifiers < MIN_QUALIFIERS {
        return Validation::rejected(format!(
            "Se necesitan al menos {MIN_QUALIFIERS} clasificados para la fase de eliminación (habría {qualifiers})."
        ));
    }
    Validation::ok(format!(
        "Formato válido: {groups} grupos, clasifican {QUALIFIERS_PER_GROUP} por grupo ({qualifiers} a la fase de eliminación)."
    ))
}

pub fn generate(params: &GenerationParams<'_>) -> GenerationResult {
    let participants = params.participants;
    let ranges = group_ranges(participants.len());
    let mut fixtures = Vec::with_capacity(ranges.len());
    let mut matches = Vec::new();

    for (index, range) in ranges.iter().enumerate() {
        let letter = group_letter(index);
        let fixture_index = fixtures.len();
        fixtures.push(fixture(
            params,
            Format::GroupsElimination,
            format!("Fase de Grupos - Grupo {letter}"),
            1,
            Some(letter),
        ));

        let group = &participants[range.clone()];
        for (i, home) in group.iter().enumerate() {
            for away in &group[i + 1..] {
                matches.push(Match::scheduled(fixture_index, home.id, away.id));
            }
        }
        debug!("group {letter}: {} participants", group.len());
    }

    let qualifiers = ranges.len() * QUALIFIERS_PER_GROUP;
    let rounds = elimination_rounds(qualifiers);
    for round in 1..=rounds {
        fixtures.push(fixture(
            params,
            Format::GroupsElimination,
            round_name(rounds, round),
            round + 1,
            None,
        ));
    }

    let pending = qualifiers.saturating_sub(1);
    let notes = vec![
        format!("{} grupos", ranges.len()),
        format!("{} partidos en la fase de grupos", matches.len()),
        format!("Clasifican {QUALIFIERS_PER_GROUP} por grupo: {qualifiers} clasificados"),
        format!("{rounds} rondas de eliminación"),
        format!(
            "Los {pending} partidos de eliminación se generarán cuando concluya la fase de grupos"
        ),
    ];

    GenerationResult::new(Format::GroupsElimination, fixtures, matches, pending, notes)
}

/// Exact group-phase matches plus the elimination estimate (qualifiers - 1).
///
/// Same slicing as `group_ranges`, without building it: every group but the
/// last has `n / groups` participants. Saturates at `usize::MAX`.
pub fn count_matches(n: usize) -> usize {
    let groups = group_count(n);
    if groups == 0 {
        return 0;
    }
    let size = n / groups;
    let last = n - (groups - 1) * size;
    let qualifiers = groups.saturating_mul(QUALIFIERS_PER_GROUP);
    (groups - 1)
        .saturating_mul(round_robin_matches(size))
        .saturating_add(round_robin_matches(last))
        .saturating_add(qualifiers - 1)
}

pub fn describe() -> FormatDescription {
    FormatDescription {
        format: Format::GroupsElimination,
        code: Format::GroupsElimination.code(),
        name: "Grupos y eliminación".to_string(),
        description: "Grupos de cuatro todos contra todos; los dos primeros de cada grupo pasan a eliminación directa.".to_string(),
        min_participants: MIN_PARTICIPANTS,
        max_participants: Some(MAX_PARTICIPANTS),
        requires_power_of_two: false,
    }
}
