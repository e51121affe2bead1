//! Integration tests for the format dispatcher: codes, switching, fail-closed generation.

use chrono::NaiveDate;
use tournament_fixtures::{
    FixtureError, FixtureGenerator, Format, GenerationParams, MatchStatus, Participant,
};

fn participants(n: u32) -> Vec<Participant> {
    (1..=n).map(|i| Participant::new(i, format!("P{i}"))).collect()
}

#[test]
fn unknown_code_fails_fast() {
    assert_eq!(FixtureGenerator::new(3), Err(FixtureError::UnsupportedFormat(3)));
    assert!(FixtureGenerator::new(255).is_err());
    assert_eq!(Format::try_from(9u8), Err(FixtureError::UnsupportedFormat(9)));
}

#[test]
fn codes_map_to_formats() {
    assert_eq!(FixtureGenerator::new(0).unwrap().format(), Format::League);
    assert_eq!(FixtureGenerator::new(1).unwrap().format(), Format::Elimination);
    assert_eq!(FixtureGenerator::new(2).unwrap().format(), Format::GroupsElimination);
    for format in Format::ALL {
        assert_eq!(Format::from_code(format.code()), Ok(format));
    }
}

#[test]
fn switching_format_compares_the_same_field() {
    let players = participants(8);
    let mut g = FixtureGenerator::new(0).unwrap();
    assert_eq!(g.count_matches(players.len()), 28);
    g.set_format(1).unwrap();
    assert_eq!(g.count_matches(players.len()), 7);
    g.set_format(2).unwrap();
    assert_eq!(g.count_matches(players.len()), 15);

    assert_eq!(g.set_format(7), Err(FixtureError::UnsupportedFormat(7)));
    assert_eq!(g.format(), Format::GroupsElimination);
}

#[test]
fn generate_fails_closed_on_invalid_input() {
    let players = participants(2);
    let g = FixtureGenerator::from_format(Format::League);
    let err = g.generate(&GenerationParams::new(1, &players)).unwrap_err();
    assert_eq!(err, FixtureError::Rejected(g.validate(&players).message));
}

#[test]
fn duplicate_and_zero_ids_are_rejected() {
    let mut players = participants(4);
    players[3].id = 1;
    assert!(!FixtureGenerator::from_format(Format::Elimination).validate(&players).valid);

    let mut players = participants(4);
    players[0].id = 0;
    assert!(!FixtureGenerator::from_format(Format::League).validate(&players).valid);
}

#[test]
fn dates_are_copied_onto_fixtures() {
    let players = participants(4);
    let start = NaiveDate::from_ymd_opt(2026, 3, 1);
    let end = NaiveDate::from_ymd_opt(2026, 4, 30);
    let result = FixtureGenerator::from_format(Format::League)
        .generate(&GenerationParams::new(1, &players).with_dates(start, end))
        .unwrap();
    assert!(result
        .fixtures
        .iter()
        .all(|f| f.start_date == start && f.end_date == end));
}

#[test]
fn reversed_dates_are_rejected() {
    let players = participants(4);
    let start = NaiveDate::from_ymd_opt(2026, 4, 30).unwrap();
    let end = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    let err = FixtureGenerator::from_format(Format::League)
        .generate(&GenerationParams::new(1, &players).with_dates(Some(start), Some(end)))
        .unwrap_err();
    assert_eq!(err, FixtureError::InvalidDateRange { start, end });
}

#[test]
fn generation_is_deterministic() {
    let players = participants(11);
    for format in Format::ALL {
        let g = FixtureGenerator::from_format(format);
        let params = GenerationParams::new(5, &players);
        assert_eq!(g.generate(&params).unwrap(), g.generate(&params).unwrap());
    }
}

#[test]
fn metadata_matches_the_result() {
    let players = participants(11);
    for format in Format::ALL {
        let result = FixtureGenerator::from_format(format)
            .generate(&GenerationParams::new(5, &players))
            .unwrap();
        assert_eq!(result.metadata.format, format);
        assert_eq!(result.metadata.fixture_count, result.fixtures.len());
        assert_eq!(result.metadata.match_count, result.matches.len());
        assert!(!result.metadata.notes.is_empty());
        assert!(result.fixtures.iter().all(|f| f.format == format));
        for m in &result.matches {
            assert!(m.fixture_index < result.fixtures.len());
            assert!(m.participants().all(|id| players.iter().any(|p| p.id == id)));
            assert_eq!(m.status_label, m.status.label());
        }
    }
}

#[test]
fn describe_lists_every_format() {
    let all = FixtureGenerator::describe_all();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].min_participants, 3);
    assert_eq!(all[1].min_participants, 2);
    assert_eq!(all[2].min_participants, 6);
    assert!(all.iter().all(|d| !d.requires_power_of_two));
    assert_eq!(all[1].code, 1);
}

#[test]
fn status_lifecycle() {
    use MatchStatus::*;
    assert!(Scheduled.can_advance_to(InProgress));
    assert!(Scheduled.can_advance_to(Bye));
    assert!(InProgress.can_advance_to(Finished));
    assert!(ToBeDetermined.can_advance_to(Scheduled));
    assert!(!ToBeDetermined.can_advance_to(Finished));
    assert!(!Finished.can_advance_to(Scheduled));
    assert!(Bye.is_terminal());
}

#[test]
fn count_matches_saturates_on_huge_fields() {
    for format in Format::ALL {
        assert_eq!(
            FixtureGenerator::from_format(format).count_matches(usize::MAX),
            usize::MAX,
            "{format:?}"
        );
    }
    let league = FixtureGenerator::from_format(Format::League);
    assert_eq!(league.count_matches(1 << 20), (1usize << 19) * ((1 << 20) - 1));
    assert_eq!(league.count_matches(1 << 33), usize::MAX);
    let elimination = FixtureGenerator::from_format(Format::Elimination);
    assert_eq!(elimination.count_matches((1 << 63) + 1), usize::MAX);
}

#[test]
fn groups_count_is_arithmetic_for_large_fields() {
    // 100 000 000 groups of four: 6 matches each plus 199 999 999 eliminations.
    let groups = FixtureGenerator::from_format(Format::GroupsElimination);
    assert_eq!(groups.count_matches(400_000_000), 799_999_999);
}

#[test]
fn record_links_survive_serialization() {
    let players = vec![
        Participant::new(1, "Ana").with_record(501),
        Participant::team(2, "Los Halcones").with_record(77),
        Participant::new(3, "Carla"),
    ];
    assert_eq!(players[0].record_id, Some(501));
    assert!(players[1].is_team);

    let json = serde_json::to_string(&players).unwrap();
    let back: Vec<Participant> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, players);

    let result = FixtureGenerator::from_format(Format::League)
        .generate(&GenerationParams::new(1, &back))
        .unwrap();
    assert_eq!(result.matches.len(), 3);
}
