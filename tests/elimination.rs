//! Integration tests for the elimination format: bracket size, byes and placeholders.

use tournament_fixtures::{
    FixtureGenerator, Format, GenerationParams, MatchStatus, Participant, Slot,
};

fn participants(n: u32) -> Vec<Participant> {
    (1..=n).map(|i| Participant::new(i, format!("P{i}"))).collect()
}

fn elimination() -> FixtureGenerator {
    FixtureGenerator::from_format(Format::Elimination)
}

#[test]
fn validate_accepts_2_to_64() {
    let g = elimination();
    assert!(g.validate(&participants(2)).valid);
    assert!(g.validate(&participants(64)).valid);
    assert!(!g.validate(&participants(1)).valid);
    assert!(!g.validate(&participants(65)).valid);
}

#[test]
fn non_power_of_two_is_valid_with_bye_notice() {
    let v = elimination().validate(&participants(6));
    assert!(v.valid);
    assert!(v.message.contains("2 byes"));
}

#[test]
fn two_participants_play_a_single_final() {
    let players = participants(2);
    let result = elimination()
        .generate(&GenerationParams::new(1, &players))
        .unwrap();
    assert_eq!(result.fixtures.len(), 1);
    assert_eq!(result.fixtures[0].name, "Final");
    assert_eq!(result.matches.len(), 1);
    assert_eq!(result.matches[0].home, Slot::Occupied(1));
    assert_eq!(result.matches[0].away, Slot::Occupied(2));
}

#[test]
fn three_participants_get_one_bye() {
    let players = participants(3);
    let result = elimination()
        .generate(&GenerationParams::new(1, &players))
        .unwrap();

    assert_eq!(result.fixtures.len(), 2);
    assert_eq!(result.fixtures[0].name, "Semifinal");
    assert_eq!(result.fixtures[1].name, "Final");
    assert_eq!(result.fixtures[0].round, 1);
    assert_eq!(result.fixtures[1].round, 2);

    let first: Vec<_> = result.matches_in(0).collect();
    assert_eq!(first.len(), 2);
    assert_eq!(first.iter().filter(|m| m.status == MatchStatus::Bye).count(), 1);
    assert_eq!(first.iter().filter(|m| m.status == MatchStatus::Scheduled).count(), 1);
    let bye = first.iter().find(|m| m.status == MatchStatus::Bye).unwrap();
    assert_eq!(bye.status_label, "BYE");
    assert!(bye.home.is_bye() || bye.away.is_bye());

    let last: Vec<_> = result.matches_in(1).collect();
    assert_eq!(last.len(), 1);
    assert_eq!(last[0].home, Slot::Pending);
    assert_eq!(last[0].away, Slot::Pending);
    assert_eq!(last[0].status, MatchStatus::ToBeDetermined);
}

#[test]
fn eight_participants_fill_the_bracket() {
    let players = participants(8);
    let result = elimination()
        .generate(&GenerationParams::new(1, &players))
        .unwrap();
    let names: Vec<&str> = result.fixtures.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Cuartos de Final", "Semifinal", "Final"]);
    let first: Vec<_> = result.matches_in(0).collect();
    assert_eq!(first.len(), 4);
    assert!(first.iter().all(|m| m.status == MatchStatus::Scheduled));
    assert_eq!(result.matches.len(), 7);
}

#[test]
fn bracket_shape_holds_for_every_size() {
    for n in 2..=64u32 {
        let players = participants(n);
        let result = elimination()
            .generate(&GenerationParams::new(1, &players))
            .unwrap();
        let bracket = (n as usize).next_power_of_two();
        let rounds = bracket.trailing_zeros() as usize;

        assert_eq!(result.fixtures.len(), rounds);
        assert_eq!(result.matches_in(0).count(), bracket / 2);
        for r in 2..=rounds {
            let placeholders: Vec<_> = result.matches_in(r - 1).collect();
            assert_eq!(placeholders.len(), bracket >> r);
            assert!(placeholders.iter().all(|m| m.status == MatchStatus::ToBeDetermined));
        }
        assert_eq!(result.matches.len(), bracket - 1);
        assert_eq!(elimination().count_matches(n as usize), bracket - 1);

        let byes = result.matches.iter().filter(|m| m.status == MatchStatus::Bye).count();
        assert_eq!(byes, bracket - n as usize);
        for p in &players {
            assert_eq!(result.matches.iter().filter(|m| m.involves(p.id)).count(), 1);
        }
    }
}

#[test]
fn deep_brackets_fall_back_to_numbered_rounds() {
    let players = participants(64);
    let result = elimination()
        .generate(&GenerationParams::new(1, &players))
        .unwrap();
    assert_eq!(result.fixtures[0].name, "Ronda 1");
    assert_eq!(result.fixtures[1].name, "Dieciseisavos de Final");
    assert_eq!(result.fixtures[5].name, "Final");
}
