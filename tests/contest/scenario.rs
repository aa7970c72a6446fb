use crate::helpers::{StubSystem, TestStore, player};
use approx::assert_abs_diff_eq;
use claims::{assert_err, assert_matches, assert_ok};
use contest_ratings::error::ProcessError;
use contest_ratings::systems::{Rating, RatingSystem, TopcoderSys};

fn three_newcomers_and_an_absentee() -> TestStore {
    TestStore::new([
        ("srn_a", player("a", 1500., 200., 0, 5)),
        ("srn_b", player("b", 1500., 200., 0, 5)),
        ("srn_c", player("c", 1500., 200., 0, 5)),
        ("srn_d", player("d", 1600., 180., 2, 1)),
    ])
}

#[test]
fn contest_rates_participants_and_decays_the_absentee() {
    // Arrange
    let store = three_newcomers_and_an_absentee();

    // Act
    let report = assert_ok!(store.run_contest(&["b", "a", "c"], &StubSystem));

    // Assert
    let players = store.load();
    assert_eq!(report.num_participants, 3);
    assert_eq!(report.competition_factor, 203.);
    for (srn, rating) in [("srn_b", 1530.), ("srn_a", 1520.), ("srn_c", 1510.)] {
        let player = &players[srn];
        assert_eq!(player.rating, rating, "wrong rating for {}", srn);
        assert_eq!(player.volatility, 203.);
        assert_eq!(player.times_played, 1);
        assert_eq!(player.best, rating);
        assert_eq!(player.last_five, 5);
    }
    assert_eq!(players["srn_d"].rating, 1600. * 0.9);
    assert_eq!(players["srn_d"].last_five, 5);
    assert_eq!(players["srn_d"].times_played, 2);
    assert_eq!(report.decayed_players, vec!["srn_d".to_string()]);
}

#[test]
fn topcoder_updates_match_the_shared_snapshot() {
    // Arrange
    let store = three_newcomers_and_an_absentee();
    let system = TopcoderSys::default();
    let field = vec![
        Rating {
            mu: 1500.,
            sig: 200.
        };
        3
    ];
    let cf = system.competition_factor(&field);

    // Act
    let report = assert_ok!(store.run_contest(&["b", "a", "c"], &system));

    // Assert
    let players = store.load();
    assert_abs_diff_eq!(report.competition_factor, cf, epsilon = 1e-12);
    for (srn, rank) in [("srn_b", 1), ("srn_a", 2), ("srn_c", 3)] {
        let expected = system.update_player(field[0], 0, rank, &field, cf);
        assert_abs_diff_eq!(players[srn].rating, expected.mu, epsilon = 1e-9);
        assert_abs_diff_eq!(players[srn].volatility, expected.sig, epsilon = 1e-9);
    }
}

#[test]
fn duplicate_and_unknown_handles_are_reported_not_fatal() {
    // Arrange
    let store = three_newcomers_and_an_absentee();

    // Act
    let report = assert_ok!(store.run_contest(&["b", "stranger", "a", "b"], &StubSystem));

    // Assert
    assert_eq!(report.duplicate_handles, vec!["b".to_string()]);
    assert_eq!(report.unresolved_handles, vec!["stranger".to_string()]);
    assert_eq!(report.num_participants, 2);

    // "c" sat this one out, so it only counts down
    let players = store.load();
    assert_eq!(players["srn_c"].times_played, 0);
    assert_eq!(players["srn_c"].last_five, 4);
    assert_eq!(players["srn_a"].times_played, 1);
    assert_eq!(players["srn_b"].times_played, 1);
}

#[test]
fn corrupted_store_is_left_untouched() {
    // Arrange
    let store = three_newcomers_and_an_absentee();
    let corrupted = std::fs::read_to_string(&store.path)
        .unwrap()
        .replacen("180.0", "-5.0", 1);
    std::fs::write(&store.path, &corrupted).unwrap();

    // Act
    let result = store.run_contest(&["b", "a", "c"], &StubSystem);

    // Assert
    assert_matches!(
        result,
        Err(ProcessError::InvalidRecord {
            field: "volatility",
            ..
        })
    );
    assert_eq!(std::fs::read_to_string(&store.path).unwrap(), corrupted);
}

#[test]
fn contest_on_an_unknown_site_changes_nothing() {
    // Arrange
    let store = three_newcomers_and_an_absentee();
    let before = store.load();

    // Act
    let result = store.run_contest(&["nobody", "registered"], &StubSystem);

    // Assert
    assert_err!(result);
    assert_eq!(store.load(), before);
}
