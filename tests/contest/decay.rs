use crate::helpers::{StubSystem, TestStore, player};

fn regulars_and_idlers() -> TestStore {
    TestStore::new([
        ("regular1", player("r1", 1500., 200., 3, 5)),
        ("regular2", player("r2", 1500., 200., 3, 5)),
        ("veteran", player("vet", 2000., 150., 10, 5)),
        ("lurker", player("lurk", 1500., 350., 0, 5)),
    ])
}

#[test]
fn veteran_decays_once_every_five_missed_contests() {
    let store = regulars_and_idlers();

    for contest in 1..=10 {
        let report = store.run_contest(&["r1", "r2"], &StubSystem).unwrap();
        let players = store.load();
        let veteran = &players["veteran"];

        if contest % 5 == 0 {
            assert!(report.decayed_players.contains(&"veteran".to_string()));
            assert_eq!(veteran.last_five, 5);
        } else {
            assert!(report.decayed_players.is_empty());
            assert_eq!(veteran.last_five, 5 - contest % 5);
        }
    }

    let players = store.load();
    let veteran = &players["veteran"];
    assert_eq!(veteran.rating, 2000. * 0.9 * 0.9);
    assert_eq!(veteran.best, 2000.);
    assert_eq!(veteran.times_played, 10);
}

#[test]
fn never_played_countdown_keeps_falling() {
    let store = regulars_and_idlers();

    for _ in 0..8 {
        store.run_contest(&["r1", "r2"], &StubSystem).unwrap();
    }

    let players = store.load();
    let lurker = &players["lurker"];
    assert_eq!(lurker.last_five, -3);
    assert_eq!(lurker.rating, 1500.);
    assert_eq!(lurker.times_played, 0);
}

#[test]
fn first_contest_restarts_the_countdown() {
    let store = regulars_and_idlers();
    for _ in 0..7 {
        store.run_contest(&["r1", "r2"], &StubSystem).unwrap();
    }
    assert_eq!(store.load()["lurker"].last_five, -2);

    store.run_contest(&["lurk", "r1"], &StubSystem).unwrap();
    let players = store.load();
    let lurker = &players["lurker"];
    assert_eq!(lurker.last_five, 5);
    assert_eq!(lurker.times_played, 1);

    for _ in 0..5 {
        store.run_contest(&["r1", "r2"], &StubSystem).unwrap();
    }
    let players = store.load();
    let lurker = &players["lurker"];
    assert_eq!(lurker.last_five, 5);
    assert!(lurker.rating < lurker.best);
}
