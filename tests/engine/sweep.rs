//! Closing sweep behavior

use clubsim_engine::{Action, Engine, OutputRecord, Step};

use crate::{c, club, ev, hm, n};

#[test]
fn sweep_evicts_everyone_in_name_order() {
    let mut engine = Engine::new(club(2));
    for event in [
        ev("10:00", "zoe", Action::Arrive),
        ev("10:00", "zoe", Action::Sit(n(2))),
        ev("10:00", "adam", Action::Arrive),
        ev("10:00", "mia", Action::Arrive),
        ev("10:00", "mia", Action::Sit(n(1))),
    ] {
        engine.handle(&event).unwrap();
    }

    let records = engine.close().unwrap();
    assert_eq!(
        records,
        [
            OutputRecord::forced_departure(hm(19, 0), c("adam")),
            OutputRecord::forced_departure(hm(19, 0), c("mia")),
            OutputRecord::forced_departure(hm(19, 0), c("zoe")),
        ]
    );
    assert!(engine.clients().is_empty());
    assert_eq!(engine.tables().occupied_count(), 0);

    let report = engine.report();
    assert_eq!(report.tables[0].income, 90);
    assert_eq!(report.tables[1].income, 90);
}

#[test]
fn closed_engine_consumes_nothing() {
    let mut engine = Engine::new(club(1));
    engine.close().unwrap();

    assert!(engine.is_closed());
    let step = engine.handle(&ev("10:00", "a", Action::Arrive)).unwrap();
    assert_eq!(step, Step::Closed);
    assert!(!engine.clients().exists(&c("a")));
}
