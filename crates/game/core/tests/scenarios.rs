mod common;

use common::*;
use showdown_core::{
    AtBatPhase, Base, Bases, Command, FieldingAttemptKind, OutcomeType, Side, Station, StealFlags,
};

#[test]
fn single_with_bases_empty_puts_batter_on_first() {
    let state = game_with_leadoff(OutcomeType::Single, "Single");
    let next = run(&state, vec![10, 10], &at_bat()).unwrap();

    assert_eq!(occupant(&next, Side::Away, Base::First), Some("a1"));
    assert!(!next.bases.away.is_occupied(Base::Second));
    assert!(!next.bases.away.is_occupied(Base::Third));
    assert_eq!(next.score.away, 0);
    assert_eq!(next.outs, 0);
    assert_eq!(next.at_bat_phase, AtBatPhase::Completed);
    assert_eq!(next.last_roll2, Some(10));
}

#[test]
fn ground_ball_contest_lost_is_a_fielders_choice() {
    let mut state = game_with_leadoff(OutcomeType::Groundout, "Out (GB)");
    state.outs = 1;
    state.bases.away = Bases::empty().with(Base::First, runner("x", Some(10)));

    // Contest: 11 + infield 4 = 15, not above the default speed of 15.
    let next = run(&state, vec![3, 7, 11], &at_bat()).unwrap();

    assert_eq!(next.outs, 2);
    assert_eq!(occupant(&next, Side::Away, Base::First), Some("a1"));
    assert!(!next.bases.away.is_occupied(Base::Second));
    assert_eq!(next.score.away, 0);

    let play = next.last_play.as_ref().unwrap();
    let attempt = play.fielding_attempt.as_ref().unwrap();
    assert_eq!(attempt.kind, FieldingAttemptKind::DoublePlay);
    assert!(!attempt.successful);
    assert_eq!(attempt.roll, 11);
    assert_eq!(attempt.infield_sum, 4);
    assert!(
        play.runner_movements
            .iter()
            .any(|m| m.runner.as_str() == "x" && m.to == Station::Out)
    );
}

#[test]
fn ground_ball_contest_won_turns_two() {
    let mut state = game_with_leadoff(OutcomeType::Groundout, "Out (GB)");
    state.bases.away = Bases::empty().with(Base::First, runner("x", None));

    let next = run(&state, vec![3, 7, 12], &at_bat()).unwrap();

    assert_eq!(next.outs, 2);
    assert!(next.bases.away.is_empty());
    let play = next.last_play.as_ref().unwrap();
    assert_eq!(play.outs_recorded, 2);
    assert!(play.fielding_attempt.as_ref().unwrap().successful);
    assert!(next.game_log.last().unwrap().contains("Double play!"));
}

#[test]
fn strikeout_with_successful_steal_from_first() {
    let mut state = game_with_leadoff(OutcomeType::Strikeout, "Strikeout (SO)");
    state.outs = 1;
    state.bases.away = Bases::empty().with(Base::First, runner("x", Some(12)));

    let commands = [
        Command::roll_for_advantage(),
        Command::declare_steals(StealFlags::FIRST),
        Command::roll_for_at_bat_result(),
    ];
    let next = run(&state, vec![4, 9, 12], &commands).unwrap();

    assert_eq!(next.outs, 2);
    assert!(!next.bases.away.is_occupied(Base::First));
    assert_eq!(occupant(&next, Side::Away, Base::Second), Some("x"));
    assert!(next.pending_steals.is_empty());

    let play = next.last_play.as_ref().unwrap();
    assert_eq!(play.steal_attempts.len(), 1);
    assert!(play.steal_attempts[0].successful);
    assert_eq!(play.outs_recorded, 1);
}

#[test]
fn strikeout_with_caught_stealing_records_both_outs() {
    let mut state = game_with_leadoff(OutcomeType::Strikeout, "Strikeout (SO)");
    state.bases.away = Bases::empty().with(Base::First, runner("x", Some(12)));

    let commands = [
        Command::roll_for_advantage(),
        Command::declare_steals(StealFlags::FIRST),
        Command::roll_for_at_bat_result(),
    ];
    let next = run(&state, vec![4, 9, 13], &commands).unwrap();

    assert_eq!(next.outs, 2);
    assert!(next.bases.away.is_empty());
    assert!(!next.last_play.as_ref().unwrap().steal_attempts[0].successful);
}

#[test]
fn walk_with_bases_loaded_forces_in_one_run() {
    let mut state = game_with_leadoff(OutcomeType::Walk, "Walk");
    state.bases.away = Bases::empty()
        .with(Base::First, runner("r1", None))
        .with(Base::Second, runner("r2", None))
        .with(Base::Third, runner("r3", None));

    let next = run(&state, vec![5, 5], &at_bat()).unwrap();

    assert_eq!(next.score.away, 1);
    assert_eq!(occupant(&next, Side::Away, Base::First), Some("a1"));
    assert_eq!(occupant(&next, Side::Away, Base::Second), Some("r1"));
    assert_eq!(occupant(&next, Side::Away, Base::Third), Some("r2"));
    assert_eq!(next.last_play.as_ref().unwrap().runs_scored, 1);
}
