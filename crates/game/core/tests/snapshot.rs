mod common;

use common::*;
use showdown_core::{Base, Bases, Command, GameState, OutcomeType, StealFlags};

#[test]
fn snapshot_uses_the_documented_shape() {
    let state = game_with_leadoff(OutcomeType::Strikeout, "Strikeout (SO)");
    let state = run(&state, vec![1, 1], &at_bat()).unwrap();

    let json = serde_json::to_value(&state).unwrap();
    assert_eq!(json["inning"], serde_json::json!(1.0));
    assert_eq!(json["atBatPhase"], "completed");
    assert_eq!(json["battingTeam"], "away");
    assert_eq!(json["currentAdvantage"], "batter");
    assert_eq!(json["score"]["home"], 0);
    assert_eq!(json["lastPlay"]["outcome"]["outcome"], "strikeout");
}

#[test]
fn snapshot_round_trips_across_an_inning_flip() {
    let mut state = game_with_leadoff(OutcomeType::Strikeout, "Strikeout (SO)");
    state.outs = 2;
    state.bases.away = Bases::empty().with(Base::First, runner("x", None));
    let state = run(
        &state,
        vec![1, 1, 5],
        &[
            Command::declare_steals(StealFlags::FIRST),
            Command::roll_for_advantage(),
            Command::roll_for_at_bat_result(),
        ],
    )
    .unwrap();

    let json = serde_json::to_string(&state).unwrap();
    let restored: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, state);

    let value = serde_json::to_value(&state).unwrap();
    assert_eq!(value["inning"], serde_json::json!(1.5));
    assert_eq!(value["lastPlay"]["stealAttempts"][0]["successful"], true);
    assert_eq!(value["lastPlay"]["inningEnded"], true);
}

#[test]
fn bases_and_cards_serialize_in_snapshot_shape() {
    let mut state = game_with_leadoff(OutcomeType::Strikeout, "Strikeout (SO)");
    state.bases.away = Bases::empty().with(Base::First, runner("x", Some(12)));
    let state = run(&state, vec![1, 1], &at_bat()).unwrap();

    let json = serde_json::to_value(&state).unwrap();
    let away = json["bases"]["away"].as_array().unwrap();
    assert_eq!(away.len(), 3);
    assert_eq!(away[0]["id"], "x");
    assert_eq!(away[0]["speed"], 12);
    assert!(away[1].is_null() && away[2].is_null());
    assert_eq!(json["bases"]["home"], serde_json::json!([null, null, null]));

    let pitcher = &json["homePitcher"];
    assert_eq!(pitcher["card"]["stats"]["pitcher"]["ratedIp"], 6);
    assert_eq!(pitcher["workload"]["outsRecorded"], 1);
    let batter = &json["awayBatters"][0]["card"];
    assert_eq!(batter["stats"]["batter"]["onBase"], 20);
    assert!(batter["stats"]["batter"].get("on_base").is_none());
    assert!(batter["stats"]["batter"].get("vsLeft").is_some());
}

#[test]
fn commands_serialize_by_name() {
    let json = serde_json::to_value(Command::declare_steals(StealFlags::FIRST)).unwrap();
    assert!(json.get("DeclareSteals").is_some());
}
