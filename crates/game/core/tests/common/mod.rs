//! Shared fixtures for engine integration tests.
#![allow(dead_code)]

use showdown_core::{
    Base, BatterStats, Chart, ChartEntry, Command, ExecuteError, FieldPosition, GameEngine,
    GameState, OutcomeType, PitcherStats, PlayerCard, Runner, RulesConfig, ScriptedDice, Side,
    Team,
};

/// Chart that returns the same outcome for every roll.
pub fn flat_chart(outcome: OutcomeType, text: &str) -> Chart {
    Chart::new(vec![ChartEntry::new(1, 20, outcome, text)])
}

pub fn batter(id: &str, team: Side, chart: Chart) -> PlayerCard {
    // On-base 20 against control 0 hands every advantage roll to the batter.
    PlayerCard::batter(id, id.to_uppercase(), team, BatterStats::new(20), chart)
}

pub fn pitcher(id: &str, team: Side, control: u32, chart: Chart) -> PlayerCard {
    PlayerCard::pitcher(
        id,
        id.to_uppercase(),
        team,
        PitcherStats::new(control, 6),
        chart,
    )
}

/// Home club fielding an infield sum of 4 (1B 1, 2B 1, SS 2).
pub fn home_team(pitcher_chart: Chart) -> Team {
    let fielder = |id: &str, position, rating| {
        PlayerCard::batter(
            id,
            id.to_uppercase(),
            Side::Home,
            BatterStats::new(8).with_fielding(position, rating),
            flat_chart(OutcomeType::Flyout, "Out (FB)"),
        )
    };
    Team::new(
        vec![
            fielder("h1", FieldPosition::FirstBase, 1),
            fielder("h2", FieldPosition::SecondBase, 1),
            fielder("h3", FieldPosition::Shortstop, 2),
            fielder("h4", FieldPosition::CenterField, 3),
        ],
        Some(pitcher("hp", Side::Home, 0, pitcher_chart)),
    )
}

pub fn away_team(batter_charts: Vec<Chart>) -> Team {
    let batters = batter_charts
        .into_iter()
        .enumerate()
        .map(|(slot, chart)| batter(&format!("a{}", slot + 1), Side::Away, chart))
        .collect();
    Team::new(
        batters,
        Some(pitcher(
            "ap",
            Side::Away,
            0,
            flat_chart(OutcomeType::Strikeout, "Strikeout (SO)"),
        )),
    )
}

/// A game whose first away batter always produces `outcome`.
pub fn game_with_leadoff(outcome: OutcomeType, text: &str) -> GameState {
    GameState::new_game(
        home_team(flat_chart(OutcomeType::Strikeout, "Strikeout (SO)")),
        away_team(vec![flat_chart(outcome, text), flat_chart(OutcomeType::Single, "Single")]),
    )
}

pub fn runner(id: &str, speed: Option<u32>) -> Runner {
    Runner::new(id, id.to_uppercase(), speed)
}

pub fn occupant(state: &GameState, side: Side, base: Base) -> Option<&str> {
    state.bases[side].get(base).map(|runner| runner.id.as_str())
}

/// Runs `commands` in order with the scripted rolls, returning the final state.
pub fn run(
    state: &GameState,
    rolls: Vec<u32>,
    commands: &[Command],
) -> Result<GameState, ExecuteError> {
    run_with(&RulesConfig::default(), state, rolls, commands)
}

/// [`run`] under a custom rule set.
pub fn run_with(
    rules: &RulesConfig,
    state: &GameState,
    rolls: Vec<u32>,
    commands: &[Command],
) -> Result<GameState, ExecuteError> {
    let mut dice = ScriptedDice::new(rolls);
    let mut engine = GameEngine::with_dice(rules, &mut dice);
    commands
        .iter()
        .try_fold(state.clone(), |current, command| engine.execute(&current, command))
}

/// Advantage roll, result roll, in that order.
pub fn at_bat() -> [Command; 2] {
    [Command::roll_for_advantage(), Command::roll_for_at_bat_result()]
}
