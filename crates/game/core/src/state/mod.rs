//! Authoritative game state representation.
//!
//! This module owns the data structures that describe the score, the bases,
//! lineups, pitchers and at-bat bookkeeping. Drivers clone or query this
//! state but only ever obtain a new one from the engine.
pub mod types;

pub use types::{
    AtBatPhase, Base, Bases, FieldingAttempt, FieldingAttemptKind, Half, Inning, InningsPitched,
    InvalidInning, LastPlay, LineupCard, PerSide, PitcherCard, Runner, RunnerMovement, Station,
    StealAttempt, StealFlags, Team, Workload,
};

use crate::card::Side;
use crate::rules::Advantage;

/// Canonical snapshot of a game in progress.
///
/// Every nested container is owned, so a clone never aliases the original.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct GameState {
    pub inning: Inning,
    /// Outs in the current half-inning, always below three between transitions.
    pub outs: u8,
    pub score: PerSide<u32>,
    pub bases: PerSide<Bases>,
    pub batting_team: Side,
    pub home_batters: Vec<LineupCard>,
    pub away_batters: Vec<LineupCard>,
    pub home_pitcher: Option<PitcherCard>,
    pub away_pitcher: Option<PitcherCard>,
    /// Slot in the batting team's lineup; wraps modulo its length.
    pub current_batter_index: usize,
    pub current_advantage: Option<Advantage>,
    pub at_bat_phase: AtBatPhase,
    /// Steal declaration for the upcoming result roll.
    pub pending_steals: StealFlags,
    pub last_roll1: Option<u32>,
    pub last_roll2: Option<u32>,
    pub last_play: Option<LastPlay>,
    /// Append-only, human-readable play-by-play.
    pub game_log: Vec<String>,
}

impl GameState {
    /// Opening line of every game log.
    pub const OPENING_LINE: &'static str = "Solo game started. The Away team is batting first.";

    /// Creates the opening state: top of the first, away batting, nobody on.
    pub fn new_game(home: Team, away: Team) -> Self {
        Self {
            inning: Inning::FIRST,
            outs: 0,
            score: PerSide::default(),
            bases: PerSide::default(),
            batting_team: Side::Away,
            home_batters: home.batters.into_iter().map(LineupCard::new).collect(),
            away_batters: away.batters.into_iter().map(LineupCard::new).collect(),
            home_pitcher: home.pitcher.map(PitcherCard::new),
            away_pitcher: away.pitcher.map(PitcherCard::new),
            current_batter_index: 0,
            current_advantage: None,
            at_bat_phase: AtBatPhase::FirstRoll,
            pending_steals: StealFlags::empty(),
            last_roll1: None,
            last_roll2: None,
            last_play: None,
            game_log: vec![Self::OPENING_LINE.to_owned()],
        }
    }

    pub fn fielding_team(&self) -> Side {
        self.batting_team.opponent()
    }

    pub fn batters(&self, side: Side) -> &[LineupCard] {
        match side {
            Side::Home => &self.home_batters,
            Side::Away => &self.away_batters,
        }
    }

    pub fn batters_mut(&mut self, side: Side) -> &mut Vec<LineupCard> {
        match side {
            Side::Home => &mut self.home_batters,
            Side::Away => &mut self.away_batters,
        }
    }

    pub fn pitcher(&self, side: Side) -> Option<&PitcherCard> {
        match side {
            Side::Home => self.home_pitcher.as_ref(),
            Side::Away => self.away_pitcher.as_ref(),
        }
    }

    pub fn pitcher_mut(&mut self, side: Side) -> Option<&mut PitcherCard> {
        match side {
            Side::Home => self.home_pitcher.as_mut(),
            Side::Away => self.away_pitcher.as_mut(),
        }
    }

    /// Batter due up for the batting team.
    pub fn current_batter(&self) -> Option<&LineupCard> {
        self.batters(self.batting_team)
            .get(self.current_batter_index)
    }

    /// Pitcher on the mound for the fielding team.
    pub fn current_pitcher(&self) -> Option<&PitcherCard> {
        self.pitcher(self.fielding_team())
    }

    /// Bases of the club currently at bat.
    pub fn batting_bases(&self) -> &Bases {
        &self.bases[self.batting_team]
    }

    /// Sum of infield fielding ratings (1B, 2B, SS, 3B) for `side`'s lineup.
    pub fn infield_fielding_sum(&self, side: Side) -> i32 {
        self.batters(side)
            .iter()
            .filter_map(|slot| slot.card.batter_stats())
            .filter_map(|stats| stats.infield_rating())
            .sum()
    }

    pub fn log(&mut self, line: impl Into<String>) {
        self.game_log.push(line.into());
    }
}
