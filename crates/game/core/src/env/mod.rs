//! Read-only rules and the injected die source.
//!
//! [`GameEnv`] bundles what every transition needs besides the state itself,
//! so the engine can run against a seeded stream in production and a scripted
//! one in tests without knowing which it has.
mod rng;

pub use rng::{DiceSource, PcgDice, ScriptedDice};

use crate::config::RulesConfig;

/// Aggregates the rule set and die source consulted by transitions.
pub struct GameEnv<'a> {
    rules: &'a RulesConfig,
    dice: &'a mut dyn DiceSource,
}

impl<'a> GameEnv<'a> {
    pub fn new(rules: &'a RulesConfig, dice: &'a mut dyn DiceSource) -> Self {
        Self { rules, dice }
    }

    pub fn rules(&self) -> &RulesConfig {
        self.rules
    }

    /// Rolls the configured die.
    pub fn roll(&mut self) -> u32 {
        self.dice.roll(self.rules.die_sides)
    }
}

impl std::fmt::Debug for GameEnv<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEnv")
            .field("rules", self.rules)
            .finish_non_exhaustive()
    }
}
