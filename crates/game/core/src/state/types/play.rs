use crate::card::CardId;
use crate::rules::{Advantage, ResolvedOutcome};

use super::{Base, Station};

/// A runner (or the batter) changing station during a play.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct RunnerMovement {
    pub runner: CardId,
    pub from: Station,
    pub to: Station,
}

impl RunnerMovement {
    pub fn new(runner: CardId, from: Station, to: Station) -> Self {
        Self { runner, from, to }
    }

    pub fn scored(&self) -> bool {
        self.to == Station::Home
    }
}

/// Kind of rolled fielding contest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
#[strum(serialize_all = "camelCase")]
pub enum FieldingAttemptKind {
    DoublePlay,
}

/// Record of a rolled fielding contest.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct FieldingAttempt {
    pub kind: FieldingAttemptKind,
    pub successful: bool,
    pub roll: u32,
    pub infield_sum: i32,
    pub batter_speed: u32,
}

/// Record of one steal attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct StealAttempt {
    pub runner: CardId,
    pub from: Base,
    pub roll: u32,
    pub speed: u32,
    pub successful: bool,
}

/// Structured summary of the most recent result roll.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct LastPlay {
    pub batter: CardId,
    pub advantage: Advantage,
    /// Card whose chart produced the outcome.
    pub card_in_use: CardId,
    pub outcome: ResolvedOutcome,
    pub runner_movements: Vec<RunnerMovement>,
    pub steal_attempts: Vec<StealAttempt>,
    pub fielding_attempt: Option<FieldingAttempt>,
    pub outs_recorded: u8,
    pub runs_scored: u32,
    /// The play recorded the third out and closed the half-inning.
    pub inning_ended: bool,
}
