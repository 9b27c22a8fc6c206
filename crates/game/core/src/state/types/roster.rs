use crate::card::{PlayerCard, Sticker};

use super::Workload;

/// A batter in a lineup together with the stickers earned this game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct LineupCard {
    pub card: PlayerCard,
    pub stickers: Vec<Sticker>,
}

impl LineupCard {
    pub fn new(card: PlayerCard) -> Self {
        Self {
            card,
            stickers: Vec::new(),
        }
    }
}

/// The active pitcher, stickers and workload.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct PitcherCard {
    pub card: PlayerCard,
    pub stickers: Vec<Sticker>,
    pub workload: Workload,
}

impl PitcherCard {
    pub fn new(card: PlayerCard) -> Self {
        Self {
            card,
            stickers: Vec::new(),
            workload: Workload::default(),
        }
    }
}

/// Cards one club brings to a new game.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Team {
    pub batters: Vec<PlayerCard>,
    pub pitcher: Option<PlayerCard>,
}

impl Team {
    pub fn new(batters: Vec<PlayerCard>, pitcher: Option<PlayerCard>) -> Self {
        Self { batters, pitcher }
    }
}
