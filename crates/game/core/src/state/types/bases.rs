use std::fmt;

use bitflags::bitflags;

use crate::card::{CardId, PlayerCard};

/// One of the three bags.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Base {
    First,
    Second,
    Third,
}

impl Base {
    pub const ALL: [Base; 3] = [Base::First, Base::Second, Base::Third];

    /// Lead runner first: third, second, first.
    pub const LEAD_FIRST: [Base; 3] = [Base::Third, Base::Second, Base::First];

    pub const fn index(self) -> usize {
        match self {
            Base::First => 0,
            Base::Second => 1,
            Base::Third => 2,
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Base::First),
            1 => Some(Base::Second),
            2 => Some(Base::Third),
            _ => None,
        }
    }

    /// The station a runner on this base moves to next.
    pub const fn next(self) -> Station {
        match self {
            Base::First => Station::Base(Base::Second),
            Base::Second => Station::Base(Base::Third),
            Base::Third => Station::Home,
        }
    }

    pub const fn flag(self) -> StealFlags {
        match self {
            Base::First => StealFlags::FIRST,
            Base::Second => StealFlags::SECOND,
            Base::Third => StealFlags::THIRD,
        }
    }
}

/// Where a participant stands before or after a play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Station {
    Batter,
    Base(Base),
    Home,
    Out,
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Station::Batter => f.write_str("the batter's box"),
            Station::Base(base) => write!(f, "{base}"),
            Station::Home => f.write_str("home"),
            Station::Out => f.write_str("out"),
        }
    }
}

/// The player occupying a base.
///
/// Carries what base running needs from the card (identity, speed) so the
/// bases value is self-contained.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Runner {
    pub id: CardId,
    pub name: String,
    pub speed: Option<u32>,
}

impl Runner {
    pub fn new(id: impl Into<CardId>, name: impl Into<String>, speed: Option<u32>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            speed,
        }
    }

    pub fn from_card(card: &PlayerCard) -> Self {
        Self {
            id: card.id.clone(),
            name: card.name.clone(),
            speed: card.batter_stats().and_then(|stats| stats.speed),
        }
    }

    pub fn speed_or(&self, default: u32) -> u32 {
        self.speed.unwrap_or(default)
    }
}

/// First, second and third, each empty or holding one runner.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Bases {
    slots: [Option<Runner>; 3],
}

impl Bases {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builder used to lay out a base state.
    #[must_use]
    pub fn with(mut self, base: Base, runner: Runner) -> Self {
        self.slots[base.index()] = Some(runner);
        self
    }

    pub fn get(&self, base: Base) -> Option<&Runner> {
        self.slots[base.index()].as_ref()
    }

    pub fn is_occupied(&self, base: Base) -> bool {
        self.slots[base.index()].is_some()
    }

    pub fn set(&mut self, base: Base, runner: Option<Runner>) {
        self.slots[base.index()] = runner;
    }

    pub fn take(&mut self, base: Base) -> Option<Runner> {
        self.slots[base.index()].take()
    }

    pub fn occupied_count(&self) -> u32 {
        self.slots.iter().filter(|slot| slot.is_some()).count() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn is_loaded(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Occupancy as `[first, second, third]`.
    pub fn occupancy(&self) -> [bool; 3] {
        [
            self.is_occupied(Base::First),
            self.is_occupied(Base::Second),
            self.is_occupied(Base::Third),
        ]
    }

    /// Occupied bases with their runners, first base first.
    pub fn runners(&self) -> impl Iterator<Item = (Base, &Runner)> + '_ {
        Base::ALL
            .into_iter()
            .filter_map(|base| self.get(base).map(|runner| (base, runner)))
    }
}

bitflags! {
    /// Runners flagged to attempt a steal on the upcoming result roll.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct StealFlags: u8 {
        const FIRST  = 1 << 0;
        const SECOND = 1 << 1;
        const THIRD  = 1 << 2;
    }
}

impl StealFlags {
    /// Flags for the given base indices (0 = first); out-of-range indices are ignored.
    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        indices
            .into_iter()
            .filter_map(Base::from_index)
            .fold(Self::empty(), |flags, base| flags | base.flag())
    }

    /// Flagged bases, lead runner first.
    pub fn bases(self) -> impl Iterator<Item = Base> {
        Base::LEAD_FIRST
            .into_iter()
            .filter(move |base| self.contains(base.flag()))
    }

    /// Drops flags for bases with nobody on them.
    pub fn occupied_in(self, bases: &Bases) -> Self {
        self.bases()
            .filter(|base| bases.is_occupied(*base))
            .fold(Self::empty(), |flags, base| flags | base.flag())
    }
}
