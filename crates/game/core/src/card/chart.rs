//! Roll charts: ordered roll-range to outcome tables.

use std::fmt;

/// Inclusive roll range `[low, high]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "(u32, u32)", into = "(u32, u32)")
)]
pub struct RollRange {
    pub low: u32,
    pub high: u32,
}

impl RollRange {
    pub const fn new(low: u32, high: u32) -> Self {
        Self { low, high }
    }

    #[inline]
    pub const fn contains(&self, roll: u32) -> bool {
        self.low <= roll && roll <= self.high
    }

    pub const fn is_inverted(&self) -> bool {
        self.low > self.high
    }
}

impl From<(u32, u32)> for RollRange {
    fn from((low, high): (u32, u32)) -> Self {
        Self { low, high }
    }
}

impl From<RollRange> for (u32, u32) {
    fn from(range: RollRange) -> Self {
        (range.low, range.high)
    }
}

impl fmt::Display for RollRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.low == self.high {
            write!(f, "{}", self.low)
        } else {
            write!(f, "{}-{}", self.low, self.high)
        }
    }
}

/// Play outcome printed on a chart entry.
///
/// `Out` is the generic out; its contact type is read from the entry text or
/// sticker (see [`crate::rules::OutKind::classify`]).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutcomeType {
    Out,
    Strikeout,
    Groundout,
    Flyout,
    Popout,
    Walk,
    Single,
    Double,
    Triple,
    Homerun,
}

/// Cosmetic achievement tag accreted onto a card by certain outcomes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Sticker(pub String);

impl Sticker {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for Sticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single chart row.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ChartEntry {
    pub roll: RollRange,
    pub outcome: OutcomeType,
    pub text: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sticker: Option<Sticker>,
}

impl ChartEntry {
    pub fn new(low: u32, high: u32, outcome: OutcomeType, text: impl Into<String>) -> Self {
        Self {
            roll: RollRange::new(low, high),
            outcome,
            text: text.into(),
            sticker: None,
        }
    }

    #[must_use]
    pub fn with_sticker(mut self, sticker: impl Into<String>) -> Self {
        self.sticker = Some(Sticker::new(sticker));
        self
    }
}

/// Problems a loader-time check can find in a chart.
///
/// The engine tolerates all of these (first match wins, gaps fall back to the
/// default out); they are surfaced so rosters can be fixed upstream.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChartIssue {
    #[error("entry {index} has inverted range {range}")]
    InvertedRange { index: usize, range: RollRange },

    #[error("rolls {range} are not covered by any entry")]
    Gap { range: RollRange },

    #[error("rolls {range} match entry {shadowing} before entry {shadowed}")]
    Overlap {
        range: RollRange,
        shadowing: usize,
        shadowed: usize,
    },
}

/// Ordered roll chart. Lookup is first-match-wins in declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Chart {
    entries: Vec<ChartEntry>,
}

impl Chart {
    pub fn new(entries: Vec<ChartEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ChartEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry whose range contains `roll`.
    pub fn lookup(&self, roll: u32) -> Option<&ChartEntry> {
        self.entries.iter().find(|entry| entry.roll.contains(roll))
    }

    /// Highest roll any entry declares (some charts extend past 20).
    pub fn upper_bound(&self) -> Option<u32> {
        self.entries
            .iter()
            .filter(|entry| !entry.roll.is_inverted())
            .map(|entry| entry.roll.high)
            .max()
    }

    /// Checks that `[low, high]` is covered exactly once.
    ///
    /// Consecutive rolls with the same problem are coalesced into one issue.
    /// Work depends on the number of entries, not the width of the domain.
    pub fn validate(&self, low: u32, high: u32) -> Vec<ChartIssue> {
        let mut issues: Vec<ChartIssue> = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.roll.is_inverted())
            .map(|(index, entry)| ChartIssue::InvertedRange {
                index,
                range: entry.roll,
            })
            .collect();

        if low > high {
            return issues;
        }

        // Split the domain where any entry starts or ends; every roll inside
        // one span matches the same entries.
        let (low, high) = (u64::from(low), u64::from(high));
        let mut cuts = vec![low, high + 1];
        for entry in self.entries.iter().filter(|entry| !entry.roll.is_inverted()) {
            for cut in [u64::from(entry.roll.low), u64::from(entry.roll.high) + 1] {
                if cut > low && cut <= high {
                    cuts.push(cut);
                }
            }
        }
        cuts.sort_unstable();
        cuts.dedup();

        let mut pending: Option<ChartIssue> = None;
        for span in cuts.windows(2) {
            // Both ends lie within `[low, high]`, which came from u32 values.
            let range = RollRange::new(span[0] as u32, (span[1] - 1) as u32);
            let mut matches = self
                .entries
                .iter()
                .enumerate()
                .filter(|(_, entry)| entry.roll.contains(range.low))
                .map(|(index, _)| index);

            let current = match (matches.next(), matches.next()) {
                (None, _) => Some(ChartIssue::Gap { range }),
                (Some(_), None) => None,
                (Some(shadowing), Some(shadowed)) => Some(ChartIssue::Overlap {
                    range,
                    shadowing,
                    shadowed,
                }),
            };

            pending = match (pending, current) {
                (Some(open), Some(next)) => match extend(open, &next) {
                    Ok(extended) => Some(extended),
                    Err(closed) => {
                        issues.push(closed);
                        Some(next)
                    }
                },
                (Some(open), None) => {
                    issues.push(open);
                    None
                }
                (None, next) => next,
            };
        }
        issues.extend(pending);
        issues
    }
}

/// Grows `open` by the adjacent span `next` if it continues the same problem.
fn extend(open: ChartIssue, next: &ChartIssue) -> Result<ChartIssue, ChartIssue> {
    match (open, next) {
        (ChartIssue::Gap { range }, ChartIssue::Gap { range: next })
            if range.high + 1 == next.low =>
        {
            Ok(ChartIssue::Gap {
                range: RollRange::new(range.low, next.high),
            })
        }
        (
            ChartIssue::Overlap {
                range,
                shadowing,
                shadowed,
            },
            ChartIssue::Overlap {
                range: next,
                shadowing: next_shadowing,
                shadowed: next_shadowed,
            },
        ) if range.high + 1 == next.low
            && shadowing == *next_shadowing
            && shadowed == *next_shadowed =>
        {
            Ok(ChartIssue::Overlap {
                range: RollRange::new(range.low, next.high),
                shadowing,
                shadowed,
            })
        }
        (open, _) => Err(open),
    }
}
