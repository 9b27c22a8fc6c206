use std::fmt;

/// Outs a pitcher has recorded this game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Workload {
    pub outs_recorded: u32,
}

impl Workload {
    pub const fn new(outs_recorded: u32) -> Self {
        Self { outs_recorded }
    }

    /// Returns the workload after `outs` more outs.
    #[must_use]
    pub const fn record_outs(self, outs: u32) -> Self {
        Self {
            outs_recorded: self.outs_recorded + outs,
        }
    }

    pub const fn innings_pitched(&self) -> InningsPitched {
        InningsPitched {
            whole: self.outs_recorded / 3,
            partial: self.outs_recorded % 3,
        }
    }
}

/// Innings pitched in baseball notation: `6.2` means six innings and two outs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InningsPitched {
    pub whole: u32,
    /// Outs into the current inning (0-2).
    pub partial: u32,
}

impl InningsPitched {
    /// `whole + partial / 10`, the conventional display value.
    pub fn as_f64(&self) -> f64 {
        f64::from(self.whole) + f64::from(self.partial) / 10.0
    }
}

impl fmt::Display for InningsPitched {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.whole, self.partial)
    }
}
