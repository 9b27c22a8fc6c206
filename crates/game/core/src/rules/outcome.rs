//! Chart lookup and outcome classification.

use crate::card::{Chart, OutcomeType, Sticker};

/// Outcome read off the card in use.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedOutcome {
    pub outcome: OutcomeType,
    pub text: String,
    pub sticker: Option<Sticker>,
}

impl ResolvedOutcome {
    pub const DEFAULT_TEXT: &'static str = "Out";
    pub const DEFAULT_STICKER: &'static str = "GB";

    /// Returned when no chart entry covers the roll.
    pub fn default_out() -> Self {
        Self {
            outcome: OutcomeType::Out,
            text: Self::DEFAULT_TEXT.to_owned(),
            sticker: Some(Sticker::new(Self::DEFAULT_STICKER)),
        }
    }

    /// How the play is resolved on the field.
    pub fn play_kind(&self) -> PlayKind {
        match self.outcome {
            OutcomeType::Walk => PlayKind::Advance(AdvanceKind::Walk),
            OutcomeType::Single => PlayKind::Advance(AdvanceKind::Single),
            OutcomeType::Double => PlayKind::Advance(AdvanceKind::Double),
            OutcomeType::Triple => PlayKind::Advance(AdvanceKind::Triple),
            OutcomeType::Homerun => PlayKind::Advance(AdvanceKind::HomeRun),
            OutcomeType::Strikeout => PlayKind::Out(OutKind::Strikeout),
            OutcomeType::Groundout => PlayKind::Out(OutKind::GroundBall),
            OutcomeType::Flyout => PlayKind::Out(OutKind::FlyOut),
            OutcomeType::Popout => PlayKind::Out(OutKind::PopUp),
            OutcomeType::Out => PlayKind::Out(OutKind::classify(&self.text, self.sticker.as_ref())),
        }
    }
}

/// Looks `roll` up on `chart`, first match wins.
///
/// Never fails: an uncovered roll yields [`ResolvedOutcome::default_out`].
/// Blank stickers are dropped.
pub fn resolve_outcome(roll: u32, chart: &Chart) -> ResolvedOutcome {
    match chart.lookup(roll) {
        Some(entry) => ResolvedOutcome {
            outcome: entry.outcome,
            text: entry.text.clone(),
            sticker: entry.sticker.clone().filter(|sticker| !sticker.is_empty()),
        },
        None => ResolvedOutcome::default_out(),
    }
}

/// Hits and walks, resolved by base running.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum AdvanceKind {
    Walk,
    Single,
    Double,
    Triple,
    HomeRun,
}

/// Outs, resolved by fielding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum OutKind {
    Strikeout,
    GroundBall,
    FlyOut,
    PopUp,
    /// Out with no contact marker; no contest, no movement.
    Plain,
}

impl OutKind {
    /// Reads the contact type of a generic out from its text marker
    /// (`Out (GB)`), falling back to the sticker tag.
    pub fn classify(text: &str, sticker: Option<&Sticker>) -> Self {
        let text = text.to_ascii_uppercase();
        let marked = |marker: &str| text.contains(&format!("({marker})"));

        if marked("SO") || marked("K") {
            Self::Strikeout
        } else if marked("GB") {
            Self::GroundBall
        } else if marked("FB") || marked("FO") {
            Self::FlyOut
        } else if marked("PU") {
            Self::PopUp
        } else {
            match sticker.map(|sticker| sticker.as_str().trim().to_ascii_uppercase()) {
                Some(tag) if tag == "K" || tag == "SO" => Self::Strikeout,
                Some(tag) if tag == "GB" => Self::GroundBall,
                Some(tag) if tag == "FB" || tag == "FO" => Self::FlyOut,
                Some(tag) if tag == "PU" => Self::PopUp,
                _ => Self::Plain,
            }
        }
    }
}

/// Resolution path for an outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayKind {
    Advance(AdvanceKind),
    Out(OutKind),
}
