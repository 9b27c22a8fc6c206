//! Pitcher workload and the optional fatigue rule.

use crate::card::{PitcherStats, Side};
use crate::config::RulesConfig;
use crate::state::{GameState, Workload};

/// Control used for the advantage roll.
///
/// With fatigue enabled the card's control drops one point per full inning
/// pitched beyond the rated innings, never below
/// [`RulesConfig::MIN_FATIGUED_CONTROL`].
pub fn effective_control(stats: &PitcherStats, workload: Workload, rules: &RulesConfig) -> u32 {
    if !rules.fatigue {
        return stats.control;
    }
    let penalty = workload
        .innings_pitched()
        .whole
        .saturating_sub(stats.rated_ip);
    if penalty == 0 || stats.control <= RulesConfig::MIN_FATIGUED_CONTROL {
        return stats.control;
    }
    stats
        .control
        .saturating_sub(penalty)
        .max(RulesConfig::MIN_FATIGUED_CONTROL)
}

/// Credits `outs` to `side`'s pitcher. A side without a pitcher is skipped.
pub fn charge_outs(state: &mut GameState, side: Side, outs: u8) {
    if outs == 0 {
        return;
    }
    if let Some(pitcher) = state.pitcher_mut(side) {
        pitcher.workload = pitcher.workload.record_outs(u32::from(outs));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Chart, PlayerCard};
    use crate::state::Team;

    #[test]
    fn fatigue_is_off_by_default() {
        let stats = PitcherStats::new(5, 6);
        let tired = Workload::new(30);
        assert_eq!(effective_control(&stats, tired, &RulesConfig::default()), 5);
    }

    #[test]
    fn fatigue_costs_a_point_per_extra_inning() {
        let rules = RulesConfig::default().with_fatigue(true);
        let stats = PitcherStats::new(5, 6);
        assert_eq!(effective_control(&stats, Workload::new(18), &rules), 5);
        assert_eq!(effective_control(&stats, Workload::new(20), &rules), 5);
        assert_eq!(effective_control(&stats, Workload::new(21), &rules), 4);
        assert_eq!(effective_control(&stats, Workload::new(27), &rules), 2);
        assert_eq!(effective_control(&stats, Workload::new(60), &rules), 1);

        let wild = PitcherStats::new(0, 1);
        assert_eq!(effective_control(&wild, Workload::new(60), &rules), 0);
    }

    #[test]
    fn outs_accrue_to_the_named_side() {
        let pitcher = PlayerCard::pitcher(
            "p",
            "Pitcher",
            Side::Home,
            PitcherStats::new(4, 6),
            Chart::default(),
        );
        let mut state = GameState::new_game(Team::new(vec![], Some(pitcher)), Team::default());
        charge_outs(&mut state, Side::Home, 2);
        charge_outs(&mut state, Side::Home, 2);
        charge_outs(&mut state, Side::Away, 1);

        let workload = state.pitcher(Side::Home).map(|p| p.workload);
        assert_eq!(workload, Some(Workload::new(4)));
        assert_eq!(workload.map(|w| w.innings_pitched().to_string()), Some("1.1".to_owned()));
    }
}
