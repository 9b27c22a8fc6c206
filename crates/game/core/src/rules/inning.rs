//! Half-inning completion and lineup rotation.

use crate::card::Side;
use crate::config::RulesConfig;
use crate::state::{Bases, GameState};

/// Closes the half-inning once the batting side has three outs.
///
/// Resets outs, empties the side's bases, restarts the lineup at the top and
/// hands the bat to the other club. Returns the side that finished batting,
/// or `None` when fewer than three outs are on the board.
pub fn close_half_inning(state: &mut GameState) -> Option<Side> {
    if state.outs < RulesConfig::OUTS_PER_HALF {
        return None;
    }
    let ended = state.batting_team;

    state.outs = 0;
    state.bases[ended] = Bases::empty();
    state.current_batter_index = 0;
    state.batting_team = ended.opponent();
    state.inning = state.inning.after_half(ended);

    tracing::debug!(%ended, inning = %state.inning, "half-inning closed");
    Some(ended)
}

/// Next lineup slot, wrapping at the end of the order.
pub const fn next_batter_index(index: usize, lineup_len: usize) -> usize {
    if lineup_len == 0 {
        0
    } else {
        (index + 1) % lineup_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Base, Half, Inning, Runner, Team};

    fn state() -> GameState {
        GameState::new_game(Team::default(), Team::default())
    }

    #[test]
    fn fewer_than_three_outs_changes_nothing() {
        let mut state = state();
        state.outs = 2;
        state.current_batter_index = 4;
        let before = state.clone();
        assert_eq!(close_half_inning(&mut state), None);
        assert_eq!(state, before);
    }

    #[test]
    fn top_half_ends_into_the_bottom() {
        let mut state = state();
        state.outs = 3;
        state.current_batter_index = 5;
        state.bases.away = Bases::empty().with(Base::Second, Runner::new("r", "R", None));

        assert_eq!(close_half_inning(&mut state), Some(Side::Away));
        assert_eq!(state.outs, 0);
        assert!(state.bases.away.is_empty());
        assert_eq!(state.current_batter_index, 0);
        assert_eq!(state.batting_team, Side::Home);
        assert_eq!(state.inning, Inning::new(1, Half::Bottom));
    }

    #[test]
    fn bottom_half_ends_into_the_next_inning() {
        let mut state = state();
        state.outs = 3;
        state.batting_team = Side::Home;
        state.inning = Inning::new(4, Half::Bottom);

        assert_eq!(close_half_inning(&mut state), Some(Side::Home));
        assert_eq!(state.batting_team, Side::Away);
        assert_eq!(state.inning, Inning::new(5, Half::Top));
        assert_eq!(state.inning.as_f64(), 5.0);
    }

    #[test]
    fn lineup_wraps() {
        assert_eq!(next_batter_index(0, 9), 1);
        assert_eq!(next_batter_index(8, 9), 0);
        assert_eq!(next_batter_index(3, 0), 0);
    }
}
