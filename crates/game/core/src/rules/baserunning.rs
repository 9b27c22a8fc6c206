//! Base-state transitions for walks and hits.

use crate::state::{Base, Bases, Runner, RunnerMovement, Station};

use super::AdvanceKind;

/// Bases after a play, with the runs it drove in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BaseAdvance {
    pub bases: Bases,
    pub runs: u32,
    pub movements: Vec<RunnerMovement>,
}

impl BaseAdvance {
    fn place(&mut self, runner: Runner, from: Station, to: Station) {
        if from != to {
            self.movements
                .push(RunnerMovement::new(runner.id.clone(), from, to));
        }
        match to {
            Station::Base(base) => self.bases.set(base, Some(runner)),
            Station::Home => self.runs += 1,
            Station::Batter | Station::Out => {}
        }
    }
}

/// Moves every runner and the batter for a walk or hit.
///
/// Destinations are decided from the occupancy before the play, so the result
/// does not depend on processing order. The input is left untouched.
pub fn advance(bases: &Bases, kind: AdvanceKind, batter: Runner) -> BaseAdvance {
    let occupancy = bases.occupancy();
    let mut result = BaseAdvance::default();

    for base in Base::LEAD_FIRST {
        if let Some(runner) = bases.get(base) {
            let to = destination(base, kind, occupancy);
            result.place(runner.clone(), Station::Base(base), to);
        }
    }
    result.place(batter, Station::Batter, batter_destination(kind));
    result
}

fn destination(base: Base, kind: AdvanceKind, [first, second, _]: [bool; 3]) -> Station {
    match (kind, base) {
        // Walks only move runners that are forced.
        (AdvanceKind::Walk, Base::First) => Station::Base(Base::Second),
        (AdvanceKind::Walk, Base::Second) if first => Station::Base(Base::Third),
        (AdvanceKind::Walk, Base::Third) if first && second => Station::Home,
        (AdvanceKind::Walk, base) => Station::Base(base),

        (AdvanceKind::Single, Base::First) => Station::Base(Base::Second),
        (AdvanceKind::Double, Base::First) => Station::Base(Base::Third),
        (AdvanceKind::Single | AdvanceKind::Double, _) => Station::Home,

        (AdvanceKind::Triple | AdvanceKind::HomeRun, _) => Station::Home,
    }
}

fn batter_destination(kind: AdvanceKind) -> Station {
    match kind {
        AdvanceKind::Walk | AdvanceKind::Single => Station::Base(Base::First),
        AdvanceKind::Double => Station::Base(Base::Second),
        AdvanceKind::Triple => Station::Base(Base::Third),
        AdvanceKind::HomeRun => Station::Home,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn runner(id: &str) -> Runner {
        Runner::new(id, id, None)
    }

    fn ids(bases: &Bases) -> [Option<&str>; 3] {
        Base::ALL.map(|base| bases.get(base).map(|r| r.id.as_str()))
    }

    fn bases_from(occupancy: [bool; 3]) -> Bases {
        Base::ALL
            .into_iter()
            .zip(occupancy)
            .zip(["r1", "r2", "r3"])
            .filter(|((_, occupied), _)| *occupied)
            .fold(Bases::empty(), |bases, ((base, _), id)| {
                bases.with(base, runner(id))
            })
    }

    #[test]
    fn single_with_bases_empty() {
        let result = advance(&Bases::empty(), AdvanceKind::Single, runner("b"));
        assert_eq!(ids(&result.bases), [Some("b"), None, None]);
        assert_eq!(result.runs, 0);
        assert_eq!(
            result.movements,
            vec![RunnerMovement::new(
                "b".into(),
                Station::Batter,
                Station::Base(Base::First)
            )]
        );
    }

    #[test]
    fn single_scores_both_lead_runners() {
        let bases = bases_from([true, true, true]);
        let result = advance(&bases, AdvanceKind::Single, runner("b"));
        assert_eq!(ids(&result.bases), [Some("b"), Some("r1"), None]);
        assert_eq!(result.runs, 2);
    }

    #[test]
    fn walk_forces_only_trailing_runners() {
        // Runners on second and third stay put when first is open.
        let bases = bases_from([false, true, true]);
        let result = advance(&bases, AdvanceKind::Walk, runner("b"));
        assert_eq!(ids(&result.bases), [Some("b"), Some("r2"), Some("r3")]);
        assert_eq!(result.runs, 0);
        assert_eq!(result.movements.len(), 1);

        // First and third: the runner on third is not forced.
        let bases = bases_from([true, false, true]);
        let result = advance(&bases, AdvanceKind::Walk, runner("b"));
        assert_eq!(ids(&result.bases), [Some("b"), Some("r1"), Some("r3")]);
        assert_eq!(result.runs, 0);
    }

    #[test]
    fn walk_with_bases_loaded_forces_in_a_run() {
        let bases = bases_from([true, true, true]);
        let result = advance(&bases, AdvanceKind::Walk, runner("b"));
        assert_eq!(ids(&result.bases), [Some("b"), Some("r1"), Some("r2")]);
        assert_eq!(result.runs, 1);
        assert!(result.movements.iter().any(|m| m.runner.as_str() == "r3" && m.scored()));
    }

    #[test]
    fn double_and_triple() {
        let bases = bases_from([true, true, false]);
        let double = advance(&bases, AdvanceKind::Double, runner("b"));
        assert_eq!(ids(&double.bases), [None, Some("b"), Some("r1")]);
        assert_eq!(double.runs, 1);

        let triple = advance(&bases, AdvanceKind::Triple, runner("b"));
        assert_eq!(ids(&triple.bases), [None, None, Some("b")]);
        assert_eq!(triple.runs, 2);
    }

    #[test]
    fn input_bases_are_untouched() {
        let bases = bases_from([true, false, true]);
        let before = bases.clone();
        let _ = advance(&bases, AdvanceKind::HomeRun, runner("b"));
        assert_eq!(bases, before);
    }

    proptest! {
        #[test]
        fn homerun_clears_and_scores_everyone(occupancy in any::<[bool; 3]>()) {
            let bases = bases_from(occupancy);
            let result = advance(&bases, AdvanceKind::HomeRun, runner("b"));
            prop_assert!(result.bases.is_empty());
            prop_assert_eq!(result.runs, bases.occupied_count() + 1);
        }

        #[test]
        fn single_moves_first_to_second_and_scores_the_rest(occupancy in any::<[bool; 3]>()) {
            let bases = bases_from(occupancy);
            let result = advance(&bases, AdvanceKind::Single, runner("b"));
            let [first, second, third] = occupancy;

            prop_assert_eq!(result.bases.get(Base::First).map(|r| r.id.as_str()), Some("b"));
            prop_assert_eq!(
                result.bases.get(Base::Second).map(|r| r.id.as_str()),
                first.then_some("r1")
            );
            prop_assert!(!result.bases.is_occupied(Base::Third));
            prop_assert_eq!(result.runs, u32::from(second) + u32::from(third));
        }
    }
}
