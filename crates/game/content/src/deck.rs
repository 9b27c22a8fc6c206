//! Player card decks and loader-time checks.

use std::collections::HashSet;

use showdown_core::{CardId, ChartIssue, PlayerCard, Role, RulesConfig, Side, Team};

/// A flat pool of cards for both clubs.
///
/// Lineups are the deck's batters for a side in deck order; the side's first
/// pitcher takes the mound.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deck {
    pub cards: Vec<PlayerCard>,
}

/// Problems found when checking a deck before a game.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DeckIssue {
    #[error("card {card}: {issue}")]
    Chart { card: CardId, issue: ChartIssue },

    #[error("card {card} is a {role} but carries no {role} ratings")]
    Stats { card: CardId, role: Role },

    #[error("card id {card} appears more than once")]
    DuplicateId { card: CardId },

    #[error("the {side} team has no batters")]
    EmptyLineup { side: Side },

    #[error("the {side} team has no pitcher")]
    MissingPitcher { side: Side },
}

impl Deck {
    pub fn new(cards: Vec<PlayerCard>) -> Self {
        Self { cards }
    }

    pub fn batters(&self, side: Side) -> impl Iterator<Item = &PlayerCard> {
        self.cards
            .iter()
            .filter(move |card| card.team == side && card.role == Role::Batter)
    }

    pub fn pitcher(&self, side: Side) -> Option<&PlayerCard> {
        self.cards
            .iter()
            .find(|card| card.team == side && card.role == Role::Pitcher)
    }

    /// Cards `side` brings to a new game.
    pub fn team(&self, side: Side) -> Team {
        Team::new(
            self.batters(side).cloned().collect(),
            self.pitcher(side).cloned(),
        )
    }

    /// Checks charts, ratings and lineups.
    ///
    /// Charts are checked over `[1, die_sides]`, extended to the chart's own
    /// upper bound when it declares higher rolls.
    pub fn validate(&self, rules: &RulesConfig) -> Vec<DeckIssue> {
        let mut issues = Vec::new();
        let mut seen = HashSet::new();

        for card in &self.cards {
            if !seen.insert(&card.id) {
                issues.push(DeckIssue::DuplicateId {
                    card: card.id.clone(),
                });
            }

            let rated = match card.role {
                Role::Batter => card.batter_stats().is_some(),
                Role::Pitcher => card.pitcher_stats().is_some(),
            };
            if !rated {
                issues.push(DeckIssue::Stats {
                    card: card.id.clone(),
                    role: card.role,
                });
            }

            let high = card
                .chart
                .upper_bound()
                .map_or(rules.die_sides, |bound| bound.max(rules.die_sides));
            issues.extend(
                card.chart
                    .validate(1, high)
                    .into_iter()
                    .map(|issue| DeckIssue::Chart {
                        card: card.id.clone(),
                        issue,
                    }),
            );
        }

        for side in [Side::Away, Side::Home] {
            if self.batters(side).next().is_none() {
                issues.push(DeckIssue::EmptyLineup { side });
            }
            if self.pitcher(side).is_none() {
                issues.push(DeckIssue::MissingPitcher { side });
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showdown_core::{BatterStats, Chart, ChartEntry, OutcomeType, PitcherStats, RollRange};

    fn full_chart() -> Chart {
        Chart::new(vec![
            ChartEntry::new(1, 10, OutcomeType::Out, "Out (GB)"),
            ChartEntry::new(11, 20, OutcomeType::Single, "Single"),
        ])
    }

    fn deck() -> Deck {
        Deck::new(vec![
            PlayerCard::batter("h1", "H1", Side::Home, BatterStats::new(10), full_chart()),
            PlayerCard::pitcher("hp", "HP", Side::Home, PitcherStats::new(3, 6), full_chart()),
            PlayerCard::batter("a1", "A1", Side::Away, BatterStats::new(10), full_chart()),
            PlayerCard::batter("a2", "A2", Side::Away, BatterStats::new(12), full_chart()),
            PlayerCard::pitcher("ap", "AP", Side::Away, PitcherStats::new(4, 7), full_chart()),
        ])
    }

    #[test]
    fn teams_split_by_side_and_role() {
        let deck = deck();
        let away = deck.team(Side::Away);
        let ids: Vec<_> = away.batters.iter().map(|card| card.id.as_str()).collect();
        assert_eq!(ids, vec!["a1", "a2"]);
        assert_eq!(away.pitcher.map(|card| card.id), Some(CardId::new("ap")));
        assert!(deck.validate(&RulesConfig::default()).is_empty());
    }

    #[test]
    fn validate_reports_every_problem() {
        let mut deck = deck();
        deck.cards.retain(|card| card.id.as_str() != "hp");
        deck.cards.push(PlayerCard::batter(
            "a1",
            "Dup",
            Side::Away,
            BatterStats::new(9),
            Chart::new(vec![ChartEntry::new(1, 15, OutcomeType::Walk, "Walk")]),
        ));

        let issues = deck.validate(&RulesConfig::default());
        assert!(issues.contains(&DeckIssue::MissingPitcher { side: Side::Home }));
        assert!(issues.contains(&DeckIssue::DuplicateId {
            card: CardId::new("a1")
        }));
        assert!(issues.contains(&DeckIssue::Chart {
            card: CardId::new("a1"),
            issue: ChartIssue::Gap {
                range: RollRange::new(16, 20)
            },
        }));
    }

    #[test]
    fn runaway_roll_ranges_are_reported_without_walking_them() {
        let mut deck = deck();
        deck.cards[2].chart = Chart::new(vec![
            ChartEntry::new(1, 10, OutcomeType::Out, "Out (GB)"),
            ChartEntry::new(12, 4_000_000_000, OutcomeType::Single, "Single"),
        ]);

        let issues = deck.validate(&RulesConfig::default());
        assert_eq!(
            issues,
            vec![DeckIssue::Chart {
                card: CardId::new("a1"),
                issue: ChartIssue::Gap {
                    range: RollRange::new(11, 11)
                },
            }]
        );
    }

    #[test]
    fn extended_charts_are_checked_to_their_own_bound() {
        let chart = Chart::new(vec![
            ChartEntry::new(1, 17, OutcomeType::Strikeout, "Out (SO)"),
            ChartEntry::new(18, 23, OutcomeType::Single, "Single"),
            ChartEntry::new(25, 30, OutcomeType::Homerun, "Home Run"),
        ]);
        let mut deck = deck();
        deck.cards[1].chart = chart;

        let issues = deck.validate(&RulesConfig::default());
        assert_eq!(
            issues,
            vec![DeckIssue::Chart {
                card: CardId::new("hp"),
                issue: ChartIssue::Gap {
                    range: RollRange::new(24, 24)
                },
            }]
        );
    }
}
