//! Per-strategy win/loss counters

use serde::{Deserialize, Serialize};

use crate::trial::{Outcome, Strategy};

/// Running win/loss history for one player
///
/// Counters only grow; [`History::reset`] is the one way back to zero.
#[derive(Clone, Debug, Default)]
pub struct History {
    counts: HistorySnapshot,
}

/// Immutable copy of the counters at one point in time
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySnapshot {
    pub switch_wins: u64,
    pub switch_losses: u64,
    pub no_switch_wins: u64,
    pub no_switch_losses: u64,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, strategy: Strategy, outcome: Outcome) {
        let counter = match (strategy, outcome) {
            (Strategy::Switch, Outcome::Win) => &mut self.counts.switch_wins,
            (Strategy::Switch, Outcome::Lose) => &mut self.counts.switch_losses,
            (Strategy::Stay, Outcome::Win) => &mut self.counts.no_switch_wins,
            (Strategy::Stay, Outcome::Lose) => &mut self.counts.no_switch_losses,
        };
        *counter = counter.saturating_add(1);
    }

    pub fn reset(&mut self) {
        self.counts = HistorySnapshot::default();
    }

    pub fn snapshot(&self) -> HistorySnapshot {
        self.counts
    }
}

impl HistorySnapshot {
    pub fn total(&self) -> u64 {
        self.switch_games() + self.stay_games()
    }

    pub fn switch_games(&self) -> u64 {
        self.switch_wins + self.switch_losses
    }

    pub fn stay_games(&self) -> u64 {
        self.no_switch_wins + self.no_switch_losses
    }

    /// Switch win percentage, `None` before any switch game
    pub fn switch_win_rate(&self) -> Option<f64> {
        percentage(self.switch_wins, self.switch_games())
    }

    /// Stay win percentage, `None` before any stay game
    pub fn stay_win_rate(&self) -> Option<f64> {
        percentage(self.no_switch_wins, self.stay_games())
    }
}

fn percentage(wins: u64, games: u64) -> Option<f64> {
    if games == 0 {
        None
    } else {
        Some(100.0 * wins as f64 / games as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_one_bucket_each() {
        let mut history = History::new();
        history.record(Strategy::Switch, Outcome::Win);
        history.record(Strategy::Stay, Outcome::Lose);

        assert_eq!(
            history.snapshot(),
            HistorySnapshot {
                switch_wins: 1,
                switch_losses: 0,
                no_switch_wins: 0,
                no_switch_losses: 1,
            }
        );
    }

    #[test]
    fn test_all_buckets() {
        let mut history = History::new();
        history.record(Strategy::Switch, Outcome::Lose);
        history.record(Strategy::Stay, Outcome::Win);
        history.record(Strategy::Stay, Outcome::Win);

        let snap = history.snapshot();
        assert_eq!(snap.switch_losses, 1);
        assert_eq!(snap.no_switch_wins, 2);
        assert_eq!(snap.total(), 3);
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut history = History::new();
        let before = history.snapshot();
        history.record(Strategy::Switch, Outcome::Win);
        assert_eq!(before.switch_wins, 0);
        assert_eq!(history.snapshot().switch_wins, 1);
    }

    #[test]
    fn test_reset() {
        let mut history = History::new();
        history.record(Strategy::Switch, Outcome::Win);
        history.record(Strategy::Stay, Outcome::Lose);
        history.reset();
        assert_eq!(history.snapshot(), HistorySnapshot::default());
    }

    #[test]
    fn test_rates_on_demand() {
        let mut history = History::new();
        assert_eq!(history.snapshot().switch_win_rate(), None);

        history.record(Strategy::Switch, Outcome::Win);
        history.record(Strategy::Switch, Outcome::Win);
        history.record(Strategy::Switch, Outcome::Win);
        history.record(Strategy::Switch, Outcome::Lose);

        let snap = history.snapshot();
        assert_eq!(snap.switch_win_rate(), Some(75.0));
        assert_eq!(snap.stay_win_rate(), None);
    }
}
