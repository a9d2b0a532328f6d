//! Single-trial resolution
//!
//! One trial: a fresh arrangement, the contestant's pick, the host's reveal,
//! the stick-or-switch decision and the resulting outcome.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::door::{Arrangement, Door, Slot};
use crate::error::MontyError;
use crate::random::SeededRng;

/// Stick-or-switch policy applied after the reveal
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    Switch,
    Stay,
}

impl Strategy {
    pub fn from_switch(switch: bool) -> Self {
        if switch {
            Strategy::Switch
        } else {
            Strategy::Stay
        }
    }

    pub fn switches(self) -> bool {
        self == Strategy::Switch
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
}

impl Outcome {
    pub fn is_win(self) -> bool {
        self == Outcome::Win
    }
}

/// Complete record of one trial
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trial {
    pub arrangement: Arrangement,
    pub initial_choice: Door,
    pub revealed_door: Door,
    pub strategy: Strategy,
    pub final_choice: Door,
    pub outcome: Outcome,
}

/// The host opens a decoy door the contestant did not pick.
///
/// With the prize behind `pick` there are two candidates and the host picks
/// uniformly; otherwise the single remaining decoy is forced and no
/// randomness is drawn.
pub fn host_reveal(arrangement: &Arrangement, pick: Door, rng: &mut SeededRng) -> Door {
    let mut candidates = [pick; 2];
    let mut count = 0;
    for door in Door::ALL {
        if door != pick && arrangement.slot(door) == Slot::Decoy {
            candidates[count] = door;
            count += 1;
        }
    }

    if count > 1 {
        candidates[rng.next_range(count as u32) as usize]
    } else {
        candidates[0]
    }
}

/// Door the contestant ends up with
pub fn final_choice(pick: Door, revealed: Door, strategy: Strategy) -> Door {
    match strategy {
        Strategy::Switch => pick.other_than(revealed),
        Strategy::Stay => pick,
    }
}

/// Settle a trial whose reveal is already known
pub fn settle(arrangement: Arrangement, pick: Door, revealed: Door, strategy: Strategy) -> Trial {
    let final_choice = final_choice(pick, revealed, strategy);
    let outcome = if arrangement.is_prize(final_choice) {
        Outcome::Win
    } else {
        Outcome::Lose
    };

    Trial {
        arrangement,
        initial_choice: pick,
        revealed_door: revealed,
        strategy,
        final_choice,
        outcome,
    }
}

/// Play a trial against a given arrangement
pub fn play_arranged(
    arrangement: Arrangement,
    pick: Door,
    strategy: Strategy,
    rng: &mut SeededRng,
) -> Trial {
    let revealed = host_reveal(&arrangement, pick, rng);
    settle(arrangement, pick, revealed, strategy)
}

/// Play a trial against a freshly shuffled arrangement
pub fn play_trial(pick: Door, strategy: Strategy, rng: &mut SeededRng) -> Trial {
    let arrangement = Arrangement::generate(rng);
    let trial = play_arranged(arrangement, pick, strategy, rng);
    trace!(
        pick = pick.index(),
        revealed = trial.revealed_door.index(),
        prize = arrangement.prize_door().index(),
        outcome = ?trial.outcome,
        "trial resolved"
    );
    trial
}

/// Resolve one game from a raw door index and a switch flag
pub fn resolve(
    initial_choice: usize,
    switch: bool,
    rng: &mut SeededRng,
) -> Result<Outcome, MontyError> {
    let pick = Door::new(initial_choice)?;
    Ok(play_trial(pick, Strategy::from_switch(switch), rng).outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn door(i: usize) -> Door {
        Door::new(i).unwrap()
    }

    fn make_rng() -> SeededRng {
        SeededRng::new(&[42u8; 32], 0)
    }

    #[test]
    fn test_forced_reveal() {
        // [DECOY, DECOY, PRIZE], pick 0: the host must open door 1
        let arrangement = Arrangement::with_prize_at(door(2));
        let mut rng = make_rng();
        for _ in 0..50 {
            assert_eq!(host_reveal(&arrangement, door(0), &mut rng), door(1));
        }
    }

    #[test]
    fn test_forced_reveal_draws_no_randomness() {
        let arrangement = Arrangement::with_prize_at(door(2));
        let mut rng = make_rng();
        let mut untouched = make_rng();
        host_reveal(&arrangement, door(0), &mut rng);
        assert_eq!(rng.next_u64(), untouched.next_u64());
    }

    #[test]
    fn test_switch_wins_when_pick_is_wrong() {
        let arrangement = Arrangement::with_prize_at(door(2));
        let mut rng = make_rng();

        let switched = play_arranged(arrangement, door(0), Strategy::Switch, &mut rng);
        assert_eq!(switched.revealed_door, door(1));
        assert_eq!(switched.final_choice, door(2));
        assert_eq!(switched.outcome, Outcome::Win);

        let stayed = play_arranged(arrangement, door(0), Strategy::Stay, &mut rng);
        assert_eq!(stayed.final_choice, door(0));
        assert_eq!(stayed.outcome, Outcome::Lose);
    }

    #[test]
    fn test_switch_loses_when_pick_is_right() {
        // [PRIZE, DECOY, DECOY], pick 0: host opens 1 or 2
        let arrangement = Arrangement::with_prize_at(door(0));
        let mut rng = make_rng();
        let mut seen = [false; 3];

        for _ in 0..200 {
            let switched = play_arranged(arrangement, door(0), Strategy::Switch, &mut rng);
            assert!(switched.revealed_door == door(1) || switched.revealed_door == door(2));
            seen[switched.revealed_door.index()] = true;
            assert_eq!(switched.outcome, Outcome::Lose);

            let stayed = play_arranged(arrangement, door(0), Strategy::Stay, &mut rng);
            assert_eq!(stayed.outcome, Outcome::Win);
        }

        // both decoys get opened over many draws
        assert!(seen[1] && seen[2]);
    }

    #[test]
    fn test_reveal_invariants() {
        let mut rng = make_rng();
        for i in 0..3000 {
            let pick = door(i % 3);
            let trial = play_trial(pick, Strategy::Stay, &mut rng);
            assert_ne!(trial.revealed_door, trial.initial_choice);
            assert_eq!(trial.arrangement.slot(trial.revealed_door), Slot::Decoy);
        }
    }

    #[test]
    fn test_final_choice_never_revealed() {
        let mut rng = make_rng();
        for i in 0..300 {
            let trial = play_trial(door(i % 3), Strategy::Switch, &mut rng);
            assert_ne!(trial.final_choice, trial.revealed_door);
            assert_ne!(trial.final_choice, trial.initial_choice);
        }
    }

    #[test]
    fn test_resolve_rejects_bad_door() {
        let mut rng = make_rng();
        assert_eq!(resolve(3, true, &mut rng), Err(MontyError::InvalidDoor { index: 3 }));
        assert!(resolve(2, true, &mut rng).is_ok());
    }

    #[test]
    fn test_resolve_is_reproducible() {
        let outcomes = |seed: u8| -> Vec<Outcome> {
            let mut rng = SeededRng::new(&[seed; 32], 0);
            (0..50).map(|i| resolve(i % 3, i % 2 == 0, &mut rng).unwrap()).collect()
        };
        assert_eq!(outcomes(5), outcomes(5));
    }

    #[test]
    fn test_strategy_from_switch() {
        assert_eq!(Strategy::from_switch(true), Strategy::Switch);
        assert_eq!(Strategy::from_switch(false), Strategy::Stay);
        assert!(Strategy::Switch.switches());
        assert!(!Strategy::Stay.switches());
    }
}
