//! Interactive step-by-step game
//!
//! A [`Session`] walks one player through a trial at a time:
//!
//! ```text
//! AwaitingChoice --choose_door--> AwaitingRevealAck --acknowledge_reveal-->
//! AwaitingSwitchDecision --decide_switch--> ShowingResult --play_again--> AwaitingChoice
//! ```
//!
//! Every transition returns a [`SessionView`] with whatever the caller may
//! render at that point. The arrangement stays hidden until the result step.
//! A rejected transition leaves the session untouched.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::door::{Arrangement, Door};
use crate::error::MontyError;
use crate::history::{History, HistorySnapshot};
use crate::random::{Seed, SeededRng};
use crate::trial::{host_reveal, settle, Outcome, Strategy, Trial};

/// Observable step of a session
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    AwaitingChoice,
    AwaitingRevealAck,
    AwaitingSwitchDecision,
    ShowingResult,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Step::AwaitingChoice => "awaiting a door choice",
            Step::AwaitingRevealAck => "awaiting reveal acknowledgement",
            Step::AwaitingSwitchDecision => "awaiting the switch decision",
            Step::ShowingResult => "showing the result",
        };
        f.write_str(text)
    }
}

/// Step plus the trial data known so far
#[derive(Clone, Copy, Debug)]
enum Phase {
    AwaitingChoice,
    AwaitingRevealAck { pick: Door, revealed: Door },
    AwaitingSwitchDecision { pick: Door, revealed: Door },
    ShowingResult(Trial),
}

impl Phase {
    fn step(&self) -> Step {
        match self {
            Phase::AwaitingChoice => Step::AwaitingChoice,
            Phase::AwaitingRevealAck { .. } => Step::AwaitingRevealAck,
            Phase::AwaitingSwitchDecision { .. } => Step::AwaitingSwitchDecision,
            Phase::ShowingResult(_) => Step::ShowingResult,
        }
    }
}

/// Snapshot of a session for a presentation layer
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionView {
    pub step: Step,
    pub initial_choice: Option<Door>,
    pub revealed_door: Option<Door>,
    pub strategy: Option<Strategy>,
    pub final_choice: Option<Door>,
    pub outcome: Option<Outcome>,
    /// Only disclosed once the result is showing
    pub prize_door: Option<Door>,
    pub history: HistorySnapshot,
}

/// One player's game in progress plus their running history
#[derive(Clone, Debug)]
pub struct Session {
    rng: SeededRng,
    arrangement: Arrangement,
    phase: Phase,
    history: History,
}

impl Session {
    /// Start a session with a fresh arrangement drawn from `seed`
    pub fn new(seed: &Seed) -> Self {
        Self::from_rng(SeededRng::new(seed, 0))
    }

    pub fn from_rng(mut rng: SeededRng) -> Self {
        let arrangement = Arrangement::generate(&mut rng);
        Self::with_arrangement(rng, arrangement)
    }

    /// Start with a known first arrangement; later rounds are drawn from `rng`
    pub fn with_arrangement(rng: SeededRng, arrangement: Arrangement) -> Self {
        Self {
            rng,
            arrangement,
            phase: Phase::AwaitingChoice,
            history: History::new(),
        }
    }

    pub fn step(&self) -> Step {
        self.phase.step()
    }

    pub fn history(&self) -> HistorySnapshot {
        self.history.snapshot()
    }

    pub fn reset_history(&mut self) -> SessionView {
        self.history.reset();
        debug!("history reset");
        self.view()
    }

    pub fn view(&self) -> SessionView {
        let mut view = SessionView {
            step: self.step(),
            initial_choice: None,
            revealed_door: None,
            strategy: None,
            final_choice: None,
            outcome: None,
            prize_door: None,
            history: self.history.snapshot(),
        };

        match self.phase {
            Phase::AwaitingChoice => {}
            Phase::AwaitingRevealAck { pick, revealed }
            | Phase::AwaitingSwitchDecision { pick, revealed } => {
                view.initial_choice = Some(pick);
                view.revealed_door = Some(revealed);
            }
            Phase::ShowingResult(trial) => {
                view.initial_choice = Some(trial.initial_choice);
                view.revealed_door = Some(trial.revealed_door);
                view.strategy = Some(trial.strategy);
                view.final_choice = Some(trial.final_choice);
                view.outcome = Some(trial.outcome);
                view.prize_door = Some(trial.arrangement.prize_door());
            }
        }

        view
    }

    fn wrong_step(&self, action: &'static str) -> MontyError {
        MontyError::WrongStep { action, step: self.step() }
    }

    /// Record the contestant's pick; the host's reveal is fixed right away
    pub fn choose_door(&mut self, index: usize) -> Result<SessionView, MontyError> {
        if !matches!(self.phase, Phase::AwaitingChoice) {
            return Err(self.wrong_step("choose a door"));
        }
        let pick = Door::new(index)?;
        let revealed = host_reveal(&self.arrangement, pick, &mut self.rng);

        self.phase = Phase::AwaitingRevealAck { pick, revealed };
        debug!(pick = pick.index(), revealed = revealed.index(), "door chosen");
        Ok(self.view())
    }

    pub fn acknowledge_reveal(&mut self) -> Result<SessionView, MontyError> {
        let Phase::AwaitingRevealAck { pick, revealed } = self.phase else {
            return Err(self.wrong_step("acknowledge the reveal"));
        };

        self.phase = Phase::AwaitingSwitchDecision { pick, revealed };
        debug!("reveal acknowledged");
        Ok(self.view())
    }

    /// Settle the trial and fold its outcome into the history
    pub fn decide_switch(&mut self, switch: bool) -> Result<SessionView, MontyError> {
        let Phase::AwaitingSwitchDecision { pick, revealed } = self.phase else {
            return Err(self.wrong_step("decide whether to switch"));
        };

        let strategy = Strategy::from_switch(switch);
        let trial = settle(self.arrangement, pick, revealed, strategy);
        self.history.record(strategy, trial.outcome);

        self.phase = Phase::ShowingResult(trial);
        debug!(?strategy, outcome = ?trial.outcome, "switch decided");
        Ok(self.view())
    }

    /// Discard the finished trial and shuffle a new arrangement
    pub fn play_again(&mut self) -> Result<SessionView, MontyError> {
        if !matches!(self.phase, Phase::ShowingResult(_)) {
            return Err(self.wrong_step("play again"));
        }

        self.arrangement = Arrangement::generate(&mut self.rng);
        self.phase = Phase::AwaitingChoice;
        debug!("new round");
        Ok(self.view())
    }
}
