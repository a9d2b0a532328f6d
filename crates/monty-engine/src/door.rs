//! Doors and the hidden prize arrangement

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::MontyError;
use crate::random::SeededRng;

/// Number of doors in the classic game
pub const DOOR_COUNT: usize = 3;

/// A validated, 0-based door index
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Door(u8);

impl Door {
    pub const ALL: [Door; DOOR_COUNT] = [Door(0), Door(1), Door(2)];

    pub fn new(index: usize) -> Result<Self, MontyError> {
        if index < DOOR_COUNT {
            Ok(Door(index as u8))
        } else {
            Err(MontyError::InvalidDoor { index })
        }
    }

    /// Uniformly random door
    pub fn random(rng: &mut SeededRng) -> Self {
        Door(rng.next_range(DOOR_COUNT as u32) as u8)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// 1-based number for display
    pub fn label(self) -> u8 {
        self.0 + 1
    }

    /// The one door that is neither `self` nor `other`.
    ///
    /// Indices sum to 3, so the third door is whatever is left over.
    pub fn other_than(self, other: Door) -> Door {
        debug_assert_ne!(self, other);
        Door(3 - self.0 - other.0)
    }
}

impl TryFrom<u8> for Door {
    type Error = MontyError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Door::new(value as usize)
    }
}

impl From<Door> for u8 {
    fn from(door: Door) -> u8 {
        door.0
    }
}

impl fmt::Display for Door {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Door {}", self.label())
    }
}

/// What is behind a door
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    Prize,
    Decoy,
}

/// Hidden assignment of the prize and two decoys to the doors
///
/// Exactly one slot is [`Slot::Prize`]. Every constructor, deserialization
/// included, rejects any other shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[Slot; 3]", into = "[Slot; 3]")]
pub struct Arrangement {
    slots: [Slot; DOOR_COUNT],
}

impl Arrangement {
    /// Arrangement with the prize behind `door`
    pub fn with_prize_at(door: Door) -> Self {
        let mut slots = [Slot::Decoy; DOOR_COUNT];
        slots[door.index()] = Slot::Prize;
        Self { slots }
    }

    /// Arrangement from explicit slots; must hold exactly one prize
    pub fn from_slots(slots: [Slot; DOOR_COUNT]) -> Result<Self, MontyError> {
        let prizes = slots.iter().filter(|s| **s == Slot::Prize).count();
        if prizes != 1 {
            return Err(MontyError::InvalidArrangement { prizes });
        }
        Ok(Self { slots })
    }

    /// Shuffle {Decoy, Decoy, Prize} uniformly (Fisher-Yates)
    pub fn generate(rng: &mut SeededRng) -> Self {
        let mut slots = [Slot::Decoy, Slot::Decoy, Slot::Prize];
        for i in (1..DOOR_COUNT).rev() {
            let j = rng.next_range(i as u32 + 1) as usize;
            slots.swap(i, j);
        }
        Self { slots }
    }

    pub fn slot(&self, door: Door) -> Slot {
        self.slots[door.index()]
    }

    pub fn slots(&self) -> [Slot; DOOR_COUNT] {
        self.slots
    }

    pub fn prize_door(&self) -> Door {
        Door::ALL
            .into_iter()
            .find(|door| self.slot(*door) == Slot::Prize)
            .unwrap_or(Door(0))
    }

    pub fn is_prize(&self, door: Door) -> bool {
        self.slot(door) == Slot::Prize
    }
}

impl TryFrom<[Slot; DOOR_COUNT]> for Arrangement {
    type Error = MontyError;

    fn try_from(slots: [Slot; DOOR_COUNT]) -> Result<Self, Self::Error> {
        Arrangement::from_slots(slots)
    }
}

impl From<Arrangement> for [Slot; DOOR_COUNT] {
    fn from(arrangement: Arrangement) -> Self {
        arrangement.slots
    }
}

/// Draw a fresh arrangement for one trial
pub fn generate_arrangement(rng: &mut SeededRng) -> Arrangement {
    Arrangement::generate(rng)
}
