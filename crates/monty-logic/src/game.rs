//! Game model and random game generation

use serde::{Deserialize, Serialize};
use crate::error::{check_count, SimError};
use crate::random::RandomSource;

/// Number of doors in every game.
pub const DOOR_COUNT: usize = 3;

/// The player's initial pick. Always the first door.
pub const INITIAL_PICK: usize = 0;

/// Three doors, exactly one of which hides the prize
///
/// The invariant is enforced at construction, so every `Game` value is
/// well-formed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[bool; 3]", into = "[bool; 3]")]
pub struct Game([bool; DOOR_COUNT]);

/// One generated set of independent games
pub type Batch = Vec<Game>;

impl Game {
    /// Create a game with the prize behind `door`
    pub fn with_prize(door: usize) -> Result<Self, SimError> {
        if door >= DOOR_COUNT {
            return Err(SimError::invalid("prize door", door));
        }
        let mut doors = [false; DOOR_COUNT];
        doors[door] = true;
        Ok(Self(doors))
    }

    /// Validate raw door contents
    pub fn try_from_doors(doors: [bool; DOOR_COUNT]) -> Result<Self, SimError> {
        if doors.iter().filter(|d| **d).count() != 1 {
            return Err(SimError::MalformedGame { doors });
        }
        Ok(Self(doors))
    }

    pub fn doors(&self) -> [bool; DOOR_COUNT] {
        self.0
    }

    pub fn is_prize(&self, door: usize) -> bool {
        self.0.get(door).copied().unwrap_or(false)
    }

    pub fn prize_door(&self) -> usize {
        self.0.iter().position(|d| *d).unwrap_or(INITIAL_PICK)
    }
}

impl TryFrom<[bool; DOOR_COUNT]> for Game {
    type Error = SimError;

    fn try_from(doors: [bool; DOOR_COUNT]) -> Result<Self, Self::Error> {
        Self::try_from_doors(doors)
    }
}

impl From<Game> for [bool; DOOR_COUNT] {
    fn from(game: Game) -> Self {
        game.0
    }
}

/// Generate one game with a uniformly random prize door
pub fn generate_game<R: RandomSource>(rng: &mut R) -> Game {
    let mut doors = [false; DOOR_COUNT];
    doors[rng.next_range(DOOR_COUNT as u32) as usize] = true;
    Game(doors)
}

/// Generate `n` independent games
///
/// Negative sizes are rejected before any randomness is consumed.
pub fn generate_batch<R: RandomSource>(n: i64, rng: &mut R) -> Result<Batch, SimError> {
    let n = check_count("batch size", n)?;
    Ok((0..n).map(|_| generate_game(rng)).collect())
}

/// Host opens a goat door among the two the player did not pick
///
/// Door 1 is examined first, so when both are goats (prize behind the
/// initial pick) door 1 is opened.
pub fn reveal_goat(game: &Game) -> usize {
    debug_assert_eq!(game.0.iter().filter(|d| **d).count(), 1, "malformed game {:?}", game);
    if game.is_prize(1) { 2 } else { 1 }
}

/// The only door left that is neither the initial pick nor opened
pub fn switch_target(goat: usize) -> usize {
    if goat == 2 { 1 } else { 2 }
}
