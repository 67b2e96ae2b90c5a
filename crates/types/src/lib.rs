//! Core types module - shared rule and layout constants
//!
//! This module defines the fundamental values used throughout the application.
//! Everything here is plain data with no external dependencies, so it can be used
//! from the scoring core, the scoreboard renderer, and the console input layer.
//!
//! # Game Shape
//!
//! Standard ten-pin bowling:
//!
//! - **Frames**: 10 per game (indexed 0-9)
//! - **Pins**: 10 per rack
//! - **Rolls**: at most 2 per frame, 3 in the tenth frame after a strike or spare
//!
//! # Scoreboard Layout
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `NAME_COL_W` | 10 | Width of the player name column |
//! | `SCORE_COL_W` | 6 | Width of every frame and total column |
//!
//! # Examples
//!
//! ```
//! use tenpin_types::{RollSlot, FRAME_COUNT, PIN_COUNT, TENTH_FRAME};
//!
//! assert_eq!(FRAME_COUNT, 10);
//! assert_eq!(PIN_COUNT, 10);
//! assert_eq!(TENTH_FRAME, 9);
//!
//! // The slot a roll lands in follows from how many rolls came before it.
//! assert_eq!(RollSlot::from_count(0), Some(RollSlot::First));
//! assert_eq!(RollSlot::from_count(2), Some(RollSlot::Extra));
//! assert_eq!(RollSlot::from_count(3), None);
//! ```

/// Frames in a game
pub const FRAME_COUNT: usize = 10;

/// Index of the tenth frame, the only one with bonus-roll rules
pub const TENTH_FRAME: usize = FRAME_COUNT - 1;

/// Pins in a full rack
pub const PIN_COUNT: u8 = 10;

/// Maximum rolls recorded in any frame (tenth frame with a bonus roll)
pub const MAX_ROLLS: u8 = 3;

/// Width of the player name column in the scoreboard
pub const NAME_COL_W: usize = 10;

/// Width of each frame/total column in the scoreboard
pub const SCORE_COL_W: usize = 6;

/// Highest possible game total (twelve strikes)
pub const PERFECT_GAME: u16 = 300;

/// Which of a frame's three roll fields a pin count is stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RollSlot {
    First,
    Second,
    /// Bonus roll, tenth frame only.
    Extra,
}

impl RollSlot {
    /// Slot for the next roll given how many rolls are already recorded.
    pub fn from_count(count: u8) -> Option<Self> {
        match count {
            0 => Some(RollSlot::First),
            1 => Some(RollSlot::Second),
            2 => Some(RollSlot::Extra),
            _ => None,
        }
    }

    /// 1-based roll number, as shown in console prompts.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenpin_types::RollSlot;
    ///
    /// assert_eq!(RollSlot::First.number(), 1);
    /// assert_eq!(RollSlot::Extra.number(), 3);
    /// ```
    pub fn number(&self) -> u8 {
        match self {
            RollSlot::First => 1,
            RollSlot::Second => 2,
            RollSlot::Extra => 3,
        }
    }
}
