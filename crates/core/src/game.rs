//! Game module - the ten frames of one game and the cursor over them
//!
//! The game owns its frames as a fixed array. Frame totals that need lookahead
//! are resolved here by handing each frame the slice of frames after it.

use crate::error::ScoreError;
use crate::frame::Frame;
use crate::types::{FRAME_COUNT, TENTH_FRAME};

/// Complete game state for one player.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Game {
    /// Frame currently open for rolling; `None` before the first frame.
    cursor: Option<usize>,
    frames: [Frame; FRAME_COUNT],
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self {
            cursor: None,
            frames: std::array::from_fn(Frame::new),
        }
    }

    pub fn frames(&self) -> &[Frame; FRAME_COUNT] {
        &self.frames
    }

    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// Index of the frame open for rolling, if the game has started.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn started(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn current_frame(&self) -> Option<&Frame> {
        self.cursor.map(|i| &self.frames[i])
    }

    /// Advance to the next frame and return it.
    ///
    /// Fails with [`ScoreError::GameOver`] once the tenth frame is closed, and
    /// with [`ScoreError::FrameInProgress`] while the current frame can still
    /// take a roll.
    pub fn next_frame(&mut self) -> Result<&Frame, ScoreError> {
        if self.is_game_over() {
            return Err(ScoreError::GameOver);
        }
        let next = match self.cursor {
            None => 0,
            Some(i) if self.frames[i].can_roll() => {
                return Err(ScoreError::FrameInProgress { frame: i });
            }
            Some(i) => i + 1,
        };
        self.cursor = Some(next);
        Ok(&self.frames[next])
    }

    /// Record a roll in the current frame.
    pub fn roll(&mut self, pins: u8) -> Result<(), ScoreError> {
        match self.cursor {
            Some(i) => self.frames[i].score(pins),
            None => Err(ScoreError::FrameClosed { frame: 0 }),
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.cursor == Some(TENTH_FRAME) && !self.frames[TENTH_FRAME].can_roll()
    }

    /// Total for frame `index`, or `None` if it cannot be determined yet.
    pub fn frame_total(&self, index: usize) -> Option<u16> {
        let frame = self.frames.get(index)?;
        frame.total(&self.frames[index + 1..])
    }

    pub fn can_total(&self, index: usize) -> bool {
        self.frame_total(index).is_some()
    }

    /// Sum of every determinable frame total.
    pub fn game_total(&self) -> u16 {
        (0..FRAME_COUNT).filter_map(|i| self.frame_total(i)).sum()
    }
}
