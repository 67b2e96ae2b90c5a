//! Scoring errors.
//!
//! These indicate a sequencing mistake by the caller (the turn-taking loop),
//! not a user typing mistake. The console layer validates input before it
//! reaches the core, so in a correct program none of these are ever returned.

use thiserror::Error;

/// Broad category of a [`ScoreError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A pin count outside 0-10.
    InvalidArgument,
    /// A roll or frame advance that the current state does not allow.
    InvalidState,
    /// The game has already finished.
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("invalid pin count {pins}: must be between 0 and 10")]
    InvalidPins { pins: u8 },
    #[error("no more rolls allowed in frame {}", .frame + 1)]
    FrameClosed { frame: usize },
    #[error("invalid second roll: {first} + {second} is more than 10 pins")]
    PinsExceedRack { first: u8, second: u8 },
    #[error("frame {} is still open for rolling", .frame + 1)]
    FrameInProgress { frame: usize },
    #[error("game is over")]
    GameOver,
}

impl ScoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScoreError::InvalidPins { .. } => ErrorKind::InvalidArgument,
            ScoreError::FrameClosed { .. }
            | ScoreError::PinsExceedRack { .. }
            | ScoreError::FrameInProgress { .. } => ErrorKind::InvalidState,
            ScoreError::GameOver => ErrorKind::GameOver,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            ScoreError::InvalidPins { pins: 11 }.kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            ScoreError::FrameClosed { frame: 0 }.kind(),
            ErrorKind::InvalidState
        );
        assert_eq!(
            ScoreError::PinsExceedRack { first: 6, second: 5 }.kind(),
            ErrorKind::InvalidState
        );
        assert_eq!(
            ScoreError::FrameInProgress { frame: 3 }.kind(),
            ErrorKind::InvalidState
        );
        assert_eq!(ScoreError::GameOver.kind(), ErrorKind::GameOver);
    }

    #[test]
    fn test_messages_use_one_based_frames() {
        assert_eq!(
            ScoreError::FrameClosed { frame: 0 }.to_string(),
            "no more rolls allowed in frame 1"
        );
        assert_eq!(
            ScoreError::FrameInProgress { frame: 9 }.to_string(),
            "frame 10 is still open for rolling"
        );
    }
}
