//! Prompt text and validation of typed lines.
//!
//! Every rejection here is a user typing mistake: the caller prints
//! [`Rejection::message`] and asks again. Nothing in this module ever lets an
//! invalid roll through to [`Frame::score`].

use crate::core::{Frame, ScoreError};
use crate::types::{MAX_ROLLS, PIN_COUNT};

/// Shown before reading the player's name.
pub const NAME_PROMPT: &str = "Enter the players name and press enter...    ";

/// Why a typed line was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NotANumber,
    OutOfRange,
    /// A number in range that the frame does not allow (e.g. 6 then 5).
    InvalidScore,
    EmptyName,
}

impl Rejection {
    /// Message printed back to the user for the rejected `line`.
    pub fn message(&self, line: &str) -> String {
        match self {
            Rejection::NotANumber => format!("{line} is not a number. Please enter again...\n"),
            Rejection::OutOfRange => {
                format!("{line} is not between 0 and {PIN_COUNT}. Please enter again...\n")
            }
            Rejection::InvalidScore => {
                format!("{line} is not a valid score. Please enter again...\n")
            }
            Rejection::EmptyName => "Name must not be empty\n".to_string(),
        }
    }
}

/// Prompt for the next roll in `frame`, identifying the player, the 1-based
/// frame number and the 1-based roll number.
pub fn roll_prompt(name: &str, frame: &Frame) -> String {
    let roll = frame.next_slot().map_or(MAX_ROLLS, |slot| slot.number());
    format!(
        "Player: {} Frame: {} Roll: {}\n(Enter number of pins knocked down 0-{} and press enter)....     ",
        name,
        frame.index() + 1,
        roll,
        PIN_COUNT
    )
}

/// Parse a typed pin count and check it against `frame`.
pub fn parse_pins(line: &str, frame: &Frame) -> Result<u8, Rejection> {
    let value: i64 = line.trim().parse().map_err(|_| Rejection::NotANumber)?;
    let pins = u8::try_from(value)
        .ok()
        .filter(|&p| p <= PIN_COUNT)
        .ok_or(Rejection::OutOfRange)?;
    match frame.check_roll(pins) {
        Ok(()) => Ok(pins),
        Err(ScoreError::InvalidPins { .. }) => Err(Rejection::OutOfRange),
        Err(_) => Err(Rejection::InvalidScore),
    }
}

/// Accept a non-empty player name.
pub fn parse_name(line: &str) -> Result<String, Rejection> {
    let name = line.trim();
    if name.is_empty() {
        return Err(Rejection::EmptyName);
    }
    Ok(name.to_string())
}
