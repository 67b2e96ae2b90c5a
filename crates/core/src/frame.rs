//! Frame module - rolls recorded for one of the ten frames
//!
//! A frame knows whether it can accept another roll and, given the frames that
//! follow it, whether its total can be resolved yet. Frames never hold a
//! reference to their game: lookahead is passed in explicitly as the slice of
//! later frames.

use crate::error::ScoreError;
use crate::types::{RollSlot, MAX_ROLLS, PIN_COUNT, TENTH_FRAME};

/// One frame of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Frame {
    index: usize,
    roll_count: u8,
    first_roll: u8,
    second_roll: u8,
    extra_roll: u8,
}

impl Frame {
    /// Create an empty frame at position `index` (0-9).
    pub fn new(index: usize) -> Self {
        debug_assert!(index <= TENTH_FRAME);
        Self {
            index,
            roll_count: 0,
            first_roll: 0,
            second_roll: 0,
            extra_roll: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn roll_count(&self) -> u8 {
        self.roll_count
    }

    pub fn first_roll(&self) -> u8 {
        self.first_roll
    }

    pub fn second_roll(&self) -> u8 {
        self.second_roll
    }

    pub fn extra_roll(&self) -> u8 {
        self.extra_roll
    }

    pub fn is_tenth(&self) -> bool {
        self.index == TENTH_FRAME
    }

    pub fn is_strike(&self) -> bool {
        self.first_roll == PIN_COUNT
    }

    pub fn is_spare(&self) -> bool {
        !self.is_strike() && self.first_roll + self.second_roll == PIN_COUNT
    }

    /// Slot the next roll would be stored in, or `None` once all three are used.
    pub fn next_slot(&self) -> Option<RollSlot> {
        RollSlot::from_count(self.roll_count)
    }

    /// Whether another roll is legal in this frame.
    pub fn can_roll(&self) -> bool {
        match self.roll_count {
            0 => true,
            // A tenth-frame strike resets the rack for the second roll.
            1 => !self.is_strike() || self.is_tenth(),
            2 => self.is_tenth() && (self.is_strike() || self.is_spare()),
            _ => false,
        }
    }

    /// Validate a roll without recording it.
    ///
    /// Returns exactly the error [`Frame::score`] would return for `pins`.
    pub fn check_roll(&self, pins: u8) -> Result<(), ScoreError> {
        if !self.can_roll() {
            return Err(ScoreError::FrameClosed { frame: self.index });
        }
        if pins > PIN_COUNT {
            return Err(ScoreError::InvalidPins { pins });
        }
        if self.roll_count == 1
            && self.first_roll + pins > PIN_COUNT
            && !(self.is_tenth() && self.is_strike())
        {
            return Err(ScoreError::PinsExceedRack {
                first: self.first_roll,
                second: pins,
            });
        }
        Ok(())
    }

    /// Record a roll of `pins`. A rejected roll leaves the frame unchanged.
    pub fn score(&mut self, pins: u8) -> Result<(), ScoreError> {
        self.check_roll(pins)?;
        match self.next_slot() {
            Some(RollSlot::First) => self.first_roll = pins,
            Some(RollSlot::Second) => self.second_roll = pins,
            Some(RollSlot::Extra) => self.extra_roll = pins,
            None => return Err(ScoreError::FrameClosed { frame: self.index }),
        }
        self.roll_count += 1;
        debug_assert!(self.roll_count <= MAX_ROLLS);
        Ok(())
    }

    /// The frame's score, or `None` while it is still open or its strike/spare
    /// bonus depends on rolls not yet made.
    ///
    /// `following` is the slice of frames after this one, in order
    /// (`&frames[index + 1..]`). Only the first two entries are ever read.
    pub fn total(&self, following: &[Frame]) -> Option<u16> {
        if self.can_roll() {
            return None;
        }

        let first = u16::from(self.first_roll);
        let second = u16::from(self.second_roll);
        let extra = u16::from(self.extra_roll);
        let rack = u16::from(PIN_COUNT);

        if self.is_strike() {
            if self.is_tenth() {
                return Some(rack + second + extra);
            }
            let next = following.first()?;
            if self.index == TENTH_FRAME - 1 {
                if next.roll_count < 2 {
                    return None;
                }
                return Some(rack + u16::from(next.first_roll) + u16::from(next.second_roll));
            }
            let after = following.get(1)?;
            if next.roll_count + after.roll_count < 2 {
                return None;
            }
            if next.is_strike() {
                Some(rack + rack + u16::from(after.first_roll))
            } else {
                Some(rack + u16::from(next.first_roll) + u16::from(next.second_roll))
            }
        } else if self.is_spare() {
            if self.is_tenth() {
                return Some(rack + extra);
            }
            let next = following.first()?;
            if next.roll_count < 1 {
                return None;
            }
            Some(rack + u16::from(next.first_roll))
        } else {
            Some(first + second)
        }
    }

    /// Whether [`Frame::total`] is determinable yet.
    pub fn can_total(&self, following: &[Frame]) -> bool {
        self.total(following).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn rolled(index: usize, rolls: &[u8]) -> Frame {
        let mut frame = Frame::new(index);
        for &pins in rolls {
            frame.score(pins).unwrap();
        }
        frame
    }

    #[test]
    fn test_empty_frame_accepts_a_roll() {
        let frame = Frame::new(0);
        assert!(frame.can_roll());
        assert_eq!(frame.roll_count(), 0);
        assert_eq!(frame.next_slot(), Some(RollSlot::First));
        assert!(!frame.can_total(&[]));
    }

    #[test]
    fn test_strike_closes_regular_frame() {
        let frame = rolled(3, &[10]);
        assert!(frame.is_strike());
        assert!(!frame.is_spare());
        assert!(!frame.can_roll());
    }

    #[test]
    fn test_open_frame_totals_without_lookahead() {
        let frame = rolled(0, &[3, 4]);
        assert!(!frame.can_roll());
        assert_eq!(frame.total(&[]), Some(7));
    }

    #[test]
    fn test_open_frame_has_no_total_while_rolling() {
        let frame = rolled(0, &[3]);
        assert!(frame.can_roll());
        assert_eq!(frame.total(&[]), None);
    }

    #[test]
    fn test_spare_waits_for_next_roll() {
        let frame = rolled(0, &[3, 7]);
        let mut next = Frame::new(1);
        assert!(frame.is_spare());
        assert!(!frame.is_strike());
        assert_eq!(frame.total(&[next]), None);

        next.score(6).unwrap();
        assert_eq!(frame.total(&[next]), Some(16));
    }

    #[test]
    fn test_strike_after_strike_reads_two_frames_ahead() {
        let frame = rolled(0, &[10]);
        let next = rolled(1, &[10]);
        let mut after = Frame::new(2);
        assert_eq!(frame.total(&[next, after]), None);

        after.score(4).unwrap();
        assert_eq!(frame.total(&[next, after]), Some(24));
    }

    #[test]
    fn test_strike_before_open_frame() {
        let frame = rolled(5, &[10]);
        let mut next = rolled(6, &[3]);
        let after = Frame::new(7);
        assert_eq!(frame.total(&[next, after]), None);

        next.score(4).unwrap();
        assert_eq!(frame.total(&[next, after]), Some(17));
    }

    #[test]
    fn test_ninth_frame_strike_reads_tenth_frame() {
        let frame = rolled(8, &[10]);
        let mut tenth = rolled(9, &[10]);
        assert_eq!(frame.total(&[tenth]), None);

        tenth.score(10).unwrap();
        assert_eq!(frame.total(&[tenth]), Some(30));
    }

    #[test]
    fn test_tenth_frame_strike_allows_fresh_rack() {
        let mut tenth = rolled(9, &[10]);
        assert!(tenth.can_roll());
        tenth.score(10).unwrap();
        assert!(tenth.can_roll());
        tenth.score(10).unwrap();
        assert!(!tenth.can_roll());
        assert_eq!(tenth.roll_count(), 3);
        assert_eq!(tenth.total(&[]), Some(30));
    }

    #[test]
    fn test_tenth_frame_spare_earns_extra_roll() {
        let mut tenth = rolled(9, &[5, 5]);
        assert!(tenth.can_roll());
        assert_eq!(tenth.total(&[]), None);
        tenth.score(7).unwrap();
        assert_eq!(tenth.total(&[]), Some(17));
    }

    #[test]
    fn test_tenth_frame_open_closes_after_two() {
        let tenth = rolled(9, &[5, 4]);
        assert!(!tenth.can_roll());
        assert_eq!(tenth.total(&[]), Some(9));
    }

    #[test]
    fn test_tenth_frame_strike_then_partial_rack_is_uncapped() {
        // Only the second roll is checked against the rack; the bonus roll is not.
        let mut tenth = rolled(9, &[10, 6]);
        tenth.score(7).unwrap();
        assert_eq!(tenth.total(&[]), Some(23));
    }

    #[test]
    fn test_second_roll_cap_on_regular_frame() {
        let mut frame = rolled(4, &[6]);
        let err = frame.score(5).unwrap_err();
        assert_eq!(err, ScoreError::PinsExceedRack { first: 6, second: 5 });
        assert_eq!(err.kind(), ErrorKind::InvalidState);
        // Rejected roll leaves the frame untouched.
        assert_eq!(frame.roll_count(), 1);
        frame.score(4).unwrap();
        assert!(frame.is_spare());
    }

    #[test]
    fn test_second_roll_cap_on_tenth_frame_without_strike() {
        let mut tenth = rolled(9, &[6]);
        assert_eq!(
            tenth.score(5),
            Err(ScoreError::PinsExceedRack { first: 6, second: 5 })
        );
    }

    #[test]
    fn test_invalid_pin_count() {
        let mut frame = Frame::new(0);
        let err = frame.score(11).unwrap_err();
        assert_eq!(err, ScoreError::InvalidPins { pins: 11 });
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(frame.roll_count(), 0);
    }

    #[test]
    fn test_closed_frame_rejects_roll() {
        let mut frame = rolled(2, &[1, 2]);
        let err = frame.score(0).unwrap_err();
        assert_eq!(err, ScoreError::FrameClosed { frame: 2 });
        assert_eq!(err.kind(), ErrorKind::InvalidState);
    }

    #[test]
    fn test_closed_check_precedes_range_check() {
        let frame = rolled(2, &[10]);
        assert_eq!(frame.check_roll(42), Err(ScoreError::FrameClosed { frame: 2 }));
    }

    #[test]
    fn test_extra_roll_only_on_tenth_frame() {
        for index in 0..TENTH_FRAME {
            let frame = rolled(index, &[5, 5]);
            assert!(!frame.can_roll());
            assert_eq!(frame.extra_roll(), 0);
        }
    }

    #[test]
    fn test_total_is_a_pure_query() {
        let frame = rolled(0, &[10]);
        let following = [rolled(1, &[3, 4]), Frame::new(2)];
        let before = frame;
        for _ in 0..3 {
            assert_eq!(frame.total(&following), Some(17));
            assert!(frame.can_total(&following));
        }
        assert_eq!(frame, before);
    }

    #[test]
    fn test_fresh_frame_replaces_reset() {
        let used = rolled(9, &[10, 10, 10]);
        let fresh = Frame::new(used.index());
        assert_eq!(fresh.roll_count(), 0);
        assert!(fresh.can_roll());
        assert_ne!(used, fresh);
    }
}
