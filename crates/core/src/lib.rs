//! Core scoring module - pure, deterministic, and testable
//!
//! This module contains the bowling rules: which rolls are legal, how frame
//! totals resolve strike and spare bonuses, and how a game aggregates them.
//! It has **zero dependencies** on terminals or I/O, making it:
//!
//! - **Deterministic**: the same rolls always produce the same totals
//! - **Testable**: every rule is covered by unit tests
//! - **Portable**: usable from the console session, tests, or benches alike
//!
//! # Module Structure
//!
//! - [`frame`]: one frame's rolls, legality checks, and lookahead totals
//! - [`game`]: the ten frames, the current-frame cursor, and the running total
//! - [`player`]: a name bound to one game
//! - [`error`]: errors returned when a caller sequences rolls incorrectly
//!
//! # Scoring Rules
//!
//! - **Open frame**: pins knocked down in the two rolls
//! - **Spare**: 10 plus the next roll
//! - **Strike**: 10 plus the next two rolls
//! - **Tenth frame**: a strike or spare earns a bonus roll inside the frame;
//!   after a strike the second roll is made against a fresh rack
//!
//! A frame whose bonus depends on rolls not yet made has no total yet
//! (`None`), which is distinct from a genuine total of zero.
//!
//! # Example
//!
//! ```
//! use tenpin_core::Game;
//!
//! let mut game = Game::new();
//!
//! game.next_frame().unwrap();
//! game.roll(10).unwrap();
//! assert_eq!(game.frame_total(0), None); // strike waits for two more rolls
//!
//! game.next_frame().unwrap();
//! game.roll(3).unwrap();
//! game.roll(4).unwrap();
//!
//! assert_eq!(game.frame_total(0), Some(17));
//! assert_eq!(game.frame_total(1), Some(7));
//! assert_eq!(game.game_total(), 24);
//! ```

pub mod error;
pub mod frame;
pub mod game;
pub mod player;

pub use tenpin_types as types;

// Re-export commonly used types for convenience
pub use error::{ErrorKind, ScoreError};
pub use frame::Frame;
pub use game::Game;
pub use player::Player;
