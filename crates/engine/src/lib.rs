//! Game engine module - the turn-taking loop around the scoring core
//!
//! This crate wires the pure scoring rules (`core`) to console input (`input`)
//! and scoreboard output (`term`). It owns no rules of its own: it asks the
//! current frame whether it can take another roll, obtains a validated pin
//! count, records it, and redraws.
//!
//! # Configuration
//!
//! [`SessionConfig::from_env`] reads:
//!
//! - `TENPIN_PLAYER`: play as this name without prompting
//! - `TENPIN_LOG`: enable diagnostics on stderr at this level
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//!
//! use tenpin_engine::{Session, SessionConfig};
//! use tenpin_input::LineReader;
//! use tenpin_term::ConsoleRenderer;
//!
//! let rolls = "10\n".repeat(12);
//! let input = format!("Ada\n{rolls}");
//!
//! let mut session = Session::new(
//!     LineReader::new(Cursor::new(input)),
//!     ConsoleRenderer::new(Vec::new()),
//!     SessionConfig::default(),
//! );
//! let player = session.run().unwrap();
//! assert_eq!(player.game().game_total(), 300);
//! ```

pub mod config;
pub mod session;

pub use tenpin_core as core;
pub use tenpin_input as input;
pub use tenpin_term as term;
pub use tenpin_types as types;

pub use config::SessionConfig;
pub use session::{Session, GAME_OVER};
