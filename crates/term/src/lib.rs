//! Terminal scoreboard module.
//!
//! This is a small rendering layer for console play. The scoreboard itself is
//! built as plain text by pure functions; the renderer only flushes that text
//! (and prompts) to a writer.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Produce a fixed-width table that lines up in any monospace console
//! - Allow tests to capture output by rendering into a `Vec<u8>`

pub mod renderer;
pub mod scoreboard;

pub use tenpin_core as core;
pub use tenpin_types as types;

pub use renderer::{encode_text_into, ConsoleRenderer};
pub use scoreboard::{render_scoreboard, render_scoreboard_into, roll_cell, roll_glyph};
