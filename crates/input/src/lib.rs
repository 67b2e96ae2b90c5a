//! Console input module (engine-facing).
//!
//! This module is independent of any terminal framework. It reads lines from a
//! buffered source, supplies the prompt text, and turns typed lines into pin
//! counts and player names, reporting typing mistakes as [`Rejection`]s.

pub mod parse;
pub mod reader;

pub use tenpin_core as core;
pub use tenpin_types as types;

pub use parse::{parse_name, parse_pins, roll_prompt, Rejection, NAME_PROMPT};
pub use reader::{InputError, LineReader};
