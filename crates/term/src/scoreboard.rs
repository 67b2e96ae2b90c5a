//! Scoreboard: maps players' games into a fixed-width text table.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! ```text
//! |Player    |  1   |  2   |  3   |  4   |  5   |  6   |  7   |  8   |  9   |  10  |Total |
//! |----------|------|------|------|------|------|------|------|------|------|------|------|
//! |Ada       |X     |7 /   |      |      |      |      |      |      |      |      |      |
//! |          |20    |      |      |      |      |      |      |      |      |      |20    |
//! |----------|------|------|------|------|------|------|------|------|------|------|------|
//! ```

use crate::core::{Frame, Game, Player};
use crate::types::{FRAME_COUNT, NAME_COL_W, PIN_COUNT, SCORE_COL_W};

/// Width of each packed roll inside a frame cell.
const ROLL_W: usize = 2;

/// Render the scoreboard for `players` into a new string.
pub fn render_scoreboard(players: &[Player]) -> String {
    let mut out = String::new();
    render_scoreboard_into(players, &mut out);
    out
}

/// Append the scoreboard for `players` to `out`.
///
/// The header and divider are written once, then two rows and a divider per
/// player.
pub fn render_scoreboard_into(players: &[Player], out: &mut String) {
    push_header(out);
    push_divider(out);
    for player in players {
        push_rolls_row(out, player);
        push_totals_row(out, player.game());
        push_divider(out);
    }
}

/// The contents of one frame's roll cell, exactly `SCORE_COL_W` wide.
pub fn roll_cell(frame: &Frame) -> String {
    let mut out = String::with_capacity(SCORE_COL_W);
    push_roll_cell(&mut out, frame);
    out
}

/// `X` for a strike, otherwise the pin count digit.
pub fn roll_glyph(pins: u8) -> char {
    if pins >= PIN_COUNT {
        'X'
    } else {
        char::from(b'0' + pins)
    }
}

fn push_header(out: &mut String) {
    out.push('|');
    push_padded(out, "Player", NAME_COL_W);
    out.push('|');
    for number in 1..=FRAME_COUNT {
        out.push_str("  ");
        push_padded(out, &number.to_string(), SCORE_COL_W - 2);
        out.push('|');
    }
    push_padded(out, "Total", SCORE_COL_W);
    out.push_str("|\n");
}

fn push_divider(out: &mut String) {
    out.push('|');
    out.extend(std::iter::repeat('-').take(NAME_COL_W));
    for _ in 0..=FRAME_COUNT {
        out.push('|');
        out.extend(std::iter::repeat('-').take(SCORE_COL_W));
    }
    out.push_str("|\n");
}

fn push_rolls_row(out: &mut String, player: &Player) {
    out.push('|');
    push_padded(out, player.name(), NAME_COL_W);
    out.push('|');
    for frame in player.game().frames() {
        push_roll_cell(out, frame);
        out.push('|');
    }
    // Total column stays empty on the rolls row.
    push_padded(out, "", SCORE_COL_W);
    out.push_str("|\n");
}

fn push_totals_row(out: &mut String, game: &Game) {
    out.push('|');
    push_padded(out, "", NAME_COL_W);
    out.push('|');
    for index in 0..FRAME_COUNT {
        match game.frame_total(index) {
            Some(total) => push_padded(out, &total.to_string(), SCORE_COL_W),
            None => push_padded(out, "", SCORE_COL_W),
        }
        out.push('|');
    }
    push_padded(out, &game.game_total().to_string(), SCORE_COL_W);
    out.push_str("|\n");
}

fn push_roll_cell(out: &mut String, frame: &Frame) {
    match frame.roll_count() {
        0 => push_padded(out, "", SCORE_COL_W),
        1 => push_roll(out, frame.first_roll(), SCORE_COL_W),
        2 => {
            push_roll(out, frame.first_roll(), ROLL_W);
            push_second_roll(out, frame);
            push_padded(out, "", SCORE_COL_W - 2 * ROLL_W);
        }
        _ => {
            push_roll(out, frame.first_roll(), ROLL_W);
            push_second_roll(out, frame);
            push_roll(out, frame.extra_roll(), ROLL_W);
        }
    }
}

fn push_second_roll(out: &mut String, frame: &Frame) {
    if frame.is_spare() {
        push_padded(out, "/", ROLL_W);
    } else {
        push_roll(out, frame.second_roll(), ROLL_W);
    }
}

fn push_roll(out: &mut String, pins: u8, width: usize) {
    out.push(roll_glyph(pins));
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(1)));
}

/// Left-align `s` in `width` columns, truncating if it is longer.
fn push_padded(out: &mut String, s: &str, width: usize) {
    let mut used = 0;
    for ch in s.chars().take(width) {
        out.push(ch);
        used += 1;
    }
    out.extend(std::iter::repeat(' ').take(width - used));
}
