//! Single-player console session.
//!
//! Drives one game from name entry to `Game Over`: prompt, read a line,
//! validate it, record the roll, redraw the scoreboard. Typing mistakes are
//! answered with a message and a new prompt. Errors from the scoring core and
//! failures to read input end the session.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::config::SessionConfig;
use crate::core::Player;
use crate::input::{parse_name, parse_pins, roll_prompt, LineReader, NAME_PROMPT};
use crate::term::ConsoleRenderer;

/// Printed once the tenth frame is closed.
pub const GAME_OVER: &str = "Game Over\n";

pub struct Session<R: BufRead, W: Write> {
    reader: LineReader<R>,
    renderer: ConsoleRenderer<W>,
    config: SessionConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(reader: LineReader<R>, renderer: ConsoleRenderer<W>, config: SessionConfig) -> Self {
        Self {
            reader,
            renderer,
            config,
        }
    }

    /// Play a complete game and return the finished player.
    pub fn run(&mut self) -> Result<Player> {
        let mut player = self.new_player()?;
        info!(player = %player.name(), "game started");

        while !player.game().is_game_over() {
            self.take_turn(&mut player)?;
        }

        let total = player.game().game_total();
        info!(player = %player.name(), total, "game over");
        self.renderer.print(GAME_OVER)?;
        Ok(player)
    }

    pub fn into_renderer(self) -> ConsoleRenderer<W> {
        self.renderer
    }

    fn new_player(&mut self) -> Result<Player> {
        if let Some(name) = &self.config.player_name {
            return Ok(Player::new(name.clone()));
        }
        loop {
            self.renderer.print(NAME_PROMPT)?;
            let line = self.reader.read_line().context("reading player name")?;
            match parse_name(line) {
                Ok(name) => return Ok(Player::new(name)),
                Err(rejection) => {
                    let message = rejection.message(line);
                    warn!(?rejection, "rejected player name");
                    self.renderer.print(&message)?;
                }
            }
        }
    }

    /// Open the next frame and roll until it closes.
    fn take_turn(&mut self, player: &mut Player) -> Result<()> {
        let frame = player
            .game_mut()
            .next_frame()
            .context("advancing to the next frame")?;
        debug!(frame = frame.index() + 1, "frame opened");

        while let Some(frame) = player.game().current_frame().filter(|f| f.can_roll()) {
            let frame = *frame;
            self.renderer.print(&roll_prompt(player.name(), &frame))?;
            let line = self
                .reader
                .read_line()
                .with_context(|| format!("reading roll for frame {}", frame.index() + 1))?;

            let pins = match parse_pins(line, &frame) {
                Ok(pins) => pins,
                Err(rejection) => {
                    let message = rejection.message(line);
                    warn!(input = %line, ?rejection, "rejected pin count");
                    self.renderer.print(&message)?;
                    continue;
                }
            };

            player
                .game_mut()
                .roll(pins)
                .context("recording a validated roll")?;
            debug!(
                frame = frame.index() + 1,
                roll = frame.roll_count() + 1,
                pins,
                "roll recorded"
            );

            self.renderer.draw(std::slice::from_ref(&*player))?;
        }
        Ok(())
    }
}
