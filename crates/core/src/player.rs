//! A named player and the game they own.

use crate::game::Game;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    game: Game,
}

impl Player {
    /// Create a player with a fresh game.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            game: Game::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_starts_fresh_game() {
        let player = Player::new("TEST");
        assert_eq!(player.name(), "TEST");
        assert!(!player.game().started());
        assert_eq!(player.game().game_total(), 0);
    }

    #[test]
    fn test_game_mut_records_rolls() {
        let mut player = Player::new(String::from("Ada"));
        player.game_mut().next_frame().unwrap();
        player.game_mut().roll(7).unwrap();
        assert_eq!(player.game().current_frame().unwrap().first_roll(), 7);
    }
}
