//! # Per-player state
//!
//! Castling availability is tracked per player but not acted upon yet: move
//! generation never produces castling moves.

use super::{
    board::Board,
    colour::{Colour, NUM_COLOURS},
};

/// Castling availability of one player.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PlayerInfo {
    pub short_castling_available: bool,
    pub long_castling_available: bool,
}
impl Default for PlayerInfo {
    /// Both castles still available.
    fn default() -> Self {
        Self {
            short_castling_available: true,
            long_castling_available: true,
        }
    }
}

/// A board together with the state of both players.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Game {
    pub board: Board,
    players: [PlayerInfo; NUM_COLOURS],
}
impl Default for Game {
    fn default() -> Self {
        Self::new(Board::initial())
    }
}
impl Game {
    /// Starts a game on the given board, with full castling availability for both sides.
    pub fn new(board: Board) -> Self {
        Self {
            board,
            players: [PlayerInfo::default(); NUM_COLOURS],
        }
    }

    /// Returns the state of the given player.
    pub fn player_info(&self, colour: Colour) -> &PlayerInfo {
        &self.players[colour as usize]
    }

    /// Returns the state of the given player, mutably.
    pub fn player_info_mut(&mut self, colour: Colour) -> &mut PlayerInfo {
        &mut self.players[colour as usize]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn new_game_state() {
        let mut game = Game::default();
        assert_eq!(game.board, Board::initial());
        for colour in Colour::iter() {
            let info = game.player_info(colour);
            assert!(info.short_castling_available);
            assert!(info.long_castling_available);
        }

        game.player_info_mut(Colour::Black).long_castling_available = false;
        assert!(!game.player_info(Colour::Black).long_castling_available);
        assert!(game.player_info(Colour::White).long_castling_available);
    }
}
