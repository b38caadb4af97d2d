//! Pseudo-legal move generation.
//!
//! Moves are generated for a single piece at a time, from the board occupancy
//! alone: nothing checks whether the mover's king is left in check.

use super::{
    action::{Action, ActionList},
    board::{Board, BoardError},
    colour::Colour,
    piece::PieceKind,
    square::{Delta, Square},
};

impl Board {
    /// Returns the pawn push delta for the given colour.
    #[inline(always)]
    pub const fn pawn_push(colour: Colour) -> Delta {
        if colour.is_black() {
            Delta::SOUTH
        } else {
            Delta::NORTH
        }
    }

    /// Pawn attacks deltas for the given colour.
    #[inline(always)]
    pub const fn pawn_attacks(colour: Colour) -> (Delta, Delta) {
        if colour.is_black() {
            (Delta::SOUTH_EAST, Delta::SOUTH_WEST)
        } else {
            (Delta::NORTH_EAST, Delta::NORTH_WEST)
        }
    }

    /// Returns the rank pawns of the given colour start on, and may double
    /// push from.
    #[inline]
    pub fn pawn_start_rank(&self, colour: Colour) -> Option<usize> {
        if colour.is_black() {
            self.height().checked_sub(2)
        } else {
            Some(1)
        }
    }

    /// Generates the pseudo-legal moves of the piece standing on `origin`.
    ///
    /// An empty square yields no moves. The order of the list only depends on
    /// the board, so repeated calls give identical results.
    /// # Errors
    /// Fails with [`BoardError::OutOfBounds`] if `origin` is off the board.
    pub fn moves_from(&self, origin: Square) -> Result<ActionList, BoardError> {
        let Some(piece) = self.tile_checked(origin)?.piece() else {
            return Ok(ActionList::new());
        };

        let mut moves = ActionList::new();
        let us = piece.colour;
        match piece.kind {
            PieceKind::Pawn => self.generate_pawn_moves(&mut moves, origin, us),
            PieceKind::Knight => {
                self.generate_step_moves(&mut moves, origin, us, &Delta::KNIGHT_DELTAS)
            }
            PieceKind::King => self.generate_step_moves(&mut moves, origin, us, &Delta::KING_DELTAS),
            PieceKind::Rook => {
                self.generate_sliding_moves(&mut moves, origin, us, &Delta::ORTHOGONAL_DELTAS)
            }
            PieceKind::Bishop => {
                self.generate_sliding_moves(&mut moves, origin, us, &Delta::DIAGONAL_DELTAS)
            }
            PieceKind::Queen => {
                self.generate_sliding_moves(&mut moves, origin, us, &Delta::QUEEN_DELTAS)
            }
        }

        log::debug!(
            "{} {:?} on {origin}: {} moves",
            us,
            piece.kind,
            moves.len()
        );
        Ok(moves)
    }

    /// Convenience wrapper around [`Board::moves_from`] taking raw coordinates.
    /// # Errors
    /// Fails with [`BoardError::OutOfBounds`] if the square is off the board.
    pub fn moves_from_coordinates(&self, rank: usize, file: usize) -> Result<ActionList, BoardError> {
        self.moves_from(Square::new(rank, file))
    }

    fn target(&self, origin: Square, delta: Delta) -> Option<Square> {
        origin.translate(delta, self.width(), self.height())
    }

    /// Knights and kings: one hop per delta, onto empty squares or enemy pieces.
    fn generate_step_moves(
        &self,
        moves: &mut ActionList,
        origin: Square,
        us: Colour,
        deltas: &[Delta],
    ) {
        for &delta in deltas {
            let Some(target) = self.target(origin, delta) else {
                continue;
            };
            if self.tile(target).is_some_and(|tile| !tile.is_owned_by(us)) {
                moves.push(Action::new(origin, target))
            }
        }
    }

    /// Rooks, bishops and queens: cast a ray per delta until the edge of the board
    /// or a piece. Enemy pieces are captured and end the ray, our own pieces end
    /// it without a move.
    fn generate_sliding_moves(
        &self,
        moves: &mut ActionList,
        origin: Square,
        us: Colour,
        deltas: &[Delta],
    ) {
        for &delta in deltas {
            let mut current = origin;
            while let Some(target) = self.target(current, delta) {
                let Some(tile) = self.tile(target) else {
                    break;
                };
                if tile.is_owned_by(us) {
                    break;
                }
                moves.push(Action::new(origin, target));
                if !tile.is_empty() {
                    break;
                }
                current = target;
            }
        }
    }

    /// Generates pawn moves.
    fn generate_pawn_moves(&self, moves: &mut ActionList, origin: Square, us: Colour) {
        let them = us.inverse();
        let push = Self::pawn_push(us);
        let is_empty = |sq: Square| self.tile(sq).is_some_and(|tile| tile.is_empty());

        // Single push, then double push through the same (empty) square.
        if let Some(single) = self.target(origin, push).filter(|&sq| is_empty(sq)) {
            moves.push(Action::new(origin, single));

            if self.pawn_start_rank(us) == Some(origin.rank) {
                if let Some(double) = self.target(single, push).filter(|&sq| is_empty(sq)) {
                    moves.push(Action::new(origin, double));
                }
            }
        }

        let (east, west) = Self::pawn_attacks(us);
        for delta in [east, west] {
            if let Some(target) = self
                .target(origin, delta)
                .filter(|&sq| self.tile(sq).is_some_and(|tile| tile.is_owned_by(them)))
            {
                moves.push(Action::new(origin, target));
            }
        }
    }
}

#[cfg(test)]
mod test {
    use crate::game::tile::Tile;

    use super::*;

    #[test]
    fn pawn_directions() {
        assert_eq!(Board::pawn_push(Colour::White), Delta::NORTH);
        assert_eq!(Board::pawn_push(Colour::Black), Delta::SOUTH);
        let board = Board::default();
        assert_eq!(board.pawn_start_rank(Colour::White), Some(1));
        assert_eq!(board.pawn_start_rank(Colour::Black), Some(6));
        assert_eq!(Board::empty(5, 5).pawn_start_rank(Colour::Black), Some(3));
    }

    #[test]
    fn out_of_bounds_origin() {
        let board = Board::initial();
        assert_eq!(
            board.moves_from(Square::new(8, 0)),
            Err(BoardError::OutOfBounds {
                rank: 8,
                file: 0,
                width: 8,
                height: 8
            })
        );
        assert!(board.moves_from_coordinates(0, 8).is_err());
    }

    #[test]
    fn initial_position_counts() {
        let board = Board::initial();
        // Knights have two moves each, pawns two pushes each, everything else is stuck.
        let total: usize = board
            .occupied_squares()
            .map(|sq| board.moves_from(sq).unwrap().len())
            .sum();
        assert_eq!(total, 2 * (2 * 2 + 8 * 2));
    }

    #[test]
    fn black_pawn_on_small_board() {
        let board = Board::empty(3, 4)
            .with_tile(Square::new(2, 1), Tile::new(PieceKind::Pawn, Colour::Black))
            .unwrap();
        let moves = board.moves_from(Square::new(2, 1)).unwrap();
        assert_eq!(
            moves,
            vec![
                Action::new(Square::new(2, 1), Square::new(1, 1)),
                Action::new(Square::new(2, 1), Square::new(0, 1)),
            ]
        );
    }
}
