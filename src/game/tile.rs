//! # Tiles
//! The content of a single square of the board.

use thiserror::Error;

use super::{
    colour::Colour,
    piece::{Piece, PieceKind},
};

/// Symbol of an empty tile in compact board notation.
pub const EMPTY_SYMBOL: char = '.';
/// Glyph of an empty tile when rendering a board.
pub const EMPTY_GLYPH: char = ' ';

/// Tile parsing errors.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Error)]
pub enum TileParseError {
    #[error("{0:?} is not a valid tile symbol")]
    InvalidTileChar(char),
}

/// What sits on a square: nothing, or exactly one piece with its owner.
///
/// Tiles are plain values. Boards replace them wholesale, they are never
/// modified in place.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum Tile {
    #[default]
    Empty,
    Occupied(Piece),
}
impl Tile {
    /// A tile holding a `kind` piece owned by `colour`.
    #[inline]
    pub const fn new(kind: PieceKind, colour: Colour) -> Self {
        Self::Occupied(Piece::new(kind, colour))
    }

    /// Parses a tile from its compact symbol.
    ///
    /// `P`, `R`, `N`, `B`, `Q` and `K` are white pieces, lowercase letters are
    /// black pieces and `.` is an empty tile. The Unicode chess glyphs are
    /// accepted as well.
    /// # Errors
    /// Any other character yields [`TileParseError::InvalidTileChar`].
    pub fn from_char(c: char) -> Result<Self, TileParseError> {
        if c == EMPTY_SYMBOL {
            return Ok(Self::Empty);
        }
        Piece::from_symbol(c)
            .map(Self::Occupied)
            .ok_or(TileParseError::InvalidTileChar(c))
    }

    /// Returns the glyph used when rendering this tile: a chess glyph for
    /// pieces, a blank for empty tiles.
    pub fn display_char(&self) -> char {
        match self {
            Self::Empty => EMPTY_GLYPH,
            Self::Occupied(piece) => piece.unicode_symbol(),
        }
    }

    /// Returns the compact symbol of this tile, as accepted by [`Tile::from_char`].
    pub fn symbol(&self) -> char {
        match self {
            Self::Empty => EMPTY_SYMBOL,
            Self::Occupied(piece) => piece.symbol(),
        }
    }

    /// Returns the piece sitting on this tile, if any.
    #[inline]
    pub const fn piece(&self) -> Option<Piece> {
        match self {
            Self::Empty => None,
            Self::Occupied(piece) => Some(*piece),
        }
    }

    /// Returns the owner of this tile, if any.
    #[inline]
    pub const fn owner(&self) -> Option<Colour> {
        match self {
            Self::Empty => None,
            Self::Occupied(piece) => Some(piece.colour),
        }
    }

    /// Checks if no piece sits on this tile.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Checks if this tile holds a piece of the given colour.
    #[inline]
    pub fn is_owned_by(&self, colour: Colour) -> bool {
        self.owner() == Some(colour)
    }
}
impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_char())
    }
}
