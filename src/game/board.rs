//! Main API to represent a chess board and read it from or write it to text.
//!
//! Boards are rectangular grids of [`Tile`]s addressed from the bottom-left
//! corner. The compact text notation lists tiles the way the board is read by
//! a person instead: top rank first, each rank from left to right.
use thiserror::Error;

use super::{
    colour::Colour,
    piece::PieceKind,
    square::Square,
    tile::{Tile, TileParseError},
};

/// Width of a standard chessboard.
pub const DEFAULT_WIDTH: usize = 8;
/// Height of a standard chessboard.
pub const DEFAULT_HEIGHT: usize = 8;

const BACK_RANK: [PieceKind; DEFAULT_WIDTH] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Board errors.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Error)]
pub enum BoardError {
    #[error("Invalid tile at index {index}: {source}")]
    InvalidTileChar {
        index: usize,
        #[source]
        source: TileParseError,
    },
    #[error("Square ({rank}, {file}) is outside of the {width}x{height} board")]
    OutOfBounds {
        rank: usize,
        file: usize,
        width: usize,
        height: usize,
    },
    #[error("Board text defines {found} tiles, the board only has {expected}")]
    TooManyTiles { expected: usize, found: usize },
}

/// Maps the index of a tile in compact text notation to the square it describes.
///
/// Index 0 is the top-left square (highest rank, file 0), indices then run left
/// to right along each rank and down the board. Returns `None` when the index
/// lies past the last square.
#[inline]
pub const fn text_index_to_square(index: usize, width: usize, height: usize) -> Option<Square> {
    if width == 0 || index / width >= height {
        return None;
    }
    Some(Square::new(height - 1 - index / width, index % width))
}

/// A rectangular chess board owning all of its tiles.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct Board {
    width: usize,
    height: usize,
    // Indexed by [rank][file].
    tiles: Vec<Vec<Tile>>,
}
impl Default for Board {
    /// An empty 8x8 board.
    fn default() -> Self {
        Self::empty(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}
impl Board {
    /// A board with no pieces.
    pub fn empty(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![vec![Tile::Empty; width]; height],
        }
    }

    /// The initial position of chess.
    pub fn initial() -> Self {
        let mut board = Self::default();
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            board.tiles[0][file] = Tile::new(kind, Colour::White);
            board.tiles[1][file] = Tile::new(PieceKind::Pawn, Colour::White);
            board.tiles[DEFAULT_HEIGHT - 2][file] = Tile::new(PieceKind::Pawn, Colour::Black);
            board.tiles[DEFAULT_HEIGHT - 1][file] = Tile::new(kind, Colour::Black);
        }
        board
    }

    /// Creates an 8x8 board from its compact text notation.
    /// # Errors
    /// See [`Board::from_text_with_size`].
    pub fn from_text(text: &str) -> Result<Self, BoardError> {
        Self::from_text_with_size(text, DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }

    /// Creates a `width` by `height` board from its compact text notation.
    ///
    /// Whitespace is ignored. Every other character describes one tile (see
    /// [`Tile::from_char`]), starting from the top-left corner and reading each
    /// rank left to right, top rank first. If the text describes fewer tiles than
    /// the board holds, the remaining bottom tiles stay empty.
    /// # Errors
    /// Fails on a character that is not a tile symbol, or when the text describes
    /// more tiles than the board holds.
    pub fn from_text_with_size(text: &str, width: usize, height: usize) -> Result<Self, BoardError> {
        let symbols: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
        let expected = width * height;
        if symbols.len() > expected {
            return Err(BoardError::TooManyTiles {
                expected,
                found: symbols.len(),
            });
        }
        if symbols.len() < expected {
            log::warn!(
                "Board text only describes {} of {expected} tiles, the rest is left empty",
                symbols.len()
            );
        }

        let mut board = Self::empty(width, height);
        for (index, c) in symbols.into_iter().enumerate() {
            let square = text_index_to_square(index, width, height).ok_or(
                BoardError::TooManyTiles {
                    expected,
                    found: index + 1,
                },
            )?;
            let tile =
                Tile::from_char(c).map_err(|source| BoardError::InvalidTileChar { index, source })?;
            board.tiles[square.rank][square.file] = tile;
        }

        Ok(board)
    }

    /// Renders the board with one glyph per tile, top rank first, each rank
    /// terminated by a newline.
    pub fn to_text(&self) -> String {
        self.render(Tile::display_char)
    }

    /// Renders the board in compact text notation, one line per rank.
    ///
    /// Unlike [`Board::to_text`], the output can be read back with
    /// [`Board::from_text_with_size`].
    pub fn to_compact(&self) -> String {
        self.render(Tile::symbol)
    }

    fn render(&self, symbol: impl Fn(&Tile) -> char) -> String {
        let mut res = String::with_capacity((self.width + 1) * self.height);
        for row in self.tiles.iter().rev() {
            res.extend(row.iter().map(&symbol));
            res.push('\n');
        }
        res
    }

    /// Width of the board, in files.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the board, in ranks.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Checks if a square lies on the board.
    #[inline]
    pub fn in_bounds(&self, square: Square) -> bool {
        square.is_within(self.width, self.height)
    }

    /// Returns the tile on a given square, or `None` if the square is off the board.
    #[inline]
    pub fn tile(&self, square: Square) -> Option<Tile> {
        self.tiles
            .get(square.rank)
            .and_then(|row| row.get(square.file))
            .copied()
    }

    /// Returns the tile on a given square.
    /// # Errors
    /// Fails with [`BoardError::OutOfBounds`] if the square is off the board.
    pub fn tile_checked(&self, square: Square) -> Result<Tile, BoardError> {
        self.tile(square).ok_or(self.out_of_bounds(square))
    }

    /// Replaces the tile on a given square.
    /// # Errors
    /// Fails with [`BoardError::OutOfBounds`] if the square is off the board.
    pub fn set_tile(&mut self, square: Square, tile: Tile) -> Result<(), BoardError> {
        let error = self.out_of_bounds(square);
        let slot = self
            .tiles
            .get_mut(square.rank)
            .and_then(|row| row.get_mut(square.file))
            .ok_or(error)?;
        *slot = tile;
        Ok(())
    }

    /// Builder-style variant of [`Board::set_tile`].
    /// # Errors
    /// Fails with [`BoardError::OutOfBounds`] if the square is off the board.
    pub fn with_tile(mut self, square: Square, tile: Tile) -> Result<Self, BoardError> {
        self.set_tile(square, tile)?;
        Ok(self)
    }

    /// Iterator over all occupied squares, rank by rank from the bottom-left corner.
    pub fn occupied_squares(&self) -> impl Iterator<Item = Square> + '_ {
        Square::squares_iter(self.width, self.height)
            .filter(|&sq| self.tile(sq).is_some_and(|tile| !tile.is_empty()))
    }

    pub(crate) fn out_of_bounds(&self, square: Square) -> BoardError {
        BoardError::OutOfBounds {
            rank: square.rank,
            file: square.file,
            width: self.width,
            height: self.height,
        }
    }
}
impl std::str::FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s)
    }
}
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_text())
    }
}
