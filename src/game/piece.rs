//! Piece types encoding.

use super::colour::Colour;

/// Total number of different piece kinds (6).
pub const NUM_PIECES: usize = 6;

const PIECE_SYMBOLS: [char; 12] = ['P', 'R', 'N', 'B', 'Q', 'K', 'p', 'r', 'n', 'b', 'q', 'k'];
const PIECE_SYMBOLS_UNICODE: [char; 12] =
    ['♙', '♖', '♘', '♗', '♕', '♔', '♟', '♜', '♞', '♝', '♛', '♚'];

/// The kind of a piece, one of Pawn, Rook, Knight, Bishop, Queen or King. Usually
/// with supplementary information about the colour of the piece, in the form of
/// [`Piece`].
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum PieceKind {
    Pawn = 0,
    Rook = 1,
    Knight = 2,
    Bishop = 3,
    Queen = 4,
    King = 5,
}
impl PieceKind {
    /// Checks if this piece kind moves by casting rays (rooks, bishops and queens).
    #[inline(always)]
    pub fn is_slider(self) -> bool {
        matches!(self, Self::Rook | Self::Bishop | Self::Queen)
    }

    /// Iterator over all piece kinds.
    pub fn iter() -> impl Iterator<Item = Self> {
        [
            PieceKind::Pawn,
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
        ]
        .into_iter()
    }
}
impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", PIECE_SYMBOLS[NUM_PIECES + *self as usize])
    }
}

/// Complete set of information for identifying a piece (colour and kind).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Piece {
    pub kind: PieceKind,
    pub colour: Colour,
}
impl Piece {
    /// Creates a new `kind` piece of the given `colour`.
    pub const fn new(kind: PieceKind, colour: Colour) -> Self {
        Self { kind, colour }
    }

    /// Returns the piece's symbol, uppercase for white and lowercase for black.
    pub fn symbol(&self) -> char {
        PIECE_SYMBOLS[self.colour as usize * NUM_PIECES + self.kind as usize]
    }

    /// Returns the piece's Unicode symbol.
    pub fn unicode_symbol(&self) -> char {
        PIECE_SYMBOLS_UNICODE[self.colour as usize * NUM_PIECES + self.kind as usize]
    }

    /// Finds the piece matching an ASCII or Unicode symbol.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        let index = PIECE_SYMBOLS
            .iter()
            .position(|&c| c == symbol)
            .or_else(|| PIECE_SYMBOLS_UNICODE.iter().position(|&c| c == symbol))?;
        let colour = if index < NUM_PIECES {
            Colour::White
        } else {
            Colour::Black
        };
        PieceKind::iter()
            .nth(index % NUM_PIECES)
            .map(|kind| Self::new(kind, colour))
    }
}
impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn symbols_follow_colour_case() {
        assert_eq!(Piece::new(PieceKind::Knight, Colour::White).symbol(), 'N');
        assert_eq!(Piece::new(PieceKind::Knight, Colour::Black).symbol(), 'n');
        assert_eq!(Piece::new(PieceKind::Rook, Colour::Black).unicode_symbol(), '♜');
        assert_eq!(Piece::new(PieceKind::King, Colour::White).unicode_symbol(), '♔');
    }

    #[test]
    fn from_symbol_inverts_both_tables() {
        for colour in Colour::iter() {
            for kind in PieceKind::iter() {
                let piece = Piece::new(kind, colour);
                assert_eq!(Piece::from_symbol(piece.symbol()), Some(piece));
                assert_eq!(Piece::from_symbol(piece.unicode_symbol()), Some(piece));
            }
        }
        assert_eq!(Piece::from_symbol('x'), None);
        assert_eq!(Piece::from_symbol('.'), None);
    }

    #[test]
    fn sliders() {
        let sliders: Vec<_> = PieceKind::iter().filter(|k| k.is_slider()).collect();
        assert_eq!(
            sliders,
            vec![PieceKind::Rook, PieceKind::Bishop, PieceKind::Queen]
        );
    }
}
