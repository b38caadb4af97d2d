//! Board coordinates and the directions pieces move along.
//!
//! Coordinates are counted from the bottom-left corner of the board, rank
//! (the row) first and file (the column) second.

/// A square of the board, addressed by rank and file.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Square {
    pub rank: usize,
    pub file: usize,
}
impl Square {
    /// Instantiates a new square based on rank and file.
    #[inline]
    pub const fn new(rank: usize, file: usize) -> Self {
        Self { rank, file }
    }

    /// Checks if the square lies on a `width` by `height` board.
    #[inline]
    pub const fn is_within(self, width: usize, height: usize) -> bool {
        self.rank < height && self.file < width
    }

    /// Translates this square by a given delta.
    ///
    /// Returns `None` if the translation would go out of a `width` by `height` board.
    #[inline]
    pub fn translate(self, delta: Delta, width: usize, height: usize) -> Option<Self> {
        let rank = self.rank.checked_add_signed(delta.rank)?;
        let file = self.file.checked_add_signed(delta.file)?;
        Some(Self::new(rank, file)).filter(|sq| sq.is_within(width, height))
    }

    /// An iterator over all squares of a `width` by `height` board, rank by
    /// rank from the bottom-left corner.
    pub fn squares_iter(width: usize, height: usize) -> impl Iterator<Item = Self> {
        (0..height).flat_map(move |rank| (0..width).map(move |file| Self::new(rank, file)))
    }

    /// An iterator over all squares in reading order: top rank first, each
    /// rank from left to right.
    pub fn squares_text_iter(width: usize, height: usize) -> impl Iterator<Item = Self> {
        (0..height)
            .rev()
            .flat_map(move |rank| (0..width).map(move |file| Self::new(rank, file)))
    }
}
impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.rank, self.file)
    }
}
impl From<(usize, usize)> for Square {
    fn from((rank, file): (usize, usize)) -> Self {
        Self::new(rank, file)
    }
}

/// Deltas represent directions in which pieces can move, as a rank offset and
/// a file offset.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct Delta {
    pub rank: isize,
    pub file: isize,
}
impl Delta {
    pub const NORTH: Self = Self::new(1, 0);
    pub const SOUTH: Self = Self::new(-1, 0);
    pub const EAST: Self = Self::new(0, 1);
    pub const WEST: Self = Self::new(0, -1);
    pub const NORTH_EAST: Self = Self::new(1, 1);
    pub const NORTH_WEST: Self = Self::new(1, -1);
    pub const SOUTH_EAST: Self = Self::new(-1, 1);
    pub const SOUTH_WEST: Self = Self::new(-1, -1);

    pub const KNIGHT_DELTAS: [Self; 8] = [
        Self::new(2, 1),
        Self::new(1, 2),
        Self::new(-1, 2),
        Self::new(-2, 1),
        Self::new(-2, -1),
        Self::new(-1, -2),
        Self::new(1, -2),
        Self::new(2, -1),
    ];
    pub const ORTHOGONAL_DELTAS: [Self; 4] = [Self::NORTH, Self::EAST, Self::SOUTH, Self::WEST];
    pub const DIAGONAL_DELTAS: [Self; 4] = [
        Self::NORTH_EAST,
        Self::SOUTH_EAST,
        Self::SOUTH_WEST,
        Self::NORTH_WEST,
    ];
    pub const QUEEN_DELTAS: [Self; 8] = [
        Self::NORTH,
        Self::NORTH_EAST,
        Self::EAST,
        Self::SOUTH_EAST,
        Self::SOUTH,
        Self::SOUTH_WEST,
        Self::WEST,
        Self::NORTH_WEST,
    ];
    /// Kings step once in every direction a queen slides along.
    pub const KING_DELTAS: [Self; 8] = Self::QUEEN_DELTAS;

    #[inline]
    pub const fn new(rank: isize, file: isize) -> Self {
        Self { rank, file }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn translate_stays_on_board() {
        let corner = Square::new(0, 0);
        assert_eq!(corner.translate(Delta::SOUTH, 8, 8), None);
        assert_eq!(corner.translate(Delta::WEST, 8, 8), None);
        assert_eq!(
            corner.translate(Delta::NORTH_EAST, 8, 8),
            Some(Square::new(1, 1))
        );

        let top_right = Square::new(7, 7);
        assert_eq!(top_right.translate(Delta::NORTH, 8, 8), None);
        assert_eq!(top_right.translate(Delta::EAST, 8, 8), None);
        assert_eq!(top_right.translate(Delta::EAST, 9, 8), Some(Square::new(7, 8)));
    }

    #[test]
    fn text_order_starts_top_left() {
        let squares: Vec<_> = Square::squares_text_iter(3, 2).collect();
        assert_eq!(
            squares,
            vec![
                Square::new(1, 0),
                Square::new(1, 1),
                Square::new(1, 2),
                Square::new(0, 0),
                Square::new(0, 1),
                Square::new(0, 2),
            ]
        );
        assert_eq!(Square::squares_iter(3, 2).count(), 6);
        assert_eq!(Square::squares_iter(3, 2).next(), Some(Square::new(0, 0)));
    }

    #[test]
    fn delta_sets_are_distinct() {
        for set in [&Delta::KNIGHT_DELTAS[..], &Delta::QUEEN_DELTAS[..]] {
            for (i, a) in set.iter().enumerate() {
                assert!(set[i + 1..].iter().all(|b| a != b));
            }
        }
        assert!(Delta::ORTHOGONAL_DELTAS
            .iter()
            .chain(Delta::DIAGONAL_DELTAS.iter())
            .all(|d| Delta::QUEEN_DELTAS.contains(d)));
    }
}
