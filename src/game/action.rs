//! # Actions (or moves)

use super::square::Square;

/// List of actions generated for a square or a board.
pub type ActionList = Vec<Action>;

/// Describes a move using a from-to approach.
///
/// Actions carry no capture, promotion or castling information: two actions are
/// equal exactly when both their endpoints are.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord, Debug)]
pub struct Action {
    origin: Square,
    target: Square,
}
impl Action {
    /// Creates a new move from `origin` to `target`.
    #[inline(always)]
    pub const fn new(origin: Square, target: Square) -> Self {
        Self { origin, target }
    }

    /// Returns the square the move originates from.
    #[inline(always)]
    pub const fn origin(self) -> Square {
        self.origin
    }

    /// Returns the square the move targets.
    #[inline(always)]
    pub const fn target(self) -> Square {
        self.target
    }
}
impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.origin, self.target)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn equality_needs_both_endpoints() {
        let a = Action::new(Square::new(0, 0), Square::new(2, 1));
        assert_eq!(a, Action::new(Square::new(0, 0), Square::new(2, 1)));
        assert_ne!(a, Action::new(Square::new(0, 0), Square::new(1, 2)));
        assert_ne!(a, Action::new(Square::new(2, 1), Square::new(0, 0)));
    }

    #[test]
    fn display() {
        let a = Action::new(Square::new(1, 4), Square::new(3, 4));
        assert_eq!(a.to_string(), "(1, 4) -> (3, 4)");
    }
}
