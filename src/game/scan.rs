//! # Whole board move listing
//!
//! Generates the pseudo-legal moves of every occupied square. Move generation only
//! reads the board, so squares can be split across worker threads freely.

use std::time::Instant;

use super::{
    action::{Action, ActionList},
    board::{Board, BoardError},
    square::Square,
};

/// Moves of one occupied square.
pub type SquareMoves = (Square, ActionList);

impl Board {
    /// Generates the moves of every occupied square, in square order.
    /// # Errors
    /// Only fails if the board's own squares are out of bounds, which cannot
    /// happen on a well-formed board.
    pub fn moves_by_square(&self) -> Result<Vec<SquareMoves>, BoardError> {
        self.occupied_squares()
            .map(|sq| self.moves_from(sq).map(|moves| (sq, moves)))
            .collect()
    }

    /// Generates the moves of every piece on the board, for both sides.
    /// # Errors
    /// See [`Board::moves_by_square`].
    pub fn all_moves(&self) -> Result<ActionList, BoardError> {
        Ok(self
            .moves_by_square()?
            .into_iter()
            .flat_map(|(_, moves)| moves)
            .collect())
    }
}

/// Builder pattern to configure a scan of the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanConfig {
    workers: usize,
    show_board: bool,
    bench: bool,
}
impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            workers: num_cpus::get_physical(),
            show_board: true,
            bench: false,
        }
    }
}
impl ScanConfig {
    /// Creates a new scan configuration using as many threads as there are
    /// physical CPU cores.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of worker threads used to generate moves.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Whether to print the board before the move list.
    ///
    /// Should be disabled when trying to parse the output.
    pub fn show_board(mut self, value: bool) -> Self {
        self.show_board = value;
        self
    }

    /// Measures the time it takes to generate all moves.
    pub fn benchmark(mut self, value: bool) -> Self {
        self.bench = value;
        self
    }

    /// Number of worker threads the scan will use.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Generates the moves of every occupied square, splitting squares across
    /// worker threads. Results are returned in square order whatever the number
    /// of workers.
    /// # Errors
    /// See [`Board::moves_by_square`].
    pub fn collect(&self, board: &Board) -> Result<Vec<SquareMoves>, BoardError> {
        let squares: Vec<Square> = board.occupied_squares().collect();
        let workers = self.workers.clamp(1, squares.len().max(1));
        if workers == 1 {
            return board.moves_by_square();
        }

        let chunk_size = squares.len().div_ceil(workers);
        log::debug!(
            "Scanning {} squares with {workers} workers ({chunk_size} squares each)",
            squares.len()
        );

        std::thread::scope(|scope| {
            let handles: Vec<_> = squares
                .chunks(chunk_size)
                .map(|chunk| {
                    scope.spawn(move || {
                        chunk
                            .iter()
                            .map(|&sq| board.moves_from(sq).map(|moves| (sq, moves)))
                            .collect::<Result<Vec<_>, _>>()
                    })
                })
                .collect();

            let mut results = Vec::with_capacity(squares.len());
            for handle in handles {
                let chunk = handle
                    .join()
                    .unwrap_or_else(|panic| std::panic::resume_unwind(panic))?;
                results.extend(chunk);
            }
            Ok(results)
        })
    }

    /// Runs a scan on the given board, printing every move. Returns the total
    /// number of moves found.
    /// # Errors
    /// See [`Board::moves_by_square`].
    pub fn go(&self, board: &Board) -> Result<usize, BoardError> {
        if self.show_board {
            println!("{}", board.to_text());
        }

        let start = Instant::now();
        let results = self.collect(board)?;
        let elapsed = start.elapsed().as_secs_f64();

        let mut total = 0;
        for (square, moves) in &results {
            let tile = board.tile(*square).unwrap_or_default();
            println!("{tile} {square}: {} moves", moves.len());
            for mv in moves {
                println!("\t{}", mv.target());
            }
            total += moves.len();
        }
        println!("total: {total} moves");
        if self.bench {
            println!("\ttook {}", human_readable_time(elapsed));
        }

        Ok(total)
    }
}

/// Counts the moves landing on each square, indexed by `[rank][file]`.
pub fn target_counts(board: &Board, moves: &[Action]) -> Vec<Vec<usize>> {
    let mut counts = vec![vec![0; board.width()]; board.height()];
    for mv in moves {
        let target = mv.target();
        if let Some(count) = counts
            .get_mut(target.rank)
            .and_then(|row| row.get_mut(target.file))
        {
            *count += 1;
        }
    }
    counts
}

fn human_readable_time(secs: f64) -> String {
    if secs < 0.000_001 {
        format!("{:.3}ns", secs * 1_000_000_000.)
    } else if secs < 0.001 {
        format!("{:.3}μs", secs * 1_000_000.)
    } else if secs < 1. {
        format!("{:.3}ms", secs * 1_000.)
    } else {
        format!("{secs:.3}s")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parallel_scan_matches_sequential() {
        let board = Board::from_text(
            "r...k..r
             pp..qppp
             ..n..n..
             ...pP...
             .b.P....
             ..N.BN..
             PPPQ.PPP
             R...K..R",
        )
        .unwrap();
        let sequential = board.moves_by_square().unwrap();
        for workers in [1, 2, 3, 8, 64] {
            let parallel = ScanConfig::new()
                .with_workers(workers)
                .show_board(false)
                .collect(&board)
                .unwrap();
            assert_eq!(parallel, sequential, "mismatch with {workers} workers");
        }
    }

    #[test]
    fn initial_position_totals() {
        let board = Board::initial();
        assert_eq!(board.all_moves().unwrap().len(), 40);
        assert_eq!(
            ScanConfig::new()
                .with_workers(4)
                .show_board(false)
                .go(&board)
                .unwrap(),
            40
        );
    }

    #[test]
    fn empty_board_has_nothing_to_scan() {
        let board = Board::empty(5, 5);
        assert!(ScanConfig::new().collect(&board).unwrap().is_empty());
        assert!(board.all_moves().unwrap().is_empty());
    }

    #[test]
    fn workers_are_at_least_one() {
        assert_eq!(ScanConfig::new().with_workers(0).workers(), 1);
    }

    #[test]
    fn counts_targets() {
        let board = Board::initial();
        let counts = target_counts(&board, &board.all_moves().unwrap());
        // Pawn pushes and both knights reach the third rank.
        assert_eq!(counts[2], vec![2, 1, 2, 1, 1, 2, 1, 2]);
        assert_eq!(counts[3], vec![1; 8]);
        assert_eq!(counts[0], vec![0; 8]);
    }
}
