use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tilechess::game::{
    board::{Board, BoardError, DEFAULT_HEIGHT, DEFAULT_WIDTH},
    scan::ScanConfig,
    square::Square,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Arguments {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Prints a board (DEFAULT)
    Show {
        #[command(flatten)]
        board: BoardSource,
        /// Prints the compact notation instead of chess glyphs
        #[arg(long)]
        compact: bool,
    },
    /// Lists the pseudo-legal moves of the piece on a square
    Moves {
        /// Rank of the square, counted from the bottom of the board
        rank: usize,
        /// File of the square, counted from the left of the board
        file: usize,
        #[command(flatten)]
        board: BoardSource,
    },
    /// Lists the pseudo-legal moves of every piece on the board
    Scan {
        #[command(flatten)]
        board: BoardSource,
        /// Number of worker threads, defaults to the number of physical cores
        #[arg(short, long)]
        workers: Option<usize>,
        /// Show timing information
        #[arg(long)]
        bench: bool,
        /// Does not show the board
        #[arg(long)]
        no_board: bool,
    },
}

/// Where the board comes from. Without any text or file, the initial position is used.
#[derive(Args, Debug, Default)]
struct BoardSource {
    /// Board in compact notation, top rank first
    #[arg(short, long, conflicts_with = "input")]
    board: Option<String>,
    /// File containing a board in compact notation
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Width of the board
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,
    /// Height of the board
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,
}
impl BoardSource {
    fn load(&self) -> Result<Board, CliError> {
        let text = match (&self.board, &self.input) {
            (Some(text), _) => text.clone(),
            (None, Some(path)) => std::fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.clone(),
                source,
            })?,
            (None, None) => return Ok(Board::initial()),
        };
        log::info!("Loading a {}x{} board", self.width, self.height);
        Ok(Board::from_text_with_size(&text, self.width, self.height)?)
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error("Could not read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Board(#[from] BoardError),
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Show { board, compact } => {
            let board = board.load()?;
            if compact {
                print!("{}", board.to_compact())
            } else {
                print!("{}", board.to_text())
            }
        }
        Command::Moves { rank, file, board } => {
            let board = board.load()?;
            for mv in board.moves_from(Square::new(rank, file))? {
                println!("{mv}")
            }
        }
        Command::Scan {
            board,
            workers,
            bench,
            no_board,
        } => {
            let board = board.load()?;
            let mut config = ScanConfig::new().show_board(!no_board).benchmark(bench);
            if let Some(workers) = workers {
                config = config.with_workers(workers)
            }
            config.go(&board)?;
        }
    }
    Ok(())
}

pub fn main() {
    let args = Arguments::parse();
    env_logger::init();

    let command = args.command.unwrap_or(Command::Show {
        board: BoardSource {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            ..Default::default()
        },
        compact: false,
    });
    if let Err(e) = run(command) {
        log::error!("{e}");
        eprintln!("error: {e}");
        std::process::exit(1)
    }
}
