use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use poker_hand::core::{Hand, InvalidCardError};
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "poker_hand",
    about = "Classify, compare and sort five card poker hands",
    long_about = "Hands are five space separated cards such as \"AH AC 5H 5C QS\".\n\
                  Ranks are 23456789TJQKA and suits are SCHD."
)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    logging: LogArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the type and name of each hand
    Classify {
        /// Hands to classify, each quoted as one argument
        #[arg(required = true)]
        hands: Vec<String>,
    },
    /// Compare two hands and print Win, Loss or Tie for the first one
    Compare { hand: String, other: String },
    /// Sort hands read one per line from a file, or stdin
    Sort {
        /// File with one hand per line. Reads stdin when missing.
        file: Option<PathBuf>,

        /// Strongest hand first
        #[arg(long)]
        desc: bool,
    },
}

/// Logging flags shared by every subcommand. Logs always go to stderr.
#[derive(clap::Args, Debug, Clone, Default)]
struct LogArgs {
    /// More log output, -v for debug and -vv for every hand built
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log warnings and errors
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Write log lines as JSON
    #[arg(long = "json-logs", global = true)]
    json: bool,
}

impl LogArgs {
    /// Level for this crate's events. Other crates stay at warn.
    fn level(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (true, _) => "warn",
            (false, 0) => "info",
            (false, 1) => "debug",
            (false, _) => "trace",
        }
    }

    /// `RUST_LOG` overrides the flags when set.
    fn init_tracing(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("warn,poker_hand={}", self.level())));

        let json = self
            .json
            .then(|| fmt::layer().with_writer(io::stderr).json());
        let text = (!self.json).then(|| fmt::layer().with_writer(io::stderr).compact());
        tracing_subscriber::registry()
            .with(filter)
            .with(json)
            .with(text)
            .init();
    }
}

#[derive(Debug, Error)]
enum PokerHandCliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid hand {hand:?}: {source}")]
    InvalidHand {
        hand: String,
        #[source]
        source: InvalidCardError,
    },

    #[error("Invalid hand on line {line}: {source}")]
    InvalidLine {
        line: usize,
        #[source]
        source: InvalidCardError,
    },
}

type Result<T> = std::result::Result<T, PokerHandCliError>;

fn parse_hand(text: &str) -> Result<Hand> {
    text.parse().map_err(|source| PokerHandCliError::InvalidHand {
        hand: text.to_string(),
        source,
    })
}

fn read_hands(reader: impl BufRead) -> Result<Vec<Hand>> {
    let mut hands = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let hand = line
            .parse::<Hand>()
            .map_err(|source| PokerHandCliError::InvalidLine {
                line: idx + 1,
                source,
            })?;
        hands.push(hand);
    }
    Ok(hands)
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Classify { hands } => {
            for text in hands {
                let hand = parse_hand(&text)?;
                println!(
                    "{}\t{}\t{}",
                    hand,
                    hand.hand_type().ordinal(),
                    hand.hand_name()
                );
            }
        }
        Command::Compare { hand, other } => {
            let hand = parse_hand(&hand)?;
            let other = parse_hand(&other)?;
            debug!(%hand, %other, "Comparing");
            println!("{}", hand.compare_with(&other));
        }
        Command::Sort { file, desc } => {
            let mut hands = match file {
                Some(path) => read_hands(BufReader::new(File::open(path)?))?,
                None => read_hands(io::stdin().lock())?,
            };
            info!(count = hands.len(), "Sorting hands");
            hands.sort();
            if desc {
                hands.reverse();
            }
            for hand in hands {
                println!("{hand}");
            }
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    args.logging.init_tracing();

    if let Err(e) = run(args.command) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_read_hands_skips_blank_lines() {
        let input = "2H 3H 4H 5H 6H\n\nAS AD AC AH JD\n   \n2H 4D 3C AS 5S\n";
        let hands = read_hands(Cursor::new(input)).unwrap();
        assert_eq!(3, hands.len());
        assert_eq!("AS 2H 3C 4D 5S", hands[2].to_string());
    }

    #[test]
    fn test_read_hands_reports_first_bad_line() {
        let input = "2H 3H 4H 5H 6H\n\n2H 3H 4H 5H 1H\nXX\n";
        let err = read_hands(Cursor::new(input)).unwrap_err();
        assert!(
            matches!(
                err,
                PokerHandCliError::InvalidLine {
                    line: 3,
                    source: InvalidCardError::UnexpectedValueChar('1'),
                }
            ),
            "{err:?}"
        );
    }

    #[test]
    fn test_read_hands_empty_input() {
        assert!(read_hands(Cursor::new("")).unwrap().is_empty());
    }

    #[test]
    fn test_parse_hand_error_names_the_hand() {
        let err = parse_hand("2H 3H").unwrap_err();
        assert_eq!(
            "Invalid hand \"2H 3H\": A hand needs exactly 5 cards, got 2",
            err.to_string()
        );
    }

    #[test]
    fn test_log_level_from_flags() {
        let mut args = LogArgs::default();
        assert_eq!("info", args.level());
        args.verbose = 1;
        assert_eq!("debug", args.level());
        args.verbose = 3;
        assert_eq!("trace", args.level());
        args.quiet = true;
        assert_eq!("warn", args.level());
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from(["poker_hand", "-v", "sort", "--desc"]).unwrap();
        assert_eq!(1, args.logging.verbose);
        assert!(matches!(args.command, Command::Sort { file: None, desc: true }));
    }
}
