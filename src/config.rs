use crate::prelude::*;

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;

pub const DEFAULT_SCRAMBLE_LENGTH: usize = 20;

/// Scrambles a pocket cube and finds a shortest solution
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Number of random moves to scramble with
    #[arg(long, default_value_t = DEFAULT_SCRAMBLE_LENGTH, conflicts_with = "monkey")]
    length: usize,
    /// Pick the scramble length at random, below this many moves
    #[arg(long, value_name = "MAX", num_args = 0..=1, default_missing_value = "200")]
    monkey: Option<usize>,
    /// Seed for the random scramble
    #[arg(long)]
    seed: Option<u64>,
    /// Log search progress
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,
    /// Only log warnings
    #[arg(short, long)]
    quiet: bool,
    /// Explicit scramble, e.g. F L' D; used instead of a random one
    moves: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrambleLength {
    Fixed(usize),
    /// Uniform in `0..max`.
    Below(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrambleSource {
    Given(Vec<Move>),
    Random {
        length: ScrambleLength,
        seed: Option<u64>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub scramble: ScrambleSource,
    pub log_level: LevelFilter,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Config> {
        Cli::parse().into_config()
    }

    #[cfg(test)]
    pub fn try_parse_from<I, T>(args: I) -> anyhow::Result<Config>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Cli::try_parse_from(args)?.into_config()
    }
}

impl Cli {
    fn into_config(self) -> anyhow::Result<Config> {
        let log_level = match (self.verbose, self.quiet) {
            (true, _) => LevelFilter::Debug,
            (_, true) => LevelFilter::Warn,
            _ => LevelFilter::Info,
        };

        let mut moves = Vec::new();
        for arg in &self.moves {
            moves.extend(
                Move::parse_sequence(arg).with_context(|| format!("Invalid scramble {}", arg))?,
            );
        }

        let scramble = if !moves.is_empty() {
            ScrambleSource::Given(moves)
        } else {
            let length = match self.monkey {
                Some(0) => anyhow::bail!("--monkey needs a positive maximum"),
                Some(max) => ScrambleLength::Below(max),
                None => ScrambleLength::Fixed(self.length),
            };
            ScrambleSource::Random {
                length,
                seed: self.seed,
            }
        };

        Ok(Config {
            scramble,
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &str) -> anyhow::Result<Config> {
        Config::try_parse_from(std::iter::once("pocketcube").chain(args.split_whitespace()))
    }

    #[test]
    fn cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_random_scramble() {
        let config = parse("").unwrap();
        assert_eq!(
            config.scramble,
            ScrambleSource::Random {
                length: ScrambleLength::Fixed(DEFAULT_SCRAMBLE_LENGTH),
                seed: None
            }
        );
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn length_and_seed() {
        let config = parse("--length 8 --seed 3 -v").unwrap();
        assert_eq!(
            config.scramble,
            ScrambleSource::Random {
                length: ScrambleLength::Fixed(8),
                seed: Some(3)
            }
        );
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn equals_form() {
        let config = parse("--length=5 --quiet").unwrap();
        assert_eq!(
            config.scramble,
            ScrambleSource::Random {
                length: ScrambleLength::Fixed(5),
                seed: None
            }
        );
        assert_eq!(config.log_level, LevelFilter::Warn);
    }

    #[test]
    fn monkey_picks_length_below_max() {
        let config = parse("--monkey").unwrap();
        assert_eq!(
            config.scramble,
            ScrambleSource::Random {
                length: ScrambleLength::Below(200),
                seed: None
            }
        );

        let config = parse("--seed 9 --monkey=12").unwrap();
        assert_eq!(
            config.scramble,
            ScrambleSource::Random {
                length: ScrambleLength::Below(12),
                seed: Some(9)
            }
        );
    }

    #[test]
    fn given_moves_win() {
        let config = parse("--length 8 F L' D").unwrap();
        assert_eq!(
            config.scramble,
            ScrambleSource::Given(Move::parse_sequence("F L' D").unwrap())
        );
    }

    #[test]
    fn quoted_sequence() {
        let config = Config::try_parse_from(["pocketcube", "F D'", "L"]).unwrap();
        assert_eq!(
            config.scramble,
            ScrambleSource::Given(Move::parse_sequence("F D' L").unwrap())
        );
    }

    #[test]
    fn help_comes_from_clap() {
        let err = parse("--help").unwrap_err();
        let err = err.downcast::<clap::Error>().unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn errors() {
        assert!(parse("--length").is_err());
        assert!(parse("--length many").is_err());
        assert!(parse("--seed -1").is_err());
        assert!(parse("--fast").is_err());
        assert!(parse("-v -q").is_err());
        assert!(parse("--length 3 --monkey").is_err());
        assert!(parse("--monkey=0").is_err());
        assert!(parse("F R").is_err());
    }
}
