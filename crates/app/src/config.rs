//! Configuration for the lzw-codec application.
//!
//! Handles parsing command-line arguments and resolving defaults (including
//! a seed for generated benchmark input that is reproducible when printed).
//!
//! # Philosophy
//!
//! The tool should work with ZERO arguments: it starts the interactive
//! prompt loop. `--bench` switches to a one-shot timing run whose workload
//! defaults to the classic "tobeornottobeor" message.

use clap::Parser;
use lzw_codec_core::EncoderKind;

/// Alphabet of the default benchmark message.
pub const CLASSIC_ALPHABET: &str = "benort";

/// Default length of a generated benchmark message.
pub const DEFAULT_GENERATED_LEN: usize = 150_004;

/// Command-line arguments as clap sees them.
#[derive(Parser, Debug, Clone)]
#[command(name = "lzw-codec")]
#[command(about = "LZW codec over a custom alphabet with decimal code output")]
struct Cli {
    /// Encoder strategy: hash (binary search over block length) or trie (prefix tree)
    #[arg(long, default_value_t = EncoderKind::Trie)]
    strategy: EncoderKind,

    /// Alphabet to use; skips the first alphabet prompt
    #[arg(long)]
    alphabet: Option<String>,

    /// Run a timing benchmark instead of the interactive prompt
    #[arg(long)]
    bench: bool,

    /// Benchmark message (default: "tobeornottobeor" x 10000 + "tobe")
    #[arg(long, conflicts_with = "generate")]
    message: Option<String>,

    /// Benchmark with a generated message of this many symbols
    #[arg(long, value_name = "LEN")]
    generate: Option<usize>,

    /// Random seed for generated input
    #[arg(long)]
    seed: Option<u64>,

    /// Benchmark iterations
    #[arg(long, default_value_t = 1)]
    repeat: usize,

    /// Print resolved configuration
    #[arg(long)]
    print_config: bool,

    /// Don't print metrics summary
    #[arg(long)]
    no_metrics: bool,

    /// Log filter (overrides RUST_LOG)
    #[arg(long, env = "LZW_LOG_LEVEL")]
    log_level: Option<String>,
}

/// Where the benchmark message comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageSource {
    /// The "tobeornottobeor" workload over `CLASSIC_ALPHABET`
    Classic,
    /// A message given on the command line
    Literal(String),
    /// A seeded message of this many symbols
    Generated(usize),
}

/// What the binary should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Prompt for alphabets and messages until the user stops
    Interactive,
    /// Time `repeat` encode/decode rounds of one message
    Bench {
        message: MessageSource,
        repeat: usize,
    },
}

/// Complete configuration for a run.
#[derive(Debug, Clone)]
pub struct Config {
    // === Codec ===
    /// Encoder strategy
    pub strategy: EncoderKind,

    /// Alphabet chosen up front (None = ask, or the classic one for benches)
    pub alphabet: Option<String>,

    // === Run ===
    /// Interactive loop or benchmark
    pub mode: Mode,

    /// Seed for generated input
    pub seed: u64,

    // === Behavior ===
    /// Whether to print detailed config
    pub print_config: bool,

    /// Whether to print detailed metrics summary
    pub print_metrics: bool,

    /// Explicit log filter, if any
    pub log_level: Option<String>,
}

impl Config {
    /// Parse configuration from command-line arguments (program name first).
    ///
    /// If no seed is provided, one is derived from the clock and printed
    /// with the config so generated runs can be repeated.
    pub fn from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args)?;

        // Determine seed (explicit or time-based)
        let seed = cli.seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|t| t.as_millis() as u64)
                .unwrap_or_default()
        });

        let mode = if cli.bench {
            let message = match (cli.message, cli.generate) {
                (Some(text), _) => MessageSource::Literal(text),
                (None, Some(len)) => MessageSource::Generated(len),
                // The classic message only fits the classic alphabet.
                (None, None) if cli.alphabet.is_some() => {
                    MessageSource::Generated(DEFAULT_GENERATED_LEN)
                }
                (None, None) => MessageSource::Classic,
            };
            Mode::Bench {
                message,
                repeat: cli.repeat.max(1),
            }
        } else {
            Mode::Interactive
        };

        Ok(Config {
            strategy: cli.strategy,
            alphabet: cli.alphabet,
            mode,
            seed,
            print_config: cli.print_config,
            print_metrics: !cli.no_metrics,
            log_level: cli.log_level,
        })
    }

    /// Alphabet a benchmark run encodes over.
    pub fn bench_alphabet(&self) -> &str {
        self.alphabet.as_deref().unwrap_or(CLASSIC_ALPHABET)
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        println!("Strategy: {}", self.strategy);
        println!(
            "Alphabet: {}",
            self.alphabet.as_deref().map_or("(prompt)".to_string(), |a| format!("{a:?}"))
        );
        println!("Seed: {}", self.seed);
        match &self.mode {
            Mode::Interactive => println!("Mode: interactive"),
            Mode::Bench { message, repeat } => {
                println!("Mode: bench ({repeat} rounds)");
                match message {
                    MessageSource::Classic => println!("Message: classic tobeornottobeor"),
                    MessageSource::Literal(text) => {
                        println!("Message: literal, {} symbols", text.chars().count())
                    }
                    MessageSource::Generated(len) => println!("Message: generated, {len} symbols"),
                }
            }
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        let mut argv = vec!["lzw-codec"];
        argv.extend_from_slice(args);
        Config::from_args(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]);
        assert_eq!(config.strategy, EncoderKind::Trie);
        assert_eq!(config.mode, Mode::Interactive);
        assert!(config.alphabet.is_none());
        assert!(config.print_metrics);
        assert!(!config.print_config);
    }

    #[test]
    fn test_strategy_and_seed() {
        let config = parse(&["--strategy", "hash", "--seed", "42"]);
        assert_eq!(config.strategy, EncoderKind::Hash);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_bench_classic() {
        let config = parse(&["--bench", "--repeat", "3"]);
        assert_eq!(
            config.mode,
            Mode::Bench {
                message: MessageSource::Classic,
                repeat: 3
            }
        );
        assert_eq!(config.bench_alphabet(), CLASSIC_ALPHABET);
    }

    #[test]
    fn test_bench_with_custom_alphabet_generates() {
        let config = parse(&["--bench", "--alphabet", "xyz"]);
        assert_eq!(
            config.mode,
            Mode::Bench {
                message: MessageSource::Generated(DEFAULT_GENERATED_LEN),
                repeat: 1
            }
        );
        assert_eq!(config.bench_alphabet(), "xyz");
    }

    #[test]
    fn test_bench_literal_message() {
        let config = parse(&["--bench", "--message", "tobe"]);
        assert_eq!(
            config.mode,
            Mode::Bench {
                message: MessageSource::Literal("tobe".to_string()),
                repeat: 1
            }
        );
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(Config::from_args(["lzw-codec", "--strategy", "btree"]).is_err());
        assert!(Config::from_args(["lzw-codec", "--message", "a", "--generate", "5"]).is_err());
        assert!(Config::from_args(["lzw-codec", "--bogus"]).is_err());
    }
}
