//! lzw-codec: interactive LZW codec over a custom alphabet.
//!
//! Without arguments this prompts for an alphabet and then for messages,
//! printing the decimal code for each and checking that it decodes back.
//! `--bench` instead times encoding and decoding of one message.

mod config;
mod input_gen;
mod session;

use std::io;
use std::process::ExitCode;

use config::{Config, MessageSource, Mode};
use lzw_codec_core::{metrics::Metrics, Alphabet, Codec};
use session::Session;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let config = match Config::from_args(std::env::args_os()) {
        Ok(config) => config,
        Err(err) => err.exit(),
    };

    init_tracing(config.log_level.as_deref());

    if config.print_config {
        config.print();
    }

    let result = match &config.mode {
        Mode::Interactive => run_interactive(&config).map_err(|err| err.to_string()),
        Mode::Bench { message, repeat } => {
            run_bench(&config, message, *repeat).map_err(|err| err.to_string())
        }
    };

    match result {
        Ok(metrics) => {
            if config.print_metrics {
                metrics.print_summary();
                metrics.print_result();
            }
            if metrics.round_trip_mismatches > 0 {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(err) => {
            error!(error = %err, "run failed");
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr; `--log-level` wins over `RUST_LOG`, default `info`.
fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_interactive(config: &Config) -> io::Result<Metrics> {
    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), config.strategy);
    session.run(config.alphabet.as_deref())?;
    Ok(session.into_metrics())
}

/// Encode and decode one message `repeat` times, printing per-round timings.
fn run_bench(
    config: &Config,
    source: &MessageSource,
    repeat: usize,
) -> lzw_codec_core::Result<Metrics> {
    let alphabet = Alphabet::parse(config.bench_alphabet())?;
    let message = match source {
        MessageSource::Classic => input_gen::classic_message(10_000),
        MessageSource::Literal(text) => text.clone(),
        MessageSource::Generated(len) => input_gen::generate_message(config.seed, &alphabet, *len),
    };

    info!(
        strategy = %config.strategy,
        alphabet = %alphabet,
        symbols = message.chars().count(),
        repeat,
        "starting benchmark"
    );

    let mut codec = Codec::new(alphabet, config.strategy);
    let mut metrics = Metrics::new();

    for round in 1..=repeat {
        let report = codec.round_trip(&message)?;
        let matched = report.matches(&message);
        metrics.record_encode(message.chars().count(), report.code.len(), report.encode_time);
        metrics.record_decode(matched, report.decode_time);

        println!("Round {round}:");
        println!("  Encoded in {} ms", report.encode_time.as_millis());
        println!("  Decoded in {} ms", report.decode_time.as_millis());
        println!(
            "  Original size: {}; encoded size: {}",
            message.chars().count(),
            report.code.len()
        );
        println!("  {}", if matched { "Success" } else { "Fail" });
    }

    metrics.complete();
    Ok(metrics)
}
