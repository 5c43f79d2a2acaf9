//! Metrics collection and reporting for codec runs.
//!
//! This module provides observable insights into codec behavior:
//! - Volume (symbols in, code digits out)
//! - Compression ratio
//! - Rejected messages and round-trip mismatches
//! - Encode and decode timing
//!
//! # Design
//!
//! The codec itself never records anything. Callers (the interactive
//! harness, the benchmark runner) time each call and feed the results in
//! through the `record_*` methods.
//!
//! # Thread Safety
//!
//! The `Metrics` struct is NOT thread-safe. For multi-threaded use, wrap in
//! `Arc<Mutex<Metrics>>` or keep per-thread metrics and `merge` them.

use std::time::{Duration, Instant};

/// Accumulated counters and timings for a sequence of codec calls.
#[derive(Debug, Clone)]
pub struct Metrics {
    // === Timing ===
    /// When the run started
    pub start_time: Instant,

    /// When the run ended (set on completion)
    pub end_time: Option<Instant>,

    /// Total time spent inside encode calls
    pub encode_time: Duration,

    /// Total time spent inside decode calls
    pub decode_time: Duration,

    // === Volume ===
    /// Messages successfully encoded
    pub messages_encoded: u64,

    /// Messages rejected by the encoder (unknown symbols)
    pub messages_rejected: u64,

    /// Symbols across all encoded messages
    pub symbols_in: u64,

    /// Digits across all produced code strings
    pub code_digits_out: u64,

    // === Verification ===
    /// Code strings successfully decoded
    pub codes_decoded: u64,

    /// Round trips that failed to decode or decoded to different text
    pub round_trip_mismatches: u64,
}

impl Metrics {
    /// Create new metrics with start time set to now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            end_time: None,
            encode_time: Duration::ZERO,
            decode_time: Duration::ZERO,
            messages_encoded: 0,
            messages_rejected: 0,
            symbols_in: 0,
            code_digits_out: 0,
            codes_decoded: 0,
            round_trip_mismatches: 0,
        }
    }

    /// Record one successful encode.
    pub fn record_encode(&mut self, symbols: usize, digits: usize, elapsed: Duration) {
        self.messages_encoded += 1;
        self.symbols_in += symbols as u64;
        self.code_digits_out += digits as u64;
        self.encode_time += elapsed;
    }

    /// Record one successful decode and whether it reproduced the message.
    pub fn record_decode(&mut self, matched: bool, elapsed: Duration) {
        self.codes_decoded += 1;
        self.decode_time += elapsed;
        if !matched {
            self.round_trip_mismatches += 1;
        }
    }

    /// Record a round trip whose own code failed to decode.
    pub fn record_failed_round_trip(&mut self) {
        self.round_trip_mismatches += 1;
    }

    /// Record a message the codec refused.
    pub fn record_rejected(&mut self) {
        self.messages_rejected += 1;
    }

    /// Fold another set of counters into this one.
    pub fn merge(&mut self, other: &Metrics) {
        self.encode_time += other.encode_time;
        self.decode_time += other.decode_time;
        self.messages_encoded += other.messages_encoded;
        self.messages_rejected += other.messages_rejected;
        self.symbols_in += other.symbols_in;
        self.code_digits_out += other.code_digits_out;
        self.codes_decoded += other.codes_decoded;
        self.round_trip_mismatches += other.round_trip_mismatches;
    }

    /// Mark the run as complete.
    pub fn complete(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// Get total duration (or current elapsed if not complete).
    pub fn duration(&self) -> Duration {
        match self.end_time {
            Some(end) => end.duration_since(self.start_time),
            None => self.start_time.elapsed(),
        }
    }

    /// Compute compression ratio (code digits / message symbols).
    ///
    /// Returns 0.0 if nothing was encoded.
    pub fn compression_ratio(&self) -> f64 {
        if self.symbols_in == 0 {
            0.0
        } else {
            self.code_digits_out as f64 / self.symbols_in as f64
        }
    }

    /// Encode throughput in symbols/second.
    pub fn encode_throughput(&self) -> f64 {
        let secs = self.encode_time.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.symbols_in as f64 / secs
        }
    }

    /// Whether every decoded message matched and nothing was rejected.
    pub fn is_clean(&self) -> bool {
        self.round_trip_mismatches == 0 && self.messages_rejected == 0
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("\n=== Codec Summary ===");
        println!("Duration: {} ms", self.duration().as_millis());
        println!();

        println!("=== Volume ===");
        println!("Messages encoded: {}", self.messages_encoded);
        println!("Messages rejected: {}", self.messages_rejected);
        println!("Symbols in: {}", self.symbols_in);
        println!("Code digits out: {}", self.code_digits_out);
        println!("Ratio: {:.1}%", self.compression_ratio() * 100.0);
        println!();

        println!("=== Verification ===");
        println!("Codes decoded: {}", self.codes_decoded);
        println!("Round-trip mismatches: {}", self.round_trip_mismatches);
        println!();

        println!("=== Performance ===");
        println!("Encode time: {:.3} ms", self.encode_time.as_secs_f64() * 1000.0);
        println!("Decode time: {:.3} ms", self.decode_time.as_secs_f64() * 1000.0);
        println!("Encode throughput: {:.2} Msymbols/s", self.encode_throughput() / 1_000_000.0);
        println!();
    }

    /// Print just the final result (pass/fail).
    pub fn print_result(&self) {
        if self.round_trip_mismatches > 0 {
            println!("✗ {} round trips did not reproduce the message", self.round_trip_mismatches);
        } else {
            println!("✓ {} messages round-tripped", self.codes_decoded);
            println!(
                "  {} symbols -> {} digits in {} ms",
                self.symbols_in,
                self.code_digits_out,
                self.duration().as_millis()
            );
        }
    }

    /// Export metrics as a simple text format (for parsing/testing).
    pub fn export_text(&self) -> String {
        format!(
            "duration_ms={}\n\
             messages_encoded={}\n\
             messages_rejected={}\n\
             symbols_in={}\n\
             code_digits_out={}\n\
             compression_ratio={:.4}\n\
             codes_decoded={}\n\
             round_trip_mismatches={}\n\
             encode_us={}\n\
             decode_us={}\n",
            self.duration().as_millis(),
            self.messages_encoded,
            self.messages_rejected,
            self.symbols_in,
            self.code_digits_out,
            self.compression_ratio(),
            self.codes_decoded,
            self.round_trip_mismatches,
            self.encode_time.as_micros(),
            self.decode_time.as_micros(),
        )
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new();
        assert!(metrics.end_time.is_none());
        assert!(metrics.duration().as_millis() < 100); // Should be recent
        assert!(metrics.is_clean());
    }

    #[test]
    fn test_compression_ratio() {
        let mut metrics = Metrics::new();
        assert_eq!(metrics.compression_ratio(), 0.0);

        metrics.record_encode(1000, 750, Duration::from_millis(1));
        assert_eq!(metrics.compression_ratio(), 0.75);
    }

    #[test]
    fn test_record_decode() {
        let mut metrics = Metrics::new();
        metrics.record_decode(true, Duration::from_millis(2));
        metrics.record_decode(false, Duration::from_millis(3));

        assert_eq!(metrics.codes_decoded, 2);
        assert_eq!(metrics.round_trip_mismatches, 1);
        assert_eq!(metrics.decode_time, Duration::from_millis(5));
        assert!(!metrics.is_clean());
    }

    #[test]
    fn test_failed_round_trip() {
        let mut metrics = Metrics::new();
        metrics.record_failed_round_trip();

        assert_eq!(metrics.codes_decoded, 0);
        assert_eq!(metrics.round_trip_mismatches, 1);
        assert!(!metrics.is_clean());
    }

    #[test]
    fn test_merge() {
        let mut a = Metrics::new();
        a.record_encode(10, 4, Duration::from_micros(5));
        a.record_rejected();

        let mut b = Metrics::new();
        b.record_encode(20, 6, Duration::from_micros(7));

        a.merge(&b);
        assert_eq!(a.messages_encoded, 2);
        assert_eq!(a.messages_rejected, 1);
        assert_eq!(a.symbols_in, 30);
        assert_eq!(a.code_digits_out, 10);
        assert_eq!(a.encode_time, Duration::from_micros(12));
    }

    #[test]
    fn test_export_text() {
        let mut metrics = Metrics::new();
        metrics.record_encode(1000, 400, Duration::from_micros(250));
        metrics.record_decode(true, Duration::from_micros(100));

        let text = metrics.export_text();
        assert!(text.contains("symbols_in=1000"));
        assert!(text.contains("code_digits_out=400"));
        assert!(text.contains("compression_ratio=0.4000"));
        assert!(text.contains("encode_us=250"));
        assert!(text.contains("round_trip_mismatches=0"));
    }
}
