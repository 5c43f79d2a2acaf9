//! Interactive prompt loop.
//!
//! Asks for an alphabet, then for messages over it. Each message is encoded,
//! printed, and decoded again to confirm the round trip. Bad alphabets and
//! bad messages are reported and the user is prompted again; nothing here
//! ends the loop except the user answering `n` or closing the input.

use std::io::{self, BufRead, Write};

use lzw_codec_core::{metrics::Metrics, Codec, EncoderKind, Error};
use tracing::{debug, info, warn};

/// Prompt loop over arbitrary input and output streams.
pub struct Session<R, W> {
    input: R,
    output: W,
    strategy: EncoderKind,
    metrics: Metrics,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, strategy: EncoderKind) -> Self {
        Self {
            input,
            output,
            strategy,
            metrics: Metrics::new(),
        }
    }

    /// Consume the session and return its metrics.
    pub fn into_metrics(mut self) -> Metrics {
        self.metrics.complete();
        self.metrics
    }

    /// Run until the user declines another alphabet or input ends.
    ///
    /// `preset` answers the first alphabet prompt.
    pub fn run(&mut self, preset: Option<&str>) -> io::Result<()> {
        let mut preset = preset.map(str::to_string);

        loop {
            let symbols = match preset.take() {
                Some(symbols) => symbols,
                None => match self.prompt("Alphabet:")? {
                    Some(line) => line,
                    None => return Ok(()),
                },
            };

            match Codec::from_symbols(&symbols, self.strategy) {
                Ok(mut codec) => {
                    info!(alphabet = %codec.alphabet(), strategy = %self.strategy, "alphabet accepted");
                    if !self.message_loop(&mut codec)? {
                        return Ok(());
                    }
                }
                Err(err) => {
                    warn!(error = %err, "alphabet rejected");
                    writeln!(self.output, "Not a valid alphabet: {err}")?;
                }
            }

            if !self.ask_again("Another alphabet?")? {
                return Ok(());
            }
        }
    }

    /// Handle messages for one alphabet.
    ///
    /// Returns `false` if input ended.
    fn message_loop(&mut self, codec: &mut Codec) -> io::Result<bool> {
        loop {
            let message = match self.prompt("Message:")? {
                Some(line) => line,
                None => return Ok(false),
            };

            self.handle_message(codec, &message)?;

            match self.prompt("Another message?")? {
                Some(answer) if is_no(&answer) => return Ok(true),
                Some(_) => {}
                None => return Ok(false),
            }
        }
    }

    fn handle_message(&mut self, codec: &mut Codec, message: &str) -> io::Result<()> {
        let report = match codec.round_trip(message) {
            Ok(report) => report,
            Err(err @ Error::SymbolNotInAlphabet { .. }) => {
                self.metrics.record_rejected();
                warn!(error = %err, "message rejected");
                return writeln!(self.output, "Not a valid message: {err}");
            }
            Err(err) => {
                self.metrics.record_failed_round_trip();
                warn!(error = %err, "own code failed to decode");
                return writeln!(self.output, "Round trip failed: {err}");
            }
        };

        let symbols = message.chars().count();
        self.metrics
            .record_encode(symbols, report.code.len(), report.encode_time);
        self.metrics
            .record_decode(report.matches(message), report.decode_time);

        writeln!(self.output, "{}", report.code)?;
        if report.matches(message) {
            debug!(symbols, digits = report.code.len(), "round trip ok");
        } else {
            warn!(code = %report.code, "round trip mismatch");
            writeln!(self.output, "Round trip mismatch: decoded {:?}", report.decoded)?;
        }

        Ok(())
    }

    /// Ask whether to continue; end of input counts as "no".
    fn ask_again(&mut self, question: &str) -> io::Result<bool> {
        Ok(matches!(self.prompt(question)?, Some(answer) if !is_no(&answer)))
    }

    /// Print `text` and read one line without its line terminator.
    ///
    /// Returns `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        writeln!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

fn is_no(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("n")
}
