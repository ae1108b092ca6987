// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Print a prefix of any sequence in the catalog.
//!
//! ```text
//! sequences primes -n 10
//! sequences linear-recurrence --coefficients 1,1 --initial 1,0 --jump 10
//! sequences kolakoski --pattern 1,3 -n 20 --separator ' '
//! sequences --list
//! ```
//!
//! Set `RUST_LOG=lazy_sequences=trace` to watch memo growth on stderr.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use lazy_sequences::{Producer, SequenceError, SequenceKind, SequenceOptions};
use strum::IntoEnumIterator;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "sequences", version, about = "Print a prefix of a lazy integer sequence")]
struct Cli {
    /// Sequence to print (see --list)
    #[arg(required_unless_present = "list")]
    sequence: Option<SequenceKind>,

    /// Number of terms to print
    #[arg(short = 'n', long, default_value_t = 10)]
    count: usize,

    /// Recurrence coefficients, newest first
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, default_values_t = [1i64, 1])]
    coefficients: Vec<i64>,

    /// Recurrence initial terms, newest first
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, default_values_t = [1i64, 0])]
    initial: Vec<i64>,

    /// Leading recurrence terms to skip
    #[arg(long, default_value_t = 0)]
    jump: u64,

    /// Kolakoski generating pattern
    #[arg(long, value_delimiter = ',', default_values_t = [1u64, 2])]
    pattern: Vec<u64>,

    /// Look-and-say starting term
    #[arg(long, default_value = "1")]
    seed: String,

    /// Separator printed between terms
    #[arg(long, default_value = "\n")]
    separator: String,

    /// List available sequences and exit
    #[arg(long)]
    list: bool,
}

impl Cli {
    fn options(&self) -> SequenceOptions {
        SequenceOptions {
            coefficients: self.coefficients.clone(),
            initial: self.initial.clone(),
            jump: self.jump,
            pattern: self.pattern.clone(),
            seed: self.seed.clone(),
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

/// Everything that can stop the driver.
#[derive(Debug, Error)]
enum DriverError {
    #[error("{kind}: {source}")]
    Sequence {
        kind: SequenceKind,
        source: SequenceError,
    },

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

fn print_list(out: &mut impl Write) -> io::Result<()> {
    for kind in SequenceKind::iter() {
        writeln!(out, "{:<24} {}", kind.to_string(), kind.description())?;
    }
    Ok(())
}

/// Print the requested prefix, or the sequence list, to `out`.
fn run(cli: &Cli, out: &mut impl Write) -> Result<(), DriverError> {
    let Some(kind) = cli.sequence.filter(|_| !cli.list) else {
        print_list(out)?;
        return Ok(());
    };
    debug!(%kind, count = cli.count, "Printing sequence prefix");

    let sequence_error = |source| DriverError::Sequence { kind, source };
    let mut producer = kind.build(&cli.options()).map_err(sequence_error)?;
    for i in 0..cli.count {
        let term = match producer.next_term() {
            Ok(term) => term,
            Err(source) => {
                if i > 0 {
                    writeln!(out)?;
                }
                return Err(sequence_error(source));
            }
        };
        if i > 0 {
            write!(out, "{}", cli.separator)?;
        }
        write!(out, "{}", term)?;
    }
    writeln!(out)?;
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match run(&cli, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        // Downstream closed the pipe.
        Err(DriverError::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("sequences: {}", e);
            ExitCode::FAILURE
        }
    }
}
