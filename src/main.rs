use anyhow::Result;
use clap::Parser;
use clap::builder::RangedU64ValueParser;
use std::io;
use std::path::PathBuf;
use std::time::Instant;

use linegen::generate::{
    DEFAULT_LINE_COUNT, DEFAULT_OUTPUT_PATH, DEFAULT_PROGRESS_INTERVAL, DEFAULT_WORDS_PER_LINE,
};
use linegen::progress::ConsoleProgress;
use linegen::{GenerateConfig, Vocabulary};

#[derive(Parser)]
#[command(
    name = "linegen",
    about = "Generate a deterministic text file of repeated words for tests",
    version
)]
struct Cli {
    /// Output file; its directory must already exist
    #[arg(default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Number of lines to write
    #[arg(short = 'n', long = "lines", default_value_t = DEFAULT_LINE_COUNT)]
    lines: u64,

    /// Copies of the word on each line
    #[arg(
        short = 'w',
        long = "words-per-line",
        default_value_t = DEFAULT_WORDS_PER_LINE,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    words_per_line: usize,

    /// Comma-separated word list replacing the built-in vocabulary
    #[arg(long, value_delimiter = ',')]
    vocab: Vec<String>,

    /// Report progress every N lines
    #[arg(
        long = "progress-every",
        default_value_t = DEFAULT_PROGRESS_INTERVAL,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    progress_every: u64,

    /// Print nothing to stdout
    #[arg(short = 'q', long)]
    quiet: bool,

    /// Print timing breakdown to stderr (for profiling)
    #[arg(long = "debug-timing", hide = true)]
    debug_timing: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let vocab = if cli.vocab.is_empty() {
        Vocabulary::default()
    } else {
        Vocabulary::new(cli.vocab)?
    };

    let config = GenerateConfig {
        line_count: cli.lines,
        words_per_line: cli.words_per_line,
        progress_interval: cli.progress_every,
    };

    let stdout = io::stdout().lock();
    let mut progress = if cli.quiet {
        ConsoleProgress::quiet(stdout)
    } else {
        ConsoleProgress::new(stdout)
    };

    progress.start(config.line_count);
    let t0 = Instant::now();
    let result = linegen::generate(&cli.output, &vocab, &config, &mut |i| progress.report(i));
    let stats = match result {
        Ok(stats) => stats,
        Err(e) => {
            progress.abort();
            return Err(e);
        }
    };
    let elapsed = t0.elapsed();
    progress.finish(&cli.output);

    if cli.debug_timing {
        let mb = stats.bytes as f64 / (1024.0 * 1024.0);
        eprintln!(
            "--- debug-timing: {} ({mb:.1} MB) ---",
            cli.output.display()
        );
        eprintln!("  lines:  {:>10}", stats.lines);
        eprintln!(
            "  total:  {:>8.2}ms  ({:.0} MB/s)",
            elapsed.as_secs_f64() * 1000.0,
            mb / elapsed.as_secs_f64()
        );
    }

    Ok(())
}
