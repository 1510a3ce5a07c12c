//! Line generation and the file writer.
//!
//! Line `i` (1-based) is `words_per_line` copies of `vocab[i % len]` joined by
//! single spaces. Since a line depends only on its vocabulary slot, every
//! possible line is built once up front and the loop just copies bytes.

use anyhow::{Context, Result, bail};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::vocab::Vocabulary;

/// Lines written by the reference fixture.
pub const DEFAULT_LINE_COUNT: u64 = 100_000;
pub const DEFAULT_WORDS_PER_LINE: usize = 10;
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 1000;

/// Where the reference fixture lands, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "tests/large_file.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateConfig {
    pub line_count: u64,
    pub words_per_line: usize,
    /// Progress is reported when the line number is a multiple of this.
    pub progress_interval: u64,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            line_count: DEFAULT_LINE_COUNT,
            words_per_line: DEFAULT_WORDS_PER_LINE,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl GenerateConfig {
    pub fn validate(&self) -> Result<()> {
        if self.words_per_line == 0 {
            bail!("words per line must be at least 1");
        }
        if self.progress_interval == 0 {
            bail!("progress interval must be at least 1");
        }
        Ok(())
    }
}

/// What a run wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerateStats {
    pub lines: u64,
    pub bytes: u64,
}

/// Newline-terminated line for each vocabulary slot.
#[derive(Debug, Clone)]
pub struct LineTable {
    lines: Vec<Vec<u8>>,
}

impl LineTable {
    /// Fails with `InvalidInput` if a line would not fit in memory.
    pub fn new(vocab: &Vocabulary, words_per_line: usize) -> io::Result<Self> {
        let lines = vocab
            .words()
            .iter()
            .map(|word| build_line(word, words_per_line))
            .collect::<io::Result<_>>()?;
        Ok(Self { lines })
    }

    /// Bytes for vocabulary slot `slot`, trailing `\n` included.
    pub fn slot(&self, slot: usize) -> &[u8] {
        &self.lines[slot]
    }
}

fn build_line(word: &str, words_per_line: usize) -> io::Result<Vec<u8>> {
    let len = (word.len() + 1).checked_mul(words_per_line).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("line of {words_per_line} words is too long"),
        )
    })?;
    let mut line = Vec::new();
    line.try_reserve_exact(len)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    for n in 0..words_per_line {
        if n > 0 {
            line.push(b' ');
        }
        line.extend_from_slice(word.as_bytes());
    }
    line.push(b'\n');
    Ok(line)
}

/// Write lines `1..=config.line_count` to `out`.
///
/// `on_progress(i)` is called after line `i` is written whenever `i` is a
/// multiple of `config.progress_interval`. Does not flush `out`. An invalid
/// config fails with `InvalidInput` before anything is written.
pub fn write_lines<W, F>(
    out: &mut W,
    vocab: &Vocabulary,
    config: &GenerateConfig,
    on_progress: &mut F,
) -> io::Result<GenerateStats>
where
    W: Write + ?Sized,
    F: FnMut(u64),
{
    config
        .validate()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let table = LineTable::new(vocab, config.words_per_line)?;
    let mut stats = GenerateStats::default();

    for i in 1..=config.line_count {
        let line = table.slot(vocab.index_for_line(i));
        out.write_all(line)?;
        stats.lines += 1;
        stats.bytes += line.len() as u64;

        if i % config.progress_interval == 0 {
            on_progress(i);
        }
    }

    Ok(stats)
}

/// Create (or truncate) `path` and fill it with generated lines.
///
/// The parent directory must already exist. Works on any writable path,
/// device files and FIFOs included. On error the partially written file is
/// left in place.
pub fn generate<F>(
    path: &Path,
    vocab: &Vocabulary,
    config: &GenerateConfig,
    on_progress: &mut F,
) -> Result<GenerateStats>
where
    F: FnMut(u64),
{
    config.validate()?;

    let file = File::create(path)
        .with_context(|| format!("failed to create file: {}", path.display()))?;
    let mut out = BufWriter::with_capacity(128 * 1024, file);

    let stats = write_lines(&mut out, vocab, config, on_progress)
        .with_context(|| format!("failed to write file: {}", path.display()))?;

    // BufWriter's drop swallows flush errors.
    out.into_inner()
        .map_err(|e| e.into_error())
        .with_context(|| format!("failed to write file: {}", path.display()))?;

    Ok(stats)
}
