//! The fixed word list lines are drawn from.

use anyhow::{Result, bail};

/// Words used when no `--vocab` is given.
pub const DEFAULT_WORDS: [&str; 8] = [
    "word1", "word8", "word4", "word2", "word0", "word9", "word5", "word3",
];

/// Ordered, non-empty list of words. Line `i` uses `words[i % len]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<String>,
}

impl Vocabulary {
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.is_empty() {
            bail!("vocabulary must contain at least one word");
        }
        Ok(Self { words })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: `new` rejects an empty list.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Slot used by the 1-based line number `line`.
    pub fn index_for_line(&self, line: u64) -> usize {
        (line % self.words.len() as u64) as usize
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            words: DEFAULT_WORDS.iter().map(|w| (*w).to_string()).collect(),
        }
    }
}
