use crate::types::{FrequencyTable, RankedList, TokenFrequency, TokenRef};
use crate::utils::{count_token_frequencies, tokenize_borrowed, top_n};
use crate::Error;
use log::debug;
use std::fs;
use std::path::Path;

/// Word frequencies of a single text document.
///
/// The source text is only borrowed while it is tokenized; the counter keeps
/// nothing but the resulting `FrequencyTable`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequencyCounter {
    frequency_table: FrequencyTable,
    total_tokens: usize,
}

impl WordFrequencyCounter {
    pub fn from_text(text: &str) -> Self {
        let frequency_table = count_token_frequencies(tokenize_borrowed(text));
        let total_tokens: usize = frequency_table.values().sum();

        debug!(
            "Tokenized {} tokens ({} distinct)",
            total_tokens,
            frequency_table.len()
        );

        Self {
            frequency_table,
            total_tokens,
        }
    }

    /// Reads the entire file at `path` as UTF-8 and counts its tokens.
    ///
    /// A missing file is reported as `Error::FileNotFound`; any other read
    /// failure (permissions, a directory, invalid UTF-8) as `Error::IoError`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();

        let text = fs::read_to_string(path).map_err(|e| Error::from_io_at_path(e, path))?;

        debug!("Read {} bytes from {}", text.len(), path.display());

        Ok(Self::from_text(&text))
    }

    pub fn frequency_table(&self) -> &FrequencyTable {
        &self.frequency_table
    }

    pub fn into_frequency_table(self) -> FrequencyTable {
        self.frequency_table
    }

    pub fn total_tokens(&self) -> usize {
        self.total_tokens
    }

    pub fn distinct_tokens(&self) -> usize {
        self.frequency_table.len()
    }

    /// Number of times `token` occurred, or zero if it never did.
    pub fn count_of(&self, token: &TokenRef) -> TokenFrequency {
        self.frequency_table.get(token).copied().unwrap_or(0)
    }

    pub fn top_n(&self, n: i64) -> Result<RankedList, Error> {
        top_n(&self.frequency_table, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_totals() {
        let counter = WordFrequencyCounter::from_text("a b a\nc");

        assert_eq!(counter.total_tokens(), 4);
        assert_eq!(counter.distinct_tokens(), 3);
        assert_eq!(counter.count_of("a"), 2);
        assert_eq!(counter.count_of("missing"), 0);
    }

    #[test]
    fn test_default_is_empty() {
        let counter = WordFrequencyCounter::default();
        assert_eq!(counter.total_tokens(), 0);
        assert!(counter.top_n(3).unwrap().is_empty());
    }
}
