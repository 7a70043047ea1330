use std::collections::HashSet;
use std::path::Path;
use tokio::fs;
use anyhow::Result;

/// Read-only word list, loaded once per session lifetime.
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Load dictionary from a newline-delimited text file.
    ///
    /// Entries are trimmed, uppercased, and empty lines discarded. A load
    /// failure is fatal to game start; callers report it and leave the
    /// session unconstructed rather than retrying.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        let dict = Self::from_words(content.lines());

        tracing::info!("Loaded {} words into dictionary", dict.len());

        Ok(dict)
    }

    /// Build a dictionary from an in-memory word list (the embedded-array
    /// source variant, also handy in tests).
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: HashSet<String> = words
            .into_iter()
            .map(|line| line.as_ref().trim().to_uppercase())
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }

    /// Create an empty dictionary (for testing)
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Check if a word exists in the dictionary (case-insensitive)
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }

    /// Words no longer than `max_len`, the candidate set for rack seeding.
    pub fn words_up_to(&self, max_len: usize) -> Vec<&str> {
        self.words
            .iter()
            .map(String::as_str)
            .filter(|word| word.len() <= max_len)
            .collect()
    }

    /// Get the number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
