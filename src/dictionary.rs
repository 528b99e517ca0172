//! The dictionary oracle: set-membership over lowercase words.
use crate::error::Error;
use std::collections::HashSet;
use std::fs::read_to_string;

/// A set-membership predicate over lowercase ASCII words, built once at
/// startup and shared read-only across any number of concurrent
/// `best_move` callers.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<Box<str>>,
}

impl Dictionary {
    /// Build a dictionary from an in-memory list of words.
    pub fn from_words<I, S>(words: I) -> Dictionary
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: HashSet<Box<str>> = words
            .into_iter()
            .map(|w| w.as_ref().to_ascii_lowercase().into_boxed_str())
            .collect();
        log::debug!("dictionary built from {} words", words.len());
        Dictionary { words }
    }

    /// Load the dictionary from a UTF-8 file, one word per line (or
    /// whitespace-separated).
    ///
    /// # Errors
    /// If the file cannot be read, or contains no words.
    pub fn from_file(path: &str) -> Result<Dictionary, Error> {
        let contents = read_to_string(path).map_err(|source| Error::ReadError {
            path: String::from(path),
            source,
        })?;
        let dictionary = Dictionary::from_words(contents.split_whitespace());
        if dictionary.words.is_empty() {
            return Err(Error::EmptyWordlist(String::from(path)));
        }
        log::info!("loaded dictionary from \"{}\"", path);
        Ok(dictionary)
    }

    /// Case-folds `word` to lowercase and checks membership.
    pub fn is_word(&self, word: &str) -> bool {
        let lower = word.to_ascii_lowercase();
        self.words.contains(lower.as_str())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_word_case_folds() {
        let dict = Dictionary::from_words(&["Cat", "dog"]);
        assert!(dict.is_word("cat"));
        assert!(dict.is_word("CAT"));
        assert!(dict.is_word("Dog"));
        assert!(!dict.is_word("bird"));
    }

    #[test]
    fn test_from_file_missing() {
        assert!(Dictionary::from_file("/nonexistent/path/words.txt").is_err());
    }
}
