//! # Utilities Module
//!
//! ## Purpose
//! Common helpers used throughout the search engine for performance
//! measurement and text trimming.
//!
//! ## Input/Output Specification
//! - **Input**: Operations to time, text requiring bounded display
//! - **Output**: Elapsed durations, word-boundary truncated text

use std::time::Instant;

/// Performance timer for measuring operation duration
pub struct Timer {
    start: Instant,
    name: String,
}

impl Timer {
    /// Start a new timer with a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            name: name.into(),
        }
    }

    /// Get elapsed time in milliseconds
    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    /// Stop timer and log duration
    pub fn stop(self) -> u64 {
        let elapsed = self.elapsed_ms();
        tracing::debug!("Timer '{}' completed in {}ms", self.name, elapsed);
        elapsed
    }
}

/// Text processing utilities
pub struct TextUtils;

impl TextUtils {
    /// Truncate text to at most `max_chars` characters, cutting at a word
    /// boundary and appending an ellipsis when anything was removed
    pub fn truncate_at_word(text: &str, max_chars: usize) -> String {
        if text.chars().count() <= max_chars {
            return text.to_string();
        }

        let mut result = String::new();
        for word in text.split_whitespace() {
            let next_len = if result.is_empty() {
                word.chars().count()
            } else {
                result.chars().count() + 1 + word.chars().count()
            };
            if next_len > max_chars.saturating_sub(3) {
                break;
            }
            if !result.is_empty() {
                result.push(' ');
            }
            result.push_str(word);
        }

        format!("{}...", result)
    }

    /// Count whitespace-separated words in text
    pub fn word_count(text: &str) -> usize {
        text.split_whitespace().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(TextUtils::truncate_at_word("Hello world", 20), "Hello world");
    }

    #[test]
    fn test_truncate_cuts_at_word_boundary() {
        let truncated = TextUtils::truncate_at_word("This is a very long text", 13);
        assert_eq!(truncated, "This is a...");
        assert!(truncated.chars().count() <= 13);
    }

    #[test]
    fn test_truncate_never_splits_words() {
        let truncated = TextUtils::truncate_at_word("alpha beta gamma delta", 15);
        for word in truncated.trim_end_matches("...").split_whitespace() {
            assert!("alpha beta gamma delta".contains(word));
        }
    }

    #[test]
    fn test_word_count() {
        assert_eq!(TextUtils::word_count("duty of care"), 3);
        assert_eq!(TextUtils::word_count("  "), 0);
    }

    #[test]
    fn test_timer_elapsed() {
        let timer = Timer::new("test");
        assert!(timer.elapsed_ms() < 1000);
    }
}
