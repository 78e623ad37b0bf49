//! Weak pattern denylist
//!
//! Holds the substrings whose presence anywhere in a password fails the
//! `common_patterns` rule, plus loading extra patterns from a file.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an extra weak-pattern file.
pub const PATTERNS_PATH_ENV: &str = "PWD_GUARD_PATTERNS_PATH";

/// Built-in weak substrings, matched case-insensitively.
pub const BUILTIN_WEAK_PATTERNS: &[&str] = &[
    "password", "123456", "qwerty", "admin", "welcome",
    "letmein", "monkey", "dragon", "baseball", "football",
    "iloveyou", "master", "superman", "password1", "hello",
];

#[derive(Error, Debug)]
pub enum PatternsError {
    #[error("Weak pattern file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read weak pattern file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Weak pattern file is empty")]
    EmptyFile,
}

/// Lowercased weak substrings, in insertion order, without duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeakPatterns {
    patterns: Vec<String>,
}

impl Default for WeakPatterns {
    fn default() -> Self {
        Self::builtin()
    }
}

impl WeakPatterns {
    /// The built-in denylist.
    pub fn builtin() -> Self {
        let mut list = Self { patterns: Vec::new() };
        list.extend(BUILTIN_WEAK_PATTERNS.iter().copied());
        list
    }

    /// An empty denylist. Every password passes `common_patterns`.
    pub fn empty() -> Self {
        Self { patterns: Vec::new() }
    }

    /// Adds patterns, lowercasing them and skipping blanks and duplicates.
    pub fn extend<I, S>(&mut self, patterns: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for pattern in patterns {
            let pattern = pattern.as_ref().trim().to_lowercase();
            if !pattern.is_empty() && !self.patterns.contains(&pattern) {
                self.patterns.push(pattern);
            }
        }
    }

    /// Loads extra patterns from a file (one per line) on top of the current list.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no non-blank lines
    ///
    /// Returns the number of patterns added.
    pub fn load_from_path<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, PatternsError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Weak pattern loading FAILED: FileNotFound {:?}", path);
            return Err(PatternsError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Weak pattern loading FAILED: Empty file {:?}", path);
            return Err(PatternsError::EmptyFile);
        }

        let before = self.patterns.len();
        self.extend(content.lines());
        let added = self.patterns.len() - before;

        #[cfg(feature = "tracing")]
        tracing::info!("Weak patterns loaded: {} new from {:?}", added, path);

        Ok(added)
    }

    /// Returns `true` if any pattern occurs anywhere in `password`, ignoring case.
    pub fn matches(&self, password: &str) -> bool {
        let lowered = password.to_lowercase();
        self.patterns.iter().any(|p| lowered.contains(p.as_str()))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(String::as_str)
    }
}

/// Returns the extra pattern file path from `PWD_GUARD_PATTERNS_PATH`, if set.
pub fn patterns_path_from_env() -> Option<PathBuf> {
    std::env::var_os(PATTERNS_PATH_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
