//! Password policy: the requirements shared by the validator and the generator.

use std::path::PathBuf;
use thiserror::Error;

use crate::patterns::{patterns_path_from_env, PatternsError, WeakPatterns};

/// Environment variable overriding the minimum length.
pub const MIN_LENGTH_ENV: &str = "PWD_GUARD_MIN_LENGTH";

pub const DEFAULT_MIN_LENGTH: usize = 8;

/// Accepted special characters of the default policy.
pub const DEFAULT_SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{};:'\",.<>/?";

#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("Minimum length must be at least 1")]
    InvalidMinLength,
    #[error("Special characters are required but the special character set is empty")]
    MissingSpecialChars,
    #[error("Invalid value for {var}: {value:?}")]
    InvalidEnvValue { var: &'static str, value: String },
    #[error(transparent)]
    Patterns(#[from] PatternsError),
}

/// Immutable set of password requirements.
///
/// Build one with [`PasswordPolicy::builder`], or start from
/// [`PasswordPolicy::default`] / [`PasswordPolicy::from_env`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPolicy {
    min_length: usize,
    require_uppercase: bool,
    require_lowercase: bool,
    require_digits: bool,
    require_special: bool,
    special_chars: Vec<char>,
    weak_patterns: WeakPatterns,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            require_uppercase: true,
            require_lowercase: true,
            require_digits: true,
            require_special: true,
            special_chars: dedup_chars(DEFAULT_SPECIAL_CHARS),
            weak_patterns: WeakPatterns::builtin(),
        }
    }
}

impl PasswordPolicy {
    pub fn builder() -> PolicyBuilder {
        PolicyBuilder { policy: Self::default() }
    }

    /// Default policy with overrides from the environment.
    ///
    /// # Environment Variables
    ///
    /// - `PWD_GUARD_MIN_LENGTH`: minimum length (positive integer)
    /// - `PWD_GUARD_PATTERNS_PATH`: file of extra weak patterns, one per line
    ///
    /// # Errors
    ///
    /// Returns error if the minimum length is not a positive integer or the
    /// pattern file cannot be loaded.
    pub fn from_env() -> Result<Self, PolicyError> {
        let mut builder = Self::builder();

        if let Ok(raw) = std::env::var(MIN_LENGTH_ENV) {
            let min_length = raw
                .trim()
                .parse::<usize>()
                .map_err(|_| PolicyError::InvalidEnvValue {
                    var: MIN_LENGTH_ENV,
                    value: raw.clone(),
                })?;
            builder = builder.min_length(min_length);
        }

        if let Some(path) = patterns_path_from_env() {
            builder = builder.extra_patterns_file(path)?;
        }

        builder.build()
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn require_uppercase(&self) -> bool {
        self.require_uppercase
    }

    pub fn require_lowercase(&self) -> bool {
        self.require_lowercase
    }

    pub fn require_digits(&self) -> bool {
        self.require_digits
    }

    pub fn require_special(&self) -> bool {
        self.require_special
    }

    pub fn special_chars(&self) -> &[char] {
        &self.special_chars
    }

    /// The special character set as a display string, e.g. for feedback.
    pub fn special_chars_display(&self) -> String {
        self.special_chars.iter().collect()
    }

    pub fn is_special(&self, c: char) -> bool {
        self.special_chars.contains(&c)
    }

    pub fn weak_patterns(&self) -> &WeakPatterns {
        &self.weak_patterns
    }
}

/// Builder for [`PasswordPolicy`]; starts from the default policy.
#[derive(Debug, Clone)]
pub struct PolicyBuilder {
    policy: PasswordPolicy,
}

impl PolicyBuilder {
    pub fn min_length(mut self, min_length: usize) -> Self {
        self.policy.min_length = min_length;
        self
    }

    pub fn require_uppercase(mut self, required: bool) -> Self {
        self.policy.require_uppercase = required;
        self
    }

    pub fn require_lowercase(mut self, required: bool) -> Self {
        self.policy.require_lowercase = required;
        self
    }

    pub fn require_digits(mut self, required: bool) -> Self {
        self.policy.require_digits = required;
        self
    }

    pub fn require_special(mut self, required: bool) -> Self {
        self.policy.require_special = required;
        self
    }

    pub fn special_chars(mut self, chars: &str) -> Self {
        self.policy.special_chars = dedup_chars(chars);
        self
    }

    pub fn weak_patterns(mut self, patterns: WeakPatterns) -> Self {
        self.policy.weak_patterns = patterns;
        self
    }

    /// Adds the patterns listed in `path` to the current denylist.
    pub fn extra_patterns_file<P: Into<PathBuf>>(mut self, path: P) -> Result<Self, PolicyError> {
        self.policy.weak_patterns.load_from_path(path.into())?;
        Ok(self)
    }

    pub fn build(self) -> Result<PasswordPolicy, PolicyError> {
        let policy = self.policy;
        if policy.min_length == 0 {
            return Err(PolicyError::InvalidMinLength);
        }
        if policy.require_special && policy.special_chars.is_empty() {
            return Err(PolicyError::MissingSpecialChars);
        }
        Ok(policy)
    }
}

fn dedup_chars(chars: &str) -> Vec<char> {
    let mut out: Vec<char> = Vec::with_capacity(chars.len());
    for c in chars.chars() {
        if !out.contains(&c) {
            out.push(c);
        }
    }
    out
}
