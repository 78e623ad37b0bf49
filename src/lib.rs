//! Password security toolkit
//!
//! This library hashes passwords with SHA-256, generates random passwords
//! that cover every required character class, and validates passwords
//! against a configurable policy with human-readable feedback.
//!
//! # Features
//!
//! - `async` (default): Enables cancellable validation and channel handoff
//! - `tracing`: Enables logging via tracing crate
//! - `cli` (default): Builds the `pwd-guard` binary
//!
//! # Environment Variables
//!
//! Read by [`PasswordPolicy::from_env`]:
//!
//! - `PWD_GUARD_MIN_LENGTH`: minimum password length (default: 8)
//! - `PWD_GUARD_PATTERNS_PATH`: file of extra weak patterns, one per line
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_guard::{generate_password, validate_password_with_feedback, PasswordPolicy};
//! use secrecy::{ExposeSecret, SecretString};
//!
//! let policy = PasswordPolicy::default();
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let (is_valid, feedback) = validate_password_with_feedback(&password, &policy);
//! println!("Valid: {is_valid}");
//! for issue in feedback {
//!     println!("  - {issue}");
//! }
//!
//! let generated = generate_password(&policy, 16, true).expect("length is at least 4");
//! println!("Generated: {}", generated.expose_secret());
//! ```

// Internal modules
mod generator;
mod hasher;
mod patterns;
mod policy;
mod rules;
mod validator;

// Public API
pub use generator::{
    generate_password, generate_password_with_rng, generate_passwords, GenerateError,
    GenerationRequest, DEFAULT_GENERATED_LENGTH, MIN_GENERATED_LENGTH,
};
pub use hasher::hash_password;
pub use patterns::{PatternsError, WeakPatterns, BUILTIN_WEAK_PATTERNS, PATTERNS_PATH_ENV};
pub use policy::{
    PasswordPolicy, PolicyBuilder, PolicyError, DEFAULT_MIN_LENGTH, DEFAULT_SPECIAL_CHARS,
    MIN_LENGTH_ENV,
};
pub use rules::{Rule, RuleCheck};
pub use validator::{
    validate_password, validate_password_with_feedback, validation_feedback, ValidationResult,
};

#[cfg(feature = "async")]
pub use validator::{validate_cancellable, validate_tx, VALIDATION_DEBOUNCE};
