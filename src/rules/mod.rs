//! Password validation rules
//!
//! Each rule checks one aspect of a password against the policy and
//! returns `true` when the password passes.

mod common;
mod length;
mod sequence;
mod variety;

pub use common::common_patterns_rule;
pub use length::length_rule;
pub use sequence::sequential_rule;
pub use variety::{digits_rule, lowercase_rule, special_rule, uppercase_rule};

use std::fmt;

use secrecy::SecretString;

use crate::policy::PasswordPolicy;

/// Signature shared by every rule check.
pub type RuleCheck = fn(&SecretString, &PasswordPolicy) -> bool;

/// The fixed set of validation rules, in feedback order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Length,
    Uppercase,
    Lowercase,
    Digits,
    Special,
    CommonPatterns,
    Sequential,
}

impl Rule {
    pub const COUNT: usize = 7;

    pub const ALL: [Rule; Rule::COUNT] = [
        Rule::Length,
        Rule::Uppercase,
        Rule::Lowercase,
        Rule::Digits,
        Rule::Special,
        Rule::CommonPatterns,
        Rule::Sequential,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Rule::Length => "length",
            Rule::Uppercase => "uppercase",
            Rule::Lowercase => "lowercase",
            Rule::Digits => "digits",
            Rule::Special => "special",
            Rule::CommonPatterns => "common_patterns",
            Rule::Sequential => "sequential",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub fn check_fn(self) -> RuleCheck {
        match self {
            Rule::Length => length_rule,
            Rule::Uppercase => uppercase_rule,
            Rule::Lowercase => lowercase_rule,
            Rule::Digits => digits_rule,
            Rule::Special => special_rule,
            Rule::CommonPatterns => common_patterns_rule,
            Rule::Sequential => sequential_rule,
        }
    }

    pub fn check(self, password: &SecretString, policy: &PasswordPolicy) -> bool {
        (self.check_fn())(password, policy)
    }

    /// Message describing the requirement this rule enforces.
    pub fn failure_message(self, policy: &PasswordPolicy) -> String {
        match self {
            Rule::Length => format!(
                "Password must be at least {} characters long",
                policy.min_length()
            ),
            Rule::Uppercase => "Password must contain at least one uppercase letter".to_string(),
            Rule::Lowercase => "Password must contain at least one lowercase letter".to_string(),
            Rule::Digits => "Password must contain at least one digit".to_string(),
            Rule::Special => format!(
                "Password must contain at least one special character ({})",
                policy.special_chars_display()
            ),
            Rule::CommonPatterns => {
                "Password contains common weak patterns (like 'password', '123', etc.)".to_string()
            }
            Rule::Sequential => {
                "Password contains sequential characters (like 'abc', '123', etc.)".to_string()
            }
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
