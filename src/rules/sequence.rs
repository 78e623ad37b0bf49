//! Sequential rule - detects ascending runs such as `abc` or `123`.

use secrecy::{ExposeSecret, SecretString};

use crate::policy::PasswordPolicy;

const RUN_LENGTH: usize = 3;

/// Passes if no three consecutive characters form a strictly ascending run.
///
/// A window trips the rule if either:
/// - its case-folded code points each increase by exactly one (`aBc`), or
/// - it is three ASCII digits each one greater than the last (`789`).
pub fn sequential_rule(password: &SecretString, _policy: &PasswordPolicy) -> bool {
    let chars: Vec<char> = password.expose_secret().chars().collect();
    if chars.len() < RUN_LENGTH {
        return true;
    }

    !chars
        .windows(RUN_LENGTH)
        .any(|w| is_alphabetic_run(w) || is_numeric_run(w))
}

fn is_alphabetic_run(window: &[char]) -> bool {
    let codes: Vec<u32> = window.iter().map(|&c| fold_case(c)).collect();
    codes.windows(2).all(|pair| pair[0].checked_add(1) == Some(pair[1]))
}

fn is_numeric_run(window: &[char]) -> bool {
    let digits: Option<Vec<u32>> = window.iter().map(|c| c.to_digit(10)).collect();
    match digits {
        Some(d) => d.windows(2).all(|pair| pair[0] + 1 == pair[1]),
        None => false,
    }
}

/// Single-char lowercase mapping; characters that lowercase to several
/// chars keep their own code point.
fn fold_case(c: char) -> u32 {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l as u32,
        _ => c as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passes(s: &str) -> bool {
        let pwd = SecretString::new(s.to_string().into());
        sequential_rule(&pwd, &PasswordPolicy::default())
    }

    #[test]
    fn test_sequential_letters() {
        assert!(!passes("abc123!"));
        assert!(!passes("123abc@"));
        assert!(!passes("xyz789#"));
        assert!(!passes("Q9rSt!"));
    }

    #[test]
    fn test_sequential_ignores_case() {
        assert!(!passes("aBc"));
        assert!(!passes("XyZ"));
    }

    #[test]
    fn test_sequential_digits() {
        assert!(!passes("pw7890"));
        assert!(!passes("012"));
    }

    #[test]
    fn test_sequential_descending_and_gaps_pass() {
        assert!(passes("cba321"));
        assert!(passes("ace135"));
        assert!(passes("StrongP@ss999!"));
    }

    #[test]
    fn test_sequential_short_input_passes() {
        assert!(passes(""));
        assert!(passes("ab"));
        assert!(passes("12"));
    }

    #[test]
    fn test_sequential_run_across_classes() {
        // '/' '0' '1' are consecutive code points
        assert!(!passes("x/01"));
    }
}
