//! Character variety rules - uppercase, lowercase, digits, special chars.
//!
//! A class that the policy does not require always passes.

use secrecy::{ExposeSecret, SecretString};

use crate::policy::PasswordPolicy;

pub fn uppercase_rule(password: &SecretString, policy: &PasswordPolicy) -> bool {
    !policy.require_uppercase() || password.expose_secret().chars().any(|c| c.is_uppercase())
}

pub fn lowercase_rule(password: &SecretString, policy: &PasswordPolicy) -> bool {
    !policy.require_lowercase() || password.expose_secret().chars().any(|c| c.is_lowercase())
}

pub fn digits_rule(password: &SecretString, policy: &PasswordPolicy) -> bool {
    !policy.require_digits() || password.expose_secret().chars().any(|c| c.is_ascii_digit())
}

/// Only characters from the policy's special set count; `~` or a space do not
/// satisfy the default policy.
pub fn special_rule(password: &SecretString, policy: &PasswordPolicy) -> bool {
    !policy.require_special() || password.expose_secret().chars().any(|c| policy.is_special(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_variety_missing_uppercase() {
        let policy = PasswordPolicy::default();
        assert!(!uppercase_rule(&secret("lowercase123!"), &policy));
        assert!(uppercase_rule(&secret("Lowercase123!"), &policy));
    }

    #[test]
    fn test_variety_missing_lowercase() {
        let policy = PasswordPolicy::default();
        assert!(!lowercase_rule(&secret("UPPERCASE123!"), &policy));
        assert!(lowercase_rule(&secret("UPPERCASe123!"), &policy));
    }

    #[test]
    fn test_variety_missing_digits() {
        let policy = PasswordPolicy::default();
        assert!(!digits_rule(&secret("NoDigitsHere!"), &policy));
        assert!(digits_rule(&secret("OneDigit1"), &policy));
    }

    #[test]
    fn test_variety_missing_special() {
        let policy = PasswordPolicy::default();
        assert!(!special_rule(&secret("NoSpecial123"), &policy));
        assert!(!special_rule(&secret("Tilde~Space 1"), &policy));
        assert!(special_rule(&secret("Quote'd1"), &policy));
    }

    #[test]
    fn test_variety_unicode_case() {
        let policy = PasswordPolicy::default();
        assert!(uppercase_rule(&secret("ÉCOLE"), &policy));
        assert!(lowercase_rule(&secret("ÉCOLé"), &policy));
    }

    #[test]
    fn test_variety_not_required_always_passes() {
        let policy = PasswordPolicy::builder()
            .require_uppercase(false)
            .require_lowercase(false)
            .require_digits(false)
            .require_special(false)
            .build()
            .expect("valid policy");
        let empty = secret("");

        assert!(uppercase_rule(&empty, &policy));
        assert!(lowercase_rule(&empty, &policy));
        assert!(digits_rule(&empty, &policy));
        assert!(special_rule(&empty, &policy));
    }
}
