//! Common patterns rule - rejects passwords containing known weak substrings.

use secrecy::{ExposeSecret, SecretString};

use crate::policy::PasswordPolicy;

/// Passes if no weak pattern of the policy occurs anywhere in the password.
pub fn common_patterns_rule(password: &SecretString, policy: &PasswordPolicy) -> bool {
    !policy.weak_patterns().matches(password.expose_secret())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::WeakPatterns;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_common_patterns_rejects_weak_substrings() {
        let policy = PasswordPolicy::default();
        for pwd in ["password123", "qwertyuiop", "123456789", "xXAdminXx", "HeLLo!2"] {
            assert!(!common_patterns_rule(&secret(pwd), &policy), "{pwd} should fail");
        }
    }

    #[test]
    fn test_common_patterns_accepts_strong_password() {
        let policy = PasswordPolicy::default();
        assert!(common_patterns_rule(&secret("CorrectHorseBatteryStaple!123"), &policy));
        assert!(common_patterns_rule(&secret(""), &policy));
    }

    #[test]
    fn test_common_patterns_uses_policy_list() {
        let mut patterns = WeakPatterns::empty();
        patterns.extend(["staple"]);
        let policy = PasswordPolicy::builder()
            .weak_patterns(patterns)
            .build()
            .expect("valid policy");

        assert!(common_patterns_rule(&secret("password"), &policy));
        assert!(!common_patterns_rule(&secret("BatterySTAPLE"), &policy));
    }
}
