//! Length rule - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};

use crate::policy::PasswordPolicy;

/// Passes if the password has at least `min_length` characters.
///
/// Length is counted in Unicode scalar values, not bytes.
pub fn length_rule(password: &SecretString, policy: &PasswordPolicy) -> bool {
    password.expose_secret().chars().count() >= policy.min_length()
}
