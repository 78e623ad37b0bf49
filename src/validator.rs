//! Password validator - runs every rule and builds feedback.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::policy::PasswordPolicy;
use crate::rules::Rule;

/// Debounce applied by [`validate_tx`] before validating.
#[cfg(feature = "async")]
pub const VALIDATION_DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Outcome of every rule for one password.
///
/// Outcomes are stored in [`Rule::ALL`] order and never change after
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationResult {
    outcomes: [bool; Rule::COUNT],
}

impl ValidationResult {
    /// `true` when every rule passed.
    pub fn is_valid(&self) -> bool {
        self.outcomes.iter().all(|&passed| passed)
    }

    pub fn passed(&self, rule: Rule) -> bool {
        self.outcomes[rule.index()]
    }

    /// Every rule with its outcome, in rule order.
    pub fn iter(&self) -> impl Iterator<Item = (Rule, bool)> + '_ {
        Rule::ALL.into_iter().map(move |rule| (rule, self.passed(rule)))
    }

    pub fn failed_rules(&self) -> impl Iterator<Item = Rule> + '_ {
        self.iter().filter(|(_, passed)| !passed).map(|(rule, _)| rule)
    }

    /// One message per failed rule, in rule order.
    pub fn feedback(&self, policy: &PasswordPolicy) -> Vec<String> {
        self.failed_rules()
            .map(|rule| rule.failure_message(policy))
            .collect()
    }

    fn from_outcomes(outcomes: [bool; Rule::COUNT]) -> Self {
        let result = Self { outcomes };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            valid = result.is_valid(),
            failed = ?result.failed_rules().map(Rule::name).collect::<Vec<_>>(),
            "password validated"
        );

        result
    }
}

/// Validates a password against the policy.
///
/// Never fails: every input, including the empty string, yields a result.
pub fn validate_password(password: &SecretString, policy: &PasswordPolicy) -> ValidationResult {
    let mut outcomes = [false; Rule::COUNT];
    for rule in Rule::ALL {
        outcomes[rule.index()] = rule.check(password, policy);
    }
    ValidationResult::from_outcomes(outcomes)
}

/// Builds the feedback messages for a validation result.
pub fn validation_feedback(result: &ValidationResult, policy: &PasswordPolicy) -> Vec<String> {
    result.feedback(policy)
}

/// Validates and builds feedback in one call.
///
/// # Returns
/// `(is_valid, feedback)`; feedback is empty when the password is valid.
pub fn validate_password_with_feedback(
    password: &SecretString,
    policy: &PasswordPolicy,
) -> (bool, Vec<String>) {
    let result = validate_password(password, policy);
    (result.is_valid(), result.feedback(policy))
}

/// Validates, checking the token before each rule.
///
/// Returns `None` once the token is cancelled.
#[cfg(feature = "async")]
pub fn validate_cancellable(
    password: &SecretString,
    policy: &PasswordPolicy,
    token: &CancellationToken,
) -> Option<ValidationResult> {
    let mut outcomes = [false; Rule::COUNT];
    for rule in Rule::ALL {
        if token.is_cancelled() {
            #[cfg(feature = "tracing")]
            tracing::debug!("validation cancelled before rule {}", rule);
            return None;
        }
        outcomes[rule.index()] = rule.check(password, policy);
    }
    Some(ValidationResult::from_outcomes(outcomes))
}

/// Async version that sends the result via channel after a short debounce.
///
/// Sends `None` if the token was cancelled during the debounce or the run.
#[cfg(feature = "async")]
pub async fn validate_tx(
    password: &SecretString,
    policy: &PasswordPolicy,
    token: CancellationToken,
    tx: mpsc::Sender<Option<ValidationResult>>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("validation is about to start...");

    tokio::time::sleep(VALIDATION_DEBOUNCE).await;
    let result = validate_cancellable(password, policy, &token);

    if let Err(_e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password validation result: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_validate_strong_password() {
        let policy = PasswordPolicy::default();
        let result = validate_password(&secret("StrongP@ss975!"), &policy);

        assert!(result.is_valid());
        assert!(result.iter().all(|(_, passed)| passed));
        assert!(result.feedback(&policy).is_empty());
    }

    #[test]
    fn test_validate_ascending_digits_fail_only_sequential() {
        let policy = PasswordPolicy::default();
        let result = validate_password(&secret("StrongP@ss123!"), &policy);

        assert!(!result.is_valid());
        assert_eq!(result.failed_rules().collect::<Vec<_>>(), vec![Rule::Sequential]);
    }

    #[test]
    fn test_validate_repeated_digits_pass_sequential() {
        let policy = PasswordPolicy::default();
        let result = validate_password(&secret("StrongP@ss999!"), &policy);

        assert!(result.passed(Rule::Sequential));
        assert!(result.is_valid());
    }

    #[test]
    fn test_validate_empty_password() {
        let policy = PasswordPolicy::default();
        let result = validate_password(&secret(""), &policy);

        assert!(!result.passed(Rule::Length));
        assert!(!result.passed(Rule::Uppercase));
        assert!(result.passed(Rule::CommonPatterns));
        assert!(result.passed(Rule::Sequential));
        assert!(!result.is_valid());
    }

    #[test]
    fn test_validate_is_idempotent() {
        let policy = PasswordPolicy::default();
        let pwd = secret("Admin123!");
        assert_eq!(validate_password(&pwd, &policy), validate_password(&pwd, &policy));
    }

    #[test]
    fn test_validate_short_password() {
        let policy = PasswordPolicy::default();
        let result = validate_password(&secret("Short1!"), &policy);
        assert!(!result.is_valid());
        assert!(!result.passed(Rule::Length));
    }

    #[test]
    fn test_validate_missing_classes() {
        let policy = PasswordPolicy::default();
        let cases = [
            ("lowercase123!", Rule::Uppercase),
            ("UPPERCASE123!", Rule::Lowercase),
            ("NoDigitsHere!", Rule::Digits),
            ("NoSpecial123", Rule::Special),
        ];

        for (pwd, rule) in cases {
            let result = validate_password(&secret(pwd), &policy);
            assert!(!result.is_valid(), "{pwd} should be invalid");
            assert!(!result.passed(rule), "{pwd} should fail {rule}");
        }
    }

    #[test]
    fn test_validate_common_patterns() {
        let policy = PasswordPolicy::default();
        for pwd in ["password123", "qwertyuiop", "123456789"] {
            let result = validate_password(&secret(pwd), &policy);
            assert!(!result.is_valid());
            assert!(!result.passed(Rule::CommonPatterns));
        }
    }

    #[test]
    fn test_validate_sequential_chars() {
        let policy = PasswordPolicy::default();
        for pwd in ["abc123!", "123abc@", "xyz789#"] {
            let result = validate_password(&secret(pwd), &policy);
            assert!(!result.is_valid());
            assert!(!result.passed(Rule::Sequential));
        }
    }

    #[test]
    fn test_feedback_messages_in_rule_order() {
        let policy = PasswordPolicy::default();
        let result = validate_password(&secret("weak"), &policy);
        let feedback = validation_feedback(&result, &policy);

        assert!(!result.is_valid());
        assert!(feedback[0].contains("at least 8 characters long"));
        assert_eq!(
            feedback,
            vec![
                "Password must be at least 8 characters long".to_string(),
                "Password must contain at least one uppercase letter".to_string(),
                "Password must contain at least one digit".to_string(),
                format!(
                    "Password must contain at least one special character ({})",
                    crate::policy::DEFAULT_SPECIAL_CHARS
                ),
            ]
        );
    }

    #[test]
    fn test_feedback_follows_policy_threshold() {
        let policy = PasswordPolicy::builder()
            .min_length(16)
            .build()
            .expect("valid policy");
        let (is_valid, feedback) = validate_password_with_feedback(&secret("StrongP@ss975!"), &policy);

        assert!(!is_valid);
        assert_eq!(feedback, vec!["Password must be at least 16 characters long".to_string()]);
    }

    #[test]
    fn test_validate_with_feedback() {
        let policy = PasswordPolicy::default();
        let (is_valid, feedback) = validate_password_with_feedback(&secret("StrongP@ss975!"), &policy);

        assert!(is_valid);
        assert!(feedback.is_empty());
    }

    #[test]
    fn test_validate_relaxed_policy() {
        let policy = PasswordPolicy::builder()
            .min_length(4)
            .require_special(false)
            .require_digits(false)
            .build()
            .expect("valid policy");
        let result = validate_password(&secret("Wxyq"), &policy);

        assert!(result.passed(Rule::Special));
        assert!(result.passed(Rule::Digits));
        // "xyq" is not a run but "Wxy" is: w, x, y
        assert!(!result.passed(Rule::Sequential));
    }
}
