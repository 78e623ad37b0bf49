//! Random password generation with guaranteed character-class coverage.

use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};
use secrecy::SecretString;
use thiserror::Error;

use crate::policy::PasswordPolicy;

/// Shortest length that still fits one character of every mandatory class.
pub const MIN_GENERATED_LENGTH: usize = 4;

pub const DEFAULT_GENERATED_LENGTH: usize = 12;

const LOWERCASE: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm',
    'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];
const UPPERCASE: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M',
    'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];
const DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Password length must be at least {min} characters (got {0})", min = MIN_GENERATED_LENGTH)]
    InvalidLength(usize),
    #[error("Number of passwords must be at least 1")]
    InvalidCount,
    #[error("Special characters were requested but the policy defines none")]
    NoSpecialCharacters,
}

/// Parameters for one generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub include_special: bool,
    pub count: usize,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            length: DEFAULT_GENERATED_LENGTH,
            include_special: true,
            count: 1,
        }
    }
}

/// Generates one password using the thread-local CSPRNG.
///
/// The password always holds at least one lowercase letter, one uppercase
/// letter and one digit, plus one character from the policy's special set
/// when `include_special` is true. Without `include_special` it holds no
/// special characters at all.
///
/// # Errors
/// - [`GenerateError::InvalidLength`] if `length < 4`
/// - [`GenerateError::NoSpecialCharacters`] if specials are requested and the
///   policy's special set is empty
pub fn generate_password(
    policy: &PasswordPolicy,
    length: usize,
    include_special: bool,
) -> Result<SecretString, GenerateError> {
    generate_password_with_rng(&mut rand::thread_rng(), policy, length, include_special)
}

/// Same as [`generate_password`] with a caller-supplied random source.
pub fn generate_password_with_rng<R>(
    rng: &mut R,
    policy: &PasswordPolicy,
    length: usize,
    include_special: bool,
) -> Result<SecretString, GenerateError>
where
    R: Rng + CryptoRng,
{
    let classes = active_classes(policy, length, include_special)?;
    let pool: Vec<char> = classes.iter().flat_map(|class| class.iter().copied()).collect();

    let mut chars: Vec<char> = Vec::with_capacity(length);

    // One of each mandatory class first, then fill from the union.
    for class in &classes {
        if let Some(&c) = class.choose(rng) {
            chars.push(c);
        }
    }
    for _ in chars.len()..length {
        if let Some(&c) = pool.choose(rng) {
            chars.push(c);
        }
    }

    chars.shuffle(rng);

    Ok(SecretString::new(chars.into_iter().collect::<String>().into()))
}

/// Generates `request.count` independent passwords.
///
/// Passwords are not checked for uniqueness.
pub fn generate_passwords(
    policy: &PasswordPolicy,
    request: &GenerationRequest,
) -> Result<Vec<SecretString>, GenerateError> {
    if request.count == 0 {
        return Err(GenerateError::InvalidCount);
    }

    let mut rng = rand::thread_rng();
    let passwords = (0..request.count)
        .map(|_| generate_password_with_rng(&mut rng, policy, request.length, request.include_special))
        .collect::<Result<Vec<_>, _>>()?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        count = passwords.len(),
        length = request.length,
        include_special = request.include_special,
        "passwords generated"
    );

    Ok(passwords)
}

fn active_classes<'a>(
    policy: &'a PasswordPolicy,
    length: usize,
    include_special: bool,
) -> Result<Vec<&'a [char]>, GenerateError> {
    if length < MIN_GENERATED_LENGTH {
        return Err(GenerateError::InvalidLength(length));
    }

    let mut classes: Vec<&[char]> = vec![LOWERCASE, UPPERCASE, DIGITS];
    if include_special {
        if policy.special_chars().is_empty() {
            return Err(GenerateError::NoSpecialCharacters);
        }
        classes.push(policy.special_chars());
    }
    Ok(classes)
}
