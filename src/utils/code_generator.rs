//! Short code generation.
//!
//! Codes are drawn from the operating system CSPRNG so they cannot be
//! predicted from previously issued ones.

/// Number of characters in a generated code.
pub const CODE_LENGTH: usize = 6;

/// Longest code the store accepts (`VARCHAR(10)`).
pub const MAX_CODE_LENGTH: usize = 10;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Bytes at or above this value are rejected to keep the alphabet uniform.
const REJECTION_THRESHOLD: u8 = (256 - 256 % ALPHABET.len()) as u8;

/// Errors raised while generating a code.
#[derive(Debug, thiserror::Error)]
pub enum CodeGenError {
    #[error("Random source unavailable: {0}")]
    Entropy(#[from] getrandom::Error),
}

/// Generates a random alphanumeric short code of [`CODE_LENGTH`] characters.
///
/// Bytes from `getrandom` are mapped onto `[A-Za-z0-9]` with rejection
/// sampling, so every character is equally likely.
///
/// # Errors
///
/// Returns [`CodeGenError::Entropy`] if the system random source fails.
///
/// # Examples
///
/// ```
/// use shorty::utils::code_generator::{generate_code, CODE_LENGTH};
///
/// let code = generate_code().unwrap();
/// assert_eq!(code.len(), CODE_LENGTH);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> Result<String, CodeGenError> {
    let mut code = String::with_capacity(CODE_LENGTH);
    let mut buffer = [0u8; CODE_LENGTH * 2];

    while code.len() < CODE_LENGTH {
        getrandom::fill(&mut buffer)?;

        for &byte in &buffer {
            if byte >= REJECTION_THRESHOLD {
                continue;
            }
            code.push(ALPHABET[byte as usize % ALPHABET.len()] as char);
            if code.len() == CODE_LENGTH {
                break;
            }
        }
    }

    Ok(code)
}

/// Returns true if `code` could have been issued by this service.
pub fn is_valid_code(code: &str) -> bool {
    !code.is_empty()
        && code.len() <= MAX_CODE_LENGTH
        && code.bytes().all(|b| b.is_ascii_alphanumeric())
}
