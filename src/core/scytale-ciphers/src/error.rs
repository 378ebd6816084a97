//! Cipher error types.

use thiserror::Error;

/// Errors that can occur while building or running a cipher.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// Key material is present but unusable (non-invertible, no letters, ...).
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// Key material required by the cipher was not supplied.
    #[error("missing key: {0}")]
    MissingKey(String),

    /// The cipher identifier is not recognised.
    #[error("unknown cipher: {0}")]
    UnknownCipher(String),

    /// Structured input could not be parsed.
    #[error("malformed input: {0}")]
    MalformedInput(String),
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_key() {
        let err = CipherError::InvalidKey("a=2 is not coprime with 26".into());
        assert_eq!(err.to_string(), "invalid key: a=2 is not coprime with 26");
    }

    #[test]
    fn test_display_unknown_cipher() {
        let err = CipherError::UnknownCipher("enigma".into());
        assert_eq!(err.to_string(), "unknown cipher: enigma");
    }
}
