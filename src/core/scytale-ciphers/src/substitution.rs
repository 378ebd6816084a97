//! Keyed monoalphabetic substitution with a full 26-letter key.
//!
//! Text is uppercased before mapping; non-letters pass through.

use rand::{rngs::OsRng, seq::SliceRandom};

use crate::alphabet::{letter, UPPERCASE};
use crate::cipher::Direction;
use crate::error::CipherError;

/// A permutation of `A-Z` and its inverse.
#[derive(Clone, PartialEq, Eq)]
pub struct SubstitutionKey {
    forward: [u8; 26],
    reverse: [u8; 26],
}

impl SubstitutionKey {
    /// Draws a uniformly random permutation from the OS CSPRNG.
    pub fn generate() -> Self {
        let mut forward = *UPPERCASE;
        forward.shuffle(&mut OsRng);
        Self::from_permutation(forward)
    }

    /// Parses a key written as the 26 cipher letters for `A..Z`.
    ///
    /// Case is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] unless `alphabet` contains every
    /// letter exactly once and nothing else.
    pub fn from_alphabet(alphabet: &str) -> Result<Self, CipherError> {
        let mut forward = [0u8; 26];
        let mut seen = [false; 26];
        let mut len = 0usize;

        for ch in alphabet.chars() {
            let l = letter(ch).ok_or_else(|| {
                CipherError::InvalidKey(format!(
                    "substitution alphabet contains non-letter {ch:?}"
                ))
            })?;
            if len == 26 {
                return Err(CipherError::InvalidKey(
                    "substitution alphabet is longer than 26 letters".to_string(),
                ));
            }
            if seen[l.index as usize] {
                return Err(CipherError::InvalidKey(format!(
                    "substitution alphabet repeats {}",
                    UPPERCASE[l.index as usize] as char
                )));
            }
            seen[l.index as usize] = true;
            forward[len] = UPPERCASE[l.index as usize];
            len += 1;
        }

        if len != 26 {
            return Err(CipherError::InvalidKey(format!(
                "substitution alphabet needs 26 letters, got {len}"
            )));
        }

        Ok(Self::from_permutation(forward))
    }

    fn from_permutation(forward: [u8; 26]) -> Self {
        let mut reverse = [0u8; 26];
        for (plain, &cipher) in forward.iter().enumerate() {
            reverse[(cipher - b'A') as usize] = b'A' + plain as u8;
        }
        Self { forward, reverse }
    }

    /// The cipher alphabet, i.e. the images of `A..Z`.
    pub fn alphabet(&self) -> String {
        self.forward.iter().map(|&c| c as char).collect()
    }
}

impl std::fmt::Debug for SubstitutionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubstitutionKey")
            .field("forward", &"[REDACTED]")
            .finish()
    }
}

/// Maps every letter through the key (or its inverse).
///
/// Only ASCII is uppercased; non-ASCII characters such as `é` pass through
/// unchanged.
pub fn substitute(text: &str, key: &SubstitutionKey, direction: Direction) -> String {
    let table = match direction {
        Direction::Encrypt => &key.forward,
        Direction::Decrypt => &key.reverse,
    };

    text.chars()
        .map(|ch| match letter(ch) {
            Some(l) => table[l.index as usize] as char,
            None => ch.to_ascii_uppercase(),
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
mod tests {
    use super::*;

    const QWERTY: &str = "QWERTYUIOPASDFGHJKLZXCVBNM";

    #[test]
    fn test_from_alphabet_roundtrip() {
        let key = SubstitutionKey::from_alphabet(QWERTY).unwrap();
        let ct = substitute("Hello, World!", &key, Direction::Encrypt);
        assert_eq!(ct, "ITSSG, VGKSR!");
        assert_eq!(
            substitute(&ct, &key, Direction::Decrypt),
            "HELLO, WORLD!"
        );
    }

    #[test]
    fn test_non_ascii_passes_through() {
        let key = SubstitutionKey::from_alphabet(QWERTY).unwrap();
        assert_eq!(substitute("café ß", &key, Direction::Encrypt), "EQYé ß");
    }

    #[test]
    fn test_from_alphabet_case_insensitive() {
        let upper = SubstitutionKey::from_alphabet(QWERTY).unwrap();
        let lower = SubstitutionKey::from_alphabet(&QWERTY.to_lowercase()).unwrap();
        assert_eq!(upper, lower);
        assert_eq!(lower.alphabet(), QWERTY);
    }

    #[test]
    fn test_from_alphabet_rejects_bad_keys() {
        let too_short = &QWERTY[..25];
        let repeated = "QQERTYUIOPASDFGHJKLZXCVBNM";
        let too_long = format!("{QWERTY}A");
        let non_letter = "QWERTYUIOPASDFGHJKLZXCVBN1";

        for bad in [too_short, repeated, too_long.as_str(), non_letter, ""] {
            assert!(
                matches!(
                    SubstitutionKey::from_alphabet(bad),
                    Err(CipherError::InvalidKey(_))
                ),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn test_generate_is_permutation() {
        let key = SubstitutionKey::generate();
        let parsed = SubstitutionKey::from_alphabet(&key.alphabet()).unwrap();
        assert_eq!(parsed, key);
    }

    #[test]
    fn test_generated_keys_differ() {
        // 26! permutations; a collision here means the RNG is broken.
        let a = SubstitutionKey::generate();
        let b = SubstitutionKey::generate();
        assert_ne!(a.alphabet(), b.alphabet());
    }

    #[test]
    fn test_debug_redacted() {
        let key = SubstitutionKey::from_alphabet(QWERTY).unwrap();
        assert!(!format!("{:?}", key).contains(QWERTY));
    }
}
