//! Keystream ciphers: Vigenère, Autokey and Beaufort.
//!
//! Vigenère keeps case and punctuation and only advances its keystream on
//! letters. Autokey and Beaufort work on the uppercase letters of the input
//! and drop everything else.

use crate::alphabet::{self, letter, Case, Letter};
use crate::cipher::Direction;
use crate::keys::Keyword;

/// Vigenère: shift each letter by the next keyword letter.
///
/// The keystream position advances only when the current input character
/// is a letter, so spaces and punctuation do not consume key.
pub fn vigenere(text: &str, key: &Keyword, direction: Direction) -> String {
    let shifts = key.shifts();
    let mut ki = 0usize;

    text.chars()
        .map(|ch| match letter(ch) {
            Some(l) => {
                let shift = i64::from(shifts[ki % shifts.len()]);
                ki += 1;
                let i = i64::from(l.index);
                match direction {
                    Direction::Encrypt => l.with_index(i + shift),
                    Direction::Decrypt => l.with_index(i - shift),
                }
            },
            None => ch,
        })
        .collect()
}

/// Autokey: the keyword primes the keystream, then the plaintext extends it.
///
/// Output is uppercase letters only.
pub fn autokey(text: &str, key: &Keyword, direction: Direction) -> String {
    let input = alphabet::letter_indices(text);
    let mut stream: Vec<u8> = key.shifts().to_vec();
    stream.reserve(input.len());

    match direction {
        Direction::Encrypt => {
            stream.extend_from_slice(&input);
            input
                .iter()
                .zip(&stream)
                .map(|(&p, &k)| Letter::render(i64::from(p) + i64::from(k), Case::Upper))
                .collect()
        },
        Direction::Decrypt => {
            // Each recovered letter becomes key for a later position.
            let mut out = String::with_capacity(input.len());
            for (pos, &c) in input.iter().enumerate() {
                let plain = alphabet::reduce(i64::from(c) - i64::from(stream[pos]));
                stream.push(plain);
                out.push(Letter::render(i64::from(plain), Case::Upper));
            }
            out
        },
    }
}

/// Beaufort: `shift - index` with a cycling keyword.
///
/// The same formula encrypts and decrypts. Output is uppercase letters only.
pub fn beaufort(text: &str, key: &Keyword) -> String {
    let shifts = key.shifts();

    alphabet::letter_indices(text)
        .into_iter()
        .enumerate()
        .map(|(ki, i)| {
            let shift = i64::from(shifts[ki % shifts.len()]);
            Letter::render(shift - i64::from(i), Case::Upper)
        })
        .collect()
}
