//! Hill cipher with a 2×2 key matrix.

use crate::alphabet::{self, Case, Letter, MODULUS};
use crate::cipher::Direction;
use crate::keys::HillKey;
use crate::transposition::PAD;

/// Multiplies each two-letter block by the key (or its inverse) mod 26.
///
/// Input is reduced to uppercase letters and padded with `X` to an even
/// length in both directions.
pub fn hill(text: &str, key: &HillKey, direction: Direction) -> String {
    let mut nums: Vec<i64> = alphabet::letter_indices(text)
        .into_iter()
        .map(i64::from)
        .collect();
    if nums.len() % 2 != 0 {
        nums.push(i64::from(PAD as u8 - b'A'));
    }

    let matrix = match direction {
        Direction::Encrypt => key.matrix(),
        Direction::Decrypt => key.inverse(),
    };

    let mut out = String::with_capacity(nums.len());
    for block in nums.chunks_exact(2) {
        let [x, y] = matrix.mul_vector([block[0], block[1]], MODULUS);
        out.push(Letter::render(x, Case::Upper));
        out.push(Letter::render(y, Case::Upper));
    }
    out
}
