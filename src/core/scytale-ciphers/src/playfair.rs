//! Playfair digraph substitution over a 5×5 key square.
//!
//! `J` is merged into `I` so the square holds 25 letters.

use crate::alphabet::{letter, UPPERCASE};
use crate::cipher::Direction;
use crate::keys::Keyword;
use crate::transposition::PAD;

const SIZE: usize = 5;

/// Alphabet without `J`, in square fill order.
const FILL: &[u8; 25] = b"ABCDEFGHIKLMNOPQRSTUVWXYZ";

/// Uppercase letters of `text` with `J` folded into `I`.
fn normalize(text: &str) -> Vec<u8> {
    text.chars()
        .filter_map(letter)
        .map(|l| match UPPERCASE[l.index as usize] {
            b'J' => b'I',
            c => c,
        })
        .collect()
}

/// The 5×5 Playfair grid plus a reverse index for O(1) lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySquare {
    grid: [[u8; SIZE]; SIZE],
    positions: [(u8, u8); 26],
}

impl KeySquare {
    /// Builds the square from the keyword's unique letters followed by the
    /// rest of the alphabet.
    pub fn new(keyword: &Keyword) -> Self {
        let mut grid = [[0u8; SIZE]; SIZE];
        let mut positions = [(0u8, 0u8); 26];
        let mut seen = [false; 26];
        let mut filled = 0usize;

        for c in normalize(keyword.as_str()).into_iter().chain(FILL.iter().copied()) {
            let idx = (c - b'A') as usize;
            if seen[idx] {
                continue;
            }
            seen[idx] = true;
            let (row, col) = (filled / SIZE, filled % SIZE);
            grid[row][col] = c;
            positions[idx] = (row as u8, col as u8);
            filled += 1;
        }

        Self { grid, positions }
    }

    /// Row and column of an uppercase letter other than `J`.
    #[inline]
    fn locate(&self, c: u8) -> (usize, usize) {
        let (r, c) = self.positions[(c - b'A') as usize];
        (r as usize, c as usize)
    }

    #[inline]
    fn at(&self, row: usize, col: usize) -> char {
        self.grid[row % SIZE][col % SIZE] as char
    }

    /// Rows of the square as strings, top to bottom.
    pub fn rows(&self) -> Vec<String> {
        self.grid
            .iter()
            .map(|row| row.iter().map(|&c| c as char).collect())
            .collect()
    }

    /// Substitutes one digraph.
    fn substitute(&self, a: u8, b: u8, direction: Direction, out: &mut String) {
        let (ra, ca) = self.locate(a);
        let (rb, cb) = self.locate(b);
        // Stepping left/up is stepping SIZE-1 to the right/down.
        let step = match direction {
            Direction::Encrypt => 1,
            Direction::Decrypt => SIZE - 1,
        };

        if ra == rb {
            out.push(self.at(ra, ca + step));
            out.push(self.at(rb, cb + step));
        } else if ca == cb {
            out.push(self.at(ra + step, ca));
            out.push(self.at(rb + step, cb));
        } else {
            out.push(self.at(ra, cb));
            out.push(self.at(rb, ca));
        }
    }
}

/// Splits plaintext into Playfair digraphs.
///
/// Letters only, uppercase, `J`→`I`. A pair of identical letters gets an
/// `X` after the first letter and pairing resumes from the second; an odd
/// final letter is padded with `X`.
pub fn format_playfair_text(text: &str) -> String {
    let letters = normalize(text);
    let mut out = String::with_capacity(letters.len() + letters.len() / 2 + 1);

    let mut i = 0;
    while i < letters.len() {
        let a = letters[i];
        let b = letters.get(i + 1).copied().unwrap_or(PAD as u8);
        out.push(a as char);
        if a == b {
            out.push(PAD);
            i += 1;
        } else {
            out.push(b as char);
            i += 2;
        }
    }

    if out.len() % 2 != 0 {
        out.push(PAD);
    }
    out
}

/// Playfair encryption or decryption.
///
/// Encryption formats the plaintext with [`format_playfair_text`].
/// Decryption only normalizes letters (and pads an odd tail), since a
/// ciphertext never needs filler insertion.
pub fn playfair(text: &str, key: &KeySquare, direction: Direction) -> String {
    let mut prepared = match direction {
        Direction::Encrypt => format_playfair_text(text).into_bytes(),
        Direction::Decrypt => normalize(text),
    };
    if prepared.len() % 2 != 0 {
        prepared.push(PAD as u8);
    }

    let mut out = String::with_capacity(prepared.len());
    for pair in prepared.chunks_exact(2) {
        key.substitute(pair[0], pair[1], direction, &mut out);
    }
    out
}
