//! The 26-letter Latin alphabet shared by every cipher.
//!
//! Letter classification goes through a precomputed ASCII table so each
//! character costs a single array load. Only ASCII `A-Z` / `a-z` count as
//! letters; everything else (digits, punctuation, whitespace, non-ASCII) is
//! left for the individual ciphers to pass through or strip.

/// Number of letters in the alphabet; every transform works modulo this.
pub const MODULUS: i64 = 26;

/// Uppercase alphabet in index order.
pub const UPPERCASE: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Lowercase alphabet in index order.
pub const LOWERCASE: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Letter case of an alphabetic character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    /// `A-Z`.
    Upper,
    /// `a-z`.
    Lower,
}

/// An alphabetic character decomposed into its index and case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Letter {
    /// Position in the alphabet, `0..26`.
    pub index: u8,
    /// Original case.
    pub case: Case,
}

impl Letter {
    /// Renders an index (reduced modulo 26) in the given case.
    #[inline]
    pub fn render(index: i64, case: Case) -> char {
        let i = reduce(index) as usize;
        match case {
            Case::Upper => UPPERCASE[i] as char,
            Case::Lower => LOWERCASE[i] as char,
        }
    }

    /// Returns a letter with the same case and a new index.
    #[inline]
    pub fn with_index(self, index: i64) -> char {
        Self::render(index, self.case)
    }
}

static LETTER_TABLE: [Option<Letter>; 128] = build_letter_table();

const fn build_letter_table() -> [Option<Letter>; 128] {
    let mut table = [None; 128];
    let mut i = 0;
    while i < 26 {
        table[b'A' as usize + i] = Some(Letter {
            index: i as u8,
            case: Case::Upper,
        });
        table[b'a' as usize + i] = Some(Letter {
            index: i as u8,
            case: Case::Lower,
        });
        i += 1;
    }
    table
}

/// Classifies a character, returning `None` for anything that is not an
/// ASCII letter.
#[inline]
pub fn letter(ch: char) -> Option<Letter> {
    if ch.is_ascii() {
        LETTER_TABLE[ch as usize]
    } else {
        None
    }
}

/// Reduces any integer into `0..26`.
#[inline]
pub fn reduce(value: i64) -> u8 {
    value.rem_euclid(MODULUS) as u8
}

/// Keeps only the letters of `text`, uppercased.
pub fn letters_upper(text: &str) -> String {
    text.chars()
        .filter_map(letter)
        .map(|l| UPPERCASE[l.index as usize] as char)
        .collect()
}

/// Alphabet indices of the letters of `text`, in order.
pub fn letter_indices(text: &str) -> Vec<u8> {
    text.chars().filter_map(letter).map(|l| l.index).collect()
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_lookup() {
        assert_eq!(
            letter('A'),
            Some(Letter {
                index: 0,
                case: Case::Upper
            })
        );
        assert_eq!(
            letter('z'),
            Some(Letter {
                index: 25,
                case: Case::Lower
            })
        );
        assert_eq!(letter(' '), None);
        assert_eq!(letter('7'), None);
        assert_eq!(letter('é'), None);
    }

    #[test]
    fn test_render_wraps_negative() {
        assert_eq!(Letter::render(-1, Case::Upper), 'Z');
        assert_eq!(Letter::render(27, Case::Lower), 'b');
    }

    #[test]
    fn test_letters_upper_strips() {
        assert_eq!(letters_upper("Hello, World! 42"), "HELLOWORLD");
        assert_eq!(letter_indices("a-b c"), vec![0, 1, 2]);
    }
}
