//! Validated key types.
//!
//! Every key is checked once at construction. A value of one of these types
//! is always usable, so the transforms that consume them cannot fail.

use crate::alphabet::{self, MODULUS};
use crate::error::CipherError;
use crate::modular::{matrix_inverse_2x2, mod_inverse, Matrix2};

/// A keyword containing at least one ASCII letter.
///
/// The raw text is kept for ciphers that use it verbatim (Columnar); the
/// letter values form the keystream for the polyalphabetic ciphers.
#[derive(Clone, PartialEq, Eq)]
pub struct Keyword {
    raw: String,
    shifts: Vec<u8>,
}

impl Keyword {
    /// Validates a keyword.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] if the keyword has no letters.
    pub fn new(raw: &str) -> Result<Self, CipherError> {
        let shifts = alphabet::letter_indices(raw);
        if shifts.is_empty() {
            return Err(CipherError::InvalidKey(
                "keyword must contain at least one alphabetic character".to_string(),
            ));
        }

        Ok(Self {
            raw: raw.to_string(),
            shifts,
        })
    }

    /// The keyword exactly as supplied.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Alphabet indices of the keyword's letters (non-letters dropped).
    #[inline]
    pub fn shifts(&self) -> &[u8] {
        &self.shifts
    }
}

impl std::fmt::Debug for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Keyword")
            .field("raw", &"[REDACTED]")
            .field("len", &self.raw.len())
            .finish()
    }
}

/// Affine key `(a, b)` with `a` invertible modulo 26.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AffineKey {
    a: i64,
    b: i64,
    a_inv: i64,
}

impl AffineKey {
    /// Validates an affine key.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] if `a` is not coprime with 26.
    pub fn new(a: i64, b: i64) -> Result<Self, CipherError> {
        let a_inv = mod_inverse(a, MODULUS).map_err(|_| {
            CipherError::InvalidKey(format!("affine a={a} is not coprime with {MODULUS}"))
        })?;

        Ok(Self { a, b, a_inv })
    }

    /// Multiplier.
    #[inline]
    pub fn a(&self) -> i64 {
        self.a
    }

    /// Offset.
    #[inline]
    pub fn b(&self) -> i64 {
        self.b
    }

    /// Modular inverse of `a`.
    #[inline]
    pub fn a_inverse(&self) -> i64 {
        self.a_inv
    }
}

/// Hill 2×2 key matrix together with its inverse modulo 26.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HillKey {
    matrix: Matrix2,
    inverse: Matrix2,
}

impl HillKey {
    /// Validates a key matrix.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] if the determinant is not
    /// invertible modulo 26.
    pub fn new(matrix: Matrix2) -> Result<Self, CipherError> {
        let inverse = matrix_inverse_2x2(&matrix, MODULUS)?;
        Ok(Self { matrix, inverse })
    }

    /// Builds a key from four entries in row-major order.
    pub fn from_entries(entries: [i64; 4]) -> Result<Self, CipherError> {
        let [a, b, c, d] = entries;
        Self::new(Matrix2::new(a, b, c, d))
    }

    /// The encryption matrix.
    #[inline]
    pub fn matrix(&self) -> &Matrix2 {
        &self.matrix
    }

    /// The decryption matrix.
    #[inline]
    pub fn inverse(&self) -> &Matrix2 {
        &self.inverse
    }
}
