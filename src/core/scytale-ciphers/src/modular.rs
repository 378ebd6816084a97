//! Modular arithmetic used by Affine and Hill key validation.

use crate::error::CipherError;

/// Greatest common divisor (always non-negative).
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Returns the unique `x` in `[0, m)` with `a * x ≡ 1 (mod m)`.
///
/// Uses the extended Euclidean algorithm. `a` is normalized into `[0, m)`
/// first, so negative values are accepted.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] when `gcd(a, m) != 1`.
pub fn mod_inverse(a: i64, m: i64) -> Result<i64, CipherError> {
    if m <= 1 {
        return Err(CipherError::InvalidKey(format!(
            "modulus must be greater than 1, got {m}"
        )));
    }

    let a = a.rem_euclid(m);
    if gcd(a, m) != 1 {
        return Err(CipherError::InvalidKey(format!(
            "no modular inverse for {a} under mod {m}"
        )));
    }

    let (mut t, mut new_t) = (0i64, 1i64);
    let (mut r, mut new_r) = (m, a);
    while new_r != 0 {
        let q = r / new_r;
        (t, new_t) = (new_t, t - q * new_t);
        (r, new_r) = (new_r, r - q * new_r);
    }

    Ok(t.rem_euclid(m))
}

/// `(x * y) mod m` in `[0, m)` without overflowing for any `i64` modulus.
#[inline]
fn mul_mod(x: i64, y: i64, m: i64) -> i128 {
    (i128::from(x) * i128::from(y)).rem_euclid(i128::from(m))
}

/// Narrows a value already reduced into `[0, m)`.
#[inline]
fn narrow(x: i128) -> i64 {
    // Reduced values are below an i64 modulus.
    x as i64
}

/// A 2×2 integer matrix, row-major.
///
/// Products are formed in `i128`, so any positive `i64` modulus is safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matrix2(pub [[i64; 2]; 2]);

impl Matrix2 {
    /// Builds a matrix from its entries in row-major order.
    pub const fn new(m00: i64, m01: i64, m10: i64, m11: i64) -> Self {
        Self([[m00, m01], [m10, m11]])
    }

    /// Copy with every entry reduced into `[0, m)`.
    pub fn reduced(&self, m: i64) -> Self {
        Self(self.0.map(|row| row.map(|x| x.rem_euclid(m))))
    }

    /// Determinant reduced into `[0, m)`.
    pub fn determinant(&self, m: i64) -> i64 {
        let [[a, b], [c, d]] = self.reduced(m).0;
        narrow((mul_mod(a, d, m) - mul_mod(b, c, m)).rem_euclid(i128::from(m)))
    }

    /// Computes `self · v mod m` for a column vector `v`.
    pub fn mul_vector(&self, v: [i64; 2], m: i64) -> [i64; 2] {
        let [[a, b], [c, d]] = self.reduced(m).0;
        let v = v.map(|x| x.rem_euclid(m));
        let row = |p: i64, q: i64| {
            narrow((mul_mod(p, v[0], m) + mul_mod(q, v[1], m)).rem_euclid(i128::from(m)))
        };
        [row(a, b), row(c, d)]
    }
}

/// Inverts a 2×2 matrix modulo `m`.
///
/// Scales the adjugate `[[d, -b], [-c, a]]` by the modular inverse of the
/// determinant and reduces every entry.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] when the determinant has no inverse
/// modulo `m`.
pub fn matrix_inverse_2x2(matrix: &Matrix2, m: i64) -> Result<Matrix2, CipherError> {
    let det = matrix.determinant(m);
    let det_inv = mod_inverse(det, m).map_err(|_| {
        CipherError::InvalidKey(format!(
            "matrix determinant {det} is not invertible mod {m}"
        ))
    })?;

    let [[a, b], [c, d]] = matrix.reduced(m).0;
    let scale = |x: i64| narrow(mul_mod(det_inv, x, m));

    Ok(Matrix2::new(scale(d), scale(-b), scale(-c), scale(a)))
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(26, 4), 2);
        assert_eq!(gcd(-5, 26), 1);
        assert_eq!(gcd(0, 7), 7);
    }

    #[test]
    fn test_mod_inverse_known_values() {
        assert_eq!(mod_inverse(5, 26).unwrap(), 21);
        assert_eq!(mod_inverse(3, 26).unwrap(), 9);
        assert_eq!(mod_inverse(25, 26).unwrap(), 25);
        assert_eq!(mod_inverse(1, 26).unwrap(), 1);
    }

    #[test]
    fn test_mod_inverse_negative_input() {
        // -5 ≡ 21 (mod 26), and 21 * 5 = 105 = 4 * 26 + 1
        assert_eq!(mod_inverse(-5, 26).unwrap(), 5);
    }

    #[test]
    fn test_mod_inverse_every_unit_mod_26() {
        for a in 0..26 {
            let result = mod_inverse(a, 26);
            if gcd(a, 26) == 1 {
                let inv = result.unwrap();
                assert_eq!((a * inv) % 26, 1, "a={a}");
            } else {
                assert!(matches!(result, Err(CipherError::InvalidKey(_))), "a={a}");
            }
        }
    }

    #[test]
    fn test_matrix_inverse_known_key() {
        let key = Matrix2::new(3, 3, 2, 5);
        let inv = matrix_inverse_2x2(&key, 26).unwrap();
        assert_eq!(inv, Matrix2::new(15, 17, 20, 9));
    }

    #[test]
    fn test_matrix_inverse_is_inverse() {
        let key = Matrix2::new(3, 3, 2, 5);
        let inv = matrix_inverse_2x2(&key, 26).unwrap();
        for v in [[0, 0], [7, 4], [25, 1], [11, 19]] {
            let there = key.mul_vector(v, 26);
            assert_eq!(inv.mul_vector(there, 26), v);
        }
    }

    #[test]
    fn test_matrix_large_modulus_does_not_overflow() {
        // (m-1)^2 exceeds i64::MAX, and (m-1)^2 ≡ 1 (mod m).
        let m = 5_000_000_000;
        let key = Matrix2::new(m - 1, 0, 0, m - 1);

        assert_eq!(key.determinant(m), 1);
        assert_eq!(key.mul_vector([m - 1, 0], m), [1, 0]);
        assert_eq!(matrix_inverse_2x2(&key, m).unwrap(), key);
    }

    #[test]
    fn test_matrix_inverse_singular() {
        // det = 2*4 - 4*2 = 0
        let result = matrix_inverse_2x2(&Matrix2::new(2, 4, 2, 4), 26);
        assert!(matches!(result, Err(CipherError::InvalidKey(_))));

        // det = 2, shares a factor with 26
        let result = matrix_inverse_2x2(&Matrix2::new(2, 0, 0, 1), 26);
        assert!(matches!(result, Err(CipherError::InvalidKey(_))));
    }
}
