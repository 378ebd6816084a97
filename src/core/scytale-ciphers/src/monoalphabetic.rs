//! Single-alphabet substitutions: Caesar, Atbash, Affine and the
//! Caesar→Atbash hybrid.
//!
//! All of them preserve case and pass non-letters through unchanged.

use crate::alphabet::letter;
use crate::cipher::Direction;
use crate::keys::AffineKey;

/// Maps every letter of `text` through `f(index) -> new index`, keeping case.
fn map_letters(text: &str, f: impl Fn(i64) -> i64) -> String {
    text.chars()
        .map(|ch| match letter(ch) {
            Some(l) => l.with_index(f(i64::from(l.index))),
            None => ch,
        })
        .collect()
}

/// Caesar shift by `k` positions. Any integer is accepted.
pub fn caesar(text: &str, k: i64, direction: Direction) -> String {
    let k = k.rem_euclid(26);
    match direction {
        Direction::Encrypt => map_letters(text, |i| i + k),
        Direction::Decrypt => map_letters(text, |i| i - k),
    }
}

/// Atbash mirror `i ↦ 25 - i`. Encryption and decryption are the same map.
pub fn atbash(text: &str) -> String {
    map_letters(text, |i| 25 - i)
}

/// Affine substitution `a·i + b`; decryption uses the cached `a⁻¹`.
pub fn affine(text: &str, key: &AffineKey, direction: Direction) -> String {
    let (a, b) = (key.a().rem_euclid(26), key.b().rem_euclid(26));
    match direction {
        Direction::Encrypt => map_letters(text, |i| a * i + b),
        Direction::Decrypt => {
            let a_inv = key.a_inverse();
            map_letters(text, |i| a_inv * (i - b))
        },
    }
}

/// Caesar followed by Atbash.
///
/// The two steps do not commute, so decryption undoes Atbash first and
/// then the shift.
pub fn hybrid(text: &str, k: i64, direction: Direction) -> String {
    match direction {
        Direction::Encrypt => atbash(&caesar(text, k, Direction::Encrypt)),
        Direction::Decrypt => caesar(&atbash(text), k, Direction::Decrypt),
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
mod tests {
    use super::*;

    #[test]
    fn test_caesar_single_letters() {
        assert_eq!(caesar("A", 1, Direction::Encrypt), "B");
        assert_eq!(caesar("Z", 1, Direction::Encrypt), "A");
        assert_eq!(caesar("a", -1, Direction::Encrypt), "z");
    }

    #[test]
    fn test_caesar_preserves_case_and_punctuation() {
        assert_eq!(
            caesar("Hello, World!", 3, Direction::Encrypt),
            "Khoor, Zruog!"
        );
        assert_eq!(
            caesar("Khoor, Zruog!", 3, Direction::Decrypt),
            "Hello, World!"
        );
    }

    #[test]
    fn test_caesar_large_shift_is_reduced() {
        assert_eq!(
            caesar("abc", 27, Direction::Encrypt),
            caesar("abc", 1, Direction::Encrypt)
        );
        assert_eq!(caesar("abc", 26, Direction::Encrypt), "abc");
        assert_eq!(caesar("abc", i64::MIN, Direction::Encrypt).len(), 3);
    }

    #[test]
    fn test_caesar_roundtrip_range() {
        let text = "The quick brown fox, 123!";
        for k in -100..=100 {
            let ct = caesar(text, k, Direction::Encrypt);
            assert_eq!(caesar(&ct, k, Direction::Decrypt), text, "k={k}");
        }
    }

    #[test]
    fn test_atbash_known_and_involutive() {
        assert_eq!(atbash("Hello, World!"), "Svool, Dliow!");
        assert_eq!(atbash(&atbash("Mixed Case 99")), "Mixed Case 99");
    }

    #[test]
    fn test_affine_known_vector() {
        let key = AffineKey::new(5, 8).unwrap();
        let ct = affine("AFFINE cipher", &key, Direction::Encrypt);
        assert_eq!(ct, "IHHWVC swfrcp");
        assert_eq!(affine(&ct, &key, Direction::Decrypt), "AFFINE cipher");
    }

    #[test]
    fn test_affine_hello_world_roundtrip() {
        let key = AffineKey::new(5, 8).unwrap();
        let ct = affine("HELLO WORLD", &key, Direction::Encrypt);
        assert_eq!(affine(&ct, &key, Direction::Decrypt), "HELLO WORLD");
    }

    #[test]
    fn test_affine_negative_b() {
        let key = AffineKey::new(7, -3).unwrap();
        let ct = affine("Negative offset", &key, Direction::Encrypt);
        assert_eq!(affine(&ct, &key, Direction::Decrypt), "Negative offset");
    }

    #[test]
    fn test_hybrid_order() {
        // Caesar(A, 3) = D, Atbash(D) = W
        assert_eq!(hybrid("A", 3, Direction::Encrypt), "W");
        assert_eq!(hybrid("W", 3, Direction::Decrypt), "A");

        let text = "Attack at dawn!";
        let ct = hybrid(text, 11, Direction::Encrypt);
        assert_eq!(hybrid(&ct, 11, Direction::Decrypt), text);
    }
}
