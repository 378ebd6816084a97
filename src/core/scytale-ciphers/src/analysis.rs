//! Caesar cryptanalysis: exhaustive enumeration and chi-squared ranking.

use serde::Serialize;
use tracing::{debug, trace};

use crate::cipher::Direction;
use crate::frequency::chi_squared;
use crate::monoalphabetic::caesar;

/// Shifts tried by every analysis routine.
pub const CANDIDATE_SHIFTS: std::ops::RangeInclusive<u8> = 1..=25;

/// One Caesar decryption guess.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    /// Shift used to decrypt.
    pub shift: u8,
    /// Resulting plaintext.
    pub plaintext: String,
    /// Chi-squared score; lower is more English-like.
    pub score: f64,
}

/// Decrypts `ciphertext` with every shift from 1 to 25.
pub fn brute_force_caesar(ciphertext: &str) -> Vec<(u8, String)> {
    CANDIDATE_SHIFTS
        .map(|shift| {
            (
                shift,
                caesar(ciphertext, i64::from(shift), Direction::Decrypt),
            )
        })
        .collect()
}

/// Scores every brute-force candidate and sorts them best first.
///
/// Equal scores are ordered by descending shift, so the head of the list
/// always agrees with [`auto_decrypt_caesar`].
pub fn rank_caesar_candidates(ciphertext: &str) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = brute_force_caesar(ciphertext)
        .into_iter()
        .map(|(shift, plaintext)| {
            let score = chi_squared(&plaintext);
            trace!(shift, score, "scored candidate");
            Candidate {
                shift,
                plaintext,
                score,
            }
        })
        .collect();

    candidates.sort_by(|a, b| {
        a.score
            .total_cmp(&b.score)
            .then_with(|| b.shift.cmp(&a.shift))
    });
    candidates
}

/// Recovers the most likely Caesar shift and plaintext.
///
/// Picks the candidate with the lowest chi-squared score; on a tie the
/// largest shift wins. Text without letters yields shift 25.
pub fn auto_decrypt_caesar(ciphertext: &str) -> (u8, String) {
    let mut best: Option<Candidate> = None;

    for (shift, plaintext) in brute_force_caesar(ciphertext) {
        let score = chi_squared(&plaintext);
        trace!(shift, score, "scored candidate");
        if best.as_ref().map_or(true, |b| score <= b.score) {
            best = Some(Candidate {
                shift,
                plaintext,
                score,
            });
        }
    }

    match best {
        Some(c) => {
            debug!(shift = c.shift, score = c.score, "caesar key recovered");
            (c.shift, c.plaintext)
        },
        None => (*CANDIDATE_SHIFTS.end(), ciphertext.to_string()),
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
mod tests {
    use super::*;

    const SAMPLE: &str = "It was the best of times, it was the worst of times, it was the age \
        of wisdom, it was the age of foolishness, it was the epoch of belief, it was the \
        epoch of incredulity, it was the season of Light, it was the season of Darkness.";

    #[test]
    fn test_brute_force_enumerates_1_to_25() {
        let all = brute_force_caesar("Khoor");
        assert_eq!(all.len(), 25);
        assert_eq!(all[0], (1, "Jgnnq".to_string()));
        assert_eq!(all[2], (3, "Hello".to_string()));
        assert_eq!(all[24].0, 25);
    }

    #[test]
    fn test_auto_decrypt_recovers_every_shift() {
        for k in 1..=25u8 {
            let ct = caesar(SAMPLE, i64::from(k), Direction::Encrypt);
            let (shift, plain) = auto_decrypt_caesar(&ct);
            assert_eq!(shift, k);
            assert_eq!(plain, SAMPLE);
        }
    }

    #[test]
    fn test_rank_best_first() {
        let ct = caesar(SAMPLE, 13, Direction::Encrypt);
        let ranked = rank_caesar_candidates(&ct);
        assert_eq!(ranked.len(), 25);
        assert_eq!(ranked[0].shift, 13);
        assert!(ranked.windows(2).all(|w| w[0].score <= w[1].score));
    }

    #[test]
    fn test_no_letters_ties_go_to_last_shift() {
        assert_eq!(auto_decrypt_caesar("12345"), (25, "12345".to_string()));
        assert_eq!(auto_decrypt_caesar(""), (25, String::new()));

        let ranked = rank_caesar_candidates("...");
        let shifts: Vec<u8> = ranked.iter().map(|c| c.shift).collect();
        assert_eq!(shifts, CANDIDATE_SHIFTS.rev().collect::<Vec<_>>());
    }

    #[test]
    fn test_rank_head_matches_auto_decrypt() {
        for text in ["Khoor, Zruog!", "...", "Gur dhvpx oebja sbk"] {
            let ranked = rank_caesar_candidates(text);
            let (shift, plain) = auto_decrypt_caesar(text);
            assert_eq!(ranked[0].shift, shift, "{text:?}");
            assert_eq!(ranked[0].plaintext, plain, "{text:?}");
        }
    }
}
