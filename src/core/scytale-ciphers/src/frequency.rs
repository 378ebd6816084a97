//! English letter frequencies and the chi-squared goodness-of-fit score.

use crate::alphabet::letter;

/// Relative frequency (percent) of `a..z` in English text.
pub const ENGLISH_FREQUENCIES: [f64; 26] = [
    8.12, 1.49, 2.71, 4.32, 12.02, 2.30, 2.03, 5.92, 7.31, 0.10, 0.69, 3.98, 2.61,
    6.95, 7.68, 1.82, 0.11, 6.02, 6.28, 9.10, 2.88, 1.11, 2.09, 0.17, 2.11, 0.07,
];

/// Case-folded letter counts; non-letters are ignored.
pub fn letter_counts(text: &str) -> [usize; 26] {
    let mut counts = [0usize; 26];
    for l in text.chars().filter_map(letter) {
        counts[l.index as usize] += 1;
    }
    counts
}

/// Chi-squared statistic of `text` against [`ENGLISH_FREQUENCIES`].
///
/// Lower means closer to English. Text with no letters scores `+∞`.
pub fn chi_squared(text: &str) -> f64 {
    let counts = letter_counts(text);
    let n: usize = counts.iter().sum();
    if n == 0 {
        return f64::INFINITY;
    }

    counts
        .iter()
        .zip(ENGLISH_FREQUENCIES)
        .filter(|(_, f)| *f > 0.0)
        .map(|(&observed, f)| {
            let expected = f * n as f64 / 100.0;
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sums_to_roughly_100() {
        let total: f64 = ENGLISH_FREQUENCIES.iter().sum();
        assert!((total - 100.0).abs() < 0.5, "total = {total}");
    }

    #[test]
    fn test_letter_counts_fold_case() {
        let counts = letter_counts("Aa b!");
        assert_eq!(counts[0], 2);
        assert_eq!(counts[1], 1);
        assert_eq!(counts.iter().sum::<usize>(), 3);
    }

    #[test]
    fn test_chi_squared_no_letters() {
        assert!(chi_squared("").is_infinite());
        assert!(chi_squared("123 !?").is_infinite());
    }

    #[test]
    fn test_english_scores_lower_than_gibberish() {
        let english = "It was the best of times, it was the worst of times";
        let gibberish = "Qz xjq vkz wxq zq qjvkx, zq xjq vkz zqxjk qz xzjkq";
        assert!(chi_squared(english) < chi_squared(gibberish));
    }
}
