//! Positional ciphers: Rail Fence and Columnar Transposition.

use tracing::debug;

use crate::keys::Keyword;

/// Padding character appended by Columnar (and Playfair/Hill).
pub const PAD: char = 'X';

/// Rail index visited by each position of a zig-zag over `rails` rows.
///
/// For 3 rails: `0 1 2 1 0 1 2 1 ...`.
fn zigzag(len: usize, rails: usize) -> Vec<usize> {
    let cycle = 2 * (rails - 1);
    (0..len)
        .map(|i| {
            let r = i % cycle;
            if r < rails {
                r
            } else {
                cycle - r
            }
        })
        .collect()
}

/// Rail Fence encryption over the raw text (spaces included).
///
/// Fewer than two rails, or empty text, returns the input unchanged. Any
/// rail count above the text length behaves like the text length.
pub fn rail_fence_encrypt(text: &str, rails: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    // The zig-zag never reaches more rows than there are characters.
    let rails = rails.min(chars.len());
    if rails < 2 {
        debug!(rails, "rail fence identity");
        return text.to_string();
    }

    let mut fence: Vec<String> = vec![String::new(); rails];
    for (ch, rail) in chars.iter().zip(zigzag(chars.len(), rails)) {
        fence[rail].push(*ch);
    }
    fence.concat()
}

/// Rail Fence decryption.
///
/// Recomputes the zig-zag pattern for the ciphertext length, cuts the
/// ciphertext into per-rail runs sized by how often each rail is visited,
/// then walks the pattern again taking the next character from each rail.
pub fn rail_fence_decrypt(cipher: &str, rails: usize) -> String {
    let chars: Vec<char> = cipher.chars().collect();
    let rails = rails.min(chars.len());
    if rails < 2 {
        debug!(rails, "rail fence identity");
        return cipher.to_string();
    }

    let pattern = zigzag(chars.len(), rails);

    let mut counts = vec![0usize; rails];
    for &rail in &pattern {
        counts[rail] += 1;
    }

    let mut runs: Vec<&[char]> = Vec::with_capacity(rails);
    let mut pos = 0;
    for count in counts {
        runs.push(&chars[pos..pos + count]);
        pos += count;
    }

    let mut cursor = vec![0usize; rails];
    pattern
        .into_iter()
        .map(|rail| {
            let ch = runs[rail][cursor[rail]];
            cursor[rail] += 1;
            ch
        })
        .collect()
}

/// Column read order for a keyword: indices sorted by `(char, index)`.
fn column_order(keyword: &Keyword) -> Vec<usize> {
    let mut pairs: Vec<(char, usize)> = keyword
        .as_str()
        .chars()
        .enumerate()
        .map(|(i, ch)| (ch, i))
        .collect();
    pairs.sort();
    pairs.into_iter().map(|(_, i)| i).collect()
}

/// Columnar Transposition encryption.
///
/// Spaces are removed, the text is padded with `X` to fill the last row,
/// and the columns are read out in keyword order.
pub fn columnar_encrypt(text: &str, keyword: &Keyword) -> String {
    let cols = keyword.as_str().chars().count();
    let mut grid: Vec<char> = text.chars().filter(|&c| c != ' ').collect();
    let rows = grid.len().div_ceil(cols);
    grid.resize(rows * cols, PAD);

    let mut out = String::with_capacity(grid.len());
    for col in column_order(keyword) {
        for row in 0..rows {
            out.push(grid[row * cols + col]);
        }
    }
    out
}

/// Columnar Transposition decryption.
///
/// Trailing `X` characters are stripped from the result, which also drops
/// any literal trailing `X` of the original plaintext.
pub fn columnar_decrypt(cipher: &str, keyword: &Keyword) -> String {
    let cols = keyword.as_str().chars().count();
    let chars: Vec<char> = cipher.chars().collect();
    let rows = chars.len().div_ceil(cols);

    // A ciphertext that is not a whole grid leaves the last columns short.
    let mut columns: Vec<&[char]> = vec![&chars[..0]; cols];
    let mut pos = 0;
    for col in column_order(keyword) {
        let end = (pos + rows).min(chars.len());
        columns[col] = &chars[pos..end];
        pos = end;
    }

    let mut plain = String::with_capacity(chars.len());
    for row in 0..rows {
        for column in &columns {
            if let Some(&ch) = column.get(row) {
                plain.push(ch);
            }
        }
    }

    plain.trim_end_matches(PAD).to_string()
}
