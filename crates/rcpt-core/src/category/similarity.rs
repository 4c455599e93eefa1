//! Edit-distance based string similarity.

/// Similarity of two strings on a 0-100 scale.
///
/// Computed as `2 * M / T` where `M` is the length of the longest common
/// subsequence and `T` the combined length, i.e. one minus the normalized
/// insert/delete distance. Rounded half to even; two empty strings score 0.
pub fn ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();

    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let matched = longest_common_subsequence(&a, &b);
    round_half_even(200 * matched, total) as u8
}

fn longest_common_subsequence(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for ca in a {
        for (j, cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                curr[j].max(prev[j + 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

fn round_half_even(numerator: usize, denominator: usize) -> usize {
    let quotient = numerator / denominator;
    let twice_remainder = 2 * (numerator % denominator);

    if twice_remainder > denominator || (twice_remainder == denominator && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    }
}
