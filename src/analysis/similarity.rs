/// Fuzzy substring similarity in `0.0..=100.0`.
///
/// The shorter string is slid across the longer one and scored against
/// every window with the indel ratio `2 * lcs / (len_a + len_b)`. Windows
/// hanging off either end of the longer string are included, so "sql" still
/// scores well against "mysql" and "python" against "py".
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.len() < b.len() {
        aligned_ratio(&a, &b)
    } else if a.len() > b.len() {
        aligned_ratio(&b, &a)
    } else {
        // Equal lengths: the edge windows differ by direction, so try both.
        aligned_ratio(&a, &b).max(aligned_ratio(&b, &a))
    }
}

fn aligned_ratio(short: &[char], long: &[char]) -> f64 {
    if short.is_empty() {
        return 0.0;
    }

    let n = short.len();
    let m = long.len();
    let mut best = 0.0_f64;

    // Prefixes and suffixes of the long string shorter than the needle.
    for len in 1..n {
        best = best.max(ratio(short, &long[..len]));
        best = best.max(ratio(short, &long[m - len..]));
    }

    for start in 0..=(m - n) {
        best = best.max(ratio(short, &long[start..start + n]));
        if best >= 100.0 {
            return 100.0;
        }
    }

    best
}

/// Indel similarity of two sequences in `0.0..=100.0`.
pub fn ratio(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 0.0;
    }
    (200 * lcs_len(a, b)) as f64 / total as f64
}

fn lcs_len(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
