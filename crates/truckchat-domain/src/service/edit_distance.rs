//! Levenshtein distance over Unicode scalar values

/// Minimum number of single-character insertions, deletions and
/// substitutions that turn `a` into `b`.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            let deletion = prev[j + 1] + 1;
            let insertion = curr[j] + 1;
            curr[j + 1] = substitution.min(deletion).min(insertion);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: [&str; 8] = ["", "truck", "trucks", "ford", "frod", "volvo", "vovo", "scania"];

    #[test]
    fn test_identical_strings() {
        assert_eq!(edit_distance("truck", "truck"), 0);
        for w in WORDS {
            assert_eq!(edit_distance(w, w), 0);
        }
    }

    #[test]
    fn test_transposition_costs_two() {
        assert_eq!(edit_distance("ford", "frod"), 2);
    }

    #[test]
    fn test_single_operations() {
        assert_eq!(edit_distance("vovo", "volvo"), 1);
        assert_eq!(edit_distance("truck", "trucks"), 1);
        assert_eq!(edit_distance("truck", "trunk"), 1);
        assert_eq!(edit_distance("", "man"), 3);
        assert_eq!(edit_distance("daf", ""), 3);
    }

    #[test]
    fn test_classic_example() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        assert_eq!(edit_distance("mercedes", "mercédès"), 2);
    }

    #[test]
    fn test_symmetry_and_triangle_inequality() {
        for a in WORDS {
            for b in WORDS {
                assert_eq!(edit_distance(a, b), edit_distance(b, a), "{a} / {b}");
                for c in WORDS {
                    assert!(
                        edit_distance(a, c) <= edit_distance(a, b) + edit_distance(b, c),
                        "{a} / {b} / {c}"
                    );
                }
            }
        }
    }
}
