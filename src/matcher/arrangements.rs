//! Ordered arrangements without replacement
//!
//! Every letter instance is a distinct pool slot, so a pool with repeated
//! characters yields repeated arrangements. Callers collapse them if needed.

/// Visit every ordered selection of `len` slots from `pool`
///
/// Arrangements are produced in lexicographic order of slot indices.
/// Returns the number of arrangements visited, which is `n! / (n - len)!`,
/// or zero when `len > n`.
pub fn for_each_arrangement<F>(pool: &[char], len: usize, mut visit: F) -> u64
where
    F: FnMut(&[char]),
{
    if len > pool.len() {
        return 0;
    }

    let mut used = vec![false; pool.len()];
    let mut current = Vec::with_capacity(len);
    let mut visited = 0;
    extend(pool, len, &mut used, &mut current, &mut visit, &mut visited);
    visited
}

fn extend<F>(
    pool: &[char],
    len: usize,
    used: &mut [bool],
    current: &mut Vec<char>,
    visit: &mut F,
    visited: &mut u64,
) where
    F: FnMut(&[char]),
{
    if current.len() == len {
        visit(current);
        *visited += 1;
        return;
    }

    for (slot, &ch) in pool.iter().enumerate() {
        if used[slot] {
            continue;
        }
        used[slot] = true;
        current.push(ch);
        extend(pool, len, used, current, visit, visited);
        current.pop();
        used[slot] = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// n! / (n - k)!
    fn arrangement_count(pool_len: usize, len: usize) -> u64 {
        if len > pool_len {
            return 0;
        }
        ((pool_len - len + 1)..=pool_len).map(|n| n as u64).product()
    }

    fn collect(pool: &str, len: usize) -> Vec<String> {
        let pool: Vec<char> = pool.chars().collect();
        let mut out = Vec::new();
        for_each_arrangement(&pool, len, |arr| out.push(arr.iter().collect()));
        out
    }

    #[test]
    fn full_length_permutations_in_slot_order() {
        assert_eq!(
            collect("abc", 3),
            ["abc", "acb", "bac", "bca", "cab", "cba"]
        );
    }

    #[test]
    fn partial_length_selections() {
        assert_eq!(collect("abc", 2), ["ab", "ac", "ba", "bc", "ca", "cb"]);
    }

    #[test]
    fn repeated_letters_are_distinct_slots() {
        let arrangements = collect("aab", 2);
        assert_eq!(arrangements.len(), 6);
        assert_eq!(arrangements.iter().filter(|a| *a == "aa").count(), 2);
    }

    #[test]
    fn too_long_visits_nothing() {
        let pool: Vec<char> = "ta".chars().collect();
        let visited = for_each_arrangement(&pool, 3, |_| panic!("should not visit"));
        assert_eq!(visited, 0);
    }

    #[test]
    fn zero_length_visits_the_empty_arrangement_once() {
        assert_eq!(collect("abc", 0), [""]);
    }

    #[test]
    fn visit_count_matches_formula() {
        let pool: Vec<char> = "abcdef".chars().collect();
        for len in 0..=7 {
            let visited = for_each_arrangement(&pool, len, |_| {});
            assert_eq!(visited, arrangement_count(pool.len(), len), "len {len}");
        }
        assert_eq!(arrangement_count(6, 3), 120);
        assert_eq!(arrangement_count(6, 0), 1);
    }
}
