//! Score-and-sort fuzzy ranking.
//!
//! Match classes in strictly descending score bands: exact (100), prefix
//! (50..60], substring (25..30], in-order subsequence (small positive).
//! Candidates that do not match at all are dropped. Ties keep input order,
//! so ranking is a total order over (score desc, input index).

/// Score a candidate against a query; `None` means no match.
///
/// Comparison is casefolded. The empty query matches everything with a
/// uniform score of 1.0.
pub fn score(query: &str, candidate: &str) -> Option<f64> {
    if query.is_empty() {
        return Some(1.0);
    }

    let query = query.to_lowercase();
    let candidate = candidate.to_lowercase();

    if candidate == query {
        return Some(100.0);
    }

    let q_len = query.chars().count() as f64;
    let c_len = candidate.chars().count() as f64;
    if c_len == 0.0 {
        return None;
    }

    if candidate.starts_with(&query) {
        return Some(50.0 + 10.0 * (q_len / c_len));
    }
    if candidate.contains(&query) {
        return Some(25.0 + 5.0 * (q_len / c_len));
    }

    subsequence_runs(&query, &candidate).map(|runs| runs as f64 + 1.0)
}

/// Greedy in-order subsequence match; returns the sum of consecutive-run
/// lengths, or `None` when not all query characters appear in order.
fn subsequence_runs(query: &str, candidate: &str) -> Option<usize> {
    let mut total = 0usize;
    let mut run = 0usize;
    let mut last_hit: Option<usize> = None;
    let mut chars = query.chars();
    let mut wanted = chars.next()?;

    for (idx, ch) in candidate.chars().enumerate() {
        if ch != wanted {
            continue;
        }
        if last_hit == Some(idx.wrapping_sub(1)) {
            run += 1;
        } else {
            total += run;
            run = 1;
        }
        last_hit = Some(idx);
        match chars.next() {
            Some(next) => wanted = next,
            None => return Some(total + run),
        }
    }
    None
}

/// Rank items by fuzzy score against `query`, dropping non-matches and
/// truncating to `cap`. Stable: equal scores keep input order.
pub fn rank<T, F>(query: &str, items: Vec<T>, key: F, cap: usize) -> Vec<T>
where
    F: Fn(&T) -> &str,
{
    let mut scored: Vec<(f64, usize, T)> = items
        .into_iter()
        .enumerate()
        .filter_map(|(idx, item)| score(query, key(&item)).map(|s| (s, idx, item)))
        .collect();
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal).then(a.1.cmp(&b.1)));
    scored.truncate(cap);
    scored.into_iter().map(|(_, _, item)| item).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_beats_every_other_class() {
        let exact = score("note", "note").unwrap();
        let prefix = score("note", "notebook").unwrap();
        let substr = score("note", "my-notebook").unwrap();
        let subseq = score("nte", "notebook").unwrap();
        assert_eq!(exact, 100.0);
        assert!(exact > prefix && prefix > substr && substr > subseq);
    }

    #[test]
    fn exact_is_casefolded() {
        assert_eq!(score("Note", "nOtE"), Some(100.0));
    }

    #[test]
    fn prefix_prefers_shorter_candidates() {
        // 50 + 10 * (2/8) vs 50 + 10 * (2/10)
        let alpha = score("al", "alpha.md").unwrap();
        let algebra = score("al", "algebra.md").unwrap();
        assert!(alpha > algebra);
    }

    #[test]
    fn substring_band_sits_between() {
        let s = score("beta", "my-beta-notes").unwrap();
        assert!(s > 25.0 && s < 50.0);
    }

    #[test]
    fn subsequence_needs_all_chars_in_order() {
        assert!(score("ace", "abcde").is_some());
        assert_eq!(score("aec", "abcde"), None);
        assert_eq!(score("xyz", "alpha"), None);
    }

    #[test]
    fn subsequence_counts_runs() {
        // "ab" + "cd" as two runs of 2 → 4 + 1.
        assert_eq!(score("abcd", "abxcd"), Some(5.0));
    }

    #[test]
    fn empty_query_keeps_input_order_with_uniform_score() {
        let ranked = rank("", vec!["c", "a", "b", "d"], |s| s, 3);
        assert_eq!(ranked, ["c", "a", "b"]);
        assert_eq!(score("", "anything"), Some(1.0));
    }

    #[test]
    fn rank_drops_non_matches_and_is_stable() {
        let ranked = rank("al", vec!["beta.md", "alpha.md", "algebra.md"], |s| s, 20);
        assert_eq!(ranked, ["alpha.md", "algebra.md"]);

        // Identical candidates tie; input order decides.
        let ranked = rank("x", vec!["x1", "x2"], |s| s, 20);
        assert_eq!(ranked, ["x1", "x2"]);
    }
}
