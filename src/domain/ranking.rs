//! The popularity ranking and search gate.
//!
//! Both operations are pure: `rank_stalls` derives the display order and
//! `search` decides whether a submission reveals it. The location text is
//! only checked for emptiness; real geo matching is not implemented, so any
//! non-blank query surfaces the full ranked catalog. That is deliberate
//! product behavior, not a missing filter.

use super::entities::Stall;

/// Outcome of a search submission.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchOutcome {
    /// Trimmed input was empty; nothing changes.
    Ignored,
    /// Stalls to display, popularity-sorted.
    Results(Vec<Stall>),
}

/// Sorts stalls by recommendation count, most recommended first.
///
/// `sort_by` is stable, so stalls with equal counts keep their catalog order.
/// Cheap enough to re-run on every render pass; the catalog is static and
/// small.
pub fn rank_stalls(stalls: &[Stall]) -> Vec<Stall> {
    let mut ranked = stalls.to_vec();
    ranked.sort_by(|a, b| b.review_count().cmp(&a.review_count()));
    ranked
}

/// Gates the ranked catalog behind a non-empty location submission.
///
/// Leading/trailing whitespace is trimmed before the emptiness check. The
/// text's content is otherwise ignored.
pub fn search(location_text: &str, ranked: &[Stall]) -> SearchOutcome {
    if location_text.trim().is_empty() {
        SearchOutcome::Ignored
    } else {
        SearchOutcome::Results(ranked.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_support::stall;

    #[test]
    fn rank_keeps_every_stall() {
        let stalls = vec![stall(1, 3), stall(2, 0), stall(3, 7)];
        let ranked = rank_stalls(&stalls);

        assert_eq!(ranked.len(), stalls.len());
        let mut ids: Vec<u32> = ranked.iter().map(|s| s.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn rank_is_monotonic_non_increasing() {
        let stalls = vec![stall(1, 1), stall(2, 4), stall(3, 4), stall(4, 9)];
        let ranked = rank_stalls(&stalls);

        for pair in ranked.windows(2) {
            assert!(pair[0].review_count() >= pair[1].review_count());
        }
    }

    #[test]
    fn rank_preserves_catalog_order_on_ties() {
        // A(2), B(5), C(5), D(0) -> B, C, A, D; B stays ahead of C.
        let stalls = vec![stall(1, 2), stall(2, 5), stall(3, 5), stall(4, 0)];
        let ranked = rank_stalls(&stalls);

        let ids: Vec<u32> = ranked.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 3, 1, 4]);
    }

    #[test]
    fn rank_of_empty_catalog_is_empty() {
        assert!(rank_stalls(&[]).is_empty());
    }

    #[test]
    fn blank_queries_are_ignored() {
        let ranked = rank_stalls(&[stall(1, 2)]);

        assert_eq!(search("", &ranked), SearchOutcome::Ignored);
        assert_eq!(search("   ", &ranked), SearchOutcome::Ignored);
        assert_eq!(search("\t\n", &ranked), SearchOutcome::Ignored);
    }

    #[test]
    fn any_non_blank_query_returns_the_full_ranked_set() {
        let stalls = vec![stall(1, 2), stall(2, 5), stall(3, 5), stall(4, 0)];
        let ranked = rank_stalls(&stalls);

        for query in ["Paris", "  Los Angeles, CA  ", "not a place at all"] {
            match search(query, &ranked) {
                SearchOutcome::Results(results) => assert_eq!(results, ranked),
                SearchOutcome::Ignored => panic!("query {query:?} was ignored"),
            }
        }
    }
}
