//! Derived read-only views over the member collection.
//!
//! All queries re-scan the full collection on each call. The dataset is
//! dashboard-scale, so no incremental index is maintained.

use crate::domain::member::Member;
use crate::domain::rank::RankScale;
use crate::search::matches_query;

/// Progress at or above which a member counts as promotion-eligible,
/// unless the caller configures another value.
pub const DEFAULT_READINESS_THRESHOLD: u8 = 90;

/// Count of records with the active flag set.
pub fn active_count(members: &[Member]) -> usize {
    members.iter().filter(|m| m.active).count()
}

/// Count of records with progress at or above `threshold`.
pub fn ready_for_promotion_count(members: &[Member], threshold: u8) -> usize {
    members.iter().filter(|m| m.progress >= threshold).count()
}

/// Case-insensitive substring filter over name, tier label and rank
/// label. Empty query matches everything; input order is preserved and
/// the input is never mutated.
pub fn filter_members<'a>(
    members: &'a [Member],
    scale: &RankScale,
    query: &str,
) -> Vec<&'a Member> {
    members
        .iter()
        .filter(|m| {
            let rank_name = scale
                .rank_at(m.rank_index)
                .map(|r| r.name.as_str())
                .unwrap_or("");
            matches_query([m.name.as_str(), m.tier.as_str(), rank_name], query)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::member::MemberId;
    use crate::domain::rank::Rank;

    fn scale() -> RankScale {
        RankScale::new(vec![
            Rank::new("White", "#fff"),
            Rank::new("Yellow", "#fc0"),
            Rank::new("Orange", "#f80"),
        ])
        .unwrap()
    }

    fn member(id: &str, name: &str, rank_index: usize, progress: u8, active: bool) -> Member {
        let mut m = Member::with_rank(MemberId::new(id), name, "Adults", rank_index, progress);
        m.active = active;
        m
    }

    #[test]
    fn active_count_matches_naive_scan() {
        assert_eq!(active_count(&[]), 0);

        let members = vec![
            member("m-1", "Alex P.", 0, 40, true),
            member("m-2", "Maria Rodriguez", 1, 75, false),
            member("m-3", "James Wilson", 2, 10, true),
        ];
        let naive = members.iter().filter(|m| m.active).count();
        assert_eq!(active_count(&members), naive);
        assert_eq!(active_count(&members), 2);
    }

    #[test]
    fn readiness_threshold_scenarios() {
        let low = vec![
            member("m-1", "A", 0, 40, true),
            member("m-2", "B", 0, 75, true),
            member("m-3", "C", 0, 10, true),
        ];
        assert_eq!(ready_for_promotion_count(&low, 90), 0);

        let high = vec![
            member("m-1", "A", 0, 95, true),
            member("m-2", "B", 0, 90, true),
            member("m-3", "C", 0, 89, true),
        ];
        assert_eq!(ready_for_promotion_count(&high, 90), 2);
        assert_eq!(ready_for_promotion_count(&[], 90), 0);
    }

    #[test]
    fn empty_query_returns_all_in_order() {
        let members = vec![
            member("m-1", "Alex P.", 0, 0, true),
            member("m-2", "Maria Rodriguez", 1, 0, true),
        ];
        let filtered = filter_members(&members, &scale(), "");
        let names: Vec<&str> = filtered.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Alex P.", "Maria Rodriguez"]);
    }

    #[test]
    fn filter_is_case_insensitive_over_name_and_rank() {
        let members = vec![
            member("m-1", "Alex P.", 2, 0, true),
            member("m-2", "Maria Rodriguez", 1, 0, true),
        ];
        let s = scale();

        let by_name = filter_members(&members, &s, "alex");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Alex P.");

        let by_rank = filter_members(&members, &s, "ORANGE");
        assert_eq!(by_rank.len(), 1);
        assert_eq!(by_rank[0].name, "Alex P.");

        assert!(filter_members(&members, &s, "nobody").is_empty());
    }
}
