//! Promotion engine: the member-record state transitions.
//!
//! Each operation takes the store and a member id, mutates exactly that
//! record and touches nothing else. Aggregates are re-derived by the
//! caller on demand, never eagerly here.

use crate::domain::member::MemberId;
use crate::domain::progress::clamp_progress;
use crate::domain::rank::RankScale;
use crate::error::CoreError;
use crate::store::MemberStore;

/// Result of a [`promote`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Promotion {
    /// Rank index after the call.
    pub rank_index: usize,
    /// The member was already at the top rank, so the index stayed
    /// pinned. Progress is zeroed either way.
    pub was_at_top: bool,
}

/// Adds `delta` to the member's progress, clamped into `[0, 100]`.
/// Returns the progress after the write.
pub fn adjust_progress(
    store: &mut MemberStore,
    id: &MemberId,
    delta: i32,
) -> Result<u8, CoreError> {
    let member = store
        .get_mut(id)
        .ok_or_else(|| CoreError::NotFound(id.to_string()))?;
    member.progress = clamp_progress(i32::from(member.progress).saturating_add(delta));
    Ok(member.progress)
}

/// Advances the member one rank, capped at the top of the scale, and
/// resets progress to zero unconditionally. Promotion always means
/// "start fresh toward the next milestone", even at the top rank; the
/// returned [`Promotion`] lets the caller tell the capped case apart.
pub fn promote(
    store: &mut MemberStore,
    scale: &RankScale,
    id: &MemberId,
) -> Result<Promotion, CoreError> {
    let member = store
        .get_mut(id)
        .ok_or_else(|| CoreError::NotFound(id.to_string()))?;
    let was_at_top = member.rank_index >= scale.top_index();
    member.rank_index = (member.rank_index + 1).min(scale.top_index());
    member.progress = 0;
    Ok(Promotion {
        rank_index: member.rank_index,
        was_at_top,
    })
}

/// Flips the member's active flag. Returns the flag after the write.
pub fn toggle_active(store: &mut MemberStore, id: &MemberId) -> Result<bool, CoreError> {
    let member = store
        .get_mut(id)
        .ok_or_else(|| CoreError::NotFound(id.to_string()))?;
    member.active = !member.active;
    Ok(member.active)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::member::Member;
    use crate::domain::rank::Rank;

    fn scale() -> RankScale {
        RankScale::new(vec![
            Rank::new("White", "#fff"),
            Rank::new("Yellow", "#fc0"),
            Rank::new("Orange", "#f80"),
        ])
        .unwrap()
    }

    fn store_with_one() -> (MemberStore, MemberId) {
        let id = MemberId::new("m-1");
        let mut store = MemberStore::new();
        store.insert(Member::with_rank(id.clone(), "Alex Chen", "Adults", 0, 40));
        (store, id)
    }

    #[test]
    fn adjust_progress_clamps_both_ends() {
        let (mut store, id) = store_with_one();
        assert_eq!(adjust_progress(&mut store, &id, 1000).unwrap(), 100);
        assert_eq!(adjust_progress(&mut store, &id, -1000).unwrap(), 0);
        assert_eq!(adjust_progress(&mut store, &id, 35).unwrap(), 35);
        assert_eq!(adjust_progress(&mut store, &id, -10).unwrap(), 25);
        // Extreme deltas saturate instead of overflowing the i32 sum.
        assert_eq!(adjust_progress(&mut store, &id, i32::MAX).unwrap(), 100);
        assert_eq!(adjust_progress(&mut store, &id, i32::MIN).unwrap(), 0);
    }

    #[test]
    fn adjust_progress_touches_nothing_else() {
        let (mut store, id) = store_with_one();
        adjust_progress(&mut store, &id, 10).unwrap();
        let m = store.get(&id).unwrap();
        assert_eq!(m.rank_index, 0);
        assert!(m.active);
        assert_eq!(m.name, "Alex Chen");
    }

    #[test]
    fn promote_caps_at_top_and_always_zeroes_progress() {
        let scale = scale();
        let (mut store, id) = store_with_one();

        let p = promote(&mut store, &scale, &id).unwrap();
        assert_eq!(p, Promotion { rank_index: 1, was_at_top: false });

        adjust_progress(&mut store, &id, 55).unwrap();
        let p = promote(&mut store, &scale, &id).unwrap();
        assert_eq!(p, Promotion { rank_index: 2, was_at_top: false });
        assert_eq!(store.get(&id).unwrap().progress, 0);

        // Already at the top: index pinned, progress still reset.
        adjust_progress(&mut store, &id, 70).unwrap();
        let p = promote(&mut store, &scale, &id).unwrap();
        assert_eq!(p, Promotion { rank_index: 2, was_at_top: true });
        assert_eq!(store.get(&id).unwrap().progress, 0);
    }

    #[test]
    fn repeated_promotion_never_leaves_the_scale() {
        let scale = scale();
        let (mut store, id) = store_with_one();
        for _ in 0..scale.len() + 3 {
            let p = promote(&mut store, &scale, &id).unwrap();
            assert!(p.rank_index < scale.len());
        }
        assert_eq!(store.get(&id).unwrap().rank_index, scale.top_index());
    }

    #[test]
    fn scenario_from_white_to_the_top() {
        // White/Yellow/Orange; start at index 0, progress 40.
        let scale = scale();
        let (mut store, id) = store_with_one();

        assert_eq!(adjust_progress(&mut store, &id, 70).unwrap(), 100);
        assert_eq!(
            promote(&mut store, &scale, &id).unwrap(),
            Promotion { rank_index: 1, was_at_top: false }
        );
        assert_eq!(
            promote(&mut store, &scale, &id).unwrap(),
            Promotion { rank_index: 2, was_at_top: false }
        );
        assert_eq!(
            promote(&mut store, &scale, &id).unwrap(),
            Promotion { rank_index: 2, was_at_top: true }
        );
        assert_eq!(store.get(&id).unwrap().progress, 0);
    }

    #[test]
    fn toggle_active_flips() {
        let (mut store, id) = store_with_one();
        assert!(!toggle_active(&mut store, &id).unwrap());
        assert!(toggle_active(&mut store, &id).unwrap());
    }

    #[test]
    fn unknown_id_is_not_found() {
        let scale = scale();
        let (mut store, _) = store_with_one();
        let ghost = MemberId::new("m-404");
        assert!(matches!(
            adjust_progress(&mut store, &ghost, 5),
            Err(CoreError::NotFound(_))
        ));
        assert!(matches!(
            promote(&mut store, &scale, &ghost),
            Err(CoreError::NotFound(_))
        ));
        assert!(matches!(
            toggle_active(&mut store, &ghost),
            Err(CoreError::NotFound(_))
        ));
    }
}
