use serde::{Deserialize, Serialize};

/// Opaque unique member identifier, assigned at creation and never reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberId(String);

impl MemberId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A member record.
///
/// Every field is initialized at creation time; there is no "missing
/// progress" state. `rank_index` is always valid against the rank scale
/// the record was created under, and `progress` stays in `[0, 100]`
/// after any mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    /// Free-form membership tier label ("Adults Unlimited", "Kids 2x/week", ...).
    pub tier: String,
    pub active: bool,
    pub rank_index: usize,
    /// Advancement toward the next rank, integer percent.
    pub progress: u8,
}

impl Member {
    /// New member at the bottom of the scale with zero progress.
    pub fn new(id: MemberId, name: impl Into<String>, tier: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            tier: tier.into(),
            active: true,
            rank_index: 0,
            progress: 0,
        }
    }

    /// Seed-loader constructor for records that start mid-progression.
    pub fn with_rank(
        id: MemberId,
        name: impl Into<String>,
        tier: impl Into<String>,
        rank_index: usize,
        progress: u8,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            tier: tier.into(),
            active: true,
            rank_index,
            progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_member_starts_at_bottom() {
        let m = Member::new(MemberId::new("m-1"), "Alex P.", "Adults");
        assert_eq!(m.rank_index, 0);
        assert_eq!(m.progress, 0);
        assert!(m.active);
    }
}
