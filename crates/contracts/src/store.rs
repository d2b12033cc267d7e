//! In-memory member record store.
//!
//! Owned exclusively by the rendering layer's event loop; every operation
//! runs to completion inside one user-triggered event, so no locking
//! discipline applies.

use crate::domain::member::{Member, MemberId};
use serde::{Deserialize, Serialize};

/// Insertion-ordered collection of member records.
///
/// Lookups are linear scans: the dataset is dashboard-scale (tens to low
/// hundreds of records) and the derived queries re-scan on every call
/// anyway, so an index would buy nothing. Records are never deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberStore {
    members: Vec<Member>,
}

impl MemberStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_members(members: Vec<Member>) -> Self {
        Self { members }
    }

    /// Appends a record. Ids come from the caller's `IdSource` and are
    /// collision-free for practical purposes, so no uniqueness check is
    /// made here.
    pub fn insert(&mut self, member: Member) {
        self.members.push(member);
    }

    pub fn get(&self, id: &MemberId) -> Option<&Member> {
        self.members.iter().find(|m| &m.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: &MemberId) -> Option<&mut Member> {
        self.members.iter_mut().find(|m| &m.id == id)
    }

    pub fn contains(&self, id: &MemberId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Member> {
        self.members.iter()
    }

    /// Records in insertion order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_preserves_order() {
        let mut store = MemberStore::new();
        store.insert(Member::new(MemberId::new("m-1"), "Alex Chen", "Adults"));
        store.insert(Member::new(MemberId::new("m-2"), "Maria Rodriguez", "Adults"));
        let names: Vec<&str> = store.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Alex Chen", "Maria Rodriguez"]);
    }

    #[test]
    fn get_finds_by_id() {
        let mut store = MemberStore::new();
        store.insert(Member::new(MemberId::new("m-1"), "Alex Chen", "Adults"));
        assert!(store.contains(&MemberId::new("m-1")));
        assert!(store.get(&MemberId::new("m-2")).is_none());
    }
}
