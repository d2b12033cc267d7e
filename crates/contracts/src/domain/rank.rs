use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// A named level in the belt progression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rank {
    /// Display name, e.g. "Black Belt".
    pub name: String,
    /// CSS color tag used by the rendering layer for the belt badge.
    pub color: String,
}

impl Rank {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}

/// The fixed, ordered catalog of all ranks, lowest to highest.
///
/// Supplied once by the seed loader at startup and never mutated for the
/// lifetime of the process. Indices are contiguous, starting at 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankScale {
    ranks: Vec<Rank>,
}

impl RankScale {
    /// Builds a scale from an ordered rank list. The scale must hold at
    /// least one rank; an empty list is a configuration defect.
    pub fn new(ranks: Vec<Rank>) -> Result<Self, CoreError> {
        if ranks.is_empty() {
            return Err(CoreError::OutOfRange { index: 0, len: 0 });
        }
        Ok(Self { ranks })
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        // Unreachable by construction, but keeps clippy's len/is_empty pairing.
        self.ranks.is_empty()
    }

    /// Index of the highest rank.
    pub fn top_index(&self) -> usize {
        self.ranks.len() - 1
    }

    pub fn is_top(&self, index: usize) -> bool {
        index == self.top_index()
    }

    pub fn rank_at(&self, index: usize) -> Result<&Rank, CoreError> {
        self.ranks.get(index).ok_or(CoreError::OutOfRange {
            index,
            len: self.ranks.len(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rank> {
        self.ranks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scale() -> RankScale {
        RankScale::new(vec![
            Rank::new("White", "#fff"),
            Rank::new("Yellow", "#fc0"),
            Rank::new("Orange", "#f80"),
        ])
        .unwrap()
    }

    #[test]
    fn rejects_empty_scale() {
        assert_eq!(
            RankScale::new(vec![]),
            Err(CoreError::OutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn rank_at_bounds() {
        let s = scale();
        assert_eq!(s.rank_at(0).unwrap().name, "White");
        assert_eq!(s.rank_at(2).unwrap().name, "Orange");
        assert_eq!(
            s.rank_at(3),
            Err(CoreError::OutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn top_index_and_is_top() {
        let s = scale();
        assert_eq!(s.top_index(), 2);
        assert!(s.is_top(2));
        assert!(!s.is_top(1));
    }
}
