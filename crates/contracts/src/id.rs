//! Injected identifier capability.
//!
//! The core never reaches for a randomness source of its own: the owning
//! layer supplies an [`IdSource`] and the operations treat the produced
//! strings as opaque.

/// Supplies a fresh unique string per new record.
pub trait IdSource {
    fn new_id(&mut self) -> String;
}

/// Production source backed by uuid v4.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdSource;

impl IdSource for UuidIdSource {
    fn new_id(&mut self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Deterministic source for tests: "prefix-1", "prefix-2", ...
#[derive(Debug, Clone)]
pub struct SequenceIdSource {
    prefix: String,
    next: u64,
}

impl SequenceIdSource {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl IdSource for SequenceIdSource {
    fn new_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_source_is_deterministic() {
        let mut ids = SequenceIdSource::new("m");
        assert_eq!(ids.new_id(), "m-1");
        assert_eq!(ids.new_id(), "m-2");
    }

    #[test]
    fn uuid_source_yields_distinct_ids() {
        let mut ids = UuidIdSource;
        assert_ne!(ids.new_id(), ids.new_id());
    }
}
