use serde::{Deserialize, Serialize};

/// Pipeline stage of a prospective member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeadStatus {
    New,
    Contacted,
    TrialBooked,
    Joined,
}

impl LeadStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::TrialBooked => "Trial Booked",
            LeadStatus::Joined => "Joined",
        }
    }

    /// Next stage in the pipeline, pinned at `Joined`.
    pub fn advanced(&self) -> Self {
        match self {
            LeadStatus::New => LeadStatus::Contacted,
            LeadStatus::Contacted => LeadStatus::TrialBooked,
            LeadStatus::TrialBooked | LeadStatus::Joined => LeadStatus::Joined,
        }
    }

    pub fn is_final(&self) -> bool {
        matches!(self, LeadStatus::Joined)
    }
}

/// A prospective member in the intake pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub contact: String,
    pub note: String,
    pub status: LeadStatus,
}

impl Lead {
    pub fn new(id: impl Into<String>, name: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            contact: contact.into(),
            note: String::new(),
            status: LeadStatus::New,
        }
    }

    pub fn advance(&mut self) {
        self.status = self.status.advanced();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_walks_the_pipeline_and_pins() {
        let mut lead = Lead::new("l-1", "Jordan Lee", "jordan@example.com");
        assert_eq!(lead.status, LeadStatus::New);
        lead.advance();
        assert_eq!(lead.status, LeadStatus::Contacted);
        lead.advance();
        assert_eq!(lead.status, LeadStatus::TrialBooked);
        lead.advance();
        assert_eq!(lead.status, LeadStatus::Joined);
        lead.advance();
        assert_eq!(lead.status, LeadStatus::Joined);
    }
}
