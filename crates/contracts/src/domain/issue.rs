use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueStatus {
    Open,
    InProgress,
    Resolved,
}

impl IssueStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            IssueStatus::Open => "Open",
            IssueStatus::InProgress => "In Progress",
            IssueStatus::Resolved => "Resolved",
        }
    }

    pub fn advanced(&self) -> Self {
        match self {
            IssueStatus::Open => IssueStatus::InProgress,
            IssueStatus::InProgress | IssueStatus::Resolved => IssueStatus::Resolved,
        }
    }

    pub fn is_final(&self) -> bool {
        matches!(self, IssueStatus::Resolved)
    }
}

/// A facility or equipment problem reported on the floor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub id: String,
    pub title: String,
    pub location: String,
    pub status: IssueStatus,
}

impl Issue {
    pub fn new(id: impl Into<String>, title: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            location: location.into(),
            status: IssueStatus::Open,
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
    fn advance_pins_at_resolved() {
        let mut issue = Issue::new("i-1", "Torn mat near door", "Main Dojo");
        issue.advance();
        assert_eq!(issue.status, IssueStatus::InProgress);
        issue.advance();
        assert_eq!(issue.status, IssueStatus::Resolved);
        issue.advance();
        assert_eq!(issue.status, IssueStatus::Resolved);
    }
}
