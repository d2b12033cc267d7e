use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentCategory {
    Waiver,
    Policy,
    Curriculum,
    Insurance,
}

impl DocumentCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            DocumentCategory::Waiver => "Waiver",
            DocumentCategory::Policy => "Policy",
            DocumentCategory::Curriculum => "Curriculum",
            DocumentCategory::Insurance => "Insurance",
        }
    }
}

/// An office document tracked in the library view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentItem {
    pub id: String,
    pub title: String,
    pub category: DocumentCategory,
    pub updated: NaiveDate,
}
