use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Difficulty bracket of a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionLevel {
    Beginner,
    Intermediate,
    Advanced,
    AllLevels,
}

impl SessionLevel {
    pub fn display_name(&self) -> &'static str {
        match self {
            SessionLevel::Beginner => "Beginner",
            SessionLevel::Intermediate => "Intermediate",
            SessionLevel::Advanced => "Advanced",
            SessionLevel::AllLevels => "All Levels",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    Upcoming,
    InProgress,
    Finished,
}

impl SessionStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            SessionStatus::Upcoming => "Upcoming",
            SessionStatus::InProgress => "Live",
            SessionStatus::Finished => "Finished",
        }
    }
}

/// A scheduled class on the day board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSession {
    pub id: String,
    pub name: String,
    pub date: NaiveDate,
    /// Display time range, e.g. "4:00 PM - 5:00 PM".
    pub time: String,
    pub instructor: String,
    pub enrolled: u32,
    pub capacity: u32,
    pub level: SessionLevel,
    pub location: String,
    pub status: SessionStatus,
}

impl ClassSession {
    /// Occupancy as a rounded integer percent. A zero-capacity session
    /// reads as empty rather than dividing by zero.
    pub fn fill_percent(&self) -> u32 {
        if self.capacity == 0 {
            return 0;
        }
        (self.enrolled * 100 + self.capacity / 2) / self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(enrolled: u32, capacity: u32) -> ClassSession {
        ClassSession {
            id: "c-1".to_string(),
            name: "Kids Karate".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            time: "4:00 PM - 5:00 PM".to_string(),
            instructor: "Sensei Johnson".to_string(),
            enrolled,
            capacity,
            level: SessionLevel::Beginner,
            location: "Main Dojo".to_string(),
            status: SessionStatus::Upcoming,
        }
    }

    #[test]
    fn fill_percent_rounds() {
        assert_eq!(session(15, 20).fill_percent(), 75);
        assert_eq!(session(22, 25).fill_percent(), 88);
        assert_eq!(session(1, 3).fill_percent(), 33);
        assert_eq!(session(2, 3).fill_percent(), 67);
    }

    #[test]
    fn fill_percent_handles_zero_capacity() {
        assert_eq!(session(0, 0).fill_percent(), 0);
    }
}
