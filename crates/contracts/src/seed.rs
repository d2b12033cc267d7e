//! Static sample data supplied to the app at startup.
//!
//! The core takes these collections as given and never re-fetches; there
//! is no persistence behind them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::document::{DocumentCategory, DocumentItem};
use crate::domain::issue::{Issue, IssueStatus};
use crate::domain::lead::{Lead, LeadStatus};
use crate::domain::member::{Member, MemberId};
use crate::domain::rank::{Rank, RankScale};
use crate::domain::schedule::{ClassSession, SessionLevel, SessionStatus};
use crate::domain::task::TaskItem;
use crate::store::MemberStore;

/// A dated event on the dashboard's "upcoming" card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingEvent {
    pub id: String,
    pub title: String,
    pub date: String,
    pub participants: u32,
    pub kind: String,
}

/// A badge on the progress view's achievements card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Icon name resolved by the rendering layer.
    pub icon: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityKind {
    Achievement,
    Milestone,
    Registration,
}

/// A row on the dashboard's "recent activity" card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: String,
    pub member_name: String,
    pub action: String,
    pub time_ago: String,
    pub kind: ActivityKind,
}

/// The belt progression used by the school, lowest to highest.
pub fn rank_scale() -> RankScale {
    let ranks = vec![
        Rank::new("White Belt", "#e2e8f0"),
        Rank::new("Yellow Belt", "#facc15"),
        Rank::new("Orange Belt", "#f97316"),
        Rank::new("Blue Belt", "#2563eb"),
        Rank::new("Purple Belt", "#9333ea"),
        Rank::new("Brown Belt", "#92400e"),
        Rank::new("Black Belt", "#111827"),
    ];
    // The list above is non-empty, so construction cannot fail.
    RankScale::new(ranks).unwrap_or_else(|_| unreachable!("seed rank scale is non-empty"))
}

/// The initial roster. Rank indices refer to [`rank_scale`].
pub fn members() -> MemberStore {
    MemberStore::from_members(vec![
        Member::with_rank(MemberId::new("m-1"), "Alex Chen", "Adults Unlimited", 6, 35),
        Member::with_rank(MemberId::new("m-2"), "Maria Rodriguez", "Adults Unlimited", 5, 92),
        Member::with_rank(MemberId::new("m-3"), "James Wilson", "Adults 2x/week", 3, 64),
        Member::with_rank(MemberId::new("m-4"), "Sophie Taylor", "Kids 2x/week", 1, 48),
        Member::with_rank(MemberId::new("m-5"), "David Kim", "Adults 2x/week", 4, 77),
        Member::with_rank(MemberId::new("m-6"), "Emma Santos", "Kids Unlimited", 2, 93),
    ])
}

/// Today's class board.
pub fn sessions() -> Vec<ClassSession> {
    let today = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap_or_default();
    vec![
        ClassSession {
            id: "c-1".to_string(),
            name: "Kids Karate".to_string(),
            date: today,
            time: "4:00 PM - 5:00 PM".to_string(),
            instructor: "Sensei Johnson".to_string(),
            enrolled: 15,
            capacity: 20,
            level: SessionLevel::Beginner,
            location: "Main Dojo".to_string(),
            status: SessionStatus::Upcoming,
        },
        ClassSession {
            id: "c-2".to_string(),
            name: "Women's Self Defense".to_string(),
            date: today,
            time: "5:30 PM - 6:30 PM".to_string(),
            instructor: "Sensei Johnson".to_string(),
            enrolled: 12,
            capacity: 15,
            level: SessionLevel::AllLevels,
            location: "Training Room B".to_string(),
            status: SessionStatus::InProgress,
        },
        ClassSession {
            id: "c-3".to_string(),
            name: "Adult BJJ".to_string(),
            date: today,
            time: "6:00 PM - 7:30 PM".to_string(),
            instructor: "Professor Silva".to_string(),
            enrolled: 22,
            capacity: 25,
            level: SessionLevel::AllLevels,
            location: "Grappling Room".to_string(),
            status: SessionStatus::Upcoming,
        },
        ClassSession {
            id: "c-4".to_string(),
            name: "MMA Conditioning".to_string(),
            date: today,
            time: "7:30 PM - 8:30 PM".to_string(),
            instructor: "Coach Martinez".to_string(),
            enrolled: 18,
            capacity: 20,
            level: SessionLevel::Advanced,
            location: "Main Dojo".to_string(),
            status: SessionStatus::Upcoming,
        },
    ]
}

pub fn upcoming_events() -> Vec<UpcomingEvent> {
    vec![
        UpcomingEvent {
            id: "e-1".to_string(),
            title: "Black Belt Grading".to_string(),
            date: "March 15, 2025".to_string(),
            participants: 8,
            kind: "Belt Test".to_string(),
        },
        UpcomingEvent {
            id: "e-2".to_string(),
            title: "Monthly Seminar - Prof. Silva".to_string(),
            date: "March 22, 2025".to_string(),
            participants: 35,
            kind: "Seminar".to_string(),
        },
        UpcomingEvent {
            id: "e-3".to_string(),
            title: "Inter-Dojo Tournament".to_string(),
            date: "April 5, 2025".to_string(),
            participants: 50,
            kind: "Competition".to_string(),
        },
    ]
}

pub fn recent_activity() -> Vec<ActivityEntry> {
    vec![
        ActivityEntry {
            id: "a-1".to_string(),
            member_name: "Alex Chen".to_string(),
            action: "Achieved Black Belt 1st Dan".to_string(),
            time_ago: "2 hours ago".to_string(),
            kind: ActivityKind::Achievement,
        },
        ActivityEntry {
            id: "a-2".to_string(),
            member_name: "Maria Rodriguez".to_string(),
            action: "Perfect attendance this month".to_string(),
            time_ago: "5 hours ago".to_string(),
            kind: ActivityKind::Milestone,
        },
        ActivityEntry {
            id: "a-3".to_string(),
            member_name: "James Wilson".to_string(),
            action: "Registered for tournament".to_string(),
            time_ago: "1 day ago".to_string(),
            kind: ActivityKind::Registration,
        },
    ]
}

pub fn achievements() -> Vec<Achievement> {
    vec![
        Achievement {
            id: "ach-1".to_string(),
            title: "Tournament Champion".to_string(),
            description: "1st Place - Regional Competition 2024".to_string(),
            icon: "award".to_string(),
        },
        Achievement {
            id: "ach-2".to_string(),
            title: "Perfect Attendance".to_string(),
            description: "6 months streak".to_string(),
            icon: "target".to_string(),
        },
        Achievement {
            id: "ach-3".to_string(),
            title: "Leadership Award".to_string(),
            description: "Outstanding mentorship to junior students".to_string(),
            icon: "star".to_string(),
        },
        Achievement {
            id: "ach-4".to_string(),
            title: "Rapid Progress".to_string(),
            description: "Advanced 2 belt ranks in 8 months".to_string(),
            icon: "trending-up".to_string(),
        },
    ]
}

pub fn leads() -> Vec<Lead> {
    vec![
        Lead {
            id: "l-1".to_string(),
            name: "Jordan Lee".to_string(),
            contact: "jordan.lee@example.com".to_string(),
            note: "Asked about the kids program".to_string(),
            status: LeadStatus::New,
        },
        Lead {
            id: "l-2".to_string(),
            name: "Priya Patel".to_string(),
            contact: "+1 555 0142".to_string(),
            note: "Former judoka, wants BJJ".to_string(),
            status: LeadStatus::Contacted,
        },
        Lead {
            id: "l-3".to_string(),
            name: "Sam O'Neil".to_string(),
            contact: "sam.oneil@example.com".to_string(),
            note: "Trial on Thursday evening".to_string(),
            status: LeadStatus::TrialBooked,
        },
    ]
}

pub fn issues() -> Vec<Issue> {
    vec![
        Issue {
            id: "i-1".to_string(),
            title: "Torn mat near the entrance".to_string(),
            location: "Main Dojo".to_string(),
            status: IssueStatus::Open,
        },
        Issue {
            id: "i-2".to_string(),
            title: "Flickering ceiling light".to_string(),
            location: "Grappling Room".to_string(),
            status: IssueStatus::InProgress,
        },
        Issue {
            id: "i-3".to_string(),
            title: "Cracked mirror panel".to_string(),
            location: "Training Room B".to_string(),
            status: IssueStatus::Resolved,
        },
    ]
}

pub fn tasks() -> Vec<TaskItem> {
    vec![
        TaskItem {
            id: "t-1".to_string(),
            title: "Order new belts for the grading".to_string(),
            done: false,
        },
        TaskItem {
            id: "t-2".to_string(),
            title: "Call insurance about the renewal".to_string(),
            done: false,
        },
        TaskItem {
            id: "t-3".to_string(),
            title: "Print tournament waivers".to_string(),
            done: true,
        },
    ]
}

pub fn documents() -> Vec<DocumentItem> {
    vec![
        DocumentItem {
            id: "d-1".to_string(),
            title: "Liability Waiver".to_string(),
            category: DocumentCategory::Waiver,
            updated: NaiveDate::from_ymd_opt(2025, 1, 12).unwrap_or_default(),
        },
        DocumentItem {
            id: "d-2".to_string(),
            title: "Student Handbook".to_string(),
            category: DocumentCategory::Policy,
            updated: NaiveDate::from_ymd_opt(2024, 11, 3).unwrap_or_default(),
        },
        DocumentItem {
            id: "d-3".to_string(),
            title: "Belt Curriculum v3".to_string(),
            category: DocumentCategory::Curriculum,
            updated: NaiveDate::from_ymd_opt(2025, 2, 20).unwrap_or_default(),
        },
        DocumentItem {
            id: "d-4".to_string(),
            title: "Facility Insurance Certificate".to_string(),
            category: DocumentCategory::Insurance,
            updated: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap_or_default(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_members_fit_the_seed_scale() {
        let scale = rank_scale();
        let store = members();
        assert!(!store.is_empty());
        for m in store.iter() {
            assert!(scale.rank_at(m.rank_index).is_ok(), "member {}", m.id);
        }
    }

    #[test]
    fn seed_ids_are_unique_per_collection() {
        let store = members();
        let mut ids: Vec<&str> = store.iter().map(|m| m.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), store.len());
    }

    #[test]
    fn seed_achievements_are_complete_rows() {
        let achievements = achievements();
        assert!(!achievements.is_empty());
        for a in &achievements {
            assert!(!a.title.is_empty());
            assert!(!a.icon.is_empty(), "achievement {}", a.id);
        }
        let mut ids: Vec<&str> = achievements.iter().map(|a| a.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), achievements.len());
    }

    #[test]
    fn seed_sessions_fit_their_capacity() {
        for s in sessions() {
            assert!(s.enrolled <= s.capacity, "session {}", s.id);
            assert!(s.fill_percent() <= 100);
        }
    }
}
