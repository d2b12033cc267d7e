//! Domain record types shared between the core and the rendering layer.

pub mod document;
pub mod issue;
pub mod lead;
pub mod member;
pub mod progress;
pub mod rank;
pub mod schedule;
pub mod task;

// Re-exports
pub use document::{DocumentCategory, DocumentItem};
pub use issue::{Issue, IssueStatus};
pub use lead::{Lead, LeadStatus};
pub use member::{Member, MemberId};
pub use progress::clamp_progress;
pub use rank::{Rank, RankScale};
pub use schedule::{ClassSession, SessionLevel, SessionStatus};
pub use task::TaskItem;
