//! Application state: signals owning the in-memory collections.
//!
//! The store is owned by the UI event loop; every handler below runs to
//! completion before the next event is processed, so the core functions
//! are called without any locking discipline.

use contracts::domain::document::DocumentItem;
use contracts::domain::issue::Issue;
use contracts::domain::lead::Lead;
use contracts::domain::member::{Member, MemberId};
use contracts::domain::progress::clamp_progress;
use contracts::domain::rank::RankScale;
use contracts::domain::schedule::ClassSession;
use contracts::domain::task::TaskItem;
use contracts::id::{IdSource, UuidIdSource};
use contracts::promotion::{self, Promotion};
use contracts::roster::DEFAULT_READINESS_THRESHOLD;
use contracts::seed::{self, Achievement, ActivityEntry, UpcomingEvent};
use contracts::store::MemberStore;
use leptos::prelude::*;

/// Runtime-tunable values owned by the settings view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub dojo_name: String,
    pub readiness_threshold: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dojo_name: "Kwoon Flow".to_string(),
            readiness_threshold: DEFAULT_READINESS_THRESHOLD,
        }
    }
}

/// All app data, provided once via context at mount.
///
/// The rank scale, events and activity feed are fixed for the process
/// lifetime; everything else is mutated through the handlers below.
#[derive(Clone, Copy)]
pub struct DojoState {
    pub scale: StoredValue<RankScale>,
    pub members: RwSignal<MemberStore>,
    pub sessions: RwSignal<Vec<ClassSession>>,
    pub leads: RwSignal<Vec<Lead>>,
    pub issues: RwSignal<Vec<Issue>>,
    pub tasks: RwSignal<Vec<TaskItem>>,
    pub documents: RwSignal<Vec<DocumentItem>>,
    pub events: StoredValue<Vec<UpcomingEvent>>,
    pub activity: StoredValue<Vec<ActivityEntry>>,
    pub achievements: StoredValue<Vec<Achievement>>,
    pub settings: RwSignal<Settings>,
}

impl DojoState {
    /// Builds the state from the seed loader.
    pub fn new() -> Self {
        Self {
            scale: StoredValue::new(seed::rank_scale()),
            members: RwSignal::new(seed::members()),
            sessions: RwSignal::new(seed::sessions()),
            leads: RwSignal::new(seed::leads()),
            issues: RwSignal::new(seed::issues()),
            tasks: RwSignal::new(seed::tasks()),
            documents: RwSignal::new(seed::documents()),
            events: StoredValue::new(seed::upcoming_events()),
            activity: StoredValue::new(seed::recent_activity()),
            achievements: StoredValue::new(seed::achievements()),
            settings: RwSignal::new(Settings::default()),
        }
    }

    /// Fresh opaque id for a new record.
    fn next_id(&self) -> String {
        UuidIdSource.new_id()
    }

    pub fn threshold(&self) -> u8 {
        self.settings.with(|s| s.readiness_threshold)
    }

    // --- member operations ------------------------------------------------

    pub fn add_member(&self, name: &str, tier: &str) {
        let id = MemberId::new(self.next_id());
        let member = Member::new(id, name, tier);
        self.members.update(|store| store.insert(member));
    }

    pub fn adjust_progress(&self, id: &MemberId, delta: i32) {
        self.members.update(|store| {
            if let Err(e) = promotion::adjust_progress(store, id, delta) {
                log::warn!("adjust_progress: {e}");
            }
        });
    }

    pub fn promote(&self, id: &MemberId) -> Option<Promotion> {
        let scale = self.scale.get_value();
        let mut outcome = None;
        self.members.update(|store| {
            match promotion::promote(store, &scale, id) {
                Ok(p) => outcome = Some(p),
                Err(e) => log::warn!("promote: {e}"),
            }
        });
        outcome
    }

    pub fn toggle_active(&self, id: &MemberId) {
        self.members.update(|store| {
            if let Err(e) = promotion::toggle_active(store, id) {
                log::warn!("toggle_active: {e}");
            }
        });
    }

    // --- peripheral collections -------------------------------------------

    pub fn add_lead(&self, name: &str, contact: &str) {
        let lead = Lead::new(self.next_id(), name, contact);
        self.leads.update(|leads| leads.push(lead));
    }

    pub fn advance_lead(&self, id: &str) {
        self.leads.update(|leads| {
            if let Some(lead) = leads.iter_mut().find(|l| l.id == id) {
                lead.advance();
            }
        });
    }

    pub fn add_issue(&self, title: &str, location: &str) {
        let issue = Issue::new(self.next_id(), title, location);
        self.issues.update(|issues| issues.push(issue));
    }

    pub fn advance_issue(&self, id: &str) {
        self.issues.update(|issues| {
            if let Some(issue) = issues.iter_mut().find(|i| i.id == id) {
                issue.advance();
            }
        });
    }

    pub fn add_task(&self, title: &str) {
        let task = TaskItem::new(self.next_id(), title);
        self.tasks.update(|tasks| tasks.push(task));
    }

    pub fn toggle_task(&self, id: &str) {
        self.tasks.update(|tasks| {
            if let Some(task) = tasks.iter_mut().find(|t| t.id == id) {
                task.toggle();
            }
        });
    }

    // --- settings ---------------------------------------------------------

    pub fn set_dojo_name(&self, name: &str) {
        self.settings.update(|s| s.dojo_name = name.to_string());
    }

    /// Threshold input is normalized into [0, 100], never rejected.
    pub fn set_threshold(&self, value: i32) {
        self.settings
            .update(|s| s.readiness_threshold = clamp_progress(value));
    }
}

impl Default for DojoState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_dojo() -> DojoState {
    use_context::<DojoState>().expect("DojoState not found in context")
}
