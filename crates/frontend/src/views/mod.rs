pub mod attendance;
pub mod dashboard;
pub mod documents;
pub mod issues;
pub mod leads;
pub mod members;
pub mod progress;
pub mod schedule;
pub mod settings;
pub mod tasks;

use crate::layout::global_context::use_shell;
use leptos::prelude::*;

/// The record-keeping views reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKey {
    Dashboard,
    Schedule,
    Members,
    Progress,
    Leads,
    Issues,
    Tasks,
    Documents,
    Attendance,
    Settings,
}

impl ViewKey {
    pub const ALL: [ViewKey; 10] = [
        ViewKey::Dashboard,
        ViewKey::Schedule,
        ViewKey::Members,
        ViewKey::Progress,
        ViewKey::Leads,
        ViewKey::Issues,
        ViewKey::Tasks,
        ViewKey::Documents,
        ViewKey::Attendance,
        ViewKey::Settings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ViewKey::Dashboard => "Dashboard",
            ViewKey::Schedule => "Schedule",
            ViewKey::Members => "Members",
            ViewKey::Progress => "Progress",
            ViewKey::Leads => "Leads",
            ViewKey::Issues => "Issues",
            ViewKey::Tasks => "Tasks",
            ViewKey::Documents => "Documents",
            ViewKey::Attendance => "Attendance",
            ViewKey::Settings => "Settings",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            ViewKey::Dashboard => "home",
            ViewKey::Schedule => "calendar",
            ViewKey::Members => "users",
            ViewKey::Progress => "award",
            ViewKey::Leads => "target",
            ViewKey::Issues => "alert-triangle",
            ViewKey::Tasks => "clipboard",
            ViewKey::Documents => "file-text",
            ViewKey::Attendance => "qr-code",
            ViewKey::Settings => "settings",
        }
    }
}

/// Renders whichever view is active in the shell.
#[component]
pub fn ViewContent() -> impl IntoView {
    let shell = use_shell();

    view! {
        {move || match shell.active.get() {
            ViewKey::Dashboard => view! { <dashboard::DashboardView /> }.into_any(),
            ViewKey::Schedule => view! { <schedule::ScheduleView /> }.into_any(),
            ViewKey::Members => view! { <members::MembersView /> }.into_any(),
            ViewKey::Progress => view! { <progress::ProgressView /> }.into_any(),
            ViewKey::Leads => view! { <leads::LeadsView /> }.into_any(),
            ViewKey::Issues => view! { <issues::IssuesView /> }.into_any(),
            ViewKey::Tasks => view! { <tasks::TasksView /> }.into_any(),
            ViewKey::Documents => view! { <documents::DocumentsView /> }.into_any(),
            ViewKey::Attendance => view! { <attendance::AttendanceView /> }.into_any(),
            ViewKey::Settings => view! { <settings::SettingsView /> }.into_any(),
        }}
    }
}
