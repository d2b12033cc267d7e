use crate::views::ViewKey;
use leptos::prelude::*;

/// Shell-level UI state shared through context: which view is showing
/// and whether the sidebar is open.
#[derive(Clone, Copy)]
pub struct AppShellContext {
    pub active: RwSignal<ViewKey>,
    pub left_open: RwSignal<bool>,
}

impl AppShellContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(ViewKey::Dashboard),
            left_open: RwSignal::new(true),
        }
    }

    pub fn activate(&self, key: ViewKey) {
        leptos::logging::log!("activate view: {}", key.label());
        self.active.set(key);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppShellContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_shell() -> AppShellContext {
    use_context::<AppShellContext>().expect("AppShellContext not found in context")
}
