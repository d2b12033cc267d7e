use crate::layout::global_context::AppShellContext;
use crate::layout::Shell;
use crate::state::DojoState;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Seed the in-memory collections and share them with every view.
    provide_context(DojoState::new());

    // Shell-level UI state (active view, sidebar visibility).
    provide_context(AppShellContext::new());

    view! {
        <Shell />
    }
}
