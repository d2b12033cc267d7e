pub mod global_context;
pub mod sidebar;
pub mod top_header;

use global_context::use_shell;
use leptos::prelude::*;
use sidebar::Sidebar;
use top_header::TopHeader;

use crate::views::ViewContent;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |          Content             |
/// |   (Left)  |         (Center)             |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let shell = use_shell();
    let is_open = move || shell.left_open.get();

    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <div data-zone="left" class="left" class:hidden=move || !is_open()>
                    <Sidebar />
                </div>

                <div data-zone="center" class="app-main" style="flex: 1; overflow: auto;">
                    <ViewContent />
                </div>
            </div>
        </div>
    }
}
