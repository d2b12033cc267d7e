//! Sidebar component - one entry per record-keeping view.

use crate::layout::global_context::use_shell;
use crate::shared::icons::icon;
use crate::views::ViewKey;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let shell = use_shell();

    view! {
        <div class="app-sidebar__content">
            {ViewKey::ALL.into_iter().map(|key| {
                let is_active = move || shell.active.get() == key;

                view! {
                    <div
                        class="app-sidebar__item"
                        class:app-sidebar__item--active=is_active
                        on:click=move |_| shell.activate(key)
                    >
                        <span class="app-sidebar__icon">{icon(key.icon_name())}</span>
                        <span class="app-sidebar__label">{key.label()}</span>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
