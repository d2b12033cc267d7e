//! TopHeader component - application top bar.
//!
//! Contains the sidebar toggle, the school name, the notification badge
//! (open issues) and the subscribe call-to-action.

use crate::layout::global_context::use_shell;
use crate::shared::icons::icon;
use crate::state::use_dojo;
use leptos::prelude::*;

/// Fixed external checkout page for the subscription plan. Navigating
/// there hands control to the host environment; nothing is awaited.
const CHECKOUT_URL: &str = "https://buy.stripe.com/dojo_monthly_checkout";

#[component]
pub fn TopHeader() -> impl IntoView {
    let shell = use_shell();
    let dojo = use_dojo();

    let toggle_sidebar = move |_| {
        shell.toggle_left();
    };

    let is_sidebar_visible = move || shell.left_open.get();

    let dojo_name = move || dojo.settings.with(|s| s.dojo_name.clone());

    let open_issue_count = move || {
        dojo.issues
            .with(|issues| issues.iter().filter(|i| !i.status.is_final()).count())
    };

    let subscribe = move |_| {
        if let Some(win) = web_sys::window() {
            if let Err(e) = win.location().set_href(CHECKOUT_URL) {
                log::warn!("subscribe redirect failed: {:?}", e);
            }
        }
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__logo">{icon("award")}</span>
                <span class="top-header__title">{dojo_name}</span>
            </div>

            <div class="top-header__actions">
                <button class="top-header__icon-btn top-header__bell" title="Open issues">
                    {icon("bell")}
                    {move || {
                        let n = open_issue_count();
                        (n > 0).then(|| view! {
                            <span class="top-header__badge">{n}</span>
                        })
                    }}
                </button>

                <button class="top-header__subscribe" on:click=subscribe>
                    {icon("external-link")}
                    " Subscribe Now (€29/month)"
                </button>
            </div>
        </div>
    }
}
