//! Dashboard view: stat tiles, upcoming events and the activity feed.
//!
//! Every number here is re-derived from the collections on render; the
//! data volume is tiny, so nothing is cached.

use crate::shared::components::StatCard;
use crate::shared::icons::icon;
use crate::state::use_dojo;
use contracts::roster::{active_count, ready_for_promotion_count};
use contracts::seed::ActivityKind;
use leptos::prelude::*;

#[component]
pub fn DashboardView() -> impl IntoView {
    let dojo = use_dojo();

    let active_members = Signal::derive(move || {
        dojo.members
            .with(|store| active_count(store.members()))
            .to_string()
    });
    let member_total = Signal::derive(move || {
        format!("of {} on the roster", dojo.members.with(|store| store.len()))
    });

    let classes_today = Signal::derive(move || dojo.sessions.with(|s| s.len()).to_string());

    let ready = Signal::derive(move || {
        let threshold = dojo.threshold();
        dojo.members
            .with(|store| ready_for_promotion_count(store.members(), threshold))
            .to_string()
    });
    let ready_hint = Signal::derive(move || {
        format!("progress at or above {}%", dojo.threshold())
    });

    let open_issues = Signal::derive(move || {
        dojo.issues
            .with(|issues| issues.iter().filter(|i| !i.status.is_final()).count())
            .to_string()
    });

    let welcome = move || {
        dojo.members.with(|store| {
            format!(
                "Your dojo is thriving with {} active students",
                active_count(store.members())
            )
        })
    };

    let events = dojo.events.get_value();
    let activity = dojo.activity.get_value();

    view! {
        <div class="view dashboard">
            <div class="dashboard__hero">
                <h1 class="dashboard__hero-title">"Welcome Back, Sensei"</h1>
                <p class="dashboard__hero-subtitle">{welcome}</p>
            </div>

            <div class="dashboard__stats">
                <StatCard
                    label="Active Members".to_string()
                    icon_name="users".to_string()
                    value=active_members
                    hint=member_total
                />
                <StatCard
                    label="Classes Today".to_string()
                    icon_name="calendar".to_string()
                    value=classes_today
                />
                <StatCard
                    label="Ready for Promotion".to_string()
                    icon_name="award".to_string()
                    value=ready
                    hint=ready_hint
                />
                <StatCard
                    label="Open Issues".to_string()
                    icon_name="alert-triangle".to_string()
                    value=open_issues
                />
            </div>

            <div class="dashboard__columns">
                <div class="card">
                    <div class="card__header">
                        <h2 class="card__title">"Upcoming Events"</h2>
                        {icon("calendar")}
                    </div>
                    <div class="card__body">
                        {events.into_iter().map(|event| view! {
                            <div class="event-row">
                                <div class="event-row__icon">{icon("calendar")}</div>
                                <div class="event-row__main">
                                    <div class="event-row__top">
                                        <span class="event-row__title">{event.title}</span>
                                        <span class="badge badge--neutral">{event.kind}</span>
                                    </div>
                                    <div class="event-row__date">{event.date}</div>
                                    <div class="event-row__meta">
                                        {icon("users")}
                                        {format!("{} participants", event.participants)}
                                    </div>
                                </div>
                            </div>
                        }).collect_view()}
                    </div>
                </div>

                <div class="card">
                    <div class="card__header">
                        <h2 class="card__title">"Recent Activity"</h2>
                        {icon("activity")}
                    </div>
                    <div class="card__body">
                        {activity.into_iter().map(|entry| {
                            let kind_icon = match entry.kind {
                                ActivityKind::Achievement => icon("award"),
                                ActivityKind::Milestone => icon("trending-up"),
                                ActivityKind::Registration => icon("calendar"),
                            };
                            view! {
                                <div class="activity-row">
                                    <div class="activity-row__icon">{kind_icon}</div>
                                    <div class="activity-row__main">
                                        <div class="activity-row__name">{entry.member_name}</div>
                                        <div class="activity-row__action">{entry.action}</div>
                                        <div class="activity-row__time">
                                            {icon("clock")}
                                            {entry.time_ago}
                                        </div>
                                    </div>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
