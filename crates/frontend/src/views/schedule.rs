//! Today's class board.

use crate::shared::components::ui::Badge;
use crate::shared::components::{PageHeader, ProgressBar};
use crate::shared::format::occupancy;
use crate::shared::icons::icon;
use crate::state::use_dojo;
use contracts::domain::schedule::SessionStatus;
use leptos::prelude::*;

#[component]
pub fn ScheduleView() -> impl IntoView {
    let dojo = use_dojo();

    let subtitle = Signal::derive(move || {
        let count = dojo.sessions.with(|s| s.len());
        format!("Thursday, March 14, 2025 - {} classes scheduled", count)
    });

    view! {
        <div class="view schedule">
            <PageHeader title="Today's Schedule".to_string() subtitle=subtitle>
                {()}
            </PageHeader>

            <div class="schedule__list">
                {move || dojo.sessions.get().into_iter().map(|session| {
                    let fill = session.fill_percent();
                    let live = session.status == SessionStatus::InProgress;
                    view! {
                        <div class="card session-card">
                            <div class="card__header">
                                <div class="session-card__heading">
                                    <h2 class="card__title">{session.name.clone()}</h2>
                                    <div class="session-card__instructor">{session.instructor.clone()}</div>
                                </div>
                                <div class="session-card__badges">
                                    <Badge variant="neutral".to_string()>{session.level.display_name()}</Badge>
                                    {live.then(|| view! {
                                        <Badge variant="success".to_string()>{session.status.display_name()}</Badge>
                                    })}
                                </div>
                            </div>
                            <div class="card__body">
                                <div class="session-card__meta">
                                    <span class="session-card__meta-item">
                                        {icon("clock")}
                                        {session.time.clone()}
                                    </span>
                                    <span class="session-card__meta-item">
                                        {icon("users")}
                                        {occupancy(session.enrolled, session.capacity)}
                                    </span>
                                    <span class="session-card__meta-item">
                                        {icon("map-pin")}
                                        {session.location.clone()}
                                    </span>
                                    <span class="session-card__meta-item">
                                        {icon("check")}
                                        {format!("{}% Full", fill)}
                                    </span>
                                </div>
                                <ProgressBar percent=fill />
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
