//! Progress tracking: per-member advancement bars, the belt promotion
//! action and the belt legend.

use crate::shared::components::ui::{Badge, Button};
use crate::shared::components::{PageHeader, ProgressBar};
use crate::shared::icons::icon;
use crate::state::use_dojo;
use leptos::prelude::*;

#[component]
pub fn ProgressView() -> impl IntoView {
    let dojo = use_dojo();

    // Outcome of the latest promote action, shown under the header.
    let (notice, set_notice) = signal::<Option<String>>(None);

    let subtitle = Signal::derive(move || {
        format!(
            "Members at {}% progress or above are ready for their next belt test",
            dojo.threshold()
        )
    });

    let scale_for_legend = dojo.scale.get_value();
    let achievements = dojo.achievements.get_value();

    view! {
        <div class="view progress">
            <PageHeader title="Progress Tracking".to_string() subtitle=subtitle>
                {()}
            </PageHeader>

            {move || notice.get().map(|text| view! {
                <div class="progress__notice">{text}</div>
            })}

            <div class="progress__list">
                {move || {
                    let scale = dojo.scale.get_value();
                    let threshold = dojo.threshold();
                    dojo.members.get().members().iter().cloned().map(|member| {
                        let rank_name = scale
                            .rank_at(member.rank_index)
                            .map(|r| r.name.clone())
                            .unwrap_or_default();
                        let ready = member.progress >= threshold;
                        let id_minus = member.id.clone();
                        let id_plus = member.id.clone();
                        let id_promote = member.id.clone();
                        let name_for_notice = member.name.clone();
                        view! {
                            <div class="card progress-card">
                                <div class="card__header">
                                    <div class="progress-card__heading">
                                        <h2 class="card__title">{member.name.clone()}</h2>
                                        <div class="progress-card__rank">{rank_name}</div>
                                    </div>
                                    {ready.then(|| view! {
                                        <Badge variant="success".to_string()>"Ready for promotion"</Badge>
                                    })}
                                </div>
                                <div class="card__body">
                                    <div class="progress-card__row">
                                        <Button
                                            variant="ghost".to_string()
                                            size="sm".to_string()
                                            on_click=move |_| dojo.adjust_progress(&id_minus, -10)
                                        >
                                            "-10"
                                        </Button>
                                        <div class="progress-card__bar">
                                            <ProgressBar percent=u32::from(member.progress) />
                                        </div>
                                        <Button
                                            variant="ghost".to_string()
                                            size="sm".to_string()
                                            on_click=move |_| dojo.adjust_progress(&id_plus, 10)
                                        >
                                            "+10"
                                        </Button>
                                        <span class="progress-card__percent">
                                            {format!("{}%", member.progress)}
                                        </span>
                                        <Button
                                            size="sm".to_string()
                                            on_click=move |_| {
                                                if let Some(outcome) = dojo.promote(&id_promote) {
                                                    let text = if outcome.was_at_top {
                                                        format!(
                                                            "{} already holds the highest belt; progress restarted.",
                                                            name_for_notice
                                                        )
                                                    } else {
                                                        format!("{} was promoted. Congratulations!", name_for_notice)
                                                    };
                                                    set_notice.set(Some(text));
                                                }
                                            }
                                        >
                                            "Promote"
                                        </Button>
                                    </div>
                                </div>
                            </div>
                        }
                    }).collect_view()
                }}
            </div>

            <div class="card progress__legend">
                <div class="card__header">
                    <h2 class="card__title">"Belt Progression"</h2>
                </div>
                <div class="card__body progress__legend-row">
                    {scale_for_legend.iter().map(|rank| view! {
                        <span class="progress__legend-item">
                            <span
                                class="progress__legend-swatch"
                                style:background-color=rank.color.clone()
                            ></span>
                            {rank.name.clone()}
                        </span>
                    }).collect_view()}
                </div>
            </div>

            <div class="card progress__achievements">
                <div class="card__header">
                    <h2 class="card__title">"Recent Achievements"</h2>
                </div>
                <div class="card__body progress__achievements-grid">
                    {achievements.into_iter().map(|a| view! {
                        <div class="achievement-tile">
                            <div class="achievement-tile__icon">{icon(&a.icon)}</div>
                            <h4 class="achievement-tile__title">{a.title}</h4>
                            <p class="achievement-tile__description">{a.description}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
