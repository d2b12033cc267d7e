//! Member roster: search, add, activate/deactivate.

use crate::shared::alert;
use crate::shared::components::ui::{Badge, Button, Input};
use crate::shared::components::{PageHeader, ProgressBar};
use crate::shared::format::initials;
use crate::shared::icons::icon;
use crate::state::use_dojo;
use contracts::roster::filter_members;
use leptos::prelude::*;

#[component]
pub fn MembersView() -> impl IntoView {
    let dojo = use_dojo();

    let (query, set_query) = signal(String::new());
    let (new_name, set_new_name) = signal(String::new());
    let (new_tier, set_new_tier) = signal(String::new());

    let subtitle = Signal::derive(move || {
        format!(
            "Manage {} members and track their progress",
            dojo.members.with(|store| store.len())
        )
    });

    // Filtered snapshot; cloned out of the store so rows own their data.
    let rows = move || {
        let q = query.get();
        let scale = dojo.scale.get_value();
        dojo.members.with(|store| {
            filter_members(store.members(), &scale, &q)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    let handle_add = move |_| {
        let name = new_name.get_untracked().trim().to_string();
        if name.is_empty() {
            // Rendering-layer validation: the core never sees this input.
            alert("Please enter the new member's name.");
            return;
        }
        let tier = new_tier.get_untracked().trim().to_string();
        let tier = if tier.is_empty() {
            "Standard".to_string()
        } else {
            tier
        };
        dojo.add_member(&name, &tier);
        set_new_name.set(String::new());
        set_new_tier.set(String::new());
    };

    view! {
        <div class="view members">
            <PageHeader title="Member Roster".to_string() subtitle=subtitle>
                {()}
            </PageHeader>

            <div class="members__toolbar">
                <div class="members__search">
                    {icon("search")}
                    <Input
                        value=query
                        placeholder="Search members by name, tier or belt...".to_string()
                        on_input=move |v: String| set_query.set(v)
                    />
                </div>
                <div class="members__add">
                    <Input
                        value=new_name
                        placeholder="Name".to_string()
                        on_input=move |v: String| set_new_name.set(v)
                    />
                    <Input
                        value=new_tier
                        placeholder="Tier (e.g. Adults 2x/week)".to_string()
                        on_input=move |v: String| set_new_tier.set(v)
                    />
                    <Button on_click=handle_add>
                        {icon("plus")}
                        " Add Member"
                    </Button>
                </div>
            </div>

            <div class="members__grid">
                {move || {
                    let scale = dojo.scale.get_value();
                    let items = rows();
                    if items.is_empty() {
                        return view! {
                            <div class="empty-state">
                                <p>"No members found matching your search."</p>
                            </div>
                        }.into_any();
                    }
                    items.into_iter().map(|member| {
                        let rank = scale.rank_at(member.rank_index).cloned().ok();
                        let rank_name = rank.as_ref().map(|r| r.name.clone()).unwrap_or_default();
                        let rank_color = rank.map(|r| r.color).unwrap_or_default();
                        let member_id = member.id.clone();
                        let toggle_label = if member.active { "Deactivate" } else { "Activate" };
                        view! {
                            <div class="card member-card" class:member-card--inactive=!member.active>
                                <div class="card__header">
                                    <div class="member-card__avatar">{initials(&member.name)}</div>
                                    <div class="member-card__heading">
                                        <h2 class="card__title">{member.name.clone()}</h2>
                                        <div class="member-card__tier">{member.tier.clone()}</div>
                                        <span
                                            class="badge member-card__belt"
                                            style:background-color=rank_color
                                        >
                                            {rank_name}
                                        </span>
                                    </div>
                                </div>
                                <div class="card__body">
                                    <div class="member-card__progress-label">
                                        <span>"Progress to next belt"</span>
                                        <span>{format!("{}%", member.progress)}</span>
                                    </div>
                                    <ProgressBar percent=u32::from(member.progress) />
                                    <div class="member-card__footer">
                                        {if member.active {
                                            view! { <Badge variant="success".to_string()>"Active"</Badge> }.into_any()
                                        } else {
                                            view! { <Badge variant="neutral".to_string()>"Inactive"</Badge> }.into_any()
                                        }}
                                        <Button
                                            variant="secondary".to_string()
                                            size="sm".to_string()
                                            on_click=move |_| dojo.toggle_active(&member_id)
                                        >
                                            {toggle_label}
                                        </Button>
                                    </div>
                                </div>
                            </div>
                        }
                    }).collect_view().into_any()
                }}
            </div>
        </div>
    }
}
