//! Facility issues reported on the floor.

use crate::shared::alert;
use crate::shared::components::ui::{Badge, Button, Input};
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::state::use_dojo;
use contracts::domain::issue::IssueStatus;
use leptos::prelude::*;

fn status_variant(status: IssueStatus) -> &'static str {
    match status {
        IssueStatus::Open => "error",
        IssueStatus::InProgress => "warning",
        IssueStatus::Resolved => "success",
    }
}

fn advance_label(status: IssueStatus) -> &'static str {
    match status {
        IssueStatus::Open => "Start",
        _ => "Resolve",
    }
}

#[component]
pub fn IssuesView() -> impl IntoView {
    let dojo = use_dojo();

    let (new_title, set_new_title) = signal(String::new());
    let (new_location, set_new_location) = signal(String::new());

    let subtitle = Signal::derive(move || {
        let open = dojo
            .issues
            .with(|issues| issues.iter().filter(|i| !i.status.is_final()).count());
        format!("{} issues need attention", open)
    });

    let handle_add = move |_| {
        let title = new_title.get_untracked().trim().to_string();
        if title.is_empty() {
            alert("Please describe the issue.");
            return;
        }
        let location = new_location.get_untracked().trim().to_string();
        let location = if location.is_empty() {
            "Main Dojo".to_string()
        } else {
            location
        };
        dojo.add_issue(&title, &location);
        set_new_title.set(String::new());
        set_new_location.set(String::new());
    };

    view! {
        <div class="view issues">
            <PageHeader title="Issues".to_string() subtitle=subtitle>
                <div class="issues__add">
                    <Input
                        value=new_title
                        placeholder="What is broken?".to_string()
                        on_input=move |v: String| set_new_title.set(v)
                    />
                    <Input
                        value=new_location
                        placeholder="Location".to_string()
                        on_input=move |v: String| set_new_location.set(v)
                    />
                    <Button on_click=handle_add>
                        {icon("plus")}
                        " Report Issue"
                    </Button>
                </div>
            </PageHeader>

            <div class="issues__list">
                {move || dojo.issues.get().into_iter().map(|issue| {
                    let issue_id = issue.id.clone();
                    let can_advance = !issue.status.is_final();
                    let label = advance_label(issue.status);
                    view! {
                        <div class="card issue-card">
                            <div class="card__header">
                                <div class="issue-card__heading">
                                    <h2 class="card__title">{issue.title.clone()}</h2>
                                    <div class="issue-card__location">
                                        {icon("map-pin")}
                                        {issue.location.clone()}
                                    </div>
                                </div>
                                <div class="issue-card__actions">
                                    <Badge variant=status_variant(issue.status).to_string()>
                                        {issue.status.display_name()}
                                    </Badge>
                                    {can_advance.then(|| view! {
                                        <Button
                                            variant="secondary".to_string()
                                            size="sm".to_string()
                                            on_click=move |_| dojo.advance_issue(&issue_id)
                                        >
                                            {label}
                                        </Button>
                                    })}
                                </div>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
