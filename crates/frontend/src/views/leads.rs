//! Lead pipeline: prospects moving from first contact to membership.

use crate::shared::alert;
use crate::shared::components::ui::{Badge, Button, Input};
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::state::use_dojo;
use contracts::domain::lead::LeadStatus;
use leptos::prelude::*;

fn status_variant(status: LeadStatus) -> &'static str {
    match status {
        LeadStatus::New => "neutral",
        LeadStatus::Contacted => "primary",
        LeadStatus::TrialBooked => "warning",
        LeadStatus::Joined => "success",
    }
}

#[component]
pub fn LeadsView() -> impl IntoView {
    let dojo = use_dojo();

    let (new_name, set_new_name) = signal(String::new());
    let (new_contact, set_new_contact) = signal(String::new());

    let subtitle = Signal::derive(move || {
        let joined = dojo
            .leads
            .with(|leads| leads.iter().filter(|l| l.status.is_final()).count());
        let total = dojo.leads.with(|leads| leads.len());
        format!("{} prospects in the pipeline, {} joined", total, joined)
    });

    let handle_add = move |_| {
        let name = new_name.get_untracked().trim().to_string();
        if name.is_empty() {
            alert("Please enter the prospect's name.");
            return;
        }
        let contact = new_contact.get_untracked().trim().to_string();
        dojo.add_lead(&name, &contact);
        set_new_name.set(String::new());
        set_new_contact.set(String::new());
    };

    view! {
        <div class="view leads">
            <PageHeader title="Leads".to_string() subtitle=subtitle>
                <div class="leads__add">
                    <Input
                        value=new_name
                        placeholder="Name".to_string()
                        on_input=move |v: String| set_new_name.set(v)
                    />
                    <Input
                        value=new_contact
                        placeholder="Email or phone".to_string()
                        on_input=move |v: String| set_new_contact.set(v)
                    />
                    <Button on_click=handle_add>
                        {icon("plus")}
                        " Add Lead"
                    </Button>
                </div>
            </PageHeader>

            <div class="leads__list">
                {move || dojo.leads.get().into_iter().map(|lead| {
                    let lead_id = lead.id.clone();
                    let can_advance = !lead.status.is_final();
                    view! {
                        <div class="card lead-card">
                            <div class="card__header">
                                <div class="lead-card__heading">
                                    <h2 class="card__title">{lead.name.clone()}</h2>
                                    <div class="lead-card__contact">{lead.contact.clone()}</div>
                                </div>
                                <Badge variant=status_variant(lead.status).to_string()>
                                    {lead.status.display_name()}
                                </Badge>
                            </div>
                            <div class="card__body lead-card__body">
                                <p class="lead-card__note">{lead.note.clone()}</p>
                                {can_advance.then(|| view! {
                                    <Button
                                        variant="secondary".to_string()
                                        size="sm".to_string()
                                        on_click=move |_| dojo.advance_lead(&lead_id)
                                    >
                                        {icon("check")}
                                        " Advance"
                                    </Button>
                                })}
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
