//! Document library: waivers, policies and curricula.

use crate::shared::components::ui::{Badge, Input};
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::state::use_dojo;
use contracts::search::matches_query;
use leptos::prelude::*;

#[component]
pub fn DocumentsView() -> impl IntoView {
    let dojo = use_dojo();

    let (query, set_query) = signal(String::new());

    let subtitle = Signal::derive(move || {
        format!("{} documents on file", dojo.documents.with(|docs| docs.len()))
    });

    view! {
        <div class="view documents">
            <PageHeader title="Documents".to_string() subtitle=subtitle>
                <div class="documents__search">
                    {icon("search")}
                    <Input
                        value=query
                        placeholder="Search by title or category...".to_string()
                        on_input=move |v: String| set_query.set(v)
                    />
                </div>
            </PageHeader>

            <div class="card">
                <div class="card__body documents__list">
                    {move || {
                        let q = query.get();
                        let rows: Vec<_> = dojo.documents.with(|docs| {
                            docs.iter()
                                .filter(|d| {
                                    matches_query(
                                        [d.title.as_str(), d.category.display_name()],
                                        &q,
                                    )
                                })
                                .cloned()
                                .collect()
                        });
                        if rows.is_empty() {
                            return view! {
                                <div class="empty-state">
                                    <p>"No documents found matching your search."</p>
                                </div>
                            }.into_any();
                        }
                        rows.into_iter().map(|doc| view! {
                            <div class="document-row">
                                <span class="document-row__icon">{icon("file-text")}</span>
                                <span class="document-row__title">{doc.title.clone()}</span>
                                <Badge variant="neutral".to_string()>
                                    {doc.category.display_name()}
                                </Badge>
                                <span class="document-row__date">
                                    {format!("Updated {}", doc.updated.format("%b %e, %Y"))}
                                </span>
                            </div>
                        }).collect_view().into_any()
                    }}
                </div>
            </div>
        </div>
    }
}
