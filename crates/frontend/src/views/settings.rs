//! Settings: dojo name and the promotion-readiness threshold.

use crate::shared::components::PageHeader;
use crate::shared::components::ui::Input;
use crate::state::use_dojo;
use leptos::prelude::*;

#[component]
pub fn SettingsView() -> impl IntoView {
    let dojo = use_dojo();

    let name = Signal::derive(move || dojo.settings.with(|s| s.dojo_name.clone()));
    let threshold_text =
        Signal::derive(move || dojo.settings.with(|s| s.readiness_threshold.to_string()));

    view! {
        <div class="view settings">
            <PageHeader
                title="Settings".to_string()
                subtitle="School profile and promotion rules".to_string()
            >
                {()}
            </PageHeader>

            <div class="card settings__card">
                <div class="card__header">
                    <h2 class="card__title">"School Profile"</h2>
                </div>
                <div class="card__body settings__form">
                    <Input
                        label="Dojo name".to_string()
                        id="settings-dojo-name".to_string()
                        value=name
                        on_input=move |v: String| dojo.set_dojo_name(&v)
                    />
                </div>
            </div>

            <div class="card settings__card">
                <div class="card__header">
                    <h2 class="card__title">"Promotions"</h2>
                </div>
                <div class="card__body settings__form">
                    <Input
                        label="Readiness threshold (%)".to_string()
                        id="settings-threshold".to_string()
                        input_type="number".to_string()
                        value=threshold_text
                        on_input=move |v: String| {
                            if let Ok(value) = v.trim().parse::<i32>() {
                                dojo.set_threshold(value);
                            }
                        }
                    />
                    <p class="settings__hint">
                        {move || format!(
                            "Members at {}% progress or above are flagged as ready for promotion.",
                            dojo.threshold()
                        )}
                    </p>
                </div>
            </div>
        </div>
    }
}
