use leptos::prelude::*;

/// Thin horizontal progress bar, 0-100.
#[component]
pub fn ProgressBar(
    /// Fill percent (reactive)
    #[prop(into)]
    percent: Signal<u32>,
) -> impl IntoView {
    view! {
        <div class="progress-bar">
            <div
                class="progress-bar__fill"
                style:width=move || format!("{}%", percent.get().min(100))
            ></div>
        </div>
    }
}
