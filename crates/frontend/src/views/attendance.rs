//! Attendance check-in: a short code members enter at the front-desk kiosk.

use crate::shared::components::ui::Button;
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use contracts::attendance::attendance_code;
use leptos::prelude::*;

fn fresh_code() -> String {
    attendance_code(|n| (js_sys::Math::random() * n as f64) as usize)
}

#[component]
pub fn AttendanceView() -> impl IntoView {
    let (code, set_code) = signal(fresh_code());

    view! {
        <div class="view attendance">
            <PageHeader
                title="Attendance".to_string()
                subtitle="Members enter today's code at the kiosk to check in".to_string()
            >
                {()}
            </PageHeader>

            <div class="card attendance__card">
                <div class="card__body attendance__body">
                    <span class="attendance__icon">{icon("qr-code")}</span>
                    <div class="attendance__code">{move || code.get()}</div>
                    <p class="attendance__hint">
                        "The code resets every class. Generate a new one before each session."
                    </p>
                    <Button on_click=move |_| set_code.set(fresh_code())>
                        "New Code"
                    </Button>
                </div>
            </div>
        </div>
    }
}
