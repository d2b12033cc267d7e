//! Office to-do board.

use crate::shared::alert;
use crate::shared::components::ui::{Button, Input};
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::state::use_dojo;
use leptos::prelude::*;

#[component]
pub fn TasksView() -> impl IntoView {
    let dojo = use_dojo();

    let (new_title, set_new_title) = signal(String::new());

    let subtitle = Signal::derive(move || {
        let done = dojo.tasks.with(|tasks| tasks.iter().filter(|t| t.done).count());
        let total = dojo.tasks.with(|tasks| tasks.len());
        format!("{} of {} done", done, total)
    });

    let handle_add = move |_| {
        let title = new_title.get_untracked().trim().to_string();
        if title.is_empty() {
            alert("Please enter a task title.");
            return;
        }
        dojo.add_task(&title);
        set_new_title.set(String::new());
    };

    view! {
        <div class="view tasks">
            <PageHeader title="Tasks".to_string() subtitle=subtitle>
                <div class="tasks__add">
                    <Input
                        value=new_title
                        placeholder="New task...".to_string()
                        on_input=move |v: String| set_new_title.set(v)
                    />
                    <Button on_click=handle_add>
                        {icon("plus")}
                        " Add Task"
                    </Button>
                </div>
            </PageHeader>

            <div class="card">
                <div class="card__body tasks__list">
                    {move || dojo.tasks.get().into_iter().map(|task| {
                        let task_id = task.id.clone();
                        view! {
                            <div class="task-row" class:task-row--done=task.done>
                                <button
                                    class="task-row__check"
                                    class:task-row__check--done=task.done
                                    on:click=move |_| dojo.toggle_task(&task_id)
                                >
                                    {task.done.then(|| icon("check"))}
                                </button>
                                <span class="task-row__title">{task.title.clone()}</span>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
