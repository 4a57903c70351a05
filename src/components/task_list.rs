//! Task List Component
//!
//! Renders a page of tasks as cards and passes card results upward.

use leptos::prelude::*;
use task_core::Task;

use crate::components::TaskCard;

#[component]
pub fn TaskList(
    #[prop(into)] tasks: Signal<Vec<Task>>,
    /// Called with the backend's copy of a task after edit/complete
    on_update: Callback<Task>,
    /// Called with the id of a task the backend deleted
    on_delete: Callback<u64>,
) -> impl IntoView {
    view! {
        <div class="task-list">
            <Show when=move || tasks.with(|t| t.is_empty())>
                <p class="empty-list">"No tasks to show"</p>
            </Show>
            <For
                each=move || tasks.get()
                key=|task| {
                    // Every field a card displays, so edits re-render the card
                    (
                        task.id,
                        task.title.clone(),
                        task.description.clone(),
                        task.priority,
                        task.due_date.clone(),
                        task.status,
                        task.subtasks.clone(),
                    )
                }
                children=move |task| view! {
                    <TaskCard task=task on_update=on_update on_delete=on_delete />
                }
            />
        </div>
    }
}
