//! Task Card Component
//!
//! One task with its details and edit / delete / complete actions.

use leptos::prelude::*;
use leptos::task::spawn_local;
use task_core::Task;

use crate::commands;
use crate::components::{DeleteTaskButton, TaskEditDialog};
use crate::context::{use_app_context, NoticeKind};

#[component]
pub fn TaskCard(
    task: Task,
    on_update: Callback<Task>,
    on_delete: Callback<u64>,
) -> impl IntoView {
    let ctx = use_app_context();
    let edit_open = RwSignal::new(false);
    let deleting = RwSignal::new(false);
    let stored = StoredValue::new(task.clone());
    let dialog_task = task.clone();

    let on_complete = move |_| {
        let task = stored.get_value();
        spawn_local(async move {
            match commands::complete_task(&task).await {
                Ok(updated) => {
                    log::info!("task {:?} marked as completed", updated.id);
                    on_update.run(updated);
                }
                Err(e) => log::error!("Error completing task: {}", e),
            }
        });
    };

    let on_confirm_delete = Callback::new(move |_| {
        let Some(id) = stored.with_value(|t| t.id) else {
            log::warn!("refusing to delete a task the backend never stored");
            return;
        };
        if deleting.get_untracked() {
            return;
        }
        deleting.set(true);
        spawn_local(async move {
            match commands::delete_task(id).await {
                Ok(()) => {
                    ctx.notify(NoticeKind::Danger, "Task Deleted Successfully");
                    on_delete.run(id);
                }
                Err(e) => {
                    log::error!("Error deleting task {}: {}", id, e);
                    deleting.set(false);
                }
            }
        });
    });

    let on_save = Callback::new(move |edited: Task| {
        spawn_local(async move {
            match commands::save_task_edit(&edited).await {
                Ok(updated) => {
                    ctx.notify(NoticeKind::Success, "Task Edited Successfully");
                    on_update.run(updated);
                }
                Err(e) => log::error!("Error saving task: {}", e),
            }
        });
    });

    let status_class = if task.is_completed() { "status completed" } else { "status pending" };
    let subtasks_view = if task.subtasks.is_empty() {
        view! { <span class="no-subtasks">"No subtasks are there"</span> }.into_any()
    } else {
        view! {
            <div class="subtask-chips">
                {task.subtasks.iter().map(|subtask| view! {
                    <span class=if subtask.completed { "chip done" } else { "chip open" }>
                        {subtask.title.clone()}
                    </span>
                }).collect_view()}
            </div>
        }.into_any()
    };
    let progress = task.progress_percent();
    let show_complete = !task.is_completed();

    view! {
        <div class="task-card">
            <h3 class="task-title">{task.title.clone()}</h3>

            <dl class="task-details">
                <dt>"Description:"</dt>
                <dd>{task.description.clone()}</dd>
                <dt>"Due Date:"</dt>
                <dd>{task.due_date_display()}</dd>
                <dt>"Priority:"</dt>
                <dd>{task.priority.as_str()}</dd>
                <dt>"Status:"</dt>
                <dd class=status_class>{task.status.as_str()}</dd>
                <dt>"SubTasks:"</dt>
                <dd>{subtasks_view}</dd>
            </dl>

            <div class="progress" title="Subtasks completed">
                <progress max="100" value=progress.to_string()></progress>
                <span>{format!("{}%", progress)}</span>
            </div>

            <div class="task-actions">
                <button class="edit-btn" on:click=move |_| edit_open.set(true)>"Edit"</button>
                <DeleteTaskButton
                    task_title=task.title.clone()
                    deleting=deleting
                    on_confirm=on_confirm_delete
                />
                {show_complete.then(|| view! {
                    <button class="complete-btn" on:click=on_complete>"Complete"</button>
                })}
            </div>

            <TaskEditDialog task=dialog_task open=edit_open on_save=on_save />
        </div>
    }
}
