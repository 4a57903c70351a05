//! Task Form Component
//!
//! Create-task dialog with subtask add/remove and local validation.

use leptos::prelude::*;
use leptos::task::spawn_local;
use task_core::{FormErrors, Priority, Task, TaskDraft};

use crate::commands;
use crate::context::{use_app_context, NoticeKind};

/// Today as `YYYY-MM-DD`, used as the earliest selectable due date
fn today() -> String {
    let iso = String::from(js_sys::Date::new_0().to_iso_string());
    iso.chars().take(10).collect()
}

#[component]
pub fn TaskForm(
    open: RwSignal<bool>,
    /// Called with the task the backend stored
    on_created: Callback<Task>,
) -> impl IntoView {
    let ctx = use_app_context();
    let draft = RwSignal::new(TaskDraft::new());
    let errors = RwSignal::new(FormErrors::default());
    let (submitting, set_submitting) = signal(false);

    // Fresh form every time the dialog opens
    Effect::new(move |_| {
        if open.get() {
            draft.set(TaskDraft::new());
            errors.set(FormErrors::default());
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get();
        let found = current.validate();
        if !found.is_empty() {
            errors.set(found);
            return;
        }

        let task = current.into_task();
        set_submitting.set(true);
        spawn_local(async move {
            match commands::create_task(&task).await {
                Ok(created) => {
                    log::info!("created task {:?}", created.id);
                    ctx.notify(NoticeKind::Success, "Task Created Successfully");
                    open.set(false);
                    on_created.run(created);
                }
                Err(message) => errors.update(|e| e.set("backend", message)),
            }
            set_submitting.set(false);
        });
    };

    let field_error = move |field: &'static str| move || errors.with(|e| e.get(field).to_string());

    let subtask_rows = move || {
        let subtasks = draft.with(|d| d.subtasks.clone());
        subtasks.into_iter().enumerate().map(|(index, subtask)| view! {
            <div class="subtask-row draft">
                <span class="subtask-title">{subtask.title}</span>
                <button
                    type="button"
                    class="icon-btn"
                    aria-label="remove-subtask"
                    on:click=move |_| draft.update(|d| d.remove_subtask(index))
                >
                    "✕"
                </button>
            </div>
        }).collect_view()
    };

    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| open.set(false)>
                <form class="dialog" on:submit=on_submit on:click=|ev| ev.stop_propagation()>
                    <h2 class="dialog-title">"Create Task"</h2>

                    <label class="field">
                        <span>"Task Name"</span>
                        <input
                            type="text"
                            prop:value=move || draft.with(|d| d.title.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.title = value);
                                errors.update(|e| e.set("title", ""));
                            }
                        />
                        <span class="field-error">{field_error("title")}</span>
                    </label>
                    <label class="field">
                        <span>"About Task"</span>
                        <textarea
                            prop:value=move || draft.with(|d| d.description.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.description = value);
                            }
                        ></textarea>
                    </label>

                    <div class="subtasks">{subtask_rows}</div>
                    <div class="subtask-add">
                        <input
                            type="text"
                            placeholder="Subtask Title"
                            prop:value=move || draft.with(|d| d.subtask_title.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.subtask_title = value);
                            }
                        />
                        <button
                            type="button"
                            class="primary-btn small"
                            on:click=move |_| draft.update(|d| { d.add_subtask(); })
                        >
                            "Add Subtask"
                        </button>
                    </div>

                    <label class="field">
                        <span>"Priority"</span>
                        <select
                            prop:value=move || draft.with(|d| d.priority.as_str().to_string())
                            on:change=move |ev| {
                                let priority = Priority::from_str(&event_target_value(&ev)).unwrap_or_default();
                                draft.update(|d| d.priority = priority);
                            }
                        >
                            <option value="low">"Low"</option>
                            <option value="medium">"Medium"</option>
                            <option value="high">"High"</option>
                        </select>
                    </label>
                    <label class="field">
                        <span>"Due Date"</span>
                        <input
                            type="date"
                            min=today()
                            prop:value=move || draft.with(|d| d.due_date.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.due_date = value);
                            }
                        />
                        <span class="field-error">{field_error("dueDate")}</span>
                    </label>

                    <div class="backend-error">{field_error("backend")}</div>

                    <div class="dialog-actions">
                        <button type="button" class="secondary-btn" on:click=move |_| open.set(false)>
                            "Cancel"
                        </button>
                        <button type="submit" class="primary-btn" disabled=move || submitting.get()>
                            "Add"
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
