//! Task Edit Dialog Component
//!
//! Edit the due date and subtasks of an existing task. Title and
//! description are shown read-only.

use leptos::prelude::*;
use task_core::draft::validate_due_date;
use task_core::{Subtask, Task};

#[component]
pub fn TaskEditDialog(
    task: Task,
    open: RwSignal<bool>,
    on_save: Callback<Task>,
) -> impl IntoView {
    let original = StoredValue::new(task);
    let edited = RwSignal::new(original.get_value());
    let new_subtask = RwSignal::new(String::new());
    let date_error = RwSignal::new(String::new());

    // Start from the card's task every time the dialog opens
    Effect::new(move |_| {
        if open.get() {
            edited.set(original.get_value());
            new_subtask.set(String::new());
            date_error.set(String::new());
        }
    });

    let toggle_subtask = move |index: usize, checked: bool| {
        edited.update(|task| {
            if let Some(subtask) = task.subtasks.get_mut(index) {
                subtask.completed = checked;
            }
            task.recompute_completion();
        });
    };

    let delete_subtask = move |index: usize| {
        edited.update(|task| {
            if index < task.subtasks.len() {
                task.subtasks.remove(index);
            }
        });
    };

    let add_subtask = move |_| {
        if let Some(subtask) = Subtask::new(&new_subtask.get()) {
            edited.update(|task| task.subtasks.push(subtask));
            new_subtask.set(String::new());
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let task = edited.get();
        let error = validate_due_date(&task.due_date);
        if !error.is_empty() {
            date_error.set(error);
            return;
        }
        on_save.run(task);
        open.set(false);
    };

    let subtask_rows = move || {
        let subtasks = edited.with(|task| task.subtasks.clone());
        subtasks.into_iter().enumerate().map(|(index, subtask)| {
            let done = subtask.completed;
            view! {
                <div class="subtask-row">
                    <label class=if done { "subtask-label done" } else { "subtask-label" }>
                        <input
                            type="checkbox"
                            checked=done
                            disabled=done
                            on:change=move |ev| toggle_subtask(index, event_target_checked(&ev))
                        />
                        {subtask.title}
                    </label>
                    {(!done).then(|| view! {
                        <button type="button" class="danger-btn small" on:click=move |_| delete_subtask(index)>
                            "Delete"
                        </button>
                    })}
                </div>
            }
        }).collect_view()
    };

    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| open.set(false)>
                <form class="dialog" on:submit=on_submit on:click=|ev| ev.stop_propagation()>
                    <h2 class="dialog-title">"Edit Task"</h2>

                    <label class="field">
                        <span>"Title"</span>
                        <input type="text" disabled prop:value=move || edited.with(|t| t.title.clone()) />
                    </label>
                    <label class="field">
                        <span>"Description"</span>
                        <textarea disabled prop:value=move || edited.with(|t| t.description.clone())></textarea>
                    </label>
                    <label class="field">
                        <span>"Due Date"</span>
                        <input
                            type="date"
                            prop:value=move || edited.with(|t| t.due_date.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                date_error.set(validate_due_date(&value));
                                edited.update(|t| t.due_date = value);
                            }
                        />
                        <span class="field-error">{move || date_error.get()}</span>
                    </label>

                    <div class="subtasks">{subtask_rows}</div>

                    <div class="subtask-add">
                        <input
                            type="text"
                            placeholder="New Subtask"
                            prop:value=move || new_subtask.get()
                            on:input=move |ev| new_subtask.set(event_target_value(&ev))
                        />
                        <button type="button" class="secondary-btn small" on:click=add_subtask>
                            "Add Subtask"
                        </button>
                    </div>

                    <div class="dialog-actions">
                        <button type="button" class="secondary-btn" on:click=move |_| open.set(false)>
                            "Cancel"
                        </button>
                        <button type="submit" class="primary-btn">"Save"</button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
