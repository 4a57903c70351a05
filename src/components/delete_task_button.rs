//! Delete Task Button Component
//!
//! Card action that asks before deleting and stays disabled while the
//! request runs.

use leptos::prelude::*;

fn confirm_prompt(task_title: &str) -> String {
    let title = task_title.trim();
    if title.is_empty() {
        "Delete task?".to_string()
    } else {
        format!("Delete \"{}\"?", title)
    }
}

fn button_label(deleting: bool) -> &'static str {
    if deleting {
        "Deleting..."
    } else {
        "Delete"
    }
}

#[component]
pub fn DeleteTaskButton(
    /// Title named in the confirmation prompt
    #[prop(into)]
    task_title: String,
    /// True while the delete request is in flight
    #[prop(into)]
    deleting: Signal<bool>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    let confirming = RwSignal::new(false);
    let prompt = confirm_prompt(&task_title);

    view! {
        <Show
            when=move || confirming.get()
            fallback=move || view! {
                <button
                    class="delete-btn"
                    disabled=move || deleting.get()
                    on:click=move |_| confirming.set(true)
                >
                    {move || button_label(deleting.get())}
                </button>
            }
        >
            <span class="delete-confirm" role="alertdialog">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button
                    class="confirm-btn"
                    aria-label="confirm-delete"
                    on:click=move |_| {
                        confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    aria-label="cancel-delete"
                    on:click=move |_| confirming.set(false)
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
