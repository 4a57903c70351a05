//! Tasks View Component
//!
//! Task screen: header, listing controls, task cards and pager.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use task_core::Task;

use crate::commands;
use crate::components::{Pager, TaskForm, TaskList, TaskToolbar};
use crate::context::{use_app_context, View};
use crate::store::{store_remove_task, store_update_task, TaskState, TaskStateStoreFields};

#[component]
pub fn TasksView() -> impl IntoView {
    let ctx = use_app_context();
    let store = Store::new(TaskState::new(ctx.page_size));
    provide_context(store);

    let form_open = RwSignal::new(false);

    // Fetch whenever the listing parameters change or a reload is requested
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        let query = store.query().get();
        log::debug!("fetching page {} (trigger={})", query.page, trigger);
        spawn_local(async move {
            match commands::fetch_tasks(&query).await {
                Ok((tasks, total_pages)) => {
                    log::debug!("loaded {} tasks", tasks.len());
                    store.tasks().set(tasks);
                    store.total_pages().set(total_pages);
                }
                Err(e) => {
                    log::error!("Error fetching tasks: {}", e);
                    ctx.navigate(View::Home);
                }
            }
        });
    });

    let on_sign_out = move |_| {
        spawn_local(async move {
            if let Err(e) = commands::sign_out().await {
                log::warn!("sign out failed: {}", e);
            }
            ctx.navigate(View::Home);
        });
    };

    let on_update = Callback::new(move |task: Task| store_update_task(&store, task));
    let on_delete = Callback::new(move |task_id: u64| store_remove_task(&store, task_id));

    view! {
        <div class="tasks-page">
            <header class="tasks-header">
                <h1>"Your personal Task tracker"</h1>
                <div class="tasks-header-actions">
                    <button class="primary-btn" on:click=move |_| form_open.set(true)>"Create Task"</button>
                    <button class="secondary-btn" on:click=on_sign_out>"Sign out"</button>
                </div>
            </header>

            <TaskForm
                open=form_open
                on_created=Callback::new(move |_: Task| ctx.reload())
            />

            <TaskToolbar />

            <TaskList
                tasks=Signal::derive(move || store.tasks().get())
                on_update=on_update
                on_delete=on_delete
            />

            <Pager />
        </div>
    }
}
