//! Task Toolbar Component
//!
//! Sort, filter and search controls bound to the store's query.

use leptos::prelude::*;
use task_core::{Priority, SortKey, Status};

use crate::components::SearchInput;
use crate::store::{store_update_query, use_task_store, TaskStateStoreFields};

/// (value, label) pairs for the sort select
const SORT_OPTIONS: &[(&str, &str)] = &[
    ("", "None"),
    ("dueDate", "Due Date"),
    ("priority", "Priority"),
];

#[component]
pub fn TaskToolbar() -> impl IntoView {
    let store = use_task_store();
    let query = move || store.query().get();

    let keyword = Signal::derive(move || store.query().with(|q| q.keyword.clone()));
    let on_search = Callback::new(move |keyword: String| {
        store_update_query(&store, |q| q.keyword = keyword);
    });

    view! {
        <div class="task-toolbar">
            <select
                class="sort-select"
                title="Sort by"
                prop:value=move || query().sort_by.as_param().unwrap_or("").to_string()
                on:change=move |ev| {
                    let sort_by = SortKey::from_param(&event_target_value(&ev));
                    store_update_query(&store, |q| q.sort_by = sort_by);
                }
            >
                {SORT_OPTIONS.iter().map(|(value, label)| view! {
                    <option value=*value>{*label}</option>
                }).collect_view()}
            </select>

            <button
                class="order-btn"
                title="Sort order"
                on:click=move |_| store_update_query(&store, |q| q.sort_order = q.sort_order.toggled())
            >
                {move || query().sort_order.as_param().to_uppercase()}
            </button>

            <select
                class="filter-select"
                title="Priority"
                prop:value=move || query().priority.map(|p| p.as_str()).unwrap_or("").to_string()
                on:change=move |ev| {
                    let priority = Priority::from_str(&event_target_value(&ev));
                    store_update_query(&store, |q| q.priority = priority);
                }
            >
                <option value="">"All priorities"</option>
                {Priority::ALL.iter().map(|p| view! {
                    <option value=p.as_str()>{p.as_str()}</option>
                }).collect_view()}
            </select>

            <select
                class="filter-select"
                title="Status"
                prop:value=move || query().status.map(|s| s.as_str()).unwrap_or("").to_string()
                on:change=move |ev| {
                    let status = Status::from_str(&event_target_value(&ev));
                    store_update_query(&store, |q| q.status = status);
                }
            >
                <option value="">"All statuses"</option>
                {Status::ALL.iter().map(|s| view! {
                    <option value=s.as_str()>{s.as_str()}</option>
                }).collect_view()}
            </select>

            <SearchInput query=keyword on_change=on_search />
        </div>
    }
}
