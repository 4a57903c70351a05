//! Pager Component
//!
//! Page buttons for the task listing.

use leptos::prelude::*;
use task_core::Pagination;

use crate::store::{store_set_page, use_task_store, TaskStateStoreFields};

#[component]
pub fn Pager() -> impl IntoView {
    let store = use_task_store();
    let pagination = move || Pagination::new(store.query().with(|q| q.page), store.total_pages().get());

    view! {
        <nav class="pager">
            <button
                class="page-btn"
                disabled=move || !pagination().has_previous()
                on:click=move |_| {
                    if let Some(page) = pagination().previous() {
                        store_set_page(&store, page);
                    }
                }
            >
                "‹"
            </button>
            {move || {
                let current = pagination().current;
                pagination().pages().map(|page| view! {
                    <button
                        class=if page == current { "page-btn active" } else { "page-btn" }
                        on:click=move |_| store_set_page(&store, page)
                    >
                        {page}
                    </button>
                }).collect_view()
            }}
            <button
                class="page-btn"
                disabled=move || !pagination().has_next()
                on:click=move |_| {
                    if let Some(page) = pagination().next() {
                        store_set_page(&store, page);
                    }
                }
            >
                "›"
            </button>
        </nav>
    }
}
