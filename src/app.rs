//! Task Tracker Frontend App
//!
//! Root component: switches between the home and task screens.

use leptos::prelude::*;

use crate::commands;
use crate::components::{HomeView, NoticeBanner, TasksView};
use crate::context::{AppContext, View};

#[component]
pub fn App(page_size: u32) -> impl IntoView {
    // A readable session cookie means the user is already signed in
    let initial_view = if commands::session_token().is_some() {
        View::Tasks
    } else {
        View::Home
    };

    let view_signal = signal(initial_view);
    let reload_trigger = signal(0u32);
    let notice = signal(None);

    let ctx = AppContext::new(view_signal, reload_trigger, notice, page_size);
    provide_context(ctx);

    view! {
        <div class="app-layout">
            {move || match ctx.view.get() {
                View::Home => view! { <HomeView /> }.into_any(),
                View::Tasks => view! { <TasksView /> }.into_any(),
            }}
            <NoticeBanner />
        </div>
    }
}
