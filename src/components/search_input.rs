//! Search Input Component

use leptos::prelude::*;

#[component]
pub fn SearchInput(
    #[prop(into)] query: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <input
            class="search-input"
            type="search"
            placeholder="Search"
            prop:value=move || query.get()
            on:input=move |ev| on_change.run(event_target_value(&ev))
        />
    }
}
