//! Notice Banner Component
//!
//! Confirmation message that dismisses itself after a few seconds.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{use_app_context, NoticeKind};

const DISMISS_AFTER_MS: u32 = 3_000;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ctx = use_app_context();

    // Start a dismiss timer for every new notice
    Effect::new(move |_| {
        if let Some(id) = ctx.notice.with(|n| n.as_ref().map(|n| n.id)) {
            spawn_local(async move {
                TimeoutFuture::new(DISMISS_AFTER_MS).await;
                ctx.dismiss(id);
            });
        }
    });

    move || {
        ctx.notice.get().map(|notice| {
            let class = match notice.kind {
                NoticeKind::Success => "notice notice-success",
                NoticeKind::Danger => "notice notice-danger",
            };
            let id = notice.id;
            view! {
                <div class=class role="status" on:click=move |_| ctx.dismiss(id)>
                    <span class="notice-icon">"✔"</span>
                    <span class="notice-text">{notice.message}</span>
                </div>
            }
        })
    }
}
