//! Sign In Form Component
//!
//! Username/password dialog with live field validation.

use leptos::prelude::*;
use leptos::task::spawn_local;
use task_core::validate::{validate_field, validate_form};
use task_core::{FormErrors, LoginRequest};

use crate::commands;
use crate::context::{use_app_context, View};

#[component]
pub fn SignInForm(
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<()>,
    on_sign_up_click: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::default());
    let (submitting, set_submitting) = signal(false);

    // Reset the form whenever the dialog closes
    Effect::new(move |_| {
        if !open.get() {
            username.set(String::new());
            password.set(String::new());
            errors.set(FormErrors::default());
        }
    });

    let on_field = move |field: &'static str, target: RwSignal<String>, value: String| {
        errors.update(|e| e.set(field, validate_field(field, &value)));
        target.set(value);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let request = LoginRequest {
            username: username.get(),
            password: password.get(),
        };
        let found = validate_form([
            ("username", request.username.as_str()),
            ("password", request.password.as_str()),
        ]);
        if !found.is_empty() {
            errors.set(found);
            return;
        }

        set_submitting.set(true);
        spawn_local(async move {
            match commands::login(&request).await {
                Ok(()) => {
                    on_close.run(());
                    ctx.navigate(View::Tasks);
                }
                Err(message) => errors.update(|e| e.set("backend", message)),
            }
            set_submitting.set(false);
        });
    };

    let field_error = move |field: &'static str| move || errors.with(|e| e.get(field).to_string());

    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
                <form class="dialog" on:submit=on_submit on:click=|ev| ev.stop_propagation()>
                    <h2 class="dialog-title">"Sign In"</h2>
                    <p class="dialog-text">"Please enter your credentials to sign in."</p>

                    <label class="field">
                        <span>"Username"</span>
                        <input
                            type="text"
                            prop:value=move || username.get()
                            on:input=move |ev| on_field("username", username, event_target_value(&ev))
                        />
                        <span class="field-error">{field_error("username")}</span>
                    </label>
                    <label class="field">
                        <span>"Password"</span>
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| on_field("password", password, event_target_value(&ev))
                        />
                        <span class="field-error">{field_error("password")}</span>
                    </label>

                    <div class="backend-error">{field_error("backend")}</div>

                    <div class="dialog-actions">
                        <button type="button" class="secondary-btn" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="primary-btn" disabled=move || submitting.get()>
                            "Sign In"
                        </button>
                    </div>

                    <div class="dialog-footer">
                        "Don't have an account? "
                        <a class="link" on:click=move |_| on_sign_up_click.run(())>"Create Account"</a>
                    </div>
                </form>
            </div>
        </Show>
    }
}
