//! Sign Up Form Component
//!
//! Registration dialog with live field validation.

use leptos::prelude::*;
use leptos::task::spawn_local;
use task_core::validate::{validate_field, validate_form};
use task_core::{FormErrors, RegisterRequest};

use crate::commands;
use crate::context::{use_app_context, NoticeKind};

#[component]
pub fn SignUpForm(
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<()>,
    on_sign_in_click: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::default());
    let (submitting, set_submitting) = signal(false);

    Effect::new(move |_| {
        if !open.get() {
            for field in [full_name, email, username, password] {
                field.set(String::new());
            }
            errors.set(FormErrors::default());
        }
    });

    let on_field = move |field: &'static str, target: RwSignal<String>, value: String| {
        errors.update(|e| e.set(field, validate_field(field, &value)));
        target.set(value);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let request = RegisterRequest {
            full_name: full_name.get(),
            email: email.get(),
            username: username.get(),
            password: password.get(),
        };
        let found = validate_form([
            ("fullName", request.full_name.as_str()),
            ("email", request.email.as_str()),
            ("username", request.username.as_str()),
            ("password", request.password.as_str()),
        ]);
        if !found.is_empty() {
            errors.set(found);
            return;
        }

        set_submitting.set(true);
        spawn_local(async move {
            match commands::register(&request).await {
                Ok(()) => {
                    ctx.notify(NoticeKind::Success, "User registered successfully!");
                    on_sign_in_click.run(());
                }
                Err(message) => errors.update(|e| e.set("backend", message)),
            }
            set_submitting.set(false);
        });
    };

    let field_error = move |field: &'static str| move || errors.with(|e| e.get(field).to_string());

    // (label, field name, input type, value signal)
    let fields = [
        ("Full name", "fullName", "text", full_name),
        ("Email", "email", "email", email),
        ("Username", "username", "text", username),
        ("Password", "password", "password", password),
    ];

    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
                <form class="dialog" on:submit=on_submit on:click=|ev| ev.stop_propagation()>
                    <h2 class="dialog-title">"Sign Up"</h2>
                    <p class="dialog-text">"Please fill in the required information to sign up."</p>

                    {fields.into_iter().map(|(label, name, input_type, value)| view! {
                        <label class="field">
                            <span>{label}</span>
                            <input
                                type=input_type
                                prop:value=move || value.get()
                                on:input=move |ev| on_field(name, value, event_target_value(&ev))
                            />
                            <span class="field-error">{field_error(name)}</span>
                        </label>
                    }).collect_view()}

                    <div class="backend-error">{field_error("backend")}</div>

                    <div class="dialog-actions">
                        <button type="button" class="secondary-btn" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="primary-btn" disabled=move || submitting.get()>
                            "Sign Up"
                        </button>
                    </div>

                    <div class="dialog-footer">
                        "Already have an account? "
                        <a class="link" on:click=move |_| on_sign_in_click.run(())>"Sign In"</a>
                    </div>
                </form>
            </div>
        </Show>
    }
}
