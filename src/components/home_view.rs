//! Home View Component
//!
//! Welcome screen with the sign-in / sign-up dialogs.

use leptos::prelude::*;

use crate::components::{SignInForm, SignUpForm};

/// Which auth dialog is open
#[derive(Clone, Copy, PartialEq)]
enum AuthDialog {
    Closed,
    SignIn,
    SignUp,
}

#[component]
pub fn HomeView() -> impl IntoView {
    let (dialog, set_dialog) = signal(AuthDialog::Closed);

    let sign_in_open = Signal::derive(move || dialog.get() == AuthDialog::SignIn);
    let sign_up_open = Signal::derive(move || dialog.get() == AuthDialog::SignUp);

    view! {
        <div class="home">
            <h1>"Welcome to Task Tracker!"</h1>
            <button class="primary-btn" on:click=move |_| set_dialog.set(AuthDialog::SignIn)>
                "Get Started"
            </button>

            <SignInForm
                open=sign_in_open
                on_close=Callback::new(move |_| set_dialog.set(AuthDialog::Closed))
                on_sign_up_click=Callback::new(move |_| set_dialog.set(AuthDialog::SignUp))
            />
            <SignUpForm
                open=sign_up_open
                on_close=Callback::new(move |_| set_dialog.set(AuthDialog::Closed))
                on_sign_in_click=Callback::new(move |_| set_dialog.set(AuthDialog::SignIn))
            />
        </div>
    }
}
