//! Self-registration. New accounts are employees and are signed in
//! immediately.

use leptos::prelude::*;
use leptos_router::components::A;

use super::report_error;
use crate::components::field::{TextField, error_for};
use crate::components::toast_host::use_toaster;
use crate::net::error::ApiError;
use crate::util::auth::use_auth;
use crate::util::validate::{self, AccountForm, FieldErrors};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let toaster = use_toaster();
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let repeat_password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = AccountForm {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            repeat_password: repeat_password.get_untracked(),
        };
        let params = match validate::sign_up(&form) {
            Ok(params) => params,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FieldErrors::default());
        busy.set(true);
        leptos::task::spawn_local(async move {
            match auth.sign_up(params).await {
                Ok(()) => toaster.success("Account created"),
                Err(ApiError::Conflict { .. }) => toaster.error("Username or email already in use"),
                Err(e) => report_error(toaster, "Registration failed", &e),
            }
            busy.set(false);
        });
    };

    view! {
        <main class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Create an account"</h1>
                <TextField label="Username" value=username error=error_for(errors, "username")/>
                <TextField label="Email" value=email error=error_for(errors, "email") input_type="email"/>
                <TextField
                    label="Password"
                    value=password
                    error=error_for(errors, "password")
                    input_type="password"
                />
                <TextField
                    label="Repeat password"
                    value=repeat_password
                    error=error_for(errors, "repeat_password")
                    input_type="password"
                />
                <p class="auth-card__hint">
                    "Passwords need an uppercase letter, a lowercase letter, a number and one of !@#$%^&*."
                </p>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>"Register"</button>
                <p class="auth-card__footer">
                    "Already registered? " <A href="/auth/login">"Sign in"</A>
                </p>
            </form>
        </main>
    }
}
