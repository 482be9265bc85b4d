//! Username + password sign-in.

use leptos::prelude::*;
use leptos_router::components::A;

use super::report_error;
use crate::components::field::{TextField, error_for};
use crate::components::toast_host::use_toaster;
use crate::util::auth::use_auth;
use crate::util::validate::{self, FieldErrors};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let toaster = use_toaster();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let params = match validate::sign_in(&username.get_untracked(), &password.get_untracked()) {
            Ok(params) => params,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FieldErrors::default());
        busy.set(true);
        leptos::task::spawn_local(async move {
            // On success the public route guard moves on to the dashboard.
            if let Err(e) = auth.sign_in(params).await {
                report_error(toaster, "Sign-in failed", &e);
            }
            busy.set(false);
        });
    };

    view! {
        <main class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Formotex"</h1>
                <p class="auth-card__subtitle">"Sign in to manage the inventory"</p>
                <TextField label="Username" value=username error=error_for(errors, "username")/>
                <TextField
                    label="Password"
                    value=password
                    error=error_for(errors, "password")
                    input_type="password"
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in…" } else { "Sign in" }}
                </button>
                <p class="auth-card__footer">
                    "No account yet? " <A href="/auth/register">"Register"</A>
                </p>
            </form>
        </main>
    }
}
