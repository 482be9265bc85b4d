//! Self-service profile editor opened from the sidebar user badge.

use leptos::prelude::*;

use super::field::{TextField, error_for};
use super::toast_host::use_toaster;
use crate::net::error::ApiError;
use crate::util::auth::use_auth;
use crate::util::validate::{self, AccountForm, FieldErrors};

#[component]
pub fn ProfileDialog(on_close: Callback<()>) -> impl IntoView {
    let auth = use_auth();
    let toaster = use_toaster();
    let current = auth.user();

    let username = RwSignal::new(current.as_ref().map(|u| u.username.clone()).unwrap_or_default());
    let email = RwSignal::new(current.as_ref().map(|u| u.email.clone()).unwrap_or_default());
    let password = RwSignal::new(String::new());
    let repeat_password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let busy = RwSignal::new(false);
    let user_id = current.map(|u| u.id);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (Some(user_id), Some(token)) = (user_id, auth.token()) else {
            return;
        };
        let form = AccountForm {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            repeat_password: repeat_password.get_untracked(),
        };
        let body = match validate::profile(user_id, &form) {
            Ok(body) => body,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FieldErrors::default());
        busy.set(true);
        let api = auth.api();
        leptos::task::spawn_local(async move {
            let result = crate::net::users::update_profile(&api, &token, &body).await;
            busy.set(false);
            match result {
                Ok(()) => {
                    auth.refetch();
                    toaster.success("Profile updated");
                    on_close.run(());
                }
                Err(ApiError::Conflict { .. }) => toaster.error("Username or email already in use"),
                Err(e) => toaster.error(format!("Could not update your profile: {}", e.user_message())),
            }
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <form class="dialog dialog--form" on:click=move |ev| ev.stop_propagation() on:submit=on_submit>
                <h2>"Edit your profile"</h2>
                <TextField label="Username" value=username error=error_for(errors, "username")/>
                <TextField label="Email" value=email error=error_for(errors, "email") input_type="email"/>
                <TextField
                    label="New password"
                    value=password
                    error=error_for(errors, "password")
                    input_type="password"
                    placeholder="Leave blank to keep"
                />
                <TextField
                    label="Repeat password"
                    value=repeat_password
                    error=error_for(errors, "repeat_password")
                    input_type="password"
                />
                <div class="dialog__actions">
                    <button class="btn" type="button" on:click=move |_| on_close.run(())>"Cancel"</button>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>"Save"</button>
                </div>
            </form>
        </div>
    }
}
