//! Shown when a signed-in user opens an admin-only page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::util::auth::use_auth;

#[component]
pub fn ForbiddenPage() -> impl IntoView {
    let auth = use_auth();
    view! {
        <main class="auth-page">
            <div class="auth-card">
                <h1>"Access denied"</h1>
                <p>"Your account does not have permission to view this page."</p>
                <div class="auth-card__actions">
                    <A href="/dashboard" attr:class="btn btn--primary">"Back to inventory"</A>
                    <button class="btn" on:click=move |_| auth.sign_out()>"Sign in as someone else"</button>
                </div>
            </div>
        </main>
    }
}
