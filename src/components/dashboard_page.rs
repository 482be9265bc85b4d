//! Page shell with a title and a description line.

use leptos::prelude::*;

#[component]
pub fn DashboardPage(title: &'static str, description: &'static str, children: Children) -> impl IntoView {
    view! {
        <main class="dashboard-page">
            <header class="dashboard-page__header">
                <h2 class="dashboard-page__title">{title}</h2>
                <p class="dashboard-page__description">{description}</p>
            </header>
            <div class="dashboard-page__body">{children()}</div>
        </main>
    }
}
