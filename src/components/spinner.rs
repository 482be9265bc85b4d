//! Loading indicator.

use leptos::prelude::*;

#[component]
pub fn Spinner(#[prop(optional)] centered: bool) -> impl IntoView {
    let class = if centered { "spinner-wrap spinner-wrap--centered" } else { "spinner-wrap" };
    view! {
        <div class=class role="status">
            <span class="spinner"></span>
            <span class="sr-only">"Loading…"</span>
        </div>
    }
}
