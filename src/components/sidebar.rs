//! Dashboard navigation: role-filtered links, user badge, theme toggle and
//! sign-out.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::components::A;

use super::profile_dialog::ProfileDialog;
use crate::util::auth::use_auth;
use crate::util::theme::{self, Theme};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

const EMPLOYEE_LINKS: [NavLink; 4] = [
    NavLink { href: "/dashboard", label: "Inventory" },
    NavLink { href: "/dashboard/types", label: "Equipment types" },
    NavLink { href: "/dashboard/makes", label: "Makes" },
    NavLink { href: "/dashboard/activities", label: "Activity" },
];

const ADMIN_LINKS: [NavLink; 2] = [
    NavLink { href: "/dashboard/users", label: "Users" },
    NavLink { href: "/dashboard/organizations", label: "Organizations" },
];

/// Links visible to a user with the given role flags.
#[must_use]
pub fn nav_links(is_admin: bool, is_employee: bool) -> Vec<NavLink> {
    let mut links = Vec::new();
    if is_employee {
        links.extend(EMPLOYEE_LINKS);
    }
    if is_admin {
        links.extend(ADMIN_LINKS);
    }
    links
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = use_auth();
    let theme = expect_context::<RwSignal<Theme>>();
    let show_profile = RwSignal::new(false);

    let links = move || {
        nav_links(auth.is_admin(), auth.is_employee())
            .into_iter()
            .map(|link| {
                view! {
                    <A href=link.href attr:class="sidebar__link" exact=true>
                        {link.label}
                    </A>
                }
            })
            .collect::<Vec<_>>()
    };
    let username = move || auth.user().map(|u| u.username).unwrap_or_default();
    let initial = move || auth.user().map(|u| u.initial()).unwrap_or_default();

    let on_toggle_theme = move |_| {
        let next = theme.get_untracked().toggle(theme::system_prefers_dark());
        theme.set(next);
        theme::save(next);
    };

    view! {
        <aside class="sidebar" aria-label="Sidebar">
            <h1 class="sidebar__brand">"Formotex"</h1>
            <nav class="sidebar__links">{links}</nav>
            <div class="sidebar__footer">
                <button class="sidebar__user" title="Edit profile" on:click=move |_| show_profile.set(true)>
                    <span class="avatar">{initial}</span>
                    <span>{username}</span>
                </button>
                <button class="btn sidebar__theme" on:click=on_toggle_theme>
                    {move || if theme.get().resolve(theme::system_prefers_dark()) == Theme::Dark { "Light mode" } else { "Dark mode" }}
                </button>
                <button class="btn btn--secondary sidebar__signout" on:click=move |_| auth.sign_out()>
                    "Sign out"
                </button>
            </div>
            <Show when=move || show_profile.get()>
                <ProfileDialog on_close=Callback::new(move |()| show_profile.set(false))/>
            </Show>
        </aside>
    }
}
