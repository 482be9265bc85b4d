//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Context is provided in dependency order: toasts first (the network
//! notice writes to them), then the API client, then the session that uses
//! the client. Everything under `/dashboard` sits behind [`PrivateRoute`];
//! the sign-in and sign-up pages sit behind [`PublicRoute`].

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::route_guard::{PrivateRoute, PublicRoute};
use crate::components::toast_host::{ToastHost, provide_toaster};
use crate::config::{ApiConfig, NOTICE_COOLDOWN_MS};
use crate::net::client::ApiClient;
use crate::pages::activities::ActivitiesPage;
use crate::pages::catalog::{CatalogKind, CatalogPage};
use crate::pages::equipment_form::EquipmentFormPage;
use crate::pages::forbidden::ForbiddenPage;
use crate::pages::inventory::InventoryPage;
use crate::pages::layout::DashboardLayout;
use crate::pages::login::LoginPage;
use crate::pages::register::RegisterPage;
use crate::pages::users::UsersPage;
use crate::util::auth::provide_auth;
use crate::util::notice::NetworkNotice;
use crate::util::theme;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let toaster = provide_toaster();

    let theme = RwSignal::new(theme::read_preference());
    provide_context(theme);
    Effect::new(move || theme::apply(theme.get()));

    let config = ApiConfig::from_build_env();
    log::info!("inventory api at {}", config.base_url);
    let api = ApiClient::new(&config)
        .with_notice(NetworkNotice::new(NOTICE_COOLDOWN_MS, move |message| toaster.error(message)));
    provide_auth(api);

    view! {
        <Title text="Formotex"/>

        <Router>
            <div class="app">
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=StaticSegment("") view=|| view! { <PublicRoute><LoginPage/></PublicRoute> }/>
                    <Route
                        path=(StaticSegment("auth"), StaticSegment("login"))
                        view=|| view! { <PublicRoute><LoginPage/></PublicRoute> }
                    />
                    <Route
                        path=(StaticSegment("auth"), StaticSegment("register"))
                        view=|| view! { <PublicRoute><RegisterPage/></PublicRoute> }
                    />
                    <Route path=StaticSegment("forbidden") view=ForbiddenPage/>
                    <ParentRoute
                        path=StaticSegment("dashboard")
                        view=|| view! { <PrivateRoute><DashboardLayout/></PrivateRoute> }
                    >
                        <Route path=StaticSegment("") view=InventoryPage/>
                        <Route
                            path=StaticSegment("types")
                            view=|| view! { <CatalogPage kind=CatalogKind::EquipmentTypes/> }
                        />
                        <Route path=StaticSegment("makes") view=|| view! { <CatalogPage kind=CatalogKind::Makes/> }/>
                        <Route path=StaticSegment("activities") view=ActivitiesPage/>
                        <Route path=StaticSegment("form") view=EquipmentFormPage/>
                        <Route path=(StaticSegment("form"), ParamSegment("id")) view=EquipmentFormPage/>
                        <Route
                            path=StaticSegment("users")
                            view=|| view! { <PrivateRoute needs_admin=true><UsersPage/></PrivateRoute> }
                        />
                        <Route
                            path=StaticSegment("organizations")
                            view=|| {
                                view! {
                                    <PrivateRoute needs_admin=true>
                                        <CatalogPage kind=CatalogKind::Organizations/>
                                    </PrivateRoute>
                                }
                            }
                        />
                    </ParentRoute>
                </Routes>
            </div>
        </Router>
        <ToastHost/>
    }
}
