//! Dashboard shell: sidebar plus the routed child page.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::sidebar::Sidebar;

#[component]
pub fn DashboardLayout() -> impl IntoView {
    view! {
        <div class="dashboard-layout">
            <Sidebar/>
            <div class="dashboard-layout__content">
                <Outlet/>
            </div>
        </div>
    }
}
