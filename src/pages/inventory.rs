//! Equipment inventory: models with their make, type and unit counts.

#[cfg(test)]
#[path = "inventory_test.rs"]
mod inventory_test;

use leptos::prelude::*;
use leptos_router::components::A;

use super::report_error;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::dashboard_page::DashboardPage;
use crate::components::pagination::{Pagination, page_slice, use_page};
use crate::components::spinner::Spinner;
use crate::components::toast_host::use_toaster;
use crate::net::error::ApiError;
use crate::net::types::{Equipment, EquipmentState};
use crate::util::auth::use_auth;
use crate::util::query::use_token_query;

/// "3 units (1 needs repair)" style summary of an equipment's units.
#[must_use]
pub fn unit_summary(equipment: &Equipment) -> String {
    let total = equipment.units.len();
    let broken = equipment
        .units
        .iter()
        .filter(|u| u.state == EquipmentState::NeedsRepair)
        .count();
    let noun = if total == 1 { "unit" } else { "units" };
    if broken == 0 {
        format!("{total} {noun}")
    } else {
        format!("{total} {noun} ({broken} {})", EquipmentState::NeedsRepair.label().to_lowercase())
    }
}

#[component]
pub fn InventoryPage() -> impl IntoView {
    let auth = use_auth();
    let toaster = use_toaster();
    let query = use_token_query(|api, token| async move { crate::net::equipment::list(&api, &token).await });
    let page = use_page();
    let deleting = RwSignal::new(None::<Equipment>);
    let busy = RwSignal::new(false);

    let on_delete = Callback::new(move |()| {
        let (Some(equipment), Some(token)) = (deleting.get_untracked(), auth.token()) else {
            return;
        };
        busy.set(true);
        let api = auth.api();
        leptos::task::spawn_local(async move {
            match crate::net::equipment::delete(&api, &token, equipment.equipment_id).await {
                Ok(()) => {
                    toaster.success(format!("Deleted {}", equipment.name));
                    query.invalidate();
                }
                Err(ApiError::ForeignKeyConflict { .. }) => {
                    toaster.error("This equipment has recorded activity and cannot be deleted");
                }
                Err(e) => report_error(toaster, "Could not delete equipment", &e),
            }
            deleting.set(None);
            busy.set(false);
        });
    });

    let all = move || query.data().unwrap_or_default();
    let total = Signal::derive(move || all().len());
    let rows = move || {
        page_slice(&all(), page.get())
            .iter()
            .cloned()
            .map(|equipment| {
                let summary = unit_summary(&equipment);
                let make = equipment.make_name().to_owned();
                let kind = equipment.type_name().to_owned();
                let edit_href = format!("/dashboard/form/{}", equipment.equipment_id);
                let for_delete = equipment.clone();
                view! {
                    <tr>
                        <td>{equipment.name}</td>
                        <td class="table__description">{equipment.description}</td>
                        <td>{make}</td>
                        <td>{kind}</td>
                        <td>{summary}</td>
                        <td class="table__actions">
                            <A href=edit_href attr:class="btn btn--small">"Edit"</A>
                            <button
                                class="btn btn--small btn--danger"
                                on:click=move |_| deleting.set(Some(for_delete.clone()))
                            >
                                "Delete"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <DashboardPage
            title="Equipment inventory"
            description="Registered equipment models. Open one to manage its units."
        >
            <div class="toolbar">
                <A href="/dashboard/form" attr:class="btn btn--primary">"New equipment"</A>
            </div>
            <Show when=move || !query.is_loading() fallback=|| view! { <Spinner centered=true/> }>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Description"</th>
                            <th>"Make"</th>
                            <th>"Type"</th>
                            <th>"Units"</th>
                            <th><span class="sr-only">"Actions"</span></th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
                <Pagination total=total/>
                <Show when=move || query.error().is_some()>
                    <p class="error-text">{move || query.error().map(|e| e.user_message()).unwrap_or_default()}</p>
                </Show>
            </Show>

            <Show when=move || deleting.get().is_some()>
                <ConfirmDialog
                    title="Delete equipment".to_owned()
                    message=deleting
                        .get_untracked()
                        .map(|e| format!("Delete \"{}\" and all of its units?", e.name))
                        .unwrap_or_default()
                    busy=busy
                    on_confirm=on_delete
                    on_cancel=Callback::new(move |()| deleting.set(None))
                />
            </Show>
        </DashboardPage>
    }
}
