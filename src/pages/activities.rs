//! Activity log plus the maintenance and delivery registration dialogs.
//!
//! DESIGN
//! ======
//! Movements are read only here; they are created as a side effect of the
//! unit actions (`/equipment/units/:id/maintenance` and `/delivery`). After
//! a registration succeeds the movement list is invalidated so the new
//! entry shows up.
//!
//! The unit picker searches by serial number. The search text is read
//! untracked by the query so typing does not fire a request per keystroke;
//! Enter or the search button invalidates the query instead.

#[cfg(test)]
#[path = "activities_test.rs"]
mod activities_test;

use leptos::prelude::*;

use super::report_error;
use crate::components::dashboard_page::DashboardPage;
use crate::components::field::{FieldError, TextField, error_for};
use crate::components::pagination::{Pagination, page_slice, use_page};
use crate::components::spinner::Spinner;
use crate::components::toast_host::use_toaster;
use crate::net::error::ApiError;
use crate::net::types::{DeliveryRequest, EquipmentUnit, MaintenanceRequest, Movement, MovementDetails};
use crate::net::{equipment, movements, organizations};
use crate::util::auth::use_auth;
use crate::util::query::use_token_query;
use crate::util::validate::{self, FieldErrors};

/// One line of the activity table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityRow {
    pub id: i64,
    pub author: String,
    pub unit: String,
    pub kind: &'static str,
    pub details: String,
}

impl From<&Movement> for ActivityRow {
    fn from(movement: &Movement) -> Self {
        Self {
            id: movement.movement_id,
            author: movement.author.as_ref().map_or_else(|| "Unknown".to_owned(), |u| u.username.clone()),
            unit: movement
                .unit
                .as_ref()
                .map(|u| u.serial_number.to_string())
                .or_else(|| movement.equipment_unit_id.map(|id| format!("unit {id}")))
                .unwrap_or_default(),
            kind: movement.kind().label(),
            details: describe(&movement.details()),
        }
    }
}

fn date_part(raw: &str) -> &str {
    raw.get(..10).unwrap_or(raw)
}

/// Human-readable summary of a movement's details.
#[must_use]
pub fn describe(details: &MovementDetails) -> String {
    match details {
        MovementDetails::Maintenance { started_at, ended_at } => {
            format!("From {} to {}", date_part(started_at), date_part(ended_at))
        }
        MovementDetails::Delivery { organization } => format!("Delivered to {}", organization.name),
        MovementDetails::None => String::new(),
    }
}

/// Option text for the unit picker.
#[must_use]
pub fn unit_label(unit: &EquipmentUnit) -> String {
    let name = unit.equipment.as_ref().map_or("Unnamed equipment", |e| e.name.as_str());
    format!("#{} {} ({})", unit.serial_number, name, unit.state.label())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistrationKind {
    Maintenance,
    Delivery,
}

impl RegistrationKind {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Maintenance => "Register maintenance",
            Self::Delivery => "Register delivery",
        }
    }
}

/// Raw dialog inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub unit_id: Option<i64>,
    pub started_at: String,
    pub ended_at: String,
    pub organization_id: Option<i64>,
}

/// A validated unit action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Registration {
    Maintenance { unit_id: i64, request: MaintenanceRequest },
    Delivery { unit_id: i64, request: DeliveryRequest },
}

/// # Errors
///
/// Field errors keyed by `unit`, `started_at`, `ended_at` and
/// `organization_id`.
pub fn validate_registration(kind: RegistrationKind, form: &RegistrationForm) -> Result<Registration, FieldErrors> {
    let window = match kind {
        RegistrationKind::Maintenance => Some(validate::maintenance_window(&form.started_at, &form.ended_at)),
        RegistrationKind::Delivery => None,
    };
    let mut errors = match &window {
        Some(Err(e)) => e.clone(),
        _ => FieldErrors::default(),
    };
    if form.unit_id.is_none() {
        errors.insert("unit", "Select a unit");
    }
    if kind == RegistrationKind::Delivery && form.organization_id.is_none() {
        errors.insert("organization_id", "Organization is required");
    }

    match (form.unit_id, window, form.organization_id) {
        (Some(unit_id), Some(Ok((started_at, ended_at))), _) => {
            Ok(Registration::Maintenance { unit_id, request: MaintenanceRequest { started_at, ended_at } })
        }
        (Some(unit_id), None, Some(organization_id)) => {
            Ok(Registration::Delivery { unit_id, request: DeliveryRequest { organization_id } })
        }
        _ => Err(errors),
    }
}

fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

#[component]
pub fn ActivitiesPage() -> impl IntoView {
    let history = use_token_query(|api, token| async move { movements::list(&api, &token).await });
    let page = use_page();
    let registering = RwSignal::new(None::<RegistrationKind>);

    let all_rows = move || history.data().unwrap_or_default().iter().map(ActivityRow::from).collect::<Vec<_>>();
    let total = Signal::derive(move || history.data().map_or(0, |rows| rows.len()));
    let visible = move || {
        page_slice(&all_rows(), page.get())
            .iter()
            .cloned()
            .map(|row| {
                view! {
                    <tr>
                        <td>{row.author}</td>
                        <td>{row.unit}</td>
                        <td>{row.kind}</td>
                        <td>{row.details}</td>
                    </tr>
                }
            })
            .collect::<Vec<_>>()
    };

    let on_close = Callback::new(move |()| registering.set(None));
    let on_done = Callback::new(move |()| {
        registering.set(None);
        history.invalidate();
    });

    view! {
        <DashboardPage title="Activities" description="Transport, delivery and maintenance history of every unit.">
            <div class="toolbar">
                <button class="btn btn--primary" on:click=move |_| registering.set(Some(RegistrationKind::Maintenance))>
                    "Register maintenance"
                </button>
                <button class="btn btn--primary" on:click=move |_| registering.set(Some(RegistrationKind::Delivery))>
                    "Register delivery"
                </button>
            </div>
            <Show when=move || !history.is_loading() fallback=|| view! { <Spinner centered=true/> }>
                <Show
                    when=move || history.data().is_some() || history.error().is_none()
                    fallback=move || {
                        view! {
                            <p class="error-text">
                                {move || history.error().map(|e| e.user_message()).unwrap_or_default()}
                            </p>
                        }
                    }
                >
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Author"</th>
                                <th>"Unit"</th>
                                <th>"Type"</th>
                                <th>"Details"</th>
                            </tr>
                        </thead>
                        <tbody>{visible}</tbody>
                    </table>
                    <Pagination total=total/>
                </Show>
            </Show>

            {move || {
                registering
                    .get()
                    .map(|kind| view! { <RegisterDialog kind=kind on_close=on_close on_done=on_done/> })
            }}
        </DashboardPage>
    }
}

#[component]
fn RegisterDialog(kind: RegistrationKind, on_close: Callback<()>, on_done: Callback<()>) -> impl IntoView {
    let auth = use_auth();
    let toaster = use_toaster();

    let search = RwSignal::new(String::new());
    let units = use_token_query(move |api, token| async move {
        let serial = search.get_untracked();
        equipment::list_units(&api, &token, Some(&serial)).await
    });
    let orgs = use_token_query(|api, token| async move { organizations::list(&api, &token).await });

    let unit_id = RwSignal::new(None::<i64>);
    let started_at = RwSignal::new(validate::today());
    let ended_at = RwSignal::new(validate::today());
    let organization_id = RwSignal::new(None::<i64>);
    let errors = RwSignal::new(FieldErrors::default());
    let busy = RwSignal::new(false);

    let on_search_key = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            units.invalidate();
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(token) = auth.token() else {
            return;
        };
        let form = RegistrationForm {
            unit_id: unit_id.get_untracked(),
            started_at: started_at.get_untracked(),
            ended_at: ended_at.get_untracked(),
            organization_id: organization_id.get_untracked(),
        };
        let registration = match validate_registration(kind, &form) {
            Ok(registration) => registration,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FieldErrors::default());
        busy.set(true);
        let api = auth.api();
        leptos::task::spawn_local(async move {
            let result = match &registration {
                Registration::Maintenance { unit_id, request } => {
                    equipment::start_maintenance(&api, &token, *unit_id, request).await
                }
                Registration::Delivery { unit_id, request } => equipment::deliver(&api, &token, *unit_id, request).await,
            };
            busy.set(false);
            match result {
                Ok(()) => {
                    toaster.success(match kind {
                        RegistrationKind::Maintenance => "Maintenance registered",
                        RegistrationKind::Delivery => "Delivery registered",
                    });
                    on_done.run(());
                }
                Err(ApiError::NotFound) => toaster.error("That unit no longer exists"),
                Err(e) => report_error(toaster, "Could not register the activity", &e),
            }
        });
    };

    let unit_options = move || {
        units
            .data()
            .unwrap_or_default()
            .into_iter()
            .map(|unit| {
                let id = unit.equipment_unit_id;
                view! {
                    <option value=id.to_string() selected=move || unit_id.get() == Some(id)>{unit_label(&unit)}</option>
                }
            })
            .collect::<Vec<_>>()
    };
    let org_options = move || {
        orgs.data()
            .unwrap_or_default()
            .into_iter()
            .map(|org| {
                let id = org.organization_id;
                view! {
                    <option value=id.to_string() selected=move || organization_id.get() == Some(id)>{org.name}</option>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <form class="dialog dialog--form" on:click=move |ev| ev.stop_propagation() on:submit=on_submit>
                <h2>{kind.title()}</h2>

                <label class="field">
                    <span class="field__label">"Search by serial number"</span>
                    <div class="field__inline">
                        <input
                            class="field__input"
                            inputmode="numeric"
                            prop:value=move || search.get()
                            on:input=move |ev| search.set(event_target_value(&ev))
                            on:keydown=on_search_key
                        />
                        <button class="btn" type="button" on:click=move |_| units.invalidate()>"Search"</button>
                    </div>
                </label>
                <label class="field">
                    <span class="field__label">"Unit"</span>
                    <select class="field__input" on:change=move |ev| unit_id.set(parse_id(&event_target_value(&ev)))>
                        <option value="" selected=move || unit_id.get().is_none()>
                            {move || if units.is_fetching() { "Searching..." } else { "Select a unit" }}
                        </option>
                        {unit_options}
                    </select>
                    <FieldError error=error_for(errors, "unit")/>
                </label>

                {match kind {
                    RegistrationKind::Maintenance => view! {
                        <TextField label="Start date" input_type="date" value=started_at error=error_for(errors, "started_at")/>
                        <TextField label="End date" input_type="date" value=ended_at error=error_for(errors, "ended_at")/>
                    }
                    .into_any(),
                    RegistrationKind::Delivery => view! {
                        <label class="field">
                            <span class="field__label">"Organization"</span>
                            <select
                                class="field__input"
                                on:change=move |ev| organization_id.set(parse_id(&event_target_value(&ev)))
                            >
                                <option value="" selected=move || organization_id.get().is_none()>"Select an organization"</option>
                                {org_options}
                            </select>
                            <FieldError error=error_for(errors, "organization_id")/>
                        </label>
                    }
                    .into_any(),
                }}

                <div class="dialog__actions">
                    <button class="btn" type="button" on:click=move |_| on_close.run(())>"Cancel"</button>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>"Register"</button>
                </div>
            </form>
        </div>
    }
}
