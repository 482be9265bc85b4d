//! Create or edit an equipment model together with its units.
//!
//! DESIGN
//! ======
//! Unit rows hold one signal per input so typing in a row never re-renders
//! the list. On submit the rows are collected into an `EquipmentDraft` and
//! validated as a whole.
//!
//! New equipment is created with all of its units in one request. When
//! editing, existing units (including those flagged for deletion) go in the
//! update body, and rows added during the edit are posted to
//! `/equipment/units` afterwards.

#[cfg(test)]
#[path = "equipment_form_test.rs"]
mod equipment_form_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::report_error;
use crate::components::dashboard_page::DashboardPage;
use crate::components::field::{FieldError, TextField, error_for};
use crate::components::spinner::Spinner;
use crate::components::toast_host::use_toaster;
use crate::net::error::ApiError;
use crate::net::types::{EquipmentPayload, EquipmentState, NewUnit, Organization};
use crate::net::{equipment, equipment_types, makes, organizations};
use crate::util::auth::use_auth;
use crate::util::query::{TokenQuery, use_token_query};
use crate::util::validate::{self, EquipmentDraft, FieldErrors, UnitDraft, unit_field};

/// A unit to create through `/equipment/units`, tagged with the form row
/// it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingUnit {
    pub row: usize,
    pub unit: NewUnit,
}

/// Split an edit into the update body (persisted units only) and the units
/// to create separately. `row_keys[i]` is the form row of `payload.units[i]`.
#[must_use]
pub fn split_new_units(
    mut payload: EquipmentPayload,
    equipment_id: i64,
    row_keys: &[usize],
) -> (EquipmentPayload, Vec<PendingUnit>) {
    let (existing, added): (Vec<_>, Vec<_>) = payload
        .units
        .into_iter()
        .zip(row_keys.iter().copied())
        .partition(|(unit, _)| unit.equipment_unit_id.is_some());
    payload.units = existing.into_iter().map(|(unit, _)| unit).collect();
    let added = added
        .into_iter()
        .filter(|(unit, _)| !unit.deleted)
        .map(|(unit, row)| PendingUnit { row, unit: NewUnit { equipment_id, unit } })
        .collect();
    (payload, added)
}

fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

#[derive(Clone, Copy)]
struct UnitRow {
    key: usize,
    id: Option<i64>,
    serial_number: RwSignal<String>,
    state: RwSignal<EquipmentState>,
    acquired_at: RwSignal<String>,
    organization_id: RwSignal<Option<i64>>,
    location: RwSignal<String>,
    deleted: RwSignal<bool>,
}

impl UnitRow {
    fn new(key: usize, draft: UnitDraft) -> Self {
        Self {
            key,
            id: draft.equipment_unit_id,
            serial_number: RwSignal::new(draft.serial_number),
            state: RwSignal::new(draft.state),
            acquired_at: RwSignal::new(draft.acquired_at),
            organization_id: RwSignal::new(draft.organization_id),
            location: RwSignal::new(draft.location),
            deleted: RwSignal::new(draft.deleted),
        }
    }

    fn draft(self) -> UnitDraft {
        UnitDraft {
            equipment_unit_id: self.id,
            serial_number: self.serial_number.get_untracked(),
            state: self.state.get_untracked(),
            acquired_at: self.acquired_at.get_untracked(),
            organization_id: self.organization_id.get_untracked(),
            location: self.location.get_untracked(),
            deleted: self.deleted.get_untracked(),
        }
    }
}

#[component]
pub fn EquipmentFormPage() -> impl IntoView {
    let auth = use_auth();
    let toaster = use_toaster();
    let navigate = use_navigate();
    let params = use_params_map();
    let equipment_id = params.with_untracked(|p| p.get_str("id").and_then(parse_id));

    let existing = use_token_query(move |api, token| async move {
        match equipment_id {
            Some(id) => equipment::get(&api, &token, id).await.map(Some),
            None => Ok(None),
        }
    });
    let make_options = use_token_query(|api, token| async move { makes::list(&api, &token).await });
    let type_options = use_token_query(|api, token| async move { equipment_types::list(&api, &token).await });
    let org_options = use_token_query(|api, token| async move { organizations::list(&api, &token).await });

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let make_id = RwSignal::new(None::<i64>);
    let type_id = RwSignal::new(None::<i64>);
    let rows = RwSignal::new(Vec::<UnitRow>::new());
    let next_key = StoredValue::new(0_usize);
    let errors = RwSignal::new(FieldErrors::default());
    let busy = RwSignal::new(false);
    let prefilled = StoredValue::new(false);

    let push_row = move |draft: UnitDraft| {
        let key = next_key.get_value();
        next_key.set_value(key + 1);
        rows.update(|r| r.push(UnitRow::new(key, draft)));
    };

    Effect::new(move || {
        let Some(Some(record)) = existing.data() else {
            return;
        };
        if prefilled.get_value() {
            return;
        }
        prefilled.set_value(true);
        let draft = EquipmentDraft::from_equipment(&record);
        name.set(draft.name);
        description.set(draft.description);
        make_id.set(draft.make_id);
        type_id.set(draft.type_id);
        for unit in draft.units {
            push_row(unit);
        }
    });

    let add_row = move |_| {
        push_row(UnitDraft { acquired_at: validate::today(), ..UnitDraft::default() });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(token) = auth.token() else {
            return;
        };
        let current = rows.get_untracked();
        let row_keys: Vec<usize> = current.iter().map(|row| row.key).collect();
        let draft = EquipmentDraft {
            name: name.get_untracked(),
            description: description.get_untracked(),
            make_id: make_id.get_untracked(),
            type_id: type_id.get_untracked(),
            units: current.into_iter().map(UnitRow::draft).collect(),
        };
        let payload = match validate::equipment(&draft) {
            Ok(payload) => payload,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FieldErrors::default());
        busy.set(true);
        let api = auth.api();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = match equipment_id {
                None => equipment::create(&api, &token, &payload).await,
                Some(id) => {
                    let (body, added) = split_new_units(payload, id, &row_keys);
                    let mut result = equipment::update(&api, &token, id, &body).await;
                    let mut created = 0_usize;
                    for pending in &added {
                        if result.is_err() {
                            break;
                        }
                        result = equipment::add_unit(&api, &token, &pending.unit).await;
                        if result.is_ok() {
                            // Created server-side; a retry must not post it again.
                            rows.try_update(|r| r.retain(|row| row.key != pending.row));
                            created += 1;
                        }
                    }
                    if result.is_err() && created > 0 {
                        toaster.success(format!("{created} new unit(s) were saved before the error"));
                    }
                    result
                }
            };
            busy.set(false);
            match result {
                Ok(()) => {
                    toaster.success("Equipment saved");
                    navigate("/dashboard", NavigateOptions::default());
                }
                Err(ApiError::Conflict { .. }) => toaster.error("Name or serial number already in use"),
                Err(e) => report_error(toaster, "Could not save equipment", &e),
            }
        });
    };

    let title = if equipment_id.is_some() { "Edit equipment" } else { "New equipment" };
    let loading = move || equipment_id.is_some() && existing.is_loading();

    let make_select = move || {
        make_options
            .data()
            .unwrap_or_default()
            .into_iter()
            .map(|make| {
                let id = make.make_id;
                view! { <option value=id.to_string() selected=move || make_id.get() == Some(id)>{make.name}</option> }
            })
            .collect::<Vec<_>>()
    };
    let type_select = move || {
        type_options
            .data()
            .unwrap_or_default()
            .into_iter()
            .map(|kind| {
                let id = kind.equipment_type_id;
                view! { <option value=id.to_string() selected=move || type_id.get() == Some(id)>{kind.name}</option> }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <DashboardPage title=title description="Describe the equipment model and register its physical units.">
            <Show when=move || !loading() fallback=|| view! { <Spinner centered=true/> }>
                <form class="equipment-form" on:submit=on_submit.clone()>
                    <TextField label="Name" value=name error=error_for(errors, "name")/>
                    <TextField label="Description" value=description error=error_for(errors, "description")/>
                    <div class="equipment-form__row">
                        <label class="field">
                            <span class="field__label">"Make"</span>
                            <select class="field__input" on:change=move |ev| make_id.set(parse_id(&event_target_value(&ev)))>
                                <option value="" selected=move || make_id.get().is_none()>"Select a make"</option>
                                {make_select}
                            </select>
                            <FieldError error=error_for(errors, "make_id")/>
                        </label>
                        <label class="field">
                            <span class="field__label">"Type"</span>
                            <select class="field__input" on:change=move |ev| type_id.set(parse_id(&event_target_value(&ev)))>
                                <option value="" selected=move || type_id.get().is_none()>"Select a type"</option>
                                {type_select}
                            </select>
                            <FieldError error=error_for(errors, "type_id")/>
                        </label>
                    </div>

                    <h3>"Units"</h3>
                    <table class="table table--units">
                        <thead>
                            <tr>
                                <th>"Serial number"</th>
                                <th>"State"</th>
                                <th>"Acquired"</th>
                                <th>"Organization"</th>
                                <th>"Location"</th>
                                <th><span class="sr-only">"Remove"</span></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For each=move || rows.get() key=|row| row.key let:row>
                                <UnitRowView row=row rows=rows errors=errors org_options=org_options/>
                            </For>
                        </tbody>
                    </table>
                    <div class="toolbar">
                        <button class="btn" type="button" on:click=add_row>"Add unit"</button>
                    </div>

                    <div class="equipment-form__actions">
                        <A href="/dashboard" attr:class="btn">"Cancel"</A>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>"Save"</button>
                    </div>
                </form>
            </Show>
        </DashboardPage>
    }
}

#[component]
fn UnitRowView(
    row: UnitRow,
    rows: RwSignal<Vec<UnitRow>>,
    errors: RwSignal<FieldErrors>,
    org_options: TokenQuery<Vec<Organization>>,
) -> impl IntoView {
    let index = move || rows.with(|r| r.iter().position(|other| other.key == row.key).unwrap_or(0));
    let error = move |field: &'static str| {
        Signal::derive(move || errors.with(|e| e.get(&unit_field(index(), field)).map(str::to_owned)))
    };
    let remove = move |_| {
        if row.id.is_some() {
            row.deleted.update(|d| *d = !*d);
        } else {
            rows.update(|r| r.retain(|other| other.key != row.key));
        }
    };
    let org_select = move || {
        org_options
            .data()
            .unwrap_or_default()
            .into_iter()
            .map(|org| {
                let id = org.organization_id;
                view! { <option value=id.to_string() selected=move || row.organization_id.get() == Some(id)>{org.name}</option> }
            })
            .collect::<Vec<_>>()
    };
    let state_select = EquipmentState::ALL
        .into_iter()
        .map(|state| {
            view! {
                <option value=state.as_str() selected=move || row.state.get() == state>{state.label()}</option>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <tr class=move || if row.deleted.get() { "unit-row unit-row--deleted" } else { "unit-row" }>
            <td>
                <input
                    class="field__input"
                    inputmode="numeric"
                    prop:value=move || row.serial_number.get()
                    on:input=move |ev| row.serial_number.set(event_target_value(&ev))
                />
                <FieldError error=error("serial_number")/>
            </td>
            <td>
                <select
                    class="field__input"
                    on:change=move |ev| {
                        if let Some(state) = EquipmentState::parse(&event_target_value(&ev)) {
                            row.state.set(state);
                        }
                    }
                >
                    {state_select}
                </select>
            </td>
            <td>
                <input
                    class="field__input"
                    type="date"
                    prop:value=move || row.acquired_at.get()
                    on:input=move |ev| row.acquired_at.set(event_target_value(&ev))
                />
                <FieldError error=error("acquired_at")/>
            </td>
            <td>
                <select
                    class="field__input"
                    on:change=move |ev| row.organization_id.set(parse_id(&event_target_value(&ev)))
                >
                    <option value="" selected=move || row.organization_id.get().is_none()>"Select"</option>
                    {org_select}
                </select>
                <FieldError error=error("organization_id")/>
            </td>
            <td>
                <input
                    class="field__input"
                    prop:value=move || row.location.get()
                    on:input=move |ev| row.location.set(event_target_value(&ev))
                />
                <FieldError error=error("location")/>
            </td>
            <td>
                <button class="btn btn--small" type="button" on:click=remove>
                    {move || match (row.id, row.deleted.get()) {
                        (None, _) => "Remove",
                        (Some(_), false) => "Delete",
                        (Some(_), true) => "Keep",
                    }}
                </button>
            </td>
        </tr>
    }
}
