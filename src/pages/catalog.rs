//! CRUD table shared by equipment types, makes and organizations.
//!
//! DESIGN
//! ======
//! All three resources are a name plus one free-text field (description or
//! location). [`CatalogKind`] maps that shape onto the right service module
//! so one page component serves all three routes.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use leptos::prelude::*;

use super::report_error;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::dashboard_page::DashboardPage;
use crate::components::field::{TextField, error_for};
use crate::components::pagination::{Pagination, page_slice, use_page};
use crate::components::spinner::Spinner;
use crate::components::toast_host::use_toaster;
use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::{CatalogPayload, EquipmentType, Make, Organization, OrganizationPayload};
use crate::net::{equipment_types, makes, organizations};
use crate::util::auth::use_auth;
use crate::util::query::use_token_query;
use crate::util::validate::{self, FieldErrors};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogKind {
    EquipmentTypes,
    Makes,
    Organizations,
}

/// A catalog record reduced to what the table shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogRow {
    pub id: i64,
    pub name: String,
    pub detail: String,
}

impl From<Make> for CatalogRow {
    fn from(make: Make) -> Self {
        Self { id: make.make_id, name: make.name, detail: make.description }
    }
}

impl From<EquipmentType> for CatalogRow {
    fn from(kind: EquipmentType) -> Self {
        Self { id: kind.equipment_type_id, name: kind.name, detail: kind.description }
    }
}

impl From<Organization> for CatalogRow {
    fn from(org: Organization) -> Self {
        Self { id: org.organization_id, name: org.name, detail: org.location }
    }
}

fn rows<T: Into<CatalogRow>>(items: Vec<T>) -> Vec<CatalogRow> {
    items.into_iter().map(Into::into).collect()
}

impl CatalogKind {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::EquipmentTypes => "Equipment types",
            Self::Makes => "Makes",
            Self::Organizations => "Organizations",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::EquipmentTypes => "Categories used to classify equipment.",
            Self::Makes => "Manufacturers of the equipment in the inventory.",
            Self::Organizations => "Client organizations that units are assigned and delivered to.",
        }
    }

    #[must_use]
    pub fn singular(self) -> &'static str {
        match self {
            Self::EquipmentTypes => "equipment type",
            Self::Makes => "make",
            Self::Organizations => "organization",
        }
    }

    /// Label of the second column.
    #[must_use]
    pub fn detail_label(self) -> &'static str {
        match self {
            Self::Organizations => "Location",
            Self::EquipmentTypes | Self::Makes => "Description",
        }
    }

    /// Form field name of the second column.
    #[must_use]
    pub fn detail_field(self) -> &'static str {
        match self {
            Self::Organizations => "location",
            Self::EquipmentTypes | Self::Makes => "description",
        }
    }

    #[must_use]
    pub fn in_use_message(self) -> String {
        format!("This {} is still used by other records and cannot be deleted", self.singular())
    }

    /// Check the form and build the request body.
    ///
    /// # Errors
    ///
    /// Field errors keyed by `name` and [`CatalogKind::detail_field`].
    pub fn validate(self, name: &str, detail: &str) -> Result<CatalogInput, FieldErrors> {
        match self {
            Self::Organizations => validate::organization(name, detail).map(CatalogInput::Organization),
            Self::EquipmentTypes | Self::Makes => validate::catalog_entry(name, detail).map(CatalogInput::Entry),
        }
    }

    /// All records of this kind, reduced to table rows.
    ///
    /// # Errors
    ///
    /// Propagates the classified request failure.
    pub async fn list(self, api: &ApiClient, token: &str) -> Result<Vec<CatalogRow>, ApiError> {
        match self {
            Self::EquipmentTypes => equipment_types::list(api, token).await.map(rows),
            Self::Makes => makes::list(api, token).await.map(rows),
            Self::Organizations => organizations::list(api, token).await.map(rows),
        }
    }

    /// Create (`id` is `None`) or update a record.
    ///
    /// # Errors
    ///
    /// [`ApiError::Conflict`] for duplicate names.
    pub async fn save(self, api: &ApiClient, token: &str, id: Option<i64>, input: &CatalogInput) -> Result<(), ApiError> {
        match (self, input) {
            (Self::Organizations, CatalogInput::Organization(body)) => match id {
                Some(id) => organizations::update(api, token, id, body).await,
                None => organizations::create(api, token, body).await.map(drop),
            },
            (Self::EquipmentTypes, CatalogInput::Entry(body)) => match id {
                Some(id) => equipment_types::update(api, token, id, body).await,
                None => equipment_types::create(api, token, body).await,
            },
            (Self::Makes, CatalogInput::Entry(body)) => match id {
                Some(id) => makes::update(api, token, id, body).await,
                None => makes::create(api, token, body).await,
            },
            _ => Err(ApiError::Serialization { message: format!("wrong form body for {}", self.singular()) }),
        }
    }

    /// # Errors
    ///
    /// [`ApiError::ForeignKeyConflict`] while the record is referenced.
    pub async fn delete(self, api: &ApiClient, token: &str, id: i64) -> Result<(), ApiError> {
        match self {
            Self::EquipmentTypes => equipment_types::delete(api, token, id).await,
            Self::Makes => makes::delete(api, token, id).await,
            Self::Organizations => organizations::delete(api, token, id).await,
        }
    }
}

/// Validated form body for [`CatalogKind::save`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogInput {
    Entry(CatalogPayload),
    Organization(OrganizationPayload),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Editing {
    New,
    Existing(i64),
}

#[component]
pub fn CatalogPage(kind: CatalogKind) -> impl IntoView {
    let auth = use_auth();
    let toaster = use_toaster();
    let query = use_token_query(move |api, token| async move { kind.list(&api, &token).await });
    let page = use_page();

    let editing = RwSignal::new(None::<Editing>);
    let name = RwSignal::new(String::new());
    let detail = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let deleting = RwSignal::new(None::<CatalogRow>);
    let busy = RwSignal::new(false);

    let open_editor = move |target: Editing, row: Option<&CatalogRow>| {
        name.set(row.map(|r| r.name.clone()).unwrap_or_default());
        detail.set(row.map(|r| r.detail.clone()).unwrap_or_default());
        errors.set(FieldErrors::default());
        editing.set(Some(target));
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (Some(target), Some(token)) = (editing.get_untracked(), auth.token()) else {
            return;
        };
        let input = match kind.validate(&name.get_untracked(), &detail.get_untracked()) {
            Ok(input) => input,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        busy.set(true);
        let api = auth.api();
        let id = match target {
            Editing::New => None,
            Editing::Existing(id) => Some(id),
        };
        leptos::task::spawn_local(async move {
            match kind.save(&api, &token, id, &input).await {
                Ok(()) => {
                    toaster.success(format!("Saved {}", kind.singular()));
                    editing.set(None);
                    query.invalidate();
                }
                Err(ApiError::Conflict { .. }) => toaster.error("That name is already in use"),
                Err(e) => report_error(toaster, "Could not save", &e),
            }
            busy.set(false);
        });
    };

    let on_delete = Callback::new(move |()| {
        let (Some(row), Some(token)) = (deleting.get_untracked(), auth.token()) else {
            return;
        };
        busy.set(true);
        let api = auth.api();
        leptos::task::spawn_local(async move {
            match kind.delete(&api, &token, row.id).await {
                Ok(()) => {
                    toaster.success(format!("Deleted {}", row.name));
                    query.invalidate();
                }
                Err(ApiError::ForeignKeyConflict { .. }) => toaster.error(kind.in_use_message()),
                Err(e) => report_error(toaster, "Could not delete", &e),
            }
            deleting.set(None);
            busy.set(false);
        });
    });

    let all_rows = move || query.data().unwrap_or_default();
    let total = Signal::derive(move || all_rows().len());
    let visible = move || {
        page_slice(&all_rows(), page.get())
            .iter()
            .cloned()
            .map(|row| {
                let edit_row = row.clone();
                let delete_row = row.clone();
                view! {
                    <tr>
                        <td>{row.name}</td>
                        <td>{row.detail}</td>
                        <td class="table__actions">
                            <button
                                class="btn btn--small"
                                on:click=move |_| open_editor(Editing::Existing(edit_row.id), Some(&edit_row))
                            >
                                "Edit"
                            </button>
                            <button
                                class="btn btn--small btn--danger"
                                on:click=move |_| deleting.set(Some(delete_row.clone()))
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
        <DashboardPage title=kind.title() description=kind.description()>
            <div class="toolbar">
                <button class="btn btn--primary" on:click=move |_| open_editor(Editing::New, None)>
                    {format!("New {}", kind.singular())}
                </button>
            </div>
            <Show when=move || !query.is_loading() fallback=|| view! { <Spinner centered=true/> }>
                <Show when=move || query.data().is_some() || query.error().is_none()>
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>{kind.detail_label()}</th>
                                <th><span class="sr-only">"Actions"</span></th>
                            </tr>
                        </thead>
                        <tbody>{visible}</tbody>
                    </table>
                    <Pagination total=total/>
                </Show>
                <Show when=move || query.data().is_none() && query.error().is_some()>
                    <p class="error-text">
                        {move || query.error().map(|e| e.user_message()).unwrap_or_default()}
                    </p>
                </Show>
            </Show>

            <Show when=move || editing.get().is_some()>
                <div class="dialog-backdrop" on:click=move |_| editing.set(None)>
                    <form class="dialog dialog--form" on:click=move |ev| ev.stop_propagation() on:submit=on_save>
                        <h2>
                            {move || match editing.get() {
                                Some(Editing::Existing(_)) => format!("Edit {}", kind.singular()),
                                _ => format!("New {}", kind.singular()),
                            }}
                        </h2>
                        <TextField label="Name" value=name error=error_for(errors, "name")/>
                        <TextField
                            label=kind.detail_label()
                            value=detail
                            error=error_for(errors, kind.detail_field())
                        />
                        <div class="dialog__actions">
                            <button class="btn" type="button" on:click=move |_| editing.set(None)>"Cancel"</button>
                            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>"Save"</button>
                        </div>
                    </form>
                </div>
            </Show>

            <Show when=move || deleting.get().is_some()>
                <ConfirmDialog
                    title=format!("Delete {}", kind.singular())
                    message=deleting.get_untracked().map(|r| format!("Delete \"{}\"? This cannot be undone.", r.name)).unwrap_or_default()
                    busy=busy
                    on_confirm=on_delete
                    on_cancel=Callback::new(move |()| deleting.set(None))
                />
            </Show>
        </DashboardPage>
    }
}
