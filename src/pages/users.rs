//! User administration: list, create, edit roles, delete. Admin only.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;

use super::report_error;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::dashboard_page::DashboardPage;
use crate::components::field::{TextField, error_for};
use crate::components::pagination::{Pagination, page_slice, use_page};
use crate::components::spinner::Spinner;
use crate::components::toast_host::use_toaster;
use crate::net::error::ApiError;
use crate::net::types::{RoleName, UpdateUserRoles, User};
use crate::util::auth::use_auth;
use crate::util::query::use_token_query;
use crate::util::validate::{self, AccountForm, FieldErrors};

/// Comma-separated role labels for the table.
#[must_use]
pub fn role_summary(user: &User) -> String {
    let labels: Vec<&str> = user
        .roles
        .iter()
        .map(|r| r.name)
        .filter(|name| *name != RoleName::Unknown)
        .map(RoleName::label)
        .collect();
    if labels.is_empty() { "No roles".to_owned() } else { labels.join(", ") }
}

/// Add or remove `role` from a role selection, keeping assignable order.
#[must_use]
pub fn toggle_role(selected: &[RoleName], role: RoleName, on: bool) -> Vec<RoleName> {
    RoleName::ASSIGNABLE
        .into_iter()
        .filter(|candidate| if *candidate == role { on } else { selected.contains(candidate) })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Dialog {
    Create,
    Roles(i64),
}

#[component]
fn RoleCheckboxes(selected: RwSignal<Vec<RoleName>>) -> impl IntoView {
    RoleName::ASSIGNABLE
        .into_iter()
        .map(|role| {
            view! {
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || selected.with(|s| s.contains(&role))
                        on:change=move |ev| {
                            let on = event_target_checked(&ev);
                            selected.update(|s| *s = toggle_role(s, role, on));
                        }
                    />
                    <span>{role.label()}</span>
                </label>
            }
        })
        .collect::<Vec<_>>()
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let auth = use_auth();
    let toaster = use_toaster();
    let query = use_token_query(|api, token| async move { crate::net::users::list(&api, &token).await });
    let page = use_page();

    let dialog = RwSignal::new(None::<Dialog>);
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let repeat_password = RwSignal::new(String::new());
    let roles = RwSignal::new(Vec::<RoleName>::new());
    let errors = RwSignal::new(FieldErrors::default());
    let deleting = RwSignal::new(None::<User>);
    let busy = RwSignal::new(false);

    let open_create = move |_| {
        for field in [username, email, password, repeat_password] {
            field.set(String::new());
        }
        roles.set(vec![RoleName::Employee]);
        errors.set(FieldErrors::default());
        dialog.set(Some(Dialog::Create));
    };

    let open_roles = move |user: &User| {
        roles.set(user.roles.iter().map(|r| r.name).filter(|n| *n != RoleName::Unknown).collect());
        username.set(user.username.clone());
        dialog.set(Some(Dialog::Roles(user.id)));
    };

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(token) = auth.token() else {
            return;
        };
        let form = AccountForm {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            repeat_password: repeat_password.get_untracked(),
        };
        let params = match validate::new_user(&form, &roles.get_untracked()) {
            Ok(params) => params,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        busy.set(true);
        let api = auth.api();
        leptos::task::spawn_local(async move {
            match crate::net::users::create(&api, &token, &params).await {
                Ok(user) => {
                    toaster.success(format!("Created {}", user.username));
                    dialog.set(None);
                    query.invalidate();
                }
                Err(ApiError::Conflict { .. }) => toaster.error("Username or email already in use"),
                Err(e) => report_error(toaster, "Could not create user", &e),
            }
            busy.set(false);
        });
    };

    let on_save_roles = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (Some(Dialog::Roles(user_id)), Some(token)) = (dialog.get_untracked(), auth.token()) else {
            return;
        };
        let body = UpdateUserRoles { user_id, roles: roles.get_untracked() };
        busy.set(true);
        let api = auth.api();
        leptos::task::spawn_local(async move {
            match crate::net::users::update_roles(&api, &token, &body).await {
                Ok(user) => {
                    toaster.success(format!("Updated roles of {}", user.username));
                    dialog.set(None);
                    query.invalidate();
                    if auth.user().is_some_and(|me| me.id == user_id) {
                        auth.refetch();
                    }
                }
                Err(e) => report_error(toaster, "Could not update roles", &e),
            }
            busy.set(false);
        });
    };

    let on_delete = Callback::new(move |()| {
        let (Some(user), Some(token)) = (deleting.get_untracked(), auth.token()) else {
            return;
        };
        busy.set(true);
        let api = auth.api();
        leptos::task::spawn_local(async move {
            match crate::net::users::delete(&api, &token, user.id).await {
                Ok(()) => {
                    toaster.success(format!("Deleted {}", user.username));
                    query.invalidate();
                }
                Err(ApiError::ForeignKeyConflict { .. }) => {
                    toaster.error("This user has recorded activity and cannot be deleted");
                }
                Err(e) => report_error(toaster, "Could not delete user", &e),
            }
            deleting.set(None);
            busy.set(false);
        });
    });

    let all_users = move || query.data().unwrap_or_default();
    let total = Signal::derive(move || all_users().len());
    let rows = move || {
        page_slice(&all_users(), page.get())
            .iter()
            .cloned()
            .map(|user| {
                let summary = role_summary(&user);
                let is_me = auth.user().is_some_and(|me| me.id == user.id);
                let for_roles = user.clone();
                let for_delete = user.clone();
                view! {
                    <tr>
                        <td>{user.username}</td>
                        <td>{user.email}</td>
                        <td>{summary}</td>
                        <td class="table__actions">
                            <button class="btn btn--small" on:click=move |_| open_roles(&for_roles)>"Roles"</button>
                            <button
                                class="btn btn--small btn--danger"
                                disabled=is_me
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
        <DashboardPage title="Users" description="Accounts that can sign in to the dashboard and their roles.">
            <div class="toolbar">
                <button class="btn btn--primary" on:click=open_create>"New user"</button>
            </div>
            <Show when=move || !query.is_loading() fallback=|| view! { <Spinner centered=true/> }>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Username"</th>
                            <th>"Email"</th>
                            <th>"Roles"</th>
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

            <Show when=move || dialog.get() == Some(Dialog::Create)>
                <div class="dialog-backdrop" on:click=move |_| dialog.set(None)>
                    <form class="dialog dialog--form" on:click=move |ev| ev.stop_propagation() on:submit=on_create>
                        <h2>"New user"</h2>
                        <TextField label="Username" value=username error=error_for(errors, "username")/>
                        <TextField label="Email" value=email error=error_for(errors, "email") input_type="email"/>
                        <TextField
                            label="Password"
                            value=password
                            error=error_for(errors, "password")
                            input_type="password"
                        />
                        <TextField
                            label="Repeat password"
                            value=repeat_password
                            error=error_for(errors, "repeat_password")
                            input_type="password"
                        />
                        <fieldset class="field">
                            <legend class="field__label">"Roles"</legend>
                            <RoleCheckboxes selected=roles/>
                        </fieldset>
                        <div class="dialog__actions">
                            <button class="btn" type="button" on:click=move |_| dialog.set(None)>"Cancel"</button>
                            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>"Create"</button>
                        </div>
                    </form>
                </div>
            </Show>

            <Show when=move || matches!(dialog.get(), Some(Dialog::Roles(_)))>
                <div class="dialog-backdrop" on:click=move |_| dialog.set(None)>
                    <form class="dialog dialog--form" on:click=move |ev| ev.stop_propagation() on:submit=on_save_roles>
                        <h2>{move || format!("Roles of {}", username.get())}</h2>
                        <RoleCheckboxes selected=roles/>
                        <div class="dialog__actions">
                            <button class="btn" type="button" on:click=move |_| dialog.set(None)>"Cancel"</button>
                            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>"Save"</button>
                        </div>
                    </form>
                </div>
            </Show>

            <Show when=move || deleting.get().is_some()>
                <ConfirmDialog
                    title="Delete user".to_owned()
                    message=deleting
                        .get_untracked()
                        .map(|u| format!("Delete the account \"{}\"?", u.username))
                        .unwrap_or_default()
                    busy=busy
                    on_confirm=on_delete
                    on_cancel=Callback::new(move |()| deleting.set(None))
                />
            </Show>
        </DashboardPage>
    }
}
