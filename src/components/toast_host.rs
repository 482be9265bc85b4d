//! Toast notifications.
//!
//! [`Toaster`] is provided by `App`; pages call `success`/`error` after a
//! mutation, and the API client's network notice routes through `error`.
//! Toasts dismiss themselves after [`TOAST_TTL_MS`] or on click.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

pub const TOAST_TTL_MS: u64 = 4000;

#[derive(Clone, Copy)]
pub struct Toaster {
    state: RwSignal<ToastState>,
}

impl Toaster {
    pub fn success(self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn dismiss(self, id: u64) {
        self.state.try_update(|t| t.dismiss(id));
    }

    fn push(self, kind: ToastKind, message: String) {
        let Some(id) = self.state.try_update(|t| t.push(kind, message)) else {
            return;
        };
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_TTL_MS)).await;
            self.dismiss(id);
        });
        #[cfg(not(feature = "csr"))]
        let _ = id;
    }
}

pub fn provide_toaster() -> Toaster {
    let toaster = Toaster { state: RwSignal::new(ToastState::default()) };
    provide_context(toaster);
    toaster
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = use_toaster();
    let items = move || toaster.state.with(|t| t.items.clone());

    view! {
        <div class="toast-host" aria-live="polite">
            <For each=items key=|toast| toast.id let:toast>
                {
                    let id = toast.id;
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Error => "toast toast--error",
                    };
                    view! {
                        <div class=class role="status" on:click=move |_| toaster.dismiss(id)>
                            {toast.message}
                        </div>
                    }
                }
            </For>
        </div>
    }
}
