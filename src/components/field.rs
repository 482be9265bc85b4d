//! Labelled form inputs with inline error text.

use leptos::prelude::*;

use crate::util::validate::FieldErrors;

/// Text-like input bound to a string signal.
#[component]
pub fn TextField(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                class=move || if error.get().is_some() { "field__input field__input--invalid" } else { "field__input" }
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <FieldError error=error/>
        </label>
    }
}

#[component]
pub fn FieldError(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <span class="field__error">{move || error.get().unwrap_or_default()}</span>
        </Show>
    }
}

/// Error text for `field` from a form's error signal.
pub fn error_for(errors: RwSignal<FieldErrors>, field: impl Into<String>) -> Signal<Option<String>> {
    let field = field.into();
    Signal::derive(move || errors.with(|e| e.get(&field).map(str::to_owned)))
}
