//! Labeled text input used by the login and registration forms.

#[cfg(test)]
#[path = "auth_input_test.rs"]
mod auth_input_test;

use leptos::attr::any_attribute::{AnyAttribute, IntoAnyAttribute};
use leptos::attr::{autocapitalize, spellcheck};
use leptos::prelude::*;

/// Element id for an input: the explicit `id` if given, else one derived from
/// the label so the `<label for=..>` always points at its own input.
pub fn input_id(label: &str, id: Option<&str>) -> String {
    if let Some(id) = id.map(str::trim).filter(|s| !s.is_empty()) {
        return id.to_owned();
    }
    let mut slug = String::from("auth-");
    for c in label.trim().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_owned()
}

/// Extra attributes for email fields: no auto-capitalisation or spellcheck.
pub fn email_attrs() -> Vec<AnyAttribute> {
    vec![autocapitalize("none").into_any_attr(), spellcheck("false").into_any_attr()]
}

/// Label plus input. Native attributes are forwarded to the `<input>` as given;
/// no validation happens here.
///
/// Anything without a dedicated prop (`minlength`, `pattern`, `inputmode`,
/// `data-*`) goes through `attrs` and lands on the `<input>`, not the wrapper:
///
/// ```ignore
/// <AuthInput label="Password" value=password attrs=vec![minlength("8").into_any_attr()]/>
/// ```
#[component]
pub fn AuthInput(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(into, optional)] id: Option<String>,
    #[prop(into, optional)] name: Option<String>,
    #[prop(into, default = "text".to_owned())] input_type: String,
    #[prop(into, optional)] placeholder: Option<String>,
    #[prop(into, optional)] autocomplete: Option<String>,
    #[prop(optional)] required: bool,
    #[prop(into, default = false.into())] disabled: Signal<bool>,
    #[prop(optional)] attrs: Vec<AnyAttribute>,
) -> impl IntoView {
    let input_id = input_id(&label, id.as_deref());

    view! {
        <div class="auth-input">
            <label for=input_id.clone() class="auth-input__label">
                {label}
            </label>
            <div class="auth-input__field">
                <input
                    id=input_id
                    class="auth-input__control"
                    name=name
                    type=input_type
                    placeholder=placeholder
                    autocomplete=autocomplete
                    required=required
                    disabled=move || disabled.get()
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                    {..attrs}
                />
            </div>
        </div>
    }
}
