//! Form controls shared by the eleven entity forms.
//!
//! Every form keeps its draft in one `RwSignal`; the [`bind!`](crate::bind)
//! macro produces the (getter, setter) pair a control needs from a draft
//! field.

use leptos::prelude::*;

/// (value, on_input) for one string field of a form draft signal.
#[macro_export]
macro_rules! bind {
    ($form:expr, $field:ident) => {{
        let form = $form;
        (
            ::leptos::prelude::Signal::derive(move || form.with(|f| f.$field.clone())),
            ::leptos::prelude::Callback::new(move |v| form.update(|f| f.$field = v)),
        )
    }};
}

#[component]
pub fn TextField(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] required: bool,
    #[prop(optional)] step: Option<&'static str>,
    #[prop(optional)] maxlength: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="mb-3">
            <label class="form-label">{label}</label>
            <input
                type=input_type
                class="form-control"
                step=step
                maxlength=maxlength
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                required=required
            />
        </div>
    }
}

#[component]
pub fn SelectField(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    placeholder: &'static str,
    /// (option value, visible label) pairs
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="mb-3">
            <label class="form-label">{label}</label>
            <select
                class="form-control"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
                required=required
            >
                <option value="">{placeholder}</option>
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|(val, text)| view! { <option value=val.clone()>{text}</option> })
                        .collect_view()
                }}
            </select>
        </div>
    }
}

/// Fixed option lists (client types, states, roles) where value and label
/// coincide.
pub fn static_options(items: &'static [&'static str]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|s| (s.to_string(), s.to_string()))
        .collect()
}
