use gallery::FieldError;
use leptos::prelude::*;

const INPUT_STYLE: &str = "
    padding: 0.75rem;
    font-size: 1rem;
    border-radius: 4px;
    background-color: #161618;
    color: white;
";

pub fn border_for(error: Option<FieldError>) -> &'static str {
    if error.is_some() {
        "border: 2px solid #e53e3e;"
    } else {
        "border: 2px solid #3a3a42;"
    }
}

#[component]
pub fn FieldErrorMessage(error: Signal<Option<FieldError>>) -> impl IntoView {
    move || {
        error.get().map(|err| {
            view! { <span style="color: #e53e3e; font-size: 0.875rem;">{err.to_string()}</span> }
        })
    }
}

#[component]
pub fn TextInput(
    name: &'static str,
    placeholder: &'static str,
    value: Signal<String>,
    on_input: impl Fn(String) + 'static,
    error: Signal<Option<FieldError>>,
) -> impl IntoView {
    view! {
        <div style="display: flex; flex-direction: column; gap: 0.25rem;">
            <input
                type="text"
                name=name
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input(event_target_value(&ev))
                style=move || format!("{INPUT_STYLE}{}", border_for(error.get()))
            />
            <FieldErrorMessage error=error />
        </div>
    }
}
