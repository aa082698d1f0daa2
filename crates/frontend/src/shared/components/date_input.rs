use leptos::prelude::*;

/// Native date picker bound to a `YYYY-MM-DD` string signal.
/// The browser shows the date in the user's locale format.
#[component]
pub fn DateInput(value: RwSignal<String>, #[prop(optional, into)] name: String) -> impl IntoView {
    view! {
        <input
            type="date"
            class="date-input"
            name=name
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}
