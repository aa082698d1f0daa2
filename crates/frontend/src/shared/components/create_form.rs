use contracts::domain::common::Dataset;
use contracts::shared::form::{FieldSpec, FormValue, InputKind};
use leptos::ev;
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::use_hub;
use crate::shared::components::date_input::DateInput;
use crate::shared::dialogs::{BrowserDialogs, Dialogs};
use crate::shared::sheet_client::HttpSheetApi;
use crate::usecases::u502_create_record::submit_create;

/// State of one form control.
#[derive(Clone, Copy)]
enum Control {
    Text(RwSignal<String>),
    Checked(RwSignal<bool>),
}

impl Control {
    fn for_field(spec: &FieldSpec) -> Self {
        match spec.kind {
            InputKind::Checkbox => Control::Checked(RwSignal::new(false)),
            _ => Control::Text(RwSignal::new(spec.default_value())),
        }
    }

    fn value(&self) -> FormValue {
        match self {
            Control::Text(value) => FormValue::Text(value.get_untracked()),
            Control::Checked(checked) => FormValue::Checked(checked.get_untracked()),
        }
    }

    fn reset(&self, spec: &FieldSpec) {
        match self {
            Control::Text(value) => value.set(spec.default_value()),
            Control::Checked(checked) => checked.set(false),
        }
    }
}

fn render_control(spec: FieldSpec, control: Control) -> AnyView {
    match (spec.kind, control) {
        (_, Control::Checked(checked)) => view! {
            <Checkbox checked=checked label=spec.label/>
        }
        .into_any(),
        (InputKind::Date, Control::Text(value)) => view! {
            <DateInput value=value name=spec.name/>
        }
        .into_any(),
        (InputKind::Number, Control::Text(value)) => view! {
            <Input value=value input_type=InputType::Number placeholder=spec.label/>
        }
        .into_any(),
        (InputKind::Select(options), Control::Text(value)) => view! {
            <Select value=value>
                {options
                    .iter()
                    .map(|option| view! { <option value=*option>{*option}</option> })
                    .collect_view()}
            </Select>
        }
        .into_any(),
        (_, Control::Text(value)) => view! {
            <Input value=value placeholder=spec.label/>
        }
        .into_any(),
    }
}

/// Creation form of a dataset pane.
#[component]
pub fn CreateForm(dataset: Dataset) -> impl IntoView {
    let hub = use_hub();
    let controls: Vec<(FieldSpec, Control)> = dataset
        .create_fields()
        .iter()
        .map(|spec| (*spec, Control::for_field(spec)))
        .collect();
    let controls = StoredValue::new(controls);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let entries: Vec<(String, FormValue)> = controls.with_value(|cs| {
            cs.iter()
                .map(|(spec, control)| (spec.name.to_string(), control.value()))
                .collect()
        });

        submitting.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let api = HttpSheetApi::from_env();
            match submit_create(&api, dataset, entries).await {
                Ok(()) => {
                    controls.with_value(|cs| {
                        cs.iter().for_each(|(spec, control)| control.reset(spec))
                    });
                    hub.reload_dataset(dataset);
                }
                Err(e) => BrowserDialogs.alert(&e.alert_message("Create failed")),
            }
            submitting.set(false);
        });
    };

    let fields = controls.with_value(|cs| {
        cs.iter()
            .map(|(spec, control)| {
                let label = spec.kind != InputKind::Checkbox;
                let required = spec.required;
                let text = spec.label;
                view! {
                    <div class="form-group">
                        {label.then(|| view! {
                            <Label>{text}{required.then_some(" *")}</Label>
                        })}
                        {render_control(*spec, *control)}
                    </div>
                }
            })
            .collect_view()
    });

    view! {
        <form class="create-form" data-dataset=dataset.key() on:submit=on_submit>
            {fields}
            <button
                type="submit"
                class="btn btn-primary"
                prop:disabled=move || submitting.get()
            >
                "Add"
            </button>
        </form>
    }
}
