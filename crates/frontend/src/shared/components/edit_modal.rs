//! Shared edit modal. Its form is built from the session held in
//! `HubContext::edit`; values are copied back into the session on Save.

use contracts::shared::edit_session::FieldDescriptor;
use contracts::shared::form::InputKind;
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::use_hub;
use crate::shared::components::date_input::DateInput;
use crate::shared::modal::Modal;

#[component]
pub fn EditModal() -> impl IntoView {
    let hub = use_hub();

    view! {
        <Show when=move || hub.edit.with(|wf| wf.is_open())>
            <EditForm/>
        </Show>
    }
}

fn render_field(field: &FieldDescriptor, value: RwSignal<String>) -> AnyView {
    if field.read_only {
        return view! {
            <input
                type="text"
                class="edit-field__readonly"
                readonly=true
                prop:value=move || value.get()
            />
        }
        .into_any();
    }
    match field.kind {
        InputKind::Date => view! { <DateInput value=value name=field.name.clone()/> }.into_any(),
        InputKind::Number => {
            view! { <Input value=value input_type=InputType::Number/> }.into_any()
        }
        _ => view! { <Input value=value/> }.into_any(),
    }
}

#[component]
fn EditForm() -> impl IntoView {
    let hub = use_hub();
    let Some(session) = hub.edit.with_untracked(|wf| wf.session().cloned()) else {
        return ().into_any();
    };

    let values: Vec<(FieldDescriptor, RwSignal<String>)> = session
        .fields
        .iter()
        .map(|field| (field.clone(), RwSignal::new(field.input_value())))
        .collect();
    let values = StoredValue::new(values);
    let saving = Signal::derive(move || hub.edit.with(|wf| wf.is_saving()));

    let handle_save = move |_| {
        values.with_value(|fields| {
            hub.edit.update(|wf| {
                if let Some(session) = wf.session_mut() {
                    for (field, value) in fields {
                        session.apply_input(&field.name, &value.get_untracked());
                    }
                }
            })
        });
        hub.save_edit();
    };
    let on_close = Callback::new(move |_: ()| hub.cancel_edit());

    let title = format!("Edit {} #{}", session.dataset.label(), session.id);
    let rows = values.with_value(|fields| {
        fields
            .iter()
            .map(|(field, value)| {
                let name = field.name.clone();
                view! {
                    <div class="form-group">
                        <Label>{name}</Label>
                        {render_field(field, *value)}
                    </div>
                }
            })
            .collect_view()
    });

    view! {
        <Modal title=title on_close=on_close>
            <div class="edit-form" data-dataset=session.dataset.key()>{rows}</div>
            <div class="modal-footer">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=handle_save
                    disabled=saving
                >
                    "Save"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| hub.cancel_edit()
                    disabled=saving
                >
                    "Cancel"
                </Button>
            </div>
        </Modal>
    }
    .into_any()
}
