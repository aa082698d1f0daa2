use contracts::domain::common::RowView;
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::use_hub;

/// One list row: escaped title/meta markup plus Edit and Delete.
#[component]
pub fn RecordRow(row: RowView) -> impl IntoView {
    let hub = use_hub();
    let dataset = row.dataset;
    let markup = row.markup();
    let row_id = row.id.clone();
    let edit_id = row.id.clone();
    let delete_id = row.id;

    view! {
        <li class="row" data-id=row_id>
            <div class="row__body" inner_html=markup></div>
            <div class="row__actions">
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| hub.start_edit(dataset, edit_id.clone())
                >
                    "Edit"
                </Button>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| hub.delete(dataset, delete_id.clone())
                >
                    "Delete"
                </Button>
            </div>
        </li>
    }
}
