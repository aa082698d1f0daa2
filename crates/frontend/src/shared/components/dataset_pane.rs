use contracts::domain::a004_finance_entry::summary::FinanceSummary;
use contracts::domain::common::Dataset;
use contracts::shared::list_view::ListEntry;
use leptos::prelude::*;

use crate::domain::a004_finance_entry::ui::FinanceSummaryStrip;
use crate::layout::global_context::use_hub;
use crate::shared::components::create_form::CreateForm;
use crate::shared::components::record_row::RecordRow;
use crate::shared::dialogs::BrowserDialogs;
use crate::shared::sheet_client::HttpSheetApi;
use crate::usecases::u501_load_dataset::load_dataset;

/// Tab pane of one dataset: creation form, list and (finance only) totals.
/// Re-reads the sheet whenever the dataset's reload signal changes.
#[component]
pub fn DatasetPane(dataset: Dataset) -> impl IntoView {
    let hub = use_hub();
    let (entries, set_entries) = signal::<Vec<ListEntry>>(Vec::new());
    let (summary, set_summary) = signal::<Option<FinanceSummary>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    Effect::new(move |_| {
        let generation = hub.reload_signal(dataset).get();
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let api = HttpSheetApi::from_env();
            let result = load_dataset(&api, &BrowserDialogs, dataset).await;
            // a newer reload is already on its way
            if hub.reload_signal(dataset).get_untracked() != generation {
                return;
            }
            match result {
                Ok(loaded) => {
                    set_entries.set(loaded.entries);
                    set_summary.set(loaded.summary);
                    set_error.set(None);
                }
                Err(e) => {
                    set_entries.set(Vec::new());
                    set_summary.set(None);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    let list = move || {
        if let Some(message) = error.get() {
            return view! { <li class="row row--error">{message}</li> }.into_any();
        }
        entries
            .get()
            .into_iter()
            .map(|entry| match entry {
                ListEntry::Row(row) => view! { <RecordRow row=row/> }.into_any(),
                placeholder => view! {
                    <li class="row row--placeholder" inner_html=placeholder.markup()></li>
                }
                .into_any(),
            })
            .collect_view()
            .into_any()
    };

    view! {
        <section
            class="tab-pane"
            class:active=move || hub.is_active(dataset)
            id=dataset.key()
            aria-busy=move || loading.get().to_string()
        >
            <h2 class="tab-pane__title">{dataset.label()}</h2>
            <CreateForm dataset=dataset/>
            {(dataset == Dataset::Finance).then(|| view! { <FinanceSummaryStrip summary=summary/> })}
            <ul class="list" id=format!("{}-list", dataset.key())>{list}</ul>
        </section>
    }
}
