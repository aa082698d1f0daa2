//! Tab bar: one button per dataset, exactly one active.

use contracts::domain::common::Dataset;
use leptos::prelude::*;

use crate::layout::global_context::use_hub;

#[component]
pub fn TabBar() -> impl IntoView {
    let hub = use_hub();

    view! {
        <nav class="tabs" role="tablist">
            {Dataset::ALL
                .into_iter()
                .map(|dataset| {
                    view! {
                        <button
                            class="tabs__button"
                            class:active=move || hub.is_active(dataset)
                            role="tab"
                            data-tab=dataset.key()
                            on:click=move |_| hub.activate_tab(dataset)
                        >
                            {dataset.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
