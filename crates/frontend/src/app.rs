use crate::layout::global_context::HubContext;
use crate::layout::tabs::TabBar;
use crate::shared::components::dataset_pane::DatasetPane;
use crate::shared::components::edit_modal::EditModal;
use contracts::domain::common::Dataset;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // One controller for the whole page: active tab, reloads, edit session.
    let hub = HubContext::new();
    provide_context(hub);
    hub.init_router_integration();

    view! {
        <div class="hub">
            <header class="hub__header">
                <h1 class="hub__title">"Family Hub"</h1>
            </header>
            <TabBar />
            <main class="hub__content">
                {Dataset::ALL
                    .into_iter()
                    .map(|dataset| view! { <DatasetPane dataset=dataset /> })
                    .collect_view()}
            </main>
            <EditModal />
        </div>
    }
}
