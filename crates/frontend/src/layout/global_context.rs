use contracts::domain::common::Dataset;
use contracts::shared::edit_session::EditWorkflow;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use crate::shared::dialogs::BrowserDialogs;
use crate::shared::sheet_client::HttpSheetApi;
use crate::usecases::u503_edit_record;
use crate::usecases::u504_delete_record::{self, DeleteOutcome};

/// Query parameter mirroring the active tab.
pub const TAB_PARAM: &str = "tab";

/// Page-wide UI controller: active tab, per-dataset reload triggers and the
/// edit workflow behind the shared modal.
#[derive(Clone, Copy)]
pub struct HubContext {
    pub active: RwSignal<Dataset>,
    pub edit: RwSignal<EditWorkflow>,
    reloads: [RwSignal<u64>; 5],
}

impl HubContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Dataset::Family),
            edit: RwSignal::new(EditWorkflow::Idle),
            reloads: std::array::from_fn(|_| RwSignal::new(0)),
        }
    }

    /// Restore the active tab from `?tab=` and keep the URL in sync.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        self.active.set(tab_from_query(&search));

        let active = self.active;
        Effect::new(move |_| {
            let new_url = tab_query(active.get());
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn activate_tab(&self, dataset: Dataset) {
        log::debug!("activate_tab: {}", dataset);
        self.active.set(dataset);
    }

    pub fn is_active(&self, dataset: Dataset) -> bool {
        self.active.get() == dataset
    }

    /// Signal bumped whenever `dataset` must be read again.
    pub fn reload_signal(&self, dataset: Dataset) -> RwSignal<u64> {
        self.reloads[dataset.index()]
    }

    pub fn reload_dataset(&self, dataset: Dataset) {
        self.reload_signal(dataset).update(|n| *n += 1);
    }

    pub fn reload_all(&self) {
        for dataset in Dataset::ALL {
            self.reload_dataset(dataset);
        }
    }

    /// Edit clicked on a row.
    pub fn start_edit(&self, dataset: Dataset, id: String) {
        let edit = self.edit;
        wasm_bindgen_futures::spawn_local(async move {
            let api = HttpSheetApi::from_env();
            u503_edit_record::start_edit(&api, &BrowserDialogs, &edit, dataset, &id).await;
        });
    }

    /// Save clicked in the edit modal.
    pub fn save_edit(&self) {
        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let api = HttpSheetApi::from_env();
            if u503_edit_record::save_edit(&api, &BrowserDialogs, &this.edit).await {
                this.reload_all();
            }
        });
    }

    pub fn cancel_edit(&self) {
        self.edit.update(|wf| wf.cancel());
    }

    /// Delete clicked on a row.
    pub fn delete(&self, dataset: Dataset, id: String) {
        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let api = HttpSheetApi::from_env();
            let outcome =
                u504_delete_record::delete_record(&api, &BrowserDialogs, dataset, &id).await;
            if outcome == DeleteOutcome::Deleted {
                this.reload_all();
            }
        });
    }
}

impl Default for HubContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_hub() -> HubContext {
    use_context::<HubContext>().expect("HubContext not found in context")
}

/// Tab named by `?tab=`; unknown or missing values fall back to the first tab.
pub fn tab_from_query(search: &str) -> Dataset {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params
        .get(TAB_PARAM)
        .and_then(|key| Dataset::from_key(key))
        .unwrap_or(Dataset::Family)
}

pub fn tab_query(dataset: Dataset) -> String {
    let query = serde_qs::to_string(&HashMap::from([(TAB_PARAM, dataset.key())]))
        .unwrap_or_default();
    format!("?{}", query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_from_query() {
        assert_eq!(tab_from_query("?tab=finance"), Dataset::Finance);
        assert_eq!(tab_from_query("tab=reminders&x=1"), Dataset::Reminders);
        assert_eq!(tab_from_query("?tab=bogus"), Dataset::Family);
        assert_eq!(tab_from_query(""), Dataset::Family);
    }

    #[test]
    fn test_tab_query() {
        assert_eq!(tab_query(Dataset::Inventory), "?tab=inventory");
        assert_eq!(tab_from_query(&tab_query(Dataset::Tasks)), Dataset::Tasks);
    }
}
