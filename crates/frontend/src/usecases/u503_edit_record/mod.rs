use contracts::domain::common::Dataset;
use contracts::shared::edit_session::{EditSession, EditWorkflow};
use contracts::shared::error::HubError;
use leptos::prelude::*;
use std::cell::RefCell;

use crate::shared::dialogs::Dialogs;
use crate::shared::sheet_client::SheetApi;

/// Holder of the edit workflow state. `None` once the holder is gone.
pub trait EditStore {
    fn with_workflow<R>(&self, f: impl FnOnce(&mut EditWorkflow) -> R) -> Option<R>;
}

impl EditStore for RwSignal<EditWorkflow> {
    fn with_workflow<R>(&self, f: impl FnOnce(&mut EditWorkflow) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl EditStore for RefCell<EditWorkflow> {
    fn with_workflow<R>(&self, f: impl FnOnce(&mut EditWorkflow) -> R) -> Option<R> {
        Some(f(&mut *self.borrow_mut()))
    }
}

/// Re-read the sheet and build the edit form for `id`.
pub async fn load_session<A>(api: &A, dataset: Dataset, id: &str) -> Result<EditSession, HubError>
where
    A: SheetApi + ?Sized,
{
    let response = api.read(dataset).await?;
    EditSession::open(dataset, id, &response)
}

/// Idle -> Loading -> Editing. A failed read or a missing record alerts and
/// leaves the modal closed. Returns whether the form was opened.
pub async fn start_edit<A, D, S>(api: &A, dialogs: &D, store: &S, dataset: Dataset, id: &str) -> bool
where
    A: SheetApi + ?Sized,
    D: Dialogs + ?Sized,
    S: EditStore + ?Sized,
{
    store.with_workflow(|wf| wf.begin(dataset, id));
    let result = load_session(api, dataset, id).await;
    match store.with_workflow(|wf| wf.finish_loading(dataset, id, result)) {
        Some(Ok(opened)) => opened,
        Some(Err(e)) => {
            log::warn!("edit {}/{}: {}", dataset, id, e);
            dialogs.alert(&e.to_string());
            false
        }
        None => false,
    }
}

/// Editing -> Saving -> Idle. Sends `update` with the identifier forced to
/// its original value; on failure alerts and returns to Editing. Returns
/// whether the update went through (the caller then reloads everything).
pub async fn save_edit<A, D, S>(api: &A, dialogs: &D, store: &S) -> bool
where
    A: SheetApi + ?Sized,
    D: Dialogs + ?Sized,
    S: EditStore + ?Sized,
{
    let Some(Some((dataset, id, record))) = store.with_workflow(|wf| wf.begin_save()) else {
        return false;
    };
    let result = api.update(dataset, &id, record).await;
    match store.with_workflow(|wf| wf.finish_save(result)) {
        Some(Ok(())) => true,
        Some(Err(e)) => {
            log::error!("update {}/{} failed: {}", dataset, id, e);
            dialogs.alert(&e.alert_message("Update failed"));
            false
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::{FakeDialogs, FakeSheetApi};
    use contracts::shared::sheet_api::Action;
    use futures::executor::block_on;
    use serde_json::json;

    fn ann_api() -> FakeSheetApi {
        FakeSheetApi::new().with_read(
            Dataset::Family,
            json!({"headers": ["ID", "Name"], "rows": [{"ID": "3", "Name": "Ann"}]}),
        )
    }

    #[test]
    fn test_edit_form_from_headers() {
        let api = ann_api();
        let dialogs = FakeDialogs::answering(true);
        let store = RefCell::new(EditWorkflow::Idle);

        assert!(block_on(start_edit(&api, &dialogs, &store, Dataset::Family, "3")));

        let wf = store.borrow();
        let session = wf.session().unwrap();
        let names: Vec<&str> = session.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["ID", "Name"]);
        assert_eq!(session.value("Name"), Some("Ann"));
        assert!(dialogs.alerts().is_empty());
    }

    #[test]
    fn test_missing_record_alerts_without_modal() {
        let api = ann_api();
        let dialogs = FakeDialogs::answering(true);
        let store = RefCell::new(EditWorkflow::Idle);

        assert!(!block_on(start_edit(&api, &dialogs, &store, Dataset::Family, "9")));

        assert!(!store.borrow().is_open());
        assert_eq!(dialogs.alerts(), vec!["Record 9 was not found in family"]);
    }

    #[test]
    fn test_failed_read_alerts() {
        let api = FakeSheetApi::new()
            .with_read_error(Dataset::Tasks, HubError::NetworkFailure("offline".into()));
        let dialogs = FakeDialogs::answering(true);
        let store = RefCell::new(EditWorkflow::Idle);

        assert!(!block_on(start_edit(&api, &dialogs, &store, Dataset::Tasks, "1")));
        assert_eq!(*store.borrow(), EditWorkflow::Idle);
        assert_eq!(dialogs.alerts(), vec!["Network error: offline"]);
    }

    #[test]
    fn test_save_sends_update_with_original_id() {
        let api = ann_api();
        let dialogs = FakeDialogs::answering(true);
        let store = RefCell::new(EditWorkflow::Idle);
        block_on(start_edit(&api, &dialogs, &store, Dataset::Family, "3"));

        if let Some(session) = store.borrow_mut().session_mut() {
            session.set_value("Name", "Anna");
            session.fields[0].value = "77".into();
        }

        assert!(block_on(save_edit(&api, &dialogs, &store)));
        assert_eq!(*store.borrow(), EditWorkflow::Idle);

        let call = api.last_call().unwrap();
        assert_eq!(call.action, Action::Update);
        assert_eq!(call.id.as_deref(), Some("3"));
        let record = call.row_object.unwrap();
        assert_eq!(record.text("ID"), "3");
        assert_eq!(record.text("Name"), "Anna");
    }

    #[test]
    fn test_rejected_save_keeps_form_open() {
        let api = ann_api().with_mutation(Ok(json!({"error": "Row is protected"})));
        let dialogs = FakeDialogs::answering(true);
        let store = RefCell::new(EditWorkflow::Idle);
        block_on(start_edit(&api, &dialogs, &store, Dataset::Family, "3"));

        assert!(!block_on(save_edit(&api, &dialogs, &store)));
        assert!(matches!(*store.borrow(), EditWorkflow::Editing(_)));
        assert_eq!(dialogs.alerts(), vec!["Row is protected"]);
    }

    #[test]
    fn test_save_without_session_does_nothing() {
        let api = ann_api();
        let dialogs = FakeDialogs::answering(true);
        let store = RefCell::new(EditWorkflow::Idle);

        assert!(!block_on(save_edit(&api, &dialogs, &store)));
        assert!(api.actions().is_empty());
    }
}
