use contracts::domain::common::Dataset;

use crate::shared::dialogs::Dialogs;
use crate::shared::sheet_client::SheetApi;

pub const CONFIRM_DELETE: &str = "Delete this item?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user dismissed the confirmation; nothing was sent.
    Declined,
    Deleted,
    Failed,
}

/// Confirm, then send `delete` for `id`. Failures are alerted.
pub async fn delete_record<A, D>(api: &A, dialogs: &D, dataset: Dataset, id: &str) -> DeleteOutcome
where
    A: SheetApi + ?Sized,
    D: Dialogs + ?Sized,
{
    if !dialogs.confirm(CONFIRM_DELETE) {
        return DeleteOutcome::Declined;
    }
    match api.delete(dataset, id).await {
        Ok(()) => {
            log::info!("deleted {}/{}", dataset, id);
            DeleteOutcome::Deleted
        }
        Err(e) => {
            log::error!("delete {}/{} failed: {}", dataset, id, e);
            dialogs.alert(&e.alert_message("Delete failed"));
            DeleteOutcome::Failed
        }
    }
}
