use contracts::domain::a004_finance_entry::summary::FinanceSummary;
use contracts::domain::common::Dataset;
use contracts::shared::error::HubError;
use contracts::shared::list_view::{render_list, ListEntry};

use crate::shared::dialogs::Dialogs;
use crate::shared::sheet_client::SheetApi;

/// What a dataset pane shows after a read.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDataset {
    pub entries: Vec<ListEntry>,
    /// Only for the finance sheet.
    pub summary: Option<FinanceSummary>,
}

/// Read a sheet and render it with the dataset's row generator.
/// A failed read is alerted before the error is handed back to the pane.
pub async fn load_dataset<A, D>(
    api: &A,
    dialogs: &D,
    dataset: Dataset,
) -> Result<LoadedDataset, HubError>
where
    A: SheetApi + ?Sized,
    D: Dialogs + ?Sized,
{
    let response = match api.read(dataset).await {
        Ok(response) => response,
        Err(e) => {
            log::error!("load {} failed: {}", dataset, e);
            dialogs.alert(&e.to_string());
            return Err(e);
        }
    };
    log::debug!("loaded {}: {} rows", dataset, response.rows.len());

    let entries = render_list(&response, |record| dataset.render_row(record));
    let summary =
        (dataset == Dataset::Finance).then(|| FinanceSummary::from_records(&response.rows));

    Ok(LoadedDataset { entries, summary })
}
