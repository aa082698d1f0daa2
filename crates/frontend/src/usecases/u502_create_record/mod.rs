use contracts::domain::common::Dataset;
use contracts::shared::error::HubError;
use contracts::shared::form::{marshal_create, FormValue};

use crate::shared::sheet_client::SheetApi;

/// Marshal a submitted creation form and send it with `create`.
///
/// Nothing is sent when a required field is blank.
pub async fn submit_create<A>(
    api: &A,
    dataset: Dataset,
    entries: Vec<(String, FormValue)>,
) -> Result<(), HubError>
where
    A: SheetApi + ?Sized,
{
    let record = marshal_create(dataset, entries)?;
    api.create(dataset, record).await.map_err(|e| {
        log::error!("create in {} failed: {}", dataset, e);
        e
    })
}
