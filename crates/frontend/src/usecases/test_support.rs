use async_trait::async_trait;
use contracts::domain::common::Dataset;
use contracts::shared::error::HubError;
use contracts::shared::sheet_api::{Action, SheetRequest};
use serde_json::{json, Value};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::shared::dialogs::Dialogs;
use crate::shared::sheet_client::SheetApi;

/// In-memory data service: canned read answers, one canned mutation answer,
/// and a log of every request.
pub struct FakeSheetApi {
    pub reads: HashMap<Dataset, Result<Value, HubError>>,
    pub mutation: Result<Value, HubError>,
    pub calls: RefCell<Vec<SheetRequest>>,
}

impl FakeSheetApi {
    pub fn new() -> Self {
        Self {
            reads: HashMap::new(),
            mutation: Ok(json!({"success": true})),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_read(mut self, dataset: Dataset, answer: Value) -> Self {
        self.reads.insert(dataset, Ok(answer));
        self
    }

    pub fn with_read_error(mut self, dataset: Dataset, error: HubError) -> Self {
        self.reads.insert(dataset, Err(error));
        self
    }

    pub fn with_mutation(mut self, answer: Result<Value, HubError>) -> Self {
        self.mutation = answer;
        self
    }

    pub fn actions(&self) -> Vec<Action> {
        self.calls.borrow().iter().map(|r| r.action).collect()
    }

    pub fn last_call(&self) -> Option<SheetRequest> {
        self.calls.borrow().last().cloned()
    }
}

#[async_trait(?Send)]
impl SheetApi for FakeSheetApi {
    async fn call(&self, request: SheetRequest) -> Result<Value, HubError> {
        self.calls.borrow_mut().push(request.clone());
        match request.action {
            Action::Read => {
                let dataset = request.dataset().expect("known sheet");
                self.reads
                    .get(&dataset)
                    .cloned()
                    .unwrap_or_else(|| Ok(json!({"headers": [], "rows": []})))
            }
            _ => self.mutation.clone(),
        }
    }
}

/// Scripted answers for confirm, recorded alerts.
pub struct FakeDialogs {
    pub answer: bool,
    pub confirms: Cell<usize>,
    pub alerts: RefCell<Vec<String>>,
}

impl FakeDialogs {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            confirms: Cell::new(0),
            alerts: RefCell::new(Vec::new()),
        }
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl Dialogs for FakeDialogs {
    fn confirm(&self, _message: &str) -> bool {
        self.confirms.set(self.confirms.get() + 1);
        self.answer
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}
