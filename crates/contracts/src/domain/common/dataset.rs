use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Record, RowView};
use crate::domain::{
    a001_family_member, a002_task, a003_inventory_item, a004_finance_entry, a005_reminder,
};
use crate::shared::form::FieldSpec;

/// One of the five sheets shown by the hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dataset {
    Family,
    Tasks,
    Inventory,
    Finance,
    Reminders,
}

impl Dataset {
    /// Tab order.
    pub const ALL: [Dataset; 5] = [
        Dataset::Family,
        Dataset::Tasks,
        Dataset::Inventory,
        Dataset::Finance,
        Dataset::Reminders,
    ];

    /// Key used for tabs, element ids and the `?tab=` query parameter.
    pub fn key(&self) -> &'static str {
        match self {
            Dataset::Family => "family",
            Dataset::Tasks => "tasks",
            Dataset::Inventory => "inventory",
            Dataset::Finance => "finance",
            Dataset::Reminders => "reminders",
        }
    }

    /// Sheet name on the remote store.
    pub fn sheet_name(&self) -> &'static str {
        match self {
            Dataset::Family => "FamilyMembers",
            Dataset::Tasks => "Tasks",
            Dataset::Inventory => "Inventory",
            Dataset::Finance => "Finance",
            Dataset::Reminders => "Reminders",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Dataset::Family => "Family",
            Dataset::Tasks => "Tasks",
            Dataset::Inventory => "Inventory",
            Dataset::Finance => "Finance",
            Dataset::Reminders => "Reminders",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Dataset::Family => 0,
            Dataset::Tasks => 1,
            Dataset::Inventory => 2,
            Dataset::Finance => 3,
            Dataset::Reminders => 4,
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.key() == key)
    }

    pub fn from_sheet_name(sheet: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.sheet_name() == sheet)
    }

    /// Row generator of the dataset.
    pub fn render_row(&self, record: &Record) -> RowView {
        match self {
            Dataset::Family => a001_family_member::aggregate::row(record),
            Dataset::Tasks => a002_task::aggregate::row(record),
            Dataset::Inventory => a003_inventory_item::aggregate::row(record),
            Dataset::Finance => a004_finance_entry::aggregate::row(record),
            Dataset::Reminders => a005_reminder::aggregate::row(record),
        }
    }

    /// Fields of the creation form, in display order.
    pub fn create_fields(&self) -> &'static [FieldSpec] {
        match self {
            Dataset::Family => a001_family_member::aggregate::CREATE_FIELDS,
            Dataset::Tasks => a002_task::aggregate::CREATE_FIELDS,
            Dataset::Inventory => a003_inventory_item::aggregate::CREATE_FIELDS,
            Dataset::Finance => a004_finance_entry::aggregate::CREATE_FIELDS,
            Dataset::Reminders => a005_reminder::aggregate::CREATE_FIELDS,
        }
    }

    /// Values every new record of this dataset gets regardless of form input.
    pub fn apply_create_defaults(&self, record: &mut Record) {
        if let Dataset::Tasks = self {
            a002_task::aggregate::apply_create_defaults(record);
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
