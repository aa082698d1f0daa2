use crate::domain::common::{Dataset, Record, RowView};
use crate::shared::form::{FieldSpec, InputKind, CHECKED};

pub const ITEM: &[&str] = &["Item", "Name"];
pub const QUANTITY: &[&str] = &["Quantity", "Qty"];
pub const NEEDED: &[&str] = &["Needed"];
pub const TO_SELL_GIVE: &[&str] = &["ToSellGive", "ToSell"];

pub const CREATE_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("Item", "Item").required(),
    FieldSpec::new("Quantity", "Quantity", InputKind::Number),
    FieldSpec::text("Location", "Location"),
    FieldSpec::new("Needed", "Needed", InputKind::Checkbox),
    FieldSpec::new("ToSellGive", "To sell / give", InputKind::Checkbox),
];

/// Title: item. Meta: `Qty: n`, plus "Needed" / "To Sell" when flagged.
pub fn row(record: &Record) -> RowView {
    let mut meta = vec![format!("Qty: {}", record.first_of(QUANTITY))];
    if record.first_of(NEEDED) == CHECKED {
        meta.push("Needed".to_string());
    }
    if record.first_of(TO_SELL_GIVE) == CHECKED {
        meta.push("To Sell".to_string());
    }
    RowView::new(Dataset::Inventory, record.id(), record.first_of(ITEM), &meta)
}
