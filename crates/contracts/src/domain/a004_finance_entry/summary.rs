//! Income / expense totals shown above the finance list.

use serde_json::Value;

use super::aggregate::{AMOUNT, TYPE};
use crate::domain::common::Record;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FinanceSummary {
    pub income: f64,
    pub expense: f64,
}

impl FinanceSummary {
    /// Sum `Amount` over all rows. Rows typed "income" (any case) count as
    /// income, everything else as expense; unusable amounts count as zero.
    pub fn from_records(rows: &[Record]) -> Self {
        rows.iter().fold(Self::default(), |mut acc, record| {
            let amount = AMOUNT
                .iter()
                .find_map(|field| record.get(field))
                .map(parse_amount)
                .unwrap_or(0.0);
            if record.first_of(TYPE).trim().eq_ignore_ascii_case("income") {
                acc.income += amount;
            } else {
                acc.expense += amount;
            }
            acc
        })
    }

    pub fn balance(&self) -> f64 {
        self.income - self.expense
    }

    pub fn income_text(&self) -> String {
        format_amount(self.income)
    }

    pub fn expense_text(&self) -> String {
        format_amount(self.expense)
    }

    pub fn balance_text(&self) -> String {
        format_amount(self.balance())
    }
}

/// Numeric value of an `Amount` cell; anything non-numeric is 0.
pub fn parse_amount(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    if parsed.is_finite() {
        parsed
    } else {
        0.0
    }
}

/// Two decimal places, without a sign on zero.
pub fn format_amount(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        return "0.00".to_string();
    }
    format!("{:.2}", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows(value: serde_json::Value) -> Vec<Record> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_summary_skips_bad_amounts() {
        let summary = FinanceSummary::from_records(&rows(json!([
            {"Amount": 100, "Type": "Income"},
            {"Amount": 40, "Type": "expense"},
            {"Amount": "bad", "Type": "Income"}
        ])));
        assert_eq!(summary.income_text(), "100.00");
        assert_eq!(summary.expense_text(), "40.00");
        assert_eq!(summary.balance_text(), "60.00");
    }

    #[test]
    fn test_untyped_rows_are_expenses() {
        let summary = FinanceSummary::from_records(&rows(json!([
            {"Amount": " 12.5 "},
            {"Amount": "7.25", "Type": " INCOME "},
            {"Type": "Income"}
        ])));
        assert_eq!(summary.income, 7.25);
        assert_eq!(summary.expense, 12.5);
        assert_eq!(summary.balance_text(), "-5.25");
    }

    #[test]
    fn test_empty_summary() {
        let summary = FinanceSummary::from_records(&[]);
        assert_eq!(summary.income_text(), "0.00");
        assert_eq!(summary.balance_text(), "0.00");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(&json!(3)), 3.0);
        assert_eq!(parse_amount(&json!("1e2")), 100.0);
        assert_eq!(parse_amount(&json!("NaN")), 0.0);
        assert_eq!(parse_amount(&json!(null)), 0.0);
        assert_eq!(parse_amount(&json!(true)), 0.0);
    }
}
