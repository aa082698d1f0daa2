use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier spellings tolerated by every sheet, in lookup order.
pub const ID_ALIASES: &[&str] = &["ID", "Id", "id"];

/// One sheet row: field name -> scalar value.
///
/// The service is schema-less, so a record is kept as the raw JSON object it
/// arrived as. Field order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Build a record from `(field, value)` pairs, keeping their order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Display text of a field; missing fields read as "".
    pub fn text(&self, field: &str) -> String {
        self.0.get(field).map(scalar_text).unwrap_or_default()
    }

    /// First non-empty value among `aliases`, else "".
    pub fn first_of(&self, aliases: &[&str]) -> String {
        aliases
            .iter()
            .map(|alias| self.text(alias))
            .find(|value| !value.is_empty())
            .unwrap_or_default()
    }

    /// Identifier of the row as a string ("" when the row has none).
    pub fn id(&self) -> String {
        self.first_of(ID_ALIASES)
    }

    /// Name of the field holding the identifier, if the row has one.
    pub fn id_field(&self) -> Option<&str> {
        ID_ALIASES
            .iter()
            .copied()
            .find(|alias| self.0.contains_key(*alias))
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(field.into(), value.into());
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Sheet-style text for a cell value.
///
/// Booleans follow the spreadsheet convention (`TRUE`/`FALSE`) so that flags
/// compare the same whether they came back typed or as strings.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(true) => "TRUE".to_string(),
        Value::Bool(false) => "FALSE".to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}
