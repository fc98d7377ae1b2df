//! Row records.

use std::fmt;
use std::hash::Hash;

use serde_json::Map;
use serde_json::Value;

use crate::value::CellValue;

/// Trait for records that can be displayed as rows of a table.
///
/// The controller only ever looks at a row through its key and the values it
/// extracts per column id.
///
/// # Example
///
/// ```
/// use gridview::{CellValue, TableRow};
///
/// #[derive(Clone)]
/// struct Order {
///     id: u32,
///     customer: String,
///     total: f64,
/// }
///
/// impl TableRow for Order {
///     type Key = u32;
///
///     fn key(&self) -> u32 {
///         self.id
///     }
///
///     fn value(&self, column_id: &str) -> CellValue {
///         match column_id {
///             "customer" => self.customer.as_str().into(),
///             "total" => self.total.into(),
///             _ => CellValue::Null,
///         }
///     }
/// }
/// ```
pub trait TableRow {
    /// The key type used to identify this row across data refreshes.
    type Key: Clone + Eq + Hash + fmt::Debug + fmt::Display;

    /// Return a unique key for this row.
    fn key(&self) -> Self::Key;

    /// Extract the raw value for the given column id.
    fn value(&self, column_id: &str) -> CellValue;
}

/// Key of a [`JsonRow`].
///
/// Field keys and positional keys never compare equal, so a row keyed by
/// position cannot collide with a row whose key field holds the same number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum JsonKey {
    /// Value of the key field. Non-string values use their JSON text.
    Field(String),
    /// Zero-based position in the source array. Displays as `#<index>`.
    Position(usize),
}

impl Default for JsonKey {
    fn default() -> Self {
        JsonKey::Position(0)
    }
}

impl fmt::Display for JsonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonKey::Field(value) => f.write_str(value),
            JsonKey::Position(index) => write!(f, "#{}", index),
        }
    }
}

impl From<&str> for JsonKey {
    fn from(value: &str) -> Self {
        JsonKey::Field(value.to_string())
    }
}

impl From<String> for JsonKey {
    fn from(value: String) -> Self {
        JsonKey::Field(value)
    }
}

impl From<usize> for JsonKey {
    fn from(index: usize) -> Self {
        JsonKey::Position(index)
    }
}

/// A row backed by a JSON object, keyed by column id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonRow {
    key: JsonKey,
    fields: Map<String, Value>,
}

impl JsonRow {
    /// Create a row from a key and its fields.
    pub fn new(key: impl Into<JsonKey>, fields: Map<String, Value>) -> Self {
        Self {
            key: key.into(),
            fields,
        }
    }

    /// Build rows from a JSON array.
    ///
    /// The key comes from `key_field` when the object has a non-null value
    /// there, otherwise from the element's position ([`JsonKey::Position`]). Non-object elements are
    /// stored under a single `"value"` field.
    pub fn from_array(values: Vec<Value>, key_field: Option<&str>) -> Vec<JsonRow> {
        values
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                let fields = match value {
                    Value::Object(map) => map,
                    other => {
                        let mut map = Map::new();
                        map.insert("value".to_string(), other);
                        map
                    }
                };
                let key = key_field
                    .and_then(|field| fields.get(field))
                    .filter(|v| !v.is_null())
                    .map(|v| match v {
                        Value::String(s) => JsonKey::Field(s.clone()),
                        other => JsonKey::Field(other.to_string()),
                    })
                    .unwrap_or(JsonKey::Position(index));
                JsonRow { key, fields }
            })
            .collect()
    }

    /// Field names of this row, in object order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Raw JSON fields.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl TableRow for JsonRow {
    type Key = JsonKey;

    fn key(&self) -> JsonKey {
        self.key.clone()
    }

    fn value(&self, column_id: &str) -> CellValue {
        self.fields
            .get(column_id)
            .map(CellValue::from)
            .unwrap_or(CellValue::Null)
    }
}
