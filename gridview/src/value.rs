//! Cell values extracted from row records.

use std::cmp::Ordering;
use std::fmt;

use chrono::DateTime;
use chrono::Utc;

/// A single cell value as seen by the table pipeline.
///
/// Rows hand the controller a `CellValue` per column; filtering works on its
/// [`Display`](fmt::Display) form and sorting on [`CellValue::compare`].
///
/// # Example
///
/// ```
/// use gridview::CellValue;
///
/// let name = CellValue::from("Contoso");
/// let stock = CellValue::from(42);
/// let missing: CellValue = None::<i64>.into();
///
/// assert_eq!(name.to_string(), "Contoso");
/// assert!(missing.is_null());
/// assert!(stock.compare(&CellValue::from(7.5)).is_gt());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CellValue {
    /// Empty cell.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// Date and time.
    DateTime(DateTime<Utc>),
    /// Text value.
    Text(String),
}

impl CellValue {
    /// Returns `true` if this is an empty cell.
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Returns the text if this is a text value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Sort rank of the value's type. Values of different types order by rank.
    fn rank(&self) -> u8 {
        match self {
            CellValue::Null => 0,
            CellValue::Bool(_) => 1,
            CellValue::Int(_) | CellValue::Float(_) => 2,
            CellValue::DateTime(_) => 3,
            CellValue::Text(_) => 4,
        }
    }

    /// Total ordering used for sorting.
    ///
    /// Null < bool < number < datetime < text. Integers and floats compare
    /// numerically, NaN after every other number. Text compares
    /// case-insensitively and falls back to an exact comparison only when the
    /// lowercase forms are equal.
    pub fn compare(&self, other: &CellValue) -> Ordering {
        match (self, other) {
            (CellValue::Null, CellValue::Null) => Ordering::Equal,
            (CellValue::Bool(a), CellValue::Bool(b)) => a.cmp(b),
            (CellValue::Int(a), CellValue::Int(b)) => a.cmp(b),
            (CellValue::Int(a), CellValue::Float(b)) => compare_int_float(*a, *b),
            (CellValue::Float(a), CellValue::Int(b)) => compare_int_float(*b, *a).reverse(),
            (CellValue::Float(a), CellValue::Float(b)) => compare_floats(*a, *b),
            (CellValue::DateTime(a), CellValue::DateTime(b)) => a.cmp(b),
            (CellValue::Text(a), CellValue::Text(b)) => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b)),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Exact comparison of an integer with a float, without rounding the integer
/// through `f64`.
fn compare_int_float(i: i64, f: f64) -> Ordering {
    // 2^63, the first float above every i64.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if f.is_nan() || f >= LIMIT {
        return Ordering::Less;
    }
    if f < -LIMIT {
        return Ordering::Greater;
    }
    // In range, so the truncation converts exactly.
    let whole = f.trunc() as i64;
    i.cmp(&whole).then_with(|| 0.0f64.partial_cmp(&f.fract()).unwrap_or(Ordering::Equal))
}

fn compare_floats(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Bool(v) => write!(f, "{}", v),
            CellValue::Int(v) => write!(f, "{}", v),
            CellValue::Float(v) => write!(f, "{}", v),
            CellValue::DateTime(v) => write!(f, "{}", v.to_rfc3339()),
            CellValue::Text(v) => f.write_str(v),
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for CellValue {
    fn from(v: bool) -> Self {
        CellValue::Bool(v)
    }
}

impl From<i32> for CellValue {
    fn from(v: i32) -> Self {
        CellValue::Int(v.into())
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Int(v)
    }
}

impl From<u32> for CellValue {
    fn from(v: u32) -> Self {
        CellValue::Int(v.into())
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Float(v)
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        CellValue::Text(v)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::Text(v.to_string())
    }
}

impl From<DateTime<Utc>> for CellValue {
    fn from(v: DateTime<Utc>) -> Self {
        CellValue::DateTime(v)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(CellValue::Null)
    }
}

impl From<&serde_json::Value> for CellValue {
    fn from(v: &serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => CellValue::Null,
            serde_json::Value::Bool(b) => CellValue::Bool(*b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => CellValue::Int(i),
                None => n.as_f64().map(CellValue::Float).unwrap_or(CellValue::Null),
            },
            serde_json::Value::String(s) => CellValue::Text(s.clone()),
            other => CellValue::Text(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_compare_across_int_and_float() {
        assert_eq!(CellValue::Int(2).compare(&CellValue::Float(2.5)), Ordering::Less);
        assert_eq!(CellValue::Float(3.0).compare(&CellValue::Int(3)), Ordering::Equal);
    }

    #[test]
    fn test_large_ints_compare_exactly_with_floats() {
        let two_53 = 1i64 << 53;
        let float = CellValue::Float(two_53 as f64);

        assert_eq!(CellValue::Int(two_53).compare(&float), Ordering::Equal);
        assert_eq!(CellValue::Int(two_53 + 1).compare(&float), Ordering::Greater);
        assert_eq!(float.compare(&CellValue::Int(two_53 + 1)), Ordering::Less);
        assert_eq!(CellValue::Int(i64::MAX).compare(&CellValue::Float(1e19)), Ordering::Less);
        assert_eq!(CellValue::Int(i64::MIN).compare(&CellValue::Float(-1e19)), Ordering::Greater);
        assert_eq!(CellValue::Int(-3).compare(&CellValue::Float(-2.5)), Ordering::Less);
        assert_eq!(CellValue::Int(-2).compare(&CellValue::Float(-2.5)), Ordering::Greater);
    }

    #[test]
    fn test_nan_sorts_last() {
        assert_eq!(
            CellValue::Float(f64::NAN).compare(&CellValue::Float(1e300)),
            Ordering::Greater
        );
        assert_eq!(
            CellValue::Int(i64::MAX).compare(&CellValue::Float(f64::NAN)),
            Ordering::Less
        );
    }

    #[test]
    fn test_text_ignores_case_first() {
        let apple = CellValue::from("apple");
        let banana = CellValue::from("Banana");
        assert_eq!(apple.compare(&banana), Ordering::Less);
        // Only equal lowercase forms fall back to exact comparison.
        assert_eq!(
            CellValue::from("Apple").compare(&CellValue::from("apple")),
            Ordering::Less
        );
    }

    #[test]
    fn test_mixed_types_order_by_rank() {
        assert!(CellValue::Null.compare(&CellValue::Bool(false)).is_lt());
        assert!(CellValue::Int(999).compare(&CellValue::from("0")).is_lt());
    }

    #[test]
    fn test_display_null_is_empty() {
        assert_eq!(CellValue::Null.to_string(), "");
        assert_eq!(CellValue::Bool(true).to_string(), "true");
    }

    #[test]
    fn test_from_json() {
        let json = serde_json::json!({"a": 1, "b": 1.5, "c": [1, 2]});
        assert_eq!(CellValue::from(&json["a"]), CellValue::Int(1));
        assert_eq!(CellValue::from(&json["b"]), CellValue::Float(1.5));
        assert_eq!(CellValue::from(&json["c"]), CellValue::from("[1,2]"));
        assert_eq!(CellValue::from(&json["missing"]), CellValue::Null);
    }
}
