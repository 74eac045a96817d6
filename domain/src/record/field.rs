//! Field value object attached to log records

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// A named value attached to a single log entry
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    name: String,
    value: Value,
}

impl Field {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Build a field from any serializable value.
    ///
    /// Values that fail to serialize are recorded as `null`.
    pub fn serialized<T: Serialize + ?Sized>(name: impl Into<String>, value: &T) -> Self {
        Self {
            name: name.into(),
            value: serde_json::to_value(value).unwrap_or(Value::Null),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// Shortcut for [`Field::new`]
pub fn f(name: impl Into<String>, value: impl Into<Value>) -> Field {
    Field::new(name, value)
}

/// Field named `err` carrying the error's message
pub fn err_field(error: &dyn std::error::Error) -> Field {
    Field::new("err", error.to_string())
}

/// Fold fields into a name -> value map. Later fields win on repeated names.
pub fn mapify<'a, I>(fields: I) -> BTreeMap<String, Value>
where
    I: IntoIterator<Item = &'a Field>,
{
    fields
        .into_iter()
        .map(|field| (field.name.clone(), field.value.clone()))
        .collect()
}
