use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A named, ordered set of permitted string values.
///
/// Enum types are shared by name across object types. Wherever the same name
/// is reused the value list must be identical, position for position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnumType {
    pub name: String,
    pub values: Vec<String>,
}

impl EnumType {
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `value` is one of the permitted values.
    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    /// Checks the enum on its own: non-empty name, at least one value, no
    /// repeated values. Returns a human readable reason on failure.
    pub(crate) fn check(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("enum name is empty".into());
        }
        if self.values.is_empty() {
            return Err("enum has no values".into());
        }
        let mut seen = HashSet::with_capacity(self.values.len());
        for value in &self.values {
            if !seen.insert(value.as_str()) {
                return Err(format!("duplicate enum value {value:?}"));
            }
        }
        Ok(())
    }
}
