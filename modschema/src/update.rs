use crate::ModuleSchema;
use crate::error::{SchemaError, SchemaResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A requested change to one object, checked against a schema before it is
/// handed to storage.
///
/// `key` and `value` are opaque here; their encoding belongs to the consumer
/// that owns record storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectUpdate {
    pub type_name: String,
    pub key: serde_json::Value,
    #[serde(default)]
    pub value: serde_json::Value,
    /// Remove the object instead of writing `value`.
    #[serde(default)]
    pub delete: bool,
}

impl ObjectUpdate {
    /// An insert-or-update of `value` under `key`.
    pub fn set(
        type_name: impl Into<String>,
        key: impl Into<serde_json::Value>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            key: key.into(),
            value: value.into(),
            delete: false,
        }
    }

    /// A deletion of the object under `key`.
    pub fn delete(type_name: impl Into<String>, key: impl Into<serde_json::Value>) -> Self {
        Self {
            type_name: type_name.into(),
            key: key.into(),
            value: serde_json::Value::Null,
            delete: true,
        }
    }
}

impl ModuleSchema {
    /// Checks that `update` targets a registered object type.
    ///
    /// The key is not matched against the object type's key fields.
    pub fn validate_object_update(&self, update: &ObjectUpdate) -> SchemaResult<()> {
        let result = match self.lookup_type(&update.type_name) {
            None => Err(SchemaError::ObjectTypeNotFound(update.type_name.clone())),
            Some(ty) if !ty.is_object_type() => {
                Err(SchemaError::NotAnObjectType(update.type_name.clone()))
            }
            Some(_) => Ok(()),
        };
        result.inspect_err(|e| debug!("Rejected object update: {}", e))
    }
}
