use crate::error::{FieldError, SchemaError, SchemaResult};
use crate::{EnumType, Field};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A named record shape: key fields form its identity, value fields its payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectType {
    pub name: String,
    #[serde(default)]
    pub key_fields: Vec<Field>,
    #[serde(default)]
    pub value_fields: Vec<Field>,
}

impl ObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key_fields: Vec::new(),
            value_fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_key_field(mut self, field: Field) -> Self {
        self.key_fields.push(field);
        self
    }

    #[must_use]
    pub fn with_value_field(mut self, field: Field) -> Self {
        self.value_fields.push(field);
        self
    }

    /// Key fields followed by value fields, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.key_fields.iter().chain(self.value_fields.iter())
    }

    /// Looks up a key or value field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields().find(|f| f.name == name)
    }

    /// Enum types referenced by this object's fields, in field order.
    /// Repeats are not collapsed.
    pub fn enum_types(&self) -> impl Iterator<Item = &EnumType> {
        self.fields().filter_map(|f| f.enum_type.as_ref())
    }

    pub(crate) fn check_name(&self) -> SchemaResult<()> {
        if self.name.is_empty() {
            return Err(SchemaError::InvalidObjectTypeName(self.name.clone()));
        }
        Ok(())
    }

    pub(crate) fn check_fields(&self) -> SchemaResult<()> {
        let mut names = HashSet::new();
        for (field, is_key) in self
            .key_fields
            .iter()
            .map(|f| (f, true))
            .chain(self.value_fields.iter().map(|f| (f, false)))
        {
            let result = field.check().and_then(|()| {
                if is_key && field.nullable {
                    Err(FieldError::NullableKey)
                } else if !names.insert(field.name.as_str()) {
                    Err(FieldError::DuplicateName)
                } else {
                    Ok(())
                }
            });
            result.map_err(|reason| SchemaError::InvalidField {
                object_type: self.name.clone(),
                field: field.name.clone(),
                reason,
            })?;
        }
        Ok(())
    }
}
