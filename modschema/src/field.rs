use crate::error::FieldError;
use crate::{EnumType, Kind};
use serde::{Deserialize, Serialize};

/// A key or value field of an object type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub kind: Kind,
    #[serde(default)]
    pub nullable: bool,
    /// Permitted values. Present iff `kind` is [`Kind::Enum`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enum_type: Option<EnumType>,
}

impl Field {
    /// A non-nullable field of a primitive kind.
    pub fn new(name: impl Into<String>, kind: Kind) -> Self {
        Self {
            name: name.into(),
            kind,
            nullable: false,
            enum_type: None,
        }
    }

    /// Shorthand for a string field.
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, Kind::String)
    }

    /// Shorthand for an enum field.
    pub fn enumeration(name: impl Into<String>, enum_type: EnumType) -> Self {
        Self {
            name: name.into(),
            kind: Kind::Enum,
            nullable: false,
            enum_type: Some(enum_type),
        }
    }

    /// Marks the field as nullable.
    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub(crate) fn check(&self) -> Result<(), FieldError> {
        if self.name.is_empty() {
            return Err(FieldError::EmptyName);
        }
        match (&self.enum_type, self.kind) {
            (None, Kind::Enum) => Err(FieldError::MissingEnumType),
            (Some(e), Kind::Enum) => e.check().map_err(|reason| FieldError::InvalidEnumType {
                name: e.name.clone(),
                reason,
            }),
            (Some(e), kind) => Err(FieldError::UnexpectedEnumType(e.name.clone(), kind)),
            (None, _) => Ok(()),
        }
    }
}
