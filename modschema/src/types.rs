use crate::{EnumType, ObjectType};
use serde::Serialize;

/// Any type registered in a [`ModuleSchema`](crate::ModuleSchema).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Type {
    Object(ObjectType),
    Enum(EnumType),
}

impl Type {
    /// The name the type is registered under.
    pub fn name(&self) -> &str {
        match self {
            Self::Object(o) => &o.name,
            Self::Enum(e) => &e.name,
        }
    }

    pub fn is_object_type(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    pub fn is_enum_type(&self) -> bool {
        matches!(self, Self::Enum(_))
    }

    pub fn as_object_type(&self) -> Option<&ObjectType> {
        match self {
            Self::Object(o) => Some(o),
            Self::Enum(_) => None,
        }
    }

    pub fn as_enum_type(&self) -> Option<&EnumType> {
        match self {
            Self::Enum(e) => Some(e),
            Self::Object(_) => None,
        }
    }
}

impl From<ObjectType> for Type {
    fn from(object_type: ObjectType) -> Self {
        Self::Object(object_type)
    }
}

impl From<EnumType> for Type {
    fn from(enum_type: EnumType) -> Self {
        Self::Enum(enum_type)
    }
}
