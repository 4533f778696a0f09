//! Error types for schema construction and update validation.

use thiserror::Error;

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors raised while building a [`ModuleSchema`](crate::ModuleSchema) or
/// checking an update against one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Object type declared with an empty name.
    #[error("invalid object type name {0:?}")]
    InvalidObjectTypeName(String),

    /// A key or value field is malformed.
    #[error("invalid field {field:?} in object type {object_type:?}: {reason}")]
    InvalidField {
        object_type: String,
        field: String,
        reason: FieldError,
    },

    /// Two enums share a name but not a value count.
    #[error(
        "enum {name:?} has different number of values than a previously declared enum of the same name: expected {expected}, got {actual}"
    )]
    EnumValueCountMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    /// Two enums share a name and a value count but not the same sequence.
    #[error(
        "enum {name:?} has different values than a previously declared enum of the same name: expected {expected:?}, got {actual:?}"
    )]
    EnumValuesMismatch {
        name: String,
        expected: Vec<String>,
        actual: Vec<String>,
    },

    /// An enum is named like an object type.
    #[error("enum {0:?} already exists as a different non-enum type")]
    EnumNameCollision(String),

    /// The same object type name is declared twice.
    #[error("duplicate object type name {0:?}")]
    DuplicateObjectType(String),

    /// Object type cannot be addressed without key fields.
    #[error("object type {0:?} has no key fields")]
    MissingKeyFields(String),

    /// Update references a type the schema does not know.
    #[error("object type {0:?} not found in module schema")]
    ObjectTypeNotFound(String),

    /// Update references an enum instead of an object type.
    #[error("type {0:?} is not an object type")]
    NotAnObjectType(String),
}

/// Why a single field was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("field name is empty")]
    EmptyName,

    #[error("enum kind requires an enum type")]
    MissingEnumType,

    #[error("enum type {0:?} set on a field of kind {1}")]
    UnexpectedEnumType(String, crate::Kind),

    #[error("invalid enum type {name:?}: {reason}")]
    InvalidEnumType { name: String, reason: String },

    #[error("key fields cannot be nullable")]
    NullableKey,

    #[error("field name is already used in this object type")]
    DuplicateName,
}
