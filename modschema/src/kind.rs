use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of value a field holds.
///
/// All kinds except [`Kind::Enum`] are primitive. An enum field names its
/// permitted values through [`Field::enum_type`](crate::Field::enum_type)
/// rather than inside this enum, so the JSON form stays flat:
/// `{"kind": "enum", "enum_type": {...}}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    String,
    Bytes,
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Int64,
    Uint64,
    /// Arbitrary precision integer carried as a decimal string.
    IntegerString,
    /// Arbitrary precision decimal carried as a string.
    DecimalString,
    Bool,
    Time,
    Duration,
    Float32,
    Float64,
    Address,
    Json,
    Enum,
}

impl Kind {
    /// Returns the snake_case name used in serialized schemas.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Bytes => "bytes",
            Self::Int8 => "int8",
            Self::Uint8 => "uint8",
            Self::Int16 => "int16",
            Self::Uint16 => "uint16",
            Self::Int32 => "int32",
            Self::Uint32 => "uint32",
            Self::Int64 => "int64",
            Self::Uint64 => "uint64",
            Self::IntegerString => "integer_string",
            Self::DecimalString => "decimal_string",
            Self::Bool => "bool",
            Self::Time => "time",
            Self::Duration => "duration",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Address => "address",
            Self::Json => "json",
            Self::Enum => "enum",
        }
    }

    /// Whether this kind references an [`EnumType`](crate::EnumType).
    #[must_use]
    pub const fn is_enum(&self) -> bool {
        matches!(self, Self::Enum)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
