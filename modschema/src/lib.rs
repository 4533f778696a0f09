//! Module schema definitions and validation.
//!
//! A module describes the state it manages as a set of object types:
//! - [`ObjectType`] — a named record with ordered key fields and value fields
//! - [`Field`] / [`Kind`] — a named, typed slot; enum-kinded fields carry an [`EnumType`]
//! - [`ModuleSchema`] — the validated, immutable registry of object and enum types
//! - [`ObjectUpdate`] — a requested change, checked against the registry
//!
//! Enum types are shared by name: every field that names the same enum must
//! list exactly the same values in the same order, and no enum may reuse an
//! object type's name. Registry iteration is always in ascending name order.

mod enum_type;
mod error;
mod field;
mod kind;
mod module_schema;
mod object_type;
mod types;
mod update;

pub use enum_type::EnumType;
pub use error::{FieldError, SchemaError, SchemaResult};
pub use field::Field;
pub use kind::Kind;
pub use module_schema::{ModuleSchema, ModuleSchemaBuilder};
pub use object_type::ObjectType;
pub use types::Type;
pub use update::ObjectUpdate;
