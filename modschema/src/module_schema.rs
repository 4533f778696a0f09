//! Schema construction and the frozen type registry.

use crate::error::{SchemaError, SchemaResult};
use crate::{EnumType, ObjectType, Type};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, trace};

/// An immutable, validated registry of object types and the enum types they
/// reference, indexed and ordered by name.
///
/// Built once through [`ModuleSchema::new`] or [`ModuleSchemaBuilder`]; no
/// method takes `&mut self`, so a schema can be shared freely across threads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ObjectType>", into = "Vec<ObjectType>")]
pub struct ModuleSchema {
    types: BTreeMap<String, Type>,
}

impl ModuleSchema {
    /// Validates `object_types` and builds the registry.
    ///
    /// Checks run in this order and stop at the first failure:
    /// object type names, fields, shared enum consistency, enum/object name
    /// collisions, duplicate object type names, key field presence.
    pub fn new(object_types: impl IntoIterator<Item = ObjectType>) -> SchemaResult<Self> {
        let object_types: Vec<ObjectType> = object_types.into_iter().collect();
        Self::build(object_types).inspect_err(|e| debug!("Rejected module schema: {}", e))
    }

    /// Starts an empty builder.
    pub fn builder() -> ModuleSchemaBuilder {
        ModuleSchemaBuilder::default()
    }

    fn build(object_types: Vec<ObjectType>) -> SchemaResult<Self> {
        for object_type in &object_types {
            object_type.check_name()?;
        }
        for object_type in &object_types {
            object_type.check_fields()?;
        }

        let enum_types = collect_enum_types(&object_types)?;

        let object_names: HashSet<&str> = object_types.iter().map(|o| o.name.as_str()).collect();
        if let Some(name) = enum_types
            .keys()
            .find(|name| object_names.contains(name.as_str()))
        {
            return Err(SchemaError::EnumNameCollision(name.clone()));
        }

        let mut seen = HashSet::with_capacity(object_types.len());
        for object_type in &object_types {
            if !seen.insert(object_type.name.as_str()) {
                return Err(SchemaError::DuplicateObjectType(object_type.name.clone()));
            }
        }

        if let Some(object_type) = object_types.iter().find(|o| o.key_fields.is_empty()) {
            return Err(SchemaError::MissingKeyFields(object_type.name.clone()));
        }

        let object_count = object_types.len();
        let enum_count = enum_types.len();

        let mut types: BTreeMap<String, Type> = enum_types
            .into_iter()
            .map(|(name, e)| (name, Type::Enum(e)))
            .collect();
        types.extend(
            object_types
                .into_iter()
                .map(|o| (o.name.clone(), Type::Object(o))),
        );

        debug!(
            "Built module schema: {} object types, {} enum types",
            object_count, enum_count
        );
        Ok(Self { types })
    }

    /// Returns the object or enum type registered under `name`.
    pub fn lookup_type(&self, name: &str) -> Option<&Type> {
        self.types.get(name)
    }

    /// Returns the object type registered under `name`, if it is one.
    pub fn lookup_object_type(&self, name: &str) -> Option<&ObjectType> {
        self.lookup_type(name).and_then(Type::as_object_type)
    }

    /// Returns the enum type registered under `name`, if it is one.
    pub fn lookup_enum_type(&self, name: &str) -> Option<&EnumType> {
        self.lookup_type(name).and_then(Type::as_enum_type)
    }

    /// All registered types in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = &Type> {
        self.types.values()
    }

    /// Visits every type in ascending name order until `visit` returns false.
    pub fn types<F>(&self, mut visit: F)
    where
        F: FnMut(&Type) -> bool,
    {
        for ty in self.iter() {
            if !visit(ty) {
                return;
            }
        }
    }

    /// Visits object types in ascending name order until `visit` returns false.
    pub fn object_types<F>(&self, mut visit: F)
    where
        F: FnMut(&ObjectType) -> bool,
    {
        for object_type in self.iter().filter_map(Type::as_object_type) {
            if !visit(object_type) {
                return;
            }
        }
    }

    /// Visits enum types in ascending name order until `visit` returns false.
    pub fn enum_types<F>(&self, mut visit: F)
    where
        F: FnMut(&EnumType) -> bool,
    {
        for enum_type in self.iter().filter_map(Type::as_enum_type) {
            if !visit(enum_type) {
                return;
            }
        }
    }

    /// Number of registered types, object and enum combined.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Gathers every enum referenced by key or value fields, keyed by name.
/// Same-named enums must agree on count first, then on each position.
fn collect_enum_types(object_types: &[ObjectType]) -> SchemaResult<BTreeMap<String, EnumType>> {
    let mut enums: BTreeMap<String, EnumType> = BTreeMap::new();
    for enum_type in object_types.iter().flat_map(|o| o.enum_types()) {
        match enums.get(&enum_type.name) {
            Some(existing) if existing.values.len() != enum_type.values.len() => {
                return Err(SchemaError::EnumValueCountMismatch {
                    name: enum_type.name.clone(),
                    expected: existing.values.len(),
                    actual: enum_type.values.len(),
                });
            }
            Some(existing) if existing.values != enum_type.values => {
                return Err(SchemaError::EnumValuesMismatch {
                    name: enum_type.name.clone(),
                    expected: existing.values.clone(),
                    actual: enum_type.values.clone(),
                });
            }
            Some(_) => {}
            None => {
                trace!("Registering enum type {:?}", enum_type.name);
                enums.insert(enum_type.name.clone(), enum_type.clone());
            }
        }
    }
    Ok(enums)
}

impl TryFrom<Vec<ObjectType>> for ModuleSchema {
    type Error = SchemaError;

    fn try_from(object_types: Vec<ObjectType>) -> SchemaResult<Self> {
        Self::new(object_types)
    }
}

impl From<ModuleSchema> for Vec<ObjectType> {
    fn from(schema: ModuleSchema) -> Self {
        schema
            .types
            .into_values()
            .filter_map(|ty| match ty {
                Type::Object(o) => Some(o),
                Type::Enum(_) => None,
            })
            .collect()
    }
}

/// Accumulates object type declarations before validation.
#[derive(Debug, Clone, Default)]
pub struct ModuleSchemaBuilder {
    object_types: Vec<ObjectType>,
}

impl ModuleSchemaBuilder {
    #[must_use]
    pub fn object_type(mut self, object_type: ObjectType) -> Self {
        self.object_types.push(object_type);
        self
    }

    /// Validates the accumulated declarations and freezes them.
    pub fn build(self) -> SchemaResult<ModuleSchema> {
        ModuleSchema::new(self.object_types)
    }
}
