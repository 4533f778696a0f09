//! Shared fixtures for module schema tests.

#![allow(dead_code)]

use modschema::{EnumType, Field, ModuleSchema, ObjectType};

/// An object type keyed by a single enum field.
pub fn enum_keyed(name: &str, enum_name: &str, values: &[&str]) -> ObjectType {
    ObjectType::new(name).with_key_field(Field::enumeration(
        "field1",
        EnumType::new(enum_name, values.iter().copied()),
    ))
}

/// An object type keyed by a single string field.
pub fn string_keyed(name: &str) -> ObjectType {
    ObjectType::new(name).with_key_field(Field::string("field1"))
}

/// Builds a schema, panicking on validation failure.
pub fn require_schema(object_types: Vec<ObjectType>) -> ModuleSchema {
    match ModuleSchema::new(object_types) {
        Ok(schema) => schema,
        Err(e) => panic!("unexpected error: {e}"),
    }
}

/// `object1` keyed by `enum2 = {d, e, f}`, `object2` keyed by `enum1 = {a, b, c}`.
pub fn example_schema() -> ModuleSchema {
    require_schema(vec![
        enum_keyed("object1", "enum2", &["d", "e", "f"]),
        enum_keyed("object2", "enum1", &["a", "b", "c"]),
    ])
}

/// Asserts that building fails with a message containing `needle`.
pub fn assert_build_error(object_types: Vec<ObjectType>, needle: &str) {
    match ModuleSchema::new(object_types) {
        Ok(_) => panic!("expected error containing {needle:?}, got a schema"),
        Err(e) => assert!(
            e.to_string().contains(needle),
            "expected error to contain {needle:?}, got: {e}"
        ),
    }
}
