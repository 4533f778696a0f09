mod common;

use common::{assert_build_error, enum_keyed, require_schema, string_keyed};
use modschema::{EnumType, Field, FieldError, Kind, ModuleSchema, ObjectType, SchemaError};

// ── Well-formed schemas ──────────────────────────────────────────

#[test]
fn single_object_type_builds() {
    let schema = require_schema(vec![string_keyed("object1")]);
    let ty = schema.lookup_type("object1").expect("object1 registered");
    let object_type = ty.as_object_type().expect("object1 is an object type");
    assert_eq!(object_type.name, "object1");
    assert_eq!(object_type.key_fields[0].kind, Kind::String);
}

#[test]
fn every_declared_name_resolves() {
    let schema = require_schema(vec![
        string_keyed("accounts"),
        enum_keyed("orders", "status", &["open", "filled"]),
        ObjectType::new("balances")
            .with_key_field(Field::new("owner", Kind::Address))
            .with_key_field(Field::new("denom", Kind::String))
            .with_value_field(Field::new("amount", Kind::IntegerString))
            .with_value_field(Field::new("memo", Kind::String).nullable()),
    ]);
    for name in ["accounts", "orders", "balances", "status"] {
        assert!(schema.lookup_type(name).is_some(), "{name} should resolve");
    }
    assert_eq!(schema.len(), 4);
}

#[test]
fn identical_shared_enum_is_registered_once() {
    let schema = require_schema(vec![
        enum_keyed("object1", "enum1", &["a", "b"]),
        enum_keyed("object2", "enum1", &["a", "b"]),
    ]);
    let mut enums = Vec::new();
    schema.enum_types(|e| {
        enums.push(e.clone());
        true
    });
    assert_eq!(enums, vec![EnumType::new("enum1", ["a", "b"])]);
}

#[test]
fn schema_owns_copies_of_declarations() {
    let mut declared = vec![string_keyed("object1")];
    let schema = require_schema(declared.clone());
    declared[0].name = "renamed".into();
    assert!(schema.lookup_type("object1").is_some());
    assert!(schema.lookup_type("renamed").is_none());
}

// ── Structural errors ────────────────────────────────────────────

#[test]
fn empty_object_type_name_is_rejected() {
    let object_type = ObjectType::new("").with_key_field(Field::string("field1"));
    assert_build_error(vec![object_type], "invalid object type name");
}

#[test]
fn empty_field_name_is_rejected() {
    let object_type = ObjectType::new("object1").with_key_field(Field::string(""));
    let err = ModuleSchema::new(vec![object_type]).unwrap_err();
    assert_eq!(
        err,
        SchemaError::InvalidField {
            object_type: "object1".into(),
            field: String::new(),
            reason: FieldError::EmptyName,
        }
    );
    assert!(err.to_string().contains("invalid field"));
}

#[test]
fn enum_kind_without_enum_type_is_rejected() {
    let object_type = ObjectType::new("object1").with_key_field(Field::new("k", Kind::Enum));
    let err = ModuleSchema::new(vec![object_type]).unwrap_err();
    assert!(matches!(
        err,
        SchemaError::InvalidField { reason: FieldError::MissingEnumType, .. }
    ));
}

#[test]
fn enum_type_on_primitive_field_is_rejected() {
    let mut field = Field::string("k");
    field.enum_type = Some(EnumType::new("e", ["a"]));
    let err = ModuleSchema::new(vec![ObjectType::new("object1").with_key_field(field)])
        .unwrap_err();
    assert!(matches!(
        err,
        SchemaError::InvalidField { reason: FieldError::UnexpectedEnumType(_, Kind::String), .. }
    ));
}

#[test]
fn enum_without_values_is_rejected() {
    assert_build_error(vec![enum_keyed("object1", "enum1", &[])], "enum has no values");
}

#[test]
fn enum_with_repeated_value_is_rejected() {
    assert_build_error(
        vec![enum_keyed("object1", "enum1", &["a", "a"])],
        "duplicate enum value \"a\"",
    );
}

#[test]
fn nullable_key_field_is_rejected() {
    let object_type = ObjectType::new("object1").with_key_field(Field::string("k").nullable());
    assert_build_error(vec![object_type], "key fields cannot be nullable");
}

#[test]
fn nullable_value_field_is_allowed() {
    let object_type = string_keyed("object1").with_value_field(Field::string("v").nullable());
    require_schema(vec![object_type]);
}

#[test]
fn repeated_field_name_across_key_and_value_is_rejected() {
    let object_type = string_keyed("object1").with_value_field(Field::string("field1"));
    let err = ModuleSchema::new(vec![object_type]).unwrap_err();
    assert!(matches!(
        err,
        SchemaError::InvalidField { reason: FieldError::DuplicateName, .. }
    ));
}

#[test]
fn duplicate_object_type_name_is_rejected() {
    assert_build_error(
        vec![string_keyed("object1"), string_keyed("object1")],
        "duplicate object type name \"object1\"",
    );
}

#[test]
fn object_type_without_key_fields_is_rejected() {
    let object_type = ObjectType::new("object1").with_value_field(Field::string("v"));
    let err = ModuleSchema::new(vec![object_type]).unwrap_err();
    assert_eq!(err, SchemaError::MissingKeyFields("object1".into()));
}

// ── Enum consistency ─────────────────────────────────────────────

#[test]
fn same_enum_with_missing_values_is_rejected() {
    let object_type = ObjectType::new("object1")
        .with_key_field(Field::enumeration("k", EnumType::new("enum1", ["a", "b"])))
        .with_value_field(Field::enumeration("v", EnumType::new("enum1", ["a", "b", "c"])));
    assert_build_error(vec![object_type], "different number of values");
}

#[test]
fn same_enum_with_different_values_is_rejected() {
    let err = ModuleSchema::new(vec![
        enum_keyed("object1", "enum1", &["a", "b"]),
        enum_keyed("object2", "enum1", &["a", "c"]),
    ])
    .unwrap_err();
    assert!(err.to_string().contains("different values"));
    assert!(!err.to_string().contains("different number of values"));
}

#[test]
fn same_enum_in_different_order_is_rejected() {
    assert_build_error(
        vec![
            enum_keyed("object1", "enum1", &["a", "b"]),
            enum_keyed("object2", "enum1", &["b", "a"]),
        ],
        "different values",
    );
}

// ── Namespace collisions ─────────────────────────────────────────

#[test]
fn enum_named_like_its_own_object_type_is_rejected() {
    let object_type = ObjectType::new("type1")
        .with_value_field(Field::enumeration("field1", EnumType::new("type1", ["a", "b"])));
    assert_build_error(
        vec![object_type],
        "enum \"type1\" already exists as a different non-enum type",
    );
}

#[test]
fn enum_named_like_another_object_type_is_rejected() {
    let err = ModuleSchema::new(vec![
        enum_keyed("object1", "object2", &["a"]),
        string_keyed("object2"),
    ])
    .unwrap_err();
    assert_eq!(err, SchemaError::EnumNameCollision("object2".into()));
}
