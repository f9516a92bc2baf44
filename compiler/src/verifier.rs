use std::collections::HashSet;
use crate::{
    types::{FieldKind, MessageSchema, ScalarType, SchemaFile},
    utils::{quote, to_snake_case},
    error::DslGenError,
};

/// Type names a message may not take: runtime items every unit imports and
/// prelude names the generated bodies refer to unqualified.
pub const RESERVED_NAMES: [&str; 13] = [
    "Builder", "Dsl", "DslList", "DslProxy", "Message",
    "Option", "String", "Vec", "Box", "Default", "Into", "FnOnce", "Self",
];

/// Checks the invariants local to one message: non-empty name, positive and
/// unique field ids, unique field names.
pub fn verify_message_fields(message: &MessageSchema) -> Result<(), DslGenError> {
    if message.name.trim().is_empty() {
        return Err(DslGenError::SchemaError("Message name must not be empty".to_string()));
    }

    let mut ids = HashSet::new();
    let mut names = HashSet::new();
    for field in &message.fields {
        if field.name.is_empty() {
            return Err(DslGenError::SchemaError(format!(
                "Field with id {} in {} has an empty name",
                field.id,
                quote(&message.name)
            )));
        }
        if field.id == 0 {
            return Err(DslGenError::SchemaError(format!(
                "The id for field {} in {} must be positive",
                quote(&field.name),
                quote(&message.name)
            )));
        }
        if !ids.insert(field.id) {
            return Err(DslGenError::SchemaError(format!(
                "The id {} for field {} in {} is used twice",
                field.id,
                quote(&field.name),
                quote(&message.name)
            )));
        }
        // `testCases` and `test_cases` would produce the same accessors.
        if !names.insert(to_snake_case(&field.name)) {
            return Err(DslGenError::SchemaError(format!(
                "The field {} in {} is defined twice",
                quote(&field.name),
                quote(&message.name)
            )));
        }
    }
    Ok(())
}

/// Verifies one message against the whole file: local invariants, reserved
/// names and that every message-typed field refers to a message in `schema`.
pub fn verify_message(message: &MessageSchema, schema: &SchemaFile) -> Result<(), DslGenError> {
    verify_message_fields(message)?;

    if RESERVED_NAMES.contains(&message.name.as_str()) {
        return Err(DslGenError::SchemaError(format!(
            "The type name {} is reserved",
            quote(&message.name)
        )));
    }

    // The entry point shares the module's name, so it must differ from the type.
    if to_snake_case(&message.name) == message.name {
        return Err(DslGenError::SchemaError(format!(
            "The type name {} must not be snake_case",
            quote(&message.name)
        )));
    }

    let duplicates = schema
        .messages
        .iter()
        .filter(|m| to_snake_case(&m.name) == to_snake_case(&message.name))
        .count();
    if duplicates > 1 {
        return Err(DslGenError::SchemaError(format!(
            "The type {} is defined twice",
            quote(&message.name)
        )));
    }

    for field in &message.fields {
        match field.kind {
            FieldKind::Message | FieldKind::RepeatedMessage => {
                if ScalarType::from_name(&field.value_type).is_some() {
                    return Err(DslGenError::SchemaError(format!(
                        "The field {} is declared as a message but has scalar type {}",
                        quote(&field.name),
                        quote(&field.value_type)
                    )));
                }
                if schema.message(&field.value_type).is_none() {
                    return Err(DslGenError::SchemaError(format!(
                        "The type {} is not defined for field {}",
                        quote(&field.value_type),
                        quote(&field.name)
                    )));
                }
            }
            FieldKind::Scalar | FieldKind::RepeatedScalar => {
                if ScalarType::from_name(&field.value_type).is_none() {
                    return Err(DslGenError::SchemaError(format!(
                        "The type {} of field {} is not a scalar type",
                        quote(&field.value_type),
                        quote(&field.name)
                    )));
                }
            }
            FieldKind::Other(_) => {}
        }
    }

    Ok(())
}

/// Runs [verify_message] over every message, stopping at the first failure.
pub fn verify_schema(schema: &SchemaFile) -> Result<(), DslGenError> {
    for message in &schema.messages {
        verify_message(message, schema)?;
    }
    Ok(())
}
