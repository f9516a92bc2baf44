use std::collections::HashSet;

use tracing::debug;

use crate::{
    error::DslGenError,
    types::{FieldKind, FieldSchema, MessageSchema, ScalarType},
    utils::{escape_rust_keyword, quote, to_pascal_case, to_snake_case},
};

/// Method names the emitters put on every message or builder.
pub const GENERATED_METHODS: [&str; 5] = ["copy", "to_builder", "new_builder", "_create", "_build"];

/// Type names every generated unit declares or imports.
pub const UNIT_TYPE_NAMES: [&str; 5] = ["Dsl", "Builder", "DslList", "DslProxy", "Message"];

/// Identifiers derived from one schema field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldNames {
    /// Struct field and getter name, e.g. `tests` or `type_`.
    pub ident:       String,
    pub setter:      String,
    pub clearer:     String,
    pub hazzer:      String,
    /// Setter taking a builder block for a sub-message.
    pub with:        String,
    /// `.proto` declaration, used in doc comments.
    pub declaration: String,
}

impl FieldNames {
    fn new(field: &FieldSchema) -> Self {
        let snake = to_snake_case(&field.name);
        FieldNames {
            ident:       escape_rust_keyword(&snake),
            setter:      format!("set_{}", snake),
            clearer:     format!("clear_{}", snake),
            hazzer:      format!("has_{}", snake),
            with:        format!("set_{}_with", snake),
            declaration: field.declaration(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Scalar(ScalarType),
    Message(String),
}

/// The builder surface for one field.
#[derive(Debug, Clone, PartialEq)]
pub enum AccessorSpec {
    /// `get`, `set`, `clear` (reset to the zero value).
    Scalar {
        names:  FieldNames,
        scalar: ScalarType,
    },
    /// `get`, `has`, `set`, `set_with`, `clear` (remove the sub-message).
    SingularMessage {
        names:   FieldNames,
        message: String,
    },
    /// A view plus `add`, `add_all`, `set(index)` and `clear`, all reached
    /// through a `DslList` tagged with `proxy`.
    Repeated {
        names:   FieldNames,
        element: Element,
        proxy:   String,
    },
}

impl AccessorSpec {
    pub fn names(&self) -> &FieldNames {
        match self {
            AccessorSpec::Scalar { names, .. }
            | AccessorSpec::SingularMessage { names, .. }
            | AccessorSpec::Repeated { names, .. } => names,
        }
    }

    /// Every method this accessor puts on the message type or its `Dsl`.
    pub fn method_names(&self) -> Vec<&str> {
        match self {
            AccessorSpec::Scalar { names, .. } => {
                vec![names.ident.as_str(), &names.setter, &names.clearer]
            }
            AccessorSpec::SingularMessage { names, .. } => {
                vec![names.ident.as_str(), &names.hazzer, &names.setter, &names.with, &names.clearer]
            }
            AccessorSpec::Repeated { names, .. } => vec![names.ident.as_str()],
        }
    }

    pub fn operations(&self) -> &'static [&'static str] {
        match self {
            AccessorSpec::Scalar { .. } => &["get", "set", "clear"],
            AccessorSpec::SingularMessage { .. } => &["get", "has", "set", "set_with", "clear"],
            AccessorSpec::Repeated { .. } => &["view", "add", "add_all", "set", "clear"],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BuilderSpec {
    pub message:   String,
    pub accessors: Vec<AccessorSpec>,
}

fn scalar_of(field: &FieldSchema) -> Result<ScalarType, DslGenError> {
    ScalarType::from_name(&field.value_type).ok_or_else(|| {
        DslGenError::SchemaError(format!(
            "The type {} of field {} is not a scalar type",
            quote(&field.value_type),
            quote(&field.name)
        ))
    })
}

fn message_of(field: &FieldSchema) -> Result<String, DslGenError> {
    if ScalarType::from_name(&field.value_type).is_some() {
        return Err(DslGenError::SchemaError(format!(
            "The field {} is declared as a message but has scalar type {}",
            quote(&field.name),
            quote(&field.value_type)
        )));
    }
    Ok(field.value_type.clone())
}

/// Decides which accessor shape `field` gets.
///
/// `message` only names the owner in `UnsupportedFieldKind` errors.
pub fn classify_field(message: &str, field: &FieldSchema) -> Result<AccessorSpec, DslGenError> {
    let names = FieldNames::new(field);
    if GENERATED_METHODS.contains(&names.ident.as_str()) {
        return Err(DslGenError::SchemaError(format!(
            "The field {} in {} clashes with a generated method",
            quote(&field.name),
            quote(message)
        )));
    }

    let spec = match &field.kind {
        FieldKind::Scalar => AccessorSpec::Scalar {
            scalar: scalar_of(field)?,
            names,
        },
        FieldKind::Message => AccessorSpec::SingularMessage {
            message: message_of(field)?,
            names,
        },
        FieldKind::RepeatedScalar => AccessorSpec::Repeated {
            element: Element::Scalar(scalar_of(field)?),
            proxy:   format!("{}Proxy", to_pascal_case(&field.name)),
            names,
        },
        FieldKind::RepeatedMessage => AccessorSpec::Repeated {
            element: Element::Message(message_of(field)?),
            proxy:   format!("{}Proxy", to_pascal_case(&field.name)),
            names,
        },
        FieldKind::Other(kind) => {
            return Err(DslGenError::UnsupportedFieldKind {
                message: message.to_string(),
                field:   field.name.clone(),
                kind:    kind.clone(),
            })
        }
    };
    Ok(spec)
}

pub fn classify_message(message: &MessageSchema) -> Result<BuilderSpec, DslGenError> {
    let mut accessors = Vec::with_capacity(message.fields.len());
    for field in &message.fields {
        let spec = classify_field(&message.name, field)?;
        debug!(message = %message.name, field = %field.name, operations = ?spec.operations(), "classified field");
        accessors.push(spec);
    }

    let mut methods: HashSet<&str> = GENERATED_METHODS.iter().copied().collect();
    let mut types: HashSet<&str> = UNIT_TYPE_NAMES.iter().copied().collect();
    types.insert(&message.name);
    for (field, accessor) in message.fields.iter().zip(&accessors) {
        for method in accessor.method_names() {
            if !methods.insert(method) {
                return Err(DslGenError::SchemaError(format!(
                    "The method {} generated for field {} in {} is already defined",
                    quote(method),
                    quote(&field.name),
                    quote(&message.name)
                )));
            }
        }
        if let AccessorSpec::Repeated { proxy, .. } = accessor {
            if !types.insert(proxy) {
                return Err(DslGenError::SchemaError(format!(
                    "The proxy type {} generated for field {} in {} is already defined",
                    quote(proxy),
                    quote(&field.name),
                    quote(&message.name)
                )));
            }
        }
    }

    Ok(BuilderSpec {
        message: message.name.clone(),
        accessors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_field() {
        let field = FieldSchema::new("name", 1, FieldKind::Scalar, "string");
        let spec = classify_field("DartTestGroup", &field).unwrap();
        match spec {
            AccessorSpec::Scalar { names, scalar } => {
                assert_eq!(scalar, ScalarType::String);
                assert_eq!(names.ident, "name");
                assert_eq!(names.setter, "set_name");
                assert_eq!(names.clearer, "clear_name");
            }
            other => panic!("expected scalar accessor, got {other:?}"),
        }
    }

    #[test]
    fn test_singular_message_field() {
        let field = FieldSchema::new("parentGroup", 4, FieldKind::Message, "DartTestGroup");
        let spec = classify_field("DartTestGroup", &field).unwrap();
        assert_eq!(spec.operations(), &["get", "has", "set", "set_with", "clear"]);
        match spec {
            AccessorSpec::SingularMessage { names, message } => {
                assert_eq!(message, "DartTestGroup");
                assert_eq!(names.hazzer, "has_parent_group");
                assert_eq!(names.with, "set_parent_group_with");
            }
            other => panic!("expected message accessor, got {other:?}"),
        }
    }

    #[test]
    fn test_repeated_fields_get_their_own_proxy() {
        let tests = FieldSchema::new("tests", 2, FieldKind::RepeatedMessage, "DartTestCase");
        let tags = FieldSchema::new("tags", 5, FieldKind::RepeatedScalar, "string");

        match classify_field("DartTestGroup", &tests).unwrap() {
            AccessorSpec::Repeated { proxy, element, .. } => {
                assert_eq!(proxy, "TestsProxy");
                assert_eq!(element, Element::Message("DartTestCase".into()));
            }
            other => panic!("expected repeated accessor, got {other:?}"),
        }
        match classify_field("DartTestGroup", &tags).unwrap() {
            AccessorSpec::Repeated { proxy, element, .. } => {
                assert_eq!(proxy, "TagsProxy");
                assert_eq!(element, Element::Scalar(ScalarType::String));
            }
            other => panic!("expected repeated accessor, got {other:?}"),
        }
    }

    #[test]
    fn test_unsupported_kind() {
        let field = FieldSchema::new("counts", 4, FieldKind::Other("map".into()), "map<string, int32>");
        let err = classify_field("Summary", &field).unwrap_err();
        assert!(matches!(
            err,
            DslGenError::UnsupportedFieldKind { ref message, ref field, ref kind }
                if message == "Summary" && field == "counts" && kind == "map"
        ));
    }

    #[test]
    fn test_keyword_field_is_escaped() {
        let field = FieldSchema::new("type", 1, FieldKind::Scalar, "string");
        let spec = classify_field("Step", &field).unwrap();
        assert_eq!(spec.names().ident, "type_");
        assert_eq!(spec.names().setter, "set_type");
    }

    #[test]
    fn test_field_clashing_with_generated_method() {
        let field = FieldSchema::new("copy", 1, FieldKind::Scalar, "bool");
        assert!(matches!(classify_field("A", &field), Err(DslGenError::SchemaError(_))));
    }

    fn message(name: &str, fields: Vec<FieldSchema>) -> MessageSchema {
        MessageSchema { name: name.into(), fields, line: 0, column: 0 }
    }

    fn schema_error(result: Result<BuilderSpec, DslGenError>) -> String {
        match result {
            Err(DslGenError::SchemaError(msg)) => msg,
            other => panic!("expected a schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_setter_clashing_with_another_field() {
        let m = message("A", vec![
            FieldSchema::new("foo", 1, FieldKind::Scalar, "string"),
            FieldSchema::new("set_foo", 2, FieldKind::Scalar, "string"),
        ]);
        let msg = schema_error(classify_message(&m));
        assert!(msg.contains("\"set_foo\""), "{msg}");
    }

    #[test]
    fn test_hazzer_and_with_clash_with_other_fields() {
        let m = message("A", vec![
            FieldSchema::new("config", 1, FieldKind::Message, "A"),
            FieldSchema::new("has_config", 2, FieldKind::Scalar, "bool"),
        ]);
        assert!(classify_message(&m).is_err());

        let m = message("A", vec![
            FieldSchema::new("config", 1, FieldKind::Message, "A"),
            FieldSchema::new("config_with", 2, FieldKind::Scalar, "bool"),
        ]);
        assert!(classify_message(&m).is_err());
    }

    #[test]
    fn test_escaped_keyword_clashes_with_suffixed_field() {
        let m = message("A", vec![
            FieldSchema::new("type", 1, FieldKind::Scalar, "string"),
            FieldSchema::new("type_", 2, FieldKind::Scalar, "string"),
        ]);
        assert!(classify_message(&m).is_err());
    }

    #[test]
    fn test_builder_field_is_allowed() {
        let m = message("A", vec![FieldSchema::new("builder", 1, FieldKind::Scalar, "string")]);
        assert!(classify_message(&m).is_ok());

        let field = FieldSchema::new("_build", 1, FieldKind::Scalar, "bool");
        assert!(classify_field("A", &field).is_err());
    }

    #[test]
    fn test_proxy_clashing_with_unit_types() {
        let m = message("TestsProxy", vec![
            FieldSchema::new("tests", 1, FieldKind::RepeatedScalar, "string"),
        ]);
        let msg = schema_error(classify_message(&m));
        assert!(msg.contains("\"TestsProxy\""), "{msg}");

        let m = message("A", vec![FieldSchema::new("dsl", 1, FieldKind::RepeatedScalar, "string")]);
        assert!(classify_message(&m).is_err());
    }

    #[test]
    fn test_colliding_proxy_names() {
        let message = MessageSchema {
            name: "A".into(),
            fields: vec![
                FieldSchema::new("test_ids", 1, FieldKind::RepeatedScalar, "int32"),
                FieldSchema::new("TEST_IDS", 2, FieldKind::RepeatedScalar, "int32"),
            ],
            line: 0,
            column: 0,
        };
        assert!(classify_message(&message).is_err());
    }
}
