use serde::{Deserialize, Serialize};

use crate::{error::DslGenError, verifier::verify_message_fields};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SchemaFile {
    #[serde(default)]
    pub package:  Option<String>,
    #[serde(default)]
    pub source:   Option<String>,
    pub messages: Vec<MessageSchema>,
}

impl SchemaFile {
    pub fn message(&self, name: &str) -> Option<&MessageSchema> {
        self.messages.iter().find(|m| m.name == name)
    }
}

/// How a field shows up on the generated builder.
///
/// `Other` carries kinds the loader recognised in the input but that have no
/// builder surface (`map`, `enum`, `oneof`); generation rejects them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Scalar,
    Message,
    RepeatedScalar,
    RepeatedMessage,
    #[serde(untagged)]
    Other(String),
}

impl FieldKind {
    pub fn is_repeated(&self) -> bool {
        matches!(self, FieldKind::RepeatedScalar | FieldKind::RepeatedMessage)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSchema {
    pub name:       String,
    pub id:         u32,
    pub kind:       FieldKind,
    pub value_type: String,
    #[serde(default, skip_serializing)]
    pub line:       usize,
    #[serde(default, skip_serializing)]
    pub column:     usize,
}

impl FieldSchema {
    pub fn new(name: &str, id: u32, kind: FieldKind, value_type: &str) -> Self {
        FieldSchema {
            name:       name.to_string(),
            id,
            kind,
            value_type: value_type.to_string(),
            line:       0,
            column:     0,
        }
    }

    /// The `.proto` declaration this field came from, e.g.
    /// `repeated DartTestCase tests = 2;`.
    pub fn declaration(&self) -> String {
        match &self.kind {
            FieldKind::RepeatedScalar | FieldKind::RepeatedMessage => {
                format!("repeated {} {} = {};", self.value_type, self.name, self.id)
            }
            _ => format!("{} {} = {};", self.value_type, self.name, self.id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageSchema {
    pub name:   String,
    pub fields: Vec<FieldSchema>,
    #[serde(default, skip_serializing)]
    pub line:   usize,
    #[serde(default, skip_serializing)]
    pub column: usize,
}

impl MessageSchema {
    /// Builds a message, rejecting an empty name and zero, duplicate or
    /// clashing field ids and names.
    pub fn new(name: &str, fields: Vec<FieldSchema>) -> Result<Self, DslGenError> {
        let message = MessageSchema {
            name: name.to_string(),
            fields,
            line: 0,
            column: 0,
        };
        verify_message_fields(&message)?;
        Ok(message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    Double,
    Float,
    Int32,
    Int64,
    UInt32,
    UInt64,
    SInt32,
    SInt64,
    Fixed32,
    Fixed64,
    SFixed32,
    SFixed64,
    Bool,
    String,
    Bytes,
}

pub const SCALAR_TYPES: [&str; 15] = [
    "double", "float", "int32", "int64", "uint32", "uint64", "sint32", "sint64",
    "fixed32", "fixed64", "sfixed32", "sfixed64", "bool", "string", "bytes",
];

impl ScalarType {
    pub fn from_name(name: &str) -> Option<Self> {
        let ty = match name {
            "double"   => ScalarType::Double,
            "float"    => ScalarType::Float,
            "int32"    => ScalarType::Int32,
            "int64"    => ScalarType::Int64,
            "uint32"   => ScalarType::UInt32,
            "uint64"   => ScalarType::UInt64,
            "sint32"   => ScalarType::SInt32,
            "sint64"   => ScalarType::SInt64,
            "fixed32"  => ScalarType::Fixed32,
            "fixed64"  => ScalarType::Fixed64,
            "sfixed32" => ScalarType::SFixed32,
            "sfixed64" => ScalarType::SFixed64,
            "bool"     => ScalarType::Bool,
            "string"   => ScalarType::String,
            "bytes"    => ScalarType::Bytes,
            _ => return None,
        };
        Some(ty)
    }

    /// The owned Rust type used for storage.
    pub fn rust_type(self) -> &'static str {
        match self {
            ScalarType::Double => "f64",
            ScalarType::Float => "f32",
            ScalarType::Int32 | ScalarType::SInt32 | ScalarType::SFixed32 => "i32",
            ScalarType::Int64 | ScalarType::SInt64 | ScalarType::SFixed64 => "i64",
            ScalarType::UInt32 | ScalarType::Fixed32 => "u32",
            ScalarType::UInt64 | ScalarType::Fixed64 => "u64",
            ScalarType::Bool => "bool",
            ScalarType::String => "String",
            ScalarType::Bytes => "Vec<u8>",
        }
    }

    /// The type returned by a getter on a finalized message.
    pub fn borrowed_type(self) -> &'static str {
        match self {
            ScalarType::String => "&str",
            ScalarType::Bytes => "&[u8]",
            other => other.rust_type(),
        }
    }

    /// The parameter type a setter accepts.
    pub fn setter_type(self) -> &'static str {
        match self {
            ScalarType::String => "impl Into<String>",
            ScalarType::Bytes => "impl Into<Vec<u8>>",
            other => other.rust_type(),
        }
    }

    pub fn is_copy(self) -> bool {
        !matches!(self, ScalarType::String | ScalarType::Bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_scalar_keyword_resolves() {
        for name in SCALAR_TYPES {
            assert!(ScalarType::from_name(name).is_some(), "{name} should resolve");
        }
        assert_eq!(ScalarType::from_name("DartTestCase"), None);
    }

    #[test]
    fn test_declaration_matches_proto_syntax() {
        let tests = FieldSchema::new("tests", 2, FieldKind::RepeatedMessage, "DartTestCase");
        assert_eq!(tests.declaration(), "repeated DartTestCase tests = 2;");
        let name = FieldSchema::new("name", 1, FieldKind::Scalar, "string");
        assert_eq!(name.declaration(), "string name = 1;");
    }

    #[test]
    fn test_field_kind_json_names() {
        let kinds: Vec<FieldKind> =
            serde_json::from_str(r#"["scalar", "repeated_message", "map"]"#).unwrap();
        assert_eq!(
            kinds,
            vec![
                FieldKind::Scalar,
                FieldKind::RepeatedMessage,
                FieldKind::Other("map".to_string()),
            ]
        );
    }

    #[test]
    fn test_message_new_rejects_duplicate_ids() {
        let fields = vec![
            FieldSchema::new("name", 1, FieldKind::Scalar, "string"),
            FieldSchema::new("tests", 1, FieldKind::RepeatedMessage, "DartTestCase"),
        ];
        assert!(matches!(
            MessageSchema::new("DartTestGroup", fields),
            Err(DslGenError::SchemaError(_))
        ));
    }

    #[test]
    fn test_message_new_rejects_empty_name() {
        assert!(MessageSchema::new("", Vec::new()).is_err());
    }
}
