use std::{fs, path::Path};

use tracing::debug;

use crate::{
    types::SchemaFile,
    tokenizer::tokenize_schema,
    parser::parse_schema,
    traits::SchemaLoader,
    error::DslGenError,
};

/// Parse `.proto` subset text into a `SchemaFile`.
/// Returns `Err(DslGenError)` if tokenization or parsing fails; the result is
/// not verified yet.
pub fn compile_schema(text: &str) -> Result<SchemaFile, DslGenError> {
    let tokens = tokenize_schema(text)?;
    parse_schema(&tokens)
}

/// Decode a JSON schema description into a `SchemaFile`.
pub fn decode_json_schema(text: &str) -> Result<SchemaFile, DslGenError> {
    Ok(serde_json::from_str(text)?)
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name().map(|name| name.to_string_lossy().into_owned())
}

/// Loads the `.proto` subset.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProtoLoader;

impl SchemaLoader for ProtoLoader {
    fn load_schemas(&self, path: &Path) -> Result<SchemaFile, DslGenError> {
        let text = fs::read_to_string(path)?;
        let mut schema = compile_schema(&text)?;
        schema.source = file_name(path);
        debug!(path = %path.display(), messages = schema.messages.len(), "loaded proto schema");
        Ok(schema)
    }
}

/// Loads a serde JSON rendering of `SchemaFile`.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonLoader;

impl SchemaLoader for JsonLoader {
    fn load_schemas(&self, path: &Path) -> Result<SchemaFile, DslGenError> {
        let text = fs::read_to_string(path)?;
        let mut schema = decode_json_schema(&text)?;
        if schema.source.is_none() {
            schema.source = file_name(path);
        }
        debug!(path = %path.display(), messages = schema.messages.len(), "loaded JSON schema");
        Ok(schema)
    }
}

/// Loads `path` with the loader matching its extension: `.json` files go
/// through [JsonLoader], everything else through [ProtoLoader].
pub fn load_schemas(path: &Path) -> Result<SchemaFile, DslGenError> {
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if is_json {
        JsonLoader.load_schemas(path)
    } else {
        ProtoLoader.load_schemas(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FieldKind;
    use std::io::Write;

    #[test]
    fn test_load_proto_sets_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contracts.proto");
        fs::write(&path, "package patrol;\nmessage DartTestCase { string name = 1; }\n").unwrap();

        let schema = load_schemas(&path).unwrap();
        assert_eq!(schema.source.as_deref(), Some("contracts.proto"));
        assert_eq!(schema.messages[0].name, "DartTestCase");
    }

    #[test]
    fn test_load_json() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{
                "package": "patrol",
                "messages": [
                    {{
                        "name": "DartTestGroup",
                        "fields": [
                            {{ "name": "name",  "id": 1, "kind": "scalar",           "value_type": "string" }},
                            {{ "name": "tests", "id": 2, "kind": "repeated_message", "value_type": "DartTestGroup" }}
                        ]
                    }}
                ]
            }}"#
        )
        .unwrap();

        let schema = load_schemas(file.path()).unwrap();
        let group = &schema.messages[0];
        assert_eq!(group.fields[1].kind, FieldKind::RepeatedMessage);
        assert!(schema.source.unwrap().ends_with(".json"));
    }

    #[test]
    fn test_bad_json_is_reported() {
        assert!(matches!(decode_json_schema("{ \"messages\": 3 }"), Err(DslGenError::Json(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_schemas(Path::new("/nonexistent/contracts.proto")).unwrap_err();
        assert!(matches!(err, DslGenError::Io(_)));
    }
}
