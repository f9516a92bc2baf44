use std::path::Path;

use crate::{error::DslGenError, types::SchemaFile};

/// Anything that can turn a schema file on disk into resolved messages.
pub trait SchemaLoader {
    fn load_schemas(&self, path: &Path) -> Result<SchemaFile, DslGenError>;
}
