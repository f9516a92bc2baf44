//! protodsl
//!
//! Facade crate for generated message DSLs.
//!
//! - Runtime items generated code imports (`Builder`, `DslList`, `DslProxy`, `Message`)
//! - Compiler entry points for build scripts (`load_schemas`, `generate_units`, ...)

pub use protodsl_runtime::{Builder, DslError, DslList, DslProxy, Message};
pub use protodsl_compiler::error::DslGenError;
pub use protodsl_compiler::{
    compile_schema_to_rust, generate_units, load_schemas, render_module_index, GeneratedUnit,
    GeneratorOptions,
};

use std::path::Path;

/// Load a schema file and render it as pretty-printed JSON.
pub fn schema_to_json(path: &Path) -> Result<String, DslGenError> {
    let schema = load_schemas(path)?;
    Ok(serde_json::to_string_pretty(&schema)?)
}

/// Generate the units for `input` and write them, plus a `mod.rs`, into
/// `out_dir`. Intended for build scripts; fails on the first message that
/// cannot be generated.
pub fn generate_to_dir(input: &Path, out_dir: &Path, options: &GeneratorOptions) -> Result<Vec<GeneratedUnit>, DslGenError> {
    let schema = load_schemas(input)?;
    let mut options = options.clone();
    if options.source.is_none() {
        options.source = schema.source.clone();
    }

    let units = generate_units(&schema, &options)
        .into_iter()
        .map(|(_, unit)| unit)
        .collect::<Result<Vec<_>, _>>()?;

    std::fs::create_dir_all(out_dir)?;
    for unit in &units {
        std::fs::write(out_dir.join(&unit.file_name), &unit.code)?;
    }
    std::fs::write(out_dir.join("mod.rs"), render_module_index(&units, &options))?;
    Ok(units)
}

pub mod runtime {
    pub use protodsl_runtime::*;
}

pub mod compiler {
    pub use protodsl_compiler::*;
}

pub mod error {
    pub use protodsl_compiler::error::DslGenError;
    pub use protodsl_runtime::DslError;
}
