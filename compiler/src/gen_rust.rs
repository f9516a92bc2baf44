use tracing::{debug, warn};

use crate::{
    classifier::classify_message,
    error::DslGenError,
    gen_builder::{generate_builder, module_name},
    gen_copy::generate_copy,
    options::GeneratorOptions,
    types::{MessageSchema, SchemaFile},
    verifier::verify_message,
};

/// One generated source file for one message.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedUnit {
    pub message:   String,
    /// Module name and entry point name, e.g. `dart_test_group`.
    pub module:    String,
    pub file_name: String,
    pub code:      String,
}

/// Generation outcome for one message, keyed by the message name.
pub type UnitResult = (String, Result<GeneratedUnit, DslGenError>);

pub fn render_header(options: &GeneratorOptions) -> String {
    let mut header = String::from("// Generated by protodsl. DO NOT EDIT!\n");
    if let Some(source) = &options.source {
        header.push_str(&format!("// source: {}\n", source));
    }
    header
}

/// The body of a unit: everything but the header.
fn render_body(message: &MessageSchema, options: &GeneratorOptions) -> Result<String, DslGenError> {
    let spec = classify_message(message)?;
    Ok(format!("{}\n{}", generate_builder(&spec, options), generate_copy(&spec)))
}

/// Verifies, classifies and renders a single message of `schema`.
pub fn generate_unit(
    message: &MessageSchema,
    schema:  &SchemaFile,
    options: &GeneratorOptions,
) -> Result<GeneratedUnit, DslGenError> {
    verify_message(message, schema)?;
    let body = render_body(message, options)?;
    let module = module_name(&message.name);
    debug!(message = %message.name, module = %module, "generated unit");

    Ok(GeneratedUnit {
        message:   message.name.clone(),
        file_name: format!("{}.rs", module),
        module,
        code:      format!("{}\n{}", render_header(options), body),
    })
}

/// Generates one unit per message, in schema order. A message that fails
/// does not stop the others.
pub fn generate_units(schema: &SchemaFile, options: &GeneratorOptions) -> Vec<UnitResult> {
    schema
        .messages
        .iter()
        .map(|message| {
            let result = generate_unit(message, schema, options);
            if let Err(err) = &result {
                warn!(message = %message.name, error = %err, "skipping message");
            }
            (message.name.clone(), result)
        })
        .collect()
}

/// `mod.rs` for a directory of units: one `pub mod` per unit plus
/// re-exports of each message type and entry point.
pub fn render_module_index(units: &[GeneratedUnit], options: &GeneratorOptions) -> String {
    let mut rust_code = vec![render_header(options)];

    for unit in units {
        rust_code.push(format!("pub mod {};", unit.module));
    }
    rust_code.push("".to_string());
    for unit in units {
        rust_code.push(format!("pub use {}::{{{}, {}}};", unit.module, unit.module, unit.message));
    }

    rust_code.join("\n") + "\n"
}

fn indent(code: &str) -> String {
    code.lines()
        .map(|line| if line.is_empty() { String::new() } else { format!("    {}", line) })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders every message into a single source string with one inline module
/// per message, failing on the first message that cannot be generated.
pub fn compile_schema_to_rust(schema: &SchemaFile, options: &GeneratorOptions) -> Result<String, DslGenError> {
    let mut rust_code = vec![render_header(options)];
    let mut exports = Vec::new();

    for message in &schema.messages {
        verify_message(message, schema)?;
        let module = module_name(&message.name);
        let body = render_body(message, options)?;
        rust_code.push(format!("pub mod {} {{\n{}\n}}\n", module, indent(&body)));
        exports.push(format!("pub use {}::{{{}, {}}};", module, module, message.name));
    }

    rust_code.push(exports.join("\n"));
    Ok(rust_code.join("\n") + "\n")
}
