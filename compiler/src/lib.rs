//! protodsl-compiler
//!
//! This crate implements:
//!  1) A tokenizer + parser for a `.proto` subset, and a JSON schema loader,
//!  2) A schema verifier (duplicate ids, undefined types, reserved names, etc.),
//!  3) A field classifier deciding each field's builder surface,
//!  4) Code generation: one Rust unit per message with an immutable type, a
//!     scoped builder entry point and a `copy` helper,
//!  5) Error types (`DslGenError`) and the `SchemaLoader` trait.

pub mod error;
pub mod types;
pub mod utils;
pub mod tokenizer;
pub mod parser;
pub mod verifier;
pub mod classifier;
pub mod options;
pub mod compiler;
pub mod gen_builder;
pub mod gen_copy;
pub mod gen_rust;
pub mod traits;

pub use compiler::{compile_schema, decode_json_schema, load_schemas, JsonLoader, ProtoLoader};
pub use gen_rust::{compile_schema_to_rust, generate_units, render_module_index, GeneratedUnit};
pub use options::GeneratorOptions;
