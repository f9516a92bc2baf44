use clap::{ArgAction, Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use protodsl::compiler::classifier::classify_message;
use protodsl::compiler::verifier::verify_message;
use protodsl::{
    compile_schema_to_rust, generate_units, load_schemas, render_module_index, schema_to_json,
    DslGenError, GeneratorOptions,
};

#[derive(Parser)]
#[command(name = "pdsl")]
#[command(about = "Generate typed builder DSLs from message schemas", long_about = None)]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace); `RUST_LOG` takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Rust units from a `.proto` or `.json` schema
    Generate {
        /// Input schema file
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory (or file with `--single-file`); prints to stdout if omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Crate path generated code imports the runtime from
        #[arg(long, default_value = "protodsl")]
        runtime_crate: String,

        /// Derive serde `Serialize`/`Deserialize` on generated messages
        #[arg(long)]
        serde: bool,

        /// Render every message into one file with inline modules
        #[arg(long)]
        single_file: bool,
    },

    /// Verify and classify every message, printing one line per message
    Check {
        /// Input schema file
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Print the loaded schema as JSON
    Inspect {
        /// Input schema file
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn failed(count: usize) -> DslGenError {
    DslGenError::SchemaError(format!("{} message(s) could not be generated", count))
}

fn main() -> Result<(), DslGenError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(cli.command)
}

fn run(command: Commands) -> Result<(), DslGenError> {
    match command {
        Commands::Generate { input, output, runtime_crate, serde, single_file } => {
            let schema = load_schemas(&input)?;
            let mut options = GeneratorOptions::default()
                .runtime_crate(runtime_crate)
                .derive_serde(serde);
            options.source = schema.source.clone();

            if single_file {
                let rust_code = compile_schema_to_rust(&schema, &options)?;
                match output {
                    Some(out_path) => {
                        fs::write(&out_path, &rust_code)?;
                        info!("Generated Rust code written to {}", out_path.display());
                    }
                    None => println!("{}", rust_code),
                }
                return Ok(());
            }

            let mut units = Vec::new();
            let mut failures = 0;
            for (message, result) in generate_units(&schema, &options) {
                match result {
                    Ok(unit) => units.push(unit),
                    Err(err) => {
                        error!("{}: {}", message, err);
                        failures += 1;
                    }
                }
            }

            match output {
                Some(out_dir) => {
                    fs::create_dir_all(&out_dir)?;
                    for unit in &units {
                        let path = out_dir.join(&unit.file_name);
                        fs::write(&path, &unit.code)?;
                        info!("Wrote {} to {}", unit.message, path.display());
                    }
                    fs::write(out_dir.join("mod.rs"), render_module_index(&units, &options))?;
                    info!("Generated {} unit(s) in {}", units.len(), out_dir.display());
                }
                None => {
                    for unit in &units {
                        println!("// ---- {} ----\n{}", unit.file_name, unit.code);
                    }
                }
            }

            if failures > 0 {
                return Err(failed(failures));
            }
            Ok(())
        }

        Commands::Check { input } => {
            let schema = load_schemas(&input)?;
            let mut failures = 0;
            for message in &schema.messages {
                let checked = verify_message(message, &schema).and_then(|_| classify_message(message));
                match checked {
                    Ok(spec) => {
                        let shapes: Vec<String> = spec
                            .accessors
                            .iter()
                            .map(|a| format!("{}[{}]", a.names().ident, a.operations().join(",")))
                            .collect();
                        println!("ok    {} {}", message.name, shapes.join(" "));
                    }
                    Err(err) => {
                        println!("error {} {}", message.name, err);
                        failures += 1;
                    }
                }
            }
            if failures > 0 {
                return Err(failed(failures));
            }
            Ok(())
        }

        Commands::Inspect { input } => {
            println!("{}", schema_to_json(&input)?);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_flags() {
        let cli = Cli::parse_from(["pdsl", "-v", "generate", "-i", "contracts.proto", "--serde", "--runtime-crate", "crate::dsl"]);
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::Generate { input, output, runtime_crate, serde, single_file } => {
                assert_eq!(input, PathBuf::from("contracts.proto"));
                assert!(output.is_none());
                assert_eq!(runtime_crate, "crate::dsl");
                assert!(serde);
                assert!(!single_file);
            }
            _ => panic!("expected generate"),
        }
    }

    fn generate_into(dir: &std::path::Path, schema: &str) -> (Result<(), DslGenError>, PathBuf) {
        let input = dir.join("contracts.proto");
        fs::write(&input, schema).unwrap();
        let out = dir.join("generated");
        let cli = Cli::parse_from([
            "pdsl", "generate",
            "-i", input.to_str().unwrap(),
            "-o", out.to_str().unwrap(),
        ]);
        (run(cli.command), out)
    }

    #[test]
    fn test_generate_writes_units_and_index() {
        let dir = tempfile::tempdir().unwrap();
        let (result, out) = generate_into(
            dir.path(),
            "package patrol;\n\
             message DartTestCase { string name = 1; }\n\
             message DartTestGroup { repeated DartTestCase tests = 1; }\n",
        );
        result.unwrap();

        assert!(out.join("dart_test_case.rs").exists());
        assert!(out.join("dart_test_group.rs").exists());
        let index = fs::read_to_string(out.join("mod.rs")).unwrap();
        assert!(index.contains("pub mod dart_test_case;"));
        assert!(index.contains("pub use dart_test_group::{dart_test_group, DartTestGroup};"));
    }

    #[test]
    fn test_generate_keeps_siblings_of_a_failing_message() {
        let dir = tempfile::tempdir().unwrap();
        let (result, out) = generate_into(
            dir.path(),
            "enum Status { OK = 0; }\n\
             message Report { Status status = 1; }\n\
             message DartTestCase { string name = 1; }\n",
        );

        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "Schema error: 1 message(s) could not be generated");
        assert!(out.join("dart_test_case.rs").exists());
        assert!(!out.join("report.rs").exists());
        let index = fs::read_to_string(out.join("mod.rs")).unwrap();
        assert!(index.contains("pub mod dart_test_case;"));
        assert!(!index.contains("report"));
    }
}
