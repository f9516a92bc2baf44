/// Knobs for code generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Path of the crate generated code imports the runtime from.
    pub runtime_crate: String,
    /// Also derive `serde::Serialize` and `serde::Deserialize` on messages.
    pub derive_serde:  bool,
    /// Schema file name written into the generated header.
    pub source:        Option<String>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        GeneratorOptions {
            runtime_crate: "protodsl".to_string(),
            derive_serde:  false,
            source:        None,
        }
    }
}

impl GeneratorOptions {
    pub fn runtime_crate(mut self, path: impl Into<String>) -> Self {
        self.runtime_crate = path.into();
        self
    }

    pub fn derive_serde(mut self, enabled: bool) -> Self {
        self.derive_serde = enabled;
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}
