use crate::classifier::BuilderSpec;

/// Renders `copy`, which seeds a builder with a deep copy of `self`, applies
/// the caller block and finalizes a new value.
pub fn generate_copy(spec: &BuilderSpec) -> String {
    let owner = &spec.message;
    let mut lines = Vec::new();

    lines.push(format!("impl {} {{", owner));
    lines.push("    /// Returns a modified copy; `self` is left untouched.".to_string());
    lines.push(format!(
        "    pub fn copy(&self, block: impl FnOnce(&mut Dsl)) -> {} {{",
        owner
    ));
    lines.push("        let mut dsl = Dsl::_create(self.to_builder());".to_string());
    lines.push("        block(&mut dsl);".to_string());
    lines.push("        dsl._build()".to_string());
    lines.push("    }".to_string());
    lines.push("}".to_string());

    lines.join("\n") + "\n"
}
