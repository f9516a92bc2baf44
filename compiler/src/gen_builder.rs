use crate::{
    classifier::{AccessorSpec, BuilderSpec, Element},
    options::GeneratorOptions,
    types::ScalarType,
    utils::{escape_rust_keyword, to_snake_case},
};

/// Module (and entry point) name for a message, e.g. `dart_test_group`.
pub fn module_name(message: &str) -> String {
    escape_rust_keyword(&to_snake_case(message))
}

/// Path prefix for items generated alongside `target` as seen from the unit
/// of `owner`: empty for self references, `super::<module>::` otherwise.
fn item_prefix(owner: &str, target: &str) -> String {
    if owner == target {
        String::new()
    } else {
        format!("super::{}::", module_name(target))
    }
}

fn message_path(owner: &str, target: &str) -> String {
    format!("{}{}", item_prefix(owner, target), target)
}

fn element_type(owner: &str, element: &Element) -> String {
    match element {
        Element::Scalar(scalar) => scalar.rust_type().to_string(),
        Element::Message(target) => message_path(owner, target),
    }
}

fn storage_type(owner: &str, accessor: &AccessorSpec) -> String {
    match accessor {
        AccessorSpec::Scalar { scalar, .. } => scalar.rust_type().to_string(),
        AccessorSpec::SingularMessage { message, .. } => {
            format!("Option<Box<{}>>", message_path(owner, message))
        }
        AccessorSpec::Repeated { element, .. } => format!("Vec<{}>", element_type(owner, element)),
    }
}

/// Renders a read accessor. `source` is the expression holding the message,
/// `self` on the message type or `self.builder.message()` on the builder.
fn getter(owner: &str, accessor: &AccessorSpec, source: &str) -> String {
    let names = accessor.names();
    let field = &names.ident;
    let mut out = String::new();
    match accessor {
        AccessorSpec::Scalar { scalar, .. } => {
            let body = if scalar.is_copy() {
                format!("{}.{}", source, field)
            } else {
                format!("&{}.{}", source, field)
            };
            out.push_str(&format!("    /// `{}`\n", names.declaration));
            out.push_str(&format!(
                "    pub fn {}(&self) -> {} {{\n        {}\n    }}\n",
                field,
                scalar.borrowed_type(),
                body
            ));
        }
        AccessorSpec::SingularMessage { message, .. } => {
            let path = message_path(owner, message);
            out.push_str(&format!("    /// `{}`\n", names.declaration));
            out.push_str(&format!(
                "    pub fn {}(&self) -> Option<&{}> {{\n        {}.{}.as_deref()\n    }}\n\n",
                field, path, source, field
            ));
            out.push_str(&format!("    /// `{}`\n", names.declaration));
            out.push_str(&format!(
                "    pub fn {}(&self) -> bool {{\n        {}.{}.is_some()\n    }}\n",
                names.hazzer, source, field
            ));
        }
        AccessorSpec::Repeated { element, .. } => {
            out.push_str(&format!("    /// `{}`\n", names.declaration));
            out.push_str(&format!(
                "    pub fn {}(&self) -> &[{}] {{\n        &{}.{}\n    }}\n",
                field,
                element_type(owner, element),
                source,
                field
            ));
        }
    }
    out
}

fn scalar_assignment(scalar: ScalarType) -> &'static str {
    match scalar {
        ScalarType::String | ScalarType::Bytes => "value.into()",
        _ => "value",
    }
}

/// Renders the mutating accessors the builder exposes for one field.
fn mutators(owner: &str, accessor: &AccessorSpec) -> String {
    let names = accessor.names();
    let field = &names.ident;
    let doc = format!("    /// `{}`\n", names.declaration);
    let mut out = String::new();
    match accessor {
        AccessorSpec::Scalar { scalar, .. } => {
            out.push_str(&doc);
            out.push_str(&format!(
                "    pub fn {}(&mut self, value: {}) -> &mut Self {{\n        self.builder.message_mut().{} = {};\n        self\n    }}\n\n",
                names.setter,
                scalar.setter_type(),
                field,
                scalar_assignment(*scalar)
            ));
            out.push_str(&doc);
            out.push_str(&format!(
                "    pub fn {}(&mut self) -> &mut Self {{\n        self.builder.message_mut().{} = Default::default();\n        self\n    }}\n",
                names.clearer, field
            ));
        }
        AccessorSpec::SingularMessage { message, .. } => {
            let prefix = item_prefix(owner, message);
            out.push_str(&doc);
            out.push_str(&format!(
                "    pub fn {}(&mut self, value: {}{}) -> &mut Self {{\n        self.builder.message_mut().{} = Some(Box::new(value));\n        self\n    }}\n\n",
                names.setter, prefix, message, field
            ));
            out.push_str(&doc);
            out.push_str(&format!(
                "    pub fn {}(&mut self, block: impl FnOnce(&mut {}Dsl)) -> &mut Self {{\n        let value = {}{}(block);\n        self.{}(value)\n    }}\n\n",
                names.with,
                prefix,
                prefix,
                module_name(message),
                names.setter
            ));
            out.push_str(&doc);
            out.push_str(&format!(
                "    pub fn {}(&mut self) -> &mut Self {{\n        self.builder.message_mut().{} = None;\n        self\n    }}\n",
                names.clearer, field
            ));
        }
        AccessorSpec::Repeated { element, proxy, .. } => {
            out.push_str(&doc);
            out.push_str(&format!(
                "    pub fn {}(&mut self) -> DslList<'_, {}, {}> {{\n        DslList::new(&mut self.builder.message_mut().{})\n    }}\n",
                field,
                element_type(owner, element),
                proxy,
                field
            ));
        }
    }
    out
}

fn has_repeated(spec: &BuilderSpec) -> bool {
    spec.accessors
        .iter()
        .any(|a| matches!(a, AccessorSpec::Repeated { .. }))
}

pub fn generate_imports(spec: &BuilderSpec, options: &GeneratorOptions) -> String {
    if has_repeated(spec) {
        format!("use {}::{{Builder, DslList, DslProxy, Message}};\n", options.runtime_crate)
    } else {
        format!("use {}::{{Builder, Message}};\n", options.runtime_crate)
    }
}

/// The immutable message type. Fields stay private so a finalized value can
/// only be read.
pub fn generate_struct(spec: &BuilderSpec, options: &GeneratorOptions) -> String {
    let owner = &spec.message;
    let mut lines = Vec::new();

    lines.push(format!("/// `message {}`", owner));
    if options.derive_serde {
        lines.push("#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]".to_string());
        lines.push("#[serde(default)]".to_string());
    } else {
        lines.push("#[derive(Debug, Clone, PartialEq, Default)]".to_string());
    }
    lines.push(format!("pub struct {} {{", owner));
    for accessor in &spec.accessors {
        if options.derive_serde {
            if let AccessorSpec::SingularMessage { .. } = accessor {
                lines.push("    #[serde(skip_serializing_if = \"Option::is_none\")]".to_string());
            }
        }
        lines.push(format!("    {}: {},", accessor.names().ident, storage_type(owner, accessor)));
    }
    lines.push("}".to_string());

    lines.join("\n") + "\n"
}

/// `Message` impl, read accessors and builder constructors.
pub fn generate_message_impl(spec: &BuilderSpec) -> String {
    let owner = &spec.message;
    let mut out = String::new();

    out.push_str(&format!(
        "impl Message for {} {{\n    const NAME: &'static str = \"{}\";\n}}\n\n",
        owner, owner
    ));

    out.push_str(&format!("impl {} {{\n", owner));
    for accessor in &spec.accessors {
        out.push_str(&getter(owner, accessor, "self"));
        out.push('\n');
    }
    out.push_str(&format!(
        "    pub fn new_builder() -> Builder<{}> {{\n        Builder::new()\n    }}\n\n",
        owner
    ));
    out.push_str(&format!(
        "    pub fn to_builder(&self) -> Builder<{}> {{\n        Builder::from_message(self)\n    }}\n",
        owner
    ));
    out.push_str("}\n");
    out
}

/// The constructor-like entry point: fresh builder, caller block, finalize.
pub fn generate_entry_point(spec: &BuilderSpec) -> String {
    let owner = &spec.message;
    format!(
        "/// Builds a `{owner}` by applying `block` to a fresh builder.\n\
         pub fn {function}(block: impl FnOnce(&mut Dsl)) -> {owner} {{\n    \
             let mut dsl = Dsl::_create({owner}::new_builder());\n    \
             block(&mut dsl);\n    \
             dsl._build()\n\
         }}\n",
        owner = owner,
        function = module_name(owner),
    )
}

/// One uninhabited tag type per repeated field.
pub fn generate_proxies(spec: &BuilderSpec) -> String {
    let mut out = String::new();
    for accessor in &spec.accessors {
        if let AccessorSpec::Repeated { names, proxy, .. } = accessor {
            out.push_str(&format!(
                "/// Tags the `DslList` of `{}`.\npub enum {} {{}}\n\nimpl DslProxy for {} {{}}\n\n",
                names.ident, proxy, proxy
            ));
        }
    }
    out
}

/// The scoped builder handed to caller blocks.
pub fn generate_dsl(spec: &BuilderSpec) -> String {
    let owner = &spec.message;
    let mut out = String::new();

    out.push_str(&format!(
        "/// Scoped builder for `{}`.\npub struct Dsl {{\n    builder: Builder<{}>,\n}}\n\n",
        owner, owner
    ));
    out.push_str("impl Dsl {\n");
    out.push_str(&format!(
        "    #[doc(hidden)]\n    pub fn _create(builder: Builder<{}>) -> Self {{\n        Dsl {{ builder }}\n    }}\n\n",
        owner
    ));
    out.push_str(&format!(
        "    #[doc(hidden)]\n    pub fn _build(mut self) -> {} {{\n        self.builder.finalize()\n    }}\n",
        owner
    ));

    for accessor in &spec.accessors {
        out.push('\n');
        if !matches!(accessor, AccessorSpec::Repeated { .. }) {
            out.push_str(&getter(owner, accessor, "self.builder.message()"));
            out.push('\n');
        }
        out.push_str(&mutators(owner, accessor));
    }
    out.push_str("}\n");
    out
}

/// Everything for one message except the copy helper.
pub fn generate_builder(spec: &BuilderSpec, options: &GeneratorOptions) -> String {
    [
        generate_imports(spec, options),
        generate_struct(spec, options),
        generate_message_impl(spec),
        generate_entry_point(spec),
        generate_proxies(spec) + &generate_dsl(spec),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        classifier::classify_message,
        types::{FieldKind, FieldSchema, MessageSchema},
    };

    fn group_spec() -> BuilderSpec {
        let message = MessageSchema::new("DartTestGroup", vec![
            FieldSchema::new("name", 1, FieldKind::Scalar, "string"),
            FieldSchema::new("tests", 2, FieldKind::RepeatedMessage, "DartTestCase"),
            FieldSchema::new("groups", 3, FieldKind::RepeatedMessage, "DartTestGroup"),
        ])
        .unwrap();
        classify_message(&message).unwrap()
    }

    #[test]
    fn test_struct_uses_sibling_paths() {
        let code = generate_struct(&group_spec(), &GeneratorOptions::default());
        assert!(code.contains("    name: String,\n"));
        assert!(code.contains("    tests: Vec<super::dart_test_case::DartTestCase>,\n"));
        assert!(code.contains("    groups: Vec<DartTestGroup>,\n"));
        assert!(!code.contains("serde"));
    }

    #[test]
    fn test_serde_derives_are_optional() {
        let code = generate_struct(&group_spec(), &GeneratorOptions::default().derive_serde(true));
        assert!(code.contains("serde::Serialize, serde::Deserialize"));
        assert!(code.contains("#[serde(default)]"));
    }

    #[test]
    fn test_entry_point_shape() {
        let code = generate_entry_point(&group_spec());
        assert_eq!(
            code,
            "/// Builds a `DartTestGroup` by applying `block` to a fresh builder.\n\
             pub fn dart_test_group(block: impl FnOnce(&mut Dsl)) -> DartTestGroup {\n    \
                 let mut dsl = Dsl::_create(DartTestGroup::new_builder());\n    \
                 block(&mut dsl);\n    \
                 dsl._build()\n\
             }\n"
        );
    }

    #[test]
    fn test_each_repeated_field_gets_a_proxy() {
        let code = generate_proxies(&group_spec());
        assert!(code.contains("pub enum TestsProxy {}"));
        assert!(code.contains("impl DslProxy for GroupsProxy {}"));
    }

    #[test]
    fn test_dsl_accessors() {
        let code = generate_dsl(&group_spec());
        assert!(code.contains("pub fn set_name(&mut self, value: impl Into<String>) -> &mut Self {"));
        assert!(code.contains("self.builder.message_mut().name = Default::default();"));
        assert!(code.contains(
            "pub fn tests(&mut self) -> DslList<'_, super::dart_test_case::DartTestCase, TestsProxy> {"
        ));
        assert!(code.contains("pub fn groups(&mut self) -> DslList<'_, DartTestGroup, GroupsProxy> {"));
    }

    #[test]
    fn test_singular_message_accessors() {
        let message = MessageSchema::new("DartTestCase", vec![
            FieldSchema::new("group", 1, FieldKind::Message, "DartTestGroup"),
            FieldSchema::new("retries", 2, FieldKind::Scalar, "uint32"),
        ])
        .unwrap();
        let spec = classify_message(&message).unwrap();

        let code = generate_dsl(&spec);
        assert!(code.contains("pub fn set_group(&mut self, value: super::dart_test_group::DartTestGroup) -> &mut Self {"));
        assert!(code.contains("pub fn set_group_with(&mut self, block: impl FnOnce(&mut super::dart_test_group::Dsl)) -> &mut Self {"));
        assert!(code.contains("let value = super::dart_test_group::dart_test_group(block);"));
        assert!(code.contains("self.builder.message_mut().group = None;"));
        assert!(code.contains("pub fn retries(&self) -> u32 {\n        self.builder.message().retries\n    }"));

        let imports = generate_imports(&spec, &GeneratorOptions::default());
        assert_eq!(imports, "use protodsl::{Builder, Message};\n");
    }
}
