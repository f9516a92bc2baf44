// Generated by protodsl. DO NOT EDIT!
// source: contracts.proto

use protodsl::{Builder, DslList, DslProxy, Message};

/// `message DartTestCase`
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DartTestCase {
    name: String,
    skip: bool,
    tags: Vec<String>,
}

impl Message for DartTestCase {
    const NAME: &'static str = "DartTestCase";
}

impl DartTestCase {
    /// `string name = 1;`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `bool skip = 2;`
    pub fn skip(&self) -> bool {
        self.skip
    }

    /// `repeated string tags = 3;`
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn new_builder() -> Builder<DartTestCase> {
        Builder::new()
    }

    pub fn to_builder(&self) -> Builder<DartTestCase> {
        Builder::from_message(self)
    }
}

/// Builds a `DartTestCase` by applying `block` to a fresh builder.
pub fn dart_test_case(block: impl FnOnce(&mut Dsl)) -> DartTestCase {
    let mut dsl = Dsl::_create(DartTestCase::new_builder());
    block(&mut dsl);
    dsl._build()
}

/// Tags the `DslList` of `tags`.
pub enum TagsProxy {}

impl DslProxy for TagsProxy {}

/// Scoped builder for `DartTestCase`.
pub struct Dsl {
    builder: Builder<DartTestCase>,
}

impl Dsl {
    #[doc(hidden)]
    pub fn _create(builder: Builder<DartTestCase>) -> Self {
        Dsl { builder }
    }

    #[doc(hidden)]
    pub fn _build(mut self) -> DartTestCase {
        self.builder.finalize()
    }

    /// `string name = 1;`
    pub fn name(&self) -> &str {
        &self.builder.message().name
    }

    /// `string name = 1;`
    pub fn set_name(&mut self, value: impl Into<String>) -> &mut Self {
        self.builder.message_mut().name = value.into();
        self
    }

    /// `string name = 1;`
    pub fn clear_name(&mut self) -> &mut Self {
        self.builder.message_mut().name = Default::default();
        self
    }

    /// `bool skip = 2;`
    pub fn skip(&self) -> bool {
        self.builder.message().skip
    }

    /// `bool skip = 2;`
    pub fn set_skip(&mut self, value: bool) -> &mut Self {
        self.builder.message_mut().skip = value;
        self
    }

    /// `bool skip = 2;`
    pub fn clear_skip(&mut self) -> &mut Self {
        self.builder.message_mut().skip = Default::default();
        self
    }

    /// `repeated string tags = 3;`
    pub fn tags(&mut self) -> DslList<'_, String, TagsProxy> {
        DslList::new(&mut self.builder.message_mut().tags)
    }
}

impl DartTestCase {
    /// Returns a modified copy; `self` is left untouched.
    pub fn copy(&self, block: impl FnOnce(&mut Dsl)) -> DartTestCase {
        let mut dsl = Dsl::_create(self.to_builder());
        block(&mut dsl);
        dsl._build()
    }
}
