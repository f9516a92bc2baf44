// Generated by protodsl. DO NOT EDIT!
// source: contracts.proto

use protodsl::{Builder, DslList, DslProxy, Message};

/// `message DartTestGroup`
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DartTestGroup {
    name: String,
    tests: Vec<super::dart_test_case::DartTestCase>,
    groups: Vec<DartTestGroup>,
}

impl Message for DartTestGroup {
    const NAME: &'static str = "DartTestGroup";
}

impl DartTestGroup {
    /// `string name = 1;`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `repeated DartTestCase tests = 2;`
    pub fn tests(&self) -> &[super::dart_test_case::DartTestCase] {
        &self.tests
    }

    /// `repeated DartTestGroup groups = 3;`
    pub fn groups(&self) -> &[DartTestGroup] {
        &self.groups
    }

    pub fn new_builder() -> Builder<DartTestGroup> {
        Builder::new()
    }

    pub fn to_builder(&self) -> Builder<DartTestGroup> {
        Builder::from_message(self)
    }
}

/// Builds a `DartTestGroup` by applying `block` to a fresh builder.
pub fn dart_test_group(block: impl FnOnce(&mut Dsl)) -> DartTestGroup {
    let mut dsl = Dsl::_create(DartTestGroup::new_builder());
    block(&mut dsl);
    dsl._build()
}

/// Tags the `DslList` of `tests`.
pub enum TestsProxy {}

impl DslProxy for TestsProxy {}

/// Tags the `DslList` of `groups`.
pub enum GroupsProxy {}

impl DslProxy for GroupsProxy {}

/// Scoped builder for `DartTestGroup`.
pub struct Dsl {
    builder: Builder<DartTestGroup>,
}

impl Dsl {
    #[doc(hidden)]
    pub fn _create(builder: Builder<DartTestGroup>) -> Self {
        Dsl { builder }
    }

    #[doc(hidden)]
    pub fn _build(mut self) -> DartTestGroup {
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

    /// `repeated DartTestCase tests = 2;`
    pub fn tests(&mut self) -> DslList<'_, super::dart_test_case::DartTestCase, TestsProxy> {
        DslList::new(&mut self.builder.message_mut().tests)
    }

    /// `repeated DartTestGroup groups = 3;`
    pub fn groups(&mut self) -> DslList<'_, DartTestGroup, GroupsProxy> {
        DslList::new(&mut self.builder.message_mut().groups)
    }
}

impl DartTestGroup {
    /// Returns a modified copy; `self` is left untouched.
    pub fn copy(&self, block: impl FnOnce(&mut Dsl)) -> DartTestGroup {
        let mut dsl = Dsl::_create(self.to_builder());
        block(&mut dsl);
        dsl._build()
    }
}
