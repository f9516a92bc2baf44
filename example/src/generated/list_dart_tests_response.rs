// Generated by protodsl. DO NOT EDIT!
// source: contracts.proto

use protodsl::{Builder, Message};

/// `message ListDartTestsResponse`
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ListDartTestsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    group: Option<Box<super::dart_test_group::DartTestGroup>>,
}

impl Message for ListDartTestsResponse {
    const NAME: &'static str = "ListDartTestsResponse";
}

impl ListDartTestsResponse {
    /// `DartTestGroup group = 1;`
    pub fn group(&self) -> Option<&super::dart_test_group::DartTestGroup> {
        self.group.as_deref()
    }

    /// `DartTestGroup group = 1;`
    pub fn has_group(&self) -> bool {
        self.group.is_some()
    }

    pub fn new_builder() -> Builder<ListDartTestsResponse> {
        Builder::new()
    }

    pub fn to_builder(&self) -> Builder<ListDartTestsResponse> {
        Builder::from_message(self)
    }
}

/// Builds a `ListDartTestsResponse` by applying `block` to a fresh builder.
pub fn list_dart_tests_response(block: impl FnOnce(&mut Dsl)) -> ListDartTestsResponse {
    let mut dsl = Dsl::_create(ListDartTestsResponse::new_builder());
    block(&mut dsl);
    dsl._build()
}

/// Scoped builder for `ListDartTestsResponse`.
pub struct Dsl {
    builder: Builder<ListDartTestsResponse>,
}

impl Dsl {
    #[doc(hidden)]
    pub fn _create(builder: Builder<ListDartTestsResponse>) -> Self {
        Dsl { builder }
    }

    #[doc(hidden)]
    pub fn _build(mut self) -> ListDartTestsResponse {
        self.builder.finalize()
    }

    /// `DartTestGroup group = 1;`
    pub fn group(&self) -> Option<&super::dart_test_group::DartTestGroup> {
        self.builder.message().group.as_deref()
    }

    /// `DartTestGroup group = 1;`
    pub fn has_group(&self) -> bool {
        self.builder.message().group.is_some()
    }

    /// `DartTestGroup group = 1;`
    pub fn set_group(&mut self, value: super::dart_test_group::DartTestGroup) -> &mut Self {
        self.builder.message_mut().group = Some(Box::new(value));
        self
    }

    /// `DartTestGroup group = 1;`
    pub fn set_group_with(&mut self, block: impl FnOnce(&mut super::dart_test_group::Dsl)) -> &mut Self {
        let value = super::dart_test_group::dart_test_group(block);
        self.set_group(value)
    }

    /// `DartTestGroup group = 1;`
    pub fn clear_group(&mut self) -> &mut Self {
        self.builder.message_mut().group = None;
        self
    }
}

impl ListDartTestsResponse {
    /// Returns a modified copy; `self` is left untouched.
    pub fn copy(&self, block: impl FnOnce(&mut Dsl)) -> ListDartTestsResponse {
        let mut dsl = Dsl::_create(self.to_builder());
        block(&mut dsl);
        dsl._build()
    }
}
