// Generated by protodsl. DO NOT EDIT!
// source: contracts.proto

pub mod dart_test_case;
pub mod dart_test_group;
pub mod list_dart_tests_response;

pub use dart_test_case::{dart_test_case, DartTestCase};
pub use dart_test_group::{dart_test_group, DartTestGroup};
pub use list_dart_tests_response::{list_dart_tests_response, ListDartTestsResponse};
