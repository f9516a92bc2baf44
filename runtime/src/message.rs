use std::fmt::Debug;

/// Implemented by every generated message type.
///
/// The zero value of a message is its `Default`: empty strings, zero numbers,
/// empty repeated fields and absent sub-messages. Equality is structural.
pub trait Message: Clone + Debug + Default + PartialEq {
    /// The schema name of the message, e.g. `"DartTestGroup"`.
    const NAME: &'static str;
}

/// Marker for the uninhabited tag types that distinguish one repeated field's
/// [DslList](crate::DslList) from another's.
pub trait DslProxy {}
