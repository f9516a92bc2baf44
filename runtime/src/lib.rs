//! Runtime support for message DSLs generated by `protodsl`.
//!
//! Generated code only ever talks to the items in this crate: every message
//! type implements [Message], the generated `Dsl` wraps a single-use
//! [Builder], and repeated fields are edited through a [DslList] tagged with
//! a per-field [DslProxy] type.
//!
//! ```
//! use protodsl_runtime::*;
//!
//! #[derive(Debug, Clone, PartialEq, Default)]
//! struct Group {
//!     name: String,
//!     tags: Vec<String>,
//! }
//!
//! impl Message for Group {
//!     const NAME: &'static str = "Group";
//! }
//!
//! enum TagsProxy {}
//! impl DslProxy for TagsProxy {}
//!
//! let mut builder = Builder::<Group>::new();
//! builder.message_mut().name = "smoke".to_owned();
//! DslList::<_, TagsProxy>::new(&mut builder.message_mut().tags)
//!     .add("fast".to_owned())
//!     .add("ui".to_owned());
//!
//! let group = builder.finalize();
//! assert_eq!(group.name, "smoke");
//! assert_eq!(group.tags, ["fast", "ui"]);
//! assert!(builder.try_finalize().is_err());
//! ```

pub mod builder;
pub mod error;
pub mod list;
pub mod message;

pub use builder::*;
pub use error::*;
pub use list::*;
pub use message::*;
