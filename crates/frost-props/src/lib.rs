//! Ordered property store with `.properties` persistence.
//!
//! [`Properties`] is a string-keyed, string-valued map whose ordering flag
//! is fixed at construction. An ordered store enumerates and serializes its
//! keys in ascending order; an unordered one makes no ordering promise.
//!
//! # Format
//!
//! Loading and storing follow the conventional Java properties text format
//! so files can be exchanged with JVM applications:
//!
//! - one `key=value` (or `key:value`, or `key value`) assignment per line
//! - `#` and `!` start comment lines
//! - a trailing backslash continues the assignment onto the next line
//! - `\t \n \r \f \\ \= \:` and `\uXXXX` escapes
//! - byte streams are ISO-8859-1; anything else is written as `\uXXXX`
//!
//! # Design Rules
//!
//! 1. Load merges into existing entries; later duplicates win.
//! 2. A failed load keeps whatever was parsed before the failure.
//! 3. Every I/O error is returned to the caller, never swallowed.
//! 4. File handles are closed on every exit path.
//! 5. The store does not print; it only emits `tracing` debug events.
//!
//! ```
//! use frost_props::Properties;
//!
//! let mut props = Properties::ordered();
//! props.set("zeta", 1);
//! props.set("alpha", true);
//! assert_eq!(props.ordered_keys(), vec!["alpha", "zeta"]);
//! assert_eq!(props.get("alpha"), Some("true"));
//! ```

pub mod error;
pub mod properties;
mod reader;
pub mod writer;

pub use error::{LoadError, LoadResult, PropertiesError, StoreError, StoreResult};
pub use properties::Properties;
pub use writer::{LineSeparator, StoreOptions};
