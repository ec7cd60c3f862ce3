//! Small helpers shared across Frost projects.
//!
//! Everything here is a free function or a plain value type; there is no
//! global helper instance and nothing is printed. Failures come back as
//! `Result`s and diagnostics go through `tracing`.
//!
//! # Modules
//!
//! - [`convert`]: string/number/boolean coercion and duration parsing
//! - [`validate`]: boolean combinators and precondition checks
//! - [`color`]: ANSI console colors and legacy `&x` code stripping
//! - [`message`]: `{0}`-style positional message formatting
//! - [`locale`]: `en_US`-style locale identifiers
//! - [`time`]: date formatting, parsing and comparison
//! - [`fs`]: file extension, rename/relocate, file dates, resource saving
//! - [`report`]: appending error reports to a log file

pub mod color;
pub mod convert;
pub mod error;
pub mod fs;
pub mod locale;
pub mod message;
pub mod report;
pub mod time;
pub mod validate;

pub use color::{strip_color, ConsoleColor};
pub use error::{ConvertError, DateError, FsError, LocaleError, ReportError, ValidationError};
pub use locale::Locale;
pub use report::{Report, ReportConfig};
