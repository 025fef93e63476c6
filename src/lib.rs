//! Infinity Format: result format selection for data-source query editors
//!
//! Decides which result formats a query may use based on its declared type,
//! whether the format control is shown at all, and applies a user's pick by
//! handing an updated query to the caller and asking it to re-run.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod frame;
pub mod logging;
pub mod policy;
pub mod query;
pub mod selector;

pub use catalog::{FormatOption, RESULT_FORMATS};
pub use policy::{apply_format, availability, format_options, is_visible, Availability};
pub use query::{Query, QueryFormat, QueryType, UnknownTag};
pub use selector::{DropdownRenderer, FormatSelector, QueryChangeSink, QueryRunner, SelectorView};
