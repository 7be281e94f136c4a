//! Core shapes for faceted search input: values, entries, and caret ranges.

/// Literal-to-canonical conversions.
pub mod convert;
/// Committed search entries.
pub mod entry;
/// Async future aliases.
pub mod future;
/// Caret and selection ranges inside the input buffer.
pub mod range;
/// Facet and value payloads.
pub mod value;

pub use convert::{IntoEntry, to_entries, to_entry, to_facet_value, to_value};
pub use entry::SearchEntry;
pub use future::BoxFutureStatic;
pub use range::{CharIdx, TextRange};
pub use value::{Meta, Value};
