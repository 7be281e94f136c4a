//! Interaction state engine for a structured, faceted search input.
//!
//! [`SearchStore`] owns committed entries, the text being typed, a cursor
//! spanning both, and a suggestion dropdown fed by synchronous or async
//! suppliers. Rendering is left to the caller, which reads snapshots and
//! drains [`StoreEvent`]s.

pub mod config;
pub mod dropdown;
pub mod error;
pub mod event;
pub mod input;
pub mod nav;
pub mod options;
mod store;
mod suggest;
pub mod supplier;
pub mod validate;

pub use config::OptionsFile;
pub use dropdown::{DropdownMode, DropdownState};
pub use error::{ConfigError, SupplierError};
pub use event::StoreEvent;
pub use input::InputBuffer;
pub use nav::{Cursor, Motion};
pub use options::{Allow, LoadingDelay, LoadingLabel, MinLength, SearchKind, StoreOptions};
pub use sieve_primitives::{SearchEntry, TextRange, Value};
pub use store::{FACET_SEPARATOR, SearchStore};
pub use supplier::{Candidates, FnSupplier, Supplier};
