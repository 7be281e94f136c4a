//! Error types for option loading and candidate lookups.

use thiserror::Error;

/// Errors that can occur when loading store options from TOML.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or an unknown key.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// `min_length` was negative.
	#[error("invalid min_length: {0} (expected a non-negative integer)")]
	InvalidMinLength(i64),

	/// `loading_delay` was a negative number of milliseconds.
	#[error("invalid loading_delay: {0}ms (expected a boolean or non-negative integer)")]
	InvalidLoadingDelay(i64),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Failure reported by an asynchronous candidate supplier.
///
/// The store never surfaces these to callers; a failed lookup resolves to an
/// empty candidate list.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SupplierError {
	/// The supplier future resolved to an error.
	#[error("candidate lookup failed: {0}")]
	Failed(String),

	/// The supplier call or its task panicked, or the task was aborted.
	#[error("candidate lookup panicked: {0}")]
	Panicked(String),
}

impl SupplierError {
	/// Wraps any displayable error as [`SupplierError::Failed`].
	pub fn failed(err: impl std::fmt::Display) -> Self {
		Self::Failed(err.to_string())
	}
}
