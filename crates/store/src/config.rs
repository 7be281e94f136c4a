//! Declarative store options loaded from TOML.
//!
//! Only the static subset is expressible here; suppliers, predicates, and the
//! rewrite hook are attached with the [`StoreOptions`] builder afterwards.
//!
//! ```toml
//! type = "faceted"
//! custom_values = true
//! custom_facets = false
//! min_length = 2
//! loading_label = "Searching..."
//! loading_delay = 250
//! auto_select_first = true
//! ```

use std::time::Duration;

use serde::Deserialize;

use crate::error::{ConfigError, Result};
use crate::options::{LoadingDelay, SearchKind, StoreOptions};

/// Raw TOML document.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionsFile {
	#[serde(rename = "type")]
	pub kind: Option<SearchKind>,
	pub custom_values: Option<bool>,
	pub custom_facets: Option<bool>,
	pub min_length: Option<i64>,
	pub loading_label: Option<String>,
	pub loading_delay: Option<DelaySetting>,
	pub auto_select_first: Option<bool>,
}

/// `loading_delay` accepts a toggle or a millisecond count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum DelaySetting {
	Toggle(bool),
	Millis(i64),
}

impl OptionsFile {
	/// Parses a TOML document.
	pub fn parse(input: &str) -> Result<Self> {
		Ok(toml::from_str(input)?)
	}

	/// Validates the raw document and layers it onto `base`.
	pub fn apply(self, mut base: StoreOptions) -> Result<StoreOptions> {
		if let Some(kind) = self.kind {
			base = base.kind(kind);
		}
		if let Some(allow) = self.custom_values {
			base = base.custom_values(allow);
		}
		if let Some(allow) = self.custom_facets {
			base = base.custom_facets(allow);
		}
		if let Some(min) = self.min_length {
			let min = usize::try_from(min).map_err(|_| ConfigError::InvalidMinLength(min))?;
			base = base.min_length(min);
		}
		if let Some(label) = self.loading_label {
			base = base.loading_label(label);
		}
		if let Some(delay) = self.loading_delay {
			base = base.loading_delay(delay.resolve()?);
		}
		if let Some(enabled) = self.auto_select_first {
			base = base.auto_select_first(enabled);
		}
		Ok(base)
	}
}

impl DelaySetting {
	fn resolve(self) -> Result<LoadingDelay> {
		match self {
			Self::Toggle(flag) => Ok(LoadingDelay::from(flag)),
			Self::Millis(ms) => {
				let ms = u64::try_from(ms).map_err(|_| ConfigError::InvalidLoadingDelay(ms))?;
				Ok(LoadingDelay::from(Duration::from_millis(ms)))
			}
		}
	}
}

impl StoreOptions {
	/// Builds options from a TOML document, starting from defaults.
	pub fn from_toml_str(input: &str) -> Result<Self> {
		OptionsFile::parse(input)?.apply(Self::default())
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	use super::*;
	use crate::options::DEFAULT_LOADING_DELAY;

	#[test]
	fn full_document() {
		let options = StoreOptions::from_toml_str(
			r#"
			type = "faceted"
			custom_values = true
			custom_facets = false
			min_length = 2
			loading_label = "Searching..."
			loading_delay = 250
			auto_select_first = true
			"#,
		)
		.unwrap();

		assert_eq!(options.kind, SearchKind::Faceted);
		assert!(options.custom_values.permits("x"));
		assert!(!options.custom_facets.permits("x"));
		assert_eq!(options.min_length.resolve(""), 2);
		assert_eq!(options.loading_label.map(|l| l.resolve("")), Some("Searching...".to_string()));
		assert_eq!(options.loading_delay, LoadingDelay::After(Duration::from_millis(250)));
		assert!(options.auto_select_first);
	}

	#[test]
	fn empty_document_is_default() {
		let options = StoreOptions::from_toml_str("").unwrap();
		assert_eq!(options.kind, SearchKind::Single);
		assert_eq!(options.loading_delay, LoadingDelay::After(DEFAULT_LOADING_DELAY));
	}

	#[rstest]
	#[case("loading_delay = true", LoadingDelay::After(DEFAULT_LOADING_DELAY))]
	#[case("loading_delay = false", LoadingDelay::Immediate)]
	#[case("loading_delay = 0", LoadingDelay::Immediate)]
	#[case("loading_delay = 40", LoadingDelay::After(Duration::from_millis(40)))]
	fn loading_delay_forms(#[case] doc: &str, #[case] expected: LoadingDelay) {
		assert_eq!(StoreOptions::from_toml_str(doc).unwrap().loading_delay, expected);
	}

	#[test]
	fn rejects_negative_min_length() {
		let err = StoreOptions::from_toml_str("min_length = -1").unwrap_err();
		assert!(matches!(err, ConfigError::InvalidMinLength(-1)), "{err}");
	}

	#[test]
	fn rejects_negative_delay() {
		let err = StoreOptions::from_toml_str("loading_delay = -5").unwrap_err();
		assert!(matches!(err, ConfigError::InvalidLoadingDelay(-5)), "{err}");
	}

	#[rstest]
	#[case("colour = \"red\"")]
	#[case("type = \"tree\"")]
	#[case("min_length = \"two\"")]
	fn rejects_malformed(#[case] doc: &str) {
		assert!(matches!(StoreOptions::from_toml_str(doc), Err(ConfigError::Toml(_))));
	}
}
