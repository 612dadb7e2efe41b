//! Codec and resolution settings
//!
//! Settings can be built in code or loaded from TOML/JSON, e.g.
//!
//! ```toml
//! [codec]
//! max_reply_len = 16384
//!
//! [resolution]
//! label_slots = "null"
//! modal_boolean_replies = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default upper bound for the length of a raw reply, in bytes.
pub const DEFAULT_MAX_REPLY_LEN: usize = 64 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("Failed to read settings file: {0}")]
	Io(#[from] std::io::Error),
	#[error("Settings parse error: {0}")]
	Parse(String),
	#[error("Unsupported settings format: {0}")]
	UnsupportedFormat(String),
}

/// How label components appear in a custom form reply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelSlots {
	/// The reply only holds answers; labels take no slot.
	#[default]
	Skipped,
	/// The reply holds one slot per component and label slots are `null`.
	Null,
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecSettings {
	/// Replies longer than this are rejected before parsing.
	pub max_reply_len: usize,
	/// Pretty-print encoded forms.
	pub pretty: bool,
}

impl Default for CodecSettings {
	fn default() -> Self {
		Self {
			max_reply_len: DEFAULT_MAX_REPLY_LEN,
			pretty: false,
		}
	}
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolutionSettings {
	pub label_slots: LabelSlots,
	/// Accept `true`/`false` as modal replies for button 0/1.
	pub modal_boolean_replies: bool,
}

impl Default for ResolutionSettings {
	fn default() -> Self {
		Self {
			label_slots: LabelSlots::Skipped,
			modal_boolean_replies: true,
		}
	}
}

impl ResolutionSettings {
	pub fn with_label_slots(mut self, label_slots: LabelSlots) -> Self {
		self.label_slots = label_slots;
		self
	}

	pub fn with_modal_boolean_replies(mut self, enabled: bool) -> Self {
		self.modal_boolean_replies = enabled;
		self
	}
}

/// All settings of the crate.
///
/// # Examples
///
/// ```
/// use remote_forms_core::{FormsSettings, LabelSlots};
///
/// let settings = FormsSettings::from_toml_str(
///     r#"
///     [resolution]
///     label_slots = "null"
///     "#,
/// )
/// .unwrap();
///
/// assert_eq!(settings.resolution.label_slots, LabelSlots::Null);
/// assert!(settings.resolution.modal_boolean_replies);
/// assert!(!settings.codec.pretty);
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormsSettings {
	pub codec: CodecSettings,
	pub resolution: ResolutionSettings,
}

impl FormsSettings {
	pub fn from_toml_str(contents: &str) -> Result<Self, SettingsError> {
		toml::from_str(contents).map_err(|e| SettingsError::Parse(format!("TOML: {}", e)))
	}

	pub fn from_json_str(contents: &str) -> Result<Self, SettingsError> {
		serde_json::from_str(contents).map_err(|e| SettingsError::Parse(format!("JSON: {}", e)))
	}

	/// Load settings from a `.toml` or `.json` file.
	pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
		let path = path.into();
		let contents = std::fs::read_to_string(&path)?;

		match path.extension().and_then(|s| s.to_str()) {
			Some("toml") => Self::from_toml_str(&contents),
			Some("json") => Self::from_json_str(&contents),
			_ => Err(SettingsError::UnsupportedFormat(format!(
				"{} (supported formats: .toml, .json)",
				path.display()
			))),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::io::Write;

	#[rstest]
	fn test_defaults() {
		let settings = FormsSettings::default();

		assert_eq!(settings.codec.max_reply_len, DEFAULT_MAX_REPLY_LEN);
		assert_eq!(settings.resolution.label_slots, LabelSlots::Skipped);
		assert!(settings.resolution.modal_boolean_replies);
	}

	#[rstest]
	fn test_partial_json_keeps_defaults() {
		let settings =
			FormsSettings::from_json_str(r#"{"codec": {"max_reply_len": 10}}"#).unwrap();

		assert_eq!(settings.codec.max_reply_len, 10);
		assert_eq!(settings.resolution, ResolutionSettings::default());
	}

	#[rstest]
	fn test_bad_toml_is_parse_error() {
		let err = FormsSettings::from_toml_str("[resolution]\nlabel_slots = 3").unwrap_err();
		assert!(matches!(err, SettingsError::Parse(_)));
	}

	#[rstest]
	fn test_from_file_by_extension() {
		let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
		writeln!(file, "[codec]\npretty = true").unwrap();

		let settings = FormsSettings::from_file(file.path()).unwrap();

		assert!(settings.codec.pretty);
	}

	#[rstest]
	fn test_from_file_unsupported_extension() {
		let file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();

		let err = FormsSettings::from_file(file.path()).unwrap_err();

		assert!(matches!(err, SettingsError::UnsupportedFormat(_)));
	}
}
