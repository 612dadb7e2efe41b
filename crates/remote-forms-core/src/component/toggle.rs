use serde::{Deserialize, Serialize};

/// On/off switch. Answered with a boolean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleComponent {
	text: String,
	#[serde(default)]
	default: bool,
}

impl ToggleComponent {
	pub fn new(text: impl Into<String>, default: bool) -> Self {
		Self {
			text: text.into(),
			default,
		}
	}

	pub fn text(&self) -> &str {
		&self.text
	}

	pub fn default_value(&self) -> bool {
		self.default
	}
}
