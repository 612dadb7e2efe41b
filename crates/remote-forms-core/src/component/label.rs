use serde::{Deserialize, Serialize};

/// Static text inside a custom form. The peer sends no answer for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelComponent {
	text: String,
}

impl LabelComponent {
	pub fn new(text: impl Into<String>) -> Self {
		Self { text: text.into() }
	}

	pub fn text(&self) -> &str {
		&self.text
	}
}
