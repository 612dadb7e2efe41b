use serde::{Deserialize, Serialize};

/// Free text input. Answered with a string.
///
/// # Examples
///
/// ```
/// use remote_forms_core::InputComponent;
///
/// let input = InputComponent::new("Name").with_placeholder("Steve");
/// assert_eq!(input.placeholder(), "Steve");
/// assert_eq!(input.default_text(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputComponent {
	text: String,
	#[serde(default)]
	placeholder: String,
	#[serde(default)]
	default: String,
}

impl InputComponent {
	pub fn new(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			placeholder: String::new(),
			default: String::new(),
		}
	}

	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = placeholder.into();
		self
	}

	pub fn with_default(mut self, default: impl Into<String>) -> Self {
		self.default = default.into();
		self
	}

	pub fn text(&self) -> &str {
		&self.text
	}

	pub fn placeholder(&self) -> &str {
		&self.placeholder
	}

	pub fn default_text(&self) -> &str {
		&self.default
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_input_wire_shape() {
		let input = InputComponent::new("Name")
			.with_placeholder("Steve")
			.with_default("Alex");

		assert_eq!(
			serde_json::to_value(&input).unwrap(),
			json!({"text": "Name", "placeholder": "Steve", "default": "Alex"})
		);
	}

	#[rstest]
	fn test_input_decodes_without_optional_fields() {
		let input: InputComponent = serde_json::from_value(json!({"text": "Name"})).unwrap();

		assert_eq!(input, InputComponent::new("Name"));
	}
}
