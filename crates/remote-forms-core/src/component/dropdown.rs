//! Dropdown component for picking one option out of a list

use crate::component::{ValidationResult, validate_choice};
use serde::{Deserialize, Serialize};

/// A dropdown selecting one of `options`. Answered with the option index.
///
/// # Examples
///
/// ```
/// use remote_forms_core::DropdownComponent;
///
/// let dropdown = DropdownComponent::builder("Gamemode")
///     .option("Survival")
///     .default_option("Creative")
///     .option("Adventure")
///     .build()
///     .unwrap();
///
/// assert_eq!(dropdown.options().len(), 3);
/// assert_eq!(dropdown.default_option(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownComponent {
	text: String,
	options: Vec<String>,
	#[serde(default)]
	default: usize,
}

impl DropdownComponent {
	pub fn new(
		text: impl Into<String>,
		options: Vec<String>,
		default: usize,
	) -> ValidationResult<Self> {
		let dropdown = Self {
			text: text.into(),
			options,
			default,
		};
		dropdown.validate()?;
		Ok(dropdown)
	}

	pub fn builder(text: impl Into<String>) -> DropdownBuilder {
		DropdownBuilder {
			text: text.into(),
			options: Vec::new(),
			default: 0,
		}
	}

	pub fn text(&self) -> &str {
		&self.text
	}

	pub fn options(&self) -> &[String] {
		&self.options
	}

	pub fn default_option(&self) -> usize {
		self.default
	}

	pub(crate) fn validate(&self) -> ValidationResult<()> {
		validate_choice("options", self.options.len(), self.default)
	}
}

/// Incremental dropdown construction, one option at a time.
#[derive(Debug, Clone)]
pub struct DropdownBuilder {
	text: String,
	options: Vec<String>,
	default: usize,
}

impl DropdownBuilder {
	pub fn option(mut self, option: impl Into<String>) -> Self {
		self.options.push(option.into());
		self
	}

	/// Add an option and preselect it.
	pub fn default_option(mut self, option: impl Into<String>) -> Self {
		self.default = self.options.len();
		self.options.push(option.into());
		self
	}

	pub(crate) fn translate_with(mut self, translate: impl Fn(&str) -> String) -> Self {
		self.text = translate(&self.text);
		self.options = self.options.iter().map(|o| translate(o)).collect();
		self
	}

	pub fn build(self) -> ValidationResult<DropdownComponent> {
		DropdownComponent::new(self.text, self.options, self.default)
	}
}
