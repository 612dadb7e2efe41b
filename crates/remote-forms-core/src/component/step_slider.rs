use crate::component::{ValidationResult, validate_choice};
use serde::{Deserialize, Serialize};

/// Slider over a fixed list of labelled steps. Answered with a step index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepSliderComponent {
	text: String,
	steps: Vec<String>,
	#[serde(default)]
	default: usize,
}

impl StepSliderComponent {
	pub fn new(
		text: impl Into<String>,
		steps: Vec<String>,
		default: usize,
	) -> ValidationResult<Self> {
		let slider = Self {
			text: text.into(),
			steps,
			default,
		};
		slider.validate()?;
		Ok(slider)
	}

	pub fn text(&self) -> &str {
		&self.text
	}

	pub fn steps(&self) -> &[String] {
		&self.steps
	}

	pub fn default_step(&self) -> usize {
		self.default
	}

	pub(crate) fn validate(&self) -> ValidationResult<()> {
		validate_choice("steps", self.steps.len(), self.default)
	}
}
