//! Form components
//!
//! Buttons belong to simple forms; every other component is content of a
//! custom form and is carried by the [`Component`] enum.

pub mod button;
pub mod dropdown;
pub mod input;
pub mod label;
pub mod slider;
pub mod step_slider;
pub mod toggle;

pub use button::{ButtonCallback, ButtonComponent};
pub use dropdown::{DropdownBuilder, DropdownComponent};
pub use input::InputComponent;
pub use label::LabelComponent;
pub use slider::SliderComponent;
pub use step_slider::StepSliderComponent;
pub use toggle::ToggleComponent;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of component kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
	Button,
	Label,
	Toggle,
	Slider,
	StepSlider,
	Dropdown,
	Input,
}

impl ComponentType {
	/// Tag used for this kind in the wire format.
	pub fn wire_name(self) -> &'static str {
		match self {
			Self::Button => "button",
			Self::Label => "label",
			Self::Toggle => "toggle",
			Self::Slider => "slider",
			Self::StepSlider => "step_slider",
			Self::Dropdown => "dropdown",
			Self::Input => "input",
		}
	}

	/// Whether the remote peer sends an answer for this kind in a custom form reply.
	pub fn is_answerable(self) -> bool {
		!matches!(self, Self::Button | Self::Label)
	}
}

impl fmt::Display for ComponentType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.wire_name())
	}
}

/// Why a component or form failed construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationErrorKind {
	#[error("value is required")]
	Missing,
	#[error("must not be empty")]
	Empty,
	#[error("must be a finite number")]
	NotFinite,
	#[error("must be greater than zero")]
	NotPositive,
	#[error("{value} is outside {min}..={max}")]
	OutOfRange { value: f64, min: f64, max: f64 },
	#[error("index {index} is out of bounds for {len} entries")]
	IndexOutOfBounds { index: usize, len: usize },
}

/// Malformed form construction, naming the offending field.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid `{field}`: {kind}")]
pub struct ValidationError {
	pub field: &'static str,
	pub kind: ValidationErrorKind,
}

impl ValidationError {
	pub fn new(field: &'static str, kind: ValidationErrorKind) -> Self {
		Self { field, kind }
	}

	pub fn missing(field: &'static str) -> Self {
		Self::new(field, ValidationErrorKind::Missing)
	}
}

pub type ValidationResult<T> = Result<T, ValidationError>;

/// A custom form component.
///
/// Serialized with its `type` tag inline, e.g. `{"type":"toggle","text":"Sound","default":true}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Component {
	Label(LabelComponent),
	Toggle(ToggleComponent),
	Slider(SliderComponent),
	StepSlider(StepSliderComponent),
	Dropdown(DropdownComponent),
	Input(InputComponent),
}

impl Component {
	pub fn component_type(&self) -> ComponentType {
		match self {
			Self::Label(_) => ComponentType::Label,
			Self::Toggle(_) => ComponentType::Toggle,
			Self::Slider(_) => ComponentType::Slider,
			Self::StepSlider(_) => ComponentType::StepSlider,
			Self::Dropdown(_) => ComponentType::Dropdown,
			Self::Input(_) => ComponentType::Input,
		}
	}

	pub fn text(&self) -> &str {
		match self {
			Self::Label(c) => c.text(),
			Self::Toggle(c) => c.text(),
			Self::Slider(c) => c.text(),
			Self::StepSlider(c) => c.text(),
			Self::Dropdown(c) => c.text(),
			Self::Input(c) => c.text(),
		}
	}

	pub fn is_answerable(&self) -> bool {
		self.component_type().is_answerable()
	}

	/// Re-check the constructor invariants.
	///
	/// Deserialization bypasses the constructors, so decoded components are
	/// validated through this.
	pub fn validate(&self) -> ValidationResult<()> {
		match self {
			Self::Label(_) | Self::Toggle(_) | Self::Input(_) => Ok(()),
			Self::Slider(c) => c.validate(),
			Self::StepSlider(c) => c.validate(),
			Self::Dropdown(c) => c.validate(),
		}
	}
}

impl From<LabelComponent> for Component {
	fn from(c: LabelComponent) -> Self {
		Self::Label(c)
	}
}

impl From<ToggleComponent> for Component {
	fn from(c: ToggleComponent) -> Self {
		Self::Toggle(c)
	}
}

impl From<SliderComponent> for Component {
	fn from(c: SliderComponent) -> Self {
		Self::Slider(c)
	}
}

impl From<StepSliderComponent> for Component {
	fn from(c: StepSliderComponent) -> Self {
		Self::StepSlider(c)
	}
}

impl From<DropdownComponent> for Component {
	fn from(c: DropdownComponent) -> Self {
		Self::Dropdown(c)
	}
}

impl From<InputComponent> for Component {
	fn from(c: InputComponent) -> Self {
		Self::Input(c)
	}
}

/// Check that `default` indexes into a non-empty list.
pub(crate) fn validate_choice(
	list_field: &'static str,
	len: usize,
	default: usize,
) -> ValidationResult<()> {
	if len == 0 {
		return Err(ValidationError::new(list_field, ValidationErrorKind::Empty));
	}
	if default >= len {
		return Err(ValidationError::new(
			"default",
			ValidationErrorKind::IndexOutOfBounds {
				index: default,
				len,
			},
		));
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(ComponentType::Label, false)]
	#[case(ComponentType::Button, false)]
	#[case(ComponentType::Toggle, true)]
	#[case(ComponentType::Slider, true)]
	#[case(ComponentType::StepSlider, true)]
	#[case(ComponentType::Dropdown, true)]
	#[case(ComponentType::Input, true)]
	fn test_answerable_kinds(#[case] kind: ComponentType, #[case] expected: bool) {
		assert_eq!(kind.is_answerable(), expected);
	}

	#[rstest]
	fn test_component_serializes_with_inline_tag() {
		let component = Component::from(ToggleComponent::new("Sound", true));

		let value = serde_json::to_value(&component).unwrap();

		assert_eq!(
			value,
			json!({"type": "toggle", "text": "Sound", "default": true})
		);
	}

	#[rstest]
	fn test_decoded_component_is_revalidated() {
		let decoded: Component = serde_json::from_value(json!({
			"type": "dropdown",
			"text": "Pick",
			"options": ["a", "b"],
			"default": 5
		}))
		.unwrap();

		let err = decoded.validate().unwrap_err();
		assert_eq!(err.field, "default");
	}

	#[rstest]
	fn test_validation_error_names_field() {
		let err = ValidationError::new("step", ValidationErrorKind::NotPositive);
		assert_eq!(err.to_string(), "invalid `step`: must be greater than zero");
	}
}
