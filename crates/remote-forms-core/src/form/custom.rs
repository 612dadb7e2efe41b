use crate::codec::WireForm;
use crate::component::{
	Component, ComponentType, DropdownBuilder, DropdownComponent, InputComponent, LabelComponent,
	SliderComponent, StepSliderComponent, ToggleComponent, ValidationResult,
};
use crate::form::{BuilderCore, Form, FormBuilder, FormCore, FormType, index_below, integer_value};
use crate::image::FormImage;
use crate::response::{AnswerValue, CustomFormResponse, FormResponseResult, InvalidReason};
use crate::settings::{LabelSlots, ResolutionSettings};
use serde_json::Value;

/// A form made of input components, answered with one value per input.
///
/// How labels appear in the reply is decided by
/// [`ResolutionSettings::label_slots`]: by default replies carry only the
/// answers, with [`LabelSlots::Null`] every component has a slot and label
/// slots must be `null`.
///
/// # Examples
///
/// ```
/// use remote_forms_core::{CustomForm, Form, FormBuilder};
///
/// let form = CustomForm::builder()
///     .title("Profile")
///     .label("Tell us about you")
///     .input("Name", "Steve", "")
///     .slider("Age", 1.0, 99.0, 1.0, 18.0)
///     .build()
///     .unwrap();
///
/// assert_eq!(form.components().len(), 3);
/// assert_eq!(form.answerable_count(), 2);
/// ```
#[derive(Debug)]
pub struct CustomForm {
	core: FormCore<CustomFormResponse>,
	icon: Option<FormImage>,
	components: Vec<Component>,
}

impl CustomForm {
	pub fn builder() -> CustomFormBuilder {
		CustomFormBuilder::default()
	}

	pub(crate) fn from_parts(
		core: FormCore<CustomFormResponse>,
		icon: Option<FormImage>,
		components: Vec<Component>,
	) -> Self {
		Self {
			core,
			icon,
			components,
		}
	}

	pub fn icon(&self) -> Option<&FormImage> {
		self.icon.as_ref()
	}

	pub fn components(&self) -> &[Component] {
		&self.components
	}

	pub fn component_types(&self) -> Vec<ComponentType> {
		self.components
			.iter()
			.map(Component::component_type)
			.collect()
	}

	/// Number of components the peer answers, i.e. everything but labels.
	pub fn answerable_count(&self) -> usize {
		self.components.iter().filter(|c| c.is_answerable()).count()
	}

	fn collect_answers(
		&self,
		answers: &[Value],
		label_slots: LabelSlots,
	) -> Result<Vec<Option<AnswerValue>>, InvalidReason> {
		let expected = match label_slots {
			LabelSlots::Skipped => self.answerable_count(),
			LabelSlots::Null => self.components.len(),
		};
		if answers.len() != expected {
			return Err(InvalidReason::LengthMismatch {
				expected,
				actual: answers.len(),
			});
		}

		let mut answers = answers.iter();
		let mut values = Vec::with_capacity(self.components.len());
		for (position, component) in self.components.iter().enumerate() {
			if label_slots == LabelSlots::Skipped && !component.is_answerable() {
				values.push(None);
				continue;
			}
			// Lengths were checked above.
			let Some(raw) = answers.next() else {
				return Err(InvalidReason::LengthMismatch {
					expected,
					actual: position,
				});
			};
			values.push(check_answer(component, raw, position)?);
		}
		Ok(values)
	}
}

/// Validate one reply slot against the component it answers.
fn check_answer(
	component: &Component,
	raw: &Value,
	position: usize,
) -> Result<Option<AnswerValue>, InvalidReason> {
	let expected = component.component_type();
	let mismatch = || InvalidReason::ComponentMismatch { position, expected };
	let out_of_range = || InvalidReason::ComponentOutOfRange { position, expected };

	let value = match component {
		Component::Label(_) => {
			return if raw.is_null() {
				Ok(None)
			} else {
				Err(InvalidReason::LabelSlotNotNull { position })
			};
		}
		Component::Toggle(_) => AnswerValue::Toggle(raw.as_bool().ok_or_else(mismatch)?),
		Component::Slider(slider) => {
			let value = raw.as_f64().ok_or_else(mismatch)?;
			if !slider.accepts_f64(value) {
				return Err(out_of_range());
			}
			AnswerValue::Slider(value as f32)
		}
		Component::StepSlider(step_slider) => {
			let index = integer_value(raw).ok_or_else(mismatch)?;
			AnswerValue::StepSlider(
				index_below(index, step_slider.steps().len()).ok_or_else(out_of_range)?,
			)
		}
		Component::Dropdown(dropdown) => {
			let index = integer_value(raw).ok_or_else(mismatch)?;
			AnswerValue::Dropdown(
				index_below(index, dropdown.options().len()).ok_or_else(out_of_range)?,
			)
		}
		Component::Input(_) => AnswerValue::Input(raw.as_str().ok_or_else(mismatch)?.to_string()),
	};
	Ok(Some(value))
}

impl Form for CustomForm {
	type Response = CustomFormResponse;

	fn form_type(&self) -> FormType {
		FormType::Custom
	}

	fn core(&self) -> &FormCore<CustomFormResponse> {
		&self.core
	}

	fn to_wire(&self) -> WireForm {
		WireForm::Custom {
			title: self.title().to_string(),
			icon: self.icon.clone(),
			content: self.components.clone(),
		}
	}

	fn resolve_reply(
		&self,
		payload: &Value,
		settings: &ResolutionSettings,
	) -> FormResponseResult<CustomFormResponse> {
		let Some(answers) = payload.as_array() else {
			return FormResponseResult::Invalid(InvalidReason::UnexpectedType {
				expected: "array",
			});
		};

		match self.collect_answers(answers, settings.label_slots) {
			Ok(values) => FormResponseResult::Valid(CustomFormResponse::new(values)),
			Err(reason) => FormResponseResult::Invalid(reason),
		}
	}
}

/// Builder for [`CustomForm`].
///
/// Component constructors that can fail (sliders, step sliders, dropdowns)
/// keep the first error and report it from `build()`.
#[derive(Debug, Default)]
pub struct CustomFormBuilder {
	core: BuilderCore<CustomFormResponse>,
	icon: Option<FormImage>,
	components: Vec<Component>,
}

impl CustomFormBuilder {
	pub fn icon(mut self, icon: FormImage) -> Self {
		self.icon = Some(icon);
		self
	}

	/// Add a prebuilt component as is, without translation.
	pub fn component(mut self, component: impl Into<Component>) -> Self {
		self.components.push(component.into());
		self
	}

	fn push_checked<C: Into<Component>>(mut self, component: ValidationResult<C>) -> Self {
		if let Some(component) = self.core.record(component) {
			self.components.push(component.into());
		}
		self
	}

	pub fn label(self, text: impl AsRef<str>) -> Self {
		let text = self.core.translate(text.as_ref());
		self.component(LabelComponent::new(text))
	}

	pub fn toggle(self, text: impl AsRef<str>, default: bool) -> Self {
		let text = self.core.translate(text.as_ref());
		self.component(ToggleComponent::new(text, default))
	}

	pub fn slider(self, text: impl AsRef<str>, min: f32, max: f32, step: f32, default: f32) -> Self {
		let text = self.core.translate(text.as_ref());
		self.push_checked(SliderComponent::new(text, min, max, step, default))
	}

	pub fn step_slider<I, S>(self, text: impl AsRef<str>, steps: I, default: usize) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let text = self.core.translate(text.as_ref());
		let steps = steps
			.into_iter()
			.map(|s| self.core.translate(s.as_ref()))
			.collect();
		self.push_checked(StepSliderComponent::new(text, steps, default))
	}

	pub fn dropdown<I, S>(self, text: impl AsRef<str>, options: I, default: usize) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let text = self.core.translate(text.as_ref());
		let options = options
			.into_iter()
			.map(|o| self.core.translate(o.as_ref()))
			.collect();
		self.push_checked(DropdownComponent::new(text, options, default))
	}

	/// Add a dropdown assembled option by option, translating its text and options.
	pub fn dropdown_with(self, dropdown: DropdownBuilder) -> Self {
		let dropdown = dropdown.translate_with(|s| self.core.translate(s));
		self.push_checked(dropdown.build())
	}

	pub fn input(
		self,
		text: impl AsRef<str>,
		placeholder: impl AsRef<str>,
		default: impl AsRef<str>,
	) -> Self {
		let input = InputComponent::new(self.core.translate(text.as_ref()))
			.with_placeholder(self.core.translate(placeholder.as_ref()))
			.with_default(self.core.translate(default.as_ref()));
		self.component(input)
	}
}

impl FormBuilder for CustomFormBuilder {
	type Form = CustomForm;

	fn core_mut(&mut self) -> &mut BuilderCore<CustomFormResponse> {
		&mut self.core
	}

	fn build(self) -> ValidationResult<CustomForm> {
		let core = self.core.finish()?;
		Ok(CustomForm::from_parts(core, self.icon, self.components))
	}
}
