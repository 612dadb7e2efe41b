use crate::component::ComponentType;
use crate::response::{FormResponse, ResponseStatus};

/// One validated answer of a custom form reply.
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerValue {
	Toggle(bool),
	Slider(f32),
	/// Index into the step slider's steps.
	StepSlider(usize),
	/// Index into the dropdown's options.
	Dropdown(usize),
	Input(String),
}

impl AnswerValue {
	pub fn component_type(&self) -> ComponentType {
		match self {
			Self::Toggle(_) => ComponentType::Toggle,
			Self::Slider(_) => ComponentType::Slider,
			Self::StepSlider(_) => ComponentType::StepSlider,
			Self::Dropdown(_) => ComponentType::Dropdown,
			Self::Input(_) => ComponentType::Input,
		}
	}
}

/// Response to a custom form.
///
/// Values are aligned with the form's components: position `i` holds the
/// answer for component `i`, and label positions hold `None`. Besides
/// positional access, a cursor walks the answers in order and skips labels.
///
/// # Examples
///
/// ```
/// use remote_forms_core::{CustomForm, Form, FormBuilder, FormResponse};
/// use serde_json::json;
///
/// let form = CustomForm::builder()
///     .title("Settings")
///     .label("Audio")
///     .toggle("Music", true)
///     .input("Nickname", "", "")
///     .build()
///     .unwrap();
///
/// let mut response = form
///     .resolve_reply(&json!([false, "Steve"]), &Default::default())
///     .into_response()
///     .unwrap();
///
/// assert!(response.is_correct());
/// assert_eq!(response.toggle(1), Some(false));
/// assert_eq!(response.next_toggle(), Some(false));
/// assert_eq!(response.next_input(), Some("Steve".to_string()));
/// assert!(!response.has_next());
/// ```
#[derive(Debug, Clone)]
pub struct CustomFormResponse {
	status: ResponseStatus,
	values: Vec<Option<AnswerValue>>,
	cursor: usize,
}

impl CustomFormResponse {
	pub(crate) fn new(values: Vec<Option<AnswerValue>>) -> Self {
		Self {
			status: ResponseStatus::Valid,
			values,
			cursor: 0,
		}
	}

	fn sentinel(status: ResponseStatus) -> Self {
		Self {
			status,
			values: Vec::new(),
			cursor: 0,
		}
	}

	/// All positions, `None` for labels.
	pub fn values(&self) -> &[Option<AnswerValue>] {
		&self.values
	}

	pub fn value_at(&self, position: usize) -> Option<&AnswerValue> {
		self.values.get(position).and_then(Option::as_ref)
	}

	/// Answers with their component positions, labels skipped.
	pub fn answers(&self) -> impl Iterator<Item = (usize, &AnswerValue)> {
		self.values
			.iter()
			.enumerate()
			.filter_map(|(position, value)| value.as_ref().map(|v| (position, v)))
	}

	pub fn toggle(&self, position: usize) -> Option<bool> {
		match self.value_at(position)? {
			AnswerValue::Toggle(v) => Some(*v),
			_ => None,
		}
	}

	pub fn slider(&self, position: usize) -> Option<f32> {
		match self.value_at(position)? {
			AnswerValue::Slider(v) => Some(*v),
			_ => None,
		}
	}

	pub fn step_slider(&self, position: usize) -> Option<usize> {
		match self.value_at(position)? {
			AnswerValue::StepSlider(v) => Some(*v),
			_ => None,
		}
	}

	pub fn dropdown(&self, position: usize) -> Option<usize> {
		match self.value_at(position)? {
			AnswerValue::Dropdown(v) => Some(*v),
			_ => None,
		}
	}

	pub fn input(&self, position: usize) -> Option<&str> {
		match self.value_at(position)? {
			AnswerValue::Input(v) => Some(v),
			_ => None,
		}
	}

	fn next_position(&self) -> Option<usize> {
		(self.cursor..self.values.len()).find(|&i| self.values[i].is_some())
	}

	pub fn has_next(&self) -> bool {
		self.next_position().is_some()
	}

	/// Next answer in order, skipping labels.
	pub fn next_value(&mut self) -> Option<&AnswerValue> {
		let position = self.next_position()?;
		self.cursor = position + 1;
		self.values[position].as_ref()
	}

	/// Take the next answer if it has the wanted shape.
	///
	/// The cursor only advances when `extract` accepts the answer.
	fn next_as<T>(&mut self, extract: impl Fn(&AnswerValue) -> Option<T>) -> Option<T> {
		let position = self.next_position()?;
		let value = self.values[position].as_ref().and_then(extract)?;
		self.cursor = position + 1;
		Some(value)
	}

	pub fn next_toggle(&mut self) -> Option<bool> {
		self.next_as(|v| match v {
			AnswerValue::Toggle(b) => Some(*b),
			_ => None,
		})
	}

	pub fn next_slider(&mut self) -> Option<f32> {
		self.next_as(|v| match v {
			AnswerValue::Slider(f) => Some(*f),
			_ => None,
		})
	}

	pub fn next_step_slider(&mut self) -> Option<usize> {
		self.next_as(|v| match v {
			AnswerValue::StepSlider(i) => Some(*i),
			_ => None,
		})
	}

	pub fn next_dropdown(&mut self) -> Option<usize> {
		self.next_as(|v| match v {
			AnswerValue::Dropdown(i) => Some(*i),
			_ => None,
		})
	}

	pub fn next_input(&mut self) -> Option<String> {
		self.next_as(|v| match v {
			AnswerValue::Input(s) => Some(s.clone()),
			_ => None,
		})
	}

	/// Skip the next answer regardless of its kind.
	pub fn skip(&mut self) {
		let _ = self.next_value();
	}

	pub fn reset(&mut self) {
		self.cursor = 0;
	}
}

impl PartialEq for CustomFormResponse {
	fn eq(&self, other: &Self) -> bool {
		self.status == other.status && self.values == other.values
	}
}

impl FormResponse for CustomFormResponse {
	fn closed() -> Self {
		Self::sentinel(ResponseStatus::Closed)
	}

	fn invalid() -> Self {
		Self::sentinel(ResponseStatus::Invalid)
	}

	fn status(&self) -> ResponseStatus {
		self.status
	}
}
