use crate::codec::WireForm;
use crate::component::{ValidationError, ValidationResult};
use crate::form::{BuilderCore, Form, FormBuilder, FormCore, FormType, index_below, integer_value};
use crate::response::{FormResponseResult, InvalidReason, ModalFormResponse};
use crate::settings::ResolutionSettings;
use serde_json::Value;

/// A yes/no style dialog with exactly two buttons.
///
/// The reply is `0` for `button1` and `1` for `button2`. The peer may also
/// answer `true` / `false`, accepted unless
/// [`ResolutionSettings::modal_boolean_replies`] is off.
#[derive(Debug)]
pub struct ModalForm {
	core: FormCore<ModalFormResponse>,
	content: String,
	button1: String,
	button2: String,
}

impl ModalForm {
	pub fn builder() -> ModalFormBuilder {
		ModalFormBuilder::default()
	}

	pub(crate) fn from_parts(
		core: FormCore<ModalFormResponse>,
		content: String,
		button1: String,
		button2: String,
	) -> Self {
		Self {
			core,
			content,
			button1,
			button2,
		}
	}

	pub fn content(&self) -> &str {
		&self.content
	}

	pub fn button1(&self) -> &str {
		&self.button1
	}

	pub fn button2(&self) -> &str {
		&self.button2
	}

	fn button_text(&self, id: usize) -> &str {
		if id == 0 { &self.button1 } else { &self.button2 }
	}
}

impl Form for ModalForm {
	type Response = ModalFormResponse;

	fn form_type(&self) -> FormType {
		FormType::Modal
	}

	fn core(&self) -> &FormCore<ModalFormResponse> {
		&self.core
	}

	fn to_wire(&self) -> WireForm {
		WireForm::Modal {
			title: self.title().to_string(),
			content: self.content.clone(),
			button1: self.button1.clone(),
			button2: self.button2.clone(),
		}
	}

	fn resolve_reply(
		&self,
		payload: &Value,
		settings: &ResolutionSettings,
	) -> FormResponseResult<ModalFormResponse> {
		let index = match payload {
			Value::Bool(first) if settings.modal_boolean_replies => {
				if *first { 0 } else { 1 }
			}
			_ => match integer_value(payload) {
				Some(index) => index,
				None => {
					return FormResponseResult::Invalid(InvalidReason::UnexpectedType {
						expected: "integer",
					});
				}
			},
		};

		match index_below(index, 2) {
			Some(id) => FormResponseResult::Valid(ModalFormResponse::new(
				id,
				self.button_text(id).to_string(),
			)),
			None => FormResponseResult::Invalid(InvalidReason::ButtonOutOfRange { index, count: 2 }),
		}
	}
}

#[derive(Debug, Default)]
pub struct ModalFormBuilder {
	core: BuilderCore<ModalFormResponse>,
	content: String,
	button1: Option<String>,
	button2: Option<String>,
}

impl ModalFormBuilder {
	pub fn content(mut self, content: impl AsRef<str>) -> Self {
		self.content = self.core.translate(content.as_ref());
		self
	}

	pub fn button1(mut self, text: impl AsRef<str>) -> Self {
		self.button1 = Some(self.core.translate(text.as_ref()));
		self
	}

	pub fn button2(mut self, text: impl AsRef<str>) -> Self {
		self.button2 = Some(self.core.translate(text.as_ref()));
		self
	}
}

impl FormBuilder for ModalFormBuilder {
	type Form = ModalForm;

	fn core_mut(&mut self) -> &mut BuilderCore<ModalFormResponse> {
		&mut self.core
	}

	/// Fails unless both button texts were set.
	fn build(mut self) -> ValidationResult<ModalForm> {
		let button1 = self.button1.take();
		let button2 = self.button2.take();
		if button1.is_none() {
			self.core.fail(ValidationError::missing("button1"));
		}
		if button2.is_none() {
			self.core.fail(ValidationError::missing("button2"));
		}

		let core = self.core.finish()?;
		Ok(ModalForm::from_parts(
			core,
			self.content,
			button1.unwrap_or_default(),
			button2.unwrap_or_default(),
		))
	}
}
