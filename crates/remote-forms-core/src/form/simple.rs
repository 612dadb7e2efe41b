use crate::codec::WireForm;
use crate::component::{ButtonComponent, ValidationResult};
use crate::form::{BuilderCore, Form, FormBuilder, FormCore, FormType, index_below, integer_value};
use crate::image::FormImage;
use crate::response::{FormResponseResult, InvalidReason, SimpleFormResponse};
use crate::settings::ResolutionSettings;

/// A list of buttons below a text. The reply is the index of the clicked button.
///
/// # Examples
///
/// ```
/// use remote_forms_core::{Form, FormBuilder, FormResponse, SimpleForm};
///
/// let form = SimpleForm::builder()
///     .title("Menu")
///     .content("Pick one")
///     .button("A")
///     .button("B")
///     .build()
///     .unwrap();
///
/// let result = form.resolve_reply(&serde_json::json!(1), &Default::default());
/// let response = result.into_response().unwrap();
///
/// assert!(response.is_correct());
/// assert_eq!(response.clicked_button_id(), Some(1));
/// assert_eq!(response.clicked_button().unwrap().text(), "B");
/// ```
#[derive(Debug)]
pub struct SimpleForm {
	core: FormCore<SimpleFormResponse>,
	content: String,
	buttons: Vec<ButtonComponent>,
}

impl SimpleForm {
	pub fn builder() -> SimpleFormBuilder {
		SimpleFormBuilder::default()
	}

	pub(crate) fn from_parts(core: FormCore<SimpleFormResponse>, content: String, buttons: Vec<ButtonComponent>) -> Self {
		Self {
			core,
			content,
			buttons,
		}
	}

	pub fn content(&self) -> &str {
		&self.content
	}

	pub fn buttons(&self) -> &[ButtonComponent] {
		&self.buttons
	}
}

impl Form for SimpleForm {
	type Response = SimpleFormResponse;

	fn form_type(&self) -> FormType {
		FormType::Simple
	}

	fn core(&self) -> &FormCore<SimpleFormResponse> {
		&self.core
	}

	fn to_wire(&self) -> WireForm {
		WireForm::Simple {
			title: self.title().to_string(),
			content: self.content.clone(),
			buttons: self.buttons.clone(),
		}
	}

	fn resolve_reply(
		&self,
		payload: &serde_json::Value,
		_settings: &ResolutionSettings,
	) -> FormResponseResult<SimpleFormResponse> {
		let Some(index) = integer_value(payload) else {
			return FormResponseResult::Invalid(InvalidReason::UnexpectedType {
				expected: "integer",
			});
		};
		let Some(id) = index_below(index, self.buttons.len()) else {
			return FormResponseResult::Invalid(InvalidReason::ButtonOutOfRange {
				index,
				count: self.buttons.len(),
			});
		};

		let button = self.buttons[id].clone();
		FormResponseResult::Valid(SimpleFormResponse::new(id, Some(button)))
	}

	fn on_valid(&self, response: &SimpleFormResponse) {
		if let Some(callback) = response.clicked_button().and_then(ButtonComponent::callback) {
			callback(response);
		}
	}
}

#[derive(Debug, Default)]
pub struct SimpleFormBuilder {
	core: BuilderCore<SimpleFormResponse>,
	content: String,
	buttons: Vec<ButtonComponent>,
}

impl SimpleFormBuilder {
	pub fn content(mut self, content: impl AsRef<str>) -> Self {
		self.content = self.core.translate(content.as_ref());
		self
	}

	pub fn button(mut self, text: impl AsRef<str>) -> Self {
		let text = self.core.translate(text.as_ref());
		self.buttons.push(ButtonComponent::new(text));
		self
	}

	pub fn button_with_image(mut self, text: impl AsRef<str>, image: FormImage) -> Self {
		let text = self.core.translate(text.as_ref());
		self.buttons.push(ButtonComponent::new(text).with_image(image));
		self
	}

	/// Add a button whose callback runs when it is clicked.
	pub fn button_with_callback<F>(mut self, text: impl AsRef<str>, callback: F) -> Self
	where
		F: Fn(&SimpleFormResponse) + Send + Sync + 'static,
	{
		let text = self.core.translate(text.as_ref());
		self.buttons
			.push(ButtonComponent::new(text).with_callback(callback));
		self
	}

	/// Add a button only when `should_add` holds.
	pub fn optional_button(self, text: impl AsRef<str>, should_add: bool) -> Self {
		if should_add { self.button(text) } else { self }
	}

	/// Add a prebuilt button as is, without translation.
	pub fn button_component(mut self, button: ButtonComponent) -> Self {
		self.buttons.push(button);
		self
	}
}

impl FormBuilder for SimpleFormBuilder {
	type Form = SimpleForm;

	fn core_mut(&mut self) -> &mut BuilderCore<SimpleFormResponse> {
		&mut self.core
	}

	fn build(self) -> ValidationResult<SimpleForm> {
		let core = self.core.finish()?;
		Ok(SimpleForm::from_parts(core, self.content, self.buttons))
	}
}
