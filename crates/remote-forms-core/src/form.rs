//! Form definitions
//!
//! The three form variants share their common parts by composition:
//! [`FormCore`] holds the title, handlers and the resolved flag of a built
//! form, [`BuilderCore`] holds what every builder accumulates, and the
//! [`Form`] / [`FormBuilder`] traits expose the shared capabilities.

pub mod custom;
pub mod modal;
pub mod simple;

pub use custom::{CustomForm, CustomFormBuilder};
pub use modal::{ModalForm, ModalFormBuilder};
pub use simple::{SimpleForm, SimpleFormBuilder};

use crate::codec::WireForm;
use crate::component::{ValidationError, ValidationResult};
use crate::resolution::{FormResolver, RawReply, ResolveError};
use crate::response::{FormResponse, FormResponseResult, ResponseStatus};
use crate::settings::ResolutionSettings;
use crate::translate::Translator;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// The form variants, tagged on the wire as `form`, `modal` and `custom_form`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormType {
	#[serde(rename = "form")]
	Simple,
	#[serde(rename = "modal")]
	Modal,
	#[serde(rename = "custom_form")]
	Custom,
}

impl FormType {
	pub fn wire_name(self) -> &'static str {
		match self {
			Self::Simple => "form",
			Self::Modal => "modal",
			Self::Custom => "custom_form",
		}
	}
}

impl fmt::Display for FormType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.wire_name())
	}
}

/// Handler receiving the typed response, sentinels included.
pub type ResponseHandler<R> = Arc<dyn Fn(R) + Send + Sync>;

/// Handler observing the resolution outcome before the typed response is delivered.
pub type ResultHandler<R> = Arc<dyn Fn(&FormResponseResult<R>) + Send + Sync>;

/// Handlers registered on a form.
pub struct ResponseHandlers<R> {
	result: Option<ResultHandler<R>>,
	response: Option<ResponseHandler<R>>,
	closed_or_invalid: Option<ResponseHandler<R>>,
}

impl<R> Default for ResponseHandlers<R> {
	fn default() -> Self {
		Self {
			result: None,
			response: None,
			closed_or_invalid: None,
		}
	}
}

impl<R> Clone for ResponseHandlers<R> {
	fn clone(&self) -> Self {
		Self {
			result: self.result.clone(),
			response: self.response.clone(),
			closed_or_invalid: self.closed_or_invalid.clone(),
		}
	}
}

impl<R> fmt::Debug for ResponseHandlers<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ResponseHandlers")
			.field("result", &self.result.is_some())
			.field("response", &self.response.is_some())
			.field("closed_or_invalid", &self.closed_or_invalid.is_some())
			.finish()
	}
}

impl<R: FormResponse> ResponseHandlers<R> {
	pub(crate) fn notify_result(&self, result: &FormResponseResult<R>) {
		if let Some(handler) = &self.result {
			handler(result);
		}
	}

	/// Hand the typed response to the matching handler.
	///
	/// Sentinels go to the closed-or-invalid handler when one is registered,
	/// everything else goes to the response handler.
	pub(crate) fn deliver(&self, response: R) {
		if !response.is_correct()
			&& let Some(handler) = &self.closed_or_invalid
		{
			handler(response);
			return;
		}
		if let Some(handler) = &self.response {
			handler(response);
		}
	}
}

/// State shared by every built form.
#[derive(Debug)]
pub struct FormCore<R> {
	title: String,
	handlers: ResponseHandlers<R>,
	resolved: AtomicBool,
}

impl<R> FormCore<R> {
	pub(crate) fn new(title: String, handlers: ResponseHandlers<R>) -> Self {
		Self {
			title,
			handlers,
			resolved: AtomicBool::new(false),
		}
	}

	pub fn title(&self) -> &str {
		&self.title
	}

	pub fn handlers(&self) -> &ResponseHandlers<R> {
		&self.handlers
	}

	pub fn is_resolved(&self) -> bool {
		self.resolved.load(Ordering::Acquire)
	}

	/// Claim the single resolution of this form. Only the first call returns true.
	pub(crate) fn try_begin_resolution(&self) -> bool {
		self.resolved
			.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
			.is_ok()
	}
}

/// A displayable form.
pub trait Form: Send + Sync {
	type Response: FormResponse;

	fn form_type(&self) -> FormType;

	fn core(&self) -> &FormCore<Self::Response>;

	/// Wire representation of this form.
	fn to_wire(&self) -> WireForm;

	/// Validate a non-null reply payload against this form.
	fn resolve_reply(
		&self,
		payload: &serde_json::Value,
		settings: &ResolutionSettings,
	) -> FormResponseResult<Self::Response>;

	/// Hook run with the response of a valid outcome before it is delivered.
	fn on_valid(&self, _response: &Self::Response) {}

	fn title(&self) -> &str {
		self.core().title()
	}

	fn resolve(
		&self,
		reply: &RawReply,
		settings: &ResolutionSettings,
	) -> FormResponseResult<Self::Response> {
		match reply {
			RawReply::Closed => FormResponseResult::Closed,
			RawReply::Payload(payload) => self.resolve_reply(payload, settings),
		}
	}

	/// Collapse an outcome into the single response handed to handlers.
	fn result_to_response(&self, result: FormResponseResult<Self::Response>) -> Self::Response {
		match result {
			FormResponseResult::Closed => <Self::Response as FormResponse>::closed(),
			FormResponseResult::Invalid(_) => <Self::Response as FormResponse>::invalid(),
			FormResponseResult::Valid(response) => response,
		}
	}

	fn is_resolved(&self) -> bool {
		self.core().is_resolved()
	}

	/// Decode, resolve and dispatch a raw reply with default settings.
	///
	/// See [`FormResolver::handle`].
	fn handle_response(&self, raw: &str) -> Result<ResponseStatus, ResolveError> {
		FormResolver::default().handle(self, raw)
	}
}

/// What every form builder accumulates.
pub struct BuilderCore<R> {
	title: String,
	translator: Translator,
	handlers: ResponseHandlers<R>,
	error: Option<ValidationError>,
}

impl<R> Default for BuilderCore<R> {
	fn default() -> Self {
		Self {
			title: String::new(),
			translator: Translator::identity(),
			handlers: ResponseHandlers::default(),
			error: None,
		}
	}
}

impl<R> fmt::Debug for BuilderCore<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("BuilderCore")
			.field("title", &self.title)
			.field("handlers", &self.handlers)
			.field("error", &self.error)
			.finish()
	}
}

impl<R> BuilderCore<R> {
	pub(crate) fn translate(&self, text: &str) -> String {
		self.translator.translate(text)
	}

	/// Keep the value of a successful construction, remember the first failure.
	pub(crate) fn record<T>(&mut self, result: ValidationResult<T>) -> Option<T> {
		match result {
			Ok(value) => Some(value),
			Err(err) => {
				self.error.get_or_insert(err);
				None
			}
		}
	}

	pub(crate) fn fail(&mut self, err: ValidationError) {
		self.error.get_or_insert(err);
	}

	pub(crate) fn finish(self) -> ValidationResult<FormCore<R>> {
		match self.error {
			Some(err) => Err(err),
			None => Ok(FormCore::new(self.title, self.handlers)),
		}
	}
}

/// Capabilities shared by the form builders.
///
/// Text setters pass their input through the builder's translator when they
/// are called, so [`translator`](FormBuilder::translator) has to be set before
/// any text.
pub trait FormBuilder: Sized {
	type Form: Form;

	fn core_mut(&mut self) -> &mut BuilderCore<<Self::Form as Form>::Response>;

	/// Produce the immutable form, or the first construction error.
	fn build(self) -> ValidationResult<Self::Form>;

	fn title(mut self, title: impl AsRef<str>) -> Self {
		let core = self.core_mut();
		core.title = core.translate(title.as_ref());
		self
	}

	fn translator(mut self, translator: Translator) -> Self {
		self.core_mut().translator = translator;
		self
	}

	fn response_handler<F>(mut self, handler: F) -> Self
	where
		F: Fn(<Self::Form as Form>::Response) + Send + Sync + 'static,
	{
		self.core_mut().handlers.response = Some(Arc::new(handler));
		self
	}

	fn closed_or_invalid_handler<F>(mut self, handler: F) -> Self
	where
		F: Fn(<Self::Form as Form>::Response) + Send + Sync + 'static,
	{
		self.core_mut().handlers.closed_or_invalid = Some(Arc::new(handler));
		self
	}

	fn result_handler<F>(mut self, handler: F) -> Self
	where
		F: Fn(&FormResponseResult<<Self::Form as Form>::Response>) + Send + Sync + 'static,
	{
		self.core_mut().handlers.result = Some(Arc::new(handler));
		self
	}
}

/// Any of the three forms, as produced by decoding a wire form.
#[derive(Debug)]
pub enum AnyForm {
	Simple(SimpleForm),
	Modal(ModalForm),
	Custom(CustomForm),
}

impl AnyForm {
	pub fn form_type(&self) -> FormType {
		match self {
			Self::Simple(_) => FormType::Simple,
			Self::Modal(_) => FormType::Modal,
			Self::Custom(_) => FormType::Custom,
		}
	}

	pub fn title(&self) -> &str {
		match self {
			Self::Simple(form) => form.title(),
			Self::Modal(form) => form.title(),
			Self::Custom(form) => form.title(),
		}
	}

	pub fn to_wire(&self) -> WireForm {
		match self {
			Self::Simple(form) => form.to_wire(),
			Self::Modal(form) => form.to_wire(),
			Self::Custom(form) => form.to_wire(),
		}
	}

	pub fn as_simple(&self) -> Option<&SimpleForm> {
		match self {
			Self::Simple(form) => Some(form),
			_ => None,
		}
	}

	pub fn as_modal(&self) -> Option<&ModalForm> {
		match self {
			Self::Modal(form) => Some(form),
			_ => None,
		}
	}

	pub fn as_custom(&self) -> Option<&CustomForm> {
		match self {
			Self::Custom(form) => Some(form),
			_ => None,
		}
	}
}

impl From<SimpleForm> for AnyForm {
	fn from(form: SimpleForm) -> Self {
		Self::Simple(form)
	}
}

impl From<ModalForm> for AnyForm {
	fn from(form: ModalForm) -> Self {
		Self::Modal(form)
	}
}

impl From<CustomForm> for AnyForm {
	fn from(form: CustomForm) -> Self {
		Self::Custom(form)
	}
}

/// Integer value of a JSON number, `None` for fractions and other types.
pub(crate) fn integer_value(value: &serde_json::Value) -> Option<i128> {
	value
		.as_i64()
		.map(i128::from)
		.or_else(|| value.as_u64().map(i128::from))
}

/// Convert an integer reply into an index below `len`.
pub(crate) fn index_below(index: i128, len: usize) -> Option<usize> {
	usize::try_from(index).ok().filter(|i| *i < len)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::response::SimpleFormResponse;
	use rstest::rstest;
	use serde_json::json;
	use std::sync::Mutex;

	#[rstest]
	fn test_resolution_claimed_once() {
		let core: FormCore<SimpleFormResponse> =
			FormCore::new("t".to_string(), ResponseHandlers::default());

		assert!(!core.is_resolved());
		assert!(core.try_begin_resolution());
		assert!(!core.try_begin_resolution());
		assert!(core.is_resolved());
	}

	#[rstest]
	fn test_builder_core_keeps_first_error() {
		let mut core: BuilderCore<SimpleFormResponse> = BuilderCore::default();

		core.fail(ValidationError::missing("first"));
		core.fail(ValidationError::missing("second"));

		assert_eq!(core.finish().unwrap_err().field, "first");
	}

	#[rstest]
	fn test_sentinel_goes_to_closed_or_invalid_handler() {
		let seen = Arc::new(Mutex::new(Vec::new()));
		let (a, b) = (seen.clone(), seen.clone());
		let handlers: ResponseHandlers<SimpleFormResponse> = ResponseHandlers {
			result: None,
			response: Some(Arc::new(move |_: SimpleFormResponse| {
				a.lock().unwrap().push("response")
			})),
			closed_or_invalid: Some(Arc::new(move |_: SimpleFormResponse| {
				b.lock().unwrap().push("closed_or_invalid")
			})),
		};

		handlers.deliver(SimpleFormResponse::closed());
		handlers.deliver(SimpleFormResponse::new(0, None));

		assert_eq!(*seen.lock().unwrap(), vec!["closed_or_invalid", "response"]);
	}

	#[rstest]
	fn test_sentinel_falls_back_to_response_handler() {
		let seen = Arc::new(Mutex::new(None));
		let sink = seen.clone();
		let handlers: ResponseHandlers<SimpleFormResponse> = ResponseHandlers {
			result: None,
			response: Some(Arc::new(move |r: SimpleFormResponse| {
				*sink.lock().unwrap() = Some(r.status())
			})),
			closed_or_invalid: None,
		};

		handlers.deliver(SimpleFormResponse::invalid());

		assert_eq!(*seen.lock().unwrap(), Some(ResponseStatus::Invalid));
	}

	#[rstest]
	#[case(json!(3), Some(3))]
	#[case(json!(-1), Some(-1))]
	#[case(json!(u64::MAX), Some(i128::from(u64::MAX)))]
	#[case(json!(1.5), None)]
	#[case(json!("1"), None)]
	fn test_integer_value(#[case] value: serde_json::Value, #[case] expected: Option<i128>) {
		assert_eq!(integer_value(&value), expected);
	}

	#[rstest]
	#[case(0, 2, Some(0))]
	#[case(1, 2, Some(1))]
	#[case(2, 2, None)]
	#[case(-1, 2, None)]
	fn test_index_below(#[case] index: i128, #[case] len: usize, #[case] expected: Option<usize>) {
		assert_eq!(index_below(index, len), expected);
	}

	#[rstest]
	#[case(FormType::Simple, "form")]
	#[case(FormType::Modal, "modal")]
	#[case(FormType::Custom, "custom_form")]
	fn test_form_type_wire_names(#[case] form_type: FormType, #[case] expected: &str) {
		assert_eq!(form_type.wire_name(), expected);
		assert_eq!(serde_json::to_value(form_type).unwrap(), json!(expected));
	}
}
