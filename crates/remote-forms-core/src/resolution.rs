//! Turning peer replies into outcomes and dispatching them to handlers
//!
//! [`FormResolver::resolve`] is a pure function of the form and the reply.
//! [`FormResolver::handle`] additionally claims the form's single
//! resolution and runs its handlers in this order:
//!
//! 1. the result handler, with the full [`FormResponseResult`]
//! 2. the form's own hook for valid responses (e.g. the clicked button's callback)
//! 3. the closed-or-invalid handler for sentinels if one is registered,
//!    otherwise the response handler

use crate::codec::{DecodeError, FormCodec};
use crate::form::{Form, FormType};
use crate::response::{FormResponseResult, InvalidReason, ResponseStatus};
use crate::settings::{FormsSettings, ResolutionSettings};
use serde_json::Value;

/// A decoded reply: either the form was closed, or the peer sent a payload.
#[derive(Debug, Clone, PartialEq)]
pub enum RawReply {
	Closed,
	Payload(Value),
}

impl From<Option<Value>> for RawReply {
	fn from(value: Option<Value>) -> Self {
		match value {
			None | Some(Value::Null) => Self::Closed,
			Some(payload) => Self::Payload(payload),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
	#[error("{form_type} form was already resolved")]
	AlreadyResolved { form_type: FormType },
}

/// Resolves replies with one set of settings.
#[derive(Debug, Clone, Default)]
pub struct FormResolver {
	codec: FormCodec,
	settings: ResolutionSettings,
}

impl FormResolver {
	pub fn new(settings: &FormsSettings) -> Self {
		Self {
			codec: FormCodec::new(settings.codec.clone()),
			settings: settings.resolution.clone(),
		}
	}

	pub fn codec(&self) -> &FormCodec {
		&self.codec
	}

	pub fn settings(&self) -> &ResolutionSettings {
		&self.settings
	}

	/// Classify a raw reply against `form` without touching its handlers.
	///
	/// Undecodable replies are [`FormResponseResult::Invalid`].
	pub fn resolve<F: Form + ?Sized>(&self, form: &F, raw: &str) -> FormResponseResult<F::Response> {
		match self.codec.decode_reply(raw) {
			Ok(reply) => form.resolve(&reply, &self.settings),
			Err(err) => FormResponseResult::Invalid(malformed(err)),
		}
	}

	/// Resolve a raw reply and dispatch the outcome to the form's handlers.
	///
	/// A form is resolved at most once. Later calls fail with
	/// [`ResolveError::AlreadyResolved`] and invoke no handler.
	///
	/// # Examples
	///
	/// ```
	/// use remote_forms_core::{FormBuilder, FormResolver, ResponseStatus, SimpleForm};
	/// use std::sync::{Arc, Mutex};
	///
	/// let clicked = Arc::new(Mutex::new(None));
	/// let sink = clicked.clone();
	/// let form = SimpleForm::builder()
	///     .title("Menu")
	///     .button("A")
	///     .button("B")
	///     .response_handler(move |response| {
	///         *sink.lock().unwrap() = response.clicked_button_id();
	///     })
	///     .build()
	///     .unwrap();
	///
	/// let resolver = FormResolver::default();
	/// assert_eq!(resolver.handle(&form, "1").unwrap(), ResponseStatus::Valid);
	/// assert_eq!(*clicked.lock().unwrap(), Some(1));
	///
	/// assert!(resolver.handle(&form, "0").is_err());
	/// assert_eq!(*clicked.lock().unwrap(), Some(1));
	/// ```
	pub fn handle<F: Form + ?Sized>(&self, form: &F, raw: &str) -> Result<ResponseStatus, ResolveError> {
		self.claim(form)?;
		let result = self.resolve(form, raw);
		Ok(dispatch(form, result))
	}

	/// Like [`handle`](Self::handle) for an already decoded reply.
	pub fn handle_reply<F: Form + ?Sized>(
		&self,
		form: &F,
		reply: &RawReply,
	) -> Result<ResponseStatus, ResolveError> {
		self.claim(form)?;
		let result = form.resolve(reply, &self.settings);
		Ok(dispatch(form, result))
	}

	fn claim<F: Form + ?Sized>(&self, form: &F) -> Result<(), ResolveError> {
		if form.core().try_begin_resolution() {
			return Ok(());
		}
		tracing::warn!(
			"ignoring reply to {} form '{}': already resolved",
			form.form_type(),
			form.title()
		);
		Err(ResolveError::AlreadyResolved {
			form_type: form.form_type(),
		})
	}
}

fn malformed(err: DecodeError) -> InvalidReason {
	InvalidReason::Malformed(err.to_string())
}

fn dispatch<F: Form + ?Sized>(form: &F, result: FormResponseResult<F::Response>) -> ResponseStatus {
	let status = result.status();
	match &result {
		FormResponseResult::Invalid(reason) => tracing::warn!(
			"invalid reply to {} form '{}': {}",
			form.form_type(),
			form.title(),
			reason
		),
		_ => tracing::debug!(
			"{} form '{}' resolved as {:?}",
			form.form_type(),
			form.title(),
			status
		),
	}

	let handlers = form.core().handlers();
	handlers.notify_result(&result);
	if let FormResponseResult::Valid(response) = &result {
		form.on_valid(response);
	}
	handlers.deliver(form.result_to_response(result));
	status
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::form::{FormBuilder, ModalForm, SimpleForm};
	use crate::response::{FormResponse, SimpleFormResponse};
	use rstest::rstest;
	use std::sync::{Arc, Mutex};

	type Log = Arc<Mutex<Vec<String>>>;

	fn logged_menu(log: &Log) -> SimpleForm {
		let (a, b, c, d) = (log.clone(), log.clone(), log.clone(), log.clone());
		SimpleForm::builder()
			.title("Menu")
			.button_with_callback("A", move |_| a.lock().unwrap().push("callback".into()))
			.result_handler(move |result: &FormResponseResult<SimpleFormResponse>| {
				b.lock().unwrap().push(format!("result:{:?}", result.status()))
			})
			.response_handler(move |r: SimpleFormResponse| {
				c.lock().unwrap().push(format!("response:{:?}", r.status()))
			})
			.closed_or_invalid_handler(move |r: SimpleFormResponse| {
				d.lock().unwrap().push(format!("closed_or_invalid:{:?}", r.status()))
			})
			.build()
			.unwrap()
	}

	#[rstest]
	#[case("0", ResponseStatus::Valid, &["result:Valid", "callback", "response:Valid"])]
	#[case("null", ResponseStatus::Closed, &["result:Closed", "closed_or_invalid:Closed"])]
	#[case("", ResponseStatus::Closed, &["result:Closed", "closed_or_invalid:Closed"])]
	#[case("4", ResponseStatus::Invalid, &["result:Invalid", "closed_or_invalid:Invalid"])]
	#[case("{", ResponseStatus::Invalid, &["result:Invalid", "closed_or_invalid:Invalid"])]
	fn test_dispatch_order(
		#[case] raw: &str,
		#[case] status: ResponseStatus,
		#[case] expected: &[&str],
	) {
		let log = Log::default();
		let form = logged_menu(&log);

		assert_eq!(FormResolver::default().handle(&form, raw), Ok(status));
		assert_eq!(*log.lock().unwrap(), expected);
	}

	#[rstest]
	fn test_second_resolution_rejected() {
		let log = Log::default();
		let form = logged_menu(&log);
		let resolver = FormResolver::default();

		resolver.handle(&form, "null").unwrap();
		let before = log.lock().unwrap().len();
		let err = resolver.handle(&form, "0").unwrap_err();

		assert_eq!(
			err,
			ResolveError::AlreadyResolved {
				form_type: FormType::Simple
			}
		);
		assert_eq!(log.lock().unwrap().len(), before);
		assert!(form.is_resolved());
	}

	#[rstest]
	fn test_resolve_is_pure() {
		let log = Log::default();
		let form = logged_menu(&log);
		let resolver = FormResolver::default();

		assert!(resolver.resolve(&form, "0").is_valid());
		assert!(resolver.resolve(&form, "0").is_valid());
		assert!(log.lock().unwrap().is_empty());
		assert!(!form.is_resolved());
	}

	#[rstest]
	fn test_oversized_reply_is_invalid() {
		let mut settings = FormsSettings::default();
		settings.codec.max_reply_len = 2;
		let resolver = FormResolver::new(&settings);
		let form = SimpleForm::builder().button("A").build().unwrap();

		let result = resolver.resolve(&form, "0   ");

		assert!(matches!(
			result.invalid_reason(),
			Some(InvalidReason::Malformed(_))
		));
	}

	#[rstest]
	fn test_handle_reply_with_settings() {
		let mut settings = FormsSettings::default();
		settings.resolution.modal_boolean_replies = false;
		let resolver = FormResolver::new(&settings);
		let form = ModalForm::builder()
			.button1("Yes")
			.button2("No")
			.build()
			.unwrap();

		let status = resolver
			.handle_reply(&form, &RawReply::Payload(Value::Bool(true)))
			.unwrap();

		assert_eq!(status, ResponseStatus::Invalid);
	}

	#[rstest]
	fn test_handle_response_uses_defaults() {
		let form = ModalForm::builder()
			.button1("Yes")
			.button2("No")
			.build()
			.unwrap();

		assert_eq!(form.handle_response("false"), Ok(ResponseStatus::Valid));
		assert!(form.handle_response("false").is_err());
	}

	#[rstest]
	#[case(None, RawReply::Closed)]
	#[case(Some(Value::Null), RawReply::Closed)]
	#[case(Some(Value::from(2)), RawReply::Payload(Value::from(2)))]
	fn test_raw_reply_from_option(#[case] value: Option<Value>, #[case] expected: RawReply) {
		assert_eq!(RawReply::from(value), expected);
	}
}
