//! JSON wire format of forms and replies
//!
//! Forms travel as a JSON object tagged by `type`:
//!
//! ```json
//! {"type": "form", "title": "Menu", "content": "Pick one", "buttons": [{"text": "A"}]}
//! {"type": "modal", "title": "Quit?", "content": "", "button1": "Yes", "button2": "No"}
//! {"type": "custom_form", "title": "Settings", "content": [{"type": "toggle", "text": "Music"}]}
//! ```
//!
//! Replies are the raw JSON text returned by the peer. A `null` or empty
//! reply means the form was closed.
//!
//! ## Example
//!
//! ```
//! use remote_forms_core::{FormBuilder, FormCodec, ModalForm, RawReply};
//!
//! let codec = FormCodec::default();
//! let form = ModalForm::builder()
//!     .title("Quit?")
//!     .button1("Yes")
//!     .button2("No")
//!     .build()
//!     .unwrap();
//!
//! let json = codec.encode(&form).unwrap();
//! let decoded = codec.decode_form(&json).unwrap();
//! assert_eq!(decoded.title(), "Quit?");
//!
//! assert_eq!(codec.decode_reply(" null ").unwrap(), RawReply::Closed);
//! ```

use crate::component::{ButtonComponent, Component, ValidationError};
use crate::form::{
	AnyForm, CustomForm, Form, FormCore, ModalForm, ResponseHandlers, SimpleForm,
};
use crate::image::FormImage;
use crate::resolution::RawReply;
use crate::settings::CodecSettings;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Serializable shape of a form, without handlers or callbacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WireForm {
	#[serde(rename = "form")]
	Simple {
		title: String,
		#[serde(default)]
		content: String,
		#[serde(default)]
		buttons: Vec<ButtonComponent>,
	},
	#[serde(rename = "modal")]
	Modal {
		title: String,
		#[serde(default)]
		content: String,
		button1: String,
		button2: String,
	},
	#[serde(rename = "custom_form")]
	Custom {
		title: String,
		#[serde(default, skip_serializing_if = "Option::is_none")]
		icon: Option<FormImage>,
		#[serde(default)]
		content: Vec<Component>,
	},
}

impl WireForm {
	/// Build a form without handlers from its wire shape.
	///
	/// Components are checked against the same invariants their constructors
	/// enforce.
	pub fn into_form(self) -> Result<AnyForm, ValidationError> {
		let form = match self {
			Self::Simple {
				title,
				content,
				buttons,
			} => AnyForm::Simple(SimpleForm::from_parts(
				FormCore::new(title, ResponseHandlers::default()),
				content,
				buttons,
			)),
			Self::Modal {
				title,
				content,
				button1,
				button2,
			} => AnyForm::Modal(ModalForm::from_parts(
				FormCore::new(title, ResponseHandlers::default()),
				content,
				button1,
				button2,
			)),
			Self::Custom {
				title,
				icon,
				content,
			} => {
				for component in &content {
					component.validate()?;
				}
				AnyForm::Custom(CustomForm::from_parts(
					FormCore::new(title, ResponseHandlers::default()),
					icon,
					content,
				))
			}
		};
		Ok(form)
	}
}

#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
	#[error("Failed to encode form: {0}")]
	Json(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
	#[error("Malformed JSON: {0}")]
	Json(#[from] serde_json::Error),
	#[error("Reply of {len} bytes exceeds the limit of {max} bytes")]
	TooLarge { len: usize, max: usize },
	#[error("Invalid form definition: {0}")]
	InvalidForm(#[from] ValidationError),
}

/// Encodes forms and decodes forms and replies.
#[derive(Debug, Clone, Default)]
pub struct FormCodec {
	settings: CodecSettings,
}

impl FormCodec {
	pub fn new(settings: CodecSettings) -> Self {
		Self { settings }
	}

	pub fn settings(&self) -> &CodecSettings {
		&self.settings
	}

	/// Encode a form as JSON text.
	pub fn encode<F: Form + ?Sized>(&self, form: &F) -> Result<String, EncodeError> {
		self.encode_wire(&form.to_wire())
	}

	pub fn encode_wire(&self, wire: &WireForm) -> Result<String, EncodeError> {
		let json = if self.settings.pretty {
			serde_json::to_string_pretty(wire)?
		} else {
			serde_json::to_string(wire)?
		};
		Ok(json)
	}

	/// Encode a form as a JSON value.
	pub fn encode_value<F: Form + ?Sized>(&self, form: &F) -> Result<Value, EncodeError> {
		Ok(serde_json::to_value(form.to_wire())?)
	}

	/// Decode a form definition. The result carries no handlers.
	pub fn decode_form(&self, json: &str) -> Result<AnyForm, DecodeError> {
		let wire: WireForm = serde_json::from_str(json)?;
		Ok(wire.into_form()?)
	}

	/// Decode the raw reply text of a peer.
	///
	/// Surrounding whitespace is ignored. Empty and `null` replies decode to
	/// [`RawReply::Closed`].
	pub fn decode_reply(&self, raw: &str) -> Result<RawReply, DecodeError> {
		let max = self.settings.max_reply_len;
		if raw.len() > max {
			return Err(DecodeError::TooLarge {
				len: raw.len(),
				max,
			});
		}

		let trimmed = raw.trim();
		if trimmed.is_empty() {
			return Ok(RawReply::Closed);
		}
		match serde_json::from_str(trimmed)? {
			Value::Null => Ok(RawReply::Closed),
			payload => Ok(RawReply::Payload(payload)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::component::{ComponentType, SliderComponent, ValidationErrorKind};
	use crate::form::{FormBuilder, FormType};
	use assert_json_diff::assert_json_eq;
	use rstest::{fixture, rstest};
	use serde_json::json;

	#[fixture]
	fn codec() -> FormCodec {
		FormCodec::default()
	}

	#[rstest]
	fn test_encode_simple_form(codec: FormCodec) {
		let form = SimpleForm::builder()
			.title("Warp")
			.content("Where to?")
			.button_with_image("Spawn", FormImage::url("https://example.com/spawn.png"))
			.button("Home")
			.build()
			.unwrap();

		assert_json_eq!(
			codec.encode_value(&form).unwrap(),
			json!({
				"type": "form",
				"title": "Warp",
				"content": "Where to?",
				"buttons": [
					{"text": "Spawn", "image": {"type": "url", "data": "https://example.com/spawn.png"}},
					{"text": "Home"}
				]
			})
		);
	}

	#[rstest]
	fn test_encode_custom_form_component_shapes(codec: FormCodec) {
		let form = CustomForm::builder()
			.title("All")
			.label("L")
			.toggle("T", true)
			.slider("S", 0.0, 10.0, 2.0, 4.0)
			.step_slider("SS", ["a", "b"], 1)
			.dropdown("D", ["x"], 0)
			.input("I", "p", "d")
			.build()
			.unwrap();

		assert_json_eq!(
			codec.encode_value(&form).unwrap(),
			json!({
				"type": "custom_form",
				"title": "All",
				"content": [
					{"type": "label", "text": "L"},
					{"type": "toggle", "text": "T", "default": true},
					{"type": "slider", "text": "S", "min": 0.0, "max": 10.0, "step": 2.0, "default": 4.0},
					{"type": "step_slider", "text": "SS", "steps": ["a", "b"], "default": 1},
					{"type": "dropdown", "text": "D", "options": ["x"], "default": 0},
					{"type": "input", "text": "I", "placeholder": "p", "default": "d"}
				]
			})
		);
	}

	#[rstest]
	fn test_pretty_encoding(codec: FormCodec) {
		let form = SimpleForm::builder().title("t").build().unwrap();
		let pretty = FormCodec::new(CodecSettings {
			pretty: true,
			..CodecSettings::default()
		});

		let compact = codec.encode(&form).unwrap();
		let indented = pretty.encode(&form).unwrap();

		assert!(!compact.contains('\n'));
		assert!(indented.contains('\n'));
		assert_eq!(
			serde_json::from_str::<Value>(&compact).unwrap(),
			serde_json::from_str::<Value>(&indented).unwrap()
		);
	}

	#[rstest]
	fn test_decode_form_keeps_structure(codec: FormCodec) {
		let form = codec
			.decode_form(
				r#"{"type":"custom_form","title":"Cfg","icon":{"type":"path","data":"i"},
				"content":[{"type":"label","text":"hi"},{"type":"slider","text":"v","min":0,"max":5,"step":1,"default":2}]}"#,
			)
			.unwrap();

		assert_eq!(form.form_type(), FormType::Custom);
		let custom = form.as_custom().unwrap();
		assert_eq!(custom.icon(), Some(&FormImage::path("i")));
		let types: Vec<ComponentType> = custom
			.components()
			.iter()
			.map(Component::component_type)
			.collect();
		assert_eq!(types, vec![ComponentType::Label, ComponentType::Slider]);
	}

	#[rstest]
	fn test_decode_defaults_optional_fields(codec: FormCodec) {
		let form = codec.decode_form(r#"{"type":"form","title":"Bare"}"#).unwrap();

		let simple = form.as_simple().unwrap();
		assert_eq!(simple.content(), "");
		assert!(simple.buttons().is_empty());
	}

	#[rstest]
	fn test_decode_rejects_invalid_component(codec: FormCodec) {
		let err = codec
			.decode_form(
				r#"{"type":"custom_form","title":"x","content":[{"type":"dropdown","text":"d","options":["a"],"default":3}]}"#,
			)
			.unwrap_err();

		assert!(matches!(
			err,
			DecodeError::InvalidForm(ValidationError {
				field: "default",
				kind: ValidationErrorKind::IndexOutOfBounds { index: 3, len: 1 },
			})
		));
	}

	#[rstest]
	#[case(r#"{"type":"popup","title":"x"}"#)]
	#[case(r#"{"type":"modal","title":"x","button1":"a"}"#)]
	#[case("not json")]
	fn test_decode_form_errors(codec: FormCodec, #[case] json: &str) {
		assert!(matches!(codec.decode_form(json), Err(DecodeError::Json(_))));
	}

	#[rstest]
	fn test_reencode_decoded_form(codec: FormCodec) {
		let form = CustomForm::builder()
			.title("Round")
			.component(SliderComponent::with_bounds("s", -1.0, 1.0).unwrap())
			.build()
			.unwrap();

		let json = codec.encode(&form).unwrap();
		let decoded = codec.decode_form(&json).unwrap();

		assert_eq!(decoded.to_wire(), form.to_wire());
	}

	#[rstest]
	#[case("", RawReply::Closed)]
	#[case("   \n", RawReply::Closed)]
	#[case("null", RawReply::Closed)]
	#[case(" null\n", RawReply::Closed)]
	#[case("1", RawReply::Payload(json!(1)))]
	#[case("[true, \"x\"]\n", RawReply::Payload(json!([true, "x"])))]
	fn test_decode_reply(codec: FormCodec, #[case] raw: &str, #[case] expected: RawReply) {
		assert_eq!(codec.decode_reply(raw).unwrap(), expected);
	}

	#[rstest]
	fn test_decode_reply_malformed(codec: FormCodec) {
		assert!(matches!(codec.decode_reply("[1,"), Err(DecodeError::Json(_))));
	}

	#[rstest]
	fn test_decode_reply_too_large() {
		let codec = FormCodec::new(CodecSettings {
			max_reply_len: 4,
			..CodecSettings::default()
		});

		let err = codec.decode_reply("12345").unwrap_err();

		assert!(matches!(err, DecodeError::TooLarge { len: 5, max: 4 }));
	}
}
