//! Typed forms for remote UI clients
//!
//! This crate provides the building blocks to show forms on a remote peer and
//! interpret its replies:
//! - Components: buttons, labels, toggles, sliders, step sliders, dropdowns and inputs
//! - Forms: simple (button list), modal (two buttons) and custom (component list)
//! - Builders with a translation hook applied to every displayed text
//! - A JSON wire codec for forms and replies
//! - Resolution of raw replies into closed, invalid or valid outcomes,
//!   dispatched to handlers at most once per form
//!
//! ## Example
//!
//! ```
//! use remote_forms_core::prelude::*;
//! use std::sync::{Arc, Mutex};
//!
//! let volume = Arc::new(Mutex::new(None));
//! let sink = volume.clone();
//! let form = CustomForm::builder()
//!     .title("Settings")
//!     .label("Audio")
//!     .slider("Volume", 0.0, 10.0, 1.0, 5.0)
//!     .response_handler(move |mut response: CustomFormResponse| {
//!         *sink.lock().unwrap() = response.next_slider();
//!     })
//!     .build()
//!     .unwrap();
//!
//! let resolver = FormResolver::default();
//! let wire = resolver.codec().encode(&form).unwrap();
//! assert!(wire.starts_with(r#"{"type":"custom_form""#));
//!
//! assert_eq!(resolver.handle(&form, "[7]").unwrap(), ResponseStatus::Valid);
//! assert_eq!(*volume.lock().unwrap(), Some(7.0));
//! ```

pub mod codec;
pub mod component;
pub mod form;
pub mod image;
pub mod resolution;
pub mod response;
pub mod settings;
pub mod translate;

pub use codec::{DecodeError, EncodeError, FormCodec, WireForm};
pub use component::{
	ButtonComponent, Component, ComponentType, DropdownBuilder, DropdownComponent,
	InputComponent, LabelComponent, SliderComponent, StepSliderComponent, ToggleComponent,
	ValidationError, ValidationErrorKind, ValidationResult,
};
pub use form::{
	AnyForm, CustomForm, CustomFormBuilder, Form, FormBuilder, FormType, ModalForm,
	ModalFormBuilder, SimpleForm, SimpleFormBuilder,
};
pub use image::{FormImage, ImageType};
pub use resolution::{FormResolver, RawReply, ResolveError};
pub use response::{
	AnswerValue, CustomFormResponse, FormResponse, FormResponseResult, InvalidReason,
	ModalFormResponse, ResponseStatus, SimpleFormResponse,
};
pub use settings::{
	CodecSettings, FormsSettings, LabelSlots, ResolutionSettings, SettingsError,
};
pub use translate::Translator;

/// Commonly used types and traits.
pub mod prelude {
	pub use crate::{
		AnyForm, ButtonComponent, CustomForm, CustomFormResponse, Form, FormBuilder, FormCodec,
		FormImage, FormResolver, FormResponse, FormResponseResult, FormsSettings, ModalForm,
		ModalFormResponse, ResponseStatus, SimpleForm, SimpleFormResponse, Translator,
	};
}
