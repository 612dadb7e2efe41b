//! # Remote Forms
//!
//! Typed forms for remote UI clients.
//!
//! A host builds a form, encodes it as JSON for the remote peer, and later
//! resolves the peer's raw reply into one of three outcomes: the form was
//! closed, the reply was invalid, or a typed response was produced. The
//! response is delivered to the handlers registered on the form, at most once.
//!
//! ## Form Variants
//!
//! - [`SimpleForm`] - a text and a list of buttons, answered with a button index
//! - [`ModalForm`] - a text and exactly two buttons
//! - [`CustomForm`] - labels, toggles, sliders, step sliders, dropdowns and inputs
//!
//! ## Quick Example
//!
//! ```rust
//! use remote_forms::prelude::*;
//!
//! let form = SimpleForm::builder()
//!     .title("Menu")
//!     .content("Pick one")
//!     .button("A")
//!     .button("B")
//!     .response_handler(|response| {
//!         if let Some(button) = response.clicked_button() {
//!             println!("clicked {}", button.text());
//!         }
//!     })
//!     .build()
//!     .unwrap();
//!
//! let resolver = FormResolver::default();
//! let wire = resolver.codec().encode(&form).unwrap();
//! // ... send `wire` to the peer, receive its reply ...
//! assert_eq!(resolver.handle(&form, "1").unwrap(), ResponseStatus::Valid);
//! ```
//!
//! ## Settings
//!
//! [`FormsSettings`] controls reply size limits, pretty printing and how label
//! components appear in custom form replies. It can be loaded from a TOML or
//! JSON file with [`FormsSettings::from_file`].

pub use remote_forms_core::*;

pub mod prelude {
	pub use remote_forms_core::prelude::*;
}
