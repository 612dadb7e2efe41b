use crate::image::{FormImage, ImageType};
use crate::response::SimpleFormResponse;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Callback run when a button is the one clicked in a valid simple form reply.
pub type ButtonCallback = Arc<dyn Fn(&SimpleFormResponse) + Send + Sync>;

/// A button of a simple form, with an optional image next to it.
///
/// The callback is not part of the button's value: equality, `Debug` and the
/// wire format all ignore it.
///
/// # Examples
///
/// ```
/// use remote_forms_core::{ButtonComponent, FormImage};
///
/// let plain = ButtonComponent::new("Play");
/// let with_image = ButtonComponent::new("Play").with_image(FormImage::path("textures/play"));
///
/// assert_eq!(plain.text(), "Play");
/// assert!(plain.image().is_none());
/// assert!(with_image.image().is_some());
/// ```
#[derive(Clone, Serialize, Deserialize)]
pub struct ButtonComponent {
	text: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	image: Option<FormImage>,
	#[serde(skip)]
	callback: Option<ButtonCallback>,
}

impl ButtonComponent {
	pub fn new(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			image: None,
			callback: None,
		}
	}

	pub fn with_image(mut self, image: FormImage) -> Self {
		self.image = Some(image);
		self
	}

	pub fn with_image_data(self, kind: ImageType, data: impl Into<String>) -> Self {
		self.with_image(FormImage::new(kind, data))
	}

	pub fn with_callback<F>(mut self, callback: F) -> Self
	where
		F: Fn(&SimpleFormResponse) + Send + Sync + 'static,
	{
		self.callback = Some(Arc::new(callback));
		self
	}

	pub fn text(&self) -> &str {
		&self.text
	}

	pub fn image(&self) -> Option<&FormImage> {
		self.image.as_ref()
	}

	pub fn callback(&self) -> Option<&ButtonCallback> {
		self.callback.as_ref()
	}
}

impl PartialEq for ButtonComponent {
	fn eq(&self, other: &Self) -> bool {
		self.text == other.text && self.image == other.image
	}
}

impl fmt::Debug for ButtonComponent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ButtonComponent")
			.field("text", &self.text)
			.field("image", &self.image)
			.field("has_callback", &self.callback.is_some())
			.finish()
	}
}
