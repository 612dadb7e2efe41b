use serde::{Deserialize, Serialize};

/// Where the remote peer loads a form image from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageType {
	/// Path inside the peer's bundled resources.
	Path,
	Url,
}

/// Image attached to a button or a custom form.
///
/// Serialized as `{"type":"path"|"url","data":"..."}`.
///
/// # Examples
///
/// ```
/// use remote_forms_core::{FormImage, ImageType};
///
/// let image = FormImage::url("https://example.com/icon.png");
/// assert_eq!(image.kind(), ImageType::Url);
/// assert_eq!(image.data(), "https://example.com/icon.png");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormImage {
	#[serde(rename = "type")]
	kind: ImageType,
	data: String,
}

impl FormImage {
	pub fn new(kind: ImageType, data: impl Into<String>) -> Self {
		Self {
			kind,
			data: data.into(),
		}
	}

	pub fn path(data: impl Into<String>) -> Self {
		Self::new(ImageType::Path, data)
	}

	pub fn url(data: impl Into<String>) -> Self {
		Self::new(ImageType::Url, data)
	}

	pub fn kind(&self) -> ImageType {
		self.kind
	}

	pub fn data(&self) -> &str {
		&self.data
	}
}
