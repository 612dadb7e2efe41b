//! Localization seam for form builders
//!
//! Builders pass every piece of displayed text through a [`Translator`]
//! before storing it. The crate ships no catalogs; hosts plug in their own
//! lookup.

use std::fmt;
use std::sync::Arc;

/// A text translation hook shared by builders.
///
/// # Examples
///
/// ```
/// use remote_forms_core::Translator;
///
/// let shout = Translator::new(|text| text.to_uppercase());
/// assert_eq!(shout.translate("hello"), "HELLO");
///
/// let localized = Translator::with_locale(
///     |text, locale| format!("{}:{}", locale, text),
///     "de_de",
/// );
/// assert_eq!(localized.translate("menu.title"), "de_de:menu.title");
/// ```
#[derive(Clone)]
pub struct Translator(Arc<dyn Fn(&str) -> String + Send + Sync>);

impl Translator {
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(&str) -> String + Send + Sync + 'static,
	{
		Self(Arc::new(f))
	}

	/// Bind a locale-aware lookup `(text, locale) -> text` to one locale.
	pub fn with_locale<F>(f: F, locale: impl Into<String>) -> Self
	where
		F: Fn(&str, &str) -> String + Send + Sync + 'static,
	{
		let locale = locale.into();
		Self::new(move |text| f(text, &locale))
	}

	/// Returns the text unchanged.
	pub fn identity() -> Self {
		Self::new(str::to_string)
	}

	pub fn translate(&self, text: &str) -> String {
		(self.0)(text)
	}
}

impl Default for Translator {
	fn default() -> Self {
		Self::identity()
	}
}

impl fmt::Debug for Translator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Translator")
	}
}
