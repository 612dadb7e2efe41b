use crate::component::{ValidationError, ValidationErrorKind, ValidationResult};
use serde::{Deserialize, Serialize};

/// Numeric slider over `min..=max` moving in increments of `step`.
///
/// Answered with a number inside the bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderComponent {
	text: String,
	min: f32,
	max: f32,
	step: f32,
	default: f32,
}

impl SliderComponent {
	/// Create a slider, checking `min <= default <= max` and `step > 0`.
	///
	/// # Examples
	///
	/// ```
	/// use remote_forms_core::SliderComponent;
	///
	/// let volume = SliderComponent::new("Volume", 0.0, 100.0, 5.0, 50.0).unwrap();
	/// assert_eq!(volume.default_value(), 50.0);
	///
	/// let err = SliderComponent::new("Volume", 0.0, 100.0, 0.0, 50.0).unwrap_err();
	/// assert_eq!(err.field, "step");
	/// ```
	pub fn new(
		text: impl Into<String>,
		min: f32,
		max: f32,
		step: f32,
		default: f32,
	) -> ValidationResult<Self> {
		let slider = Self {
			text: text.into(),
			min,
			max,
			step,
			default,
		};
		slider.validate()?;
		Ok(slider)
	}

	/// Slider with a step of 1 starting at `min`.
	pub fn with_bounds(text: impl Into<String>, min: f32, max: f32) -> ValidationResult<Self> {
		Self::new(text, min, max, 1.0, min)
	}

	pub fn text(&self) -> &str {
		&self.text
	}

	pub fn min(&self) -> f32 {
		self.min
	}

	pub fn max(&self) -> f32 {
		self.max
	}

	pub fn step(&self) -> f32 {
		self.step
	}

	pub fn default_value(&self) -> f32 {
		self.default
	}

	/// Whether an answer lies within the bounds.
	pub fn accepts(&self, value: f32) -> bool {
		self.accepts_f64(f64::from(value))
	}

	/// Bounds check on an answer as the peer sent it, before any narrowing to `f32`.
	pub fn accepts_f64(&self, value: f64) -> bool {
		value.is_finite() && value >= f64::from(self.min) && value <= f64::from(self.max)
	}

	pub(crate) fn validate(&self) -> ValidationResult<()> {
		for (field, value) in [
			("min", self.min),
			("max", self.max),
			("step", self.step),
			("default", self.default),
		] {
			if !value.is_finite() {
				return Err(ValidationError::new(field, ValidationErrorKind::NotFinite));
			}
		}

		if self.min > self.max {
			return Err(ValidationError::new(
				"min",
				ValidationErrorKind::OutOfRange {
					value: f64::from(self.min),
					min: f64::from(f32::MIN),
					max: f64::from(self.max),
				},
			));
		}

		if self.step <= 0.0 {
			return Err(ValidationError::new("step", ValidationErrorKind::NotPositive));
		}

		if self.default < self.min || self.default > self.max {
			return Err(ValidationError::new(
				"default",
				ValidationErrorKind::OutOfRange {
					value: f64::from(self.default),
					min: f64::from(self.min),
					max: f64::from(self.max),
				},
			));
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_slider_basic() {
		let slider = SliderComponent::new("Score", 0.0, 10.0, 0.5, 2.5).unwrap();

		assert_eq!(slider.text(), "Score");
		assert_eq!(slider.min(), 0.0);
		assert_eq!(slider.max(), 10.0);
		assert_eq!(slider.step(), 0.5);
		assert_eq!(slider.default_value(), 2.5);
	}

	#[rstest]
	fn test_slider_default_on_bounds() {
		assert!(SliderComponent::new("s", 0.0, 10.0, 1.0, 0.0).is_ok());
		assert!(SliderComponent::new("s", 0.0, 10.0, 1.0, 10.0).is_ok());
		assert!(SliderComponent::new("s", 5.0, 5.0, 1.0, 5.0).is_ok());
	}

	#[rstest]
	#[case(0.0, 10.0, 1.0, 11.0, "default")]
	#[case(0.0, 10.0, 1.0, -1.0, "default")]
	#[case(0.0, 10.0, 0.0, 1.0, "step")]
	#[case(0.0, 10.0, -2.0, 1.0, "step")]
	#[case(10.0, 0.0, 1.0, 5.0, "min")]
	#[case(f32::NAN, 10.0, 1.0, 5.0, "min")]
	#[case(0.0, f32::INFINITY, 1.0, 5.0, "max")]
	fn test_slider_rejects_bad_bounds(
		#[case] min: f32,
		#[case] max: f32,
		#[case] step: f32,
		#[case] default: f32,
		#[case] field: &str,
	) {
		let err = SliderComponent::new("s", min, max, step, default).unwrap_err();
		assert_eq!(err.field, field);
	}

	#[rstest]
	fn test_slider_with_bounds_defaults() {
		let slider = SliderComponent::with_bounds("s", 3.0, 9.0).unwrap();

		assert_eq!(slider.step(), 1.0);
		assert_eq!(slider.default_value(), 3.0);
	}

	#[rstest]
	fn test_slider_accepts() {
		let slider = SliderComponent::with_bounds("s", 0.0, 1.0).unwrap();

		assert!(slider.accepts(0.5));
		assert!(!slider.accepts(1.5));
		assert!(!slider.accepts(f32::NAN));
	}

	#[rstest]
	#[case(10.0, true)]
	#[case(0.0, true)]
	#[case(10.0000001, false)]
	#[case(-1e-8, false)]
	#[case(f64::INFINITY, false)]
	fn test_slider_accepts_f64_before_narrowing(#[case] value: f64, #[case] expected: bool) {
		let slider = SliderComponent::with_bounds("s", 0.0, 10.0).unwrap();

		assert_eq!(slider.accepts_f64(value), expected);
	}
}
