use crate::component::ComponentType;
use crate::response::ResponseStatus;

/// Why a reply was rejected as invalid.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidReason {
	#[error("malformed reply: {0}")]
	Malformed(String),
	#[error("expected {expected} reply")]
	UnexpectedType { expected: &'static str },
	#[error("button index {index} is out of range for {count} buttons")]
	ButtonOutOfRange { index: i128, count: usize },
	#[error("expected {expected} answers, got {actual}")]
	LengthMismatch { expected: usize, actual: usize },
	#[error("answer at position {position} does not fit a {expected} component")]
	ComponentMismatch {
		position: usize,
		expected: ComponentType,
	},
	#[error("answer at position {position} is out of range for its {expected} component")]
	ComponentOutOfRange {
		position: usize,
		expected: ComponentType,
	},
	#[error("label slot at position {position} must be null")]
	LabelSlotNotNull { position: usize },
}

/// Outcome of resolving a reply against a form.
///
/// Exactly one of closed, invalid or valid. Only the valid outcome carries
/// a response.
#[derive(Debug, Clone, PartialEq)]
pub enum FormResponseResult<R> {
	Closed,
	Invalid(InvalidReason),
	Valid(R),
}

impl<R> FormResponseResult<R> {
	pub fn status(&self) -> ResponseStatus {
		match self {
			Self::Closed => ResponseStatus::Closed,
			Self::Invalid(_) => ResponseStatus::Invalid,
			Self::Valid(_) => ResponseStatus::Valid,
		}
	}

	pub fn is_closed(&self) -> bool {
		matches!(self, Self::Closed)
	}

	pub fn is_invalid(&self) -> bool {
		matches!(self, Self::Invalid(_))
	}

	pub fn is_valid(&self) -> bool {
		matches!(self, Self::Valid(_))
	}

	/// The response of a valid outcome, `None` otherwise.
	pub fn response(&self) -> Option<&R> {
		match self {
			Self::Valid(response) => Some(response),
			_ => None,
		}
	}

	pub fn into_response(self) -> Option<R> {
		match self {
			Self::Valid(response) => Some(response),
			_ => None,
		}
	}

	pub fn invalid_reason(&self) -> Option<&InvalidReason> {
		match self {
			Self::Invalid(reason) => Some(reason),
			_ => None,
		}
	}

	pub fn map<T>(self, f: impl FnOnce(R) -> T) -> FormResponseResult<T> {
		match self {
			Self::Closed => FormResponseResult::Closed,
			Self::Invalid(reason) => FormResponseResult::Invalid(reason),
			Self::Valid(response) => FormResponseResult::Valid(f(response)),
		}
	}
}
