//! Typed responses and resolution outcomes
//!
//! Every response type carries a [`ResponseStatus`]. Closed and invalid
//! replies are represented by explicit sentinel responses rather than by
//! missing data, so a handler always receives a value of the form's response
//! type.

pub mod custom;
pub mod modal;
pub mod result;
pub mod simple;

pub use custom::{AnswerValue, CustomFormResponse};
pub use modal::ModalFormResponse;
pub use result::{FormResponseResult, InvalidReason};
pub use simple::SimpleFormResponse;

use serde::{Deserialize, Serialize};

/// Which of the three resolution outcomes a response stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
	Valid,
	Closed,
	Invalid,
}

/// Shared capabilities of the per-form response types.
pub trait FormResponse: Send + Sized + 'static {
	/// Sentinel delivered when the peer dismissed the form.
	fn closed() -> Self;

	/// Sentinel delivered when the reply did not match the form.
	fn invalid() -> Self;

	fn status(&self) -> ResponseStatus;

	fn is_closed(&self) -> bool {
		self.status() == ResponseStatus::Closed
	}

	fn is_invalid(&self) -> bool {
		self.status() == ResponseStatus::Invalid
	}

	/// True for a response built from a valid reply.
	fn is_correct(&self) -> bool {
		self.status() == ResponseStatus::Valid
	}
}
