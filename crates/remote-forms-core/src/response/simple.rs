use crate::component::ButtonComponent;
use crate::response::{FormResponse, ResponseStatus};

/// Response to a simple form: which button was clicked.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleFormResponse {
	status: ResponseStatus,
	clicked_button_id: Option<usize>,
	clicked_button: Option<ButtonComponent>,
}

impl SimpleFormResponse {
	pub(crate) fn new(clicked_button_id: usize, clicked_button: Option<ButtonComponent>) -> Self {
		Self {
			status: ResponseStatus::Valid,
			clicked_button_id: Some(clicked_button_id),
			clicked_button,
		}
	}

	fn sentinel(status: ResponseStatus) -> Self {
		Self {
			status,
			clicked_button_id: None,
			clicked_button: None,
		}
	}

	/// Index of the clicked button. `None` on the closed and invalid sentinels.
	pub fn clicked_button_id(&self) -> Option<usize> {
		self.clicked_button_id
	}

	pub fn clicked_button(&self) -> Option<&ButtonComponent> {
		self.clicked_button.as_ref()
	}
}

impl FormResponse for SimpleFormResponse {
	fn closed() -> Self {
		Self::sentinel(ResponseStatus::Closed)
	}

	fn invalid() -> Self {
		Self::sentinel(ResponseStatus::Invalid)
	}

	fn status(&self) -> ResponseStatus {
		self.status
	}
}
