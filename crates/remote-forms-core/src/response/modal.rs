use crate::response::{FormResponse, ResponseStatus};

/// Response to a modal form: button 0 (`button1`) or button 1 (`button2`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalFormResponse {
	status: ResponseStatus,
	clicked_button_id: Option<usize>,
	clicked_button_text: Option<String>,
}

impl ModalFormResponse {
	pub(crate) fn new(clicked_button_id: usize, clicked_button_text: String) -> Self {
		Self {
			status: ResponseStatus::Valid,
			clicked_button_id: Some(clicked_button_id),
			clicked_button_text: Some(clicked_button_text),
		}
	}

	fn sentinel(status: ResponseStatus) -> Self {
		Self {
			status,
			clicked_button_id: None,
			clicked_button_text: None,
		}
	}

	pub fn clicked_button_id(&self) -> Option<usize> {
		self.clicked_button_id
	}

	pub fn clicked_button_text(&self) -> Option<&str> {
		self.clicked_button_text.as_deref()
	}

	/// Whether the first button (`button1`) was clicked.
	pub fn clicked_first(&self) -> bool {
		self.clicked_button_id == Some(0)
	}
}

impl FormResponse for ModalFormResponse {
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
