use crate::api::ContactId;

/// Whether the form dialog creates a new contact or edits an existing one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormMode {
	#[default]
	Create,
	Edit(ContactId),
}

/// Transient state owned by one controller instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
	pub(super) mode: FormMode,
	pub(super) pending_delete: Option<ContactId>,
}

impl UiState {
	#[must_use]
	pub fn mode(&self) -> &FormMode {
		&self.mode
	}

	#[must_use]
	pub fn is_editing(&self) -> bool {
		matches!(self.mode, FormMode::Edit(_))
	}

	#[must_use]
	pub fn current_contact_id(&self) -> Option<&ContactId> {
		match &self.mode {
			FormMode::Create => None,
			FormMode::Edit(id) => Some(id),
		}
	}

	/// Contact awaiting a delete confirmation, if any.
	#[must_use]
	pub fn pending_delete(&self) -> Option<&ContactId> {
		self.pending_delete.as_ref()
	}
}
