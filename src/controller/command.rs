use crate::api::{Contact, ContactFields, ContactId};

/// A user action, bound by the UI layer and handled by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
	/// One-time startup: health probe, then the unfiltered list.
	Initialize,
	Search(String),
	/// Repeat the most recent list request.
	Reload,
	OpenCreate,
	/// Open the form for a contact taken from a rendered card.
	OpenEdit(Contact),
	CloseModal,
	Submit(ContactFields),
	Delete(ContactId),
	/// Answer to the pending delete confirmation.
	ResolveDelete(bool),
}
