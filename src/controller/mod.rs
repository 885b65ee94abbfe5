//! Reconciles Contacts service responses with the rendered list and the form
//! dialog.
//!
//! The controller owns its [`UiState`] and talks to the outside world through
//! two seams: [`ContactsApi`] for the service and [`Surface`] for the UI.
//! Every user action arrives as a [`Command`] and maps to exactly one
//! operation. Mutations are always followed by a full reload of the list,
//! never an incremental patch.

mod command;
mod state;
mod surface;

pub use command::Command;
pub use state::{FormMode, UiState};
pub use surface::Surface;

use tracing::{error, info, warn};

use crate::api::{Contact, ContactFields, ContactId, ContactsApi};
use crate::view::{FormView, render_list};

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this contact?";
pub const UPDATE_FAILED: &str = "Failed to update contact";
pub const DELETE_FAILED: &str = "Failed to delete contact";

/// Titles shown on the form dialog in each mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormLabels {
	pub create_title: String,
	pub edit_title: String,
}

impl Default for FormLabels {
	fn default() -> Self {
		Self {
			create_title: "Add Contact".to_string(),
			edit_title: "Edit Contact".to_string(),
		}
	}
}

/// Outcome of the startup health probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceStatus {
	Available,
	Unavailable,
}

pub struct ContactViewController<A, S> {
	api: A,
	surface: S,
	state: UiState,
	labels: FormLabels,
	last_query: String,
}

impl<A: ContactsApi, S: Surface> ContactViewController<A, S> {
	pub fn new(api: A, surface: S) -> Self {
		Self {
			api,
			surface,
			state: UiState::default(),
			labels: FormLabels::default(),
			last_query: String::new(),
		}
	}

	#[must_use]
	pub fn with_labels(mut self, labels: FormLabels) -> Self {
		self.labels = labels;
		self
	}

	#[must_use]
	pub fn state(&self) -> &UiState {
		&self.state
	}

	#[must_use]
	pub fn api(&self) -> &A {
		&self.api
	}

	#[must_use]
	pub fn surface(&self) -> &S {
		&self.surface
	}

	pub fn surface_mut(&mut self) -> &mut S {
		&mut self.surface
	}

	pub fn into_surface(self) -> S {
		self.surface
	}

	/// Query used by the most recent list request.
	#[must_use]
	pub fn last_query(&self) -> &str {
		&self.last_query
	}

	pub fn dispatch(&mut self, command: Command) {
		match command {
			Command::Initialize => {
				self.initialize();
			}
			Command::Search(query) => self.load_contacts(&query),
			Command::Reload => {
				let query = self.last_query.clone();
				self.load_contacts(&query);
			}
			Command::OpenCreate => self.open_modal(None),
			Command::OpenEdit(contact) => self.open_modal(Some(&contact)),
			Command::CloseModal => self.close_modal(),
			Command::Submit(fields) => self.submit_form(fields),
			Command::Delete(id) => self.delete_contact(id),
			Command::ResolveDelete(confirmed) => self.resolve_delete(confirmed),
		}
	}

	/// Probe the service. A healthy service gets the unfiltered list loaded;
	/// an unhealthy one switches the surface to maintenance and stops there.
	pub fn initialize(&mut self) -> ServiceStatus {
		match self.api.health() {
			Ok(()) => {
				self.load_contacts("");
				ServiceStatus::Available
			}
			Err(err) => {
				warn!(error = %err, "health check failed");
				self.surface.show_maintenance();
				ServiceStatus::Unavailable
			}
		}
	}

	/// Fetch contacts, filtered by `query` when it is non-empty, and replace
	/// the rendered list. Failures are logged and leave the list as it was.
	pub fn load_contacts(&mut self, query: &str) {
		self.last_query = query.to_string();
		let search = (!query.is_empty()).then_some(query);
		match self.api.list(search) {
			Ok(contacts) => {
				info!(count = contacts.len(), query, "contacts loaded");
				self.surface.show_list(render_list(&contacts));
			}
			Err(err) => error!(error = %err, "error fetching contacts"),
		}
	}

	/// Open the form in create mode (`None`) or edit mode for `contact`.
	pub fn open_modal(&mut self, contact: Option<&Contact>) {
		let form = match contact {
			Some(contact) => {
				self.state.mode = FormMode::Edit(contact.id.clone());
				FormView {
					title: self.labels.edit_title.clone(),
					fields: contact.fields(),
				}
			}
			None => {
				self.state.mode = FormMode::Create;
				FormView {
					title: self.labels.create_title.clone(),
					fields: ContactFields::default(),
				}
			}
		};
		self.surface.open_form(form);
	}

	/// Hide the form. The create/edit mode is kept until the next open.
	pub fn close_modal(&mut self) {
		self.surface.close_form();
	}

	/// Create or update depending on the current mode, then close the form
	/// and reload the list whether or not the write succeeded.
	pub fn submit_form(&mut self, fields: ContactFields) {
		match self.state.mode.clone() {
			FormMode::Edit(id) => self.update_contact(&id, &fields),
			FormMode::Create => self.create_contact(&fields),
		}
		self.close_modal();
		self.load_contacts("");
	}

	/// Ask the surface to confirm deleting `id`. Nothing is sent until the
	/// answer arrives through [`Self::resolve_delete`].
	pub fn delete_contact(&mut self, id: ContactId) {
		self.state.pending_delete = Some(id);
		self.surface.request_confirmation(DELETE_PROMPT);
	}

	pub fn resolve_delete(&mut self, confirmed: bool) {
		let Some(id) = self.state.pending_delete.take() else {
			return;
		};
		if !confirmed {
			return;
		}
		match self.api.delete(&id) {
			Ok(()) => {
				info!(%id, "contact deleted");
				self.load_contacts("");
			}
			Err(err) => {
				error!(%id, error = %err, "error deleting contact");
				self.surface.alert(DELETE_FAILED);
			}
		}
	}

	fn create_contact(&mut self, fields: &ContactFields) {
		match self.api.create(fields) {
			Ok(created) => info!(
				id = created.as_ref().map(|contact| contact.id.as_str()),
				"contact created"
			),
			Err(err) => {
				error!(error = %err, "error creating contact");
				self.surface
					.alert(&format!("Failed to create contact: {err}"));
			}
		}
	}

	fn update_contact(&mut self, id: &ContactId, fields: &ContactFields) {
		match self.api.update(id, fields) {
			Ok(_) => info!(%id, "contact updated"),
			Err(err) => {
				error!(%id, error = %err, "error updating contact");
				self.surface.alert(UPDATE_FAILED);
			}
		}
	}
}
