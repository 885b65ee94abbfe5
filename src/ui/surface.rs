use std::collections::VecDeque;

use super::form::ContactForm;
use crate::controller::Surface;
use crate::view::{FormView, ListView};

/// Terminal implementation of the controller's [`Surface`].
///
/// It only stores what should be on screen; drawing happens in
/// [`App::draw`](super::App::draw).
#[derive(Default)]
pub struct TuiSurface {
	pub(crate) list: ListView,
	pub(crate) form: Option<ContactForm>,
	pub(crate) alerts: VecDeque<String>,
	pub(crate) confirmation: Option<String>,
	pub(crate) maintenance: bool,
}

impl TuiSurface {
	#[must_use]
	pub fn list(&self) -> &ListView {
		&self.list
	}

	#[must_use]
	pub fn form(&self) -> Option<&ContactForm> {
		self.form.as_ref()
	}

	#[must_use]
	pub fn current_alert(&self) -> Option<&str> {
		self.alerts.front().map(String::as_str)
	}

	#[must_use]
	pub fn confirmation(&self) -> Option<&str> {
		self.confirmation.as_deref()
	}

	#[must_use]
	pub fn in_maintenance(&self) -> bool {
		self.maintenance
	}

	pub(crate) fn dismiss_alert(&mut self) {
		self.alerts.pop_front();
	}
}

impl Surface for TuiSurface {
	fn show_list(&mut self, list: ListView) {
		self.list = list;
	}

	fn open_form(&mut self, form: FormView) {
		self.form = Some(ContactForm::new(form));
	}

	fn close_form(&mut self) {
		self.form = None;
	}

	fn alert(&mut self, message: &str) {
		self.alerts.push_back(message.to_string());
	}

	fn request_confirmation(&mut self, prompt: &str) {
		self.confirmation = Some(prompt.to_string());
	}

	fn show_maintenance(&mut self) {
		self.maintenance = true;
		self.form = None;
		self.confirmation = None;
	}
}
