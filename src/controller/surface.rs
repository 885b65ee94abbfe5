use crate::view::{FormView, ListView};

/// The document the controller drives: a list container with its empty-state
/// placeholder, a modal form, blocking dialogs, and a maintenance view.
///
/// Implementations only display what they are given. All decisions about
/// what to show are made by [`ContactViewController`](super::ContactViewController).
pub trait Surface {
	/// Replace the list container's content.
	fn show_list(&mut self, list: ListView);

	/// Fill the form with `form.fields`, set its title and make it visible.
	fn open_form(&mut self, form: FormView);

	fn close_form(&mut self);

	/// Show a message the user has to acknowledge.
	fn alert(&mut self, message: &str);

	/// Ask a yes/no question. The answer comes back through
	/// [`Command::ResolveDelete`](super::Command::ResolveDelete).
	fn request_confirmation(&mut self, prompt: &str);

	/// Replace the whole document with the maintenance view.
	fn show_maintenance(&mut self);
}
