//! Widgets drawn by [`App::draw`](crate::ui::App).

mod dialog;
mod list;
mod modal;

pub use dialog::{DialogKind, render_dialog};
pub use list::render_contacts;
pub use modal::{centered_rect, render_form};
