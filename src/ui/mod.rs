//! Terminal front end for the contacts service.
//!
//! [`App`] owns a [`ContactViewController`](crate::controller::ContactViewController)
//! wired to a [`TuiSurface`]; key presses become controller commands and the
//! surface's state is drawn every frame.

mod actions;
pub mod components;
mod config;
mod form;
mod render;
mod runtime;
mod state;
mod surface;
pub mod theme;

pub use actions::Flow;
pub use config::{DEFAULT_MAINTENANCE_MESSAGE, UiConfig};
pub use form::{ContactForm, FormField};
pub use runtime::run;
pub use state::App;
pub use surface::TuiSurface;
pub use theme::Theme;
