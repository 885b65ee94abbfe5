//! Core crate exports for building and running the `contacts` terminal
//! interface.
//!
//! The service client lives in [`api`], the pure view-models in [`view`], the
//! reconciliation logic in [`controller`], and the ratatui front end in
//! [`ui`]. The root re-exports the handful of types embedders need.

pub mod api;
pub mod app_dirs;
pub mod controller;
pub mod logging;
pub mod ui;
pub mod view;

pub use api::{ApiError, Contact, ContactFields, ContactId, ContactsApi, HttpContactsApi};
pub use controller::{Command, ContactViewController, FormLabels, ServiceStatus, Surface};
pub use ui::{App, Theme, UiConfig, run};
pub use view::{CardView, FormView, ListView, MarkupSurface, render_list};
