use crate::controller::FormLabels;

pub const DEFAULT_MAINTENANCE_MESSAGE: &str =
	"The contacts service is currently unavailable. Please try again later.";

/// Text used by the UI when rendering the list, form and maintenance screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
	pub labels: FormLabels,
	pub search_title: String,
	pub maintenance_message: String,
	/// Search issued right after a successful startup, when non-empty.
	pub initial_query: String,
}

impl Default for UiConfig {
	fn default() -> Self {
		Self {
			labels: FormLabels::default(),
			search_title: "Search".to_string(),
			maintenance_message: DEFAULT_MAINTENANCE_MESSAGE.to_string(),
			initial_query: String::new(),
		}
	}
}
