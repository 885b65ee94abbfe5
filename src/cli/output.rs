use anyhow::{Result, bail};
use contacts_tui::MarkupSurface;
use contacts_tui::api::Contact;

use super::ExportFormat;

/// Render what the export run loaded in the requested format.
pub(crate) fn format_export(format: ExportFormat, surface: &MarkupSurface) -> Result<String> {
	let Some(list) = surface.list() else {
		bail!("the contact list could not be loaded; see the log file for details");
	};

	match format {
		ExportFormat::Html => Ok(list.to_markup()),
		ExportFormat::Json => format_contacts_json(&list.contacts()),
	}
}

pub(crate) fn format_contacts_json(contacts: &[Contact]) -> Result<String> {
	Ok(serde_json::to_string_pretty(contacts)?)
}

/// Print the export output to stdout.
pub(crate) fn print_export(format: ExportFormat, surface: &MarkupSurface) -> Result<()> {
	println!("{}", format_export(format, surface)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use contacts_tui::api::{ApiResult, ContactFields, ContactId, ContactsApi};
	use contacts_tui::{Command, ContactViewController};
	use serde_json::Value;

	use super::*;

	struct StaticApi(Vec<Contact>);

	impl ContactsApi for StaticApi {
		fn health(&self) -> ApiResult<()> {
			Ok(())
		}

		fn list(&self, _search: Option<&str>) -> ApiResult<Vec<Contact>> {
			Ok(self.0.clone())
		}

		fn create(&self, _fields: &ContactFields) -> ApiResult<Option<Contact>> {
			Ok(None)
		}

		fn update(&self, _id: &ContactId, _fields: &ContactFields) -> ApiResult<Option<Contact>> {
			Ok(None)
		}

		fn delete(&self, _id: &ContactId) -> ApiResult<()> {
			Ok(())
		}
	}

	fn loaded(contacts: Vec<Contact>) -> MarkupSurface {
		let mut controller = ContactViewController::new(StaticApi(contacts), MarkupSurface::default());
		controller.dispatch(Command::Initialize);
		controller.into_surface()
	}

	#[test]
	fn json_export_lists_contacts_in_order() {
		let surface = loaded(vec![
			Contact::new("7", "Ada Lovelace").with_email("ada@example.com"),
			Contact::new("8", "Cher"),
		]);
		let json = format_export(ExportFormat::Json, &surface).unwrap();
		let value: Value = serde_json::from_str(&json).unwrap();
		assert_eq!(value[0]["id"], "7");
		assert_eq!(value[0]["email"], "ada@example.com");
		assert_eq!(value[1]["name"], "Cher");
		assert!(value[1].get("phone").is_none());
	}

	#[test]
	fn html_export_escapes_names() {
		let surface = loaded(vec![Contact::new("1", "<b>Bold</b>")]);
		let html = format_export(ExportFormat::Html, &surface).unwrap();
		assert!(html.contains("&lt;b&gt;Bold&lt;/b&gt;"));
		assert!(!html.contains("<b>"));
	}

	#[test]
	fn missing_list_is_an_error() {
		let err = format_export(ExportFormat::Html, &MarkupSurface::default()).unwrap_err();
		assert!(err.to_string().contains("could not be loaded"));
	}
}
