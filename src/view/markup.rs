use std::fmt::Write;

use super::{CardView, EMPTY_PLACEHOLDER, FormView, ListView, escape_html};
use crate::controller::Surface;

impl CardView {
	/// Render the card as HTML. Every interpolated field is escaped on its
	/// own, including the attribute values carried by the edit button.
	#[must_use]
	pub fn to_markup(&self) -> String {
		let edit = &self.edit;
		let optional = |value: &Option<String>| escape_html(value.as_deref().unwrap_or_default());

		let mut out = String::new();
		let _ = writeln!(out, r#"<div class="contact-card">"#);
		let _ = writeln!(out, r#"<div class="contact-header">"#);
		let _ = writeln!(
			out,
			r#"<div class="avatar">{}</div>"#,
			escape_html(&self.initials)
		);
		let _ = writeln!(
			out,
			r#"<div class="contact-info"><h3>{}</h3></div>"#,
			escape_html(&self.name)
		);
		let _ = writeln!(out, "</div>");
		let _ = writeln!(out, r#"<div class="contact-details">"#);
		for detail in &self.details {
			let _ = writeln!(
				out,
				r#"<div class="detail-item">{} {}</div>"#,
				detail.kind.icon(),
				escape_html(&detail.value)
			);
		}
		let _ = writeln!(out, "</div>");
		let _ = writeln!(out, r#"<div class="card-actions">"#);
		let _ = writeln!(
			out,
			r#"<button class="action-btn edit" data-id="{}" data-name="{}" data-phone="{}" data-email="{}" data-address="{}">Edit</button>"#,
			escape_html(edit.id.as_str()),
			escape_html(&edit.name),
			optional(&edit.phone),
			optional(&edit.email),
			optional(&edit.address),
		);
		let _ = writeln!(
			out,
			r#"<button class="action-btn delete" data-id="{}">Delete</button>"#,
			escape_html(self.id.as_str())
		);
		let _ = writeln!(out, "</div>");
		out.push_str("</div>");
		out
	}
}

impl ListView {
	/// Render the list container followed by the empty-state placeholder,
	/// which is hidden whenever there are cards.
	#[must_use]
	pub fn to_markup(&self) -> String {
		let mut out = String::from("<div id=\"contactsList\">\n");
		for card in self.cards() {
			out.push_str(&card.to_markup());
			out.push('\n');
		}
		out.push_str("</div>\n");
		let hidden = if self.shows_placeholder() {
			""
		} else {
			" class=\"hidden\""
		};
		let _ = write!(out, "<div id=\"emptyState\"{hidden}>{EMPTY_PLACEHOLDER}</div>");
		out
	}
}

/// Non-interactive surface that keeps the latest rendering for export.
///
/// Forms and confirmations never appear in export mode; alerts are kept so
/// the caller can report them.
#[derive(Debug, Default)]
pub struct MarkupSurface {
	list: Option<ListView>,
	alerts: Vec<String>,
	maintenance: bool,
}

impl MarkupSurface {
	#[must_use]
	pub fn list(&self) -> Option<&ListView> {
		self.list.as_ref()
	}

	#[must_use]
	pub fn markup(&self) -> Option<String> {
		self.list.as_ref().map(ListView::to_markup)
	}

	#[must_use]
	pub fn alerts(&self) -> &[String] {
		&self.alerts
	}

	#[must_use]
	pub fn in_maintenance(&self) -> bool {
		self.maintenance
	}
}

impl Surface for MarkupSurface {
	fn show_list(&mut self, list: ListView) {
		self.list = Some(list);
	}

	fn open_form(&mut self, _form: FormView) {}

	fn close_form(&mut self) {}

	fn alert(&mut self, message: &str) {
		self.alerts.push(message.to_string());
	}

	fn request_confirmation(&mut self, _prompt: &str) {}

	fn show_maintenance(&mut self) {
		self.maintenance = true;
	}
}
