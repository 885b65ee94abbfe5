//! Toolkit-independent view-models for the contact list and the form dialog.
//!
//! Everything here is a pure function of server data. The terminal UI draws
//! these models directly, while [`markup`] turns them into escaped HTML.

mod markup;
mod text;

pub use markup::MarkupSurface;
pub use text::{escape_html, get_initials};

use crate::api::{Contact, ContactFields, ContactId};

/// Placeholder shown in place of the list when there is nothing to show.
pub const EMPTY_PLACEHOLDER: &str = "No contacts found";

/// Which optional contact field a detail row displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailKind {
	Phone,
	Email,
	Address,
}

impl DetailKind {
	#[must_use]
	pub fn icon(self) -> &'static str {
		match self {
			Self::Phone => "📞",
			Self::Email => "✉️",
			Self::Address => "📍",
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
	pub kind: DetailKind,
	pub value: String,
}

/// One rendered contact card.
///
/// `edit` holds the full field set so the edit action can refill the form
/// without asking the service again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
	pub id: ContactId,
	pub initials: String,
	pub name: String,
	pub details: Vec<DetailRow>,
	pub edit: Contact,
}

impl CardView {
	#[must_use]
	pub fn from_contact(contact: &Contact) -> Self {
		let details = [
			(DetailKind::Phone, &contact.phone),
			(DetailKind::Email, &contact.email),
			(DetailKind::Address, &contact.address),
		]
		.into_iter()
		.filter_map(|(kind, value)| {
			value
				.as_deref()
				.filter(|value| !value.is_empty())
				.map(|value| DetailRow {
					kind,
					value: value.to_string(),
				})
		})
		.collect();

		Self {
			id: contact.id.clone(),
			initials: get_initials(&contact.name),
			name: contact.name.clone(),
			details,
			edit: contact.clone(),
		}
	}

	/// Target of the delete action.
	#[must_use]
	pub fn delete_target(&self) -> &ContactId {
		&self.id
	}

	#[must_use]
	pub fn detail(&self, kind: DetailKind) -> Option<&str> {
		self.details
			.iter()
			.find(|row| row.kind == kind)
			.map(|row| row.value.as_str())
	}
}

/// The list container's content: either the placeholder or the cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListView {
	#[default]
	Empty,
	Cards(Vec<CardView>),
}

impl ListView {
	#[must_use]
	pub fn cards(&self) -> &[CardView] {
		match self {
			Self::Empty => &[],
			Self::Cards(cards) => cards,
		}
	}

	#[must_use]
	pub fn shows_placeholder(&self) -> bool {
		matches!(self, Self::Empty)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.cards().len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// The contacts behind the rendered cards, in display order.
	#[must_use]
	pub fn contacts(&self) -> Vec<Contact> {
		self.cards().iter().map(|card| card.edit.clone()).collect()
	}
}

/// Build the list view for a response, one card per contact in input order.
#[must_use]
pub fn render_list(contacts: &[Contact]) -> ListView {
	if contacts.is_empty() {
		return ListView::Empty;
	}
	ListView::Cards(contacts.iter().map(CardView::from_contact).collect())
}

/// Title and field values shown when the form dialog opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
	pub title: String,
	pub fields: ContactFields,
}
