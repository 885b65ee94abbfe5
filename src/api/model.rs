use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned identifier of a contact.
///
/// Backends differ in whether they key rows by integer or by string, so the
/// identifier accepts both on the wire and is always handled as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ContactId(String);

impl ContactId {
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for ContactId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for ContactId {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}

impl<'de> Deserialize<'de> for ContactId {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		#[derive(Deserialize)]
		#[serde(untagged)]
		enum RawId {
			Text(String),
			Signed(i64),
			Unsigned(u64),
		}

		Ok(match RawId::deserialize(deserializer)? {
			RawId::Text(text) => Self(text),
			RawId::Signed(number) => Self(number.to_string()),
			RawId::Unsigned(number) => Self(number.to_string()),
		})
	}
}

/// A contact as returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
	pub id: ContactId,
	pub name: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub phone: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub email: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub address: Option<String>,
}

impl Contact {
	pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			id: ContactId::new(id),
			name: name.into(),
			phone: None,
			email: None,
			address: None,
		}
	}

	#[must_use]
	pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
		self.phone = Some(phone.into());
		self
	}

	#[must_use]
	pub fn with_email(mut self, email: impl Into<String>) -> Self {
		self.email = Some(email.into());
		self
	}

	#[must_use]
	pub fn with_address(mut self, address: impl Into<String>) -> Self {
		self.address = Some(address.into());
		self
	}

	/// Form values for this contact, with missing fields left empty.
	#[must_use]
	pub fn fields(&self) -> ContactFields {
		ContactFields {
			name: self.name.clone(),
			phone: self.phone.clone().unwrap_or_default(),
			email: self.email.clone().unwrap_or_default(),
			address: self.address.clone().unwrap_or_default(),
		}
	}
}

/// Editable fields submitted on create and update. Empty values are sent as
/// empty strings rather than omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
	pub name: String,
	pub phone: String,
	pub email: String,
	pub address: String,
}

impl ContactFields {
	pub fn new(
		name: impl Into<String>,
		phone: impl Into<String>,
		email: impl Into<String>,
		address: impl Into<String>,
	) -> Self {
		Self {
			name: name.into(),
			phone: phone.into(),
			email: email.into(),
			address: address.into(),
		}
	}
}
