//! Client side of the Contacts REST service.
//!
//! [`ContactsApi`] is the seam the controller talks through. The blocking
//! [`HttpContactsApi`] implements it against a live service; tests provide
//! in-memory implementations.

mod http;
mod model;

use thiserror::Error;

pub use http::{Endpoints, HttpContactsApi};
pub use model::{Contact, ContactFields, ContactId};

/// Failure of a request to the Contacts service.
#[derive(Debug, Error)]
pub enum ApiError {
	#[error("invalid base URL `{url}`: {reason}")]
	InvalidBaseUrl { url: String, reason: String },
	#[error("request failed: {0}")]
	Transport(#[from] reqwest::Error),
	#[error("Server responded with {status}: {body}")]
	Status { status: u16, body: String },
	#[error("unexpected response body: {0}")]
	Decode(#[from] serde_json::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Operations offered by the Contacts service.
///
/// Create and update return the stored contact when the service echoes it
/// back, and `None` when it only acknowledges the write.
pub trait ContactsApi {
	fn health(&self) -> ApiResult<()>;

	fn list(&self, search: Option<&str>) -> ApiResult<Vec<Contact>>;

	fn create(&self, fields: &ContactFields) -> ApiResult<Option<Contact>>;

	fn update(&self, id: &ContactId, fields: &ContactFields) -> ApiResult<Option<Contact>>;

	fn delete(&self, id: &ContactId) -> ApiResult<()>;
}

impl<T: ContactsApi + ?Sized> ContactsApi for Box<T> {
	fn health(&self) -> ApiResult<()> {
		(**self).health()
	}

	fn list(&self, search: Option<&str>) -> ApiResult<Vec<Contact>> {
		(**self).list(search)
	}

	fn create(&self, fields: &ContactFields) -> ApiResult<Option<Contact>> {
		(**self).create(fields)
	}

	fn update(&self, id: &ContactId, fields: &ContactFields) -> ApiResult<Option<Contact>> {
		(**self).update(id, fields)
	}

	fn delete(&self, id: &ContactId) -> ApiResult<()> {
		(**self).delete(id)
	}
}
