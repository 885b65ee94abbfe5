use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::{Client, Response};
use tracing::debug;

use super::{ApiError, ApiResult, Contact, ContactFields, ContactId, ContactsApi};

const API_SEGMENT: &str = "api";
const HEALTH_SEGMENT: &str = "health";
const CONTACTS_SEGMENT: &str = "contacts";
const SEARCH_PARAM: &str = "search";

/// URL layout of the Contacts service below a base URL.
#[derive(Debug, Clone)]
pub struct Endpoints {
	base: Url,
}

impl Endpoints {
	/// Validate `base_url` and derive the service endpoints from it.
	pub fn new(base_url: &str) -> ApiResult<Self> {
		let invalid = |reason: String| ApiError::InvalidBaseUrl {
			url: base_url.to_string(),
			reason,
		};
		let mut base = Url::parse(base_url).map_err(|err| invalid(err.to_string()))?;
		if !matches!(base.scheme(), "http" | "https") {
			return Err(invalid(format!("unsupported scheme `{}`", base.scheme())));
		}
		base.set_query(None);
		base.set_fragment(None);
		Ok(Self { base })
	}

	#[must_use]
	pub fn health(&self) -> Url {
		self.with_segments([API_SEGMENT, HEALTH_SEGMENT])
	}

	/// Collection URL, carrying `?search=` only for a non-empty term.
	#[must_use]
	pub fn contacts(&self, search: Option<&str>) -> Url {
		let mut url = self.with_segments([API_SEGMENT, CONTACTS_SEGMENT]);
		if let Some(term) = search.filter(|term| !term.is_empty()) {
			// Form encoding: a space goes out as `+`, which the service decodes
			// the same as `%20`.
			url.query_pairs_mut().append_pair(SEARCH_PARAM, term);
		}
		url
	}

	#[must_use]
	pub fn contact(&self, id: &ContactId) -> Url {
		self.with_segments([API_SEGMENT, CONTACTS_SEGMENT, id.as_str()])
	}

	fn with_segments<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Url {
		let mut url = self.base.clone();
		// http(s) URLs always have a hierarchical path.
		if let Ok(mut path) = url.path_segments_mut() {
			path.pop_if_empty().extend(segments);
		}
		url
	}
}

/// Blocking HTTP implementation of [`ContactsApi`].
///
/// Requests carry no timeout: a call returns when the service answers or the
/// connection fails.
#[derive(Debug, Clone)]
pub struct HttpContactsApi {
	client: Client,
	endpoints: Endpoints,
}

impl HttpContactsApi {
	pub fn new(base_url: &str) -> ApiResult<Self> {
		let endpoints = Endpoints::new(base_url)?;
		let client = Client::builder().timeout(None::<Duration>).build()?;
		Ok(Self { client, endpoints })
	}
}

impl ContactsApi for HttpContactsApi {
	fn health(&self) -> ApiResult<()> {
		let url = self.endpoints.health();
		debug!(%url, "probing service health");
		ensure_success(self.client.get(url).send()?)?;
		Ok(())
	}

	fn list(&self, search: Option<&str>) -> ApiResult<Vec<Contact>> {
		let url = self.endpoints.contacts(search);
		debug!(%url, "fetching contacts");
		let body = ensure_success(self.client.get(url).send()?)?.text()?;
		Ok(serde_json::from_str(&body)?)
	}

	fn create(&self, fields: &ContactFields) -> ApiResult<Option<Contact>> {
		let url = self.endpoints.contacts(None);
		debug!(%url, ?fields, "sending create request");
		let response = ensure_success(self.client.post(url).json(fields).send()?)?;
		Ok(echoed_contact(&response.text()?))
	}

	fn update(&self, id: &ContactId, fields: &ContactFields) -> ApiResult<Option<Contact>> {
		let url = self.endpoints.contact(id);
		debug!(%url, ?fields, "sending update request");
		let response = ensure_success(self.client.put(url).json(fields).send()?)?;
		Ok(echoed_contact(&response.text()?))
	}

	fn delete(&self, id: &ContactId) -> ApiResult<()> {
		let url = self.endpoints.contact(id);
		debug!(%url, "sending delete request");
		ensure_success(self.client.delete(url).send()?)?;
		Ok(())
	}
}

fn ensure_success(response: Response) -> ApiResult<Response> {
	let status = response.status();
	if status.is_success() {
		return Ok(response);
	}
	let body = response.text().unwrap_or_default();
	Err(ApiError::Status {
		status: status.as_u16(),
		body,
	})
}

/// Writes may answer with the stored contact or with a bare acknowledgement
/// such as `{"message": "..."}`.
fn echoed_contact(body: &str) -> Option<Contact> {
	serde_json::from_str(body).ok()
}

#[cfg(test)]
mod tests {
	use std::io::{BufRead, BufReader, Read, Write};
	use std::net::TcpListener;
	use std::thread::{self, JoinHandle};

	use super::*;

	/// One request as the service saw it: request target and body.
	#[derive(Debug, PartialEq, Eq)]
	struct Received {
		target: String,
		body: String,
	}

	/// Serve one canned `(status, body)` reply per connection on loopback and
	/// hand back what was received once every reply has been sent.
	fn serve(replies: Vec<(u16, &'static str)>) -> (HttpContactsApi, JoinHandle<Vec<Received>>) {
		let listener = TcpListener::bind("127.0.0.1:0").unwrap();
		let base = format!("http://{}", listener.local_addr().unwrap());
		let server = thread::spawn(move || {
			let mut received = Vec::new();
			for (status, reply) in replies {
				let (mut stream, _) = listener.accept().unwrap();
				let mut reader = BufReader::new(stream.try_clone().unwrap());

				let mut request_line = String::new();
				reader.read_line(&mut request_line).unwrap();
				let mut content_length = 0;
				loop {
					let mut header = String::new();
					reader.read_line(&mut header).unwrap();
					if header.trim_end().is_empty() {
						break;
					}
					if let Some((name, value)) = header.split_once(':')
						&& name.eq_ignore_ascii_case("content-length")
					{
						content_length = value.trim().parse().unwrap();
					}
				}
				let mut body = vec![0; content_length];
				reader.read_exact(&mut body).unwrap();

				let target = request_line.split_whitespace().take(2).collect::<Vec<_>>().join(" ");
				received.push(Received {
					target,
					body: String::from_utf8(body).unwrap(),
				});

				write!(
					stream,
					"HTTP/1.1 {status} Reply\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{reply}",
					reply.len()
				)
				.unwrap();
				stream.flush().unwrap();
			}
			received
		});

		let api = HttpContactsApi {
			client: Client::builder().no_proxy().build().unwrap(),
			endpoints: Endpoints::new(&base).unwrap(),
		};
		(api, server)
	}

	fn endpoints() -> Endpoints {
		Endpoints::new("http://localhost:5000").unwrap()
	}

	#[test]
	fn search_term_is_only_added_when_present() {
		let endpoints = endpoints();
		assert_eq!(
			endpoints.contacts(Some("ann")).as_str(),
			"http://localhost:5000/api/contacts?search=ann"
		);
		assert_eq!(
			endpoints.contacts(Some("")).as_str(),
			"http://localhost:5000/api/contacts"
		);
		assert_eq!(
			endpoints.contacts(None).as_str(),
			"http://localhost:5000/api/contacts"
		);
	}

	#[test]
	fn search_term_is_url_encoded() {
		let url = endpoints().contacts(Some("a&b=c"));
		assert_eq!(url.query(), Some("search=a%26b%3Dc"));
		let pairs: Vec<_> = url.query_pairs().collect();
		assert_eq!(pairs[0].1, "a&b=c");
	}

	#[test]
	fn spaces_in_search_terms_are_form_encoded() {
		let url = endpoints().contacts(Some("a n"));
		assert_eq!(url.query(), Some("search=a+n"));
		assert_eq!(url.query_pairs().next().map(|(_, term)| term.into_owned()), Some("a n".into()));
	}

	#[test]
	fn contact_id_becomes_an_encoded_path_segment() {
		let endpoints = endpoints();
		assert_eq!(
			endpoints.contact(&ContactId::new("42")).as_str(),
			"http://localhost:5000/api/contacts/42"
		);
		assert_eq!(
			endpoints.contact(&ContactId::new("a/b")).path(),
			"/api/contacts/a%2Fb"
		);
	}

	#[test]
	fn base_path_prefix_is_preserved() {
		let endpoints = Endpoints::new("https://example.com/crm/").unwrap();
		assert_eq!(
			endpoints.health().as_str(),
			"https://example.com/crm/api/health"
		);
		let endpoints = Endpoints::new("https://example.com/crm").unwrap();
		assert_eq!(
			endpoints.contacts(None).as_str(),
			"https://example.com/crm/api/contacts"
		);
	}

	#[test]
	fn non_http_base_urls_are_rejected() {
		let err = Endpoints::new("ftp://example.com").unwrap_err();
		assert!(matches!(err, ApiError::InvalidBaseUrl { .. }));
		assert!(Endpoints::new("not a url").is_err());
	}

	#[test]
	fn acknowledgement_bodies_do_not_echo_a_contact() {
		assert_eq!(echoed_contact(r#"{"message": "Contact created"}"#), None);
		let echoed = echoed_contact(r#"{"id": 3, "name": "Ada"}"#).unwrap();
		assert_eq!(echoed.id.as_str(), "3");
	}

	#[test]
	fn status_errors_carry_status_and_body() {
		let err = ApiError::Status {
			status: 400,
			body: "Name is required".into(),
		};
		assert_eq!(err.to_string(), "Server responded with 400: Name is required");
	}

	#[test]
	fn each_operation_sends_its_method_and_path() {
		let (api, server) = serve(vec![
			(200, r#"{"status": "healthy"}"#),
			(
				200,
				r#"[{"id": 3, "name": "Ada", "phone": null, "email": "ada@example.com", "address": null, "created_at": "2024-01-01"}]"#,
			),
			(201, r#"{"message": "Contact created successfully"}"#),
			(200, r#"{"message": "Contact updated successfully"}"#),
			(200, r#"{"message": "Contact deleted successfully"}"#),
		]);
		let fields = ContactFields::new("Ada", "", "ada@example.com", "");
		let id = ContactId::new("3");

		api.health().unwrap();
		let contacts = api.list(Some("a n")).unwrap();
		assert_eq!(api.create(&fields).unwrap(), None);
		assert_eq!(api.update(&id, &fields).unwrap(), None);
		api.delete(&id).unwrap();

		assert_eq!(
			contacts,
			vec![Contact::new("3", "Ada").with_email("ada@example.com")]
		);

		let received = server.join().unwrap();
		let targets: Vec<_> = received.iter().map(|request| request.target.as_str()).collect();
		assert_eq!(
			targets,
			[
				"GET /api/health",
				"GET /api/contacts?search=a+n",
				"POST /api/contacts",
				"PUT /api/contacts/3",
				"DELETE /api/contacts/3",
			]
		);
		let sent: ContactFields = serde_json::from_str(&received[2].body).unwrap();
		assert_eq!(sent, fields);
		assert_eq!(received[3].body, received[2].body);
		assert!(received[4].body.is_empty());
	}

	#[test]
	fn non_success_statuses_become_status_errors() {
		let (api, server) = serve(vec![
			(503, ""),
			(400, r#"{"error":"Name is required"}"#),
			(500, "database unavailable"),
		]);

		assert!(matches!(api.health(), Err(ApiError::Status { status: 503, .. })));
		let create = api.create(&ContactFields::default()).unwrap_err();
		assert_eq!(
			create.to_string(),
			r#"Server responded with 400: {"error":"Name is required"}"#
		);
		let delete = api.delete(&ContactId::new("9")).unwrap_err();
		assert_eq!(delete.to_string(), "Server responded with 500: database unavailable");

		assert_eq!(server.join().unwrap().len(), 3);
	}
}
