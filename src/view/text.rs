/// Derive avatar initials: the first character of each of the first two
/// space-separated tokens, uppercased.
///
/// Empty tokens (leading or doubled spaces) contribute nothing.
#[must_use]
pub fn get_initials(name: &str) -> String {
	name.split(' ')
		.take(2)
		.filter_map(|token| token.chars().next())
		.flat_map(char::to_uppercase)
		.collect()
}

/// Escape text for interpolation into markup, in either element or
/// attribute context.
#[must_use]
pub fn escape_html(text: &str) -> String {
	let mut escaped = String::with_capacity(text.len());
	for ch in text.chars() {
		match ch {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#039;"),
			other => escaped.push(other),
		}
	}
	escaped
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn initials_take_the_first_two_tokens() {
		assert_eq!(get_initials("Ada Lovelace"), "AL");
		assert_eq!(get_initials("Cher"), "C");
		assert_eq!(get_initials("grace brewster murray hopper"), "GB");
	}

	#[test]
	fn initials_tolerate_empty_tokens() {
		assert_eq!(get_initials(""), "");
		assert_eq!(get_initials(" "), "");
		assert_eq!(get_initials(" ada"), "A");
		assert_eq!(get_initials("ada  lovelace"), "A");
	}

	#[test]
	fn initials_uppercase_non_ascii() {
		assert_eq!(get_initials("élodie ångström"), "ÉÅ");
	}

	#[test]
	fn script_tags_lose_their_angle_brackets() {
		let escaped = escape_html("<script>alert('x')</script>");
		assert!(!escaped.contains('<'));
		assert!(!escaped.contains('>'));
		assert_eq!(
			escaped,
			"&lt;script&gt;alert(&#039;x&#039;)&lt;/script&gt;"
		);
	}

	#[test]
	fn ampersands_are_escaped_before_entities_are_emitted() {
		assert_eq!(escape_html("a & \"b\""), "a &amp; &quot;b&quot;");
		assert_eq!(escape_html("&lt;"), "&amp;lt;");
	}
}
