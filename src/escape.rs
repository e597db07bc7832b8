//! HTML escaping for text content and attribute values.

use std::borrow::Cow;

fn replacement(byte: u8) -> Option<&'static str> {
	Some(match byte {
		b'&' => "&amp;",
		b'<' => "&lt;",
		b'>' => "&gt;",
		b'"' => "&#34;",
		b'\'' => "&#39;",
		_ => return None,
	})
}

/// Appends `text` to `output`, escaping `&`, `<`, `>`, `"` and `'`.
pub fn escape_into(output: &mut String, text: &str) {
	let mut last = 0;
	for (i, byte) in text.bytes().enumerate() {
		if let Some(replacement) = replacement(byte) {
			// All replaced bytes are ASCII, so these are always char boundaries.
			output.push_str(&text[last..i]);
			output.push_str(replacement);
			last = i + 1;
		}
	}
	output.push_str(&text[last..]);
}

/// Escapes `text`, borrowing it if nothing needed to change.
#[must_use]
pub fn escape(text: &str) -> Cow<'_, str> {
	if text.bytes().any(|byte| replacement(byte).is_some()) {
		let mut escaped = String::with_capacity(text.len() + 8);
		escape_into(&mut escaped, text);
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(text)
	}
}

/// Whether `key` can be written as an attribute name without breaking out of its tag.
///
/// Rejects empty keys and keys containing whitespace, control characters, `"`, `'`, `<`, `>`, `/` or `=`.
#[must_use]
pub fn is_valid_attribute_key(key: &str) -> bool {
	!key.is_empty() && !key.chars().any(|c| c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '<' | '>' | '/' | '='))
}
