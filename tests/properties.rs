use arbor_html::{escape::escape, Bag, Child, Node, Renderer};
use proptest::prelude::*;

fn tree() -> impl Strategy<Value = Node> {
	let leaf = prop_oneof![
		".*".prop_map(Node::text),
		"[a-z]{1,6}".prop_map(Node::new),
		("[a-z]{1,6}", "[a-z-]{1,6}", ".*").prop_map(|(tag, key, value)| Node::new(tag).attr(key, value)),
	];
	leaf.prop_recursive(4, 32, 4, |inner| {
		prop_oneof![
			("[a-z]{1,6}", prop::collection::vec(inner.clone(), 0..4)).prop_map(|(tag, children)| Node::new(tag).children(children)),
			prop::collection::vec(inner, 0..4).prop_map(|children| Node::fragment().children(children)),
		]
	})
}

proptest! {
	#[test]
	fn rendering_is_deterministic(tree in tree()) {
		let renderer = Renderer::new();
		let first = renderer.render_collecting(&Bag::new(), &tree);
		let second = renderer.render_collecting(&Bag::new(), &tree);
		prop_assert_eq!(&first, &second);
		prop_assert!(first.diagnostics.is_empty());
	}

	#[test]
	fn text_cannot_inject_markup(text in ".*") {
		let html = Renderer::new().render(&Bag::new(), &Node::new("p").children([text]));
		let inner = &html["<p>".len()..html.len() - "</p>".len()];
		prop_assert!(!inner.contains('<'));
		prop_assert!(!inner.contains('>'));
		prop_assert!(!inner.contains('"'));
		prop_assert!(!inner.contains('\''));
	}

	#[test]
	fn attribute_values_stay_quoted(value in ".*") {
		let html = Renderer::new().render(&Bag::new(), &Node::new("a").attr("title", value.clone()));
		prop_assert_eq!(html, format!("<a title=\"{}\" />", escape(&value)));
	}

	#[test]
	fn attribute_keys_never_open_markup(key in ".*") {
		let rendered = Renderer::new().render_collecting(&Bag::new(), &Node::new("a").attr(key, "v"));
		prop_assert_eq!(rendered.html.matches('<').count(), 1);
		prop_assert_eq!(rendered.html.matches('>').count(), 1);
		prop_assert!(rendered.html == "<a />" || rendered.diagnostics.is_empty());
	}

	#[test]
	fn fragments_concatenate(a in tree(), b in tree()) {
		let renderer = Renderer::new();
		let fragment = Node::fragment().children([Child::from(a.clone()), Child::from(b.clone())]);
		prop_assert_eq!(
			renderer.render(&Bag::new(), &fragment),
			renderer.render(&Bag::new(), &a) + &renderer.render(&Bag::new(), &b)
		);
	}
}

#[test]
fn escape_borrows_clean_text() {
	assert!(matches!(escape("plain text"), std::borrow::Cow::Borrowed("plain text")));
	assert_eq!(escape("a&b"), "a&amp;b");
}
