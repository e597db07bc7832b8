use arbor_html::{attr, Attribute, Attributes};
use serde_json::{json, Value};

fn keys(attributes: &Attributes) -> Vec<&str> {
	attributes.iter().map(Attribute::key).collect()
}

#[test]
fn first_insertion_order() {
	let attributes: Attributes = vec![attr("b", "1"), attr("a", "2"), attr("c", "3")].into_iter().collect();
	assert_eq!(keys(&attributes), ["b", "a", "c"]);
}

#[test]
fn overwrite_keeps_position() {
	let mut attributes = Attributes::new();
	assert_eq!(attributes.insert(attr("id", "a")), None);
	assert_eq!(attributes.insert(attr("class", "c")), None);
	assert_eq!(attributes.insert(attr("id", "b")), Some(Value::from("a")));

	assert_eq!(attributes.len(), 2);
	assert_eq!(keys(&attributes), ["id", "class"]);
	assert_eq!(attributes.get("id"), Some(&Value::from("b")));
}

#[test]
fn lookup() {
	let attributes: Attributes = vec![attr("hidden", true)].into_iter().collect();
	assert!(attributes.contains_key("hidden"));
	assert!(!attributes.contains_key("id"));
	assert_eq!(attributes.get("hidden"), Some(&json!(true)));
	assert_eq!(attributes.iter().next().and_then(Attribute::as_str), None);
}

#[test]
fn extend_applies_in_order() {
	let mut attributes = Attributes::new();
	attributes.extend(vec![attr("x", "1"), attr("y", "2"), attr("x", "3")]);
	assert_eq!(attributes, vec![attr("x", "3"), attr("y", "2")].into_iter().collect::<Attributes>());
}

#[test]
fn to_bag() {
	let attributes: Attributes = vec![attr("title", "Hi"), attr("tabindex", 0)].into_iter().collect();
	let bag = attributes.to_bag();
	assert_eq!(bag.len(), 2);
	assert_eq!(bag["title"], json!("Hi"));
	assert_eq!(bag["tabindex"], json!(0));
}
