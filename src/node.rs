use crate::{
	diagnostics::{Diagnostic, Diagnostics, Log},
	Attribute, Attributes, Component,
};
use core::{
	any::{type_name, Any},
	iter,
};
use serde_json::Value;
use std::{borrow::Cow, sync::Arc};
use tracing::trace;

/// The reserved tag of text leaves.
pub const TEXT: &str = "#text";

/// The reserved tag of elements that render only their children, without an enclosing tag.
pub const FRAGMENT: &str = "#fragment";

/// An immutable tree unit.
///
/// Nodes are built with [`Node::new`] and refined through consuming methods like [`.attr(…)`](`Node::attr`) and [`.children(…)`](`Node::children`),
/// each of which returns a new value. A node that was already cloned into a parent elsewhere is never affected.
///
/// Child lists are shared between clones, so cloning subtrees is cheap.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
	/// A tagged element, including [`#fragment`](`FRAGMENT`)s.
	Element(Element),
	/// A text leaf, escaped when rendered.
	Text(Cow<'static, str>),
	/// A reference to a [`Component`] that is expanded while rendering.
	Component(ComponentRef),
	/// Renders as nothing. Produced from invalid construction input.
	Empty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
	tag: Cow<'static, str>,
	attributes: Attributes,
	children: Arc<[Node]>,
}
impl Element {
	fn new(tag: Cow<'static, str>) -> Self {
		Self {
			tag,
			attributes: Attributes::new(),
			children: Arc::new([]),
		}
	}

	#[must_use]
	pub fn tag(&self) -> &str {
		&self.tag
	}

	#[must_use]
	pub fn is_fragment(&self) -> bool {
		self.tag == FRAGMENT
	}

	#[must_use]
	pub fn attributes(&self) -> &Attributes {
		&self.attributes
	}

	#[must_use]
	pub fn children(&self) -> &[Node] {
		&self.children
	}
}

/// A [`Component`] together with the attributes and children it will be called with.
///
/// These aren't applied to any markup directly.
/// The component decides what to do with them.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentRef {
	component: Component,
	attributes: Attributes,
	children: Arc<[Node]>,
}
impl ComponentRef {
	fn new(component: Component) -> Self {
		Self {
			component,
			attributes: Attributes::new(),
			children: Arc::new([]),
		}
	}

	#[must_use]
	pub fn component(&self) -> &Component {
		&self.component
	}

	#[must_use]
	pub fn attributes(&self) -> &Attributes {
		&self.attributes
	}

	#[must_use]
	pub fn children(&self) -> &[Node] {
		&self.children
	}

	/// Calls the component with this reference's attributes and children.
	#[must_use]
	pub fn expand(&self) -> Node {
		self.component.call(&self.attributes, &self.children)
	}
}

/// What a [`Node`] can be created from.
#[derive(Debug, Clone, PartialEq)]
pub enum Tag {
	Name(Cow<'static, str>),
	Component(Component),
}
impl From<&'static str> for Tag {
	fn from(name: &'static str) -> Self {
		Self::Name(name.into())
	}
}
impl From<String> for Tag {
	fn from(name: String) -> Self {
		Self::Name(name.into())
	}
}
impl From<Cow<'static, str>> for Tag {
	fn from(name: Cow<'static, str>) -> Self {
		Self::Name(name)
	}
}
impl From<Component> for Tag {
	fn from(component: Component) -> Self {
		Self::Component(component)
	}
}

/// An item accepted by [`Node::children`].
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
	Node(Node),
	/// Wrapped into a [`Node::Text`].
	Text(Cow<'static, str>),
	/// Reported and skipped. See [`Child::from_dynamic`].
	Unsupported { type_name: &'static str },
}
impl Child {
	/// Classifies a runtime-typed `value`.
	///
	/// [`Node`]s, [`Child`]ren and strings (`String`, `&'static str` or `Cow<'static, str>`) are accepted.
	/// Anything else becomes [`Child::Unsupported`].
	#[must_use]
	pub fn from_dynamic<T: Any>(value: T) -> Self {
		let value: Box<dyn Any> = Box::new(value);
		let value = match value.downcast::<Child>() {
			Ok(child) => return *child,
			Err(value) => value,
		};
		let value = match value.downcast::<Node>() {
			Ok(node) => return Self::Node(*node),
			Err(value) => value,
		};
		match downcast_text(value) {
			Ok(text) => Self::Text(text),
			Err(_) => Self::Unsupported { type_name: type_name::<T>() },
		}
	}
}
impl From<Node> for Child {
	fn from(node: Node) -> Self {
		Self::Node(node)
	}
}
impl From<&'static str> for Child {
	fn from(text: &'static str) -> Self {
		Self::Text(text.into())
	}
}
impl From<String> for Child {
	fn from(text: String) -> Self {
		Self::Text(text.into())
	}
}
impl From<Cow<'static, str>> for Child {
	fn from(text: Cow<'static, str>) -> Self {
		Self::Text(text)
	}
}

fn downcast_text(value: Box<dyn Any>) -> Result<Cow<'static, str>, Box<dyn Any>> {
	let value = match value.downcast::<String>() {
		Ok(text) => return Ok((*text).into()),
		Err(value) => value,
	};
	let value = match value.downcast::<&'static str>() {
		Ok(text) => return Ok((*text).into()),
		Err(value) => value,
	};
	value.downcast::<Cow<'static, str>>().map(|text| *text)
}

impl Node {
	/// Creates a bare element or component reference, reporting problems as [`Log`] warnings.
	///
	/// See [`Node::new_reporting`].
	#[must_use]
	pub fn new(tag: impl Into<Tag>) -> Self {
		Self::new_reporting(tag, &mut Log)
	}

	/// Creates a bare element or component reference.
	///
	/// # Diagnostics
	///
	/// - [`Diagnostic::ReservedTagMisuse`] if `tag` is `"#text"`. The element is still created, but renders as empty text.
	/// - [`Diagnostic::EmptyTagName`] if `tag` is `""`. [`Node::Empty`] is returned.
	pub fn new_reporting(tag: impl Into<Tag>, diagnostics: &mut dyn Diagnostics) -> Self {
		match tag.into() {
			Tag::Component(component) => Self::Component(ComponentRef::new(component)),
			Tag::Name(name) if name.is_empty() => {
				diagnostics.report(Diagnostic::EmptyTagName);
				Self::Empty
			}
			Tag::Name(name) => {
				if name == TEXT {
					diagnostics.report(Diagnostic::ReservedTagMisuse);
				}
				Self::Element(Element::new(name))
			}
		}
	}

	/// Like [`Node::new`], but for values whose type is only known at runtime.
	#[must_use]
	pub fn from_dynamic<T: Any>(value: T) -> Self {
		Self::from_dynamic_reporting(value, &mut Log)
	}

	/// Like [`Node::new_reporting`], but for values whose type is only known at runtime.
	///
	/// [`Tag`]s, [`Component`]s and strings (`String`, `&'static str` or `Cow<'static, str>`) are accepted.
	///
	/// # Diagnostics
	///
	/// [`Diagnostic::InvalidRootTagKind`] for any other type. [`Node::Empty`] is returned.
	pub fn from_dynamic_reporting<T: Any>(value: T, diagnostics: &mut dyn Diagnostics) -> Self {
		let value: Box<dyn Any> = Box::new(value);
		let value = match value.downcast::<Tag>() {
			Ok(tag) => return Self::new_reporting(*tag, diagnostics),
			Err(value) => value,
		};
		let value = match value.downcast::<Component>() {
			Ok(component) => return Self::new_reporting(*component, diagnostics),
			Err(value) => value,
		};
		match downcast_text(value) {
			Ok(name) => Self::new_reporting(name, diagnostics),
			Err(_) => {
				diagnostics.report(Diagnostic::InvalidRootTagKind { type_name: type_name::<T>() });
				Self::Empty
			}
		}
	}

	#[must_use]
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(content.into())
	}

	#[must_use]
	pub fn fragment() -> Self {
		Self::Element(Element::new(FRAGMENT.into()))
	}

	/// The tag of this node, if it has one.
	///
	/// Text leaves report [`TEXT`]. Component references and [`Node::Empty`] have no tag.
	#[must_use]
	pub fn tag(&self) -> Option<&str> {
		match self {
			Node::Element(element) => Some(element.tag()),
			Node::Text(_) => Some(TEXT),
			Node::Component(_) | Node::Empty => None,
		}
	}

	/// Returns a copy with `key` set to `value`. A later call with the same key wins.
	///
	/// Only string values can be rendered.
	/// Other values are accepted here, but reported and rendered as `""` later.
	#[must_use]
	pub fn attr(self, key: impl Into<Cow<'static, str>>, value: impl Into<Value>) -> Self {
		self.with(Attribute::new(key, value))
	}

	/// Returns a copy with `attribute` set.
	#[must_use]
	pub fn with(self, attribute: Attribute) -> Self {
		self.with_attributes(iter::once(attribute))
	}

	/// Returns a copy with each of `attributes` set, in order.
	#[must_use]
	pub fn with_attributes(mut self, attributes: impl IntoIterator<Item = Attribute>) -> Self {
		match &mut self {
			Node::Element(Element { attributes: target, .. }) | Node::Component(ComponentRef { attributes: target, .. }) => target.extend(attributes),
			Node::Text(_) | Node::Empty => trace!("Ignoring attributes on a node that can't carry any."),
		}
		self
	}

	/// Returns a copy whose children are **replaced** by `items`, reporting problems as [`Log`] warnings.
	///
	/// See [`Node::children_reporting`].
	#[must_use]
	pub fn children<I>(self, items: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<Child>,
	{
		self.children_reporting(items, &mut Log)
	}

	/// Returns a copy whose children are **replaced** by `items`.
	///
	/// Text items are wrapped into [`Node::Text`] leaves.
	///
	/// # Diagnostics
	///
	/// [`Diagnostic::UnsupportedChildType`] for each [`Child::Unsupported`] item, which is skipped.
	/// The remaining items are still added.
	pub fn children_reporting<I>(mut self, items: I, diagnostics: &mut dyn Diagnostics) -> Self
	where
		I: IntoIterator,
		I::Item: Into<Child>,
	{
		let children: Arc<[Node]> = items
			.into_iter()
			.filter_map(|item| match item.into() {
				Child::Node(node) => Some(node),
				Child::Text(text) => Some(Node::Text(text)),
				Child::Unsupported { type_name } => {
					diagnostics.report(Diagnostic::UnsupportedChildType { type_name });
					None
				}
			})
			.collect();

		match &mut self {
			Node::Element(Element { children: target, .. }) | Node::Component(ComponentRef { children: target, .. }) => *target = children,
			Node::Text(_) | Node::Empty => trace!("Ignoring children on a node that can't have any."),
		}
		self
	}
}
