use crate::{
	diagnostics::{Diagnostic, Diagnostics, Log},
	escape::{escape_into, is_valid_attribute_key},
	node::{Element, Node, TEXT},
};
use hashbrown::HashMap;
use serde_json::Value;
use tracing::{instrument, level_filters::STATIC_MAX_LEVEL, trace, trace_span, warn, Level};

/// Ambient values threaded through a render pass.
///
/// Components currently don't receive it.
pub type Bag = HashMap<String, Value>;

/// The result of [`Renderer::render_collecting`].
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
	pub html: String,
	pub diagnostics: Vec<Diagnostic>,
}

/// Serializes [`Node`] trees to HTML.
///
/// Rendering is a pure function of the tree: the same input always produces byte-identical output,
/// and nothing short of a panic in a [`Component`](`crate::Component`) aborts it.
///
/// # Output
///
/// - Elements without children are self-closing (`<hr />`), regardless of HTML's void element list.
/// - [`#fragment`](`crate::node::FRAGMENT`)s render only their children. An empty fragment renders as `""`, not ` />`.
/// - Text and attribute values are escaped.
/// - Attributes appear in [`Attributes`](`crate::Attributes`) order.
///   Keys that could break out of the tag are skipped and reported as [`Diagnostic::InvalidAttributeKey`].
///
/// There is no depth limit by default. See [`Renderer::with_depth_limit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
	depth_limit: Option<usize>,
}
impl Default for Renderer {
	fn default() -> Self {
		Self::new()
	}
}
impl Renderer {
	#[must_use]
	pub const fn new() -> Self {
		Self { depth_limit: None }
	}

	/// Sets how many element levels and component expansions may be nested before a subtree is cut off.
	///
	/// Subtrees beyond the limit are omitted and reported as [`Diagnostic::DepthLimitReached`].
	/// Use this to guard against self-referencing [`Component`](`crate::Component`)s.
	#[must_use]
	pub const fn with_depth_limit(self, depth_limit: usize) -> Self {
		Self {
			depth_limit: Some(depth_limit),
		}
	}

	#[must_use]
	pub const fn depth_limit(&self) -> Option<usize> {
		self.depth_limit
	}

	/// Renders `node`, reporting problems as [`Log`] warnings.
	#[must_use]
	pub fn render(&self, context: &Bag, node: &Node) -> String {
		self.render_reporting(context, node, &mut Log)
	}

	/// Renders `node`, reporting problems to `diagnostics`.
	pub fn render_reporting(&self, context: &Bag, node: &Node, diagnostics: &mut dyn Diagnostics) -> String {
		let mut output = String::new();
		self.render_into(&mut output, context, node, diagnostics);
		output
	}

	/// Renders `node`, returning problems alongside the output.
	#[must_use]
	pub fn render_collecting(&self, context: &Bag, node: &Node) -> Rendered {
		let mut diagnostics = Vec::new();
		let html = self.render_reporting(context, node, &mut diagnostics);
		Rendered { html, diagnostics }
	}

	/// Appends the HTML for `node` to `output`.
	#[instrument(skip(output, context, node, diagnostics))]
	pub fn render_into(&self, output: &mut String, context: &Bag, node: &Node, diagnostics: &mut dyn Diagnostics) {
		let start = output.len();
		self.render_node(output, context, node, diagnostics, self.depth_limit);
		trace!("Rendered {} byte(s).", output.len() - start);
	}

	fn render_node(&self, output: &mut String, context: &Bag, node: &Node, diagnostics: &mut dyn Diagnostics, depth_limit: Option<usize>) {
		let depth_limit = match depth_limit {
			Some(0) => {
				return diagnostics.report(Diagnostic::DepthLimitReached {
					limit: self.depth_limit.unwrap_or_default(),
				})
			}
			remaining => remaining.map(|remaining| remaining - 1),
		};

		match node {
			Node::Component(component_ref) => {
				let span = trace_span!("Expanding component", component = component_ref.component().name());
				let _enter = span.enter();
				// Nothing from the reference is merged into the expansion.
				let expanded = component_ref.expand();
				self.render_node(output, context, &expanded, diagnostics, depth_limit)
			}

			Node::Text(text) => {
				if cfg!(feature = "dangerous-logging") {
					trace!("Rendering text {:?}", text);
				}
				escape_into(output, text)
			}

			Node::Element(element) if element.tag() == TEXT => trace!("Rendering misused `#text` element as empty text."),

			Node::Element(element) => self.render_element(output, context, element, diagnostics, depth_limit),

			Node::Empty => trace!("Skipping empty node."),
		}
	}

	fn render_element(&self, output: &mut String, context: &Bag, element: &Element, diagnostics: &mut dyn Diagnostics, depth_limit: Option<usize>) {
		let span = trace_span!("Rendering element", tag = element.tag());
		let _enter = span.enter();

		let is_fragment = element.is_fragment();
		if !is_fragment {
			output.push('<');
			output.push_str(element.tag());
		}

		let attributes = element.attributes();
		if is_fragment && !attributes.is_empty() {
			diagnostics.report(Diagnostic::FragmentWithAttributes { count: attributes.len() });
		} else {
			for attribute in attributes {
				if !is_valid_attribute_key(attribute.key()) {
					if cfg!(feature = "dangerous-logging") && STATIC_MAX_LEVEL >= Level::WARN {
						warn!("Skipped attribute with invalid key {:?}: {}", attribute.key(), attribute.value());
					}
					diagnostics.report(Diagnostic::InvalidAttributeKey {
						key: attribute.key().to_owned(),
					});
					continue;
				}

				output.push(' ');
				output.push_str(attribute.key());
				output.push_str("=\"");
				match attribute.as_str() {
					Some(value) => escape_into(output, value),
					None => {
						if cfg!(feature = "dangerous-logging") && STATIC_MAX_LEVEL >= Level::WARN {
							warn!("Unserializable value of attribute {:?}: {}", attribute.key(), attribute.value());
						}
						diagnostics.report(Diagnostic::NonStringAttributeValue {
							key: attribute.key().to_owned(),
						});
					}
				}
				output.push('"');
			}
		}

		let children = element.children();
		if children.is_empty() {
			if !is_fragment {
				output.push_str(" />");
			}
			return;
		}

		if !is_fragment {
			output.push('>');
		}
		for child in children {
			self.render_node(output, context, child, diagnostics, depth_limit);
		}
		if !is_fragment {
			output.push_str("</");
			output.push_str(element.tag());
			output.push('>');
		}
	}
}

/// Renders `node` with the default [`Renderer`], reporting problems as [`Log`] warnings.
#[must_use]
pub fn render(context: &Bag, node: &Node) -> String {
	Renderer::new().render(context, node)
}
