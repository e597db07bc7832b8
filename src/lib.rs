//! A minimal declarative HTML templating engine.
//!
//! Build an immutable tree of [`Node`]s from elements, text and [`Component`]s,
//! then [`render`] it to an HTML string in one deterministic, stateless pass.
//!
//! ```
//! use arbor_html::{render, Bag, Node};
//!
//! let tree = Node::new("div").attr("class", "greeting").children(["Hello & welcome!"]);
//! assert_eq!(render(&Bag::new(), &tree), r#"<div class="greeting">Hello &amp; welcome!</div>"#);
//! ```
//!
//! Problems like unserializable attribute values never abort rendering.
//! They are reported as [`Diagnostic`]s instead, by default as [`tracing`] warnings.

#![doc(html_root_url = "https://docs.rs/arbor-html/0.0.3")]
#![warn(clippy::pedantic)]

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}

mod attributes;
mod component;
pub mod diagnostics;
pub mod escape;
pub mod node;
mod render;

pub use attributes::{attr, Attribute, Attributes};
pub use component::Component;
pub use diagnostics::{Diagnostic, Diagnostics};
pub use node::{Child, Node, Tag};
pub use render::{render, Bag, Rendered, Renderer};
