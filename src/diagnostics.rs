//! Non-fatal usage and validation reports.
//!
//! Nothing in this crate aborts construction or rendering once started.
//! Instead, problems are reported as [`Diagnostic`]s to a [`Diagnostics`] sink that is passed in per call,
//! and the operation continues with a best-effort result.

use thiserror::Error;
use tracing::warn;

/// A non-fatal problem found while building or rendering a [`Node`](`crate::Node`) tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Diagnostic {
	/// [`Node::from_dynamic`](`crate::Node::from_dynamic`) received a value that is neither a tag name nor a [`Component`](`crate::Component`).
	///
	/// The resulting node renders as nothing.
	#[error("unsupported tag type `{type_name}`; perhaps it wasn't declared as a `Component`?")]
	InvalidRootTagKind {
		/// Name of the rejected type.
		type_name: &'static str,
	},

	/// An element was created with the tag `#text`, which is reserved for text leaves.
	#[error("`#text` is not allowed as an element tag; use `#fragment` to group nodes instead")]
	ReservedTagMisuse,

	/// An element was created with an empty tag name.
	///
	/// The resulting node renders as nothing.
	#[error("element tag names must not be empty")]
	EmptyTagName,

	/// An item passed as child was neither a [`Node`](`crate::Node`) nor text. It was skipped.
	#[error("unsupported child type `{type_name}` was skipped")]
	UnsupportedChildType {
		/// Name of the rejected type.
		type_name: &'static str,
	},

	/// A `#fragment` carried attributes at render time. They were left out of the output.
	#[error("document fragments cannot have attributes ({count} dropped)")]
	FragmentWithAttributes {
		/// How many attributes were dropped.
		count: usize,
	},

	/// An attribute value was not a string. It was rendered as `""`.
	#[error("could not serialize attribute `{key}`")]
	NonStringAttributeValue {
		/// The attribute's key.
		key: String,
	},

	/// An attribute key could not be written without breaking out of its tag. The attribute was skipped.
	#[error("invalid attribute key {key:?} was skipped")]
	InvalidAttributeKey {
		/// The rejected key.
		key: String,
	},

	/// Rendering went deeper than the [`Renderer`](`crate::Renderer`)'s depth limit. The subtree was omitted.
	#[error("depth limit of {limit} reached; subtree omitted")]
	DepthLimitReached {
		/// The configured limit.
		limit: usize,
	},
}

impl Diagnostic {
	/// A stable, kebab-case identifier for this kind of diagnostic.
	#[must_use]
	pub fn code(&self) -> &'static str {
		match self {
			Diagnostic::InvalidRootTagKind { .. } => "invalid-root-tag-kind",
			Diagnostic::ReservedTagMisuse => "reserved-tag-misuse",
			Diagnostic::EmptyTagName => "empty-tag-name",
			Diagnostic::UnsupportedChildType { .. } => "unsupported-child-type",
			Diagnostic::FragmentWithAttributes { .. } => "fragment-with-attributes",
			Diagnostic::NonStringAttributeValue { .. } => "non-string-attribute-value",
			Diagnostic::InvalidAttributeKey { .. } => "invalid-attribute-key",
			Diagnostic::DepthLimitReached { .. } => "depth-limit-reached",
		}
	}
}

/// A write-only channel for [`Diagnostic`]s.
pub trait Diagnostics {
	fn report(&mut self, diagnostic: Diagnostic);
}

/// Forwards each [`Diagnostic`] to [`tracing`] as a warning.
///
/// This is the sink used by the non-`_reporting` entry points.
/// Use [`tracing::subscriber::with_default`] to capture or redirect its output for a scope.
#[derive(Debug, Default, Clone, Copy)]
pub struct Log;
impl Diagnostics for Log {
	fn report(&mut self, diagnostic: Diagnostic) {
		warn!(code = diagnostic.code(), "{}", diagnostic);
	}
}

/// Discards all [`Diagnostic`]s.
#[derive(Debug, Default, Clone, Copy)]
pub struct Ignore;
impl Diagnostics for Ignore {
	fn report(&mut self, _: Diagnostic) {}
}

impl Diagnostics for Vec<Diagnostic> {
	fn report(&mut self, diagnostic: Diagnostic) {
		self.push(diagnostic);
	}
}

impl<D: Diagnostics + ?Sized> Diagnostics for &mut D {
	fn report(&mut self, diagnostic: Diagnostic) {
		(**self).report(diagnostic);
	}
}
