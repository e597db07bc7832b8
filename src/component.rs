use crate::{Attributes, Node};
use core::{
	any::type_name,
	fmt::{self, Debug, Formatter},
};
use std::sync::Arc;

type ComponentFn = dyn Fn(&Attributes, &[Node]) -> Node + Send + Sync;

/// A reusable, pure function from attributes and children to a replacement [`Node`].
///
/// Components aren't nodes themselves.
/// They are referenced by [`Node::new`] and only called while rendering, once per occurrence in the tree.
///
/// Cloning is cheap, and clones compare equal to each other (but not to separately created components).
#[derive(Clone)]
pub struct Component {
	name: &'static str,
	function: Arc<ComponentFn>,
}
impl Component {
	/// Wraps `function`, using its type name for logging.
	#[must_use]
	pub fn new<F>(function: F) -> Self
	where
		F: Fn(&Attributes, &[Node]) -> Node + Send + Sync + 'static,
	{
		Self::named(type_name::<F>(), function)
	}

	#[must_use]
	pub fn named<F>(name: &'static str, function: F) -> Self
	where
		F: Fn(&Attributes, &[Node]) -> Node + Send + Sync + 'static,
	{
		Self {
			name,
			function: Arc::new(function),
		}
	}

	#[must_use]
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Expands this component once.
	#[must_use]
	pub fn call(&self, attributes: &Attributes, children: &[Node]) -> Node {
		(self.function)(attributes, children)
	}
}

impl Debug for Component {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Component").field(&self.name).finish()
	}
}

impl PartialEq for Component {
	fn eq(&self, other: &Self) -> bool {
		Arc::as_ptr(&self.function).cast::<()>() == Arc::as_ptr(&other.function).cast::<()>()
	}
}
