use crate::Bag;
use core::{iter::FromIterator, mem, slice};
use hashbrown::{hash_map::Entry, HashMap};
use serde_json::Value;
use std::borrow::Cow;

/// A standalone key/value pair, for example to pass to [`Node::with`](`crate::Node::with`).
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
	key: Cow<'static, str>,
	value: Value,
}
impl Attribute {
	#[must_use]
	pub fn new(key: impl Into<Cow<'static, str>>, value: impl Into<Value>) -> Self {
		Self {
			key: key.into(),
			value: value.into(),
		}
	}

	#[must_use]
	pub fn key(&self) -> &str {
		&self.key
	}

	#[must_use]
	pub fn value(&self) -> &Value {
		&self.value
	}

	/// The value, if it can be serialized.
	#[must_use]
	pub fn as_str(&self) -> Option<&str> {
		self.value.as_str()
	}
}

/// Shorthand for [`Attribute::new`].
#[must_use]
pub fn attr(key: impl Into<Cow<'static, str>>, value: impl Into<Value>) -> Attribute {
	Attribute::new(key, value)
}

/// An ordered set of [`Attribute`]s with unique keys.
///
/// Iteration follows first-insertion order.
/// Inserting a key that is already present replaces its value in place, so the key keeps its original position.
#[derive(Debug, Clone, Default)]
pub struct Attributes {
	entries: Vec<Attribute>,
	index: HashMap<Cow<'static, str>, usize>,
}
impl Attributes {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets `attribute`, returning the value it replaced, if any.
	pub fn insert(&mut self, attribute: Attribute) -> Option<Value> {
		match self.index.entry(attribute.key.clone()) {
			Entry::Occupied(occupied) => {
				let slot = &mut self.entries[*occupied.get()];
				Some(mem::replace(&mut slot.value, attribute.value))
			}
			Entry::Vacant(vacant) => {
				vacant.insert(self.entries.len());
				self.entries.push(attribute);
				None
			}
		}
	}

	#[must_use]
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.index.get(key).map(|&i| &self.entries[i].value)
	}

	#[must_use]
	pub fn contains_key(&self, key: &str) -> bool {
		self.index.contains_key(key)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> slice::Iter<'_, Attribute> {
		self.entries.iter()
	}

	/// Copies the attributes into an unordered [`Bag`].
	#[must_use]
	pub fn to_bag(&self) -> Bag {
		self.entries.iter().map(|a| (a.key.clone().into_owned(), a.value.clone())).collect()
	}
}

impl PartialEq for Attributes {
	fn eq(&self, other: &Self) -> bool {
		self.entries == other.entries
	}
}

impl Extend<Attribute> for Attributes {
	fn extend<T: IntoIterator<Item = Attribute>>(&mut self, iter: T) {
		for attribute in iter {
			self.insert(attribute);
		}
	}
}

impl FromIterator<Attribute> for Attributes {
	fn from_iter<T: IntoIterator<Item = Attribute>>(iter: T) -> Self {
		let mut attributes = Self::new();
		attributes.extend(iter);
		attributes
	}
}

impl<'a> IntoIterator for &'a Attributes {
	type Item = &'a Attribute;
	type IntoIter = slice::Iter<'a, Attribute>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
