/// An ordered, case-insensitive multi-map of HTTP headers.
///
/// Names are compared ignoring ASCII case, like HTTP does.
/// Entries keep the order their name was first seen in, and values under a name keep the order they were added in.
/// Neither names nor values are validated here; whatever goes in comes back out.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Headers {
	entries: Vec<(String, Vec<String>)>,
}

impl Headers {
	/// Creates an empty header collection.
	#[must_use]
	pub fn new() -> Headers {
		Headers::default()
	}

	/// Replaces every value stored under `name` with `value`.
	/// An existing entry keeps its position but takes on the new spelling of the name.
	pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
		let name = name.into();
		let value = value.into();
		match self.position(&name) {
			Some(i) => self.entries[i] = (name, vec![value]),
			None => self.entries.push((name, vec![value])),
		}
	}

	/// Appends `value` to the values stored under `name`.
	pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
		let name = name.into();
		let value = value.into();
		match self.position(&name) {
			Some(i) => self.entries[i].1.push(value),
			None => self.entries.push((name, vec![value])),
		}
	}

	/// Returns the first value stored under `name`, if any.
	#[must_use]
	pub fn get(&self, name: &str) -> Option<&str> {
		self.get_all(name).first().map(String::as_str)
	}

	/// Returns every value stored under `name`, in the order they were added.
	#[must_use]
	pub fn get_all(&self, name: &str) -> &[String] {
		self.position(name)
			.map_or(&[][..], |i| self.entries[i].1.as_slice())
	}

	/// Returns whether any value is stored under `name`.
	#[must_use]
	pub fn contains(&self, name: &str) -> bool {
		self.position(name).is_some()
	}

	/// The number of distinct header names.
	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns whether no headers are stored.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates over every `(name, value)` pair, one per value.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries.iter().flat_map(|(name, values)| {
			values
				.iter()
				.map(move |value| (name.as_str(), value.as_str()))
		})
	}

	fn position(&self, name: &str) -> Option<usize> {
		self.entries
			.iter()
			.position(|(k, _)| k.eq_ignore_ascii_case(name))
	}
}
