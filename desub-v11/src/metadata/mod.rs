// Copyright 2019-2021 Parity Technologies (UK) Ltd.
// This file is part of substrate-desub.
//
// substrate-desub is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// substrate-desub is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with substrate-desub.  If not, see <http://www.gnu.org/licenses/>.

//! The decoded form of V11 runtime metadata.
//!
//! Everything here is produced in a single pass by [`version_11`] and never
//! changes afterwards; there are no cross references between the records.

pub mod version_11;

use crate::{util, DecoderConfig, Error, META_RESERVED, SUPPORTED_VERSION};
use serde::Serialize;
use std::{fmt, str::FromStr};

/// V11 runtime metadata: the fixed prefix and every module, in the order the node reported them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Metadata {
	#[serde(serialize_with = "util::as_ascii")]
	magic: [u8; 4],
	version: u8,
	modules: Vec<Module>,
}

impl TryFrom<Vec<u8>> for Metadata {
	type Error = Error;
	fn try_from(bytes: Vec<u8>) -> Result<Metadata, Self::Error> {
		Metadata::from_bytes(bytes.as_slice())
	}
}

impl TryFrom<&[u8]> for Metadata {
	type Error = Error;
	fn try_from(bytes: &[u8]) -> Result<Metadata, Self::Error> {
		Metadata::from_bytes(bytes)
	}
}

impl Metadata {
	pub(crate) fn new(modules: Vec<Module>) -> Self {
		Self { magic: META_RESERVED, version: SUPPORTED_VERSION, modules }
	}

	/// Decode metadata that must span the whole of `bytes`.
	///
	/// Use [`crate::decode_metadata_with`] to decode blobs that carry more data
	/// after the module list.
	pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
		let config = DecoderConfig::default().with_require_exhausted(true);
		crate::decode_metadata_with(bytes, &config).map(|(meta, _)| meta)
	}

	/// The four byte tag at the start of the blob (`b"meta"`).
	pub fn magic(&self) -> [u8; 4] {
		self.magic
	}

	/// The metadata version byte.
	pub fn version(&self) -> u8 {
		self.version
	}

	/// All modules, in declaration order.
	pub fn modules(&self) -> &[Module] {
		&self.modules
	}

	/// Find a module by name.
	pub fn module(&self, name: &str) -> Option<&Module> {
		self.modules.iter().find(|m| m.name == name)
	}

	/// Check if a module exists
	pub fn module_exists(&self, name: &str) -> bool {
		self.module(name).is_some()
	}

	/// print out a human readable description of the metadata
	pub fn pretty(&self) -> String {
		let mut string = String::new();
		for module in &self.modules {
			string.push_str(&module.name);
			string.push('\n');
			for entry in module.storage_entries() {
				string.push_str(" s  ");
				string.push_str(&entry.name);
				string.push('\n');
			}
			for call in module.calls() {
				string.push_str(" c  ");
				string.push_str(&call.to_string());
				string.push('\n');
			}
			for event in module.events() {
				string.push_str(" e  ");
				string.push_str(&event.name);
				string.push('\n');
			}
			for constant in &module.constants {
				string.push_str(" k  ");
				string.push_str(&constant.name);
				string.push('\n');
			}
		}
		string
	}

	/// print out a detailed but human readable description of the module
	/// metadata
	pub fn detailed_pretty(&self) -> String {
		let mut string = String::new();
		for module in &self.modules {
			string.push_str(&module.name);
			if let Some(storage) = &module.storage {
				string.push_str(&format!(" (storage prefix {})", storage.prefix));
			}
			string.push('\n');
			for entry in module.storage_entries() {
				string.push_str(&format!(" S  {} TYPE {} MOD {}\n", entry.name, entry.ty, entry.modifier));
			}
			for call in module.calls() {
				string.push_str(&format!(" C  {}\n", call));
			}
			for event in module.events() {
				string.push_str(&format!(" E  {}({})\n", event.name, event.arguments.join(", ")));
			}
			for constant in &module.constants {
				string.push_str(&format!(
					" K  {}: {} = 0x{}\n",
					constant.name,
					constant.ty,
					hex::encode(&constant.value)
				));
			}
		}
		string
	}
}

/// All metadata about a runtime module.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Module {
	pub name: String,
	pub storage: Option<StorageMetadata>,
	pub calls: Option<Vec<Call>>,
	pub events: Option<Vec<Event>>,
	pub constants: Vec<Constant>,
}

impl Module {
	/// iterator over all storage entries in this module
	pub fn storage_entries(&self) -> impl Iterator<Item = &StorageEntry> {
		self.storage.iter().flat_map(|s| s.entries.iter())
	}

	/// iterator over all possible calls in this module
	pub fn calls(&self) -> impl Iterator<Item = &Call> {
		self.calls.iter().flatten()
	}

	/// an iterator over all possible events for this module
	pub fn events(&self) -> impl Iterator<Item = &Event> {
		self.events.iter().flatten()
	}

	pub fn storage_entry(&self, name: &str) -> Option<&StorageEntry> {
		self.storage_entries().find(|e| e.name == name)
	}

	pub fn call(&self, name: &str) -> Option<&Call> {
		self.calls().find(|c| c.name == name)
	}

	pub fn event(&self, name: &str) -> Option<&Event> {
		self.events().find(|e| e.name == name)
	}

	pub fn constant(&self, name: &str) -> Option<&Constant> {
		self.constants.iter().find(|c| c.name == name)
	}
}

/// All metadata of the storage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StorageMetadata {
	/// The common prefix used by all storage entries.
	pub prefix: String,
	pub entries: Vec<StorageEntry>,
}

/// All the metadata about one storage entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StorageEntry {
	pub name: String,
	pub modifier: StorageEntryModifier,
	pub ty: StorageEntryType,
	/// SCALE encoded default value. Its layout depends on the value type name,
	/// which is not resolved here.
	#[serde(serialize_with = "util::as_hex")]
	pub default: Vec<u8>,
	pub documentation: Vec<String>,
}

/// A storage entry modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
pub enum StorageEntryModifier {
	Optional,
	Default,
}

/// The shape of a storage entry's key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum StorageEntryType {
	Plain(String),
	Map {
		hasher: StorageHasher,
		key: String,
		value: String,
		// is_linked flag previously, unused now to keep backwards compat
		unused: bool,
	},
	DoubleMap {
		hasher: StorageHasher,
		key1: String,
		key2: String,
		value: String,
		key2_hasher: StorageHasher,
	},
}

impl StorageEntryType {
	/// The name of the type stored at this entry.
	pub fn value_type(&self) -> &str {
		match self {
			StorageEntryType::Plain(value)
			| StorageEntryType::Map { value, .. }
			| StorageEntryType::DoubleMap { value, .. } => value,
		}
	}
}

impl fmt::Display for StorageEntryType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			StorageEntryType::Plain(value) => write!(f, "{}", value),
			StorageEntryType::Map { hasher, key, value, .. } => write!(f, "Map<{}({}), {}>", hasher, key, value),
			StorageEntryType::DoubleMap { hasher, key1, key2, value, key2_hasher } => {
				write!(f, "DoubleMap<{}({}), {}({}), {}>", hasher, key1, key2_hasher, key2, value)
			}
		}
	}
}

/// Hasher used by storage maps
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
pub enum StorageHasher {
	Blake2_128,
	Blake2_256,
	Blake2_128Concat,
	Twox128,
	Twox256,
	Twox64Concat,
	Identity,
}

impl StorageHasher {
	/// Every hasher, in the order of its encoded index.
	pub const ALL: [StorageHasher; 7] = [
		StorageHasher::Blake2_128,
		StorageHasher::Blake2_256,
		StorageHasher::Blake2_128Concat,
		StorageHasher::Twox128,
		StorageHasher::Twox256,
		StorageHasher::Twox64Concat,
		StorageHasher::Identity,
	];

	pub fn from_index(index: u8) -> Option<Self> {
		Self::ALL.get(usize::from(index)).copied()
	}
}

/// Metadata for Calls in Substrate
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Call {
	/// Name of the function of the call
	pub name: String,
	/// Arguments that the function accepts
	pub arguments: Vec<CallArgument>,
	pub documentation: Vec<String>,
}

impl fmt::Display for Call {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let args = self.arguments.iter().map(ToString::to_string).collect::<Vec<_>>();
		write!(f, "fn {}({})", self.name, args.join(", "))
	}
}

/// Metadata for Function Arguments to a Call
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CallArgument {
	/// name of argument
	pub name: String,
	/// Type of the Argument
	pub ty: String,
}

impl fmt::Display for CallArgument {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}: {}", self.name, self.ty)
	}
}

/// All the metadata about an event. Arguments are type names only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Event {
	pub name: String,
	pub arguments: Vec<String>,
	pub documentation: Vec<String>,
}

impl Event {
	/// Parse every argument type name into an [`EventArg`].
	pub fn parsed_arguments(&self) -> Result<Vec<EventArg>, InvalidEventArg> {
		self.arguments.iter().map(|a| a.parse()).collect()
	}
}

/// All the metadata about one module constant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Constant {
	pub name: String,
	pub ty: String,
	/// SCALE encoded value of type `ty`.
	#[serde(serialize_with = "util::as_hex")]
	pub value: Vec<u8>,
	pub documentation: Vec<String>,
}

/// Naive representation of event argument types, enough to tell vectors and tuples
/// apart from everything else.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum EventArg {
	Primitive(String),
	Vec(Box<EventArg>),
	Tuple(Vec<EventArg>),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid Event {0}:{1}")]
pub struct InvalidEventArg(pub String, pub &'static str);

impl FromStr for EventArg {
	type Err = InvalidEventArg;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let s = s.trim();
		if let Some(inner) = s.strip_prefix("Vec<") {
			match inner.strip_suffix('>') {
				Some(inner) => Ok(EventArg::Vec(Box::new(inner.parse()?))),
				None => Err(InvalidEventArg(s.to_string(), "Expected closing `>` for `Vec`")),
			}
		} else if let Some(inner) = s.strip_prefix('(') {
			match inner.strip_suffix(')') {
				Some(inner) => split_top_level(inner)
					.into_iter()
					.filter(|arg| !arg.trim().is_empty())
					.map(|arg| arg.parse::<EventArg>())
					.collect::<Result<Vec<_>, _>>()
					.map(EventArg::Tuple),
				None => Err(InvalidEventArg(s.to_string(), "Expecting closing `)` for tuple")),
			}
		} else {
			Ok(EventArg::Primitive(s.to_string()))
		}
	}
}

impl EventArg {
	/// Returns all primitive types for this EventArg
	pub fn primitives(&self) -> Vec<String> {
		match self {
			EventArg::Primitive(p) => vec![p.clone()],
			EventArg::Vec(arg) => arg.primitives(),
			EventArg::Tuple(args) => args.iter().flat_map(EventArg::primitives).collect(),
		}
	}
}

/// Split on commas that are not nested inside `<>`, `()` or `[]`.
fn split_top_level(s: &str) -> Vec<&str> {
	let mut parts = Vec::new();
	let (mut depth, mut start) = (0usize, 0);
	for (i, c) in s.char_indices() {
		match c {
			'<' | '(' | '[' => depth += 1,
			'>' | ')' | ']' => depth = depth.saturating_sub(1),
			',' if depth == 0 => {
				parts.push(&s[start..i]);
				start = i + 1;
			}
			_ => {}
		}
	}
	parts.push(&s[start..]);
	parts
}
