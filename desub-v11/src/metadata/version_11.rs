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

//! Decoders for each record of the V11 metadata schema.
//!
//! Layout of a module, in order:
//!
//! ```text
//! name:      String
//! storage:   Option<{ prefix: String, entries: Vec<StorageEntry> }>
//! calls:     Option<Vec<Call>>
//! events:    Option<Vec<Event>>
//! constants: Vec<Constant>
//! errors:    Vec<{ name: String, documentation: Vec<String> }>   (only with `DecoderConfig::module_errors`)
//! ```

use super::{
	Call, CallArgument, Constant, Event, Metadata, Module, StorageEntry, StorageEntryModifier, StorageEntryType,
	StorageHasher, StorageMetadata,
};
use crate::{
	decoder::{decode_bool, decode_bytes, decode_option, decode_string, decode_vec, Cursor},
	DecodeError, DecoderConfig, Error, FormatError, META_RESERVED, SUPPORTED_VERSION,
};

/// Check the magic and version prefix, then decode the module list.
/// The cursor is left immediately after the last module.
pub fn decode(cursor: &mut Cursor<'_>, config: &DecoderConfig) -> Result<Metadata, Error> {
	decode_prefix(cursor)?;
	let modules = decode_modules(cursor, config)?;
	log::debug!("Decoded {} modules, finished at byte {}", modules.len(), cursor.offset());

	if config.require_exhausted && !cursor.is_empty() {
		return Err(DecodeError::ExcessBytes { offset: cursor.offset(), remaining: cursor.remaining() }.into());
	}
	Ok(Metadata::new(modules))
}

/// The 4 byte `b"meta"` tag followed by the version byte.
pub fn decode_prefix(cursor: &mut Cursor<'_>) -> Result<(), Error> {
	let magic: [u8; 4] = cursor.read_array()?;
	if magic != META_RESERVED {
		let expected = hex::encode(META_RESERVED);
		return Err(FormatError::InvalidMagic { expected, found: hex::encode(magic) }.into());
	}
	let version = cursor.read_byte()?;
	if version != SUPPORTED_VERSION {
		return Err(FormatError::UnsupportedVersion { expected: SUPPORTED_VERSION, found: version }.into());
	}
	log::trace!("V{} metadata found.", version);
	Ok(())
}

/// A compact count followed by that many modules.
pub fn decode_modules(cursor: &mut Cursor<'_>, config: &DecoderConfig) -> Result<Vec<Module>, DecodeError> {
	decode_vec(cursor, |c| decode_module(c, config))
}

pub fn decode_module(cursor: &mut Cursor<'_>, config: &DecoderConfig) -> Result<Module, DecodeError> {
	let start = cursor.offset();
	let name = decode_string(cursor)?;
	log::trace!("Decoding module {} at byte {}", name, start);

	let storage = decode_option(cursor, decode_storage)?;
	let calls = decode_option(cursor, |c| decode_vec(c, decode_call))?;
	let events = decode_option(cursor, |c| decode_vec(c, decode_event))?;
	let constants = decode_vec(cursor, decode_constant)?;
	if config.module_errors {
		let errors = decode_vec(cursor, skip_error)?;
		log::trace!("Skipped {} errors of module {}", errors.len(), name);
	}

	Ok(Module { name, storage, calls, events, constants })
}

pub fn decode_storage(cursor: &mut Cursor<'_>) -> Result<StorageMetadata, DecodeError> {
	let prefix = decode_string(cursor)?;
	log::trace!("Decoding storage with prefix {}", prefix);
	let entries = decode_vec(cursor, decode_storage_entry)?;
	Ok(StorageMetadata { prefix, entries })
}

pub fn decode_storage_entry(cursor: &mut Cursor<'_>) -> Result<StorageEntry, DecodeError> {
	let name = decode_string(cursor)?;
	log::trace!("Decoding storage entry {}", name);
	let modifier = decode_storage_modifier(cursor)?;
	let ty = decode_storage_entry_type(cursor)?;
	let default = decode_bytes(cursor)?;
	let documentation = decode_vec(cursor, decode_string)?;
	Ok(StorageEntry { name, modifier, ty, default, documentation })
}

pub fn decode_storage_modifier(cursor: &mut Cursor<'_>) -> Result<StorageEntryModifier, DecodeError> {
	let offset = cursor.offset();
	match cursor.read_byte()? {
		0 => Ok(StorageEntryModifier::Optional),
		1 => Ok(StorageEntryModifier::Default),
		found => Err(DecodeError::InvalidStorageModifier { offset, found }),
	}
}

pub fn decode_storage_entry_type(cursor: &mut Cursor<'_>) -> Result<StorageEntryType, DecodeError> {
	let offset = cursor.offset();
	let entry = match cursor.read_byte()? {
		0 => StorageEntryType::Plain(decode_string(cursor)?),
		1 => StorageEntryType::Map {
			hasher: decode_hasher(cursor)?,
			key: decode_string(cursor)?,
			value: decode_string(cursor)?,
			unused: decode_bool(cursor)?,
		},
		2 => StorageEntryType::DoubleMap {
			hasher: decode_hasher(cursor)?,
			key1: decode_string(cursor)?,
			key2: decode_string(cursor)?,
			value: decode_string(cursor)?,
			key2_hasher: decode_hasher(cursor)?,
		},
		found => return Err(DecodeError::InvalidStorageEntryType { offset, found }),
	};
	Ok(entry)
}

pub fn decode_hasher(cursor: &mut Cursor<'_>) -> Result<StorageHasher, DecodeError> {
	let offset = cursor.offset();
	let index = cursor.read_byte()?;
	StorageHasher::from_index(index).ok_or(DecodeError::InvalidHasher { offset, index })
}

pub fn decode_call(cursor: &mut Cursor<'_>) -> Result<Call, DecodeError> {
	let name = decode_string(cursor)?;
	log::trace!("Decoding call {}", name);
	let arguments = decode_vec(cursor, decode_call_argument)?;
	let documentation = decode_vec(cursor, decode_string)?;
	Ok(Call { name, arguments, documentation })
}

pub fn decode_call_argument(cursor: &mut Cursor<'_>) -> Result<CallArgument, DecodeError> {
	let name = decode_string(cursor)?;
	let ty = decode_string(cursor)?;
	log::trace!("Decoding call argument {}: {}", name, ty);
	Ok(CallArgument { name, ty })
}

pub fn decode_event(cursor: &mut Cursor<'_>) -> Result<Event, DecodeError> {
	let name = decode_string(cursor)?;
	log::trace!("Decoding event {}", name);
	let arguments = decode_vec(cursor, decode_string)?;
	let documentation = decode_vec(cursor, decode_string)?;
	Ok(Event { name, arguments, documentation })
}

pub fn decode_constant(cursor: &mut Cursor<'_>) -> Result<Constant, DecodeError> {
	let name = decode_string(cursor)?;
	log::trace!("Decoding constant {}", name);
	let ty = decode_string(cursor)?;
	let value = decode_bytes(cursor)?;
	let documentation = decode_vec(cursor, decode_string)?;
	Ok(Constant { name, ty, value, documentation })
}

fn skip_error(cursor: &mut Cursor<'_>) -> Result<(), DecodeError> {
	decode_string(cursor)?;
	decode_vec(cursor, decode_string)?;
	Ok(())
}
