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

//! Errors returned while decoding V11 metadata.

use thiserror::Error;

/// Any error that can be returned from decoding a metadata blob.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
	#[error(transparent)]
	Format(#[from] FormatError),
	#[error(transparent)]
	Decode(#[from] DecodeError),
}

impl Error {
	/// The byte offset the error was raised at. Format errors are always raised
	/// while checking the fixed prefix, so they report the start of the field they concern.
	pub fn offset(&self) -> usize {
		match self {
			Error::Format(FormatError::InvalidMagic { .. }) => 0,
			Error::Format(FormatError::UnsupportedVersion { .. }) => 4,
			Error::Decode(e) => e.offset(),
		}
	}
}

/// The blob does not start with the metadata prefix that we support.
/// Nothing past the prefix is inspected when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
	#[error("First four bytes of metadata should be 0x{expected}, found 0x{found}")]
	InvalidMagic { expected: String, found: String },
	#[error("Metadata version should be v{expected}, found v{found}")]
	UnsupportedVersion { expected: u8, found: u8 },
}

/// Something inside the metadata body could not be decoded. Every variant carries
/// the byte offset at which the failing read started.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
	#[error("Unexpected end of input at byte {offset}: expected {needed} more byte(s), but only {remaining} remain")]
	UnexpectedEof { offset: usize, needed: usize, remaining: usize },
	#[error("Invalid UTF-8 in the {len} byte string at byte {offset}: {source}")]
	InvalidUtf8 {
		offset: usize,
		len: usize,
		#[source]
		source: std::str::Utf8Error,
	},
	#[error("Invalid storage hasher index {index} at byte {offset}; expected 0..=6")]
	InvalidHasher { offset: usize, index: u8 },
	#[error("Invalid Option discriminant {found} at byte {offset}; expected 0 or 1")]
	InvalidOptionDiscriminant { offset: usize, found: u8 },
	#[error("Invalid storage entry type {found} at byte {offset}; expected 0 (Plain), 1 (Map) or 2 (DoubleMap)")]
	InvalidStorageEntryType { offset: usize, found: u8 },
	#[error("Invalid storage entry modifier {found} at byte {offset}; expected 0 (Optional) or 1 (Default)")]
	InvalidStorageModifier { offset: usize, found: u8 },
	#[error("Compact integer at byte {offset} uses {len} payload bytes and does not fit in a u64")]
	IntegerOverflow { offset: usize, len: usize },
	#[error("Compact integer at byte {offset} is not in its shortest {len} byte encoding")]
	NonCanonicalInteger { offset: usize, len: usize },
	#[error("Length {value} at byte {offset} does not fit in a usize")]
	LengthOverflow { offset: usize, value: u64 },
	#[error("Decoding finished at byte {offset}, but {remaining} byte(s) of the input were not consumed")]
	ExcessBytes { offset: usize, remaining: usize },
}

impl DecodeError {
	/// Byte offset at which the failing read started.
	pub fn offset(&self) -> usize {
		match *self {
			DecodeError::UnexpectedEof { offset, .. }
			| DecodeError::InvalidUtf8 { offset, .. }
			| DecodeError::InvalidHasher { offset, .. }
			| DecodeError::InvalidOptionDiscriminant { offset, .. }
			| DecodeError::InvalidStorageEntryType { offset, .. }
			| DecodeError::InvalidStorageModifier { offset, .. }
			| DecodeError::IntegerOverflow { offset, .. }
			| DecodeError::NonCanonicalInteger { offset, .. }
			| DecodeError::LengthOverflow { offset, .. }
			| DecodeError::ExcessBytes { offset, .. } => offset,
		}
	}
}
