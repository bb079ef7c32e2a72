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

//! Decode SCALE encoded V11 runtime metadata, as returned by a substrate node's
//! `state_getMetadata` RPC call, into a strongly typed tree.
//!
//! The blob starts with the four bytes `b"meta"` and the version byte `11`, followed by a
//! compact encoded count of modules. Each module is decoded field by field, every decoder
//! consuming exactly the bytes of the value it returns (see [`metadata::version_11`]).
//!
//! ```rust
//! use desub_v11::{decode_metadata, Module};
//!
//! let mut bytes = b"meta".to_vec();
//! bytes.push(11);
//! // one module named "System" with no storage, calls, events or constants
//! bytes.extend_from_slice(&[0x04, 0x18]);
//! bytes.extend_from_slice(b"System");
//! bytes.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);
//!
//! let (metadata, offset) = decode_metadata(&bytes).unwrap();
//! assert_eq!(offset, bytes.len());
//! assert_eq!(
//!     metadata.modules(),
//!     &[Module { name: "System".into(), storage: None, calls: None, events: None, constants: vec![] }]
//! );
//! ```

#![forbid(unsafe_code)]

mod config;
mod error;
mod util;

pub mod decoder;
pub mod metadata;

pub use config::DecoderConfig;
pub use error::{DecodeError, Error, FormatError};
pub use metadata::{
	Call, CallArgument, Constant, Event, EventArg, InvalidEventArg, Metadata, Module, StorageEntry,
	StorageEntryModifier, StorageEntryType, StorageHasher, StorageMetadata,
};

use decoder::Cursor;

/// The tag every metadata blob starts with.
pub const META_RESERVED: [u8; 4] = *b"meta";

/// The only metadata version this crate decodes.
pub const SUPPORTED_VERSION: u8 = 11;

/// Decode metadata from the start of `bytes` with the default [`DecoderConfig`].
///
/// Returns the metadata and the offset just past the last byte that was decoded,
/// which equals `bytes.len()` for a blob that holds nothing else.
pub fn decode_metadata(bytes: &[u8]) -> Result<(Metadata, usize), Error> {
	decode_metadata_with(bytes, &DecoderConfig::default())
}

/// Decode metadata from the start of `bytes`. No partially decoded metadata is
/// returned: any failure aborts the whole decode.
pub fn decode_metadata_with(bytes: &[u8], config: &DecoderConfig) -> Result<(Metadata, usize), Error> {
	log::trace!("Decoding {} bytes of metadata with {:?}", bytes.len(), config);
	let mut cursor = Cursor::new(bytes);
	let metadata = metadata::version_11::decode(&mut cursor, config)?;
	Ok((metadata, cursor.offset()))
}
