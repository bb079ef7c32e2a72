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


//! The SCALE "compact" unsigned integer encoding, used for every length and count
//! in the metadata.
//!
//! The low two bits of the first byte select the mode:
//!
//! | bits | bytes     | value                                          |
//! |------|-----------|------------------------------------------------|
//! | `00` | 1         | `byte >> 2` (0..=63)                           |
//! | `01` | 2         | `u16 LE >> 2` (64..=16383)                     |
//! | `10` | 4         | `u32 LE >> 2` (16384..=2^30 - 1)               |
//! | `11` | 1 + n     | `n = (byte >> 2) + 4` little-endian bytes follow |
//!
//! Only the shortest encoding of a value is accepted.

use super::Cursor;
use crate::error::DecodeError;
use codec::{Compact, CompactLen, Decode};

/// Widest payload of a compact `u64` in mode `11`.
const MAX_PAYLOAD_LEN: usize = 8;

/// Decode a compact encoded unsigned integer. Values that do not fit in a `u64`
/// are rejected rather than truncated.
pub fn decode_compact(cursor: &mut Cursor<'_>) -> Result<u64, DecodeError> {
	let start = cursor.offset();
	let len = encoded_len(cursor.peek()?);
	let bytes = cursor.remaining_bytes();
	if bytes.len() < len {
		return Err(DecodeError::UnexpectedEof { offset: start, needed: len, remaining: bytes.len() });
	}

	let payload_len = len - 1;
	if payload_len > MAX_PAYLOAD_LEN {
		return Err(if bytes[1 + MAX_PAYLOAD_LEN..len].iter().any(|b| *b != 0) {
			DecodeError::IntegerOverflow { offset: start, len: payload_len }
		} else {
			DecodeError::NonCanonicalInteger { offset: start, len }
		});
	}

	let mut input = &bytes[..len];
	let value = Compact::<u64>::decode(&mut input)
		.map_err(|_| DecodeError::NonCanonicalInteger { offset: start, len })?
		.0;
	cursor.read_bytes(len)?;
	log::trace!("compact {} at byte {}, {} byte(s)", value, start, len);
	Ok(value)
}

/// Number of bytes a compact integer takes, judged from its first byte.
fn encoded_len(prefix: u8) -> usize {
	match prefix & 0b11 {
		0b00 => 1,
		0b01 => 2,
		0b10 => 4,
		_ => 1 + usize::from(prefix >> 2) + 4,
	}
}

/// Decode a compact encoded length or count, which must fit in a `usize`.
pub fn decode_length(cursor: &mut Cursor<'_>) -> Result<usize, DecodeError> {
	let offset = cursor.offset();
	let value = decode_compact(cursor)?;
	usize::try_from(value).map_err(|_| DecodeError::LengthOverflow { offset, value })
}

/// The number of bytes the compact encoding of `value` occupies.
pub fn compact_len(value: u64) -> usize {
	Compact::<u64>::compact_len(&value)
}
