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

use super::{compact::decode_length, Cursor};
use crate::error::DecodeError;

/// A single byte; anything other than zero is `true`.
pub fn decode_bool(cursor: &mut Cursor<'_>) -> Result<bool, DecodeError> {
	Ok(cursor.read_byte()? != 0)
}

/// A compact length prefix followed by that many bytes of UTF-8.
pub fn decode_string(cursor: &mut Cursor<'_>) -> Result<String, DecodeError> {
	let bytes = decode_length_prefixed(cursor)?;
	let offset = cursor.offset() - bytes.len();
	std::str::from_utf8(bytes)
		.map(ToOwned::to_owned)
		.map_err(|source| DecodeError::InvalidUtf8 { offset, len: bytes.len(), source })
}

/// A compact length prefix followed by that many opaque bytes.
pub fn decode_bytes(cursor: &mut Cursor<'_>) -> Result<Vec<u8>, DecodeError> {
	decode_length_prefixed(cursor).map(<[u8]>::to_vec)
}

fn decode_length_prefixed<'a>(cursor: &mut Cursor<'a>) -> Result<&'a [u8], DecodeError> {
	let len = decode_length(cursor)?;
	cursor.read_bytes(len)
}
