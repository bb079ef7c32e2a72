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

/// A compact count `n` followed by `n` values, each decoded by `decode_item`.
pub fn decode_vec<'a, T, F>(cursor: &mut Cursor<'a>, mut decode_item: F) -> Result<Vec<T>, DecodeError>
where
	F: FnMut(&mut Cursor<'a>) -> Result<T, DecodeError>,
{
	let len = decode_length(cursor)?;
	// The count is untrusted; every item takes at least one byte.
	let mut items = Vec::with_capacity(len.min(cursor.remaining()));
	for _ in 0..len {
		items.push(decode_item(cursor)?);
	}
	Ok(items)
}

/// A discriminant byte, followed by a value decoded by `decode_some` when it is `1`.
/// Only `0` and `1` are valid discriminants.
pub fn decode_option<'a, T, F>(cursor: &mut Cursor<'a>, decode_some: F) -> Result<Option<T>, DecodeError>
where
	F: FnOnce(&mut Cursor<'a>) -> Result<T, DecodeError>,
{
	let offset = cursor.offset();
	match cursor.read_byte()? {
		0 => Ok(None),
		1 => decode_some(cursor).map(Some),
		found => Err(DecodeError::InvalidOptionDiscriminant { offset, found }),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::decoder::{decode_compact, decode_string};
	use codec::{Compact, Encode};

	#[test]
	fn empty_vec_consumes_only_the_count() {
		let data = [0u8, 0xaa];
		let mut cursor = Cursor::new(&data);
		let items = decode_vec(&mut cursor, |_| -> Result<u8, _> { panic!("no items expected") }).unwrap();
		assert!(items.is_empty());
		assert_eq!(cursor.offset(), 1);
	}

	#[test]
	fn vec_threads_the_offset_through_each_item() {
		let data = vec!["a".to_string(), "bcd".to_string(), String::new()].encode();
		let mut cursor = Cursor::new(&data);
		let items = decode_vec(&mut cursor, decode_string).unwrap();
		assert_eq!(items, vec!["a", "bcd", ""]);
		assert!(cursor.is_empty());
	}

	#[test]
	fn vec_with_missing_items_is_eof() {
		let mut data = Compact(3u32).encode();
		data.extend(Compact(1u32).encode());
		let mut cursor = Cursor::new(&data);
		assert!(matches!(
			decode_vec(&mut cursor, decode_compact),
			Err(DecodeError::UnexpectedEof { offset: 2, .. })
		));
	}

	#[test]
	fn huge_count_does_not_preallocate() {
		let data = Compact(u32::MAX).encode();
		let mut cursor = Cursor::new(&data);
		assert!(decode_vec(&mut cursor, decode_compact).is_err());
	}

	#[test]
	fn absent_option_consumes_one_byte_and_skips_the_payload() {
		let data = [0u8, 0xff];
		let mut cursor = Cursor::new(&data);
		let value: Option<u8> = decode_option(&mut cursor, |_| panic!("payload must not be decoded")).unwrap();
		assert_eq!(value, None);
		assert_eq!(cursor.offset(), 1);
	}

	#[test]
	fn present_option_decodes_the_payload() {
		let data = Some("Balances".to_string()).encode();
		let mut cursor = Cursor::new(&data);
		assert_eq!(decode_option(&mut cursor, decode_string), Ok(Some("Balances".to_string())));
		assert!(cursor.is_empty());
	}

	#[test]
	fn other_option_discriminants_are_rejected() {
		let data = [2u8, 0];
		let mut cursor = Cursor::new(&data);
		assert_eq!(
			decode_option(&mut cursor, decode_compact),
			Err(DecodeError::InvalidOptionDiscriminant { offset: 0, found: 2 })
		);
	}
}
