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

//! Serde helpers used by the metadata types.

use serde::Serializer;

/// Serialize opaque bytes as a `0x` prefixed hex string.
pub fn as_hex<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
	let mut hex_str = String::from("0x");
	hex_str.push_str(&hex::encode(bytes));
	serializer.serialize_str(&hex_str)
}

/// Serialize the metadata magic as the text it spells, falling back to hex
/// if it is not printable ASCII.
pub fn as_ascii<S: Serializer>(bytes: &[u8; 4], serializer: S) -> Result<S::Ok, S::Error> {
	if bytes.iter().all(|b| b.is_ascii_graphic()) {
		let text: String = bytes.iter().map(|b| char::from(*b)).collect();
		serializer.serialize_str(&text)
	} else {
		as_hex(bytes, serializer)
	}
}
