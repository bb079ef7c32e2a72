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

use crate::error::DecodeError;

/// A byte buffer plus a read position. Every read either hands back exactly the
/// bytes it was asked for and moves the position past them, or fails without moving.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
	data: &'a [u8],
	offset: usize,
}

impl<'a> Cursor<'a> {
	/// Start reading `data` from its first byte.
	pub fn new(data: &'a [u8]) -> Self {
		Self { data, offset: 0 }
	}

	/// Start reading `data` at `offset`. An offset past the end is clamped,
	/// so the first read reports the overrun.
	pub fn at(data: &'a [u8], offset: usize) -> Self {
		Self { data, offset: offset.min(data.len()) }
	}

	/// The position of the next byte to be read.
	pub fn offset(&self) -> usize {
		self.offset
	}

	/// How many bytes are left to read.
	pub fn remaining(&self) -> usize {
		self.data.len() - self.offset
	}

	pub fn is_empty(&self) -> bool {
		self.remaining() == 0
	}

	/// The bytes that have not been read yet.
	pub fn remaining_bytes(&self) -> &'a [u8] {
		&self.data[self.offset..]
	}

	/// Look at the next byte without consuming it.
	pub fn peek(&self) -> Result<u8, DecodeError> {
		self.data.get(self.offset).copied().ok_or_else(|| self.eof(1))
	}

	/// Read a single byte.
	pub fn read_byte(&mut self) -> Result<u8, DecodeError> {
		let byte = self.peek()?;
		self.offset += 1;
		Ok(byte)
	}

	/// Read exactly `len` bytes.
	pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
		if len > self.remaining() {
			return Err(self.eof(len));
		}
		let bytes = &self.data[self.offset..self.offset + len];
		self.offset += len;
		Ok(bytes)
	}

	/// Read exactly `N` bytes into an array.
	pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
		let mut out = [0u8; N];
		out.copy_from_slice(self.read_bytes(N)?);
		Ok(out)
	}

	fn eof(&self, needed: usize) -> DecodeError {
		DecodeError::UnexpectedEof { offset: self.offset, needed, remaining: self.remaining() }
	}
}
