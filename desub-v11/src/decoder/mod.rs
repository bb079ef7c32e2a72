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

//! The building blocks used to walk SCALE encoded metadata: a [`Cursor`] over the raw
//! bytes, the compact integer decoder, and the primitive and generic decoders that the
//! metadata schema is assembled from.
//!
//! Every decoder takes a `&mut Cursor` and consumes exactly the bytes of the value it
//! returns. On error the cursor is left at an unspecified position within the failed value,
//! and the error carries the offset at which the failing read started.

mod collections;
mod compact;
mod cursor;
mod primitives;

pub use collections::{decode_option, decode_vec};
pub use compact::{compact_len, decode_compact, decode_length};
pub use cursor::Cursor;
pub use primitives::{decode_bool, decode_bytes, decode_string};
