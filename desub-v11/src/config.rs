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

/// Switches that change how a metadata blob is walked. The default decodes exactly
/// the layout described in the crate documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecoderConfig {
	/// Consume the `errors` list that nodes encode after each module's constants.
	/// The errors are skipped over and never appear in the decoded [`crate::Module`].
	pub module_errors: bool,
	/// Fail with [`crate::DecodeError::ExcessBytes`] if anything follows the module list.
	pub require_exhausted: bool,
}

impl DecoderConfig {
	/// The layout emitted by a live V11 node: module errors are present, and the
	/// extrinsic metadata that follows the modules is left unread.
	pub fn node() -> Self {
		Self { module_errors: true, require_exhausted: false }
	}

	pub fn with_module_errors(mut self, module_errors: bool) -> Self {
		self.module_errors = module_errors;
		self
	}

	pub fn with_require_exhausted(mut self, require_exhausted: bool) -> Self {
		self.require_exhausted = require_exhausted;
		self
	}
}
