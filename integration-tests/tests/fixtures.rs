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

//! A small runtime's metadata, built from types that encode the same way the
//! node's V11 metadata types do.

use codec::Encode;

#[allow(dead_code)]
#[derive(Encode, Clone)]
pub enum StorageHasher {
	Blake2_128,
	Blake2_256,
	Blake2_128Concat,
	Twox128,
	Twox256,
	Twox64Concat,
	Identity,
}

#[derive(Encode, Clone)]
pub enum StorageEntryModifier {
	Optional,
	Default,
}

#[derive(Encode, Clone)]
pub enum StorageEntryType {
	Plain(String),
	Map { hasher: StorageHasher, key: String, value: String, unused: bool },
	DoubleMap { hasher: StorageHasher, key1: String, key2: String, value: String, key2_hasher: StorageHasher },
}

#[derive(Encode, Clone)]
pub struct StorageEntryMetadata {
	pub name: String,
	pub modifier: StorageEntryModifier,
	pub ty: StorageEntryType,
	pub default: Vec<u8>,
	pub documentation: Vec<String>,
}

#[derive(Encode, Clone)]
pub struct StorageMetadata {
	pub prefix: String,
	pub entries: Vec<StorageEntryMetadata>,
}

#[derive(Encode, Clone)]
pub struct FunctionArgumentMetadata {
	pub name: String,
	pub ty: String,
}

#[derive(Encode, Clone)]
pub struct FunctionMetadata {
	pub name: String,
	pub arguments: Vec<FunctionArgumentMetadata>,
	pub documentation: Vec<String>,
}

#[derive(Encode, Clone)]
pub struct EventMetadata {
	pub name: String,
	pub arguments: Vec<String>,
	pub documentation: Vec<String>,
}

#[derive(Encode, Clone)]
pub struct ModuleConstantMetadata {
	pub name: String,
	pub ty: String,
	pub value: Vec<u8>,
	pub documentation: Vec<String>,
}

#[derive(Encode, Clone)]
pub struct ErrorMetadata {
	pub name: String,
	pub documentation: Vec<String>,
}

#[derive(Encode, Clone)]
pub struct ModuleMetadata {
	pub name: String,
	pub storage: Option<StorageMetadata>,
	pub calls: Option<Vec<FunctionMetadata>>,
	pub event: Option<Vec<EventMetadata>>,
	pub constants: Vec<ModuleConstantMetadata>,
}

/// A module as a node emits it, with its error list after the constants.
#[derive(Encode, Clone)]
pub struct NodeModuleMetadata {
	pub module: ModuleMetadata,
	pub errors: Vec<ErrorMetadata>,
}

#[derive(Encode, Clone)]
pub struct ExtrinsicMetadata {
	pub version: u8,
	pub signed_extensions: Vec<String>,
}

fn docs(lines: &[&str]) -> Vec<String> {
	lines.iter().map(|l| l.to_string()).collect()
}

fn entry(name: &str, modifier: StorageEntryModifier, ty: StorageEntryType, default: Vec<u8>) -> StorageEntryMetadata {
	StorageEntryMetadata { name: name.into(), modifier, ty, default, documentation: docs(&[" Storage entry."]) }
}

fn arg(name: &str, ty: &str) -> FunctionArgumentMetadata {
	FunctionArgumentMetadata { name: name.into(), ty: ty.into() }
}

fn system() -> ModuleMetadata {
	ModuleMetadata {
		name: "System".into(),
		storage: Some(StorageMetadata {
			prefix: "System".into(),
			entries: vec![
				entry(
					"Account",
					StorageEntryModifier::Default,
					StorageEntryType::Map {
						hasher: StorageHasher::Blake2_128Concat,
						key: "T::AccountId".into(),
						value: "AccountInfo<T::Index, T::AccountData>".into(),
						unused: false,
					},
					vec![0; 8],
				),
				entry(
					"BlockNumber",
					StorageEntryModifier::Default,
					StorageEntryType::Plain("T::BlockNumber".into()),
					0u32.encode(),
				),
				entry(
					"EventTopics",
					StorageEntryModifier::Default,
					StorageEntryType::DoubleMap {
						hasher: StorageHasher::Blake2_128,
						key1: "()".into(),
						key2: "T::Hash".into(),
						value: "Vec<(T::BlockNumber, EventIndex)>".into(),
						key2_hasher: StorageHasher::Blake2_128Concat,
					},
					vec![0],
				),
			],
		}),
		calls: Some(vec![
			FunctionMetadata {
				name: "remark".into(),
				arguments: vec![arg("_remark", "Vec<u8>")],
				documentation: docs(&[" Make some on-chain remark."]),
			},
			FunctionMetadata {
				name: "set_heap_pages".into(),
				arguments: vec![arg("pages", "u64")],
				documentation: vec![],
			},
		]),
		event: Some(vec![
			EventMetadata {
				name: "ExtrinsicSuccess".into(),
				arguments: vec!["DispatchInfo".into()],
				documentation: docs(&[" An extrinsic completed successfully."]),
			},
			EventMetadata { name: "NewAccount".into(), arguments: vec!["AccountId".into()], documentation: vec![] },
		]),
		constants: vec![ModuleConstantMetadata {
			name: "BlockHashCount".into(),
			ty: "T::BlockNumber".into(),
			value: 2400u32.encode(),
			documentation: docs(&[" The maximum number of blocks to allow in mortal eras."]),
		}],
	}
}

fn timestamp() -> ModuleMetadata {
	ModuleMetadata {
		name: "Timestamp".into(),
		storage: Some(StorageMetadata {
			prefix: "Timestamp".into(),
			entries: vec![
				entry("Now", StorageEntryModifier::Default, StorageEntryType::Plain("T::Moment".into()), 0u64.encode()),
				entry(
					"DidUpdate",
					StorageEntryModifier::Default,
					StorageEntryType::Plain("bool".into()),
					false.encode(),
				),
			],
		}),
		calls: Some(vec![FunctionMetadata {
			name: "set".into(),
			arguments: vec![arg("now", "Compact<T::Moment>")],
			documentation: docs(&[" Set the current time."]),
		}]),
		event: None,
		constants: vec![ModuleConstantMetadata {
			name: "MinimumPeriod".into(),
			ty: "T::Moment".into(),
			value: 3000u64.encode(),
			documentation: vec![],
		}],
	}
}

fn balances() -> ModuleMetadata {
	ModuleMetadata {
		name: "Balances".into(),
		storage: Some(StorageMetadata {
			prefix: "Balances".into(),
			entries: vec![
				entry(
					"TotalIssuance",
					StorageEntryModifier::Default,
					StorageEntryType::Plain("T::Balance".into()),
					0u128.encode(),
				),
				entry(
					"Locks",
					StorageEntryModifier::Optional,
					StorageEntryType::Map {
						hasher: StorageHasher::Twox64Concat,
						key: "T::AccountId".into(),
						value: "Vec<BalanceLock<T::Balance>>".into(),
						unused: false,
					},
					vec![0],
				),
			],
		}),
		calls: Some(vec![FunctionMetadata {
			name: "transfer".into(),
			arguments: vec![arg("dest", "<T::Lookup as StaticLookup>::Source"), arg("value", "Compact<T::Balance>")],
			documentation: docs(&[" Transfer some liquid free balance to another account."]),
		}]),
		event: Some(vec![EventMetadata {
			name: "Transfer".into(),
			arguments: vec!["AccountId".into(), "AccountId".into(), "Balance".into()],
			documentation: docs(&[" Transfer succeeded (from, to, value)."]),
		}]),
		constants: vec![ModuleConstantMetadata {
			name: "ExistentialDeposit".into(),
			ty: "T::Balance".into(),
			value: 500u128.encode(),
			documentation: vec![],
		}],
	}
}

/// A module with nothing but a name.
fn randomness() -> ModuleMetadata {
	ModuleMetadata {
		name: "RandomnessCollectiveFlip".into(),
		storage: None,
		calls: None,
		event: None,
		constants: vec![],
	}
}

pub fn modules() -> Vec<ModuleMetadata> {
	vec![system(), randomness(), timestamp(), balances()]
}

pub fn extrinsic() -> ExtrinsicMetadata {
	ExtrinsicMetadata { version: 4, signed_extensions: vec!["CheckSpecVersion".into(), "CheckNonce".into()] }
}

fn prefix() -> Vec<u8> {
	let mut bytes = b"meta".to_vec();
	bytes.push(11);
	bytes
}

/// Metadata with the module list as the last field, and no module errors.
pub fn runtime_v11() -> Vec<u8> {
	let mut bytes = prefix();
	modules().encode_to(&mut bytes);
	bytes
}

/// Metadata as a node returns it from `state_getMetadata`: every module carries
/// an error list and the extrinsic metadata follows the modules.
///
/// Returns the bytes and the length of the trailing extrinsic metadata.
pub fn node_runtime_v11() -> (Vec<u8>, usize) {
	let mut bytes = prefix();
	let node_modules = modules()
		.into_iter()
		.map(|module| {
			let errors = if module.name == "Balances" {
				vec![
					ErrorMetadata {
						name: "VestingBalance".into(),
						documentation: docs(&[" Vesting balance too high to send value"]),
					},
					ErrorMetadata { name: "InsufficientBalance".into(), documentation: vec![] },
				]
			} else {
				vec![]
			};
			NodeModuleMetadata { module, errors }
		})
		.collect::<Vec<_>>();
	node_modules.encode_to(&mut bytes);
	let extrinsic = extrinsic().encode();
	bytes.extend_from_slice(&extrinsic);
	(bytes, extrinsic.len())
}
