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

use anyhow::Context;
use clap::Parser;
use desub_v11::{decode_metadata_with, DecoderConfig, Metadata};
use std::path::{Path, PathBuf};

/// Decode V11 runtime metadata fetched from a node and write it out as JSON and hex.
#[derive(Debug, Parser)]
struct Opts {
	/// Metadata blob: raw SCALE bytes, a hex string (optionally 0x prefixed), or the
	/// JSON-RPC response to `state_getMetadata`.
	metadata: PathBuf,
	/// Directory that `metadata.json` and `metadata.scale` are written to.
	#[arg(short, long, default_value = ".")]
	out_dir: PathBuf,
	/// The blob has an `errors` list after each module's constants, as live nodes emit.
	#[arg(long)]
	module_errors: bool,
	/// Fail if any bytes are left after the module list.
	#[arg(long)]
	strict: bool,
	/// Print a summary of every module.
	#[arg(long)]
	pretty: bool,
	/// Print a summary of every module including types.
	#[arg(long, conflicts_with = "pretty")]
	detailed: bool,
	/// Only decode; do not write any files.
	#[arg(long)]
	no_write: bool,
}

impl Opts {
	fn config(&self) -> DecoderConfig {
		DecoderConfig::default().with_module_errors(self.module_errors).with_require_exhausted(self.strict)
	}
}

fn main() -> Result<(), anyhow::Error> {
	let opts = Opts::parse();
	pretty_env_logger::init();

	let contents = std::fs::read(&opts.metadata).with_context(|| format!("Cannot read {}", opts.metadata.display()))?;
	let bytes = metadata_bytes(&contents)?;
	log::info!("Read {} bytes of metadata from {}", bytes.len(), opts.metadata.display());

	let (meta, offset) = decode_metadata_with(&bytes, &opts.config())?;
	if offset < bytes.len() {
		log::warn!("{} trailing byte(s) after the module list were not decoded", bytes.len() - offset);
	}
	println!("Decoded {} modules of metadata v{}", meta.modules().len(), meta.version());

	if opts.pretty {
		print!("{}", meta.pretty());
	} else if opts.detailed {
		print!("{}", meta.detailed_pretty());
	}

	if !opts.no_write {
		write_outputs(&opts.out_dir, &meta, &bytes)?;
	}
	Ok(())
}

/// Turn the contents of the input file into metadata bytes.
fn metadata_bytes(contents: &[u8]) -> Result<Vec<u8>, anyhow::Error> {
	if contents.starts_with(&desub_v11::META_RESERVED) {
		return Ok(contents.to_vec());
	}

	let text = std::str::from_utf8(contents).context("Metadata is neither SCALE bytes nor text")?.trim();
	let hex_str = if text.starts_with('{') {
		let response: serde_json::Value = serde_json::from_str(text).context("Cannot parse JSON-RPC response")?;
		match response.get("result").and_then(|r| r.as_str()) {
			Some(result) => result.to_string(),
			None => anyhow::bail!("JSON-RPC response has no string `result` field"),
		}
	} else {
		text.to_string()
	};

	let hex_str = hex_str.strip_prefix("0x").unwrap_or(&hex_str);
	match hex::decode(hex_str) {
		Ok(bytes) => Ok(bytes),
		Err(e) => anyhow::bail!("Cannot decode hex string into bytes: {}", e),
	}
}

fn write_outputs(dir: &Path, meta: &Metadata, bytes: &[u8]) -> Result<(), anyhow::Error> {
	let json_path = dir.join("metadata.json");
	let json = serde_json::to_string_pretty(meta)?;
	std::fs::write(&json_path, json).with_context(|| format!("Cannot write {}", json_path.display()))?;

	let scale_path = dir.join("metadata.scale");
	std::fs::write(&scale_path, format!("0x{}", hex::encode(bytes)))
		.with_context(|| format!("Cannot write {}", scale_path.display()))?;

	log::info!("Wrote {} and {}", json_path.display(), scale_path.display());
	Ok(())
}
