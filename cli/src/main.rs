// Copyright 2024 RISC Zero, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

mod output;

use anyhow::{Context, Result};
use clap::Parser;
use output::Format;
use output_root_core::{compute_output_root, presets, OutputRootProof, Preset};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const ZERO_VERSION: &str = "0x0000000000000000000000000000000000000000000000000000000000000000";

/// CLI for computing L2 output roots as committed to by dispute games
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Output format
    #[clap(long, env = "OUTPUT_ROOT_FORMAT", value_enum, default_value_t = Format::Text, global = true)]
    format: Format,

    /// Defaults to computing every built-in preset
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Subcommands of the output root CLI.
#[derive(Parser, Debug)]
enum Command {
    /// Compute the output root of the built-in presets
    Presets {
        /// Only compute the preset with this name
        #[clap(long)]
        name: Option<String>,
    },
    /// Compute the output root of the given words
    Compute {
        /// 32-byte version word
        #[clap(long, env, default_value = ZERO_VERSION)]
        version_byte: String,

        /// State root of the L2 block
        #[clap(long, env)]
        state_root: String,

        /// Storage root of the L2ToL1MessagePasser contract at the L2 block
        #[clap(long, env)]
        withdrawal_storage_root: String,

        /// Hash of the L2 block
        #[clap(long, env)]
        latest_block_hash: String,
    },
    /// Split a 128 byte output root preimage into its words and hash it
    Decode { preimage: String },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let mut stdout = std::io::stdout().lock();

    match args.command.unwrap_or(Command::Presets { name: None }) {
        Command::Presets { name } => {
            let results = run_presets(name.as_deref())?;
            output::write_presets(&mut stdout, args.format, &results)?;
        }
        Command::Compute {
            version_byte,
            state_root,
            withdrawal_storage_root,
            latest_block_hash,
        } => {
            let report = compute_output_root(
                &version_byte,
                &state_root,
                &withdrawal_storage_root,
                &latest_block_hash,
            )
            .context("failed to compute output root")?;
            output::write_report(&mut stdout, args.format, &report)?;
        }
        Command::Decode { preimage } => {
            let proof = decode_preimage(&preimage)?;
            output::write_decoded(&mut stdout, args.format, &proof)?;
        }
    }

    Ok(())
}

#[tracing::instrument]
fn run_presets(
    name: Option<&str>,
) -> Result<Vec<(&'static Preset, output_root_core::OutputRootReport)>> {
    let selected: Vec<&'static Preset> = match name {
        Some(name) => vec![presets::find(name)?],
        None => presets::PRESETS.iter().collect(),
    };

    selected
        .into_iter()
        .map(|preset| {
            let report = preset
                .report()
                .with_context(|| format!("failed to compute preset {}", preset.name))?;
            tracing::info!(preset = preset.name, output_root = %report.output_root, "computed preset");
            Ok((preset, report))
        })
        .collect()
}

fn decode_preimage(preimage: &str) -> Result<OutputRootProof> {
    let digits = preimage
        .strip_prefix("0x")
        .or_else(|| preimage.strip_prefix("0X"))
        .unwrap_or(preimage);
    let bytes = hex::decode(digits).context("preimage is not valid hex")?;
    Ok(OutputRootProof::decode(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_args() {
        Args::command().debug_assert();
    }

    #[test]
    fn no_subcommand_runs_presets() -> Result<()> {
        let args = Args::try_parse_from(["output-root"])?;
        assert!(args.command.is_none());
        assert_eq!(args.format, Format::Text);
        Ok(())
    }

    #[test]
    fn compute_defaults_to_zero_version() -> Result<()> {
        let args = Args::try_parse_from([
            "output-root",
            "compute",
            "--state-root",
            presets::ROOT_CLAIM.state_root,
            "--withdrawal-storage-root",
            presets::ROOT_CLAIM.withdrawal_storage_root,
            "--latest-block-hash",
            presets::ROOT_CLAIM.latest_block_hash,
            "--format",
            "json",
        ])?;
        assert_eq!(args.format, Format::Json);
        match args.command {
            Some(Command::Compute { version_byte, .. }) => assert_eq!(version_byte, ZERO_VERSION),
            other => panic!("unexpected command {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn unknown_preset_fails() {
        assert!(run_presets(Some("missing")).is_err());
    }

    #[test]
    fn all_presets_run() -> Result<()> {
        assert_eq!(run_presets(None)?.len(), presets::PRESETS.len());
        Ok(())
    }

    #[test]
    fn decode_round_trip() -> Result<()> {
        let proof = presets::STARTING_OUTPUT_ROOT.proof()?;
        let preimage = output_root_core::to_hex(proof.full_input());
        assert_eq!(decode_preimage(&preimage)?, proof);
        assert_eq!(decode_preimage(&preimage[2..])?, proof);
        assert!(decode_preimage("0x1234").is_err());
        assert!(decode_preimage("0xzz").is_err());
        Ok(())
    }
}
