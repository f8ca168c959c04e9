// Copyright 2025 RISC Zero, Inc.
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

//! Built-in output root inputs used when setting up and checking dispute games.

use crate::error::{Error, Result};
use crate::{compute_output_root, OutputRootProof, OutputRootReport};

const ZERO_VERSION: &str = "0x0000000000000000000000000000000000000000000000000000000000000000";

/// A named set of hex encoded output root inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    pub state_root: &'static str,
    pub withdrawal_storage_root: &'static str,
    pub latest_block_hash: &'static str,
}

pub const STARTING_OUTPUT_ROOT: Preset = Preset {
    name: "starting-output-root",
    description: "starting output root of the dispute game",
    version: ZERO_VERSION,
    state_root: "0x40655b0436dfae813e93a7ec12c004b9e13cee2ceae13a844b1cfb8cedd5a8df",
    withdrawal_storage_root: "0xd1a78ebd597d711637f941bae14fd04357b5b57a82f64137e09bf484a25b3805",
    latest_block_hash: "0xf9f0a4dc5a0186365a0c4404bcab4d73b38aa2a46484375716a2e4fdcc4eaa30",
};

pub const ROOT_CLAIM: Preset = Preset {
    name: "root-claim",
    description: "root claim of the dispute game",
    version: ZERO_VERSION,
    state_root: "0x9b6e4ad484ec7c79db5954a4d59a8d0bdd98eb33a3a0ba07f5bd401a4f7f5a2b",
    withdrawal_storage_root: "0xb8b31ef2ac71ab2275dc158d5ba44aa8dd740daeb47d9fc9ea34e46cb405d38a",
    latest_block_hash: "0xed391e70f841fe15006abb5d619572702269641cde267d5c9f035d1eed678adc",
};

pub const OPTIMISM_MAINNET_121524816: Preset = Preset {
    name: "optimism-mainnet-121524816",
    description: "OP mainnet output at L2 block 121524816",
    version: ZERO_VERSION,
    state_root: "0x8cd5c86564142d3020554cffa6b3591a6a8d2f7b8ec2d263863f29e0ab6de222",
    withdrawal_storage_root: "0x8ebc68365e414b7382e25ceed949cd8cbdf68c69e760c84d2c38ffe009452f54",
    latest_block_hash: "0xc72e9ee468bcf8d5832cb48eec27270e1675d25a32bd7e90b299bcffd730f3e2",
};

pub const PRESETS: [Preset; 3] = [STARTING_OUTPUT_ROOT, ROOT_CLAIM, OPTIMISM_MAINNET_121524816];

/// Looks up a built-in preset by name.
pub fn find(name: &str) -> Result<&'static Preset> {
    PRESETS
        .iter()
        .find(|preset| preset.name == name)
        .ok_or_else(|| Error::UnknownPreset(name.to_owned()))
}

impl Preset {
    pub fn proof(&self) -> Result<OutputRootProof> {
        OutputRootProof::from_hex(
            self.version,
            self.state_root,
            self.withdrawal_storage_root,
            self.latest_block_hash,
        )
    }

    #[tracing::instrument(level = "debug", skip(self), fields(preset = self.name))]
    pub fn report(&self) -> Result<OutputRootReport> {
        compute_output_root(
            self.version,
            self.state_root,
            self.withdrawal_storage_root,
            self.latest_block_hash,
        )
    }
}
