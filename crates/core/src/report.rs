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

use std::fmt;

use alloy_primitives::{Bytes, B256};

use crate::{to_hex, OutputRootProof, Result};

/// Width of the label column in the text rendering of a report.
const LABEL_WIDTH: usize = 22;

/// The output root of a proof along with every intermediate value that went into it.
///
/// `Display` renders the four line diagnostic format:
///
/// ```text
/// Version Byte:          0x00..00
/// Payload (3 fields):    0x...
/// Full Input to Keccak:  0x...
/// Output Root:           0x...
/// ```
///
/// With serde every value is a `0x` prefixed hex string.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OutputRootReport {
    pub version: B256,
    pub payload: Bytes,
    pub full_input: Bytes,
    pub output_root: B256,
}

impl fmt::Display for OutputRootReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<LABEL_WIDTH$} {}", "Version Byte:", to_hex(self.version))?;
        writeln!(f, "{:<LABEL_WIDTH$} {}", "Payload (3 fields):", to_hex(&self.payload))?;
        writeln!(f, "{:<LABEL_WIDTH$} {}", "Full Input to Keccak:", to_hex(&self.full_input))?;
        write!(f, "{:<LABEL_WIDTH$} {}", "Output Root:", to_hex(self.output_root))
    }
}

/// Computes the output root report for four hex encoded words.
///
/// This is the single entry point the CLI and presets go through.
#[tracing::instrument(level = "debug")]
pub fn compute_output_root(
    version: &str,
    state_root: &str,
    withdrawal_storage_root: &str,
    latest_block_hash: &str,
) -> Result<OutputRootReport> {
    let proof =
        OutputRootProof::from_hex(version, state_root, withdrawal_storage_root, latest_block_hash)?;
    Ok(proof.report())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_layout() {
        let report = OutputRootProof::default().report();
        let rendered = report.to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], format!("Version Byte:          0x{}", "00".repeat(32)));
        assert_eq!(lines[1], format!("Payload (3 fields):    0x{}", "00".repeat(96)));
        assert_eq!(lines[2], format!("Full Input to Keccak:  0x{}", "00".repeat(128)));
        assert_eq!(
            lines[3],
            "Output Root:           0x012893657d8eb2efad4de0a91bcd0e39ad9837745dec3ea923737ea803fc8e3d"
        );
    }

    #[test]
    fn values_start_in_the_same_column() {
        let rendered = OutputRootProof::default().report().to_string();
        for line in rendered.lines() {
            assert_eq!(line.find("0x"), Some(LABEL_WIDTH + 1), "misaligned: {line}");
        }
    }
}
