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

use alloy_primitives::{keccak256, B256};
use alloy_sol_types::SolValue;

use crate::error::{Error, Result};
use crate::payload::{OutputRootPayload, PAYLOAD_LENGTH};
use crate::report::OutputRootReport;
use crate::{Field, VERSION_V0};

/// The preimage of an L2 output root.
///
/// Holds the version word together with the three block level commitments. The output root is
/// the keccak256 hash of the version followed by the ABI encoded commitments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub struct OutputRootProof {
    /// 32-byte version word. Only [VERSION_V0] is in use.
    pub version: B256,

    /// State root of the L2 block
    pub state_root: B256,

    /// Storage root of the withdrawal message passer contract at the L2 block
    pub withdrawal_storage_root: B256,

    /// Hash of the L2 block
    pub latest_block_hash: B256,
}

impl OutputRootProof {
    /// Length of the ABI encoded commitments following the version.
    pub const PAYLOAD_LENGTH: usize = PAYLOAD_LENGTH;

    /// Length of the full keccak256 preimage.
    pub const FULL_INPUT_LENGTH: usize = 32 + PAYLOAD_LENGTH;

    pub const fn from_parts(
        version: B256,
        state_root: B256,
        withdrawal_storage_root: B256,
        latest_block_hash: B256,
    ) -> Self {
        Self {
            version,
            state_root,
            withdrawal_storage_root,
            latest_block_hash,
        }
    }

    /// Constructs a version 0 proof.
    pub const fn v0(state_root: B256, withdrawal_storage_root: B256, latest_block_hash: B256) -> Self {
        Self::from_parts(VERSION_V0, state_root, withdrawal_storage_root, latest_block_hash)
    }

    /// Parses the four words from hex strings, failing on the first malformed field.
    pub fn from_hex(
        version: &str,
        state_root: &str,
        withdrawal_storage_root: &str,
        latest_block_hash: &str,
    ) -> Result<Self> {
        Ok(Self {
            version: Field::Version.parse(version)?,
            state_root: Field::StateRoot.parse(state_root)?,
            withdrawal_storage_root: Field::WithdrawalStorageRoot.parse(withdrawal_storage_root)?,
            latest_block_hash: Field::LatestBlockHash.parse(latest_block_hash)?,
        })
    }

    /// Decodes a proof from its 128 byte keccak256 preimage.
    ///
    /// The version word is taken as is so that preimages of other versions can still be inspected.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::FULL_INPUT_LENGTH {
            return Err(Error::InvalidPreimageLength {
                expected: Self::FULL_INPUT_LENGTH,
                actual: bytes.len(),
            });
        }
        let word = |field: Field| B256::from_slice(&bytes[field.offset()..field.offset() + 32]);
        Ok(Self {
            version: word(Field::Version),
            state_root: word(Field::StateRoot),
            withdrawal_storage_root: word(Field::WithdrawalStorageRoot),
            latest_block_hash: word(Field::LatestBlockHash),
        })
    }

    pub fn word(&self, field: Field) -> B256 {
        match field {
            Field::Version => self.version,
            Field::StateRoot => self.state_root,
            Field::WithdrawalStorageRoot => self.withdrawal_storage_root,
            Field::LatestBlockHash => self.latest_block_hash,
        }
    }

    pub fn is_v0(&self) -> bool {
        self.version == VERSION_V0
    }

    /// ABI encoding of `(stateRoot, messagePasserStorageRoot, latestBlockhash)`.
    pub fn payload(&self) -> Vec<u8> {
        OutputRootPayload {
            stateRoot: self.state_root,
            messagePasserStorageRoot: self.withdrawal_storage_root,
            latestBlockhash: self.latest_block_hash,
        }
        .abi_encode()
    }

    /// The version word followed by the payload. This is what gets hashed.
    pub fn full_input(&self) -> Vec<u8> {
        let mut input = Vec::with_capacity(Self::FULL_INPUT_LENGTH);
        input.extend_from_slice(self.version.as_slice());
        input.extend_from_slice(&self.payload());
        input
    }

    /// The output root.
    pub fn hash(&self) -> B256 {
        keccak256(self.full_input())
    }

    /// Computes the output root together with the intermediate encodings.
    #[tracing::instrument(level = "debug", skip(self), fields(state_root = %self.state_root))]
    pub fn report(&self) -> OutputRootReport {
        let payload = self.payload();
        let full_input = self.full_input();
        let output_root = keccak256(&full_input);
        tracing::debug!(%output_root, "computed output root");

        OutputRootReport {
            version: self.version,
            payload: payload.into(),
            full_input: full_input.into(),
            output_root,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{b256, bytes, Bytes};

    fn test_proof() -> OutputRootProof {
        OutputRootProof::v0(
            B256::left_padding_from(&[0xbe, 0xef]),
            B256::left_padding_from(&[0xba, 0xbe]),
            B256::left_padding_from(&[0xc0, 0xde]),
        )
    }

    #[test]
    fn test_hash() {
        const EXPECTED_HASH: B256 =
            b256!("0c39fb6b07cf6694b13e63e59f7b15255be1c93a4d6d3e0da6c99729647c0d11");

        assert_eq!(test_proof().hash(), EXPECTED_HASH);
    }

    #[test]
    fn test_full_input() {
        const EXPECTED_ENCODING: Bytes = bytes!(
            "0000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000beef000000000000000000000000000000000000000000000000000000000000babe000000000000000000000000000000000000000000000000000000000000c0de"
        );

        let proof = test_proof();
        assert_eq!(proof.full_input().as_slice(), EXPECTED_ENCODING.as_ref());
        assert_eq!(proof.payload().as_slice(), &EXPECTED_ENCODING[32..]);
    }

    #[test]
    fn test_payload_is_plain_concatenation() {
        let proof = test_proof();
        let concatenated = [
            proof.state_root.as_slice(),
            proof.withdrawal_storage_root.as_slice(),
            proof.latest_block_hash.as_slice(),
        ]
        .concat();
        assert_eq!(proof.payload(), concatenated);
    }

    #[test]
    fn test_report_matches_hash() {
        let proof = test_proof();
        let report = proof.report();
        assert_eq!(report.output_root, proof.hash());
        assert_eq!(report.version, VERSION_V0);
        assert_eq!(report.full_input.len(), OutputRootProof::FULL_INPUT_LENGTH);
    }

    #[test]
    fn test_decode() -> anyhow::Result<()> {
        let proof = test_proof();
        assert_eq!(OutputRootProof::decode(&proof.full_input())?, proof);
        Ok(())
    }

    #[test]
    fn test_decode_keeps_unknown_version() -> anyhow::Result<()> {
        let mut preimage = test_proof().full_input();
        preimage[0] = 1;
        let decoded = OutputRootProof::decode(&preimage)?;
        assert!(!decoded.is_v0());
        assert_eq!(decoded.version[0], 1);
        Ok(())
    }

    #[test]
    fn test_decode_wrong_length() {
        assert_eq!(
            OutputRootProof::decode(&[0u8; 96]),
            Err(Error::InvalidPreimageLength {
                expected: 128,
                actual: 96,
            })
        );
    }

    #[test]
    fn test_from_hex_reports_first_bad_field() {
        let zero = "00".repeat(32);
        let err = OutputRootProof::from_hex(&zero, &zero, "0xzz", &zero[1..]).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidHexString {
                field: Field::WithdrawalStorageRoot,
                ..
            }
        ));
    }
}
