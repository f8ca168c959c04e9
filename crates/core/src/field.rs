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

//! Parsing and rendering of the 32-byte words that make up an output root.

use std::fmt;

use alloy_primitives::B256;

use crate::error::{Error, Result};

/// Number of hex digits in a 32-byte word, excluding any `0x` prefix.
pub const WORD_HEX_DIGITS: usize = 64;

/// One of the four words hashed into an output root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Version,
    StateRoot,
    WithdrawalStorageRoot,
    LatestBlockHash,
}

impl Field {
    /// All fields in preimage order.
    pub const ALL: [Field; 4] = [
        Field::Version,
        Field::StateRoot,
        Field::WithdrawalStorageRoot,
        Field::LatestBlockHash,
    ];

    /// Byte offset of this field within the 128 byte preimage.
    pub const fn offset(self) -> usize {
        match self {
            Field::Version => 0,
            Field::StateRoot => 32,
            Field::WithdrawalStorageRoot => 64,
            Field::LatestBlockHash => 96,
        }
    }

    /// Parse a hex encoded 32-byte word for this field.
    ///
    /// The `0x` prefix is optional and digits may be either case. Input containing anything other
    /// than hex digits is an [Error::InvalidHexString]; well formed hex of the wrong size
    /// (including an odd number of digits) is an [Error::InvalidInputLength].
    pub fn parse(self, input: &str) -> Result<B256> {
        let digits = strip_hex_prefix(input);

        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidHexString {
                field: self,
                value: input.to_owned(),
            });
        }
        if digits.len() != WORD_HEX_DIGITS {
            return Err(Error::InvalidInputLength {
                field: self,
                expected: WORD_HEX_DIGITS,
                actual: digits.len(),
            });
        }

        let mut word = B256::ZERO;
        hex::decode_to_slice(digits, &mut word.0).map_err(|_| Error::InvalidHexString {
            field: self,
            value: input.to_owned(),
        })?;
        Ok(word)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::Version => "version byte",
            Field::StateRoot => "state root",
            Field::WithdrawalStorageRoot => "withdrawal storage root",
            Field::LatestBlockHash => "latest block hash",
        };
        f.write_str(label)
    }
}

/// Render bytes as a lowercase hex string with exactly one `0x` prefix.
pub fn to_hex(bytes: impl AsRef<[u8]>) -> String {
    format!("0x{}", hex::encode(bytes))
}

fn strip_hex_prefix(input: &str) -> &str {
    input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input)
}
