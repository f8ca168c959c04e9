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

//! Computation of the L2 output root committed to by rollup dispute games.
//!
//! An output root is `keccak256(version ‖ abi.encode(stateRoot, messagePasserStorageRoot, latestBlockhash))`
//! where every component is a 32-byte word.

mod error;
pub mod field;
pub mod payload;
pub mod presets;
mod proof;
mod report;

pub use error::{Error, Result};
pub use field::{to_hex, Field};
pub use presets::Preset;
pub use proof::OutputRootProof;
pub use report::{compute_output_root, OutputRootReport};

/// The only output root version currently defined, as a 32-byte word.
pub const VERSION_V0: alloy_primitives::B256 = alloy_primitives::B256::ZERO;
