use alloy_primitives::{keccak256, B256};
use output_root_core::{Field, OutputRootProof};

/// Builds output root proofs with arbitrary but reproducible contents.
pub struct TestProofBuilder {
    inner: OutputRootProof,
}

impl TestProofBuilder {
    /// Version 0 proof whose words are derived from `seed`, so different seeds give unrelated
    /// words and the same seed always gives the same proof.
    pub fn new(seed: u64) -> Self {
        let word = |field: Field| {
            let mut preimage = seed.to_be_bytes().to_vec();
            preimage.extend_from_slice(field.to_string().as_bytes());
            keccak256(preimage)
        };
        Self {
            inner: OutputRootProof::v0(
                word(Field::StateRoot),
                word(Field::WithdrawalStorageRoot),
                word(Field::LatestBlockHash),
            ),
        }
    }

    pub fn with_version(&mut self, version: B256) {
        self.inner.version = version;
    }

    pub fn with_word(&mut self, field: Field, value: B256) {
        *word_mut(&mut self.inner, field) = value;
    }

    pub fn build(self) -> OutputRootProof {
        self.inner
    }
}

/// Flips a single bit of a word. Bit 0 is the most significant bit of the first byte.
pub fn flip_bit(word: B256, bit: usize) -> B256 {
    assert!(bit < 256, "bit index {bit} out of range for a 32 byte word");
    let mut flipped = word;
    flipped[bit / 8] ^= 0x80u8 >> (bit % 8);
    flipped
}

/// Returns a copy of `proof` with one bit of `field` flipped.
pub fn flip_field_bit(proof: &OutputRootProof, field: Field, bit: usize) -> OutputRootProof {
    let mut mutated = *proof;
    let word = word_mut(&mut mutated, field);
    *word = flip_bit(*word, bit);
    mutated
}

fn word_mut(proof: &mut OutputRootProof, field: Field) -> &mut B256 {
    match field {
        Field::Version => &mut proof.version,
        Field::StateRoot => &mut proof.state_root,
        Field::WithdrawalStorageRoot => &mut proof.withdrawal_storage_root,
        Field::LatestBlockHash => &mut proof.latest_block_hash,
    }
}
