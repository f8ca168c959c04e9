use alloy_sol_types::sol;

sol! {
    /// The three words following the version in an output root preimage, ABI encoded as
    /// `(bytes32, bytes32, bytes32)`.
    #[derive(Debug, PartialEq, Eq)]
    struct OutputRootPayload {
        bytes32 stateRoot;
        // storage root of the L2ToL1MessagePasser predeploy
        bytes32 messagePasserStorageRoot;
        bytes32 latestBlockhash;
    }
}

/// Encoded length of [OutputRootPayload]. Every member is a static word so no offsets are written.
pub const PAYLOAD_LENGTH: usize = 96;
