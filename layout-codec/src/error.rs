//! Error taxonomy for the codec layer.
//!
//! Schema-construction failures ([`CodecError::Schema`],
//! [`CodecError::DuplicateDiscriminator`]) are fatal at registration time;
//! everything else surfaces at encode/decode/fetch call sites and is never
//! silently absorbed.

use solana_pubkey::Pubkey;
use thiserror::Error;

/// All failures the codec layer can produce.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Supplied buffer is shorter than the fixed layout requires.
    #[error("buffer too short: need {expected} bytes, got {actual}")]
    Length { expected: usize, actual: usize },

    /// Integer value does not fit the declared field width.
    #[error("value {value} does not fit {width}-byte unsigned field `{field}`")]
    Range {
        field: String,
        width: usize,
        value: u64,
    },

    /// Byte input longer than the declared field width. Oversized input is
    /// rejected rather than truncated: truncating account data would corrupt
    /// state with no recovery path for the caller.
    #[error("{len} bytes overflow {width}-byte field `{field}`")]
    Overflow {
        field: String,
        width: usize,
        len: usize,
    },

    /// Instruction build is missing a required account role with no default.
    #[error("instruction `{instruction}` is missing required account `{role}`")]
    MissingAccount { instruction: String, role: String },

    /// Instruction parse received fewer accounts than the schema declares.
    #[error("instruction `{instruction}` declares {expected} accounts, got {actual}")]
    InsufficientAccounts {
        instruction: String,
        expected: usize,
        actual: usize,
    },

    /// Asserted-required account does not exist on chain.
    #[error("account {address} not found")]
    NotFound { address: Pubkey },

    /// Discriminator byte matches no registered instruction.
    #[error("unknown instruction for program `{program}`: discriminator {discriminator:#04x}")]
    UnknownInstruction { program: String, discriminator: u8 },

    /// Two instructions registered the same discriminator.
    #[error("duplicate discriminator {discriminator:#04x} in program `{program}`")]
    DuplicateDiscriminator { program: String, discriminator: u8 },

    /// Malformed schema (zero-width field, unsupported integer width,
    /// value/field arity or type mismatch).
    #[error("invalid schema: {0}")]
    Schema(String),

    /// Failure reported by the account fetch collaborator.
    #[error("account fetch failed: {0}")]
    Fetch(String),
}
