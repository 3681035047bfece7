//! Fixed-layout account and instruction codec for Solana program clients.
//!
//! Maps strongly-typed, fixed-layout records -- on-chain account state and
//! program instructions -- to and from flat byte buffers, and dispatches raw
//! instruction bytes to the right schema by their leading discriminator byte.
//!
//! Provides:
//! - [`field`] / [`layout`] -- declarative field descriptors composed into
//!   packed struct layouts with a generic encode/decode pair
//! - [`account`] -- account schemas with maybe-account fetch semantics over
//!   an [`account::AccountFetcher`] collaborator
//! - [`instruction`] -- discriminator + data fields + ordered account roles;
//!   builds and parses full instructions
//! - [`program`] -- per-program schema registration and discriminator
//!   dispatch
//! - [`programs`] -- schemas for known programs
//! - [`formatter`] / [`snapshot`] -- human-readable and JSON renderings of
//!   parsed instructions
//!
//! The codec itself is pure and stateless per call; all I/O lives behind the
//! fetcher trait. Wire format: little-endian unsigned integers, raw byte
//! arrays zero-padded on the right, one discriminator byte prefixing every
//! instruction payload.

pub mod account;
pub mod error;
pub mod field;
pub mod instruction;
pub mod layout;
pub mod program;
pub mod programs;
pub mod snapshot;

#[cfg(not(target_os = "solana"))]
pub mod formatter;

#[cfg(feature = "litesvm")]
pub mod litesvm;

pub use account::{AccountFetcher, AccountSchema, DecodedAccount, MaybeAccount, RawAccount};
pub use error::CodecError;
pub use field::{FieldDescriptor, FieldKind, FieldValue};
pub use instruction::{
    AccountRole, InstructionSchema, ParsedAccount, ParsedInstruction, DISCRIMINATOR_FIELD,
};
pub use layout::{Record, StructLayout};
pub use program::ProgramSchema;

#[cfg(feature = "litesvm")]
pub use crate::litesvm::LiteSvmFetcher;
