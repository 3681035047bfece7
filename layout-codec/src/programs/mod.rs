//! Declarative schemas for known programs.
//!
//! Each submodule builds one [`crate::program::ProgramSchema`] from static
//! configuration: account layouts, instruction data fields, discriminators
//! assigned in declaration order, and account roles with their well-known
//! defaults.

use solana_pubkey::{pubkey, Pubkey};

pub mod counter;
pub mod favorites;

pub use counter::counter_program;
pub use favorites::favorites_program;

/// System program address, the usual default for `system_program` roles.
pub const SYSTEM_PROGRAM_ID: Pubkey = pubkey!("11111111111111111111111111111111");
