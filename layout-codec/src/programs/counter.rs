//! Counter program schema.
//!
//! One 8-byte account (`Counter { count: u64 }`) and three data-less
//! instructions: `Create = 0`, `Increase = 1`, `Decrease = 2`.

use solana_pubkey::{pubkey, Pubkey};

use crate::{
    account::AccountSchema,
    error::CodecError,
    field::FieldDescriptor,
    instruction::{AccountRole, InstructionSchema},
    layout::StructLayout,
    program::ProgramSchema,
    programs::SYSTEM_PROGRAM_ID,
};

pub const COUNTER_PROGRAM_ID: Pubkey = pubkey!("Counter111111111111111111111111111111111111");

/// Build the counter program's schema set.
pub fn counter_program() -> Result<ProgramSchema, CodecError> {
    let counter_account = AccountSchema::new(
        "Counter",
        StructLayout::new(vec![FieldDescriptor::uint("count", 8)])?,
    );

    let create = InstructionSchema::new(
        "Create",
        0,
        StructLayout::empty(),
        vec![
            AccountRole::new("payer", true, true),
            AccountRole::new("counter", true, true),
            AccountRole::new("system_program", false, false).with_default(SYSTEM_PROGRAM_ID),
        ],
    );
    let increase = InstructionSchema::new(
        "Increase",
        1,
        StructLayout::empty(),
        vec![AccountRole::new("counter", false, true)],
    );
    let decrease = InstructionSchema::new(
        "Decrease",
        2,
        StructLayout::empty(),
        vec![AccountRole::new("counter", false, true)],
    );

    ProgramSchema::new(
        "Counter",
        COUNTER_PROGRAM_ID,
        vec![counter_account],
        vec![create, increase, decrease],
    )
}
