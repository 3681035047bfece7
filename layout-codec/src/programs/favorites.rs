//! Favorites program schema.
//!
//! One 309-byte account (`number` + six 50-byte text fields + PDA `bump`)
//! and a single `Create = 0` instruction carrying everything but the bump.
//! Text lives in fixed byte arrays, zero-padded on the right; any
//! null-termination convention is the caller's, not the codec's.

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

pub const FAVORITES_PROGRAM_ID: Pubkey = pubkey!("Favorites1111111111111111111111111111111111");

/// Width of each text field in the favorites account.
pub const TEXT_WIDTH: usize = 50;

fn data_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::uint("number", 8),
        FieldDescriptor::bytes("color", TEXT_WIDTH),
        FieldDescriptor::bytes("hobby1", TEXT_WIDTH),
        FieldDescriptor::bytes("hobby2", TEXT_WIDTH),
        FieldDescriptor::bytes("hobby3", TEXT_WIDTH),
        FieldDescriptor::bytes("hobby4", TEXT_WIDTH),
        FieldDescriptor::bytes("hobby5", TEXT_WIDTH),
    ]
}

/// Build the favorites program's schema set.
pub fn favorites_program() -> Result<ProgramSchema, CodecError> {
    let mut account_fields = data_fields();
    account_fields.push(FieldDescriptor::uint("bump", 1));
    let favorites_account = AccountSchema::new("Favorites", StructLayout::new(account_fields)?);

    let create = InstructionSchema::new(
        "Create",
        0,
        StructLayout::new(data_fields())?,
        vec![
            AccountRole::new("user", true, true),
            AccountRole::new("favorites", false, true),
            AccountRole::new("system_program", false, false).with_default(SYSTEM_PROGRAM_ID),
        ],
    );

    ProgramSchema::new(
        "Favorites",
        FAVORITES_PROGRAM_ID,
        vec![favorites_account],
        vec![create],
    )
}
