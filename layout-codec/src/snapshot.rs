//! JSON-serializable snapshots of parsed instructions.
//!
//! Addresses and field values are pre-rendered to strings so snapshots stay
//! stable and human-diffable in test output.

use serde::Serialize;

use crate::instruction::ParsedInstruction;

/// JSON-serializable snapshot of a parsed instruction.
#[derive(Debug, Serialize)]
pub struct InstructionSnapshot {
    pub program_id: String,
    pub instruction: String,
    pub discriminator: u8,
    pub accounts: Vec<AccountSnapshot>,
    pub fields: Vec<FieldSnapshot>,
}

/// JSON-serializable snapshot of one account bound to its role.
#[derive(Debug, Serialize)]
pub struct AccountSnapshot {
    pub role: String,
    pub address: String,
    pub is_signer: bool,
    pub is_writable: bool,
}

/// JSON-serializable snapshot of one decoded field.
#[derive(Debug, Serialize)]
pub struct FieldSnapshot {
    pub name: String,
    pub value: String,
}

/// Convert a [`ParsedInstruction`] into its snapshot form.
pub fn instruction_snapshot(parsed: &ParsedInstruction) -> InstructionSnapshot {
    InstructionSnapshot {
        program_id: parsed.program_id.to_string(),
        instruction: parsed.name.clone(),
        discriminator: parsed.discriminator,
        accounts: parsed
            .accounts
            .iter()
            .map(|a| AccountSnapshot {
                role: a.role.clone(),
                address: a.address.to_string(),
                is_signer: a.is_signer,
                is_writable: a.is_writable,
            })
            .collect(),
        fields: parsed
            .record
            .fields()
            .iter()
            .map(|(name, value)| FieldSnapshot {
                name: name.clone(),
                value: value.to_string(),
            })
            .collect(),
    }
}
