//! Program identity: one address plus its full account and instruction
//! schema set, with discriminator dispatch.
//!
//! Construction is the registration step: duplicate discriminators are
//! rejected here, fatally, so dispatch never has to break ties. Dispatch
//! itself is a stateless linear scan over the handful of declared variants,
//! comparing byte 0 of the payload by exact equality.

use solana_instruction::AccountMeta;
use solana_pubkey::Pubkey;

use crate::{
    account::AccountSchema,
    error::CodecError,
    instruction::{InstructionSchema, ParsedInstruction},
};

/// A program's stable address plus every account and instruction layout it
/// defines. Layouts do not span programs.
#[derive(Debug, Clone)]
pub struct ProgramSchema {
    name: String,
    id: Pubkey,
    accounts: Vec<AccountSchema>,
    instructions: Vec<InstructionSchema>,
}

impl ProgramSchema {
    /// Register a program's schema set.
    ///
    /// Fails with [`CodecError::DuplicateDiscriminator`] when two
    /// instructions claim the same discriminator. This runs once, before any
    /// instruction flows through the dispatcher.
    pub fn new(
        name: impl Into<String>,
        id: Pubkey,
        accounts: Vec<AccountSchema>,
        instructions: Vec<InstructionSchema>,
    ) -> Result<Self, CodecError> {
        let name = name.into();
        for (i, instruction) in instructions.iter().enumerate() {
            if instructions[..i]
                .iter()
                .any(|other| other.discriminator() == instruction.discriminator())
            {
                return Err(CodecError::DuplicateDiscriminator {
                    program: name.clone(),
                    discriminator: instruction.discriminator(),
                });
            }
        }
        Ok(Self {
            name,
            id,
            accounts,
            instructions,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> &Pubkey {
        &self.id
    }

    pub fn accounts(&self) -> &[AccountSchema] {
        &self.accounts
    }

    pub fn instructions(&self) -> &[InstructionSchema] {
        &self.instructions
    }

    /// Look up an account schema by name.
    pub fn account(&self, name: &str) -> Option<&AccountSchema> {
        self.accounts.iter().find(|a| a.name() == name)
    }

    /// Look up an instruction schema by name.
    pub fn instruction(&self, name: &str) -> Option<&InstructionSchema> {
        self.instructions.iter().find(|i| i.name() == name)
    }

    /// Classify raw instruction bytes by discriminator, without decoding the
    /// payload.
    ///
    /// Inspects only byte 0. No match fails with
    /// [`CodecError::UnknownInstruction`] naming this program and the
    /// offending byte.
    pub fn identify(&self, data: &[u8]) -> Result<&InstructionSchema, CodecError> {
        let discriminator = *data.first().ok_or(CodecError::Length {
            expected: 1,
            actual: 0,
        })?;
        self.instructions
            .iter()
            .find(|i| i.discriminator() == discriminator)
            .ok_or_else(|| CodecError::UnknownInstruction {
                program: self.name.clone(),
                discriminator,
            })
    }

    /// Identify, then fully parse raw instruction accounts and data.
    pub fn parse_instruction(
        &self,
        accounts: &[AccountMeta],
        data: &[u8],
    ) -> Result<ParsedInstruction, CodecError> {
        self.identify(data)?.parse(&self.id, accounts, data)
    }
}
