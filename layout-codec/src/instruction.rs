//! Instruction schemas: discriminator + data fields + ordered account roles.
//!
//! An [`InstructionSchema`] encodes to `[discriminator, data fields...]` plus
//! an `AccountMeta` list, and parses the inverse. Account role order is part
//! of the wire contract: the first supplied account binds to the first
//! declared role, positionally.

use solana_instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;

use crate::{
    error::CodecError,
    field::FieldValue,
    layout::{Record, StructLayout},
};

/// One named position in an instruction's account list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRole {
    name: String,
    is_signer: bool,
    is_writable: bool,
    default_address: Option<Pubkey>,
}

impl AccountRole {
    pub fn new(name: impl Into<String>, is_signer: bool, is_writable: bool) -> Self {
        Self {
            name: name.into(),
            is_signer,
            is_writable,
            default_address: None,
        }
    }

    /// Well-known address used when the caller supplies nothing for this
    /// role. An explicitly supplied value is never second-guessed, even when
    /// it equals the default.
    pub fn with_default(mut self, address: Pubkey) -> Self {
        self.default_address = Some(address);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_signer(&self) -> bool {
        self.is_signer
    }

    pub fn is_writable(&self) -> bool {
        self.is_writable
    }

    pub fn default_address(&self) -> Option<&Pubkey> {
        self.default_address.as_ref()
    }
}

/// Schema for one instruction variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionSchema {
    name: String,
    discriminator: u8,
    data: StructLayout,
    roles: Vec<AccountRole>,
}

/// Name of the synthetic record field holding the discriminator byte.
pub const DISCRIMINATOR_FIELD: &str = "discriminator";

impl InstructionSchema {
    pub fn new(
        name: impl Into<String>,
        discriminator: u8,
        data: StructLayout,
        roles: Vec<AccountRole>,
    ) -> Self {
        Self {
            name: name.into(),
            discriminator,
            data,
            roles,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn discriminator(&self) -> u8 {
        self.discriminator
    }

    pub fn data(&self) -> &StructLayout {
        &self.data
    }

    pub fn roles(&self) -> &[AccountRole] {
        &self.roles
    }

    /// Encoded payload width: 1 discriminator byte + packed data fields.
    pub fn size(&self) -> usize {
        1 + self.data.size()
    }

    /// Encode the instruction payload. The discriminator is always written,
    /// even when the instruction carries no data fields.
    pub fn encode_data(&self, values: &[FieldValue]) -> Result<Vec<u8>, CodecError> {
        let mut out = Vec::with_capacity(self.size());
        out.push(self.discriminator);
        out.extend_from_slice(&self.data.encode(values)?);
        Ok(out)
    }

    /// Build a full [`Instruction`]: resolve declared roles against the
    /// caller-supplied `(role name, address)` pairs, then encode the payload.
    ///
    /// Roles resolve in declared order. A role absent from `accounts` falls
    /// back to its default address; a default-less role with no supplied
    /// value fails with [`CodecError::MissingAccount`].
    pub fn build_instruction(
        &self,
        program_id: &Pubkey,
        accounts: &[(&str, Pubkey)],
        values: &[FieldValue],
    ) -> Result<Instruction, CodecError> {
        let mut metas = Vec::with_capacity(self.roles.len());
        for role in &self.roles {
            let supplied = accounts
                .iter()
                .find(|(name, _)| *name == role.name)
                .map(|(_, address)| *address);
            let address = supplied.or(role.default_address).ok_or_else(|| {
                CodecError::MissingAccount {
                    instruction: self.name.clone(),
                    role: role.name.clone(),
                }
            })?;
            metas.push(if role.is_writable {
                AccountMeta::new(address, role.is_signer)
            } else {
                AccountMeta::new_readonly(address, role.is_signer)
            });
        }
        let data = self.encode_data(values)?;
        Ok(Instruction::new_with_bytes(*program_id, &data, metas))
    }

    /// Parse raw instruction accounts and data back into a
    /// [`ParsedInstruction`].
    ///
    /// Accounts bind to roles strictly in declared order; entries beyond the
    /// declared roles are ignored. The payload decodes as one record whose
    /// first field is the (constant-valued) discriminator.
    pub fn parse(
        &self,
        program_id: &Pubkey,
        accounts: &[AccountMeta],
        data: &[u8],
    ) -> Result<ParsedInstruction, CodecError> {
        if accounts.len() < self.roles.len() {
            return Err(CodecError::InsufficientAccounts {
                instruction: self.name.clone(),
                expected: self.roles.len(),
                actual: accounts.len(),
            });
        }
        if data.len() < self.size() {
            return Err(CodecError::Length {
                expected: self.size(),
                actual: data.len(),
            });
        }

        let mut record = Record::with_field(
            DISCRIMINATOR_FIELD.to_string(),
            FieldValue::UInt(data[0] as u64),
        );
        record.extend(self.data.decode(&data[1..])?);

        let accounts = self
            .roles
            .iter()
            .zip(accounts)
            .map(|(role, meta)| ParsedAccount {
                role: role.name.clone(),
                address: meta.pubkey,
                is_signer: meta.is_signer,
                is_writable: meta.is_writable,
            })
            .collect();

        Ok(ParsedInstruction {
            program_id: *program_id,
            name: self.name.clone(),
            discriminator: self.discriminator,
            record,
            accounts,
        })
    }
}

/// One account of a parsed instruction, bound to its declared role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAccount {
    pub role: String,
    pub address: Pubkey,
    pub is_signer: bool,
    pub is_writable: bool,
}

/// Fully parsed instruction: identity, decoded fields, and bound accounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInstruction {
    pub program_id: Pubkey,
    pub name: String,
    pub discriminator: u8,
    pub record: Record,
    pub accounts: Vec<ParsedAccount>,
}
