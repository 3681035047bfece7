//! Account schemas, fetch semantics, and the maybe-account model.
//!
//! Provides:
//! - [`AccountFetcher`] -- the external RPC boundary (raw bytes in, no
//!   connection management here)
//! - [`AccountSchema`] -- a named [`StructLayout`] with `fetch_one` /
//!   `fetch_many` and their `_required` variants
//! - [`MaybeAccount`] -- distinguishes "exists with decoded data" from
//!   "legitimately absent" from "present but undecodable"

use solana_pubkey::Pubkey;

use crate::{
    error::CodecError,
    layout::{Record, StructLayout},
};

/// Raw account bytes plus on-chain metadata, as returned by a fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAccount {
    pub data: Vec<u8>,
    pub owner: Pubkey,
    pub lamports: u64,
}

/// External collaborator that resolves addresses to raw account bytes.
///
/// Implementations own all I/O policy (transport, retries, batching).
/// `fetch_raw_many` may issue one batched round-trip or fan out to
/// independent calls; either way the output order matches the input order.
pub trait AccountFetcher {
    /// Fetch one account; `None` means the account does not exist.
    fn fetch_raw(&self, address: &Pubkey) -> Result<Option<RawAccount>, CodecError>;

    /// Fetch many accounts, preserving input order.
    fn fetch_raw_many(
        &self,
        addresses: &[Pubkey],
    ) -> Result<Vec<Option<RawAccount>>, CodecError> {
        addresses.iter().map(|a| self.fetch_raw(a)).collect()
    }
}

/// Decoded account confirmed to exist on chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedAccount {
    pub address: Pubkey,
    pub record: Record,
    pub owner: Pubkey,
    pub lamports: u64,
}

/// Fetch result that has not yet been asserted to exist.
#[derive(Debug)]
pub enum MaybeAccount {
    /// Account exists and decoded cleanly.
    Exists(DecodedAccount),
    /// Account does not exist on chain. Not an error.
    Absent { address: Pubkey },
    /// Account exists but its data did not decode (batch fetches isolate
    /// this per slot instead of failing the whole batch).
    Invalid {
        address: Pubkey,
        error: CodecError,
    },
}

impl MaybeAccount {
    pub fn exists(&self) -> bool {
        matches!(self, MaybeAccount::Exists(_))
    }

    /// Assert existence, converting absence into [`CodecError::NotFound`]
    /// and a decode failure into its underlying error.
    pub fn into_existing(self) -> Result<DecodedAccount, CodecError> {
        match self {
            MaybeAccount::Exists(account) => Ok(account),
            MaybeAccount::Absent { address } => Err(CodecError::NotFound { address }),
            MaybeAccount::Invalid { error, .. } => Err(error),
        }
    }
}

/// A named account layout belonging to one program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSchema {
    name: String,
    layout: StructLayout,
}

impl AccountSchema {
    pub fn new(name: impl Into<String>, layout: StructLayout) -> Self {
        Self {
            name: name.into(),
            layout,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn layout(&self) -> &StructLayout {
        &self.layout
    }

    /// Decode a raw account into a [`DecodedAccount`].
    pub fn decode(
        &self,
        address: &Pubkey,
        raw: &RawAccount,
    ) -> Result<DecodedAccount, CodecError> {
        Ok(DecodedAccount {
            address: *address,
            record: self.layout.decode(&raw.data)?,
            owner: raw.owner,
            lamports: raw.lamports,
        })
    }

    /// Fetch and decode one account.
    ///
    /// A legitimately absent account returns [`MaybeAccount::Absent`], never
    /// an error; decode failures on present data surface to the caller.
    pub fn fetch_one(
        &self,
        fetcher: &impl AccountFetcher,
        address: &Pubkey,
    ) -> Result<MaybeAccount, CodecError> {
        match fetcher.fetch_raw(address)? {
            Some(raw) => Ok(MaybeAccount::Exists(self.decode(address, &raw)?)),
            None => Ok(MaybeAccount::Absent { address: *address }),
        }
    }

    /// Fetch one account that call sites require to be initialized.
    pub fn fetch_one_required(
        &self,
        fetcher: &impl AccountFetcher,
        address: &Pubkey,
    ) -> Result<DecodedAccount, CodecError> {
        self.fetch_one(fetcher, address)?.into_existing()
    }

    /// Fetch many accounts, preserving input order.
    ///
    /// Best-effort enumeration: each slot decodes independently, so one
    /// absent or undecodable entry marks only its own slot and never sinks
    /// the batch.
    pub fn fetch_many(
        &self,
        fetcher: &impl AccountFetcher,
        addresses: &[Pubkey],
    ) -> Result<Vec<MaybeAccount>, CodecError> {
        let raws = fetcher.fetch_raw_many(addresses)?;
        Ok(addresses
            .iter()
            .zip(raws)
            .map(|(address, raw)| match raw {
                Some(raw) => match self.decode(address, &raw) {
                    Ok(account) => MaybeAccount::Exists(account),
                    Err(error) => MaybeAccount::Invalid {
                        address: *address,
                        error,
                    },
                },
                None => MaybeAccount::Absent { address: *address },
            })
            .collect())
    }

    /// Fail-fast batch variant: any absent or undecodable slot fails the
    /// whole fetch.
    pub fn fetch_many_required(
        &self,
        fetcher: &impl AccountFetcher,
        addresses: &[Pubkey],
    ) -> Result<Vec<DecodedAccount>, CodecError> {
        self.fetch_many(fetcher, addresses)?
            .into_iter()
            .map(MaybeAccount::into_existing)
            .collect()
    }
}
