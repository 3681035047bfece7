//! Shared helpers for layout-codec integration tests.
//!
//! Provides deterministic addresses, encoded account fixtures for the known
//! program schemas, and two [`AccountFetcher`] implementations: an in-memory
//! map for byte-exact control and a fetcher that always fails, for the
//! collaborator-error path.

use std::collections::HashMap;

use layout_codec::{AccountFetcher, CodecError, RawAccount};
use solana_pubkey::Pubkey;

/// Deterministic test address derived from a single seed byte.
pub fn test_address(seed: u8) -> Pubkey {
    Pubkey::new_from_array([seed; 32])
}

/// Encoded `Counter` account data for a given count.
pub fn counter_account_bytes(count: u64) -> Vec<u8> {
    count.to_le_bytes().to_vec()
}

/// In-memory account store implementing the fetch boundary.
#[derive(Default)]
pub struct InMemoryFetcher {
    accounts: HashMap<Pubkey, RawAccount>,
}

impl InMemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an account with the given data, owned by `owner`.
    pub fn insert(&mut self, address: Pubkey, owner: Pubkey, data: Vec<u8>) {
        self.accounts.insert(
            address,
            RawAccount {
                data,
                owner,
                lamports: 1_000_000,
            },
        );
    }
}

impl AccountFetcher for InMemoryFetcher {
    fn fetch_raw(&self, address: &Pubkey) -> Result<Option<RawAccount>, CodecError> {
        Ok(self.accounts.get(address).cloned())
    }
}

/// Fetcher whose every call fails, simulating a collaborator outage.
pub struct FailingFetcher;

impl AccountFetcher for FailingFetcher {
    fn fetch_raw(&self, _address: &Pubkey) -> Result<Option<RawAccount>, CodecError> {
        Err(CodecError::Fetch("connection refused".to_string()))
    }
}
