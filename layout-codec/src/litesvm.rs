//! LiteSVM-backed account fetcher.
//!
//! Adapts an in-process [`litesvm::LiteSVM`] instance to the
//! [`AccountFetcher`] boundary, so fetch-path code runs against a real
//! account store without network I/O. Accounts LiteSVM does not know about
//! report as absent.

use litesvm::LiteSVM;
use solana_pubkey::Pubkey;

use crate::{
    account::{AccountFetcher, RawAccount},
    error::CodecError,
};

/// [`AccountFetcher`] over a borrowed LiteSVM instance.
pub struct LiteSvmFetcher<'a> {
    svm: &'a LiteSVM,
}

impl<'a> LiteSvmFetcher<'a> {
    pub fn new(svm: &'a LiteSVM) -> Self {
        Self { svm }
    }
}

impl AccountFetcher for LiteSvmFetcher<'_> {
    fn fetch_raw(&self, address: &Pubkey) -> Result<Option<RawAccount>, CodecError> {
        Ok(self.svm.get_account(address).map(|account| RawAccount {
            data: account.data,
            owner: account.owner,
            lamports: account.lamports,
        }))
    }
}
