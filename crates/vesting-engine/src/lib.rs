//! Token vesting accounting engine.
//!
//! An employer locks tokens into a per-grant treasury and assigns
//! beneficiaries schedules that release funds linearly after a cliff. The
//! engine is a synchronous state machine over two injected capabilities: a
//! [`RecordStore`] holding fixed-size records at derived addresses, and a
//! [`TokenCustody`] collaborator that physically moves balances. Time is
//! always a caller-supplied parameter; nothing here reads a clock, blocks,
//! or retries.

pub mod address;
pub mod constants;
pub mod custody;
pub mod error;
pub mod instructions;
pub mod state;
pub mod store;
pub mod utils;

pub use address::{
    beneficiary_account_address, derive_address, treasury_address, vesting_account_address,
    Address,
};
pub use constants::*;
pub use custody::{MemoryTokenCustody, TokenCustody};
pub use error::{Result, VestingError};
pub use instructions::*;
pub use state::*;
pub use store::{MemoryRecordStore, RecordStore};

use crate::store::read_record;

/// Facade binding the injected capabilities to the engine's operations.
///
/// Every method reads the records it needs, validates, and writes back
/// within the single call; the host is expected to serialize operations
/// that touch the same records.
pub struct VestingEngine<S: RecordStore, C: TokenCustody> {
    store: S,
    custody: C,
}

impl<S: RecordStore, C: TokenCustody> VestingEngine<S, C> {
    pub fn new(store: S, custody: C) -> Self {
        Self { store, custody }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn custody(&self) -> &C {
        &self.custody
    }

    pub fn custody_mut(&mut self) -> &mut C {
        &mut self.custody
    }

    /// Create an employer grant and provision its empty treasury.
    pub fn create_vesting_account(
        &mut self,
        admin: Address,
        id: u64,
        company_name: &str,
        mint: Address,
    ) -> Result<VestingAccountCreated> {
        instructions::create_vesting_account::create_vesting_account(
            &mut self.store,
            &mut self.custody,
            admin,
            id,
            company_name,
            mint,
        )
    }

    /// Credit a grant's treasury from a funder holding.
    pub fn transfer_to_treasury(
        &mut self,
        funder: Address,
        funder_holding: Address,
        vesting_account: Address,
        amount: u64,
    ) -> Result<TokensTransferredToTreasury> {
        instructions::transfer_to_treasury::transfer_to_treasury(
            &mut self.store,
            &mut self.custody,
            funder,
            funder_holding,
            vesting_account,
            amount,
        )
    }

    /// Create a beneficiary schedule backed by the grant's treasury.
    #[allow(clippy::too_many_arguments)]
    pub fn initialize_vesting_schedule(
        &mut self,
        admin: Address,
        vesting_account: Address,
        beneficiary: Address,
        start_time: i64,
        end_time: i64,
        total_amount: u64,
        cliff_time: i64,
    ) -> Result<VestingScheduleInitialized> {
        instructions::initialize_vesting_schedule::initialize_vesting_schedule(
            &mut self.store,
            &mut self.custody,
            admin,
            vesting_account,
            beneficiary,
            start_time,
            end_time,
            total_amount,
            cliff_time,
        )
    }

    /// Claim everything vested and unclaimed at `now`.
    pub fn claim_vested_tokens(
        &mut self,
        beneficiary: Address,
        vesting_account: Address,
        beneficiary_holding: Address,
        now: i64,
    ) -> Result<TokensClaimed> {
        instructions::claim_vested_tokens::claim_vested_tokens(
            &mut self.store,
            &mut self.custody,
            beneficiary,
            vesting_account,
            beneficiary_holding,
            now,
        )
    }

    /// Freeze a schedule's accrual at `now`.
    pub fn revoke_beneficiary_account(
        &mut self,
        admin: Address,
        vesting_account: Address,
        beneficiary: Address,
        now: i64,
    ) -> Result<BeneficiaryRevoked> {
        instructions::revoke_beneficiary_account::revoke_beneficiary_account(
            &mut self.store,
            admin,
            vesting_account,
            beneficiary,
            now,
        )
    }

    /// Reassign a grant's administrative identity.
    pub fn change_admin(
        &mut self,
        admin: Address,
        vesting_account: Address,
        new_admin: Address,
    ) -> Result<AdminChanged> {
        instructions::change_admin::change_admin(
            &mut self.store,
            admin,
            vesting_account,
            new_admin,
        )
    }

    /// Read-only quote of a schedule's position at `now`.
    pub fn estimate_claimable(
        &self,
        vesting_account: Address,
        beneficiary: Address,
        now: i64,
    ) -> Result<VestingQuote> {
        instructions::estimate_claimable::estimate_claimable(
            &self.store,
            vesting_account,
            beneficiary,
            now,
        )
    }

    /// Decode the grant record at `vesting_account`.
    pub fn vesting_account(&self, vesting_account: &Address) -> Result<VestingAccount> {
        read_record(&self.store, vesting_account)
    }

    /// Decode the schedule record for (grant, beneficiary).
    pub fn beneficiary_account(
        &self,
        vesting_account: &Address,
        beneficiary: &Address,
    ) -> Result<BeneficiaryAccount> {
        let address = beneficiary_account_address(vesting_account, beneficiary);
        read_record(&self.store, &address)
    }

    /// Current treasury balance backing a grant.
    pub fn treasury_balance(&self, vesting_account: &Address) -> Result<u64> {
        let grant: VestingAccount = read_record(&self.store, vesting_account)?;
        self.custody.balance_of(&grant.treasury)
    }
}

#[cfg(test)]
mod vesting_test_helper;
