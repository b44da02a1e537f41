use std::cell::Cell;

use crate::address::{derive_address, Address};
use crate::custody::{MemoryTokenCustody, TokenCustody};
use crate::store::MemoryRecordStore;
use crate::VestingEngine;

/// Default schedule used across the operation tests:
/// linear ramp over [0, 1000] with the cliff at 400.
pub const START_TIME: i64 = 0;
pub const CLIFF_TIME: i64 = 400;
pub const END_TIME: i64 = 1000;
pub const TOTAL_AMOUNT: u64 = 10_000_000_000;

/// Funder supply minted at setup; large enough for every scenario.
pub const FUNDER_SUPPLY: u64 = 1_000_000_000_000;

pub struct VestingTestEnvironment {
    pub engine: VestingEngine<MemoryRecordStore, MemoryTokenCustody>,
    pub admin: Address,
    pub mint: Address,
    pub funder_holding: Address,
}

pub fn setup_vesting_test() -> VestingTestEnvironment {
    let admin = test_address("admin");
    let mint = test_address("mint");
    let funder_holding = test_address("funder_holding");

    let mut custody = MemoryTokenCustody::new();
    custody.create_holding(funder_holding, mint).unwrap();
    custody.mint_to(&funder_holding, FUNDER_SUPPLY).unwrap();

    VestingTestEnvironment {
        engine: VestingEngine::new(MemoryRecordStore::new(), custody),
        admin,
        mint,
        funder_holding,
    }
}

/// Deterministic identity for a test label.
pub fn test_address(label: &str) -> Address {
    derive_address(&[b"test_identity", label.as_bytes()])
}

thread_local! {
    static VESTING_ACCOUNT_ID_COUNTER: Cell<u64> = Cell::new(1);
}

pub fn generate_vesting_account_id() -> u64 {
    VESTING_ACCOUNT_ID_COUNTER.with(|counter| {
        let id = counter.get();
        counter.set(id + 1);
        id
    })
}

impl VestingTestEnvironment {
    /// Create a grant and fund its treasury in one step.
    pub fn create_funded_grant(&mut self, company_name: &str, funding: u64) -> Address {
        let created = self
            .engine
            .create_vesting_account(
                self.admin,
                generate_vesting_account_id(),
                company_name,
                self.mint,
            )
            .unwrap();
        if funding > 0 {
            self.engine
                .transfer_to_treasury(
                    self.admin,
                    self.funder_holding,
                    created.vesting_account,
                    funding,
                )
                .unwrap();
        }
        created.vesting_account
    }

    /// Beneficiary identity plus an empty holding of the grant mint.
    pub fn new_beneficiary(&mut self, label: &str) -> (Address, Address) {
        let beneficiary = test_address(label);
        let holding = derive_address(&[b"test_holding", label.as_bytes()]);
        self.engine
            .custody_mut()
            .create_holding(holding, self.mint)
            .unwrap();
        (beneficiary, holding)
    }

    /// Schedule with the default ramp for `beneficiary` under `grant`.
    pub fn default_schedule(&mut self, grant: Address, beneficiary: Address) {
        self.engine
            .initialize_vesting_schedule(
                self.admin,
                grant,
                beneficiary,
                START_TIME,
                END_TIME,
                TOTAL_AMOUNT,
                CLIFF_TIME,
            )
            .unwrap();
    }
}
