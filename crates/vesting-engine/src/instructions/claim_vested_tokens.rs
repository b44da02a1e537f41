use tracing::info;

use crate::address::{beneficiary_account_address, Address};
use crate::custody::TokenCustody;
use crate::error::{require, Result, VestingError};
use crate::state::{BeneficiaryAccount, VestingAccount};
use crate::store::{read_record, write_record, RecordStore};
use crate::utils::vesting_math::claimable_amount;

/// Transfer everything claimable at `now` to the beneficiary's holding.
///
/// The schedule is addressed by (grant, caller), so only the schedule's
/// own beneficiary can reach it; the equality guards below mirror that
/// derivation on the record contents.
pub fn claim_vested_tokens(
    store: &mut dyn RecordStore,
    custody: &mut dyn TokenCustody,
    beneficiary: Address,
    vesting_account: Address,
    beneficiary_holding: Address,
    now: i64,
) -> Result<TokensClaimed> {
    let grant: VestingAccount = read_record(store, &vesting_account)?;

    let beneficiary_account = beneficiary_account_address(&vesting_account, &beneficiary);
    let mut schedule: BeneficiaryAccount = read_record(store, &beneficiary_account)?;
    require!(schedule.beneficiary == beneficiary, VestingError::UnAuthorized);
    require!(
        schedule.vesting_account == vesting_account,
        VestingError::UnAuthorized
    );

    require!(
        custody.mint_of(&beneficiary_holding)? == grant.mint,
        VestingError::InvalidMint
    );

    let amount_claimed = claimable_amount(&schedule, now)?;
    require!(amount_claimed > 0, VestingError::NothingToClaim);

    // Unreachable while the creation-time sufficiency rule holds.
    require!(
        custody.balance_of(&grant.treasury)? >= amount_claimed,
        VestingError::NotEnoughTokensInTreasury
    );

    schedule.total_claimed = schedule
        .total_claimed
        .checked_add(amount_claimed)
        .ok_or(VestingError::MathOverflow)?;

    // The transfer is the only fallible effect; the record write after it
    // cannot fail, so both commit or neither does.
    custody.transfer(&grant.treasury, &beneficiary_holding, amount_claimed)?;
    write_record(store, beneficiary_account, &schedule);

    info!(
        vesting_account = %vesting_account,
        beneficiary = %beneficiary,
        amount_claimed,
        "claimed vested tokens"
    );

    Ok(TokensClaimed {
        vesting_account,
        beneficiary,
        amount_claimed,
        total_claimed: schedule.total_claimed,
        timestamp: now,
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokensClaimed {
    pub vesting_account: Address,
    pub beneficiary: Address,
    pub amount_claimed: u64,
    /// Cumulative claimed after this claim.
    pub total_claimed: u64,
    pub timestamp: i64,
}
