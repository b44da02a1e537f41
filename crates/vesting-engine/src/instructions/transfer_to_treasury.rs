use tracing::info;

use crate::address::Address;
use crate::custody::TokenCustody;
use crate::error::{require, Result, VestingError};
use crate::state::VestingAccount;
use crate::store::{read_record, RecordStore};

/// Credit a grant's treasury from a funder holding.
///
/// The funding source must carry the grant's configured mint; the treasury
/// side is checked as well so a corrupted holding cannot be credited.
pub fn transfer_to_treasury(
    store: &mut dyn RecordStore,
    custody: &mut dyn TokenCustody,
    funder: Address,
    funder_holding: Address,
    vesting_account: Address,
    amount: u64,
) -> Result<TokensTransferredToTreasury> {
    let grant: VestingAccount = read_record(store, &vesting_account)?;

    require!(
        custody.mint_of(&funder_holding)? == grant.mint,
        VestingError::InvalidMint
    );
    require!(
        custody.mint_of(&grant.treasury)? == grant.mint,
        VestingError::InvalidMint
    );

    custody.transfer(&funder_holding, &grant.treasury, amount)?;
    let treasury_balance = custody.balance_of(&grant.treasury)?;

    info!(
        vesting_account = %vesting_account,
        amount,
        treasury_balance,
        "funded treasury"
    );

    Ok(TokensTransferredToTreasury {
        vesting_account,
        funder,
        amount,
        treasury_balance,
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokensTransferredToTreasury {
    pub vesting_account: Address,
    pub funder: Address,
    pub amount: u64,
    /// Treasury balance after the credit.
    pub treasury_balance: u64,
}
