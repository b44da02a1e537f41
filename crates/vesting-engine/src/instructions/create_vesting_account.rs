use tracing::info;

use crate::address::{treasury_address, vesting_account_address, Address};
use crate::custody::TokenCustody;
use crate::error::{require, Result, VestingError};
use crate::state::VestingAccount;
use crate::store::{write_record, RecordStore};

/// Create an employer grant record and provision its empty treasury
/// holding. The grant address derives from (admin, company name, id), so
/// the same admin can run several grants under distinct names or ids.
pub fn create_vesting_account(
    store: &mut dyn RecordStore,
    custody: &mut dyn TokenCustody,
    admin: Address,
    id: u64,
    company_name: &str,
    mint: Address,
) -> Result<VestingAccountCreated> {
    let vesting_account = vesting_account_address(&admin, company_name, id);
    let treasury = treasury_address(&vesting_account);

    // Validates the company-name bound before anything is provisioned.
    let record = VestingAccount::new(id, admin, mint, treasury, company_name)?;

    require!(
        !store.contains(&vesting_account),
        VestingError::DuplicateRecord
    );

    custody.create_holding(treasury, mint)?;
    write_record(store, vesting_account, &record);

    info!(
        vesting_account = %vesting_account,
        id,
        company_name,
        "created vesting account"
    );

    Ok(VestingAccountCreated {
        vesting_account,
        id,
        company_name: company_name.to_owned(),
        admin,
        mint,
        treasury,
    })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VestingAccountCreated {
    pub vesting_account: Address,
    pub id: u64,
    pub company_name: String,
    pub admin: Address,
    pub mint: Address,
    pub treasury: Address,
}
