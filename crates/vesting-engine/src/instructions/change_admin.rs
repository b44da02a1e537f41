use tracing::info;

use crate::address::Address;
use crate::error::{require, Result, VestingError};
use crate::state::VestingAccount;
use crate::store::{read_record, write_record, RecordStore};

/// Reassign a grant's administrative identity. No history is retained.
pub fn change_admin(
    store: &mut dyn RecordStore,
    admin: Address,
    vesting_account: Address,
    new_admin: Address,
) -> Result<AdminChanged> {
    let mut grant: VestingAccount = read_record(store, &vesting_account)?;
    require!(grant.admin == admin, VestingError::UnAuthorized);

    let old_admin = grant.admin;
    grant.admin = new_admin;
    write_record(store, vesting_account, &grant);

    info!(
        vesting_account = %vesting_account,
        old_admin = %old_admin,
        new_admin = %new_admin,
        "changed grant admin"
    );

    Ok(AdminChanged {
        vesting_account,
        old_admin,
        new_admin,
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdminChanged {
    pub vesting_account: Address,
    pub old_admin: Address,
    pub new_admin: Address,
}
