pub mod beneficiary_account;
pub mod vesting_account;

pub use beneficiary_account::*;
pub use vesting_account::*;
