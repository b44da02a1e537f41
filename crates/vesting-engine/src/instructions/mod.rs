pub mod change_admin;
pub mod claim_vested_tokens;
pub mod create_vesting_account;
pub mod estimate_claimable;
pub mod initialize_vesting_schedule;
pub mod revoke_beneficiary_account;
pub mod transfer_to_treasury;

pub use change_admin::*;
pub use claim_vested_tokens::*;
pub use create_vesting_account::*;
pub use estimate_claimable::*;
pub use initialize_vesting_schedule::*;
pub use revoke_beneficiary_account::*;
pub use transfer_to_treasury::*;
