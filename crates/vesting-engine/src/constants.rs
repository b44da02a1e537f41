//! Engine-wide constants.

/// Max byte length of a grant's company name as stored in the fixed-width
/// record field.
pub const MAX_COMPANY_NAME_LEN: usize = 50;

/// Seed prefix for grant record addresses.
pub const VESTING_ACCOUNT_SEED: &[u8] = b"vesting_account";

/// Seed prefix for the treasury holding backing a grant.
pub const VESTING_TREASURY_SEED: &[u8] = b"vesting_treasury";

/// Seed prefix for per-beneficiary schedule record addresses.
pub const BENEFICIARY_SCHEDULE_SEED: &[u8] = b"beneficiary_vesting_schedule";
