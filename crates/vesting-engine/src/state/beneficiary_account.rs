use bytemuck::{Pod, Zeroable};

use crate::address::Address;

/// Per-beneficiary schedule record.
///
/// Created exactly once per (grant, beneficiary) pair and never deleted;
/// claims bump `total_claimed`, revocation sets the marker once.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Pod, Zeroable)]
pub struct BeneficiaryAccount {
    /// Ramp origin. Accrual is linear from here to `end_time`.
    pub start_time: i64,
    /// No entitlement has vested before this timestamp.
    pub cliff_time: i64,
    /// Full entitlement has vested at and after this timestamp.
    pub end_time: i64,
    /// Entitlement ceiling in the grant mint's smallest unit.
    pub total_amount: u64,
    /// Cumulative amount transferred out; monotone non-decreasing.
    pub total_claimed: u64,
    pub revoked: u8,
    pub _padding: [u8; 7],
    /// Accrual freeze point; live only when `revoked` is set.
    pub revoked_at: i64,
    pub beneficiary: Address,
    pub vesting_account: Address,
}

impl BeneficiaryAccount {
    pub const SIZE: usize = core::mem::size_of::<Self>();

    pub fn new(
        vesting_account: Address,
        beneficiary: Address,
        start_time: i64,
        end_time: i64,
        total_amount: u64,
        cliff_time: i64,
    ) -> Self {
        Self {
            start_time,
            cliff_time,
            end_time,
            total_amount,
            total_claimed: 0,
            revoked: 0,
            _padding: [0u8; 7],
            revoked_at: 0,
            beneficiary,
            vesting_account,
        }
    }

    pub fn is_revoked(&self) -> bool {
        self.revoked != 0
    }

    /// Freeze timestamp, if the schedule has been revoked.
    pub fn revocation_time(&self) -> Option<i64> {
        self.is_revoked().then_some(self.revoked_at)
    }

    pub fn set_revoked(&mut self, now: i64) {
        self.revoked = 1;
        self.revoked_at = now;
    }
}
