//! Identity and deterministic record addressing.
//!
//! Every signer, asset type, record, and holding account is named by a
//! 32-byte [`Address`]. Derived records (grants, treasuries, schedules)
//! live at addresses computed from stable seeds: identical seeds always
//! yield the same address, distinct seeds collide only with hash
//! probability.

use core::fmt;

use bytemuck::{Pod, Zeroable};

use crate::constants::{
    BENEFICIARY_SCHEDULE_SEED, VESTING_ACCOUNT_SEED, VESTING_TREASURY_SEED,
};

/// 32-byte opaque identity.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Pod, Zeroable)]
pub struct Address(pub [u8; 32]);

impl Address {
    pub const LEN: usize = 32;

    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for Address {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

/// Derive an address from an ordered seed list.
///
/// Each seed segment is length-prefixed before hashing so that two seed
/// lists with equal concatenations still map to distinct addresses.
pub fn derive_address(seeds: &[&[u8]]) -> Address {
    let mut hasher = blake3::Hasher::new();
    for seed in seeds {
        hasher.update(&(seed.len() as u64).to_le_bytes());
        hasher.update(seed);
    }
    Address(*hasher.finalize().as_bytes())
}

/// Address of the grant record for (admin, company name, id).
pub fn vesting_account_address(admin: &Address, company_name: &str, id: u64) -> Address {
    derive_address(&[
        VESTING_ACCOUNT_SEED,
        admin.as_ref(),
        company_name.as_bytes(),
        &id.to_le_bytes(),
    ])
}

/// Address of the treasury holding backing a grant.
pub fn treasury_address(vesting_account: &Address) -> Address {
    derive_address(&[VESTING_TREASURY_SEED, vesting_account.as_ref()])
}

/// Address of the schedule record for (grant, beneficiary).
pub fn beneficiary_account_address(vesting_account: &Address, beneficiary: &Address) -> Address {
    derive_address(&[
        BENEFICIARY_SCHEDULE_SEED,
        beneficiary.as_ref(),
        vesting_account.as_ref(),
    ])
}
