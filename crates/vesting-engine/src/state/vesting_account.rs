use bytemuck::{Pod, Zeroable};

use crate::address::Address;
use crate::constants::MAX_COMPANY_NAME_LEN;
use crate::error::{require, Result, VestingError};

/// Employer-level grant record.
///
/// Immutable after creation except `admin`, which moves via the explicit
/// admin-transfer operation. The treasury balance itself lives in custody,
/// not in this record.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Pod, Zeroable)]
pub struct VestingAccount {
    /// Caller-supplied numeric id, part of the record identity.
    pub id: u64,
    /// Identity permitted to mutate administrative state.
    pub admin: Address,
    /// Asset type the grant is denominated in.
    pub mint: Address,
    /// Custody holding backing this grant's obligations.
    pub treasury: Address,
    /// Fixed-width company name bytes; `company_name_len` bytes are live.
    pub company_name: [u8; MAX_COMPANY_NAME_LEN],
    pub company_name_len: u8,
    pub _padding: [u8; 5],
}

impl VestingAccount {
    pub const SIZE: usize = core::mem::size_of::<Self>();

    pub fn new(
        id: u64,
        admin: Address,
        mint: Address,
        treasury: Address,
        company_name: &str,
    ) -> Result<Self> {
        require!(
            company_name.len() <= MAX_COMPANY_NAME_LEN,
            VestingError::CompanyNameTooLong
        );

        let mut name = [0u8; MAX_COMPANY_NAME_LEN];
        name[..company_name.len()].copy_from_slice(company_name.as_bytes());

        Ok(Self {
            id,
            admin,
            mint,
            treasury,
            company_name: name,
            company_name_len: company_name.len() as u8,
            _padding: [0u8; 5],
        })
    }

    pub fn company_name(&self) -> &str {
        let len = (self.company_name_len as usize).min(MAX_COMPANY_NAME_LEN);
        core::str::from_utf8(&self.company_name[..len]).unwrap_or("")
    }
}
