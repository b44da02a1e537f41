//! Token custody capability.
//!
//! The routine that physically moves balances between holding accounts is
//! an external collaborator. The engine only requires typed holdings
//! (asset type + balance) and atomic transfers between them; signature
//! checks on the moving side are the host transfer layer's concern.

use std::collections::BTreeMap;

use crate::address::Address;
use crate::error::{require, Result, VestingError};

pub trait TokenCustody {
    /// Provision an empty holding denominated in `mint`.
    fn create_holding(&mut self, address: Address, mint: Address) -> Result<()>;

    /// Asset type of a holding.
    fn mint_of(&self, address: &Address) -> Result<Address>;

    fn balance_of(&self, address: &Address) -> Result<u64>;

    /// Move `amount` between two holdings of the same asset type.
    fn transfer(&mut self, from: &Address, to: &Address, amount: u64) -> Result<()>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Holding {
    mint: Address,
    balance: u64,
}

/// In-memory reference implementation of the custody collaborator.
#[derive(Default, Debug, Clone)]
pub struct MemoryTokenCustody {
    holdings: BTreeMap<Address, Holding>,
}

impl MemoryTokenCustody {
    pub fn new() -> Self {
        Self::default()
    }

    fn holding(&self, address: &Address) -> Result<&Holding> {
        self.holdings.get(address).ok_or(VestingError::RecordNotFound)
    }

    /// Issue new units directly into a holding. Stands in for the asset
    /// layer's own supply operations; the engine never calls this.
    pub fn mint_to(&mut self, address: &Address, amount: u64) -> Result<()> {
        let holding = self
            .holdings
            .get_mut(address)
            .ok_or(VestingError::RecordNotFound)?;
        holding.balance = holding
            .balance
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        Ok(())
    }
}

impl TokenCustody for MemoryTokenCustody {
    fn create_holding(&mut self, address: Address, mint: Address) -> Result<()> {
        require!(
            !self.holdings.contains_key(&address),
            VestingError::DuplicateRecord
        );
        self.holdings.insert(address, Holding { mint, balance: 0 });
        Ok(())
    }

    fn mint_of(&self, address: &Address) -> Result<Address> {
        Ok(self.holding(address)?.mint)
    }

    fn balance_of(&self, address: &Address) -> Result<u64> {
        Ok(self.holding(address)?.balance)
    }

    fn transfer(&mut self, from: &Address, to: &Address, amount: u64) -> Result<()> {
        let source = *self.holding(from)?;
        let destination = *self.holding(to)?;
        require!(source.mint == destination.mint, VestingError::InvalidMint);
        require!(source.balance >= amount, VestingError::InsufficientFunds);

        // A self-transfer leaves the holding unchanged.
        if from == to {
            return Ok(());
        }

        let credited = destination
            .balance
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;

        // Both sides validated above; these writes replace existing holdings.
        self.holdings.insert(
            *from,
            Holding {
                mint: source.mint,
                balance: source.balance - amount,
            },
        );
        self.holdings.insert(
            *to,
            Holding {
                mint: destination.mint,
                balance: credited,
            },
        );
        Ok(())
    }
}
