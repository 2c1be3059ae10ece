use std::ops::Range;

use cosmwasm_std::Storage;

use crate::state::{SupplyCounters, SUPPLY};
use crate::ContractError;

/// Which allocation a mint draws from. Reserve mints also count toward the
/// total supply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pool {
    General,
    Reserve,
}

impl SupplyCounters {
    pub fn new(max_supply: u64, reserve_cap: u64) -> Result<Self, ContractError> {
        if max_supply == 0 {
            return Err(ContractError::InvalidMaxSupply {});
        }
        if reserve_cap > max_supply {
            return Err(ContractError::InvalidReserve {
                reserve: reserve_cap,
                max_supply,
            });
        }
        Ok(SupplyCounters {
            total_issued: 0,
            reserve_issued: 0,
            max_supply,
            reserve_cap,
        })
    }

    /// Claims `quantity` ids and returns them. Counters are untouched on error.
    pub fn reserve(&mut self, quantity: u64, pool: Pool) -> Result<Range<u64>, ContractError> {
        if pool == Pool::Reserve {
            let reserve_issued = self
                .reserve_issued
                .checked_add(quantity)
                .filter(|issued| *issued <= self.reserve_cap)
                .ok_or(ContractError::ReserveExhausted {})?;
            self.check_total(quantity)?;
            self.reserve_issued = reserve_issued;
        } else {
            self.check_total(quantity)?;
        }

        let first = self.total_issued;
        self.total_issued += quantity;
        Ok(first..self.total_issued)
    }

    fn check_total(&self, quantity: u64) -> Result<(), ContractError> {
        match self.total_issued.checked_add(quantity) {
            Some(total) if total <= self.max_supply => Ok(()),
            _ => Err(ContractError::SupplyExhausted {}),
        }
    }
}

/// Every mint path goes through here before any id is handed out
pub fn reserve(
    storage: &mut dyn Storage,
    quantity: u64,
    pool: Pool,
) -> Result<Range<u64>, ContractError> {
    let mut supply = SUPPLY.load(storage)?;
    let ids = supply.reserve(quantity, pool)?;
    SUPPLY.save(storage, &supply)?;
    Ok(ids)
}
