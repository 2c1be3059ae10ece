use cosmwasm_std::{MessageInfo, StdError, Uint128};
use cw_utils::may_pay;
use sg_std::NATIVE_DENOM;

use crate::state::Config;
use crate::ContractError;

pub fn within_limit(config: &Config, quantity: u32) -> bool {
    quantity <= config.mint_limit
}

pub fn required_payment(config: &Config, quantity: u32) -> Result<Uint128, ContractError> {
    Ok(config
        .mint_price
        .checked_mul(Uint128::from(quantity))
        .map_err(StdError::from)?)
}

/// Limit and payment checks shared by the public and whitelist mints.
/// Overpayment is accepted and kept.
pub fn check_mint(
    config: &Config,
    info: &MessageInfo,
    quantity: u32,
) -> Result<Uint128, ContractError> {
    if quantity == 0 {
        return Err(ContractError::InvalidQuantity {});
    }
    if !within_limit(config, quantity) {
        return Err(ContractError::MintLimitExceeded {});
    }

    let payment = may_pay(info, NATIVE_DENOM)?;
    if payment < required_payment(config, quantity)? {
        return Err(ContractError::LowPrice {});
    }

    Ok(payment)
}
