use cosmwasm_std::{Deps, DepsMut, Event, MessageInfo, StdResult, Uint128};
use cw_utils::nonpayable;
use robots_common::{BPS_DENOMINATOR, BPS_PER_PERCENT, MAX_ROYALTY_PERCENT};
use sg_std::Response;

use crate::contract::only_owner;
use crate::msg::RoyaltyInfoResponse;
use crate::state::{RoyaltyConfig, ROYALTIES};
use crate::ContractError;

pub fn execute_set_royalties(
    deps: DepsMut,
    info: MessageInfo,
    royalties: u64,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info.sender)?;
    nonpayable(&info)?;

    // zero is rejected rather than treated as "off"
    if royalties == 0 || royalties > MAX_ROYALTY_PERCENT {
        return Err(ContractError::InvalidRoyalties {});
    }

    let basis_points = royalties * BPS_PER_PERCENT;
    ROYALTIES.update(deps.storage, |mut config| -> StdResult<_> {
        config.basis_points = basis_points;
        Ok(config)
    })?;

    let event = Event::new("royalties_changed")
        .add_attribute("basis_points", basis_points.to_string())
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

pub fn execute_set_royalties_receiver(
    deps: DepsMut,
    info: MessageInfo,
    receiver: String,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info.sender)?;
    nonpayable(&info)?;

    let receiver = deps.api.addr_validate(&receiver)?;
    ROYALTIES.update(deps.storage, |mut config| -> StdResult<_> {
        config.receiver = receiver.clone();
        Ok(config)
    })?;

    let event = Event::new("royalties_receiver_changed")
        .add_attribute("receiver", receiver)
        .add_attribute("sender", info.sender);
    Ok(Response::new().add_event(event))
}

/// Royalty owed on a sale, rounded down. Does not depend on the token.
pub fn royalty_info(config: &RoyaltyConfig, sale_price: Uint128) -> RoyaltyInfoResponse {
    RoyaltyInfoResponse {
        receiver: config.receiver.clone(),
        royalty_amount: sale_price
            .multiply_ratio(config.basis_points, BPS_DENOMINATOR),
    }
}

pub fn query_royalty_info(
    deps: Deps,
    _token_id: u64,
    sale_price: Uint128,
) -> StdResult<RoyaltyInfoResponse> {
    let config = ROYALTIES.load(deps.storage)?;
    Ok(royalty_info(&config, sale_price))
}
