#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_binary, Addr, Binary, Deps, Env, HexBinary, StdError, StdResult};
use robots_common::token_uri;

use crate::contract::is_whitelisted;
use crate::helpers::{CollectionContract, TokenLedger};
use crate::msg::{CollectionResponse, QueryMsg};
use crate::royalties::query_royalty_info;
use crate::state::{COLLECTION, CONFIG, MERKLE_ROOT, MINTING_STATUS, OWNER, SUPPLY};
use crate::ContractError;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_binary(&CONFIG.load(deps.storage)?),
        QueryMsg::Supply {} => to_binary(&SUPPLY.load(deps.storage)?),
        QueryMsg::MintingStatus {} => to_binary(&MINTING_STATUS.load(deps.storage)?),
        QueryMsg::MerkleRoot {} => to_binary(&MERKLE_ROOT.may_load(deps.storage)?),
        QueryMsg::Collection {} => to_binary(&query_collection(deps)?),
        QueryMsg::Owner {} => to_binary(&OWNER.query_admin(deps)?),
        QueryMsg::RoyaltyInfo {
            token_id,
            sale_price,
        } => to_binary(&query_royalty_info(deps, token_id, sale_price)?),
        QueryMsg::TokenUri { token_id } => to_binary(&query_token_uri(deps, token_id)?),
        QueryMsg::BalanceOf { owner } => to_binary(&query_balance_of(deps, owner)?),
        QueryMsg::OwnerOf { token_id } => to_binary(&query_owner_of(deps, token_id)?),
        QueryMsg::VerifyProof { address, proof } => {
            to_binary(&query_verify_proof(deps, address, proof)?)
        }
    }
}

fn query_collection(deps: Deps) -> StdResult<CollectionResponse> {
    let collection = COLLECTION.load(deps.storage)?;
    Ok(CollectionResponse {
        collection: collection.to_string(),
    })
}

/// Only minted ids have a URI
pub fn query_token_uri(deps: Deps, token_id: u64) -> StdResult<String> {
    let supply = SUPPLY.load(deps.storage)?;
    if token_id >= supply.total_issued {
        return Err(StdError::generic_err(
            ContractError::TokenNotFound(token_id).to_string(),
        ));
    }
    let config = CONFIG.load(deps.storage)?;
    Ok(token_uri(&config.base_uri, token_id))
}

fn query_balance_of(deps: Deps, owner: String) -> StdResult<u64> {
    let owner = deps.api.addr_validate(&owner)?;
    let collection = CollectionContract(COLLECTION.load(deps.storage)?);
    collection.balance_of(&deps.querier, &owner)
}

fn query_owner_of(deps: Deps, token_id: u64) -> StdResult<Addr> {
    let collection = CollectionContract(COLLECTION.load(deps.storage)?);
    collection.owner_of(&deps.querier, token_id)
}

fn query_verify_proof(deps: Deps, address: String, proof: Vec<HexBinary>) -> StdResult<bool> {
    let address = deps.api.addr_validate(&address)?;
    is_whitelisted(deps, address.as_str(), &proof)
}
