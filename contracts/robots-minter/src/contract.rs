#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_binary, Addr, Deps, DepsMut, Empty, Env, Event, HexBinary, MessageInfo, Reply, StdError,
    StdResult, Uint128, WasmMsg,
};
use cw2::{get_contract_version, set_contract_version};
use cw721_base::InstantiateMsg as Cw721InstantiateMsg;
use cw_utils::{maybe_addr, nonpayable, parse_reply_instantiate_data};
use robots_common::DEFAULT_ROYALTY_BPS;
use robots_merkle::{to_hashes, verify_address, Hash};
use semver::Version;
use sg_std::{Response, SubMsg};

use crate::error::ContractError;
use crate::helpers::{CollectionContract, TokenLedger};
use crate::msg::{ExecuteMsg, InstantiateMsg};
use crate::pricing::check_mint;
use crate::royalties::{execute_set_royalties, execute_set_royalties_receiver};
use crate::state::{
    Config, MintingStatus, RoyaltyConfig, SupplyCounters, COLLECTION, CONFIG, MERKLE_ROOT,
    MINTING_STATUS, OWNER, ROYALTIES, SUPPLY,
};
use crate::supply::{self, Pool};
use crate::treasury::{execute_withdraw, handle_withdraw_reply, WITHDRAW_REPLY_ID};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:robots-minter";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

const INIT_COLLECTION_REPLY_ID: u64 = 1;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    nonpayable(&info)?;

    let supply = SupplyCounters::new(msg.max_supply, msg.reserve)?;
    SUPPLY.save(deps.storage, &supply)?;

    let config = Config {
        name: msg.name.clone(),
        symbol: msg.symbol.clone(),
        base_uri: msg.base_uri,
        mint_price: msg.mint_price,
        mint_limit: msg.mint_limit,
    };
    CONFIG.save(deps.storage, &config)?;
    MINTING_STATUS.save(deps.storage, &MintingStatus::default())?;

    // royalties are paid to the minter itself until the owner points them elsewhere
    ROYALTIES.save(
        deps.storage,
        &RoyaltyConfig {
            basis_points: DEFAULT_ROYALTY_BPS,
            receiver: env.contract.address.clone(),
        },
    )?;

    OWNER.set(deps.branch(), Some(info.sender.clone()))?;

    let wasm_msg = WasmMsg::Instantiate {
        code_id: msg.collection_code_id,
        msg: to_binary(&Cw721InstantiateMsg {
            name: msg.name,
            symbol: msg.symbol,
            minter: env.contract.address.to_string(),
        })?,
        funds: vec![],
        admin: None,
        label: "Drunk Robots Collection".to_string(),
    };
    let submsg = SubMsg::reply_on_success(wasm_msg, INIT_COLLECTION_REPLY_ID);

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", info.sender)
        .add_attribute("max_supply", supply.max_supply.to_string())
        .add_attribute("reserve", supply.reserve_cap.to_string())
        .add_submessage(submsg))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        INIT_COLLECTION_REPLY_ID => {
            let res = parse_reply_instantiate_data(msg)?;
            let collection = Addr::unchecked(res.contract_address);
            COLLECTION.save(deps.storage, &collection)?;

            Ok(Response::default()
                .add_attribute("action", "init_collection_reply")
                .add_attribute("collection", collection))
        }
        WITHDRAW_REPLY_ID => handle_withdraw_reply(msg),
        _ => Err(ContractError::InvalidReplyID {}),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    let api = deps.api;

    match msg {
        ExecuteMsg::PublicMint { quantity } => execute_public_mint(deps, info, quantity),
        ExecuteMsg::WhitelistMint { quantity, proof } => {
            execute_whitelist_mint(deps, info, quantity, proof)
        }
        ExecuteMsg::MintFromReserve {
            recipient,
            quantity,
        } => execute_mint_from_reserve(deps, info, recipient, quantity),
        ExecuteMsg::Withdraw {} => execute_withdraw(deps, env, info),
        ExecuteMsg::SetMintPrice { price } => execute_set_mint_price(deps, info, price),
        ExecuteMsg::SetMintLimit { limit } => execute_set_mint_limit(deps, info, limit),
        ExecuteMsg::SetMerkleRoot { root } => execute_set_merkle_root(deps, info, root),
        ExecuteMsg::SetBaseUri { base_uri } => execute_set_base_uri(deps, info, base_uri),
        ExecuteMsg::TogglePublicMintingStatus {} => execute_toggle_public_minting(deps, info),
        ExecuteMsg::ToggleWhitelistMintingStatus {} => {
            execute_toggle_whitelist_minting(deps, info)
        }
        ExecuteMsg::SetRoyalties { royalties } => execute_set_royalties(deps, info, royalties),
        ExecuteMsg::SetRoyaltiesReceiver { receiver } => {
            execute_set_royalties_receiver(deps, info, receiver)
        }
        ExecuteMsg::UpdateOwner { owner } => {
            only_owner(deps.as_ref(), &info.sender)?;
            nonpayable(&info)?;
            Ok(OWNER.execute_update_admin(deps, info, maybe_addr(api, owner)?)?)
        }
    }
}

/// Fails with `Unauthorized` unless `sender` is the current owner
pub fn only_owner(deps: Deps, sender: &Addr) -> Result<(), ContractError> {
    if !OWNER.is_admin(deps, sender)? {
        return Err(ContractError::Unauthorized {});
    }
    Ok(())
}

pub fn execute_public_mint(
    deps: DepsMut,
    info: MessageInfo,
    quantity: u32,
) -> Result<Response, ContractError> {
    if !MINTING_STATUS.load(deps.storage)?.public_enabled {
        return Err(ContractError::PublicMintingDisabled {});
    }
    let config = CONFIG.load(deps.storage)?;
    check_mint(&config, &info, quantity)?;

    mint_tokens(deps, &info.sender, quantity, Pool::General)
        .map(|res| res.add_attribute("action", "public_mint"))
}

pub fn execute_whitelist_mint(
    deps: DepsMut,
    info: MessageInfo,
    quantity: u32,
    proof: Vec<HexBinary>,
) -> Result<Response, ContractError> {
    if !MINTING_STATUS.load(deps.storage)?.whitelist_enabled {
        return Err(ContractError::WhitelistMintingDisabled {});
    }
    let config = CONFIG.load(deps.storage)?;
    check_mint(&config, &info, quantity)?;

    if !is_whitelisted(deps.as_ref(), info.sender.as_str(), &proof)? {
        return Err(ContractError::InvalidProof {});
    }

    mint_tokens(deps, &info.sender, quantity, Pool::General)
        .map(|res| res.add_attribute("action", "whitelist_mint"))
}

pub fn execute_mint_from_reserve(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    quantity: u32,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info.sender)?;
    nonpayable(&info)?;
    if quantity == 0 {
        return Err(ContractError::InvalidQuantity {});
    }

    let recipient = deps.api.addr_validate(&recipient)?;

    mint_tokens(deps, &recipient, quantity, Pool::Reserve)
        .map(|res| res.add_attribute("action", "mint_from_reserve"))
}

/// Membership check against the root in storage. An unset root or a malformed
/// proof never verifies.
pub fn is_whitelisted(deps: Deps, address: &str, proof: &[HexBinary]) -> StdResult<bool> {
    let root = MERKLE_ROOT
        .may_load(deps.storage)?
        .and_then(|root| Hash::try_from(root.as_slice()).ok());
    let root = match root {
        Some(root) => root,
        None => return Ok(false),
    };

    Ok(match to_hashes(proof.iter().map(|p| p.as_slice())) {
        Some(proof) => verify_address(&root, address, &proof),
        None => false,
    })
}

fn mint_tokens(
    deps: DepsMut,
    recipient: &Addr,
    quantity: u32,
    pool: Pool,
) -> Result<Response, ContractError> {
    let collection = CollectionContract(COLLECTION.load(deps.storage)?);
    let ids = supply::reserve(deps.storage, quantity.into(), pool)?;

    let mut res = Response::new()
        .add_attribute("recipient", recipient.to_string())
        .add_attribute("quantity", quantity.to_string());
    for token_id in ids {
        res = res
            .add_message(collection.allocate(recipient, token_id)?)
            .add_event(
                Event::new("mint")
                    .add_attribute("to", recipient.to_string())
                    .add_attribute("token_id", token_id.to_string()),
            );
    }

    Ok(res)
}

pub fn execute_set_mint_price(
    deps: DepsMut,
    info: MessageInfo,
    price: Uint128,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info.sender)?;
    nonpayable(&info)?;

    CONFIG.update(deps.storage, |mut config| -> StdResult<_> {
        config.mint_price = price;
        Ok(config)
    })?;

    let event = Event::new("update_mint_price").add_attribute("mint_price", price.to_string());
    Ok(Response::new().add_event(event))
}

pub fn execute_set_mint_limit(
    deps: DepsMut,
    info: MessageInfo,
    limit: u32,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info.sender)?;
    nonpayable(&info)?;

    CONFIG.update(deps.storage, |mut config| -> StdResult<_> {
        config.mint_limit = limit;
        Ok(config)
    })?;

    let event = Event::new("update_mint_limit").add_attribute("mint_limit", limit.to_string());
    Ok(Response::new().add_event(event))
}

pub fn execute_set_merkle_root(
    deps: DepsMut,
    info: MessageInfo,
    root: HexBinary,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info.sender)?;
    nonpayable(&info)?;

    if root.len() != 32 {
        return Err(ContractError::InvalidMerkleRoot(root.len()));
    }
    MERKLE_ROOT.save(deps.storage, &root)?;

    let event = Event::new("update_merkle_root").add_attribute("merkle_root", root.to_hex());
    Ok(Response::new().add_event(event))
}

pub fn execute_set_base_uri(
    deps: DepsMut,
    info: MessageInfo,
    base_uri: String,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info.sender)?;
    nonpayable(&info)?;

    CONFIG.update(deps.storage, |mut config| -> StdResult<_> {
        config.base_uri = base_uri.clone();
        Ok(config)
    })?;

    let event = Event::new("update_base_uri").add_attribute("base_uri", base_uri);
    Ok(Response::new().add_event(event))
}

pub fn execute_toggle_public_minting(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info.sender)?;
    nonpayable(&info)?;

    let status = MINTING_STATUS.update(deps.storage, |mut status| -> StdResult<_> {
        status.public_enabled = !status.public_enabled;
        Ok(status)
    })?;

    let event = Event::new("toggle_public_minting")
        .add_attribute("public_enabled", status.public_enabled.to_string());
    Ok(Response::new().add_event(event))
}

pub fn execute_toggle_whitelist_minting(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info.sender)?;
    nonpayable(&info)?;

    let status = MINTING_STATUS.update(deps.storage, |mut status| -> StdResult<_> {
        status.whitelist_enabled = !status.whitelist_enabled;
        Ok(status)
    })?;

    let event = Event::new("toggle_whitelist_minting")
        .add_attribute("whitelist_enabled", status.whitelist_enabled.to_string());
    Ok(Response::new().add_event(event))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: Empty) -> Result<Response, ContractError> {
    let current_version = get_contract_version(deps.storage)?;
    if current_version.contract != CONTRACT_NAME {
        return Err(ContractError::InvalidContractName(current_version.contract));
    }
    let version: Version = current_version
        .version
        .parse()
        .map_err(|_| StdError::generic_err("Invalid contract version"))?;
    let new_version: Version = CONTRACT_VERSION
        .parse()
        .map_err(|_| StdError::generic_err("Invalid contract version"))?;

    if version > new_version {
        return Err(ContractError::InvalidContractVersion {});
    }
    // if same version return
    if version == new_version {
        return Ok(Response::new());
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("action", "migrate"))
}
