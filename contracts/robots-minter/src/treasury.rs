use cosmwasm_std::{BankMsg, DepsMut, Env, Event, MessageInfo, Reply, SubMsgResult, Uint128};
use cw_utils::nonpayable;
use sg_std::{Response, SubMsg, NATIVE_DENOM};

use crate::contract::only_owner;
use crate::ContractError;

pub const WITHDRAW_REPLY_ID: u64 = 2;

/// Sends every coin the minter holds to the owner. Mint proceeds are in
/// `NATIVE_DENOM`, anything else that was sent here goes along with them.
/// With nothing to send the call still succeeds and only emits the event.
pub fn execute_withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info.sender)?;
    nonpayable(&info)?;

    let balances = deps.querier.query_all_balances(&env.contract.address)?;
    let proceeds = balances
        .iter()
        .find(|coin| coin.denom == NATIVE_DENOM)
        .map(|coin| coin.amount)
        .unwrap_or_else(Uint128::zero);

    let mut event = Event::new("withdrawal")
        .add_attribute("owner", info.sender.to_string())
        .add_attribute("amount", proceeds.to_string());
    if balances.iter().any(|coin| coin.denom != NATIVE_DENOM) {
        let swept: Vec<String> = balances.iter().map(|coin| coin.to_string()).collect();
        event = event.add_attribute("funds", swept.join(","));
    }
    let res = Response::new()
        .add_attribute("action", "withdraw")
        .add_event(event);

    if balances.is_empty() {
        return Ok(res);
    }

    let send = BankMsg::Send {
        to_address: info.sender.to_string(),
        amount: balances,
    };
    Ok(res.add_submessage(SubMsg::reply_on_error(send, WITHDRAW_REPLY_ID)))
}

/// Only reached when the transfer was rejected. Failing here discards the
/// whole withdrawal.
pub fn handle_withdraw_reply(msg: Reply) -> Result<Response, ContractError> {
    match msg.result {
        SubMsgResult::Err(err) => Err(ContractError::TransferFailed(err)),
        SubMsgResult::Ok(_) => Ok(Response::default()),
    }
}
