use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_binary, Addr, Empty, QuerierWrapper, StdResult, WasmMsg};
use cw721::{Cw721QueryMsg, OwnerOfResponse, TokensResponse};
use cw721_base::{ExecuteMsg as Cw721ExecuteMsg, Extension, MintMsg};
use sg_std::CosmosMsg;

const TOKENS_PAGE_LIMIT: u32 = 100;

/// Ownership bookkeeping the minter relies on but does not keep itself
pub trait TokenLedger {
    /// Message that creates `token_id` for `owner`. Metadata URIs are served
    /// by the minter, so none is stored with the token.
    fn allocate(&self, owner: &Addr, token_id: u64) -> StdResult<CosmosMsg>;

    fn balance_of(&self, querier: &QuerierWrapper, owner: &Addr) -> StdResult<u64>;

    fn owner_of(&self, querier: &QuerierWrapper, token_id: u64) -> StdResult<Addr>;
}

/// CollectionContract is a wrapper around the cw721 collection Addr
#[cw_serde]
pub struct CollectionContract(pub Addr);

impl CollectionContract {
    pub fn addr(&self) -> Addr {
        self.0.clone()
    }
}

impl TokenLedger for CollectionContract {
    fn allocate(&self, owner: &Addr, token_id: u64) -> StdResult<CosmosMsg> {
        let mint_msg = Cw721ExecuteMsg::<Extension, Empty>::Mint(MintMsg::<Extension> {
            token_id: token_id.to_string(),
            owner: owner.to_string(),
            token_uri: None,
            extension: None,
        });

        Ok(WasmMsg::Execute {
            contract_addr: self.addr().into(),
            msg: to_binary(&mint_msg)?,
            funds: vec![],
        }
        .into())
    }

    fn balance_of(&self, querier: &QuerierWrapper, owner: &Addr) -> StdResult<u64> {
        let mut count = 0u64;
        let mut start_after = None;
        loop {
            let res: TokensResponse = querier.query_wasm_smart(
                self.addr(),
                &Cw721QueryMsg::Tokens {
                    owner: owner.to_string(),
                    start_after,
                    limit: Some(TOKENS_PAGE_LIMIT),
                },
            )?;
            // the collection may cap the page below our limit
            match res.tokens.last() {
                Some(last) => start_after = Some(last.clone()),
                None => return Ok(count),
            }
            count += res.tokens.len() as u64;
        }
    }

    fn owner_of(&self, querier: &QuerierWrapper, token_id: u64) -> StdResult<Addr> {
        let res: OwnerOfResponse = querier.query_wasm_smart(
            self.addr(),
            &Cw721QueryMsg::OwnerOf {
                token_id: token_id.to_string(),
                include_expired: None,
            },
        )?;
        Ok(Addr::unchecked(res.owner))
    }
}
