use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, HexBinary, Uint128};
use cw_controllers::AdminResponse;

use crate::state::{Config, MintingStatus, SupplyCounters};

#[cw_serde]
pub struct InstantiateMsg {
    /// Code id of the cw721 collection the minter instantiates
    pub collection_code_id: u64,
    pub name: String,
    pub symbol: String,
    pub base_uri: String,
    pub max_supply: u64,
    pub reserve: u64,
    pub mint_limit: u32,
    pub mint_price: Uint128,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Mint `quantity` robots to the sender, requires public minting
    PublicMint { quantity: u32 },
    /// Mint `quantity` robots to an allowlisted sender
    WhitelistMint {
        quantity: u32,
        proof: Vec<HexBinary>,
    },
    /// Owner mints from the team reserve, free and without a per call limit
    MintFromReserve { recipient: String, quantity: u32 },
    /// Send the collected mint proceeds to the owner
    Withdraw {},
    SetMintPrice { price: Uint128 },
    SetMintLimit { limit: u32 },
    /// Replace the allowlist; proofs against the previous root stop working
    SetMerkleRoot { root: HexBinary },
    SetBaseUri { base_uri: String },
    TogglePublicMintingStatus {},
    ToggleWhitelistMintingStatus {},
    /// Royalty as a whole percentage, 1 to 90
    SetRoyalties { royalties: u64 },
    SetRoyaltiesReceiver { receiver: String },
    /// Transfer ownership, `None` renounces it
    UpdateOwner { owner: Option<String> },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Config)]
    Config {},
    #[returns(SupplyCounters)]
    Supply {},
    #[returns(MintingStatus)]
    MintingStatus {},
    #[returns(Option<HexBinary>)]
    MerkleRoot {},
    #[returns(CollectionResponse)]
    Collection {},
    #[returns(AdminResponse)]
    Owner {},
    #[returns(RoyaltyInfoResponse)]
    RoyaltyInfo { token_id: u64, sale_price: Uint128 },
    #[returns(String)]
    TokenUri { token_id: u64 },
    #[returns(u64)]
    BalanceOf { owner: String },
    #[returns(Addr)]
    OwnerOf { token_id: u64 },
    /// Checks a proof against the current root without minting
    #[returns(bool)]
    VerifyProof {
        address: String,
        proof: Vec<HexBinary>,
    },
}

#[cw_serde]
pub struct CollectionResponse {
    pub collection: String,
}

#[cw_serde]
pub struct RoyaltyInfoResponse {
    pub receiver: Addr,
    pub royalty_amount: Uint128,
}
