use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, HexBinary, Uint128};
use cw_controllers::Admin;
use cw_storage_plus::Item;

/// Owner-managed sale parameters
#[cw_serde]
pub struct Config {
    pub name: String,
    pub symbol: String,
    pub base_uri: String,
    /// Price of a single robot in `NATIVE_DENOM`
    pub mint_price: Uint128,
    /// Max robots per public or whitelist mint call, the reserve is exempt
    pub mint_limit: u32,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Two independent switches, both may be on at the same time
#[cw_serde]
#[derive(Default)]
pub struct MintingStatus {
    pub public_enabled: bool,
    pub whitelist_enabled: bool,
}

pub const MINTING_STATUS: Item<MintingStatus> = Item::new("minting-status");

#[cw_serde]
pub struct SupplyCounters {
    pub total_issued: u64,
    pub reserve_issued: u64,
    pub max_supply: u64,
    pub reserve_cap: u64,
}

pub const SUPPLY: Item<SupplyCounters> = Item::new("supply");

#[cw_serde]
pub struct RoyaltyConfig {
    /// (0, 9000]
    pub basis_points: u64,
    pub receiver: Addr,
}

pub const ROYALTIES: Item<RoyaltyConfig> = Item::new("royalties");

/// Root of the current allowlist tree, absent until the owner sets one
pub const MERKLE_ROOT: Item<HexBinary> = Item::new("merkle-root");

/// cw721 collection that records ownership of minted robots
pub const COLLECTION: Item<Addr> = Item::new("collection");

pub const OWNER: Admin = Admin::new("owner");
