/// Total number of robots that can ever exist
pub const MAX_SUPPLY: u64 = 10_000;
/// Robots set aside for the team, minted outside of the sale
pub const RESERVE: u64 = 350;
/// Max robots per public or whitelist mint call
pub const MINT_LIMIT: u32 = 20;

/// 10% of every secondary sale until the owner says otherwise
pub const DEFAULT_ROYALTY_BPS: u64 = 1_000;
/// Royalties are set as a whole percentage, capped at 90%
pub const MAX_ROYALTY_PERCENT: u64 = 90;
pub const BPS_PER_PERCENT: u64 = 100;
pub const BPS_DENOMINATOR: u128 = 10_000;

pub const TOKEN_URI_SUFFIX: &str = ".json";

/// Metadata lives at `<base_uri><token_id>.json`
pub fn token_uri(base_uri: &str, token_id: u64) -> String {
    format!("{}{}{}", base_uri, token_id, TOKEN_URI_SUFFIX)
}
