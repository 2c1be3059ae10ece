use cosmwasm_std::StdError;
use cw_controllers::AdminError;
use cw_utils::{ParseReplyError, PaymentError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("{0}")]
    Admin(#[from] AdminError),

    #[error("{0}")]
    ParseReply(#[from] ParseReplyError),

    #[error("Ownable: caller is not the owner")]
    Unauthorized {},

    #[error("public minting is not enabled")]
    PublicMintingDisabled {},

    #[error("whitelist minting is not enabled")]
    WhitelistMintingDisabled {},

    #[error("quantity must be greater than zero")]
    InvalidQuantity {},

    #[error("no more tokens than mint limit")]
    MintLimitExceeded {},

    #[error("low price!")]
    LowPrice {},

    #[error("Invalid proof")]
    InvalidProof {},

    #[error("merkle root must be 32 bytes, got {0}")]
    InvalidMerkleRoot(usize),

    #[error("max supply reached")]
    SupplyExhausted {},

    #[error("no more in reserve")]
    ReserveExhausted {},

    #[error("reserve {reserve} exceeds max supply {max_supply}")]
    InvalidReserve { reserve: u64, max_supply: u64 },

    #[error("max supply must be greater than zero")]
    InvalidMaxSupply {},

    #[error("royalties should be between 0 and 90")]
    InvalidRoyalties {},

    #[error("token {0} does not exist")]
    TokenNotFound(u64),

    #[error("transfer failed: {0}")]
    TransferFailed(String),

    #[error("Invalid reply ID")]
    InvalidReplyID {},

    #[error("Cannot migrate from {0}")]
    InvalidContractName(String),

    #[error("Cannot migrate to an older version")]
    InvalidContractVersion {},
}
