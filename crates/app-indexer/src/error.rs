use near_jsonrpc_client::{errors::JsonRpcError, methods::health::RpcStatusError};
use num_bigint::ParseBigIntError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("log {log:?} has no token at position {index}")]
    MissingToken { log: String, index: usize },
    #[error("invalid amount {token:?} in log {log:?}")]
    InvalidAmount {
        log: String,
        token: String,
        #[source]
        source: ParseBigIntError,
    },
    #[error("[Store] {0}")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("{:?}", _0)]
    JsonRpc(#[from] JsonRpcError<RpcStatusError>),
    #[error("[Lake] {0}")]
    Lake(String),
}

pub type Result<T> = std::result::Result<T, Error>;
