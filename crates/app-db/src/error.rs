use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("[Diesel] {:?}", _0)]
    Diesel(#[from] diesel::result::Error),
    #[error("[Pool] {}", _0)]
    Pool(#[from] diesel::r2d2::PoolError),
    #[error("[Migration] {}", _0)]
    Migration(Box<dyn std::error::Error + Send + Sync>),
    #[error("invalid decimal {value:?}: {source}")]
    Decimal {
        value: String,
        #[source]
        source: bigdecimal::ParseBigDecimalError,
    },
}
