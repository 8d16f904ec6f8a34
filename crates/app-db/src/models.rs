mod ft_mints;
mod transfers;
mod withdraw_crops;

pub use ft_mints::FtMintRow;
pub use transfers::TransferRow;
pub use withdraw_crops::WithdrawCropRow;

use crate::{Error, Result};
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use std::str::FromStr;

fn decimal(value: &str) -> Result<BigDecimal> {
    BigDecimal::from_str(value).map_err(|source| Error::Decimal {
        value: value.to_string(),
        source,
    })
}

fn integer(value: &BigInt) -> BigDecimal {
    BigDecimal::new(value.clone(), 0)
}
