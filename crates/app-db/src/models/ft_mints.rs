use super::{decimal, integer};
use crate::{schema::ft_mints, Result};
use bigdecimal::BigDecimal;
use croplog_records::FtMint;
use diesel::prelude::*;

#[derive(AsChangeset, Debug, Insertable)]
#[diesel(table_name = ft_mints, treat_none_as_null = true)]
pub struct FtMintRow {
    pub id: String,
    pub block_time: BigDecimal,
    pub block_height: BigDecimal,
    pub block_hash: String,
    pub predecessor_id: String,
    pub receiver_id: String,
    pub signer_id: String,
    pub signer_public_key: String,
    pub gas_burned: BigDecimal,
    pub tokens_burned: BigDecimal,
    pub outcome_id: String,
    pub executor_id: String,
    pub outcome_block_hash: String,
    pub log: Option<String>,
    pub action: Option<String>,
    pub amount: Option<BigDecimal>,
    pub token: Option<String>,
    pub to: Option<String>,
    pub memo: Option<String>,
}

impl FtMintRow {
    pub fn new(key: &str, record: &FtMint) -> Result<Self> {
        let metadata = &record.metadata;
        let parsed = record.parsed.as_ref();
        Ok(Self {
            id: key.to_string(),
            block_time: metadata.block_time.into(),
            block_height: metadata.block_height.into(),
            block_hash: metadata.block_hash.clone(),
            predecessor_id: metadata.predecessor_id.clone(),
            receiver_id: metadata.receiver_id.clone(),
            signer_id: metadata.signer_id.clone(),
            signer_public_key: metadata.signer_public_key.clone(),
            gas_burned: metadata.gas_burned.into(),
            tokens_burned: decimal(&metadata.tokens_burned)?,
            outcome_id: metadata.outcome_id.clone(),
            executor_id: metadata.executor_id.clone(),
            outcome_block_hash: metadata.outcome_block_hash.clone(),
            log: metadata.log.clone(),
            action: parsed.map(|log| log.action.clone()),
            amount: parsed.map(|log| integer(&log.amount)),
            token: parsed.map(|log| log.token.clone()),
            to: parsed.map(|log| log.to.clone()),
            memo: parsed.and_then(|log| log.memo.clone()),
        })
    }
}
