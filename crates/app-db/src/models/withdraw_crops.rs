use super::decimal;
use crate::{schema::withdraw_crops, Result};
use bigdecimal::BigDecimal;
use croplog_records::WithdrawCrop;
use diesel::prelude::*;

#[derive(AsChangeset, Debug, Insertable)]
#[diesel(table_name = withdraw_crops, treat_none_as_null = true)]
pub struct WithdrawCropRow {
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
}

impl WithdrawCropRow {
    pub fn new(key: &str, record: &WithdrawCrop) -> Result<Self> {
        let metadata = &record.metadata;
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
        })
    }
}
