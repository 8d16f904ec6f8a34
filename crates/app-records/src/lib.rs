mod serde_display;
mod store;

pub use store::Store;

use num_bigint::BigInt;
use serde::Serialize;
use strum_macros::Display;

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum RecordKind {
    WithdrawCrop,
    FtMint,
    Transfer,
}

/// Fields shared by every record, taken from the receipt, its block and its outcome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptMetadata {
    pub id: String,
    pub block_time: u64,
    pub block_height: u64,
    pub block_hash: String,
    pub predecessor_id: String,
    pub receiver_id: String,
    pub signer_id: String,
    pub signer_public_key: String,
    pub gas_burned: u64,
    pub tokens_burned: String,
    pub outcome_id: String,
    pub executor_id: String,
    pub outcome_block_hash: String,
    pub log: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WithdrawCrop {
    #[serde(flatten)]
    pub metadata: ReceiptMetadata,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FtMint {
    #[serde(flatten)]
    pub metadata: ReceiptMetadata,
    /// `None` when the outcome emitted no log line.
    #[serde(flatten)]
    pub parsed: Option<FtMintLog>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FtMintLog {
    pub action: String,
    #[serde(with = "serde_display")]
    pub amount: BigInt,
    pub token: String,
    pub to: String,
    pub memo: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Transfer {
    #[serde(flatten)]
    pub metadata: ReceiptMetadata,
    /// `None` when the outcome emitted no log line.
    #[serde(flatten)]
    pub parsed: Option<TransferLog>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferLog {
    pub action: String,
    #[serde(with = "serde_display")]
    pub amount: BigInt,
    pub transfer_from: String,
    pub transfer_to: String,
    pub memo: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Record {
    WithdrawCrop(WithdrawCrop),
    FtMint(FtMint),
    Transfer(Transfer),
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::WithdrawCrop(_) => RecordKind::WithdrawCrop,
            Record::FtMint(_) => RecordKind::FtMint,
            Record::Transfer(_) => RecordKind::Transfer,
        }
    }

    pub fn metadata(&self) -> &ReceiptMetadata {
        match self {
            Record::WithdrawCrop(record) => &record.metadata,
            Record::FtMint(record) => &record.metadata,
            Record::Transfer(record) => &record.metadata,
        }
    }

    /// Receipt id in base58, the record key.
    pub fn id(&self) -> &str {
        &self.metadata().id
    }
}

impl From<WithdrawCrop> for Record {
    fn from(record: WithdrawCrop) -> Self {
        Record::WithdrawCrop(record)
    }
}

impl From<FtMint> for Record {
    fn from(record: FtMint) -> Self {
        Record::FtMint(record)
    }
}

impl From<Transfer> for Record {
    fn from(record: Transfer) -> Self {
        Record::Transfer(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn metadata(log: Option<&str>) -> ReceiptMetadata {
        ReceiptMetadata {
            id: "9Gd2QRv3Yy1dyZCGyZbZUy7Mbz8kskVPaLdo4ZvSUJGH".to_string(),
            block_time: 1_650_000_000_123,
            block_height: 64_000_000,
            block_hash: "11111111111111111111111111111111".to_string(),
            predecessor_id: "alice.near".to_string(),
            receiver_id: "farm.near".to_string(),
            signer_id: "alice.near".to_string(),
            signer_public_key: "3tgdk2wPraJzT4nsTuf86UX41xgPNk3MHnq8epARMdBN".to_string(),
            gas_burned: 2_428_000_000_000,
            tokens_burned: "242800000000000000000".to_string(),
            outcome_id: "9Gd2QRv3Yy1dyZCGyZbZUy7Mbz8kskVPaLdo4ZvSUJGH".to_string(),
            executor_id: "farm.near".to_string(),
            outcome_block_hash: "11111111111111111111111111111111".to_string(),
            log: log.map(str::to_string),
        }
    }

    #[test]
    fn ft_mint_serializes_flat_camel_case() {
        let record = Record::from(FtMint {
            metadata: metadata(Some("mint 1000 tokenA to bob.near:")),
            parsed: Some(FtMintLog {
                action: "mint".to_string(),
                amount: BigInt::from(1000),
                token: "tokenA".to_string(),
                to: "bob.near".to_string(),
                memo: None,
            }),
        });

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["blockTime"], json!(1_650_000_000_123u64));
        assert_eq!(value["signerPublicKey"], json!("3tgdk2wPraJzT4nsTuf86UX41xgPNk3MHnq8epARMdBN"));
        assert_eq!(value["amount"], json!("1000"));
        assert_eq!(value["to"], json!("bob.near"));
        assert_eq!(value["memo"], json!(null));
        assert_eq!(record.kind(), RecordKind::FtMint);
    }

    #[test]
    fn transfer_without_log_omits_parsed_fields() {
        let record = Record::from(Transfer {
            metadata: metadata(None),
            parsed: None,
        });

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["log"], json!(null));
        assert!(value.get("transferFrom").is_none());
        assert!(value.get("amount").is_none());
        assert_eq!(record.id(), "9Gd2QRv3Yy1dyZCGyZbZUy7Mbz8kskVPaLdo4ZvSUJGH");
    }

    #[test]
    fn kind_names_match_entities() {
        assert_eq!(RecordKind::Transfer.to_string(), "Transfer");
        assert_eq!(RecordKind::WithdrawCrop.to_string(), "WithdrawCrop");
    }
}
