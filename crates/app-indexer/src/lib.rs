pub mod builder;
mod dispatch;
mod error;
pub mod feed;
pub mod grammar;
mod metadata;
mod progress;
mod store;
#[cfg(test)]
mod test_utils;

pub use croplog_records::Store;
pub use dispatch::{handle_receipt, Method};
pub use error::{Error, Result};
pub use metadata::receipt_metadata;
pub use store::MemoryStore;

use croplog_core::{Config, Network};
use feed::{receipts_from_shards, BlockHeader, ReceiptWithOutcome};
use near_jsonrpc_client::JsonRpcClient;
use near_lake_framework::{
    near_indexer_primitives::{IndexerShard, StreamerMessage},
    LakeConfigBuilder,
};
use progress::Progress;

/// Streams blocks from NEAR Lake starting at `config.start_block_height` and
/// stores the records found in them. Blocks, and receipts within a block, are
/// handled one at a time in delivery order.
pub async fn start_indexing<S: Store>(config: &Config, store: &S) -> Result<()> {
    let start_block_height = config.start_block_height;
    let lake_config = match config.network {
        Network::Mainnet => LakeConfigBuilder::default()
            .mainnet()
            .start_block_height(start_block_height)
            .build(),
        Network::Testnet => LakeConfigBuilder::default()
            .testnet()
            .start_block_height(start_block_height)
            .build(),
    }
    .map_err(|err| Error::Lake(err.to_string()))?;
    let client = JsonRpcClient::connect(&config.rpc_url);

    log::info!(
        "Indexing {} from block {}{}",
        config.network,
        config.start_block_height,
        config
            .contract_id
            .as_ref()
            .map(|id| format!(" for {}", id))
            .unwrap_or_default()
    );

    let (sender, mut stream) = near_lake_framework::streamer(lake_config);
    let mut progress = Progress::new(config.progress_interval);

    while let Some(msg) = stream.recv().await {
        let stored = handle_streamer_message(&msg, config.contract_id.as_deref(), store)?;
        progress
            .observe(msg.block.header.height, stored, &client)
            .await;
    }
    drop(stream);

    sender
        .await
        .map_err(|err| Error::Lake(err.to_string()))?
        .map_err(|err| Error::Lake(err.to_string()))?;
    Ok(())
}

/// Dispatches every action receipt of one block. With `contract_id` set,
/// receipts addressed to other accounts are ignored.
pub fn handle_streamer_message<S: Store>(
    msg: &StreamerMessage,
    contract_id: Option<&str>,
    store: &S,
) -> Result<usize> {
    handle_shards(
        BlockHeader::from(&msg.block.header),
        &msg.shards,
        contract_id,
        store,
    )
}

pub fn handle_shards<S: Store>(
    block: BlockHeader,
    shards: &[IndexerShard],
    contract_id: Option<&str>,
    store: &S,
) -> Result<usize> {
    let mut stored = 0;
    for unit in receipts_from_shards(block, shards).filter(|unit| is_watched(unit, contract_id)) {
        stored += handle_receipt(&unit, store)?;
    }
    Ok(stored)
}

pub fn is_watched(unit: &ReceiptWithOutcome, contract_id: Option<&str>) -> bool {
    contract_id.map_or(true, |id| unit.receipt.receiver_id.as_str() == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::tests::{action_receipt, block, call_view, shard};
    use croplog_records::RecordKind;
    use near_lake_framework::near_indexer_primitives::CryptoHash;

    fn two_shards() -> Vec<IndexerShard> {
        vec![
            shard(
                0,
                vec![
                    action_receipt(1, "farm.near", vec![call_view("withdraw_crop")], &[]),
                    action_receipt(2, "other.near", vec![call_view("ft_mint")], &[]),
                ],
            ),
            shard(
                1,
                vec![action_receipt(
                    3,
                    "farm.near",
                    vec![call_view("ft_mint")],
                    &["mint 1000 tokenA to bob.near:"],
                )],
            ),
        ]
    }

    #[test]
    fn contract_filter_skips_other_receivers() {
        let store = MemoryStore::new();

        assert_eq!(handle_shards(block(), &two_shards(), Some("farm.near"), &store).unwrap(), 2);
        assert_eq!(store.len(), 2);
        let skipped = CryptoHash([2; 32]).to_string();
        assert!(store.get(RecordKind::FtMint, &skipped).is_none());
        let minted = CryptoHash([3; 32]).to_string();
        assert!(store.get(RecordKind::FtMint, &minted).unwrap().metadata().log.is_some());
    }

    #[test]
    fn without_contract_every_receiver_is_handled() {
        let store = MemoryStore::new();

        assert_eq!(handle_shards(block(), &two_shards(), None, &store).unwrap(), 3);
        assert!(store
            .get(RecordKind::FtMint, &CryptoHash([2; 32]).to_string())
            .is_some());
    }

    #[test]
    fn bad_log_aborts_the_block() {
        let store = MemoryStore::new();
        let shards = vec![shard(
            0,
            vec![
                action_receipt(1, "farm.near", vec![call_view("ft_mint")], &["mint abc tokenA to bob.near:"]),
                action_receipt(2, "farm.near", vec![call_view("withdraw_crop")], &[]),
            ],
        )];

        assert!(matches!(
            handle_shards(block(), &shards, None, &store),
            Err(Error::InvalidAmount { .. })
        ));
        assert!(store.is_empty());
    }
}
