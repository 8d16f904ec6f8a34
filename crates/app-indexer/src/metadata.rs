use crate::feed::{ActionReceipt, BlockHeader, ExecutionOutcome};
use croplog_records::ReceiptMetadata;

const NANOS_PER_MILLI: u64 = 1_000_000;

pub fn receipt_metadata(
    receipt: &ActionReceipt,
    block: &BlockHeader,
    outcome: &ExecutionOutcome,
    signer_public_key: &[u8],
) -> ReceiptMetadata {
    ReceiptMetadata {
        id: receipt.id.to_string(),
        block_time: block.timestamp_nanosec / NANOS_PER_MILLI,
        block_height: block.height,
        block_hash: block.hash.to_string(),
        predecessor_id: receipt.predecessor_id.to_string(),
        receiver_id: receipt.receiver_id.to_string(),
        signer_id: receipt.signer_id.to_string(),
        signer_public_key: bs58::encode(signer_public_key).into_string(),
        gas_burned: outcome.gas_burnt,
        tokens_burned: outcome.tokens_burnt.to_string(),
        outcome_id: outcome.id.to_string(),
        executor_id: outcome.executor_id.to_string(),
        outcome_block_hash: outcome.block_hash.to_string(),
        log: outcome.logs.first().cloned(),
    }
}
