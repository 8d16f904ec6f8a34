use crate::feed::{
    Action, ActionReceipt, BlockHeader, ExecutionOutcome, FunctionCall, ReceiptWithOutcome,
};
use near_lake_framework::near_indexer_primitives::CryptoHash;

pub(crate) fn function_call(method_name: &str) -> Action {
    Action::FunctionCall(FunctionCall {
        method_name: method_name.to_string(),
    })
}

pub(crate) fn withdraw_crop() -> Action {
    function_call("withdraw_crop")
}

pub(crate) fn receipt_with_logs(actions: Vec<Action>, logs: &[&str]) -> ReceiptWithOutcome {
    ReceiptWithOutcome {
        receipt: ActionReceipt {
            id: CryptoHash([7; 32]),
            predecessor_id: "alice.near".parse().unwrap(),
            receiver_id: "farm.near".parse().unwrap(),
            signer_id: "alice.near".parse().unwrap(),
            signer_public_key: vec![42; 32],
            actions,
        },
        block: BlockHeader {
            height: 64_000_000,
            hash: CryptoHash([1; 32]),
            timestamp_nanosec: 1_650_000_000_123_456_789,
        },
        outcome: ExecutionOutcome {
            id: CryptoHash([7; 32]),
            block_hash: CryptoHash([2; 32]),
            executor_id: "farm.near".parse().unwrap(),
            gas_burnt: 2_428_000_000_000,
            tokens_burnt: 242_800_000_000_000_000_000,
            logs: logs.iter().map(|log| log.to_string()).collect(),
        },
    }
}
