use near_lake_framework::near_indexer_primitives::{
    types::AccountId,
    views::{ActionView, BlockHeaderView, ExecutionOutcomeWithIdView, ReceiptEnumView},
    CryptoHash, IndexerExecutionOutcomeWithReceipt, IndexerShard, StreamerMessage,
};
use strum_macros::Display;

/// One unit of work: an action receipt together with the block it was
/// executed in and its execution outcome.
#[derive(Clone, Debug)]
pub struct ReceiptWithOutcome {
    pub receipt: ActionReceipt,
    pub block: BlockHeader,
    pub outcome: ExecutionOutcome,
}

#[derive(Clone, Debug)]
pub struct ActionReceipt {
    pub id: CryptoHash,
    pub predecessor_id: AccountId,
    pub receiver_id: AccountId,
    pub signer_id: AccountId,
    /// Raw key bytes, without the curve prefix.
    pub signer_public_key: Vec<u8>,
    pub actions: Vec<Action>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    FunctionCall(FunctionCall),
    Other(ActionKind),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionCall {
    pub method_name: String,
}

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionKind {
    CreateAccount,
    DeployContract,
    Transfer,
    Stake,
    AddKey,
    DeleteKey,
    DeleteAccount,
    Delegate,
}

#[derive(Clone, Copy, Debug)]
pub struct BlockHeader {
    pub height: u64,
    pub hash: CryptoHash,
    pub timestamp_nanosec: u64,
}

#[derive(Clone, Debug)]
pub struct ExecutionOutcome {
    pub id: CryptoHash,
    pub block_hash: CryptoHash,
    pub executor_id: AccountId,
    pub gas_burnt: u64,
    pub tokens_burnt: u128,
    pub logs: Vec<String>,
}

impl From<&ActionView> for Action {
    fn from(action_view: &ActionView) -> Self {
        match action_view {
            ActionView::FunctionCall { method_name, .. } => Action::FunctionCall(FunctionCall {
                method_name: method_name.clone(),
            }),
            ActionView::CreateAccount => Action::Other(ActionKind::CreateAccount),
            ActionView::DeployContract { .. } => Action::Other(ActionKind::DeployContract),
            ActionView::Transfer { .. } => Action::Other(ActionKind::Transfer),
            ActionView::Stake { .. } => Action::Other(ActionKind::Stake),
            ActionView::AddKey { .. } => Action::Other(ActionKind::AddKey),
            ActionView::DeleteKey { .. } => Action::Other(ActionKind::DeleteKey),
            ActionView::DeleteAccount { .. } => Action::Other(ActionKind::DeleteAccount),
            ActionView::Delegate { .. } => Action::Other(ActionKind::Delegate),
        }
    }
}

impl From<&BlockHeaderView> for BlockHeader {
    fn from(header: &BlockHeaderView) -> Self {
        Self {
            height: header.height,
            hash: header.hash,
            timestamp_nanosec: header.timestamp_nanosec,
        }
    }
}

impl From<&ExecutionOutcomeWithIdView> for ExecutionOutcome {
    fn from(outcome: &ExecutionOutcomeWithIdView) -> Self {
        Self {
            id: outcome.id,
            block_hash: outcome.block_hash,
            executor_id: outcome.outcome.executor_id.clone(),
            gas_burnt: outcome.outcome.gas_burnt,
            tokens_burnt: outcome.outcome.tokens_burnt,
            logs: outcome.outcome.logs.clone(),
        }
    }
}

impl ReceiptWithOutcome {
    /// Data receipts carry no actions and yield `None`.
    pub fn new(block: BlockHeader, outcome: &IndexerExecutionOutcomeWithReceipt) -> Option<Self> {
        let receipt_view = &outcome.receipt;
        if let ReceiptEnumView::Action {
            signer_id,
            signer_public_key,
            actions,
            ..
        } = &receipt_view.receipt
        {
            Some(Self {
                receipt: ActionReceipt {
                    id: receipt_view.receipt_id,
                    predecessor_id: receipt_view.predecessor_id.clone(),
                    receiver_id: receipt_view.receiver_id.clone(),
                    signer_id: signer_id.clone(),
                    signer_public_key: signer_public_key.key_data().to_vec(),
                    actions: actions.iter().map(Action::from).collect(),
                },
                block,
                outcome: ExecutionOutcome::from(&outcome.execution_outcome),
            })
        } else {
            None
        }
    }
}

/// Action receipts of a block in delivery order: shard by shard, then in the
/// order their outcomes appear within the shard.
pub fn receipts_from_message(msg: &StreamerMessage) -> impl Iterator<Item = ReceiptWithOutcome> + '_ {
    receipts_from_shards(BlockHeader::from(&msg.block.header), &msg.shards)
}

pub fn receipts_from_shards(
    block: BlockHeader,
    shards: &[IndexerShard],
) -> impl Iterator<Item = ReceiptWithOutcome> + '_ {
    shards.iter().flat_map(move |shard| {
        shard
            .receipt_execution_outcomes
            .iter()
            .filter_map(move |outcome| ReceiptWithOutcome::new(block, outcome))
    })
}
