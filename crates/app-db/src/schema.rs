diesel::table! {
    withdraw_crops (id) {
        id -> Text,
        block_time -> Numeric,
        block_height -> Numeric,
        block_hash -> Text,
        predecessor_id -> Text,
        receiver_id -> Text,
        signer_id -> Text,
        signer_public_key -> Text,
        gas_burned -> Numeric,
        tokens_burned -> Numeric,
        outcome_id -> Text,
        executor_id -> Text,
        outcome_block_hash -> Text,
        log -> Nullable<Text>,
    }
}

diesel::table! {
    ft_mints (id) {
        id -> Text,
        block_time -> Numeric,
        block_height -> Numeric,
        block_hash -> Text,
        predecessor_id -> Text,
        receiver_id -> Text,
        signer_id -> Text,
        signer_public_key -> Text,
        gas_burned -> Numeric,
        tokens_burned -> Numeric,
        outcome_id -> Text,
        executor_id -> Text,
        outcome_block_hash -> Text,
        log -> Nullable<Text>,
        action -> Nullable<Text>,
        amount -> Nullable<Numeric>,
        token -> Nullable<Text>,
        to -> Nullable<Text>,
        memo -> Nullable<Text>,
    }
}

diesel::table! {
    transfers (id) {
        id -> Text,
        block_time -> Numeric,
        block_height -> Numeric,
        block_hash -> Text,
        predecessor_id -> Text,
        receiver_id -> Text,
        signer_id -> Text,
        signer_public_key -> Text,
        gas_burned -> Numeric,
        tokens_burned -> Numeric,
        outcome_id -> Text,
        executor_id -> Text,
        outcome_block_hash -> Text,
        log -> Nullable<Text>,
        action -> Nullable<Text>,
        amount -> Nullable<Numeric>,
        transfer_from -> Nullable<Text>,
        transfer_to -> Nullable<Text>,
        memo -> Nullable<Text>,
    }
}
