use crate::{
    builder,
    feed::{Action, FunctionCall, ReceiptWithOutcome},
    Error, Result,
};
use croplog_records::{Record, RecordKind, Store};
use std::str::FromStr;
use strum_macros::{AsRefStr, EnumString};

/// Contract methods whose receipts are turned into records.
#[derive(AsRefStr, Clone, Copy, Debug, EnumString, PartialEq, Eq)]
pub enum Method {
    #[strum(serialize = "withdraw_crop")]
    WithdrawCrop,
    #[strum(serialize = "ft_mint")]
    FtMint,
    #[strum(serialize = "ft_transfer_call")]
    FtTransferCall,
}

impl Method {
    pub fn record_kind(&self) -> RecordKind {
        match self {
            Method::WithdrawCrop => RecordKind::WithdrawCrop,
            Method::FtMint => RecordKind::FtMint,
            Method::FtTransferCall => RecordKind::Transfer,
        }
    }

    pub fn build(&self, unit: &ReceiptWithOutcome) -> Result<Record> {
        Ok(match self {
            Method::WithdrawCrop => builder::withdraw_crop(unit).into(),
            Method::FtMint => builder::ft_mint(unit)?.into(),
            Method::FtTransferCall => builder::transfer(unit)?.into(),
        })
    }
}

/// Builds and stores one record per recognized function call, in action
/// order. Returns the number of records stored.
///
/// A malformed log aborts the receipt at the offending action; records of
/// earlier actions in the same receipt are already stored by then.
pub fn handle_receipt<S: Store>(unit: &ReceiptWithOutcome, store: &S) -> Result<usize> {
    let mut stored = 0;
    for action in &unit.receipt.actions {
        let FunctionCall { method_name, .. } = match action {
            Action::FunctionCall(function_call) => function_call,
            Action::Other(kind) => {
                log::trace!("Skipping {} action in receipt {}", kind, unit.receipt.id);
                continue;
            }
        };

        let method = match Method::from_str(method_name) {
            Ok(method) => method,
            Err(_) => {
                log::info!(
                    "Skipping unrecognized method {} in receipt {}",
                    method_name,
                    unit.receipt.id
                );
                continue;
            }
        };

        let record = method.build(unit)?;
        store
            .put(method.record_kind(), record.id(), &record)
            .map_err(|err| Error::Store(Box::new(err)))?;
        if log::log_enabled!(log::Level::Debug) {
            match serde_json::to_string(&record) {
                Ok(json) => log::debug!("Stored {} from {}: {}", record.kind(), method.as_ref(), json),
                Err(err) => log::warn!("Unable to render {} record {}: {}", record.kind(), record.id(), err),
            }
        }
        stored += 1;
    }
    Ok(stored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        feed::ActionKind,
        store::MemoryStore,
        test_utils::{function_call, receipt_with_logs, withdraw_crop},
    };

    #[test]
    fn method_names_match_exactly() {
        assert_eq!(Method::from_str("ft_mint").unwrap(), Method::FtMint);
        assert_eq!(Method::from_str("ft_transfer_call").unwrap(), Method::FtTransferCall);
        assert_eq!(Method::from_str("withdraw_crop").unwrap(), Method::WithdrawCrop);
        assert!(Method::from_str("FT_MINT").is_err());
        assert!(Method::from_str("ft_transfer").is_err());
        assert!(Method::from_str(" ft_mint").is_err());
    }

    #[test]
    fn skips_other_actions_and_unknown_methods() {
        let store = MemoryStore::new();
        let unit = receipt_with_logs(
            vec![
                Action::Other(ActionKind::Transfer),
                function_call("storage_deposit"),
                Action::Other(ActionKind::AddKey),
            ],
            &["mint 1000 tokenA to bob.near:"],
        );

        assert_eq!(handle_receipt(&unit, &store).unwrap(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn each_recognized_call_produces_its_kind() {
        let store = MemoryStore::new();
        let unit = receipt_with_logs(
            vec![
                withdraw_crop(),
                function_call("ft_transfer_call"),
                Action::Other(ActionKind::Transfer),
            ],
            &[],
        );

        assert_eq!(handle_receipt(&unit, &store).unwrap(), 2);
        let key = unit.receipt.id.to_string();
        assert!(store.get(RecordKind::WithdrawCrop, &key).is_some());
        assert!(store.get(RecordKind::Transfer, &key).is_some());
        assert!(store.get(RecordKind::FtMint, &key).is_none());
    }

    #[test]
    fn repeated_call_upserts_same_key() {
        let store = MemoryStore::new();
        let unit = receipt_with_logs(
            vec![function_call("ft_mint"), function_call("ft_mint")],
            &["mint 1000 tokenA to bob.near:"],
        );

        assert_eq!(handle_receipt(&unit, &store).unwrap(), 2);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn parse_failure_stops_at_offending_action() {
        let store = MemoryStore::new();
        let unit = receipt_with_logs(
            vec![withdraw_crop(), function_call("ft_mint"), function_call("ft_transfer_call")],
            &["mint abc tokenA to bob.near:"],
        );

        let err = handle_receipt(&unit, &store).unwrap_err();
        assert!(matches!(err, Error::InvalidAmount { .. }));
        let key = unit.receipt.id.to_string();
        assert!(store.get(RecordKind::WithdrawCrop, &key).is_some());
        assert!(store.get(RecordKind::FtMint, &key).is_none());
        assert!(store.get(RecordKind::Transfer, &key).is_none());
    }
}
