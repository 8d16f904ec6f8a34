use crate::{
    feed::ReceiptWithOutcome,
    grammar::{Field, LogLine},
    metadata::receipt_metadata,
    Result,
};
use croplog_records::{FtMint, FtMintLog, ReceiptMetadata, Transfer, TransferLog, WithdrawCrop};

/// Token layout of an `ft_mint` log: `mint <amount> <token> to <account>:<memo>`.
#[derive(Clone, Copy, Debug)]
pub struct FtMintGrammar {
    pub action: Field,
    pub amount: Field,
    pub token: Field,
    pub to: Field,
}

pub const FT_MINT: FtMintGrammar = FtMintGrammar {
    action: Field::at(0),
    amount: Field::at(1),
    token: Field::at(2),
    to: Field::at(4).trim_last(),
};

impl FtMintGrammar {
    pub fn parse(&self, line: &LogLine) -> Result<FtMintLog> {
        Ok(FtMintLog {
            action: line.text(self.action)?,
            amount: line.amount(self.amount)?,
            token: line.text(self.token)?,
            to: line.text(self.to)?,
            memo: line.memo(),
        })
    }
}

/// Token layout of an `ft_transfer_call` log:
/// `transfer <amount> from <account> to <account>:<memo>`.
#[derive(Clone, Copy, Debug)]
pub struct TransferGrammar {
    pub action: Field,
    pub amount: Field,
    pub transfer_from: Field,
    pub transfer_to: Field,
}

// transfer_to is kept untrimmed, unlike FT_MINT.to, so a memo glued to the
// recipient stays part of it.
pub const TRANSFER: TransferGrammar = TransferGrammar {
    action: Field::at(0),
    amount: Field::at(1),
    transfer_from: Field::at(3),
    transfer_to: Field::at(5),
};

impl TransferGrammar {
    pub fn parse(&self, line: &LogLine) -> Result<TransferLog> {
        Ok(TransferLog {
            action: line.text(self.action)?,
            amount: line.amount(self.amount)?,
            transfer_from: line.text(self.transfer_from)?,
            transfer_to: line.text(self.transfer_to)?,
            memo: line.memo(),
        })
    }
}

fn metadata(unit: &ReceiptWithOutcome) -> ReceiptMetadata {
    receipt_metadata(
        &unit.receipt,
        &unit.block,
        &unit.outcome,
        &unit.receipt.signer_public_key,
    )
}

fn first_log(unit: &ReceiptWithOutcome) -> Option<LogLine<'_>> {
    unit.outcome.logs.first().map(|log| LogLine::new(log))
}

pub fn withdraw_crop(unit: &ReceiptWithOutcome) -> WithdrawCrop {
    WithdrawCrop {
        metadata: metadata(unit),
    }
}

pub fn ft_mint(unit: &ReceiptWithOutcome) -> Result<FtMint> {
    let parsed = first_log(unit)
        .map(|line| FT_MINT.parse(&line))
        .transpose()?;
    Ok(FtMint {
        metadata: metadata(unit),
        parsed,
    })
}

pub fn transfer(unit: &ReceiptWithOutcome) -> Result<Transfer> {
    let parsed = first_log(unit)
        .map(|line| TRANSFER.parse(&line))
        .transpose()?;
    Ok(Transfer {
        metadata: metadata(unit),
        parsed,
    })
}
