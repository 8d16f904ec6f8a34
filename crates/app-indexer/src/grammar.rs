//! Positional tokenizer for contract log lines.
//!
//! A log line is split on the space character and fields are picked by
//! position. The token layout is fixed per method and is not validated: a log
//! with extra or reordered words yields misassigned fields, only a missing
//! position or a non-integer amount is an error.

use crate::{Error, Result};
use num_bigint::BigInt;

/// Position of a field among the space separated tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    index: usize,
    trim_last: bool,
}

impl Field {
    pub const fn at(index: usize) -> Self {
        Self {
            index,
            trim_last: false,
        }
    }

    /// Drop the final character of the token, e.g. the `:` in `bob.near:`.
    pub const fn trim_last(self) -> Self {
        Self {
            trim_last: true,
            ..self
        }
    }
}

#[derive(Debug)]
pub struct LogLine<'a> {
    raw: &'a str,
    tokens: Vec<&'a str>,
}

impl<'a> LogLine<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            // Single spaces only, so repeated spaces keep their empty tokens.
            tokens: raw.split(' ').collect(),
        }
    }

    pub fn token(&self, field: Field) -> Result<&'a str> {
        let token = self
            .tokens
            .get(field.index)
            .copied()
            .ok_or_else(|| Error::MissingToken {
                log: self.raw.to_string(),
                index: field.index,
            })?;
        if field.trim_last {
            let mut chars = token.chars();
            chars.next_back();
            Ok(chars.as_str())
        } else {
            Ok(token)
        }
    }

    pub fn text(&self, field: Field) -> Result<String> {
        self.token(field).map(str::to_string)
    }

    pub fn amount(&self, field: Field) -> Result<BigInt> {
        let token = self.token(field)?;
        token.parse().map_err(|source| Error::InvalidAmount {
            log: self.raw.to_string(),
            token: token.to_string(),
            source,
        })
    }

    /// Text after the first `:`, minus one separating space.
    ///
    /// Only a space is dropped: `bob.near:gift` gives `gift`, any other first
    /// character is kept. A line without a colon, or with nothing after it,
    /// has no memo.
    pub fn memo(&self) -> Option<String> {
        match self.raw.split_once(':') {
            Some((_, rest)) if !rest.is_empty() => {
                Some(rest.strip_prefix(' ').unwrap_or(rest).to_string())
            }
            _ => None,
        }
    }
}
