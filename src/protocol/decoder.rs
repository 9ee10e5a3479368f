//! Wallet reply decoding.
//!
//! # Responsibilities
//! - Count signed transactions from the `nonce` family
//! - Rebuild one `SignedTransaction` per index, in index order
//! - Coerce numeric fields, failing the whole decode on bad input
//!
//! # Design Decisions
//! - No `nonce[i]` key means "nothing signed": empty list, not an error
//! - `data[i]` may be missing and reads as ""; every other field is mandatory
//! - A present `walletProviderStatus` other than `transactionsSigned` is
//!   reported as `WalletRejected` instead of decoding whatever came back
//! - `signSession` is accepted and ignored

use std::str::FromStr;

use crate::protocol::query::QueryParameterSet;
use crate::protocol::types::{ProviderError, ProviderResult, SignedTransaction, TransactionField};

pub const STATUS_PARAM: &str = "walletProviderStatus";
pub const SIGNATURE_PARAM: &str = "signature";
pub const STATUS_TRANSACTIONS_SIGNED: &str = "transactionsSigned";
pub const STATUS_MESSAGE_SIGNED: &str = "signed";

/// Decodes wallet return query strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseDecoder;

impl ResponseDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decode the signed transactions carried by `query`.
    pub fn decode_transactions(&self, query: &str) -> ProviderResult<Vec<SignedTransaction>> {
        let params = QueryParameterSet::parse(query);

        let count = params.indices(TransactionField::Nonce.key()).len();
        if count == 0 {
            return Ok(Vec::new());
        }

        check_status(&params, STATUS_TRANSACTIONS_SIGNED)?;

        let transactions = (0..count)
            .map(|index| Reply { params: &params, index }.signed_transaction())
            .collect::<ProviderResult<Vec<_>>>()?;

        tracing::debug!(count = transactions.len(), "Decoded signed transactions");
        Ok(transactions)
    }

    /// Read the signature of a sign-message reply, if any.
    pub fn decode_message_signature(&self, query: &str) -> ProviderResult<Option<String>> {
        let params = QueryParameterSet::parse(query);
        let Some(signature) = params.scalar(SIGNATURE_PARAM) else {
            return Ok(None);
        };
        check_status(&params, STATUS_MESSAGE_SIGNED)?;
        Ok(Some(signature.to_string()))
    }
}

fn check_status(params: &QueryParameterSet, expected: &str) -> ProviderResult<()> {
    match params.scalar(STATUS_PARAM) {
        Some(status) if status != expected => {
            tracing::warn!(status = %status, "Wallet reply carries a non-success status");
            Err(ProviderError::WalletRejected(status.to_string()))
        }
        _ => Ok(()),
    }
}

/// One index of a wallet reply.
struct Reply<'a> {
    params: &'a QueryParameterSet,
    index: usize,
}

impl Reply<'_> {
    fn signed_transaction(&self) -> ProviderResult<SignedTransaction> {
        Ok(SignedTransaction {
            nonce: self.number(TransactionField::Nonce)?,
            value: self.text(TransactionField::Value)?,
            receiver: self.text(TransactionField::Receiver)?,
            sender: self.text(TransactionField::Sender)?,
            gas_price: self.number(TransactionField::GasPrice)?,
            gas_limit: self.number(TransactionField::GasLimit)?,
            data: self
                .params
                .indexed(TransactionField::Data.key(), self.index)
                .unwrap_or_default()
                .to_string(),
            chain_id: self.text(TransactionField::ChainId)?,
            version: self.number(TransactionField::Version)?,
            signature: self.required(SIGNATURE_PARAM)?.to_string(),
        })
    }

    fn required(&self, field: &'static str) -> ProviderResult<&str> {
        self.params
            .indexed(field, self.index)
            .ok_or(ProviderError::MissingField {
                field,
                index: self.index,
            })
    }

    fn text(&self, field: TransactionField) -> ProviderResult<String> {
        self.required(field.key()).map(str::to_string)
    }

    fn number<T: FromStr>(&self, field: TransactionField) -> ProviderResult<T> {
        let raw = self.required(field.key())?;
        raw.parse().map_err(|_| ProviderError::InvalidNumber {
            field: field.key(),
            index: self.index,
            value: raw.to_string(),
        })
    }
}
