//! Wallet hook protocol.
//!
//! # Data Flow
//! ```text
//! Transaction(s) + options
//!     → encoder.rs (indexed families, fixed order)
//!     → query.rs (QueryParameterSet → query string)
//!     → hook URL on the wallet origin
//!
//! Return URL query string
//!     → query.rs (parse into QueryParameterSet)
//!     → decoder.rs (per-index records, type coercion)
//!     → Vec<SignedTransaction>
//! ```
//!
//! # Design Decisions
//! - Family order is a single constant shared by encoder and decoder
//! - Defaults (nonce 0, data "", version 2) are applied while encoding,
//!   the `Transaction` record is never modified
//! - Business validity (nonces, balances, gas) is never checked here

pub mod decoder;
pub mod encoder;
pub mod query;
pub mod types;

pub use decoder::ResponseDecoder;
pub use encoder::RequestEncoder;
pub use query::QueryParameterSet;
pub use types::{
    LoginOptions, ProviderError, ProviderResult, RequestOptions, SignedTransaction, Transaction,
    TransactionField, SIGN_FIELDS,
};
