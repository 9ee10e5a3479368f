//! Redirect-based web wallet provider.
//!
//! Builds the hook URLs a dApp redirects to (login, logout, sign) and decodes
//! the signed transactions the wallet sends back in the return URL.

pub mod config;
pub mod gateway;
pub mod observability;
pub mod protocol;
pub mod provider;

pub use config::schema::ProviderConfig;
pub use gateway::{InMemoryLocation, RedirectGateway};
pub use protocol::{
    LoginOptions, ProviderError, ProviderResult, RequestOptions, SignedTransaction, Transaction,
};
pub use provider::WalletProvider;
