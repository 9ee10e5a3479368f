//! Shared fixtures for provider integration tests.

#![allow(dead_code)]

use web_wallet_provider::{InMemoryLocation, Transaction, WalletProvider};

pub const WALLET_URL: &str = "http://mocked-wallet.com";
pub const RETURN_URL: &str = "http://return-to-wallet";
pub const ANOTHER_CALLBACK: &str = "http://another-callback";

pub const SENDER: &str = "moa1qyu5wthldzr8wx5c9ucg8kjagg0jfs53s8nr3zpz3hypefsdd8ssfq94h8";
pub const RECEIVER: &str = "moa1spyavw0956vq68xj8y4tenjpq2wd5a9p2c6j8gsz7ztyrnpxrruq0yu4wk";
pub const CONTRACT: &str = "moa1qqqqqqqqqqqqqpgq7ykazrzd905zvnlr88dpfw06677lxe9w0n4s36fqq8";
pub const SIGNATURE: &str = "414dcd2541ecdc1a41cafdd1ef4aff2ba7248402854478ee13c5a21968bd8dd4ab884335ea35c1404f85b0305f11df21615fecc9062e4668e74e8bb6a1e96c0d";

/// Provider whose current location is `RETURN_URL`.
pub fn provider() -> WalletProvider<InMemoryLocation> {
    provider_at(RETURN_URL)
}

pub fn provider_at(current_url: &str) -> WalletProvider<InMemoryLocation> {
    WalletProvider::new(WALLET_URL, InMemoryLocation::new(current_url))
        .expect("mocked wallet URL is valid")
}

/// Plain transfer on chain "D" without nonce, data or version.
pub fn transfer() -> Transaction {
    Transaction {
        nonce: None,
        value: "0".to_string(),
        receiver: RECEIVER.to_string(),
        sender: SENDER.to_string(),
        gas_price: 1_000_000_000,
        gas_limit: 50_000,
        data: Vec::new(),
        chain_id: "D".to_string(),
        version: None,
    }
}

/// Transfer on chain "T" with an explicit nonce.
pub fn transfer_with_nonce(nonce: u64) -> Transaction {
    Transaction {
        nonce: Some(nonce),
        chain_id: "T".to_string(),
        ..transfer()
    }
}

/// Return query the wallet produces after signing one contract call.
pub fn signed_reply(with_data: bool) -> String {
    let mut query = String::from(
        "?signSession=1693313444978\
         &nonce[0]=127\
         &value[0]=100000000000000000",
    );
    query.push_str(&format!("&receiver[0]={}&sender[0]={}", CONTRACT, SENDER));
    query.push_str("&gasPrice[0]=1000000000&gasLimit[0]=4200000");
    if with_data {
        query.push_str("&data[0]=wrapRewa");
    }
    query.push_str("&chainID[0]=D&version[0]=1");
    query.push_str(&format!(
        "&signature[0]={}&walletProviderStatus=transactionsSigned",
        SIGNATURE
    ));
    query
}
