//! Command-line front end for the web wallet provider.
//!
//! Prints the hook URL a dApp would redirect to, or decodes a wallet
//! return URL into signed transactions.

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use web_wallet_provider::config::{load_config, ProviderConfig};
use web_wallet_provider::observability::init_logging;
use web_wallet_provider::{
    InMemoryLocation, LoginOptions, RedirectGateway, RequestOptions, Transaction, WalletProvider,
};

#[derive(Parser)]
#[command(name = "web-wallet-provider")]
#[command(about = "Build web wallet hook URLs and decode wallet replies", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Wallet origin, overrides `wallet.base_url`.
    #[arg(short, long)]
    wallet_url: Option<String>,

    /// Location the request is made from; default callback URL.
    #[arg(long)]
    current_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the login redirect
    Login {
        #[arg(long)]
        token: Option<String>,
        #[arg(long)]
        callback_url: Option<String>,
    },
    /// Build the logout redirect
    Logout {
        #[arg(long)]
        callback_url: Option<String>,
    },
    /// Build the sign redirect from a JSON file (one transaction or an array)
    Sign {
        file: PathBuf,
        #[arg(long)]
        callback_url: Option<String>,
    },
    /// Build the sign-message redirect
    SignMessage {
        message: String,
        #[arg(long)]
        callback_url: Option<String>,
    },
    /// Decode the signed transactions of a wallet return URL
    Decode { return_url: String },
    /// Print the message signature of a wallet return URL
    DecodeMessage { return_url: String },
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum TransactionInput {
    Many(Vec<Transaction>),
    One(Transaction),
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ProviderConfig::default(),
    };
    if let Some(wallet_url) = cli.wallet_url {
        config.wallet.base_url = wallet_url;
    }

    init_logging(&config.observability.log_level);

    let current_url = cli
        .current_url
        .or_else(|| config.wallet.callback_url.clone())
        .unwrap_or_else(|| "http://localhost".to_string());

    tracing::debug!(
        wallet_url = %config.wallet.base_url,
        current_url = %current_url,
        "Configuration loaded"
    );

    let provider = WalletProvider::from_config(&config, InMemoryLocation::new(current_url))?;

    match cli.command {
        Commands::Login {
            token,
            callback_url,
        } => {
            let url = provider.login(LoginOptions { callback_url, token }).await?;
            println!("{}", url);
        }
        Commands::Logout { callback_url } => {
            let url = provider.logout(RequestOptions { callback_url }).await?;
            println!("{}", url);
        }
        Commands::Sign { file, callback_url } => {
            let content = fs::read_to_string(&file)?;
            let transactions = match serde_json::from_str(&content)? {
                TransactionInput::Many(txs) => txs,
                TransactionInput::One(tx) => vec![tx],
            };
            let url = provider
                .sign_transactions(&transactions, RequestOptions { callback_url })
                .await?;
            println!("{}", url);
        }
        Commands::SignMessage {
            message,
            callback_url,
        } => {
            let url = provider.sign_message(&message, RequestOptions { callback_url }).await?;
            println!("{}", url);
        }
        Commands::Decode { return_url } => {
            provider.gateway().navigate_to(&return_url);
            let transactions = provider.transactions_from_wallet_url()?;
            println!("{}", serde_json::to_string_pretty(&transactions)?);
        }
        Commands::DecodeMessage { return_url } => {
            provider.gateway().navigate_to(&return_url);
            match provider.message_signature_from_wallet_url()? {
                Some(signature) => println!("{}", signature),
                None => eprintln!("No message signature in {}", return_url),
            }
        }
    }

    Ok(())
}
