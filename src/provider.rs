//! Wallet provider facade.
//!
//! # Responsibilities
//! - Resolve the callback URL (explicit option or current location)
//! - Build the hook URL and navigate the user agent to it
//! - Decode the wallet reply once the user agent comes back
//!
//! Every request operation returns the URL it navigated to. Errors are
//! raised before navigation, so a failed call leaves the location untouched.

use crate::config::schema::ProviderConfig;
use crate::gateway::RedirectGateway;
use crate::protocol::encoder::{LOGIN_HOOK, LOGOUT_HOOK, SIGN_HOOK, SIGN_MESSAGE_HOOK};
use crate::protocol::{
    LoginOptions, ProviderResult, RequestEncoder, RequestOptions, ResponseDecoder,
    SignedTransaction, Transaction,
};

/// Client side of the wallet hook protocol.
#[derive(Debug)]
pub struct WalletProvider<G: RedirectGateway> {
    encoder: RequestEncoder,
    decoder: ResponseDecoder,
    gateway: G,
}

impl<G: RedirectGateway> WalletProvider<G> {
    /// Create a provider for the wallet hosted at `wallet_url`.
    pub fn new(wallet_url: &str, gateway: G) -> ProviderResult<Self> {
        Ok(Self {
            encoder: RequestEncoder::new(wallet_url)?,
            decoder: ResponseDecoder::new(),
            gateway,
        })
    }

    /// Create a provider from a loaded configuration.
    pub fn from_config(config: &ProviderConfig, gateway: G) -> ProviderResult<Self> {
        Self::new(&config.wallet.base_url, gateway)
    }

    /// Origin of the wallet application.
    pub fn wallet_url(&self) -> &str {
        self.encoder.base_url()
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Redirect to the wallet login hook.
    pub async fn login(&self, options: LoginOptions) -> ProviderResult<String> {
        let callback = self.resolve_callback(options.callback_url);
        let url = self.encoder.build_login_url(options.token.as_deref(), &callback);
        Ok(self.redirect(LOGIN_HOOK, url))
    }

    /// Redirect to the wallet logout hook.
    pub async fn logout(&self, options: RequestOptions) -> ProviderResult<String> {
        let callback = self.resolve_callback(options.callback_url);
        let url = self.encoder.build_logout_url(&callback);
        Ok(self.redirect(LOGOUT_HOOK, url))
    }

    /// Ask the wallet to sign a single transaction.
    pub async fn sign_transaction(
        &self,
        transaction: &Transaction,
        options: RequestOptions,
    ) -> ProviderResult<String> {
        self.sign_transactions(std::slice::from_ref(transaction), options).await
    }

    /// Ask the wallet to sign `transactions`, in order.
    pub async fn sign_transactions(
        &self,
        transactions: &[Transaction],
        options: RequestOptions,
    ) -> ProviderResult<String> {
        let callback = self.resolve_callback(options.callback_url);
        let url = self.encoder.build_sign_url(transactions, &callback)?;
        Ok(self.redirect(SIGN_HOOK, url))
    }

    /// Ask the wallet to sign an arbitrary message.
    pub async fn sign_message(
        &self,
        message: &str,
        options: RequestOptions,
    ) -> ProviderResult<String> {
        let callback = self.resolve_callback(options.callback_url);
        let url = self.encoder.build_sign_message_url(message, &callback);
        Ok(self.redirect(SIGN_MESSAGE_HOOK, url))
    }

    /// Signed transactions carried by the current location, if any.
    pub fn transactions_from_wallet_url(&self) -> ProviderResult<Vec<SignedTransaction>> {
        self.decoder.decode_transactions(&self.gateway.current_query())
    }

    /// Message signature carried by the current location, if any.
    pub fn message_signature_from_wallet_url(&self) -> ProviderResult<Option<String>> {
        self.decoder.decode_message_signature(&self.gateway.current_query())
    }

    fn resolve_callback(&self, explicit: Option<String>) -> String {
        explicit.unwrap_or_else(|| self.gateway.current_url())
    }

    fn redirect(&self, hook: &'static str, url: String) -> String {
        tracing::info!(hook = hook, "Redirecting to wallet");
        tracing::debug!(url = %url, "Redirect target");
        self.gateway.navigate_to(&url);
        url
    }
}
