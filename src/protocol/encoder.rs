//! Hook URL construction.
//!
//! # Responsibilities
//! - Map login, logout, sign and sign-message intents to hook URLs
//! - Emit sign families in the fixed order, one block per family
//! - Reject sign requests without transactions
//!
//! Callback resolution happens in the provider; every builder here takes
//! the already-resolved callback URL and always emits it last.

use url::Url;

use crate::protocol::query::QueryParameterSet;
use crate::protocol::types::{ProviderError, ProviderResult, Transaction, SIGN_FIELDS};

pub const LOGIN_HOOK: &str = "/hook/login";
pub const LOGOUT_HOOK: &str = "/hook/logout";
pub const SIGN_HOOK: &str = "/hook/sign";
pub const SIGN_MESSAGE_HOOK: &str = "/hook/sign-message";

pub const CALLBACK_URL_PARAM: &str = "callbackUrl";
pub const TOKEN_PARAM: &str = "token";
pub const MESSAGE_PARAM: &str = "message";

/// Builds request URLs against a fixed wallet origin.
#[derive(Debug, Clone)]
pub struct RequestEncoder {
    base_url: String,
}

impl RequestEncoder {
    /// Create an encoder for the wallet at `base_url`.
    ///
    /// The URL must be absolute without query or fragment; a trailing
    /// slash is dropped.
    pub fn new(base_url: &str) -> ProviderResult<Self> {
        let parsed = Url::parse(base_url).map_err(|e| ProviderError::InvalidWalletUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ProviderError::InvalidWalletUrl {
                url: base_url.to_string(),
                reason: "not a hierarchical URL".to_string(),
            });
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(ProviderError::InvalidWalletUrl {
                url: base_url.to_string(),
                reason: "must not carry a query or fragment".to_string(),
            });
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `/hook/login?[token=..&]callbackUrl=..`
    pub fn build_login_url(&self, token: Option<&str>, callback_url: &str) -> String {
        let mut params = QueryParameterSet::new();
        if let Some(token) = token {
            params.push_scalar(TOKEN_PARAM, token);
        }
        params.push_scalar(CALLBACK_URL_PARAM, callback_url);
        self.hook_url(LOGIN_HOOK, &params)
    }

    /// `/hook/logout?callbackUrl=..`
    pub fn build_logout_url(&self, callback_url: &str) -> String {
        let mut params = QueryParameterSet::new();
        params.push_scalar(CALLBACK_URL_PARAM, callback_url);
        self.hook_url(LOGOUT_HOOK, &params)
    }

    /// `/hook/sign` with one indexed family per transaction field.
    pub fn build_sign_url(
        &self,
        transactions: &[Transaction],
        callback_url: &str,
    ) -> ProviderResult<String> {
        if transactions.is_empty() {
            return Err(ProviderError::EmptyTransactions);
        }

        let mut params = QueryParameterSet::new();
        for field in SIGN_FIELDS {
            for tx in transactions {
                params.push_indexed(field.key(), field.encode(tx));
            }
        }
        params.push_scalar(CALLBACK_URL_PARAM, callback_url);

        tracing::debug!(transactions = transactions.len(), "Encoded sign request");

        Ok(self.hook_url(SIGN_HOOK, &params))
    }

    /// Single-transaction form; same encoding as the list form.
    pub fn build_sign_one_url(
        &self,
        transaction: &Transaction,
        callback_url: &str,
    ) -> ProviderResult<String> {
        self.build_sign_url(std::slice::from_ref(transaction), callback_url)
    }

    /// `/hook/sign-message?message=..&callbackUrl=..`
    pub fn build_sign_message_url(&self, message: &str, callback_url: &str) -> String {
        let mut params = QueryParameterSet::new();
        params.push_scalar(MESSAGE_PARAM, message);
        params.push_scalar(CALLBACK_URL_PARAM, callback_url);
        self.hook_url(SIGN_MESSAGE_HOOK, &params)
    }

    fn hook_url(&self, path: &str, params: &QueryParameterSet) -> String {
        format!("{}{}?{}", self.base_url, path, params)
    }
}
