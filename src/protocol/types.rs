//! Transaction records, request options and error definitions.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Version written for transactions that do not carry one.
pub const DEFAULT_TRANSACTION_VERSION: u32 = 2;

/// A transaction as built by the caller, before the wallet signs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Account nonce; encoded as 0 when unset.
    #[serde(default)]
    pub nonce: Option<u64>,
    /// Amount as a decimal string.
    pub value: String,
    pub receiver: String,
    pub sender: String,
    pub gas_price: u64,
    pub gas_limit: u64,
    /// Payload bytes (JSON form is a UTF-8 string).
    #[serde(
        default,
        serialize_with = "data_as_text",
        deserialize_with = "data_from_text"
    )]
    pub data: Vec<u8>,
    #[serde(rename = "chainID")]
    pub chain_id: String,
    /// Transaction version; encoded as 2 when unset.
    #[serde(default)]
    pub version: Option<u32>,
}

impl Transaction {
    /// Payload as text, replacing invalid UTF-8 sequences.
    pub fn data_text(&self) -> String {
        String::from_utf8_lossy(&self.data).into_owned()
    }
}

fn data_as_text<S: Serializer>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&String::from_utf8_lossy(data))
}

fn data_from_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
    let text = Option::<String>::deserialize(deserializer)?;
    Ok(text.map(String::into_bytes).unwrap_or_default())
}

/// A transaction returned by the wallet together with its signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedTransaction {
    pub nonce: u64,
    pub value: String,
    pub receiver: String,
    pub sender: String,
    pub gas_price: u64,
    pub gas_limit: u64,
    pub data: String,
    #[serde(rename = "chainID")]
    pub chain_id: String,
    pub version: u32,
    /// Hex-encoded signature produced by the wallet.
    pub signature: String,
}

/// Options shared by logout, sign and sign-message requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Where the wallet sends the user back; defaults to the current location.
    pub callback_url: Option<String>,
}

impl RequestOptions {
    pub fn with_callback(callback_url: impl Into<String>) -> Self {
        Self {
            callback_url: Some(callback_url.into()),
        }
    }
}

/// Options for the login request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginOptions {
    pub callback_url: Option<String>,
    /// Opaque token the wallet signs together with the address.
    pub token: Option<String>,
}

/// Indexed parameter families of a sign request, by wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionField {
    Nonce,
    Value,
    Receiver,
    Sender,
    GasPrice,
    GasLimit,
    Data,
    ChainId,
    Version,
}

/// Canonical family order of `/hook/sign` and of the wallet reply.
pub const SIGN_FIELDS: [TransactionField; 9] = [
    TransactionField::Nonce,
    TransactionField::Value,
    TransactionField::Receiver,
    TransactionField::Sender,
    TransactionField::GasPrice,
    TransactionField::GasLimit,
    TransactionField::Data,
    TransactionField::ChainId,
    TransactionField::Version,
];

impl TransactionField {
    /// Query parameter base name.
    pub fn key(self) -> &'static str {
        match self {
            Self::Nonce => "nonce",
            Self::Value => "value",
            Self::Receiver => "receiver",
            Self::Sender => "sender",
            Self::GasPrice => "gasPrice",
            Self::GasLimit => "gasLimit",
            Self::Data => "data",
            Self::ChainId => "chainID",
            Self::Version => "version",
        }
    }

    /// Render the field of `tx`, applying the encoding defaults.
    pub fn encode(self, tx: &Transaction) -> String {
        match self {
            Self::Nonce => tx.nonce.unwrap_or(0).to_string(),
            Self::Value => tx.value.clone(),
            Self::Receiver => tx.receiver.clone(),
            Self::Sender => tx.sender.clone(),
            Self::GasPrice => tx.gas_price.to_string(),
            Self::GasLimit => tx.gas_limit.to_string(),
            Self::Data => tx.data_text(),
            Self::ChainId => tx.chain_id.clone(),
            Self::Version => tx.version.unwrap_or(DEFAULT_TRANSACTION_VERSION).to_string(),
        }
    }
}

/// Errors raised while building requests or decoding wallet replies.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProviderError {
    /// The configured wallet origin is not an absolute URL.
    #[error("Invalid wallet URL '{url}': {reason}")]
    InvalidWalletUrl { url: String, reason: String },

    /// A sign request needs at least one transaction.
    #[error("Cannot sign an empty list of transactions")]
    EmptyTransactions,

    /// A mandatory indexed field is absent from the wallet reply.
    #[error("Malformed wallet reply: missing {field}[{index}]")]
    MissingField { field: &'static str, index: usize },

    /// A numeric field of the wallet reply is not an integer.
    #[error("Malformed wallet reply: {field}[{index}] is not an integer: '{value}'")]
    InvalidNumber {
        field: &'static str,
        index: usize,
        value: String,
    },

    /// The wallet reported a status other than success.
    #[error("Wallet did not sign: status '{0}'")]
    WalletRejected(String),
}

/// Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn transfer() -> Transaction {
        Transaction {
            nonce: None,
            value: "0".to_string(),
            receiver: "moa1receiver".to_string(),
            sender: "moa1sender".to_string(),
            gas_price: 1_000_000_000,
            gas_limit: 50_000,
            data: Vec::new(),
            chain_id: "D".to_string(),
            version: None,
        }
    }

    #[test]
    fn test_encode_defaults() {
        let tx = transfer();
        assert_eq!(TransactionField::Nonce.encode(&tx), "0");
        assert_eq!(TransactionField::Data.encode(&tx), "");
        assert_eq!(TransactionField::Version.encode(&tx), "2");
    }

    #[test]
    fn test_encode_explicit_values() {
        let tx = Transaction {
            nonce: Some(7),
            data: b"hello".to_vec(),
            version: Some(1),
            ..transfer()
        };
        assert_eq!(TransactionField::Nonce.encode(&tx), "7");
        assert_eq!(TransactionField::Data.encode(&tx), "hello");
        assert_eq!(TransactionField::Version.encode(&tx), "1");
        assert_eq!(TransactionField::GasPrice.encode(&tx), "1000000000");
    }

    #[test]
    fn test_sign_field_keys_in_wire_order() {
        let keys: Vec<_> = SIGN_FIELDS.iter().map(|f| f.key()).collect();
        assert_eq!(
            keys,
            [
                "nonce", "value", "receiver", "sender", "gasPrice", "gasLimit", "data", "chainID",
                "version"
            ]
        );
    }

    #[test]
    fn test_transaction_json_uses_wire_names() {
        let json = r#"{
            "nonce": 42,
            "value": "10",
            "receiver": "moa1receiver",
            "sender": "moa1sender",
            "gasPrice": 1000000000,
            "gasLimit": 70000,
            "data": "ping",
            "chainID": "T"
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.nonce, Some(42));
        assert_eq!(tx.data, b"ping".to_vec());
        assert_eq!(tx.chain_id, "T");
        assert_eq!(tx.version, None);
    }

    #[test]
    fn test_signed_transaction_field_order() {
        let signed = SignedTransaction {
            nonce: 1,
            value: "0".into(),
            receiver: "r".into(),
            sender: "s".into(),
            gas_price: 2,
            gas_limit: 3,
            data: String::new(),
            chain_id: "D".into(),
            version: 1,
            signature: "ab".into(),
        };
        assert_eq!(
            serde_json::to_string(&signed).unwrap(),
            r#"{"nonce":1,"value":"0","receiver":"r","sender":"s","gasPrice":2,"gasLimit":3,"data":"","chainID":"D","version":1,"signature":"ab"}"#
        );
    }

    #[test]
    fn test_signed_transaction_from_json() {
        let json = r#"[{
            "nonce": 127,
            "value": "100000000000000000",
            "receiver": "moa1contract",
            "sender": "moa1sender",
            "gasPrice": 1000000000,
            "gasLimit": 4200000,
            "data": "wrapRewa",
            "chainID": "D",
            "version": 1,
            "signature": "414dcd25"
        }]"#;
        let signed: Vec<SignedTransaction> = serde_json::from_str(json).unwrap();
        assert_eq!(signed.len(), 1);
        assert_eq!(signed[0].chain_id, "D");
        assert_eq!(signed[0].gas_limit, 4_200_000);
        assert_eq!(signed[0].signature, "414dcd25");

        let again: Vec<SignedTransaction> =
            serde_json::from_str(&serde_json::to_string(&signed).unwrap()).unwrap();
        assert_eq!(again, signed);

        let mut unsigned: serde_json::Value = serde_json::from_str(json).unwrap();
        unsigned[0].as_object_mut().unwrap().remove("signature");
        assert!(serde_json::from_value::<Vec<SignedTransaction>>(unsigned).is_err());
    }

    #[test]
    fn test_error_display() {
        let err = ProviderError::MissingField {
            field: "sender",
            index: 1,
        };
        assert_eq!(err.to_string(), "Malformed wallet reply: missing sender[1]");

        let err = ProviderError::InvalidNumber {
            field: "nonce",
            index: 0,
            value: "abc".into(),
        };
        assert!(err.to_string().contains("'abc'"));
    }
}
