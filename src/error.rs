use thiserror::Error;

/// Failures surfaced by the wallet core. Expected user-facing conditions
/// (bad mnemonic, unknown scheme, signing before a wallet is loaded) are
/// variants here rather than panics so the CLI can print them and continue.
#[derive(Error, Debug)]
pub enum WalletError {
    #[error("Invalid Mnemonic Phrase: {0}")]
    InvalidMnemonic(String),

    #[error("Algorithm not supported: {0}")]
    UnsupportedAlgorithm(String),

    #[error("No wallet loaded. Use `create` or `recover` first.")]
    NoWallet,

    #[error("Invalid key material: {0}")]
    InvalidKey(String),

    #[error("Signing failed: {0}")]
    Signing(String),
}

#[derive(Error, Debug)]
pub enum KeystoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not find home directory")]
    NoHomeDir,
}
