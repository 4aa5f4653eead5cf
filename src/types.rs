use std::time::Duration;

use zeroize::Zeroizing;

use crate::constants::{SIG_PREVIEW_HEAD, SIG_PREVIEW_TAIL};

/// Scheme-specific keypair. All supported schemes key off a raw 32-byte
/// scalar; the public half keeps whatever compressed encoding the scheme's
/// primitive produces (33 bytes for the secp256k1 schemes, 32 for Ed25519).
pub struct Keypair {
    private: Zeroizing<[u8; 32]>,
    public: Vec<u8>,
}

impl Keypair {
    pub fn new(private: [u8; 32], public: Vec<u8>) -> Self {
        Self {
            private: Zeroizing::new(private),
            public,
        }
    }

    pub fn private_bytes(&self) -> &[u8; 32] {
        &self.private
    }

    pub fn public_bytes(&self) -> &[u8] {
        &self.public
    }

    /// Full private key hex. Callers are expected to redact before display.
    pub fn private_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(&self.private[..]))
    }

    pub fn public_hex(&self) -> String {
        hex::encode(&self.public)
    }
}

/// The single active wallet. Address and public key always come out of the
/// same derivation pass as the private key; there is no way to construct
/// this type with independently supplied parts.
pub struct WalletState {
    algo: String,
    keypair: Keypair,
    address: String,
    mnemonic: Zeroizing<String>,
}

impl WalletState {
    pub fn new(algo: String, keypair: Keypair, address: String, mnemonic: String) -> Self {
        Self {
            algo,
            keypair,
            address,
            mnemonic: Zeroizing::new(mnemonic),
        }
    }

    pub fn algo(&self) -> &str {
        &self.algo
    }

    pub fn keypair(&self) -> &Keypair {
        &self.keypair
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn mnemonic(&self) -> &str {
        &self.mnemonic
    }

    pub fn private_key_hex(&self) -> Zeroizing<String> {
        self.keypair.private_hex()
    }
}

/// Display-safe wallet summary: never carries the full private key.
#[derive(Debug, Clone)]
pub struct WalletSummary {
    pub algorithm: String,
    pub address: String,
    pub private_key_preview: String,
    pub status: &'static str,
    /// Set when the in-memory load succeeded but the keystore write failed.
    pub save_error: Option<String>,
}

/// Outcome of a signing operation. The full signature is kept and reachable
/// through [`SigningReceipt::signature`]; the preview is presentation only.
pub struct SigningReceipt {
    pub message: String,
    pub algorithm: String,
    signature: String,
    pub elapsed: Duration,
}

impl SigningReceipt {
    pub fn new(message: String, algorithm: String, signature: String, elapsed: Duration) -> Self {
        Self {
            message,
            algorithm,
            signature,
            elapsed,
        }
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    pub fn signature_preview(&self) -> String {
        redact(&self.signature, SIG_PREVIEW_HEAD, SIG_PREVIEW_TAIL)
    }

    pub fn elapsed_micros(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000_000.0
    }
}

/// Keep the first `head` and last `tail` characters, eliding the middle.
/// Values short enough to survive intact are returned unchanged.
pub fn redact(value: &str, head: usize, tail: usize) -> String {
    if value.len() <= head + tail {
        return value.to_string();
    }
    format!("{}...{}", &value[..head], &value[value.len() - tail..])
}
