use std::time::Instant;

use bip39::{Language, Mnemonic};
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroizing;

use crate::constants::{KEY_PREVIEW_HEAD, KEY_PREVIEW_TAIL, MNEMONIC_ENTROPY_BYTES};
use crate::error::WalletError;
use crate::keystore::{Keystore, KeystoreRecord};
use crate::scheme;
use crate::types::{redact, SigningReceipt, WalletState, WalletSummary};

/// Owns the single active wallet and drives scheme lookup, key derivation
/// and keystore persistence. Loading a wallet replaces the previous one
/// wholesale; failed loads leave the current wallet untouched.
pub struct WalletManager {
    keystore: Keystore,
    wallet: Option<WalletState>,
}

impl WalletManager {
    /// Build a manager and silently restore the persisted wallet, if any.
    /// A corrupt keystore, an unsupported scheme in the record, or a
    /// mnemonic that no longer validates leaves the manager empty: startup
    /// never fails on bad local state, it only logs.
    pub fn new(keystore: Keystore) -> Self {
        let mut manager = Self {
            keystore,
            wallet: None,
        };
        if let Some(record) = manager.keystore.load() {
            if let Err(err) = manager.load_from_mnemonic(&record.mnemonic, &record.algo, false) {
                log::warn!("persisted wallet could not be restored: {}", err);
            }
        }
        manager
    }

    /// Fresh 12-word English mnemonic from OS entropy.
    pub fn generate_mnemonic() -> String {
        let mut entropy = Zeroizing::new([0u8; MNEMONIC_ENTROPY_BYTES]);
        OsRng.fill_bytes(&mut *entropy);
        let mnemonic = Mnemonic::from_entropy_in(Language::English, &*entropy)
            .expect("16 bytes is a valid BIP-39 entropy length");
        mnemonic.to_string()
    }

    /// Validate a mnemonic, derive the keypair and address under `algo`,
    /// and make the result the active wallet. With `persist` set, the
    /// keystore is rewritten; a failed write is reported on the summary
    /// (the in-memory wallet stays valid) rather than failing the load.
    pub fn load_from_mnemonic(
        &mut self,
        phrase: &str,
        algo: &str,
        persist: bool,
    ) -> Result<WalletSummary, WalletError> {
        let mnemonic = Mnemonic::parse_in(Language::English, phrase.trim())
            .map_err(|e| WalletError::InvalidMnemonic(e.to_string()))?;
        let scheme = scheme::lookup(algo)
            .ok_or_else(|| WalletError::UnsupportedAlgorithm(algo.to_string()))?;

        let seed = Zeroizing::new(mnemonic.to_seed(""));
        let keypair = scheme.derive_keypair(&seed[..])?;
        let address = scheme.derive_address(keypair.public_bytes())?;

        let mut summary = WalletSummary {
            algorithm: algo.to_uppercase(),
            address: address.clone(),
            private_key_preview: redact(&keypair.private_hex(), KEY_PREVIEW_HEAD, KEY_PREVIEW_TAIL),
            status: "Active",
            save_error: None,
        };

        let phrase = mnemonic.to_string();
        self.wallet = Some(WalletState::new(
            algo.to_string(),
            keypair,
            address,
            phrase.clone(),
        ));

        if persist {
            let record = KeystoreRecord {
                mnemonic: phrase,
                algo: algo.to_string(),
            };
            if let Err(err) = self.keystore.save(&record) {
                log::warn!("wallet is active but could not be saved: {}", err);
                summary.save_error = Some(err.to_string());
            }
        }

        Ok(summary)
    }

    /// Sign a message with the active wallet, timing the signing call.
    pub fn sign(&self, message: &str) -> Result<SigningReceipt, WalletError> {
        let wallet = self.wallet.as_ref().ok_or(WalletError::NoWallet)?;
        let scheme = scheme::lookup(wallet.algo())
            .ok_or_else(|| WalletError::UnsupportedAlgorithm(wallet.algo().to_string()))?;

        let started = Instant::now();
        let signature = scheme.sign(wallet.keypair().private_bytes(), message)?;
        let elapsed = started.elapsed();

        Ok(SigningReceipt::new(
            message.to_string(),
            wallet.algo().to_uppercase(),
            signature,
            elapsed,
        ))
    }

    pub fn active(&self) -> Option<&WalletState> {
        self.wallet.as_ref()
    }

    pub fn keystore(&self) -> &Keystore {
        &self.keystore
    }
}
