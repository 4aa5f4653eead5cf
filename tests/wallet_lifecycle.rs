use std::fs;

use tempfile::TempDir;

use polysig::error::WalletError;
use polysig::keystore::{Keystore, KeystoreRecord};
use polysig::scheme;
use polysig::wallet::WalletManager;

const VALID: &str = "legal winner thank year wave sausage worth useful legal winner thank yellow";
const BAD_CHECKSUM: &str =
    "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon";

fn keystore_in(dir: &TempDir) -> Keystore {
    Keystore::at(dir.path().join("keystore.json"))
}

#[test]
fn create_survives_a_restart() {
    let dir = TempDir::new().unwrap();

    let mnemonic = WalletManager::generate_mnemonic();
    let mut manager = WalletManager::new(keystore_in(&dir));
    let summary = manager
        .load_from_mnemonic(&mnemonic, "ed25519", true)
        .unwrap();
    assert_eq!(summary.status, "Active");
    assert!(summary.save_error.is_none());

    // on-disk record is exactly {mnemonic, algo}
    let contents = fs::read_to_string(dir.path().join("keystore.json")).unwrap();
    let record: KeystoreRecord = serde_json::from_str(&contents).unwrap();
    assert_eq!(record.mnemonic, mnemonic);
    assert_eq!(record.algo, "ed25519");

    // a fresh manager restores the same wallet silently
    drop(manager);
    let restored = WalletManager::new(keystore_in(&dir));
    let wallet = restored.active().expect("wallet restored from keystore");
    assert_eq!(wallet.address(), summary.address);
    assert_eq!(wallet.algo(), "ed25519");
}

#[test]
fn restored_wallet_signs_verifiable_messages() {
    let dir = TempDir::new().unwrap();

    let mut manager = WalletManager::new(keystore_in(&dir));
    manager.load_from_mnemonic(VALID, "ecdsa", true).unwrap();
    drop(manager);

    let restored = WalletManager::new(keystore_in(&dir));
    let receipt = restored.sign("hello after restart").unwrap();
    assert_eq!(receipt.algorithm, "ECDSA");

    let wallet = restored.active().unwrap();
    let ecdsa = scheme::lookup("ecdsa").unwrap();
    assert!(ecdsa
        .verify(
            wallet.keypair().public_bytes(),
            "hello after restart",
            receipt.signature()
        )
        .unwrap());
}

#[test]
fn restart_address_matches_direct_derivation() {
    let dir = TempDir::new().unwrap();

    let mut manager = WalletManager::new(keystore_in(&dir));
    manager.load_from_mnemonic(VALID, "schnorr", true).unwrap();
    drop(manager);

    let restored = WalletManager::new(keystore_in(&dir));
    let schnorr = scheme::lookup("schnorr").unwrap();
    let seed = bip39::Mnemonic::parse_in(bip39::Language::English, VALID)
        .unwrap()
        .to_seed("");
    let keypair = schnorr.derive_keypair(&seed).unwrap();
    let expected = schnorr.derive_address(keypair.public_bytes()).unwrap();
    assert_eq!(restored.active().unwrap().address(), expected);
}

#[test]
fn first_run_has_no_wallet_and_cannot_sign() {
    let dir = TempDir::new().unwrap();
    let manager = WalletManager::new(keystore_in(&dir));
    assert!(manager.active().is_none());
    assert!(matches!(manager.sign("hello"), Err(WalletError::NoWallet)));
}

#[test]
fn failed_recover_writes_no_keystore() {
    let dir = TempDir::new().unwrap();
    let mut manager = WalletManager::new(keystore_in(&dir));
    let err = manager
        .load_from_mnemonic(BAD_CHECKSUM, "ecdsa", true)
        .unwrap_err();
    assert!(matches!(err, WalletError::InvalidMnemonic(_)));
    assert!(!dir.path().join("keystore.json").exists());
}

#[test]
fn corrupt_keystore_starts_empty() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("keystore.json"), "not even json").unwrap();
    let manager = WalletManager::new(keystore_in(&dir));
    assert!(manager.active().is_none());
}

#[test]
fn keystore_with_unsupported_scheme_starts_empty() {
    let dir = TempDir::new().unwrap();
    let record = KeystoreRecord {
        mnemonic: VALID.to_string(),
        algo: "dilithium".to_string(),
    };
    keystore_in(&dir).save(&record).unwrap();
    let manager = WalletManager::new(keystore_in(&dir));
    assert!(manager.active().is_none());
}

#[test]
fn recovering_under_a_new_scheme_overwrites_the_record() {
    let dir = TempDir::new().unwrap();
    let mut manager = WalletManager::new(keystore_in(&dir));
    manager.load_from_mnemonic(VALID, "ecdsa", true).unwrap();
    manager.load_from_mnemonic(VALID, "ed25519", true).unwrap();

    let contents = fs::read_to_string(dir.path().join("keystore.json")).unwrap();
    let record: KeystoreRecord = serde_json::from_str(&contents).unwrap();
    assert_eq!(record.algo, "ed25519");
}

#[test]
fn benchmark_style_loads_leave_the_keystore_untouched() {
    let dir = TempDir::new().unwrap();
    let mut manager = WalletManager::new(keystore_in(&dir));
    manager.load_from_mnemonic(VALID, "ecdsa", true).unwrap();
    let before = fs::read_to_string(dir.path().join("keystore.json")).unwrap();

    let throwaway = WalletManager::generate_mnemonic();
    for algo in scheme::SCHEME_IDS {
        manager.load_from_mnemonic(&throwaway, algo, false).unwrap();
        manager.sign("Benchmark Payload Test 12345").unwrap();
    }

    let after = fs::read_to_string(dir.path().join("keystore.json")).unwrap();
    assert_eq!(before, after);
}
