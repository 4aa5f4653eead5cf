//! # polysig
//!
//! Seed-phrase wallet CLI that derives keys and signs messages under one of
//! several signature schemes. A BIP-39 mnemonic is the only secret: keys
//! and the chain-specific address are re-derived from it on every load, and
//! the active wallet (mnemonic plus scheme choice) is saved to
//! `~/.polysig/keystore.json` for reuse across invocations.
//!
//! Supported schemes, selected with `--algo`:
//!
//! - `ecdsa`: ECDSA over secp256k1 with Ethereum conventions (Keccak-256
//!   message hashing, EIP-55 checksummed `0x...` addresses, recoverable
//!   signatures)
//! - `ed25519`: Ed25519 with the raw public key hex as the address
//! - `schnorr`: BIP-340 Schnorr over secp256k1 with SHA-256 message
//!   hashing and Taproot-style x-only addresses
//!
//! All three schemes use the leading 32 bytes of the seed as the private
//! key. There is no BIP-32/44 path derivation and no multi-account support;
//! the keystore holds exactly one wallet and is written in plaintext.
//!
//! ## Usage
//!
//! ```bash
//! # Create a new wallet (prints the secret phrase, then saves it)
//! cargo run -- create --algo ed25519
//!
//! # Recover an existing wallet from its phrase
//! cargo run -- recover --words "legal winner thank year ..." --algo ecdsa
//!
//! # Sign a message with the saved wallet
//! cargo run -- sign "hello world"
//!
//! # Show the active scheme and address
//! cargo run -- info
//!
//! # Compare derivation/signing speed across all schemes
//! cargo run -- benchmark
//! ```
//!
//! Diagnostics go through `log`; set `RUST_LOG=debug` for verbose output.

pub mod commands;
pub mod constants;
pub mod error;
pub mod keystore;
pub mod ops;
pub mod scheme;
pub mod types;
pub mod wallet;
