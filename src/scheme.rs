use sha2::Sha256;
use sha3::{Digest, Keccak256};

use crate::error::WalletError;
use crate::types::Keypair;

/// Private keys are the leading 32 bytes of the BIP-39 seed under every
/// scheme. Raw truncation, not a derivation path.
const PRIVATE_KEY_BYTES: usize = 32;

/// Capability contract shared by every supported signature scheme.
///
/// Each implementation hides its own pre-signing hash convention and
/// address-encoding rule behind this interface, so callers select a scheme
/// once and never branch on its identity again. The set of schemes is
/// closed; see [`lookup`].
pub trait SignatureScheme {
    /// Stable lowercase identifier, used as the CLI and on-disk selector.
    fn id(&self) -> &'static str;

    /// Derive a keypair from a seed of at least 32 bytes. Deterministic.
    fn derive_keypair(&self, seed: &[u8]) -> Result<Keypair, WalletError>;

    /// Encode the chain-specific address for a public key produced by
    /// [`SignatureScheme::derive_keypair`].
    fn derive_address(&self, public_key: &[u8]) -> Result<String, WalletError>;

    /// Sign a UTF-8 message under this scheme's canonical pre-hash rule,
    /// returning the serialized signature as lowercase hex.
    fn sign(&self, private_key: &[u8], message: &str) -> Result<String, WalletError>;

    /// Check a signature produced by [`SignatureScheme::sign`] against the
    /// corresponding public key. `Ok(false)` means a well-formed signature
    /// that does not match; malformed inputs are errors.
    fn verify(
        &self,
        public_key: &[u8],
        message: &str,
        signature_hex: &str,
    ) -> Result<bool, WalletError>;
}

pub const SCHEME_IDS: [&str; 3] = ["ecdsa", "ed25519", "schnorr"];

/// Fixed scheme registry. Unknown identifiers are a normal, caller-visible
/// miss (user typo or an unsupported algorithm in an old keystore).
pub fn lookup(id: &str) -> Option<&'static dyn SignatureScheme> {
    match id {
        "ecdsa" => Some(&EcdsaEthereum),
        "ed25519" => Some(&Ed25519),
        "schnorr" => Some(&SchnorrTaproot),
        _ => None,
    }
}

fn key_material(seed: &[u8]) -> Result<[u8; 32], WalletError> {
    if seed.len() < PRIVATE_KEY_BYTES {
        return Err(WalletError::InvalidKey(format!(
            "seed must be at least {} bytes, got {}",
            PRIVATE_KEY_BYTES,
            seed.len()
        )));
    }
    let mut out = [0u8; 32];
    out.copy_from_slice(&seed[..PRIVATE_KEY_BYTES]);
    Ok(out)
}

/// ECDSA over secp256k1 with Ethereum conventions: Keccak-256 message
/// hashing, recoverable 65-byte signatures, EIP-55 checksummed addresses.
pub struct EcdsaEthereum;

impl SignatureScheme for EcdsaEthereum {
    fn id(&self) -> &'static str {
        "ecdsa"
    }

    fn derive_keypair(&self, seed: &[u8]) -> Result<Keypair, WalletError> {
        use k256::ecdsa::SigningKey;
        let secret = key_material(seed)?;
        let signing_key = SigningKey::from_slice(&secret)
            .map_err(|e| WalletError::InvalidKey(e.to_string()))?;
        let public = signing_key
            .verifying_key()
            .to_encoded_point(true)
            .as_bytes()
            .to_vec();
        Ok(Keypair::new(secret, public))
    }

    fn derive_address(&self, public_key: &[u8]) -> Result<String, WalletError> {
        use k256::ecdsa::VerifyingKey;
        let verifying_key = VerifyingKey::from_sec1_bytes(public_key)
            .map_err(|e| WalletError::InvalidKey(e.to_string()))?;
        let uncompressed = verifying_key.to_encoded_point(false);
        // last 20 bytes of Keccak-256 over the key without its 0x04 prefix
        let hash: [u8; 32] = Keccak256::digest(&uncompressed.as_bytes()[1..]).into();
        Ok(checksum_address(&hash[12..]))
    }

    fn sign(&self, private_key: &[u8], message: &str) -> Result<String, WalletError> {
        use k256::ecdsa::SigningKey;
        let signing_key = SigningKey::from_slice(private_key)
            .map_err(|e| WalletError::InvalidKey(e.to_string()))?;
        let digest: [u8; 32] = Keccak256::digest(message.as_bytes()).into();
        let (signature, recovery_id) = signing_key
            .sign_prehash_recoverable(&digest)
            .map_err(|e| WalletError::Signing(e.to_string()))?;
        let mut bytes = signature.to_bytes().to_vec();
        bytes.push(recovery_id.to_byte());
        Ok(hex::encode(bytes))
    }

    fn verify(
        &self,
        public_key: &[u8],
        message: &str,
        signature_hex: &str,
    ) -> Result<bool, WalletError> {
        use k256::ecdsa::signature::hazmat::PrehashVerifier;
        use k256::ecdsa::{Signature, VerifyingKey};
        let bytes =
            hex::decode(signature_hex).map_err(|e| WalletError::Signing(e.to_string()))?;
        if bytes.len() != 65 {
            return Err(WalletError::Signing(format!(
                "expected 65-byte recoverable signature, got {} bytes",
                bytes.len()
            )));
        }
        let signature = Signature::from_slice(&bytes[..64])
            .map_err(|e| WalletError::Signing(e.to_string()))?;
        let verifying_key = VerifyingKey::from_sec1_bytes(public_key)
            .map_err(|e| WalletError::InvalidKey(e.to_string()))?;
        let digest: [u8; 32] = Keccak256::digest(message.as_bytes()).into();
        Ok(verifying_key.verify_prehash(&digest, &signature).is_ok())
    }
}

/// EIP-55 mixed-case checksum over a 20-byte address.
fn checksum_address(raw: &[u8]) -> String {
    let hex_addr = hex::encode(raw);
    let hash: [u8; 32] = Keccak256::digest(hex_addr.as_bytes()).into();
    let mut out = String::with_capacity(2 + hex_addr.len());
    out.push_str("0x");
    for (i, c) in hex_addr.chars().enumerate() {
        let nibble = if i % 2 == 0 {
            hash[i / 2] >> 4
        } else {
            hash[i / 2] & 0x0f
        };
        if nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Ed25519. The primitive hashes internally, so messages are signed raw;
/// the address is the bare public key in hex.
pub struct Ed25519;

impl SignatureScheme for Ed25519 {
    fn id(&self) -> &'static str {
        "ed25519"
    }

    fn derive_keypair(&self, seed: &[u8]) -> Result<Keypair, WalletError> {
        use ed25519_dalek::SigningKey;
        let secret = key_material(seed)?;
        let signing_key = SigningKey::from_bytes(&secret);
        let public = signing_key.verifying_key().to_bytes().to_vec();
        Ok(Keypair::new(secret, public))
    }

    fn derive_address(&self, public_key: &[u8]) -> Result<String, WalletError> {
        if public_key.len() != 32 {
            return Err(WalletError::InvalidKey(format!(
                "expected 32-byte public key, got {} bytes",
                public_key.len()
            )));
        }
        Ok(hex::encode(public_key))
    }

    fn sign(&self, private_key: &[u8], message: &str) -> Result<String, WalletError> {
        use ed25519_dalek::{Signer, SigningKey};
        let secret: [u8; 32] = private_key
            .try_into()
            .map_err(|_| WalletError::InvalidKey("expected 32-byte private key".into()))?;
        let signing_key = SigningKey::from_bytes(&secret);
        let signature = signing_key.sign(message.as_bytes());
        Ok(hex::encode(signature.to_bytes()))
    }

    fn verify(
        &self,
        public_key: &[u8],
        message: &str,
        signature_hex: &str,
    ) -> Result<bool, WalletError> {
        use ed25519_dalek::{Signature, Verifier, VerifyingKey};
        let public: [u8; 32] = public_key
            .try_into()
            .map_err(|_| WalletError::InvalidKey("expected 32-byte public key".into()))?;
        let verifying_key = VerifyingKey::from_bytes(&public)
            .map_err(|e| WalletError::InvalidKey(e.to_string()))?;
        let bytes =
            hex::decode(signature_hex).map_err(|e| WalletError::Signing(e.to_string()))?;
        let signature = Signature::from_slice(&bytes)
            .map_err(|e| WalletError::Signing(e.to_string()))?;
        Ok(verifying_key.verify(message.as_bytes(), &signature).is_ok())
    }
}

/// BIP-340 Schnorr over secp256k1. Messages are hashed to a 32-byte SHA-256
/// digest here, and the primitive signs the digest as-is; addresses follow
/// the Taproot output-key convention (x-only, parity byte stripped).
pub struct SchnorrTaproot;

impl SignatureScheme for SchnorrTaproot {
    fn id(&self) -> &'static str {
        "schnorr"
    }

    fn derive_keypair(&self, seed: &[u8]) -> Result<Keypair, WalletError> {
        use secp256k1::{Keypair as SecpKeypair, PublicKey, Secp256k1};
        let secret = key_material(seed)?;
        let secp = Secp256k1::new();
        let keypair = SecpKeypair::from_seckey_slice(&secp, &secret)
            .map_err(|e| WalletError::InvalidKey(e.to_string()))?;
        let public = PublicKey::from_keypair(&keypair).serialize().to_vec();
        Ok(Keypair::new(secret, public))
    }

    fn derive_address(&self, public_key: &[u8]) -> Result<String, WalletError> {
        if public_key.len() != 33 {
            return Err(WalletError::InvalidKey(format!(
                "expected 33-byte compressed public key, got {} bytes",
                public_key.len()
            )));
        }
        Ok(hex::encode(&public_key[1..]))
    }

    fn sign(&self, private_key: &[u8], message: &str) -> Result<String, WalletError> {
        use secp256k1::{Keypair as SecpKeypair, Message, Secp256k1};
        let secp = Secp256k1::new();
        let keypair = SecpKeypair::from_seckey_slice(&secp, private_key)
            .map_err(|e| WalletError::InvalidKey(e.to_string()))?;
        let digest: [u8; 32] = Sha256::digest(message.as_bytes()).into();
        let signature = secp.sign_schnorr(&Message::from_digest(digest), &keypair);
        Ok(hex::encode(signature.serialize()))
    }

    fn verify(
        &self,
        public_key: &[u8],
        message: &str,
        signature_hex: &str,
    ) -> Result<bool, WalletError> {
        use secp256k1::{schnorr, Message, PublicKey, Secp256k1};
        let secp = Secp256k1::new();
        let (x_only, _parity) = PublicKey::from_slice(public_key)
            .map_err(|e| WalletError::InvalidKey(e.to_string()))?
            .x_only_public_key();
        let bytes =
            hex::decode(signature_hex).map_err(|e| WalletError::Signing(e.to_string()))?;
        let signature = schnorr::Signature::from_slice(&bytes)
            .map_err(|e| WalletError::Signing(e.to_string()))?;
        let digest: [u8; 32] = Sha256::digest(message.as_bytes()).into();
        Ok(secp
            .verify_schnorr(&signature, &Message::from_digest(digest), &x_only)
            .is_ok())
    }
}
