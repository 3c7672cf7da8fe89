use crate::error::CryptoError;
use crate::pair::KeyPair;
use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Key, Nonce,
};
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{Output, SaltString};
use argon2::{Argon2, PasswordHasher};
use rand::RngCore;
use seedkey_types::{Address, KeyPairType};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use zeroize::Zeroizing;

pub const KEYSTORE_VERSION: u32 = 1;

/// Encrypted keystore file format.
/// Uses argon2id for key derivation, AES-256-GCM for encryption.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct KeystoreFile {
    pub version: u32,  // 1
    pub id: String,    // UUID
    pub address: String,
    pub key_type: KeyPairType,
    pub crypto: KeystoreCrypto,
    pub meta: KeystoreMeta,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct KeystoreCrypto {
    pub cipher: String,         // "aes-256-gcm"
    pub ciphertext: String,     // hex
    pub cipherparams: CipherParams,
    pub kdf: String,            // "argon2id"
    pub kdfparams: KdfParams,
    pub mac: String,            // hex, blake3(derived_key[16..32] || ciphertext)
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CipherParams {
    pub iv: String,  // hex, 12 bytes nonce
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct KdfParams {
    pub salt: String,           // b64
    pub parallelism: u32,       // 4
    pub memory_cost: u32,       // 65536 (64 MB)
    pub time_cost: u32,         // 3
    pub output_len: u32,        // 32
}

/// Account metadata stored next to the encrypted key.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct KeystoreMeta {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genesis_hash: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Milliseconds since the unix epoch
    pub when_created: u64,
}

impl KdfParams {
    fn standard(salt: &SaltString) -> Self {
        Self {
            salt: salt.to_string(),
            parallelism: 4,
            memory_cost: 65536,
            time_cost: 3,
            output_len: 32,
        }
    }

    fn derive_key(&self, password: &str) -> Result<Output, CryptoError> {
        let salt = SaltString::from_b64(&self.salt)
            .map_err(|_| CryptoError::KeystoreError("Invalid salt".to_string()))?;

        let argon2 = Argon2::new(
            argon2::Algorithm::Argon2id,
            argon2::Version::V0x13,
            argon2::Params::new(
                self.memory_cost,
                self.time_cost,
                self.parallelism,
                Some(self.output_len as usize),
            )
            .map_err(|e| CryptoError::KeyDerivationFailed(format!("{:?}", e)))?,
        );

        let password_hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| CryptoError::KeyDerivationFailed(format!("{:?}", e)))?;

        password_hash
            .hash
            .ok_or_else(|| CryptoError::KeyDerivationFailed("No hash generated".to_string()))
    }
}

fn compute_mac(derived_key: &[u8], ciphertext: &[u8]) -> Result<blake3::Hash, CryptoError> {
    if derived_key.len() < 32 {
        return Err(CryptoError::KeyDerivationFailed(format!(
            "Derived key too short: {}",
            derived_key.len()
        )));
    }
    let mut hasher = blake3::Hasher::new();
    hasher.update(&derived_key[16..32]);
    hasher.update(ciphertext);
    Ok(hasher.finalize())
}

/// Encrypt a key pair with a password.
pub fn encrypt_keystore(
    pair: &KeyPair,
    address: &Address,
    password: &str,
    meta: KeystoreMeta,
) -> Result<KeystoreFile, CryptoError> {
    let salt = SaltString::generate(&mut OsRng);
    let kdfparams = KdfParams::standard(&salt);
    let derived_key = kdfparams.derive_key(password)?;

    // Generate random nonce (IV)
    let mut nonce_bytes = [0u8; 12];
    rand::rngs::OsRng.fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let key = Key::<Aes256Gcm>::from_slice(derived_key.as_bytes());
    let cipher = Aes256Gcm::new(key);
    let secret = pair.secret_bytes();
    let ciphertext = cipher
        .encrypt(nonce, secret.as_slice())
        .map_err(|e| CryptoError::EncryptionFailed(format!("{:?}", e)))?;

    let mac = compute_mac(derived_key.as_bytes(), &ciphertext)?;

    Ok(KeystoreFile {
        version: KEYSTORE_VERSION,
        id: uuid::Uuid::new_v4().to_string(),
        address: address.to_string(),
        key_type: pair.key_type(),
        crypto: KeystoreCrypto {
            cipher: "aes-256-gcm".to_string(),
            ciphertext: hex::encode(&ciphertext),
            cipherparams: CipherParams {
                iv: hex::encode(nonce_bytes),
            },
            kdf: "argon2id".to_string(),
            kdfparams,
            mac: mac.to_hex().to_string(),
        },
        meta,
    })
}

/// Decrypt a keystore with a password. The restored pair must match the stored address.
pub fn decrypt_keystore(keystore: &KeystoreFile, password: &str) -> Result<KeyPair, CryptoError> {
    if keystore.version != KEYSTORE_VERSION {
        return Err(CryptoError::KeystoreError(format!(
            "Unsupported keystore version: {}",
            keystore.version
        )));
    }

    let derived_key = keystore.crypto.kdfparams.derive_key(password)?;

    let ciphertext = hex::decode(&keystore.crypto.ciphertext)
        .map_err(|_| CryptoError::KeystoreError("Invalid ciphertext".to_string()))?;

    // Verify MAC
    let expected_mac = compute_mac(derived_key.as_bytes(), &ciphertext)?;
    let actual_mac = blake3::Hash::from_hex(&keystore.crypto.mac)
        .map_err(|_| CryptoError::KeystoreError("Invalid MAC".to_string()))?;
    if expected_mac != actual_mac {
        return Err(CryptoError::InvalidPassword);
    }

    let nonce_bytes = hex::decode(&keystore.crypto.cipherparams.iv)
        .map_err(|_| CryptoError::KeystoreError("Invalid IV".to_string()))?;
    if nonce_bytes.len() != 12 {
        return Err(CryptoError::KeystoreError("Invalid IV".to_string()));
    }
    let nonce = Nonce::from_slice(&nonce_bytes);

    let key = Key::<Aes256Gcm>::from_slice(derived_key.as_bytes());
    let cipher = Aes256Gcm::new(key);
    let plaintext = Zeroizing::new(
        cipher
            .decrypt(nonce, ciphertext.as_ref())
            .map_err(|_| CryptoError::DecryptionFailed("Decryption failed".to_string()))?,
    );

    let pair = KeyPair::from_secret_bytes(keystore.key_type, &plaintext)?;

    let stored: Address = keystore.address.parse()?;
    if pair.public_key() != *stored.public_key() {
        return Err(CryptoError::KeystoreError(
            "Decrypted key does not match keystore address".to_string(),
        ));
    }

    Ok(pair)
}

/// Write a keystore as `<address>.json` inside `dir`, returning the file path.
pub fn write_keystore(keystore: &KeystoreFile, dir: &Path) -> Result<PathBuf, CryptoError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}.json", keystore.address));

    let json = serde_json::to_string_pretty(keystore)
        .map_err(|e| CryptoError::Serialization(e.to_string()))?;
    std::fs::write(&path, json)?;

    Ok(path)
}

/// Read a keystore file.
pub fn read_keystore(path: &Path) -> Result<KeystoreFile, CryptoError> {
    let json = std::fs::read_to_string(path)?;
    serde_json::from_str(&json).map_err(|e| CryptoError::KeystoreError(format!("Parse error: {}", e)))
}

/// Check if a keystore file exists and is valid.
pub fn check_keystore(path: &Path) -> bool {
    if !path.exists() {
        return false;
    }

    read_keystore(path).is_ok()
}
