//! Salted password hashing.
//!
//! Hashes are SHA-256 over the password bytes followed by the raw salt bytes,
//! stored hex-encoded. Salts are 16 random bytes, hex-encoded before storage so
//! they survive any database text encoding. The salt lives in its own table and
//! is written in the same transaction as the user row.

use rand::RngCore;
use sha2::{Digest, Sha256};

use crate::core::error::{AppError, Result};

const SALT_LEN: usize = 16;

/// Generates a 16-byte random salt, hex-encoded.
pub fn generate_salt() -> Result<String> {
    let mut salt = [0u8; SALT_LEN];
    rand::rngs::OsRng
        .try_fill_bytes(&mut salt)
        .map_err(|e| AppError::Internal(format!("could not generate salt: {}", e)))?;

    Ok(hex::encode(salt))
}

/// Hashes a password with a hex-encoded salt.
///
/// The salt is decoded back to raw bytes before hashing; an undecodable salt is
/// an internal error since salts only ever come from [`generate_salt`].
pub fn hash_password(password: &str, salt_hex: &str) -> Result<String> {
    let salt = hex::decode(salt_hex)
        .map_err(|e| AppError::Internal(format!("malformed password salt: {}", e)))?;

    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.update(&salt);

    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salt_is_hex_of_sixteen_bytes() {
        let salt = generate_salt().unwrap();
        assert_eq!(salt.len(), SALT_LEN * 2);
        assert!(hex::decode(&salt).is_ok());
    }

    #[test]
    fn test_hash_is_deterministic_for_fixed_salt() {
        let salt = "000102030405060708090a0b0c0d0e0f";
        let a = hash_password("hunter22", salt).unwrap();
        let b = hash_password("hunter22", salt).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 64); // hex-encoded SHA-256
    }

    #[test]
    fn test_different_salts_produce_different_hashes() {
        let a = hash_password("hunter22", "000102030405060708090a0b0c0d0e0f").unwrap();
        let b = hash_password("hunter22", "0f0e0d0c0b0a09080706050403020100").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed_salt_is_rejected() {
        assert!(hash_password("hunter22", "not-hex").is_err());
    }
}
