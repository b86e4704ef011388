//! Opaque identifiers for games and participants.

use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::errors::domain::{DomainError, InfraErrorKind};

/// Random bytes per identifier. Hex-encoded this gives a fixed 8-char id.
pub const ID_BYTES: usize = 4;
pub const ID_LEN: usize = ID_BYTES * 2;

/// Draw a fresh identifier from the operating system's CSPRNG.
pub fn generate_id() -> Result<String, DomainError> {
    let mut bytes = [0u8; ID_BYTES];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| DomainError::infra(InfraErrorKind::Entropy, e.to_string()))?;
    Ok(hex::encode(bytes))
}
