// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Password hashing and verification.
//!
//! Digests are textual bcrypt strings (`$2b$...`) carrying their own salt
//! and work factor, so verification needs nothing but the digest itself.
//! Neither plaintexts nor digests are ever written to the log.

use tracing::debug;

use crate::error::PersistenceError;

/// Lowest work factor bcrypt accepts.
pub const MIN_COST: u32 = 4;

/// Highest work factor bcrypt accepts.
pub const MAX_COST: u32 = 31;

/// Salted password hashing with a configurable work factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Credentials {
    cost: u32,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl Credentials {
    /// Creates a credential service with the given bcrypt work factor.
    ///
    /// # Arguments
    ///
    /// * `cost` - The bcrypt cost, between 4 and 31 inclusive
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::InitializationError` if the cost is out of range.
    pub fn with_cost(cost: u32) -> Result<Self, PersistenceError> {
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(PersistenceError::InitializationError(format!(
                "bcrypt cost must be between {MIN_COST} and {MAX_COST}, got {cost}"
            )));
        }
        Ok(Self { cost })
    }

    /// Returns the configured work factor.
    #[must_use]
    pub const fn cost(&self) -> u32 {
        self.cost
    }

    /// Hashes a plaintext password with a fresh random salt.
    ///
    /// Two calls with the same plaintext produce different digests.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::HashingFailed` if bcrypt rejects the input.
    pub fn hash(&self, plaintext: &str) -> Result<String, PersistenceError> {
        bcrypt::hash(plaintext, self.cost).map_err(|e| PersistenceError::HashingFailed(e.to_string()))
    }

    /// Checks a plaintext password against a stored digest.
    ///
    /// The digest may be textual or raw bytes. A digest that is not UTF-8
    /// or not a well-formed bcrypt string never matches.
    #[must_use]
    pub fn verify<P, D>(plaintext: P, digest: D) -> bool
    where
        P: AsRef<[u8]>,
        D: AsRef<[u8]>,
    {
        let Ok(digest) = std::str::from_utf8(digest.as_ref()) else {
            debug!("Stored digest is not valid UTF-8");
            return false;
        };

        match bcrypt::verify(plaintext, digest) {
            Ok(matched) => matched,
            Err(e) => {
                debug!("Stored digest could not be parsed: {}", e);
                false
            }
        }
    }
}
