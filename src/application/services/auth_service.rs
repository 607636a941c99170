//! Authentication service for the management API.

use std::fmt;
use subtle::ConstantTimeEq;
use tracing::warn;

use crate::error::AppError;

/// Message returned with every `401`.
pub const UNAUTHORIZED_MESSAGE: &str = "Invalid or missing API key";

/// Checks a presented credential against the configured API key.
///
/// The key is fixed at construction and never rotated for the lifetime of the
/// service. Comparison is byte-for-byte over the raw header value and runs in
/// constant time with respect to the key contents.
pub struct AuthService {
    api_key: Vec<u8>,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `api_key` - the only credential accepted by [`Self::authenticate`]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into().into_bytes(),
        }
    }

    /// Authenticates a raw credential taken from the request.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the credential is absent or does
    /// not equal the configured key.
    pub fn authenticate(&self, presented: Option<&[u8]>) -> Result<(), AppError> {
        let Some(presented) = presented else {
            warn!("Rejected request without credential");
            return Err(AppError::unauthorized(UNAUTHORIZED_MESSAGE));
        };

        if bool::from(presented.ct_eq(&self.api_key)) {
            Ok(())
        } else {
            warn!("Rejected request with invalid credential");
            Err(AppError::unauthorized(UNAUTHORIZED_MESSAGE))
        }
    }
}

impl fmt::Debug for AuthService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthService")
            .field("api_key", &"***")
            .finish()
    }
}
