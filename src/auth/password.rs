// Password hashing utilities
// Uses bcrypt for secure password hashing

use bcrypt::{hash, verify, DEFAULT_COST};

/// Hashes a password using bcrypt
///
/// # Example
/// ```
/// use crease_api::auth::password::hash_password;
///
/// let hash = hash_password("my_password").expect("valid hash");
/// ```
pub fn hash_password(password: &str) -> Result<String, String> {
    hash(password, DEFAULT_COST).map_err(|e| e.to_string())
}

/// Verifies a password against a bcrypt hash
///
/// Returns `Ok(false)` on a mismatch; `Err` only when the hash itself
/// is malformed.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, String> {
    verify(password, hash).map_err(|e| e.to_string())
}
