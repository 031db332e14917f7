//! User Password Value Object
//!
//! Initial passwords are derived from identity fields and mailed to the user
//! once; only the Argon2id hash is stored. Delegates to `platform::password`
//! for cryptographic operations.

use platform::password::{ClearTextPassword, HashedPassword, PasswordPolicyError};
use std::fmt;

use crate::error::{AuthError, AuthResult};

/// Minimum characters taken from the first name
const FIRST_NAME_CHARS: usize = 2;
/// Minimum characters taken from the last name
const LAST_NAME_CHARS: usize = 2;
/// Minimum trailing digits taken from the phone number
const PHONE_CHARS: usize = 4;

// ============================================================================
// Raw Password (User Input / Derived)
// ============================================================================

/// Plaintext password, zeroized on drop
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    pub fn new(raw: String) -> AuthResult<Self> {
        let clear_text = ClearTextPassword::new(raw).map_err(|e| match e {
            PasswordPolicyError::TooLong { .. } => AuthError::InvalidCredentials,
            PasswordPolicyError::EmptyOrWhitespace => {
                AuthError::InvalidInput("Password is required".to_string())
            }
        })?;

        Ok(Self(clear_text))
    }

    /// Derive the initial password for a new account
    ///
    /// First two characters of the first name, last two of the last name,
    /// last four of the phone number. Names are counted in characters.
    pub fn derive(first_name: &str, last_name: &str, phone: &str) -> AuthResult<Self> {
        let first: Vec<char> = first_name.trim().chars().collect();
        let last: Vec<char> = last_name.trim().chars().collect();
        let phone: Vec<char> = phone.trim().chars().collect();

        if first.len() < FIRST_NAME_CHARS
            || last.len() < LAST_NAME_CHARS
            || phone.len() < PHONE_CHARS
        {
            return Err(AuthError::InvalidInput(
                "Insufficient data to generate password".to_string(),
            ));
        }

        let derived: String = first[..FIRST_NAME_CHARS]
            .iter()
            .chain(&last[last.len() - LAST_NAME_CHARS..])
            .chain(&phone[phone.len() - PHONE_CHARS..])
            .collect();

        Self::new(derived)
    }

    /// Plaintext for the one-time account mail
    pub fn expose(&self) -> &str {
        self.0.expose()
    }

    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed, for storage)
// ============================================================================

/// Argon2id PHC hash, safe to store
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> AuthResult<Self> {
        let hashed = raw
            .inner()
            .hash(pepper)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        Ok(Self(hashed))
    }

    /// Create from PHC string (from database)
    pub fn from_phc_string(phc_string: impl Into<String>) -> AuthResult<Self> {
        let hashed = HashedPassword::from_phc_string(phc_string)
            .map_err(|_| AuthError::Internal("Invalid password hash in database".to_string()))?;

        Ok(Self(hashed))
    }

    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Verify a raw password against this hash
    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(raw.inner(), pepper)
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_password() {
        let raw = RawPassword::derive("Ada", "Lovelace", "5551234567").unwrap();
        assert_eq!(raw.expose(), "Adce4567");
    }

    #[test]
    fn test_derive_is_deterministic() {
        let a = RawPassword::derive("Grace", "Hopper", "5559876543").unwrap();
        let b = RawPassword::derive("Grace", "Hopper", "5559876543").unwrap();
        assert_eq!(a.expose(), b.expose());
        assert_eq!(a.expose(), "Grer6543");
    }

    #[test]
    fn test_derive_trims_and_counts_chars() {
        let raw = RawPassword::derive("  Émile ", "Zoë", "5551234567").unwrap();
        assert_eq!(raw.expose(), "Émoë4567");
    }

    #[test]
    fn test_derive_insufficient_input() {
        assert!(matches!(
            RawPassword::derive("A", "Lovelace", "5551234567"),
            Err(AuthError::InvalidInput(_))
        ));
        assert!(matches!(
            RawPassword::derive("Ada", "L", "5551234567"),
            Err(AuthError::InvalidInput(_))
        ));
        assert!(matches!(
            RawPassword::derive("Ada", "Lovelace", "123"),
            Err(AuthError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_derived_password_verifies_against_its_hash() {
        let raw = RawPassword::derive("Ada", "Lovelace", "5551234567").unwrap();
        let hashed = UserPassword::from_raw(&raw, None).unwrap();

        let login = RawPassword::new("Adce4567".to_string()).unwrap();
        assert!(hashed.verify(&login, None));

        let wrong = RawPassword::new("Adce4568".to_string()).unwrap();
        assert!(!hashed.verify(&wrong, None));
    }

    #[test]
    fn test_hash_with_pepper() {
        let raw = RawPassword::new("Adce4567".to_string()).unwrap();
        let pepper = b"app_secret_pepper";
        let hashed = UserPassword::from_raw(&raw, Some(pepper)).unwrap();

        assert!(hashed.verify(&raw, Some(pepper)));
        assert!(!hashed.verify(&raw, None));
    }

    #[test]
    fn test_phc_string_roundtrip() {
        let raw = RawPassword::new("Adce4567".to_string()).unwrap();
        let hashed = UserPassword::from_raw(&raw, None).unwrap();

        let restored = UserPassword::from_phc_string(hashed.as_phc_string()).unwrap();
        assert!(restored.verify(&raw, None));
        assert!(UserPassword::from_phc_string("plaintext").is_err());
    }

    #[test]
    fn test_debug_redaction() {
        let raw = RawPassword::new("Adce4567".to_string()).unwrap();
        assert!(!format!("{:?}", raw).contains("Adce4567"));

        let hashed = UserPassword::from_raw(&raw, None).unwrap();
        assert!(format!("{:?}", hashed).contains("HASH"));
    }
}
