//! Session Token Value Object
//!
//! The signed bearer credential issued at login. A user's stored token is
//! the only one that resolves; an empty value means no active session.

use std::fmt;

use platform::crypto::constant_time_eq;

#[derive(Clone, PartialEq, Eq, Default)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// No active session
    pub fn none() -> Self {
        Self(String::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `presented` is this exact token
    ///
    /// Never matches when no session is active.
    pub fn matches(&self, presented: &str) -> bool {
        !self.is_empty() && constant_time_eq(self.0.as_bytes(), presented.as_bytes())
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("SessionToken(<none>)")
        } else {
            f.write_str("SessionToken([REDACTED])")
        }
    }
}
