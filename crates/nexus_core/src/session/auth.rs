//! Auth provider contract and failure mapping.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type AuthResult<T> = Result<T, AuthError>;

/// Identity returned by a successful provider call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthIdentity {
    pub uid: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub photo_url: Option<String>,
}

impl AuthIdentity {
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            display_name: None,
            email: None,
            photo_url: None,
        }
    }
}

/// Known provider failure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFailure {
    UserNotFound,
    WrongPassword,
    Other,
}

/// Provider rejection with its machine code and provider message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthError {
    pub code: String,
    pub message: String,
}

impl AuthError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Classifies `code`, accepting both `user-not-found` and
    /// `auth/user-not-found` spellings.
    pub fn failure(&self) -> AuthFailure {
        let code = self.code.trim();
        let code = code.strip_prefix("auth/").unwrap_or(code);
        match code {
            "user-not-found" => AuthFailure::UserNotFound,
            "wrong-password" => AuthFailure::WrongPassword,
            _ => AuthFailure::Other,
        }
    }

    /// Message shown when an email/password sign-in fails.
    pub fn sign_in_message(&self) -> &'static str {
        match self.failure() {
            AuthFailure::UserNotFound => "Account not found. You must 'Enroll' before logging in.",
            AuthFailure::WrongPassword => "Invalid security token.",
            AuthFailure::Other => "Authentication Failed",
        }
    }
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "auth provider rejected request ({}): {}", self.code, self.message)
    }
}

impl Error for AuthError {}

/// External identity provider.
///
/// Calls complete before the session is touched; implementations may block.
pub trait AuthProvider {
    fn sign_in(&self, email: &str, password: &str) -> AuthResult<AuthIdentity>;
    fn sign_in_with_provider(&self) -> AuthResult<AuthIdentity>;
    fn sign_up(&self, email: &str, password: &str) -> AuthResult<AuthIdentity>;
}
