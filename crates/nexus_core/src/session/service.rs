//! Session use-case service.
//!
//! # Responsibility
//! - Run auth provider calls and apply their outcome to the store.
//! - Report every outcome to the user through a toast.
//!
//! # Invariants
//! - On failure the session user is left exactly as it was.
//! - Provider errors are returned unchanged after being toasted.

use crate::model::navigation::Route;
use crate::model::notification::ToastKind;
use crate::model::user::{User, UserRole};
use crate::session::auth::{AuthIdentity, AuthProvider, AuthResult};
use crate::store::AppStore;
use log::{info, warn};

const PROVIDER_FALLBACK_NAME: &str = "Nexus User";
const SIGN_IN_SUCCESS_MESSAGE: &str = "Access Granted";
const SIGN_UP_SUCCESS_MESSAGE: &str = "Enrollment Successful!";
const PROVIDER_SIGN_IN_FAILURE_MESSAGE: &str = "Provider Login Failed";
const GENERIC_FAILURE_MESSAGE: &str = "Authentication Failed";

/// Registration input collected by the sign-up form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

/// Use-case wrapper binding an auth provider to store session flows.
pub struct SessionService<P: AuthProvider> {
    provider: P,
}

impl<P: AuthProvider> SessionService<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Email/password sign-in as `role`.
    ///
    /// Display name falls back to the local part of `email`.
    pub fn sign_in(
        &self,
        store: &mut AppStore,
        email: &str,
        password: &str,
        role: UserRole,
    ) -> AuthResult<()> {
        match self.provider.sign_in(email, password) {
            Ok(identity) => {
                let fallback_name = email.split('@').next().unwrap_or(email).to_string();
                let user = user_from_identity(identity, fallback_name, email, role);
                log_session_start("sign_in", &user);
                store.set_current_user(Some(user));
                store.notify(SIGN_IN_SUCCESS_MESSAGE, ToastKind::Success, None);
                Ok(())
            }
            Err(err) => {
                warn!(
                    "event=session_sign_in module=session status=error error_code={}",
                    err.code
                );
                store.notify(err.sign_in_message(), ToastKind::Error, None);
                Err(err)
            }
        }
    }

    /// Federated sign-in as `role`.
    pub fn sign_in_with_provider(&self, store: &mut AppStore, role: UserRole) -> AuthResult<()> {
        match self.provider.sign_in_with_provider() {
            Ok(identity) => {
                let user = user_from_identity(identity, PROVIDER_FALLBACK_NAME.to_string(), "", role);
                log_session_start("sign_in_with_provider", &user);
                store.set_current_user(Some(user));
                Ok(())
            }
            Err(err) => {
                warn!(
                    "event=session_sign_in_with_provider module=session status=error error_code={}",
                    err.code
                );
                store.notify(PROVIDER_SIGN_IN_FAILURE_MESSAGE, ToastKind::Error, None);
                Err(err)
            }
        }
    }

    /// Creates an account and signs it in with the form's name and role.
    pub fn sign_up(&self, store: &mut AppStore, request: SignUpRequest) -> AuthResult<()> {
        match self.provider.sign_up(&request.email, &request.password) {
            Ok(identity) => {
                let user = User::new(identity.uid, request.name, request.email, request.role);
                log_session_start("sign_up", &user);
                store.set_current_user(Some(user));
                store.notify(SIGN_UP_SUCCESS_MESSAGE, ToastKind::Success, None);
                Ok(())
            }
            Err(err) => {
                warn!(
                    "event=session_sign_up module=session status=error error_code={}",
                    err.code
                );
                store.notify(provider_message(&err.message), ToastKind::Error, None);
                Err(err)
            }
        }
    }

    /// Federated sign-up; new federated accounts are students.
    pub fn sign_up_with_provider(&self, store: &mut AppStore) -> AuthResult<()> {
        match self.provider.sign_in_with_provider() {
            Ok(identity) => {
                let user = user_from_identity(
                    identity,
                    PROVIDER_FALLBACK_NAME.to_string(),
                    "",
                    UserRole::Student,
                );
                log_session_start("sign_up_with_provider", &user);
                store.set_current_user(Some(user));
                Ok(())
            }
            Err(err) => {
                warn!(
                    "event=session_sign_up_with_provider module=session status=error error_code={}",
                    err.code
                );
                store.notify(provider_message(&err.message), ToastKind::Error, None);
                Err(err)
            }
        }
    }
}

/// Ends the session and returns navigation to the home page.
pub fn log_out(store: &mut AppStore) {
    info!("event=session_log_out module=session status=ok");
    store.set_current_user(None);
    store.set_current_route(Route::Home);
}

fn user_from_identity(
    identity: AuthIdentity,
    fallback_name: String,
    fallback_email: &str,
    role: UserRole,
) -> User {
    let name = identity
        .display_name
        .filter(|name| !name.trim().is_empty())
        .unwrap_or(fallback_name);
    let email = identity
        .email
        .filter(|email| !email.trim().is_empty())
        .unwrap_or_else(|| fallback_email.to_string());
    let mut user = User::new(identity.uid, name, email, role);
    user.profile_picture = identity.photo_url.filter(|url| !url.trim().is_empty());
    user
}

fn provider_message(message: &str) -> String {
    if message.trim().is_empty() {
        GENERIC_FAILURE_MESSAGE.to_string()
    } else {
        message.to_string()
    }
}

fn log_session_start(flow: &str, user: &User) {
    info!(
        "event=session_{} module=session status=ok user_id={} role={}",
        flow, user.id, user.role
    );
}
