//! Session/auth model.
//!
//! Authentication is mocked by contract: there is no credential store and no
//! network round trip. Verification goes through the pluggable
//! [`CredentialVerifier`] seam; the two literal email/password pairs live in
//! [`SeedCredentials`] as seed data, not as production logic.
//!
//! The session moves `anonymous → authenticated` on login/register and back
//! on logout. State persists under [`keys::AUTH_TOKEN`] and
//! [`keys::USER_DATA`]; on start it is rehydrated from there, and a corrupt
//! or half-present pair is cleared so the session falls back to anonymous.

mod error;

pub use error::AuthError;

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use tienda_core::{Email, Role, UserId};

use crate::models::{RegisterProfile, Session, User};
use crate::storage::{KeyValueStore, keys, load_json, store_json};

/// Minimum password length accepted by registration.
const MIN_PASSWORD_LENGTH: usize = 6;

/// Verifies an email/password pair against some credential source.
pub trait CredentialVerifier: Send + Sync {
    /// Returns the matching user, or `None` on mismatch.
    fn verify(&self, email: &str, password: &str) -> Option<User>;
}

/// The two hard-coded credential pairs standing in for real auth.
///
/// One admin, one regular user. A test fixture by design; swapping in a real
/// verifier means implementing [`CredentialVerifier`] elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedCredentials;

impl SeedCredentials {
    const ADMIN_EMAIL: &'static str = "admin@tienda.com";
    const ADMIN_PASSWORD: &'static str = "admin123";
    const USER_EMAIL: &'static str = "user@tienda.com";
    const USER_PASSWORD: &'static str = "user123";
}

impl CredentialVerifier for SeedCredentials {
    fn verify(&self, email: &str, password: &str) -> Option<User> {
        let (id, name, email, role) = match (email, password) {
            (Self::ADMIN_EMAIL, Self::ADMIN_PASSWORD) => {
                (1, "Administrador", Self::ADMIN_EMAIL, Role::Admin)
            }
            (Self::USER_EMAIL, Self::USER_PASSWORD) => {
                (2, "Usuario Cliente", Self::USER_EMAIL, Role::User)
            }
            _ => return None,
        };

        Some(User {
            id: UserId::new(id),
            name: name.to_owned(),
            email: Email::parse(email).ok()?,
            role,
        })
    }
}

/// The session/auth workflow.
pub struct AuthService {
    store: Arc<dyn KeyValueStore>,
    verifier: Box<dyn CredentialVerifier>,
    session: Option<Session>,
}

impl AuthService {
    /// Rehydrate the session from `store`, using the seed credentials.
    #[must_use]
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_verifier(store, Box::new(SeedCredentials))
    }

    /// Rehydrate the session from `store` with a custom verifier.
    #[must_use]
    pub fn with_verifier(
        store: Arc<dyn KeyValueStore>,
        verifier: Box<dyn CredentialVerifier>,
    ) -> Self {
        let token: Option<String> = load_json(store.as_ref(), keys::AUTH_TOKEN);
        let user: Option<User> = load_json(store.as_ref(), keys::USER_DATA);

        let session = match (token, user) {
            (Some(token), Some(user)) => Some(Session { user, token }),
            (None, None) => None,
            // Half a session is a corrupt session: clear it and start
            // anonymous rather than trusting either piece.
            _ => {
                warn!("persisted session incomplete, resetting to anonymous");
                for key in [keys::AUTH_TOKEN, keys::USER_DATA] {
                    if let Err(err) = store.remove(key) {
                        warn!(key, error = %err, "failed to clear session entry");
                    }
                }
                None
            }
        };

        Self {
            store,
            verifier,
            session,
        }
    }

    /// Sign in with an email/password pair.
    ///
    /// On match, mints an opaque time-based token, persists the session, and
    /// returns the user. On mismatch the session is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] on mismatch, or
    /// [`AuthError::Storage`] if persisting the session fails.
    pub fn login(&mut self, email: &str, password: &str) -> Result<User, AuthError> {
        let Some(user) = self.verifier.verify(email, password) else {
            return Err(AuthError::InvalidCredentials);
        };

        self.start_session(user.clone())?;
        info!(user = %user.email, role = %user.role, "signed in");
        Ok(user)
    }

    /// Register a new identity and sign it in.
    ///
    /// There is no real user store, so registration never collides: any
    /// structurally valid profile succeeds and is assigned [`Role::User`]
    /// unconditionally.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidEmail`] or [`AuthError::WeakPassword`] if
    /// the profile fails inline validation, or [`AuthError::Storage`] if
    /// persisting the session fails.
    pub fn register(&mut self, profile: RegisterProfile) -> Result<User, AuthError> {
        let email = Email::parse(&profile.email)?;
        if profile.password.len() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::WeakPassword {
                min: MIN_PASSWORD_LENGTH,
            });
        }

        let user = User {
            id: UserId::new(Utc::now().timestamp_millis()),
            name: profile.name,
            email,
            role: Role::User,
        };

        self.start_session(user.clone())?;
        info!(user = %user.email, "registered and signed in");
        Ok(user)
    }

    /// Destroy the session: clear persisted state and reset to anonymous.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Storage`] if clearing persisted state fails.
    pub fn logout(&mut self) -> Result<(), AuthError> {
        self.store.remove(keys::AUTH_TOKEN)?;
        self.store.remove(keys::USER_DATA)?;
        self.session = None;
        Ok(())
    }

    /// Whether a user is currently signed in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Whether the signed-in user holds exactly `role`.
    #[must_use]
    pub fn has_role(&self, role: Role) -> bool {
        self.current_user().is_some_and(|user| user.role == role)
    }

    /// The signed-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.session.as_ref().map(|session| &session.user)
    }

    /// The active session, if any.
    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Route-guard predicate: the signed-in user, or an error.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotAuthenticated`] when anonymous.
    pub fn require_authenticated(&self) -> Result<&User, AuthError> {
        self.current_user().ok_or(AuthError::NotAuthenticated)
    }

    /// Route-guard predicate: the signed-in user holding `role`, or an error.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotAuthenticated`] when anonymous, or
    /// [`AuthError::Forbidden`] when the role does not match.
    pub fn require_role(&self, role: Role) -> Result<&User, AuthError> {
        let user = self.require_authenticated()?;
        if user.role == role {
            Ok(user)
        } else {
            Err(AuthError::Forbidden { required: role })
        }
    }

    fn start_session(&mut self, user: User) -> Result<(), AuthError> {
        let token = mint_token();
        store_json(self.store.as_ref(), keys::AUTH_TOKEN, &token)?;
        store_json(self.store.as_ref(), keys::USER_DATA, &user)?;
        self.session = Some(Session { user, token });
        Ok(())
    }
}

/// Mint an opaque time-based token. Carries no claims; uniqueness comes from
/// the millisecond timestamp plus a random suffix.
fn mint_token() -> String {
    format!(
        "token-{}-{:08x}",
        Utc::now().timestamp_millis(),
        rand::random::<u32>()
    )
}
