//! User and session domain types.

use serde::{Deserialize, Serialize};

use tienda_core::{Email, Role, UserId};

/// An authenticated identity.
///
/// Authentication is mocked: users come from the seed credential fixture or
/// from registration, which always succeeds and always assigns [`Role::User`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID (millisecond-epoch for registered users).
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: Email,
    /// Role used for route gating.
    pub role: Role,
}

/// The active session: identity plus an opaque auth token.
///
/// At most one session exists per store; login/register replace it and
/// logout destroys it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The signed-in user.
    pub user: User,
    /// Opaque time-based token; carries no claims.
    pub token: String,
}

/// Profile submitted by the registration form.
#[derive(Debug, Clone)]
pub struct RegisterProfile {
    pub name: String,
    pub email: String,
    /// Accepted but never verified against anything - registration is mocked.
    pub password: String,
}
