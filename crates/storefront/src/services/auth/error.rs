//! Authentication error types.

use thiserror::Error;

use tienda_core::{EmailError, Role};

use crate::storage::StorageError;

/// Errors that can occur in the session/auth workflow.
///
/// These are returned, never thrown past the workflow boundary: a credential
/// mismatch or a missing role renders as a message, and the session simply
/// stays (or becomes) anonymous.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email/password pair did not match any known credential.
    #[error("credenciales inválidas")]
    InvalidCredentials,

    /// Registration form carried a malformed email.
    #[error("correo inválido: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Registration form carried a too-short password.
    #[error("la contraseña debe tener al menos {min} caracteres")]
    WeakPassword {
        /// Minimum accepted length.
        min: usize,
    },

    /// No session is active.
    #[error("no has iniciado sesión")]
    NotAuthenticated,

    /// Session is active but lacks the required role.
    #[error("requiere el rol '{required}'")]
    Forbidden {
        /// Role the operation is gated on.
        required: Role,
    },

    /// Persisting or clearing session state failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tienda_core::Email;

    use super::*;

    // User-facing auth failures render in Spanish, nested detail included.
    #[test]
    fn test_display_is_spanish() {
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "credenciales inválidas"
        );
        assert_eq!(
            AuthError::WeakPassword { min: 6 }.to_string(),
            "la contraseña debe tener al menos 6 caracteres"
        );
        assert_eq!(AuthError::NotAuthenticated.to_string(), "no has iniciado sesión");
        assert_eq!(
            AuthError::Forbidden {
                required: Role::Admin
            }
            .to_string(),
            "requiere el rol 'admin'"
        );

        let err = AuthError::from(Email::parse("sin-arroba").unwrap_err());
        assert_eq!(err.to_string(), "correo inválido: el correo debe contener una @");
    }
}
