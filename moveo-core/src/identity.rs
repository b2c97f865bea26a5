use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{CoreError, CoreResult};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub uid: String,
    pub email: String,
    pub role: Role,
}

impl User {
    fn new(email: &str, role: Role) -> Self {
        Self {
            uid: format!("user-{}", Uuid::new_v4().simple()),
            email: email.trim().to_string(),
            role,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub role: Role,
}

/// Resolves login and sign-up requests into a session user
pub trait CredentialVerifier: Send + Sync {
    fn login(&self, credentials: &Credentials) -> CoreResult<User>;

    fn signup(&self, email: &str, password: &str) -> CoreResult<User>;
}

/// Admin access is granted only for one fixed email/password pair; any
/// non-empty email may sign in as a regular user.
pub struct FixedCredentialVerifier {
    admin_email: String,
    admin_password: String,
}

impl FixedCredentialVerifier {
    pub fn new(admin_email: impl Into<String>, admin_password: impl Into<String>) -> Self {
        Self {
            admin_email: admin_email.into(),
            admin_password: admin_password.into(),
        }
    }
}

impl CredentialVerifier for FixedCredentialVerifier {
    fn login(&self, credentials: &Credentials) -> CoreResult<User> {
        require_email(&credentials.email)?;

        if credentials.role == Role::Admin {
            if credentials.email.trim() != self.admin_email {
                return Err(CoreError::IdentityError(format!(
                    "Invalid admin credentials. Use '{}'.",
                    self.admin_email
                )));
            }
            if credentials.password != self.admin_password {
                return Err(CoreError::IdentityError(format!(
                    "Invalid admin password. Use '{}'.",
                    self.admin_password
                )));
            }
        }

        tracing::info!("Login for {} as {}", credentials.email, credentials.role.as_str());
        Ok(User::new(&credentials.email, credentials.role))
    }

    fn signup(&self, email: &str, _password: &str) -> CoreResult<User> {
        require_email(email)?;
        tracing::info!("Account created for {}", email);
        Ok(User::new(email, Role::User))
    }
}

fn require_email(email: &str) -> CoreResult<()> {
    if email.trim().is_empty() {
        return Err(CoreError::ValidationError("Email is required.".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verifier() -> FixedCredentialVerifier {
        FixedCredentialVerifier::new("admin@moveo.com", "admin123")
    }

    fn creds(email: &str, password: &str, role: Role) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: password.to_string(),
            role,
        }
    }

    #[test]
    fn test_admin_login() {
        let user = verifier()
            .login(&creds("admin@moveo.com", "admin123", Role::Admin))
            .unwrap();
        assert_eq!(user.role, Role::Admin);
        assert!(user.uid.starts_with("user-"));
    }

    #[test]
    fn test_admin_login_rejects_wrong_email_then_password() {
        let err = verifier()
            .login(&creds("ops@moveo.com", "admin123", Role::Admin))
            .unwrap_err();
        assert_eq!(
            err,
            CoreError::IdentityError("Invalid admin credentials. Use 'admin@moveo.com'.".into())
        );

        let err = verifier()
            .login(&creds("admin@moveo.com", "hunter2", Role::Admin))
            .unwrap_err();
        assert_eq!(
            err,
            CoreError::IdentityError("Invalid admin password. Use 'admin123'.".into())
        );
    }

    #[test]
    fn test_user_login_and_signup() {
        let user = verifier().login(&creds("rider@example.com", "x", Role::User)).unwrap();
        assert_eq!(user.role, Role::User);

        let user = verifier().signup("new@example.com", "pw").unwrap();
        assert_eq!(user.role, Role::User);
        assert_eq!(user.email, "new@example.com");

        assert!(verifier().signup("  ", "pw").is_err());
    }
}
