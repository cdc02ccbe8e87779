use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::config::AuthConfig;

/// Role of an authenticated principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Customer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Customer => "customer",
        }
    }

    /// Label shown on the role selector of the sign-in screen.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "GESTOR",
            Role::Customer => "CLIENTE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    /// Build the mock principal for an email address.
    ///
    /// The display name is the local part and any address containing
    /// `admin` gets the admin role. This holds for the customer form too:
    /// the demo store grants the manager role by address, so a customer
    /// sign-in as `madmin@gmail.com` opens the back office.
    pub fn from_email(email: &str) -> Self {
        let name = email.split('@').next().unwrap_or(email).to_string();
        let role = if email.contains("admin") {
            Role::Admin
        } else {
            Role::Customer
        };
        Self {
            id: "1".to_string(),
            name,
            email: email.to_string(),
            role,
            avatar: None,
        }
    }
}

/// Current authentication state: anonymous or exactly one principal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: Option<User>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user) }
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }
}

/// What the sign-in form submits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    Admin { username: String, password: String },
    Customer { email: String, password: String },
}

impl Credentials {
    pub fn role(&self) -> Role {
        match self {
            Credentials::Admin { .. } => Role::Admin,
            Credentials::Customer { .. } => Role::Customer,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Credenciais de gestor inválidas.")]
    InvalidAdminCredentials,
    #[error("E-mail inválido ou senha muito curta.")]
    InvalidCustomerCredentials,
}

/// Check credentials against the demo rules and return the principal to sign in.
pub fn authenticate(credentials: &Credentials, config: &AuthConfig) -> Result<User, AuthError> {
    match credentials {
        Credentials::Admin { username, password } => {
            if *username == config.admin_username && *password == config.admin_password {
                Ok(User::from_email(&config.admin_email))
            } else {
                Err(AuthError::InvalidAdminCredentials)
            }
        }
        Credentials::Customer { email, password } => {
            if email.contains('@') && password.chars().count() >= config.min_password_len {
                Ok(User::from_email(email))
            } else {
                Err(AuthError::InvalidCustomerCredentials)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_form_with_admin_address_gets_admin_role() {
        let credentials = Credentials::Customer {
            email: "madmin@gmail.com".into(),
            password: "1234".into(),
        };
        let user = authenticate(&credentials, &AuthConfig::default()).unwrap();
        assert_eq!(user.role, Role::Admin);
        assert!(Session::signed_in(user).is_admin());
    }

    fn config() -> AuthConfig {
        AuthConfig::default()
    }

    #[test]
    fn test_user_from_email() {
        let user = User::from_email("maria@exemplo.com");
        assert_eq!(user.name, "maria");
        assert_eq!(user.role, Role::Customer);

        let admin = User::from_email("admin@lumina.com");
        assert_eq!(admin.role, Role::Admin);
    }

    #[test]
    fn test_admin_credentials() {
        let ok = Credentials::Admin {
            username: "admin".into(),
            password: "admin".into(),
        };
        let user = authenticate(&ok, &config()).unwrap();
        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.email, "admin@lumina.com");

        let bad = Credentials::Admin {
            username: "admin".into(),
            password: "1234".into(),
        };
        assert_eq!(
            authenticate(&bad, &config()),
            Err(AuthError::InvalidAdminCredentials)
        );
    }

    #[test]
    fn test_customer_credentials() {
        let ok = Credentials::Customer {
            email: "joao@exemplo.com".into(),
            password: "abcd".into(),
        };
        assert_eq!(authenticate(&ok, &config()).unwrap().role, Role::Customer);

        let short = Credentials::Customer {
            email: "joao@exemplo.com".into(),
            password: "abc".into(),
        };
        assert_eq!(
            authenticate(&short, &config()),
            Err(AuthError::InvalidCustomerCredentials)
        );

        let no_at = Credentials::Customer {
            email: "joao".into(),
            password: "abcdef".into(),
        };
        assert!(authenticate(&no_at, &config()).is_err());
    }

    #[test]
    fn test_session_roles() {
        assert_eq!(Session::anonymous().role(), None);
        let session = Session::signed_in(User::from_email("admin@lumina.com"));
        assert!(session.is_admin());
        assert!(session.is_authenticated());
    }
}
