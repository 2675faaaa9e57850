//! Register Use Case
//!
//! Creates a new user account and issues its first access token.

use std::sync::Arc;

use crate::application::config::IdentityConfig;
use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{IdentityError, IdentityResult};

/// Register input
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub address: String,
    pub phone: Option<String>,
}

/// Register output
#[derive(Debug)]
pub struct RegisterOutput {
    pub user: User,
    pub token: String,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<IdentityConfig>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<IdentityConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> IdentityResult<RegisterOutput> {
        // Every missing field is reported in one response, not just the first
        let mut missing = Vec::new();
        if input.name.trim().is_empty() {
            missing.push("name".to_string());
        }
        if input.email.trim().is_empty() {
            missing.push("email".to_string());
        }
        if input.password.is_empty() {
            missing.push("password".to_string());
        }
        if input.address.trim().is_empty() {
            missing.push("address".to_string());
        }
        if !missing.is_empty() {
            return Err(IdentityError::Validation(missing));
        }

        let email =
            Email::new(&input.email).map_err(|e| IdentityError::InvalidEmail(e.message().to_string()))?;

        // Conflict check; the UNIQUE constraint backs this up against races
        if self.user_repo.exists_by_email(&email).await? {
            return Err(IdentityError::EmailTaken);
        }

        // Validate and hash password
        let raw_password = RawPassword::new(input.password)
            .map_err(|e| IdentityError::PasswordValidation(e.message().to_string()))?;
        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())
            .map_err(|e| IdentityError::Internal(e.to_string()))?;

        let new_user = NewUser::register(
            input.name,
            email,
            password_hash,
            input.address,
            input.phone,
        );

        let user = self.user_repo.create(&new_user).await?;

        let token = self
            .config
            .token_service()
            .issue(user.user_id.as_i64(), user.email.as_str(), user.role.code())
            .map_err(|e| IdentityError::Internal(e.to_string()))?;

        tracing::info!(
            user_id = %user.user_id,
            email = %user.email,
            "User registered"
        );

        Ok(RegisterOutput { user, token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::InMemoryUserRepository;
    use crate::domain::value_object::user_role::UserRole;

    fn use_case() -> RegisterUseCase<InMemoryUserRepository> {
        RegisterUseCase::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(IdentityConfig::development()),
        )
    }

    fn input(email: &str) -> RegisterInput {
        RegisterInput {
            name: "Alice".to_string(),
            email: email.to_string(),
            password: "CorrectHorse9!".to_string(),
            address: "1 Main St".to_string(),
            phone: None,
        }
    }

    #[tokio::test]
    async fn test_register_success() {
        let uc = use_case();
        let output = uc.execute(input("alice@example.com")).await.unwrap();

        assert_eq!(output.user.email.as_str(), "alice@example.com");
        assert_eq!(output.user.role, UserRole::Client);
        assert!(!output.token.is_empty());
    }

    #[tokio::test]
    async fn test_register_issues_verifiable_token() {
        let config = Arc::new(IdentityConfig::development());
        let uc = RegisterUseCase::new(Arc::new(InMemoryUserRepository::new()), config.clone());

        let output = uc.execute(input("alice@example.com")).await.unwrap();
        let claims = config.token_service().verify(&output.token).unwrap();
        assert_eq!(claims.sub, output.user.user_id.as_i64());
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.role, "client");
    }

    #[tokio::test]
    async fn test_register_duplicate_email_conflicts() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let uc = RegisterUseCase::new(repo.clone(), Arc::new(IdentityConfig::development()));

        uc.execute(input("alice@example.com")).await.unwrap();

        let err = uc.execute(input("alice@example.com")).await.unwrap_err();
        assert!(matches!(err, IdentityError::EmailTaken));

        // The first registration is unaffected
        assert_eq!(repo.user_count(), 1);
    }

    #[tokio::test]
    async fn test_register_missing_fields_enumerated() {
        let uc = use_case();
        let err = uc
            .execute(RegisterInput {
                name: "".to_string(),
                email: "".to_string(),
                password: "".to_string(),
                address: " ".to_string(),
                phone: None,
            })
            .await
            .unwrap_err();

        match err {
            IdentityError::Validation(fields) => {
                assert_eq!(fields, vec!["name", "email", "password", "address"]);
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_register_rejects_short_password() {
        let uc = use_case();
        let mut bad = input("alice@example.com");
        bad.password = "short".to_string();

        let err = uc.execute(bad).await.unwrap_err();
        assert!(matches!(err, IdentityError::PasswordValidation(_)));
    }

    #[tokio::test]
    async fn test_register_rejects_invalid_email() {
        let uc = use_case();
        let err = uc.execute(input("not-an-email")).await.unwrap_err();
        assert!(matches!(err, IdentityError::InvalidEmail(_)));
    }
}
