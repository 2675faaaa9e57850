//! Login Use Case
//!
//! Authenticates a user and issues an access token.
//!
//! Unknown email and wrong password return the identical error: the caller
//! must not be able to probe which emails are registered.

use std::sync::Arc;

use crate::application::config::IdentityConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_password::RawPassword};
use crate::error::{IdentityError, IdentityResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    pub user: User,
    pub token: String,
}

/// Login use case
pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<IdentityConfig>,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<IdentityConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> IdentityResult<LoginOutput> {
        let mut missing = Vec::new();
        if input.email.trim().is_empty() {
            missing.push("email".to_string());
        }
        if input.password.is_empty() {
            missing.push("password".to_string());
        }
        if !missing.is_empty() {
            return Err(IdentityError::Validation(missing));
        }

        // Any malformed identifier collapses into InvalidCredentials
        let email = Email::new(&input.email).map_err(|_| IdentityError::InvalidCredentials)?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(IdentityError::InvalidCredentials)?;

        let raw_password =
            RawPassword::new(input.password).map_err(|_| IdentityError::InvalidCredentials)?;

        if !user.password_hash.verify(&raw_password, self.config.pepper()) {
            return Err(IdentityError::InvalidCredentials);
        }

        let token = self
            .config
            .token_service()
            .issue(user.user_id.as_i64(), user.email.as_str(), user.role.code())
            .map_err(|e| IdentityError::Internal(e.to_string()))?;

        tracing::info!(
            user_id = %user.user_id,
            email = %user.email,
            "User logged in"
        );

        Ok(LoginOutput { user, token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::register::{RegisterInput, RegisterUseCase};
    use crate::application::test_support::InMemoryUserRepository;

    async fn registered_repo(config: &Arc<IdentityConfig>) -> Arc<InMemoryUserRepository> {
        let repo = Arc::new(InMemoryUserRepository::new());
        let register = RegisterUseCase::new(repo.clone(), config.clone());
        register
            .execute(RegisterInput {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
                password: "CorrectHorse9!".to_string(),
                address: "1 Main St".to_string(),
                phone: None,
            })
            .await
            .unwrap();
        repo
    }

    #[tokio::test]
    async fn test_login_success() {
        let config = Arc::new(IdentityConfig::development());
        let repo = registered_repo(&config).await;
        let uc = LoginUseCase::new(repo, config.clone());

        let output = uc
            .execute(LoginInput {
                email: "alice@example.com".to_string(),
                password: "CorrectHorse9!".to_string(),
            })
            .await
            .unwrap();

        let claims = config.token_service().verify(&output.token).unwrap();
        assert_eq!(claims.sub, output.user.user_id.as_i64());
        assert_eq!(claims.role, "client");
    }

    #[tokio::test]
    async fn test_login_wrong_password_and_unknown_email_are_identical() {
        let config = Arc::new(IdentityConfig::development());
        let repo = registered_repo(&config).await;
        let uc = LoginUseCase::new(repo, config);

        let wrong_password = uc
            .execute(LoginInput {
                email: "alice@example.com".to_string(),
                password: "WrongBattery9!".to_string(),
            })
            .await
            .unwrap_err();

        let unknown_email = uc
            .execute(LoginInput {
                email: "nobody@example.com".to_string(),
                password: "CorrectHorse9!".to_string(),
            })
            .await
            .unwrap_err();

        // Same variant, same outward shape: no enumeration signal
        assert!(matches!(wrong_password, IdentityError::InvalidCredentials));
        assert!(matches!(unknown_email, IdentityError::InvalidCredentials));
        assert_eq!(
            wrong_password.to_app_error().message(),
            unknown_email.to_app_error().message()
        );
        assert_eq!(
            wrong_password.status_code(),
            unknown_email.status_code()
        );
    }

    #[tokio::test]
    async fn test_login_email_is_case_sensitive() {
        let config = Arc::new(IdentityConfig::development());
        let repo = registered_repo(&config).await;
        let uc = LoginUseCase::new(repo, config);

        let err = uc
            .execute(LoginInput {
                email: "ALICE@example.com".to_string(),
                password: "CorrectHorse9!".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, IdentityError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_missing_fields() {
        let config = Arc::new(IdentityConfig::development());
        let uc = LoginUseCase::new(Arc::new(InMemoryUserRepository::new()), config);

        let err = uc
            .execute(LoginInput {
                email: "".to_string(),
                password: "".to_string(),
            })
            .await
            .unwrap_err();

        match err {
            IdentityError::Validation(fields) => {
                assert_eq!(fields, vec!["email", "password"]);
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }
}
