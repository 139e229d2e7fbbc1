use async_trait::async_trait;
use contracts::system::auth::UserInfo;

use super::error::AuthError;

/// The authentication collaborator. The page shell only reads the session
/// it produces and asks it to sign in or out.
#[async_trait(?Send)]
pub trait AuthBackend: Send + Sync {
    async fn login(&self, email: &str) -> Result<UserInfo, AuthError>;

    async fn logout(&self) -> Result<(), AuthError>;
}

/// Keeps the session in memory only; nothing leaves the browser tab.
#[derive(Debug, Default)]
pub struct MemoryAuthBackend;

#[async_trait(?Send)]
impl AuthBackend for MemoryAuthBackend {
    async fn login(&self, email: &str) -> Result<UserInfo, AuthError> {
        let email = email.trim();
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(UserInfo {
                id: email.to_lowercase(),
                email: email.to_string(),
                full_name: None,
            }),
            _ => Err(AuthError::InvalidEmail(email.to_string())),
        }
    }

    async fn logout(&self) -> Result<(), AuthError> {
        Ok(())
    }
}
