use std::sync::Arc;

use contracts::system::auth::UserInfo;
use leptos::prelude::*;

use super::backend::AuthBackend;
use super::error::AuthError;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
}

/// Auth collaborator handed to the view layer through context.
#[derive(Clone)]
pub struct AuthContext {
    pub state: RwSignal<AuthState>,
    backend: Arc<dyn AuthBackend>,
}

impl AuthContext {
    pub fn new(backend: Arc<dyn AuthBackend>) -> Self {
        Self {
            state: RwSignal::new(AuthState::default()),
            backend,
        }
    }

    pub async fn login(&self, email: &str) -> Result<(), AuthError> {
        let user = self.backend.login(email).await?;
        log::info!("signed in as {}", user.email);
        self.state.set(AuthState { user: Some(user) });
        Ok(())
    }

    /// The session is only cleared once the backend confirms.
    pub async fn logout(&self) -> Result<(), AuthError> {
        self.backend.logout().await?;
        log::info!("signed out");
        self.state.set(AuthState::default());
        Ok(())
    }
}

/// Hook to access the auth collaborator
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext not found in component tree")
}
