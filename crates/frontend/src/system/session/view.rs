//! Read-only projection of the auth and cart collaborators into what the
//! header shows: the account control and the cart badge.

use contracts::navigation::NavigationIntent;
use contracts::system::auth::SessionProjection;

use crate::system::auth::{AuthError, AuthState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountControl {
    /// Signed out: a single link to the login route, no logout trigger.
    LoginLink { route: String },
    /// Signed in: the identity and a logout trigger.
    SignedIn { identity: String },
}

pub struct SessionView;

impl SessionView {
    pub fn project(state: &AuthState, cart_item_count: usize) -> SessionProjection {
        SessionProjection {
            is_authenticated: state.user.is_some(),
            display_identity: state.user.as_ref().map(|user| user.email.clone()),
            cart_item_count,
        }
    }

    pub fn account_control(projection: &SessionProjection, login_route: &str) -> AccountControl {
        if projection.is_authenticated {
            AccountControl::SignedIn {
                identity: projection.display_identity.clone().unwrap_or_default(),
            }
        } else {
            AccountControl::LoginLink {
                route: login_route.to_string(),
            }
        }
    }

    /// Exact item count, or nothing for an empty cart.
    pub fn cart_badge(projection: &SessionProjection) -> Option<String> {
        (projection.cart_item_count > 0).then(|| projection.cart_item_count.to_string())
    }

    /// A failed logout is only reported on the diagnostic log and does not
    /// navigate.
    pub fn logout_outcome(
        result: Result<(), AuthError>,
        login_route: &str,
    ) -> Option<NavigationIntent> {
        match result {
            Ok(()) => Some(NavigationIntent::to(login_route)),
            Err(e) => {
                log::error!("Error logging out: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::UserInfo;

    fn signed_in() -> AuthState {
        AuthState {
            user: Some(UserInfo {
                id: "amina@example.com".to_string(),
                email: "amina@example.com".to_string(),
                full_name: None,
            }),
        }
    }

    #[test]
    fn test_project_signed_out() {
        let projection = SessionView::project(&AuthState::default(), 0);
        assert!(!projection.is_authenticated);
        assert_eq!(projection.display_identity, None);
        assert_eq!(
            SessionView::account_control(&projection, "/login"),
            AccountControl::LoginLink {
                route: "/login".to_string()
            }
        );
    }

    #[test]
    fn test_project_signed_in() {
        let projection = SessionView::project(&signed_in(), 2);
        assert!(projection.is_authenticated);
        assert_eq!(projection.cart_item_count, 2);
        assert_eq!(
            SessionView::account_control(&projection, "/login"),
            AccountControl::SignedIn {
                identity: "amina@example.com".to_string()
            }
        );
    }

    #[test]
    fn test_cart_badge() {
        let empty = SessionView::project(&AuthState::default(), 0);
        assert_eq!(SessionView::cart_badge(&empty), None);

        let three = SessionView::project(&AuthState::default(), 3);
        assert_eq!(SessionView::cart_badge(&three).as_deref(), Some("3"));

        let many = SessionView::project(&signed_in(), 150);
        assert_eq!(SessionView::cart_badge(&many).as_deref(), Some("150"));
    }

    #[test]
    fn test_logout_success_navigates_to_login() {
        assert_eq!(
            SessionView::logout_outcome(Ok(()), "/login"),
            Some(NavigationIntent::to("/login"))
        );
    }

    #[test]
    fn test_logout_failure_stays_put() {
        let failed = Err(AuthError::Provider("network unreachable".to_string()));
        assert_eq!(SessionView::logout_outcome(failed, "/login"), None);
    }
}
