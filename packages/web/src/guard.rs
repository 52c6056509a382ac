//! Route guard for the authenticated pages.

use dioxus::prelude::*;

use ui::components::Loading;
use ui::{use_session, SessionState};

use crate::header::Header;
use crate::Route;

/// What the guard decided for the current navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session still initializing; show a placeholder, never the content.
    Pending,
    /// No authenticated user.
    RedirectLogin,
    /// Authenticated, but the view needs the admin flag.
    RedirectHome,
    Allow,
}

pub fn guard_outcome(state: &SessionState, require_admin: bool) -> GuardOutcome {
    if state.loading {
        return GuardOutcome::Pending;
    }
    let Some(user) = &state.user else {
        return GuardOutcome::RedirectLogin;
    };
    if require_admin && !user.is_admin {
        return GuardOutcome::RedirectHome;
    }
    GuardOutcome::Allow
}

/// Layout wrapping every authenticated route. Renders the header and the
/// matched page once the session allows it.
#[component]
pub fn Protected() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let route = use_route::<Route>();
    let require_admin = matches!(route, Route::Admin {});

    match guard_outcome(&session.state(), require_admin) {
        GuardOutcome::Pending => rsx! {
            Loading { message: "Checking your session..." }
        },
        GuardOutcome::RedirectLogin => {
            nav.replace(Route::Login {});
            rsx! {}
        }
        GuardOutcome::RedirectHome => {
            nav.replace(Route::Dashboard {});
            rsx! {}
        }
        GuardOutcome::Allow => rsx! {
            Header {}
            main {
                class: "page",
                Outlet::<Route> {}
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::User;

    fn user(is_admin: bool) -> User {
        User {
            id: 1,
            email: "fan@example.com".to_string(),
            full_name: "Sample Fan".to_string(),
            is_admin,
            created_at: "2024-08-01T00:00:00".to_string(),
        }
    }

    #[test]
    fn test_pending_while_initializing_even_for_admin_views() {
        let state = SessionState {
            user: None,
            loading: true,
        };
        assert_eq!(guard_outcome(&state, false), GuardOutcome::Pending);
        assert_eq!(guard_outcome(&state, true), GuardOutcome::Pending);
    }

    #[test]
    fn test_unauthenticated_redirects_to_login() {
        let state = SessionState {
            user: None,
            loading: false,
        };
        assert_eq!(guard_outcome(&state, false), GuardOutcome::RedirectLogin);
        assert_eq!(guard_outcome(&state, true), GuardOutcome::RedirectLogin);
    }

    #[test]
    fn test_non_admin_on_admin_view_redirects_home() {
        let state = SessionState {
            user: Some(user(false)),
            loading: false,
        };
        assert_eq!(guard_outcome(&state, true), GuardOutcome::RedirectHome);
        assert_eq!(guard_outcome(&state, false), GuardOutcome::Allow);
    }

    #[test]
    fn test_admin_allowed_everywhere() {
        let state = SessionState {
            user: Some(user(true)),
            loading: false,
        };
        assert_eq!(guard_outcome(&state, false), GuardOutcome::Allow);
        assert_eq!(guard_outcome(&state, true), GuardOutcome::Allow);
    }
}
