//! Route access decision for the role shells.

use store::Role;

use crate::auth::AuthState;

/// What a role-gated shell should do with the current auth state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Session not validated yet: render nothing, redirect nowhere.
    Pending,
    /// Signed out or wrong role: render nothing, send to `/login`.
    Denied,
    Granted,
}

pub fn check_access(state: &AuthState, required: Role) -> Access {
    if !state.ready {
        return Access::Pending;
    }
    match state.role() {
        Some(role) if role == required => Access::Granted,
        _ => Access::Denied,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{Session, SessionUser};

    fn session(role: Role) -> Session {
        Session {
            user: SessionUser {
                id: "u1".into(),
                email: "u@example.rw".into(),
                full_name: "Test User".into(),
                role,
                department: None,
                phone: None,
            },
            token: "t".into(),
        }
    }

    #[test]
    fn test_pending_until_ready() {
        for role in Role::ALL {
            let state = AuthState {
                session: Some(session(role)),
                ready: false,
            };
            assert_eq!(check_access(&state, role), Access::Pending);
            assert_eq!(check_access(&AuthState::default(), role), Access::Pending);
        }
    }

    #[test]
    fn test_signed_out_is_denied() {
        for role in Role::ALL {
            assert_eq!(check_access(&AuthState::signed_out(), role), Access::Denied);
        }
    }

    #[test]
    fn test_every_mismatched_role_is_denied() {
        for required in Role::ALL {
            for actual in Role::ALL {
                let expected = if actual == required {
                    Access::Granted
                } else {
                    Access::Denied
                };
                let state = AuthState::signed_in(session(actual));
                assert_eq!(check_access(&state, required), expected, "{actual} in {required} shell");
            }
        }
    }
}
