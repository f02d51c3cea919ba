use std::sync::{PoisonError, RwLock, RwLockReadGuard};

use crate::entity::{LoginToken, UserInfo};
use crate::permission::AuthState;

#[derive(Debug, Default, Clone)]
struct Session {
    token: Option<String>,
    refresh_token: Option<String>,
    user_info: UserInfo,
}

/// In-memory authentication state shared by the HTTP transport and permission checks
#[derive(Debug, Default)]
pub struct AuthStore {
    session: RwLock<Session>,
}

impl AuthStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the login token and the signed-in user
    pub fn sign_in(&self, token: LoginToken, user_info: UserInfo) {
        let mut session = self.session.write().unwrap_or_else(PoisonError::into_inner);
        session.token = Some(token.token);
        session.refresh_token = Some(token.refresh_token);
        session.user_info = user_info;
        tracing::debug!(username = %session.user_info.username, "signed in");
    }

    /// Replace the user info, keeping the current token
    pub fn set_user_info(&self, user_info: UserInfo) {
        self.session
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .user_info = user_info;
    }

    /// Drop the token and user info
    pub fn reset(&self) {
        *self.session.write().unwrap_or_else(PoisonError::into_inner) = Session::default();
    }

    pub fn token(&self) -> Option<String> {
        self.read().token.clone()
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.read().refresh_token.clone()
    }

    pub fn user_info(&self) -> UserInfo {
        self.read().user_info.clone()
    }

    fn read(&self) -> RwLockReadGuard<'_, Session> {
        self.session.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl AuthState for AuthStore {
    fn is_login(&self) -> bool {
        self.read().token.as_deref().is_some_and(|t| !t.is_empty())
    }

    fn roles(&self) -> Vec<String> {
        self.read().user_info.roles.clone()
    }

    fn buttons(&self) -> Vec<String> {
        self.read().user_info.buttons.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login_token() -> LoginToken {
        LoginToken {
            token: "token".to_string(),
            refresh_token: "refresh".to_string(),
        }
    }

    #[test]
    fn new_store_is_signed_out() {
        let store = AuthStore::new();
        assert!(!store.is_login());
        assert!(store.token().is_none());
        assert!(store.roles().is_empty());
    }

    #[test]
    fn sign_in_and_reset() {
        let store = AuthStore::new();
        store.sign_in(
            login_token(),
            UserInfo {
                user_id: "1".to_string(),
                username: "soybean".to_string(),
                roles: vec!["R_SUPER".to_string()],
                buttons: vec!["B_ADD".to_string()],
            },
        );
        assert!(store.is_login());
        assert_eq!(store.token().as_deref(), Some("token"));
        assert_eq!(store.refresh_token().as_deref(), Some("refresh"));
        assert_eq!(store.roles(), vec!["R_SUPER"]);
        assert_eq!(store.buttons(), vec!["B_ADD"]);

        store.reset();
        assert!(!store.is_login());
        assert!(store.buttons().is_empty());
        assert_eq!(store.user_info(), UserInfo::default());
    }

    #[test]
    fn set_user_info_keeps_token() {
        let store = AuthStore::new();
        store.sign_in(login_token(), UserInfo::default());
        store.set_user_info(UserInfo {
            roles: vec!["R_ADMIN".to_string()],
            ..UserInfo::default()
        });
        assert!(store.is_login());
        assert_eq!(store.roles(), vec!["R_ADMIN"]);
    }

    #[test]
    fn empty_token_is_not_a_login() {
        let store = AuthStore::new();
        store.sign_in(
            LoginToken {
                token: String::new(),
                refresh_token: String::new(),
            },
            UserInfo::default(),
        );
        assert!(!store.is_login());
    }
}
