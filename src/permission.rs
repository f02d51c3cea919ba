//! Permission checks
//!
//! Button and role checks over an injected authentication state. Nothing is
//! cached: each check reads the state again.

use std::sync::Arc;

/// Authentication state the checks read from
pub trait AuthState {
    fn is_login(&self) -> bool;
    /// Role codes of the signed-in user
    fn roles(&self) -> Vec<String>;
    /// Button codes of the signed-in user
    fn buttons(&self) -> Vec<String>;
}

impl<T: AuthState + ?Sized> AuthState for &T {
    fn is_login(&self) -> bool {
        (**self).is_login()
    }

    fn roles(&self) -> Vec<String> {
        (**self).roles()
    }

    fn buttons(&self) -> Vec<String> {
        (**self).buttons()
    }
}

impl<T: AuthState + ?Sized> AuthState for Arc<T> {
    fn is_login(&self) -> bool {
        (**self).is_login()
    }

    fn roles(&self) -> Vec<String> {
        (**self).roles()
    }

    fn buttons(&self) -> Vec<String> {
        (**self).buttons()
    }
}

/// One code or a list of codes; a list matches when any member is granted
pub trait AuthCodes {
    fn any_granted(&self, granted: &[String]) -> bool;
}

impl AuthCodes for str {
    fn any_granted(&self, granted: &[String]) -> bool {
        granted.iter().any(|g| g.as_str() == self)
    }
}

impl AuthCodes for String {
    fn any_granted(&self, granted: &[String]) -> bool {
        self.as_str().any_granted(granted)
    }
}

impl<S: AsRef<str>> AuthCodes for [S] {
    fn any_granted(&self, granted: &[String]) -> bool {
        self.iter().any(|code| code.as_ref().any_granted(granted))
    }
}

impl<S: AsRef<str>, const N: usize> AuthCodes for [S; N] {
    fn any_granted(&self, granted: &[String]) -> bool {
        self.as_slice().any_granted(granted)
    }
}

impl<S: AsRef<str>> AuthCodes for Vec<S> {
    fn any_granted(&self, granted: &[String]) -> bool {
        self.as_slice().any_granted(granted)
    }
}

/// Permission checker bound to an authentication state
#[derive(Clone, Debug)]
pub struct Auth<S> {
    state: S,
}

impl<S: AuthState> Auth<S> {
    pub fn new(state: S) -> Self {
        Self { state }
    }

    /// Whether the signed-in user holds the button code (or any of the codes)
    pub fn has_btn_auth<C: AuthCodes + ?Sized>(&self, codes: &C) -> bool {
        if !self.state.is_login() {
            return false;
        }
        codes.any_granted(&self.state.buttons())
    }

    /// Whether the signed-in user holds the role code (or any of the codes)
    pub fn has_role_auth<C: AuthCodes + ?Sized>(&self, codes: &C) -> bool {
        if !self.state.is_login() {
            return false;
        }
        codes.any_granted(&self.state.roles())
    }
}
