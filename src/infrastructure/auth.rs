use crate::domain::{AuthService, Identity};
use std::thread;
use std::time::Duration;

/// [`AuthService`] that mimics a remote API with a fixed delay.
///
/// There is no backend behind it: sign-in always succeeds with the demo
/// role, and sign-up only burns the same delay. Tests use
/// `InstantAuth` from the domain layer instead.
pub struct MockApiAuth {
    delay: Duration,
}

impl Default for MockApiAuth {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000))
    }
}

impl MockApiAuth {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl AuthService for MockApiAuth {
    fn sign_in(&self, email: &str, _password: &str) -> Identity {
        thread::sleep(self.delay);
        Identity {
            id: 1,
            email: email.to_string(),
            role: "admin".to_string(),
        }
    }

    fn sign_up(&self, _name: &str, _email: &str, _password: &str) {
        thread::sleep(self.delay);
    }
}
