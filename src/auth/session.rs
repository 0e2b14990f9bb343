//! Shared session state: the token slot and the one-shot logout latch.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, RwLock,
};

/// Session state shared by every client instance.
///
/// The logout latch debounces the forced-logout side effects when several
/// in-flight requests fail their refresh at the same time: only the first
/// caller wins the latch, everyone else just sees the error.
#[derive(Debug, Default)]
pub struct Session {
    token: RwLock<Option<String>>,
    logging_out: AtomicBool,
}

impl Session {
    /// New session, optionally seeded with a stored access token.
    pub fn new(token: Option<String>) -> Arc<Self> {
        Arc::new(Self {
            token: RwLock::new(token),
            logging_out: AtomicBool::new(false),
        })
    }

    /// Current access token, if authenticated.
    pub fn token(&self) -> Option<String> {
        match self.token.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Store a freshly minted access token.
    pub fn set_token(&self, token: impl Into<String>) {
        let value = Some(token.into());
        match self.token.write() {
            Ok(mut guard) => *guard = value,
            Err(poisoned) => *poisoned.into_inner() = value,
        }
    }

    /// Drop the stored credentials.
    pub fn clear_token(&self) {
        match self.token.write() {
            Ok(mut guard) => *guard = None,
            Err(poisoned) => *poisoned.into_inner() = None,
        }
    }

    /// Arm the logout latch; returns true only for the first caller.
    pub fn begin_logout(&self) -> bool {
        !self.logging_out.swap(true, Ordering::SeqCst)
    }

    /// Whether the terminal logout transition already fired.
    pub fn is_logging_out(&self) -> bool {
        self.logging_out.load(Ordering::SeqCst)
    }
}
