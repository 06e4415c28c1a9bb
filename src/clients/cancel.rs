//! Cancellation token for in-flight calls.
//!
//! A [`CancelToken`] is a cheaply clonable handle that lets one task abort
//! another task's API call. Cancelling trips every clone of the token: a
//! call observing the token mid-backoff or mid-request abandons the work
//! and returns [`ApiError::Canceled`](crate::clients::ApiError::Canceled)
//! instead of a classified HTTP error.
//!
//! # Example
//!
//! ```rust
//! use puxbay_api::clients::CancelToken;
//!
//! let token = CancelToken::new();
//! let handle = token.clone();
//!
//! assert!(!token.is_cancelled());
//! handle.cancel();
//! assert!(token.is_cancelled());
//! ```

use std::sync::Arc;

use tokio::sync::watch;

/// A clonable cancellation signal.
///
/// A fresh token is never cancelled; [`CancelToken::cancel`] trips it
/// permanently. Cancellation is observed either synchronously via
/// [`CancelToken::is_cancelled`] or asynchronously via
/// [`CancelToken::cancelled`], which the transport races against its
/// backoff waits and network I/O.
#[derive(Debug, Clone)]
pub struct CancelToken {
    sender: Arc<watch::Sender<bool>>,
    receiver: watch::Receiver<bool>,
}

impl CancelToken {
    /// Creates a new, untripped token.
    #[must_use]
    pub fn new() -> Self {
        let (sender, receiver) = watch::channel(false);
        Self {
            sender: Arc::new(sender),
            receiver,
        }
    }

    /// Trips the token, waking every clone currently waiting on
    /// [`CancelToken::cancelled`]. Idempotent.
    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }

    /// Returns `true` if the token has been tripped.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.receiver.borrow()
    }

    /// Resolves once the token is tripped.
    ///
    /// Never resolves for a token that is never cancelled, which makes it
    /// safe to race against a request or a backoff sleep in `select!`.
    pub async fn cancelled(&self) {
        let mut receiver = self.receiver.clone();
        loop {
            if *receiver.borrow() {
                return;
            }
            if receiver.changed().await.is_err() {
                // The sender half lives inside this token, so the channel
                // can only close once every clone is gone - at which point
                // nothing can trip it and this future must stay pending.
                std::future::pending::<()>().await;
            }
        }
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

// Verify CancelToken is Send + Sync so it can cross task boundaries
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CancelToken>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_token_is_not_cancelled() {
        let token = CancelToken::new();
        assert!(!token.is_cancelled());
    }

    #[test]
    fn test_cancel_trips_every_clone() {
        let token = CancelToken::new();
        let clone = token.clone();

        clone.cancel();

        assert!(token.is_cancelled());
        assert!(clone.is_cancelled());
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let token = CancelToken::new();
        token.cancel();
        token.cancel();
        assert!(token.is_cancelled());
    }

    #[tokio::test]
    async fn test_cancelled_resolves_after_cancel() {
        let token = CancelToken::new();
        let waiter = token.clone();

        let task = tokio::spawn(async move {
            waiter.cancelled().await;
            true
        });

        token.cancel();
        assert!(task.await.unwrap());
    }

    #[tokio::test]
    async fn test_cancelled_resolves_immediately_when_already_tripped() {
        let token = CancelToken::new();
        token.cancel();
        // Must not hang.
        token.cancelled().await;
    }

    #[test]
    fn test_cancelled_pends_until_tripped() {
        let token = CancelToken::new();

        let mut cancelled = tokio_test::task::spawn(token.cancelled());
        tokio_test::assert_pending!(cancelled.poll());

        token.cancel();
        assert!(cancelled.is_woken());
        tokio_test::assert_ready!(cancelled.poll());
    }
}
