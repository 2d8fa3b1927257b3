use std::sync::Arc;

use tokio::sync::Mutex;

use lb_core::signup::SignupSession;

/// Shared signup context containing the session and dispatch lock.
///
/// Shared between [`super::SignupOrchestrator`] and anything that needs to
/// observe the current session.
///
/// ## Lock Ordering
/// When acquiring both locks, acquire `dispatch_lock` first, then `session`.
/// - `dispatch_lock`: serializes transitions so two events never race on the
///   same starting state.
/// - `session`: read by `get_session`, written during dispatch.
#[derive(Clone)]
pub struct SignupContext {
    /// Current session snapshot.
    session: Arc<Mutex<SignupSession>>,
    /// Serializes dispatch calls. Only acquired while applying a transition,
    /// NOT during `get_session`.
    dispatch_lock: Arc<Mutex<()>>,
}

impl SignupContext {
    /// Creates a context holding the given session.
    pub fn new(initial: SignupSession) -> Self {
        Self {
            session: Arc::new(Mutex::new(initial)),
            dispatch_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Returns the context wrapped in Arc for shared ownership.
    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Lightweight read of the current session; does NOT take the dispatch
    /// lock.
    pub async fn get_session(&self) -> SignupSession {
        self.session.lock().await.clone()
    }

    /// Acquires the dispatch lock. The guard releases it when dropped.
    pub async fn acquire_dispatch_lock(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    /// Replaces the session. Callers must hold the dispatch lock.
    pub async fn set_session(&self, session: SignupSession) {
        let mut guard = self.session.lock().await;
        *guard = session;
    }
}

impl Default for SignupContext {
    fn default() -> Self {
        Self::new(SignupSession::new())
    }
}
