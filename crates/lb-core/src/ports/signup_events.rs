use crate::signup::SignupSession;

/// Notifies the presentation layer of signup progress.
#[async_trait::async_trait]
pub trait SignupEventPort: Send + Sync {
    /// Emitted after every applied transition with the full session snapshot.
    async fn emit_signup_state_changed(&self, session: SignupSession);

    /// Emitted once the post-submission display delay has elapsed; the
    /// presentation layer navigates away and discards the session.
    async fn emit_redirect_requested(&self);
}
