//! Signup orchestrator.
//!
//! Coordinates the signup state machine and its side effects.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, info_span, warn, Instrument};

use lb_core::ports::{CompanyRegistryPort, RegistrationPort, SignupEventPort};
use lb_core::signup::{
    Classification, SignupAction, SignupEvent, SignupFlowConfig, SignupSession,
    SignupStateMachine,
};

use crate::usecases::signup::SignupContext;

/// Delay between the success screen appearing and the redirect request.
const REDIRECT_DELAY: Duration = Duration::from_secs(5);

/// Orchestrator driving one signup session and its side effects.
///
/// Collaborator calls run after the dispatch lock is released, so the
/// in-flight status stays observable and a duplicate trigger is dropped by
/// the state machine instead of queued behind the first call.
pub struct SignupOrchestrator {
    context: Arc<SignupContext>,
    config: SignupFlowConfig,

    // Collaborators (dependency injection)
    registry: Arc<dyn CompanyRegistryPort>,
    registration: Arc<dyn RegistrationPort>,
    events: Arc<dyn SignupEventPort>,
}

impl SignupOrchestrator {
    pub fn new(
        config: SignupFlowConfig,
        registry: Arc<dyn CompanyRegistryPort>,
        registration: Arc<dyn RegistrationPort>,
        events: Arc<dyn SignupEventPort>,
    ) -> Self {
        Self {
            context: SignupContext::default().arc(),
            config,
            registry,
            registration,
            events,
        }
    }

    pub async fn submit_name(&self, name: impl Into<String>) -> SignupSession {
        self.dispatch(SignupEvent::SubmitName { name: name.into() })
            .await
    }

    pub async fn lookup(&self, raw_cnpj: impl Into<String>) -> SignupSession {
        self.dispatch(SignupEvent::RequestLookup {
            raw_cnpj: raw_cnpj.into(),
        })
        .await
    }

    pub async fn confirm(&self) -> SignupSession {
        self.dispatch(SignupEvent::ConfirmCompany).await
    }

    pub async fn back(&self) -> SignupSession {
        self.dispatch(SignupEvent::Back).await
    }

    pub async fn submit(&self, classification: Classification) -> SignupSession {
        self.dispatch(SignupEvent::SubmitRegistration { classification })
            .await
    }

    pub async fn session(&self) -> SignupSession {
        self.context.get_session().await
    }

    /// Feeds an event through the state machine and executes the produced
    /// actions; collaborator results re-enter as follow-up events.
    pub async fn dispatch(&self, event: SignupEvent) -> SignupSession {
        let span = info_span!("usecase.signup_orchestrator.dispatch", event = ?event);
        async {
            let mut session = self.context.get_session().await;
            let mut pending = vec![event];

            while let Some(event) = pending.pop() {
                let (next, actions) = self.apply(event).await;
                session = next;
                for action in actions {
                    if let Some(follow_up) = self.execute_action(action).await {
                        pending.push(follow_up);
                    }
                }
            }

            session
        }
        .instrument(span)
        .await
    }

    /// Runs one transition under the dispatch lock and emits the new state.
    async fn apply(&self, event: SignupEvent) -> (SignupSession, Vec<SignupAction>) {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;

        let current = self.context.get_session().await;
        let from = (current.step, current.status.clone());
        let event_name = format!("{:?}", event);
        let (next, actions) = SignupStateMachine::transition(&self.config, current, event);
        info!(
            from = ?from,
            to = ?(next.step, next.status.clone()),
            event = %event_name,
            "signup state transition"
        );
        self.context.set_session(next.clone()).await;
        self.events.emit_signup_state_changed(next.clone()).await;
        (next, actions)
    }

    async fn execute_action(&self, action: SignupAction) -> Option<SignupEvent> {
        debug!(?action, "signup executing action");
        match action {
            SignupAction::LookupCompany { cnpj } => match self.registry.lookup(&cnpj).await {
                Ok(company) => Some(SignupEvent::LookupSucceeded { company }),
                Err(error) => {
                    warn!(cnpj = %cnpj, error = %error, "company lookup failed");
                    Some(SignupEvent::LookupFailed { cnpj, error })
                }
            },
            SignupAction::SubmitRegistration { registration } => {
                match self.registration.submit(&registration).await {
                    Ok(()) => Some(SignupEvent::SubmitSucceeded),
                    Err(error) => {
                        warn!(
                            cnpj = %registration.cnpj,
                            error = %error,
                            "registration submit failed"
                        );
                        Some(SignupEvent::SubmitFailed { error })
                    }
                }
            }
            SignupAction::ScheduleRedirect => {
                let events = Arc::clone(&self.events);
                tokio::spawn(async move {
                    tokio::time::sleep(REDIRECT_DELAY).await;
                    events.emit_redirect_requested().await;
                });
                None
            }
        }
    }
}
