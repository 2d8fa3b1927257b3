//! Signup state machine.
//!
//! Pure state transition function for the registration wizard. Side effects
//! come back as [`SignupAction`]s for the caller to execute; collaborator
//! results re-enter as events.

use crate::signup::validate;
use crate::signup::{
    Classification, Registration, SignupAction, SignupEvent, SignupFlowConfig, SignupSession,
    SignupStatus, SignupStep,
};

/// Pure signup state machine. Holds no state of its own.
pub struct SignupStateMachine;

impl SignupStateMachine {
    pub fn transition(
        config: &SignupFlowConfig,
        mut session: SignupSession,
        event: SignupEvent,
    ) -> (SignupSession, Vec<SignupAction>) {
        // An outstanding submit resolves before any other event applies.
        if matches!(session.status, SignupStatus::SubmitInFlight)
            && !matches!(
                event,
                SignupEvent::SubmitSucceeded | SignupEvent::SubmitFailed { .. }
            )
        {
            return (session, Vec::new());
        }

        match (session.step, event) {
            (SignupStep::Identity, SignupEvent::SubmitName { name }) => {
                match validate::validate_name(&name) {
                    Ok(()) => {
                        session.name = name;
                        session.step = SignupStep::TaxIdEntry;
                        session.field_error = None;
                    }
                    Err(error) => session.field_error = Some(error),
                }
                (session, Vec::new())
            }
            (SignupStep::TaxIdEntry, SignupEvent::RequestLookup { raw_cnpj }) => {
                if matches!(session.status, SignupStatus::LookupInFlight) {
                    // One lookup at a time; the duplicate trigger is dropped.
                    return (session, Vec::new());
                }
                match validate::validate_cnpj(&raw_cnpj) {
                    Ok(cnpj) => {
                        session.cnpj = Some(cnpj.clone());
                        session.status = SignupStatus::LookupInFlight;
                        session.field_error = None;
                        (session, vec![SignupAction::LookupCompany { cnpj }])
                    }
                    Err(error) => {
                        session.field_error = Some(error);
                        (session, Vec::new())
                    }
                }
            }
            (SignupStep::TaxIdEntry, SignupEvent::LookupSucceeded { company }) => {
                if !matches!(session.status, SignupStatus::LookupInFlight)
                    || session.cnpj.as_ref() != Some(&company.cnpj)
                {
                    // Late result for a request the user already walked away
                    // from; the session has moved on.
                    return (session, Vec::new());
                }
                session.status = SignupStatus::Idle;
                session.company = Some(company);
                if config.require_confirmation {
                    session.confirmed = false;
                    session.step = SignupStep::Review;
                } else {
                    session.confirmed = true;
                    session.step = if config.classification_step {
                        SignupStep::Classification
                    } else {
                        SignupStep::Review
                    };
                }
                (session, Vec::new())
            }
            (SignupStep::TaxIdEntry, SignupEvent::LookupFailed { cnpj, error }) => {
                if !matches!(session.status, SignupStatus::LookupInFlight)
                    || session.cnpj.as_ref() != Some(&cnpj)
                {
                    return (session, Vec::new());
                }
                session.status = SignupStatus::LookupFailed { error };
                (session, Vec::new())
            }
            (SignupStep::TaxIdEntry, SignupEvent::Back) => {
                // Allowed even mid-lookup; a result arriving later is
                // discarded by the guards above.
                session.step = SignupStep::Identity;
                session.status = SignupStatus::Idle;
                session.field_error = None;
                (session, Vec::new())
            }
            (SignupStep::Review, SignupEvent::ConfirmCompany) => {
                if session.company.is_none() {
                    return (session, Vec::new());
                }
                session.confirmed = true;
                if config.classification_step {
                    session.step = SignupStep::Classification;
                }
                (session, Vec::new())
            }
            (SignupStep::Review, SignupEvent::Back) => {
                session.step = SignupStep::TaxIdEntry;
                session.company = None;
                session.confirmed = false;
                session.status = SignupStatus::Idle;
                session.field_error = None;
                (session, Vec::new())
            }
            (SignupStep::Review, SignupEvent::SubmitRegistration { classification })
                if !config.classification_step =>
            {
                Self::begin_submit(config, session, classification)
            }
            (SignupStep::Classification, SignupEvent::SubmitRegistration { classification }) => {
                Self::begin_submit(config, session, classification)
            }
            (SignupStep::Classification, SignupEvent::Back) => {
                // Review data stays; the user must confirm it again.
                session.step = SignupStep::Review;
                session.confirmed = false;
                session.status = SignupStatus::Idle;
                session.field_error = None;
                (session, Vec::new())
            }
            (
                SignupStep::Review | SignupStep::Classification,
                SignupEvent::SubmitSucceeded,
            ) => {
                if !matches!(session.status, SignupStatus::SubmitInFlight) {
                    return (session, Vec::new());
                }
                session.status = SignupStatus::Submitted;
                session.step = SignupStep::Done;
                (session, vec![SignupAction::ScheduleRedirect])
            }
            (
                SignupStep::Review | SignupStep::Classification,
                SignupEvent::SubmitFailed { error },
            ) => {
                if !matches!(session.status, SignupStatus::SubmitInFlight) {
                    return (session, Vec::new());
                }
                session.status = SignupStatus::SubmitFailed { error };
                (session, Vec::new())
            }
            (_step, _event) => (session, Vec::new()),
        }
    }

    fn begin_submit(
        config: &SignupFlowConfig,
        mut session: SignupSession,
        classification: Classification,
    ) -> (SignupSession, Vec<SignupAction>) {
        if !session.confirmed {
            return (session, Vec::new());
        }
        if let Err(error) = validate::validate_classification(config, &classification) {
            session.field_error = Some(error);
            return (session, Vec::new());
        }
        let Some(cnpj) = session.cnpj.clone() else {
            return (session, Vec::new());
        };
        session.classification = classification.clone();
        session.field_error = None;
        session.status = SignupStatus::SubmitInFlight;
        let registration = Registration {
            name: session.name.clone(),
            cnpj,
            classification,
        };
        (session, vec![SignupAction::SubmitRegistration { registration }])
    }
}
