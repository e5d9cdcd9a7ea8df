use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError, Weak},
    time::Duration,
};

use elevate_di::Build;
use elevate_extern_contracts::relay::{ContactRelayApiService, RelayResponse};
use tracing::{debug, warn};

use crate::{validate, ContactFormFields, SubmissionStatus};

pub const SUCCESS_MESSAGE: &str = "Thanks! We will get back to you shortly.";
pub const REJECTED_MESSAGE: &str = "Error sending message. Please try again.";
pub const TRANSPORT_ERROR_MESSAGE: &str = "Server error. Please try again later.";

/// How long the success status stays visible.
pub const SUCCESS_STATUS_TTL: Duration = Duration::from_millis(5000);

/// Contact form controller.
///
/// Clones share the same form state.
#[derive(Debug, Clone, Build)]
pub struct ContactForm<Relay> {
    relay: Relay,
    #[state]
    state: Arc<Mutex<FormState>>,
}

#[derive(Debug, Default)]
struct FormState {
    fields: ContactFormFields,
    status: SubmissionStatus,
    loading: bool,
    /// Incremented on every status change, so a pending reset can tell whether
    /// the status it was scheduled for is still shown.
    status_generation: u64,
}

impl FormState {
    fn set_status(&mut self, status: SubmissionStatus) -> u64 {
        self.status = status;
        self.status_generation += 1;
        self.status_generation
    }
}

impl<Relay> ContactForm<Relay> {
    pub fn new(relay: Relay) -> Self {
        Self {
            relay,
            state: Default::default(),
        }
    }

    pub fn fields(&self) -> ContactFormFields {
        self.lock().fields.clone()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.lock().status.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.lock().loading
    }

    /// Ignored while a submission is in flight.
    pub fn set_name(&self, name: impl Into<String>) {
        self.update_fields(|fields| fields.name = name.into());
    }

    /// Ignored while a submission is in flight.
    pub fn set_email(&self, email: impl Into<String>) {
        self.update_fields(|fields| fields.email = email.into());
    }

    /// Ignored while a submission is in flight.
    pub fn set_message(&self, message: impl Into<String>) {
        self.update_fields(|fields| fields.message = message.into());
    }

    fn update_fields(&self, f: impl FnOnce(&mut ContactFormFields)) {
        let mut state = self.lock();
        if !state.loading {
            f(&mut state.fields);
        }
    }

    fn lock(&self) -> MutexGuard<'_, FormState> {
        lock(&self.state)
    }
}

impl<Relay> ContactForm<Relay>
where
    Relay: ContactRelayApiService,
{
    /// Validate the fields and, if they are valid, send them to the relay.
    ///
    /// Returns the resulting status. Does nothing while another submission is
    /// in flight.
    pub async fn submit(&self) -> SubmissionStatus {
        let fields = {
            let mut state = self.lock();
            if state.loading {
                return state.status.clone();
            }
            state.set_status(SubmissionStatus::Idle);
            state.fields.clone()
        };

        let submission = match validate(&fields) {
            Ok(submission) => submission,
            Err(err) => {
                debug!("contact form validation failed: {err}");
                let status = SubmissionStatus::Error(err.to_string());
                self.lock().set_status(status.clone());
                return status;
            }
        };

        let _loading = LoadingGuard::start(&self.state);

        match self.relay.send(submission).await {
            Ok(RelayResponse::Accepted) => {
                let status = SubmissionStatus::Success(SUCCESS_MESSAGE.into());
                let generation = {
                    let mut state = self.lock();
                    state.fields = ContactFormFields::default();
                    state.set_status(status.clone())
                };
                schedule_reset(Arc::downgrade(&self.state), generation);
                status
            }
            Ok(RelayResponse::Rejected { status }) => {
                warn!("contact relay rejected the submission with status {status}");
                let status = SubmissionStatus::Error(REJECTED_MESSAGE.into());
                self.lock().set_status(status.clone());
                status
            }
            Err(err) => {
                warn!("failed to reach the contact relay: {err:#}");
                let status = SubmissionStatus::Error(TRANSPORT_ERROR_MESSAGE.into());
                self.lock().set_status(status.clone());
                status
            }
        }
    }
}

/// Resets the status to idle after [`SUCCESS_STATUS_TTL`], unless it changed
/// in the meantime or the form was dropped.
fn schedule_reset(state: Weak<Mutex<FormState>>, generation: u64) {
    tokio::spawn(async move {
        tokio::time::sleep(SUCCESS_STATUS_TTL).await;
        let Some(state) = state.upgrade() else {
            return;
        };
        let mut state = lock(&state);
        if state.status_generation == generation {
            state.set_status(SubmissionStatus::Idle);
        }
    });
}

/// Sets the loading flag for as long as it is alive, including when the
/// submit future is dropped early.
struct LoadingGuard<'a>(&'a Mutex<FormState>);

impl<'a> LoadingGuard<'a> {
    fn start(state: &'a Mutex<FormState>) -> Self {
        lock(state).loading = true;
        Self(state)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        lock(self.0).loading = false;
    }
}

fn lock(state: &Mutex<FormState>) -> MutexGuard<'_, FormState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
