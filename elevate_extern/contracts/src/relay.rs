use std::future::Future;

use elevate_models::contact::ContactSubmission;

/// Client for the contact relay endpoint (`POST /api/send-email`).
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactRelayApiService: Send + Sync + 'static {
    /// Send the submission as a single request.
    ///
    /// Returns an error only if no response was received.
    fn send(
        &self,
        submission: ContactSubmission,
    ) -> impl Future<Output = anyhow::Result<RelayResponse>> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayResponse {
    /// The relay answered with a 2xx status.
    Accepted,
    /// The relay answered with any other status. The response body is ignored.
    Rejected { status: u16 },
}

#[cfg(feature = "mock")]
impl MockContactRelayApiService {
    pub fn with_send(mut self, submission: ContactSubmission, result: RelayResponse) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_send_error(mut self, submission: ContactSubmission, error: anyhow::Error) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(move |_| Box::pin(std::future::ready(Err(error))));
        self
    }
}
