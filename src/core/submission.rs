use crate::core::page::PageContext;
use crate::domain::model::{Notification, SubmitEvent, SubmitOutcome};
use crate::domain::ports::{CalculatorPage, Transport};
use crate::pages::{APP_CONTAINER_ID, FORM_ID, RESULT_SECTION_ID};
use crate::utils::error::{CalcError, Result};
use std::sync::atomic::{AtomicBool, Ordering};

/// The submit-and-render routine shared by every calculator page.
///
/// At most one request is outstanding per handler: a submit that arrives
/// while another is awaiting the backend is ignored.
pub struct SubmissionHandler<P: CalculatorPage, T: Transport> {
    page: P,
    transport: T,
    context: PageContext,
    in_flight: AtomicBool,
}

struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<P: CalculatorPage, T: Transport> SubmissionHandler<P, T> {
    pub fn new(page: P, transport: T, context: PageContext) -> Self {
        Self {
            page,
            transport,
            context,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub async fn submit(&self, event: &mut SubmitEvent) -> Result<SubmitOutcome> {
        event.prevent_default();

        if self.in_flight.swap(true, Ordering::AcqRel) {
            tracing::warn!(
                "Submission to {} ignored: previous request still in flight",
                self.page.endpoint()
            );
            return Ok(SubmitOutcome::Ignored);
        }
        let _in_flight = InFlight(&self.in_flight);

        let form = self
            .context
            .document
            .form_data(FORM_ID)
            .ok_or_else(|| CalcError::MissingElementError {
                id: FORM_ID.to_string(),
            })?;

        tracing::info!(
            "Submitting {} ({} fields) to {}",
            self.page.title(),
            form.len(),
            self.page.endpoint()
        );

        let reply = match self.transport.post_form(self.page.endpoint(), &form).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!("❌ Request to {} failed: {}", self.page.endpoint(), e);
                self.notify(Notification::ConnectionError);
                return Err(e);
            }
        };

        if let Some(notification) = Notification::for_status(reply.status) {
            tracing::warn!(
                "Backend rejected submission with status {} ({:?})",
                reply.status,
                notification
            );
            self.notify(notification);
            return Ok(SubmitOutcome::Rejected(notification));
        }

        let response: P::Response = match serde_json::from_slice(&reply.body) {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("❌ Unexpected response from {}: {}", self.page.endpoint(), e);
                self.notify(Notification::MalformedResponse);
                return Err(e.into());
            }
        };

        let html = self.page.render(&response);
        self.show_result(&html)?;
        tracing::info!("✅ Results rendered for {}", self.page.title());

        Ok(SubmitOutcome::Rendered(html))
    }

    fn notify(&self, notification: Notification) {
        self.context.notifier.alert(notification.message());
    }

    fn show_result(&self, html: &str) -> Result<()> {
        let document = &self.context.document;
        if !document.contains(RESULT_SECTION_ID) {
            tracing::debug!("Creating results container");
            document.append_element(APP_CONTAINER_ID, RESULT_SECTION_ID)?;
        }
        document.set_inner_html(RESULT_SECTION_ID, html)
    }
}
