use crate::core::navigation::BackButton;
use crate::core::submission::SubmissionHandler;
use crate::domain::model::{SubmitEvent, SubmitOutcome};
use crate::domain::ports::{CalculatorPage, Document, Navigator, Notifier, Transport};
use crate::pages::FORM_ID;
use crate::utils::error::{CalcError, Result};
use std::sync::Arc;

/// The browser-side collaborators of a page.
#[derive(Clone)]
pub struct PageContext {
    pub document: Arc<dyn Document>,
    pub notifier: Arc<dyn Notifier>,
    pub navigator: Arc<dyn Navigator>,
}

impl PageContext {
    pub fn new(
        document: Arc<dyn Document>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            document,
            notifier,
            navigator,
        }
    }
}

/// A calculator page after its ready event: the form handler plus the
/// optional back button.
pub struct CalculatorController<P: CalculatorPage, T: Transport> {
    submission: SubmissionHandler<P, T>,
    back_button: Option<BackButton>,
}

impl<P: CalculatorPage, T: Transport> CalculatorController<P, T> {
    pub fn on_ready(page: P, transport: T, context: PageContext) -> Result<Self> {
        if !context.document.contains(FORM_ID) {
            return Err(CalcError::MissingElementError {
                id: FORM_ID.to_string(),
            });
        }

        let back_button = BackButton::bind(&context);
        tracing::debug!(
            "{} ready (endpoint {}, back button: {})",
            page.title(),
            page.endpoint(),
            back_button.is_some()
        );

        Ok(Self {
            submission: SubmissionHandler::new(page, transport, context),
            back_button,
        })
    }

    pub async fn submit(&self, event: &mut SubmitEvent) -> Result<SubmitOutcome> {
        self.submission.submit(event).await
    }

    /// Returns whether a back button handled the click.
    pub fn click_back(&self) -> bool {
        match &self.back_button {
            Some(button) => {
                button.click();
                true
            }
            None => false,
        }
    }

    pub fn has_back_button(&self) -> bool {
        self.back_button.is_some()
    }

    pub fn is_submitting(&self) -> bool {
        self.submission.is_in_flight()
    }

    pub fn page(&self) -> &P {
        self.submission.page()
    }
}
