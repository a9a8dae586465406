use crate::core::page::PageContext;
use crate::domain::ports::{Document, Navigator};
use crate::pages::{BACK_BUTTON_ID, LINK_BUTTON_CLASS, LINK_TARGET_ATTRIBUTE};
use std::sync::Arc;

pub struct BackButton {
    navigator: Arc<dyn Navigator>,
}

impl BackButton {
    /// `None` when the page has no back button.
    pub fn bind(context: &PageContext) -> Option<Self> {
        if !context.document.contains(BACK_BUTTON_ID) {
            return None;
        }
        Some(Self {
            navigator: context.navigator.clone(),
        })
    }

    pub fn click(&self) {
        tracing::debug!("Back button clicked");
        self.navigator.history_back();
    }
}

/// Link controls of the lab index page.
pub struct LinkDispatcher {
    document: Arc<dyn Document>,
    navigator: Arc<dyn Navigator>,
    links: Vec<String>,
}

impl LinkDispatcher {
    pub fn on_ready(context: &PageContext) -> Self {
        let links = context.document.elements_with_class(LINK_BUTTON_CLASS);
        tracing::debug!("Bound {} calculator links", links.len());
        Self {
            document: context.document.clone(),
            navigator: context.navigator.clone(),
            links,
        }
    }

    pub fn links(&self) -> &[String] {
        &self.links
    }

    /// Navigates to the `data-href` of the clicked control and returns it.
    /// Clicks on unbound elements or controls without a target do nothing.
    pub fn click(&self, element_id: &str) -> Option<String> {
        if !self.links.iter().any(|id| id == element_id) {
            return None;
        }

        let target = self
            .document
            .attribute(element_id, LINK_TARGET_ATTRIBUTE)
            .filter(|href| !href.is_empty())?;

        tracing::debug!("Link {} navigates to {}", element_id, target);
        self.navigator.navigate(&target);
        Some(target)
    }
}
