//! In-process document, notifier and navigator.
//!
//! The CLI renders into a [`MemoryDocument`]; tests use all three to observe
//! what a page did.

use crate::domain::model::FormData;
use crate::domain::ports::{Document, Navigator, Notifier};
use crate::pages::{
    APP_CONTAINER_ID, BACK_BUTTON_ID, FORM_ID, LINK_BUTTON_CLASS, LINK_TARGET_ATTRIBUTE,
};
use crate::utils::error::{CalcError, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, Default)]
pub struct Element {
    parent: Option<String>,
    classes: Vec<String>,
    attributes: HashMap<String, String>,
    inner_html: String,
    form: Option<FormData>,
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn child_of(mut self, parent: &str) -> Self {
        self.parent = Some(parent.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    /// Turns the element into a form holding these inputs.
    pub fn with_form(mut self, fields: FormData) -> Self {
        self.form = Some(fields);
        self
    }
}

#[derive(Debug, Default)]
struct Tree {
    order: Vec<String>,
    elements: HashMap<String, Element>,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    tree: Arc<Mutex<Tree>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// A calculator view: the app container holding the form, plus the back
    /// button when asked for. No results container until the first result.
    pub fn calculator_page(fields: FormData, with_back_button: bool) -> Self {
        let document = Self::new()
            .with(APP_CONTAINER_ID, Element::new())
            .with(
                FORM_ID,
                Element::new().child_of(APP_CONTAINER_ID).with_form(fields),
            );
        if with_back_button {
            document.with(BACK_BUTTON_ID, Element::new().child_of(APP_CONTAINER_ID))
        } else {
            document
        }
    }

    /// The lab index: one link control per `(id, data-href)` pair.
    pub fn index_page(links: &[(&str, Option<&str>)]) -> Self {
        links.iter().fold(
            Self::new().with(APP_CONTAINER_ID, Element::new()),
            |document, (id, href)| {
                let mut element = Element::new()
                    .child_of(APP_CONTAINER_ID)
                    .with_class(LINK_BUTTON_CLASS);
                if let Some(href) = href {
                    element = element.with_attribute(LINK_TARGET_ATTRIBUTE, href);
                }
                document.with(id, element)
            },
        )
    }

    pub fn with(self, id: &str, element: Element) -> Self {
        {
            let mut tree = self.lock();
            tree.insert(id, element);
        }
        self
    }

    /// Replaces the inputs of a form, as a user editing the page would.
    pub fn fill_form(&self, form_id: &str, fields: FormData) -> Result<()> {
        let mut tree = self.lock();
        match tree.elements.get_mut(form_id) {
            Some(element) if element.form.is_some() => {
                element.form = Some(fields);
                Ok(())
            }
            _ => Err(CalcError::MissingElementError {
                id: form_id.to_string(),
            }),
        }
    }

    pub fn parent_of(&self, id: &str) -> Option<String> {
        self.lock().elements.get(id).and_then(|e| e.parent.clone())
    }

    fn lock(&self) -> MutexGuard<'_, Tree> {
        self.tree.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Tree {
    fn insert(&mut self, id: &str, element: Element) {
        if self.elements.insert(id.to_string(), element).is_none() {
            self.order.push(id.to_string());
        }
    }
}

impl Document for MemoryDocument {
    fn contains(&self, id: &str) -> bool {
        self.lock().elements.contains_key(id)
    }

    fn form_data(&self, form_id: &str) -> Option<FormData> {
        self.lock().elements.get(form_id).and_then(|e| e.form.clone())
    }

    fn append_element(&self, parent_id: &str, id: &str) -> Result<()> {
        let mut tree = self.lock();
        if !tree.elements.contains_key(parent_id) {
            return Err(CalcError::MissingElementError {
                id: parent_id.to_string(),
            });
        }
        tree.insert(id, Element::new().child_of(parent_id));
        Ok(())
    }

    fn set_inner_html(&self, id: &str, html: &str) -> Result<()> {
        let mut tree = self.lock();
        let element = tree
            .elements
            .get_mut(id)
            .ok_or_else(|| CalcError::MissingElementError { id: id.to_string() })?;
        element.inner_html = html.to_string();
        Ok(())
    }

    fn inner_html(&self, id: &str) -> Option<String> {
        self.lock().elements.get(id).map(|e| e.inner_html.clone())
    }

    fn elements_with_class(&self, class: &str) -> Vec<String> {
        let tree = self.lock();
        tree.order
            .iter()
            .filter(|id| {
                tree.elements
                    .get(id.as_str())
                    .is_some_and(|e| e.classes.iter().any(|c| c == class))
            })
            .cloned()
            .collect()
    }

    fn attribute(&self, id: &str, name: &str) -> Option<String> {
        self.lock()
            .elements
            .get(id)
            .and_then(|e| e.attributes.get(name).cloned())
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationRequest {
    Back,
    Url(String),
}

#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    requests: Arc<Mutex<Vec<NavigationRequest>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<NavigationRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, request: NavigationRequest) {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);
    }
}

impl Navigator for RecordingNavigator {
    fn history_back(&self) {
        self.record(NavigationRequest::Back);
    }

    fn navigate(&self, url: &str) {
        self.record(NavigationRequest::Url(url.to_string()));
    }
}
