use serde::{Deserialize, Serialize};

/// Form fields in document order, as a browser serializes them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    entries: Vec<(String, String)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Replaces every entry named `name` with a single one, keeping the
    /// position of the first.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter().position(|(n, _)| *n == name) {
            Some(first) => {
                self.entries[first].1 = value;
                let mut index = 0;
                self.entries.retain(|(n, _)| {
                    let keep = index <= first || *n != name;
                    index += 1;
                    keep
                });
            }
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut form = FormData::new();
        for (name, value) in iter {
            form.append(name, value);
        }
        form
    }
}

#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[derive(Debug, Clone)]
pub struct HttpReply {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Blocking messages shown to the user. The texts are presentation strings
/// of the calculator pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    InvalidInput,
    ServerError,
    UnknownError,
    ConnectionError,
    MalformedResponse,
}

impl Notification {
    /// Classifies a non-success status. Returns `None` for 2xx.
    pub fn for_status(status: u16) -> Option<Self> {
        match status {
            200..=299 => None,
            400 => Some(Notification::InvalidInput),
            500 => Some(Notification::ServerError),
            _ => Some(Notification::UnknownError),
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Notification::InvalidInput => "Помилка у введених даних...",
            Notification::ServerError => "Помилка сервера...",
            Notification::UnknownError => "Невідома помилка...",
            Notification::ConnectionError => "Помилка з'єднання з сервером...",
            Notification::MalformedResponse => "Некоректна відповідь сервера...",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The results container now holds this markup.
    Rendered(String),
    /// The backend refused the request; the user was notified.
    Rejected(Notification),
    /// Another submission was still in flight.
    Ignored,
}
