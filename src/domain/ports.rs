use crate::domain::model::{FormData, HttpReply};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// The subset of a DOM the calculator pages touch.
pub trait Document: Send + Sync {
    fn contains(&self, id: &str) -> bool;
    /// Serializes the fields of the form `form_id`, or `None` when there is
    /// no such form.
    fn form_data(&self, form_id: &str) -> Option<FormData>;
    fn append_element(&self, parent_id: &str, id: &str) -> Result<()>;
    fn set_inner_html(&self, id: &str, html: &str) -> Result<()>;
    fn inner_html(&self, id: &str) -> Option<String>;
    /// Ids of the elements carrying `class`, in document order.
    fn elements_with_class(&self, class: &str) -> Vec<String>;
    fn attribute(&self, id: &str, name: &str) -> Option<String>;
}

pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

pub trait Navigator: Send + Sync {
    fn history_back(&self);
    fn navigate(&self, url: &str);
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Posts `form` as multipart/form-data to `endpoint`. Any status is a
    /// successful transport; only connection-level failures are errors.
    async fn post_form(&self, endpoint: &str, form: &FormData) -> Result<HttpReply>;
}

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn output_path(&self) -> Option<&str>;
}

/// One calculator view: where its form goes and how its answer is shown.
pub trait CalculatorPage: Send + Sync {
    type Response: DeserializeOwned + Send;

    fn title(&self) -> &'static str;
    fn endpoint(&self) -> &'static str;
    /// Inputs marked `required` in the page's form.
    fn required_fields(&self) -> &'static [&'static str];
    fn render(&self, response: &Self::Response) -> String;
}
