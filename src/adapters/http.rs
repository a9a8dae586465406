use crate::domain::model::{FormData, HttpReply};
use crate::domain::ports::Transport;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::multipart::Form;
use reqwest::Client;
use url::Url;

/// Talks to the calculator backend. Endpoints are root-relative paths, so
/// they resolve against the host of `base_url` the same way a page's
/// `fetch("/evaluate1")` does.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    base_url: Url,
}

impl ReqwestTransport {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self> {
        Ok(Self {
            client,
            base_url: Url::parse(base_url)?,
        })
    }

    pub fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint)?)
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post_form(&self, endpoint: &str, form: &FormData) -> Result<HttpReply> {
        let url = self.endpoint_url(endpoint)?;

        let multipart = form.iter().fold(Form::new(), |multipart, (name, value)| {
            multipart.text(name.to_string(), value.to_string())
        });

        tracing::debug!("POST {} with {} form fields", url, form.len());
        let response = self.client.post(url).multipart(multipart).send().await?;

        let status = response.status();
        tracing::debug!("Backend response status: {}", status);

        // Only the status of a failed response matters.
        let body = if status.is_success() {
            response.bytes().await?.to_vec()
        } else {
            Vec::new()
        };

        Ok(HttpReply {
            status: status.as_u16(),
            body,
        })
    }
}
