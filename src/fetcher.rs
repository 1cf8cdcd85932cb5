use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::FetchError;

/// Anything that can turn a URL into page markup.
pub trait PageFetcher {
    fn fetch_html(&self, url: &str) -> Result<String, FetchError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(HttpFetcher { client })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch_html(&self, url: &str) -> Result<String, FetchError> {
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(resp.text()?)
    }
}
