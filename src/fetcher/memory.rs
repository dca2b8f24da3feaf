use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::app::{ExportError, Result};
use crate::fetcher::Fetcher;

/// In-memory fetcher serving canned responses and recording each request.
#[derive(Default)]
pub struct MemoryFetcher {
    responses: HashMap<String, (StatusCode, Vec<u8>)>,
    requests: Mutex<Vec<String>>,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(self, url: &str, body: &str) -> Self {
        self.with_status(url, StatusCode::OK, body)
    }

    pub fn with_status(mut self, url: &str, status: StatusCode, body: &str) -> Self {
        self.responses
            .insert(url.to_string(), (status, body.as_bytes().to_vec()));
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Fetcher for MemoryFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        self.requests.lock().unwrap().push(url.to_string());

        match self.responses.get(url) {
            Some((status, _)) if !status.is_success() => Err(ExportError::HttpStatus {
                url: url.to_string(),
                status: *status,
            }),
            Some((_, body)) => Ok(body.clone()),
            None => Err(ExportError::fetch(url, "connection refused")),
        }
    }
}
