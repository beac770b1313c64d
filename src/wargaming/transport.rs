use std::sync::atomic::{AtomicU32, Ordering};

use clap::{crate_name, crate_version};
use serde_json::Value;

use crate::helpers::tracing::format_elapsed;
use crate::prelude::*;

static COUNTER: AtomicU32 = AtomicU32::new(1);

/// Performs the GET requests and decodes the JSON bodies.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get_json(&self, url: &str) -> Result<Value>;
}

/// Single attempt, no timeout: the client's own terminal behaviour is relied upon.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(crate_name!(), "/", crate_version!()))
            .gzip(true)
            .build()
            .context("failed to build the HTTP client")?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get_json(&self, url: &str) -> Result<Value> {
        let start_instant = Instant::now();
        let id = COUNTER.fetch_add(1, Ordering::Relaxed);
        debug!(id, url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("request has failed")?
            .error_for_status()?;
        let status = response.status();
        let body = response
            .json::<Value>()
            .await
            .context("could not parse JSON")?;
        debug!(id, %status, elapsed = %format_elapsed(start_instant), "done");
        Ok(body)
    }
}
