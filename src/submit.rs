/// Submission transport — fire-and-forget HTTP POST of batch envelopes.
///
/// Every call to [`Submitter::submit`] runs on its own thread: the envelope
/// is serialized, posted once and the thread exits. Failures are logged and
/// dropped. There is no queue, no retry and no completion signal.
use std::sync::Arc;
use std::thread;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;

use crate::protocol::{BatchEnvelope, SubmissionRecord};

/// Collection endpoint for location submissions
pub const DEFAULT_ENDPOINT: &str = "https://location.services.mozilla.com/v1/submit";

/// Name given to submission threads
pub const SUBMIT_THREAD_NAME: &str = "stumbler-submit";

/// Runtime reporter configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReporterConfig {
    /// URL the batch envelope is posted to
    pub endpoint: String,
}

impl ReporterConfig {
    pub fn new() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors from a single submission attempt. Only ever logged.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("error wrapping data as a batch: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// For [`Transport`] implementations that drive their own sockets
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Outbound connection used by the submitter.
///
/// Implementations must release the connection before returning, on the
/// error path too.
pub trait Transport: Send + Sync {
    /// POST `body` to `url` with its exact length declared up front.
    fn post(&self, url: &str, body: &[u8]) -> Result<(), SubmitError>;
}

/// Blocking HTTP transport. Connections are never pooled: each post opens
/// its own socket and closes it before returning.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, SubmitError> {
        Ok(Self {
            client: Client::builder().pool_max_idle_per_host(0).build()?,
        })
    }
}

impl Transport for HttpTransport {
    fn post(&self, url: &str, body: &[u8]) -> Result<(), SubmitError> {
        // A sized body is sent with Content-Length, never chunked
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_vec())
            .send()?;
        // Status and body are not inspected. With pooling off, dropping the
        // response closes the socket.
        log::debug!("Submission to {} answered {}", url, response.status());
        Ok(())
    }
}

/// Posts records to the collection endpoint in the background.
#[derive(Clone)]
pub struct Submitter {
    endpoint: Arc<str>,
    transport: Arc<dyn Transport>,
}

impl Submitter {
    pub fn new(config: &ReporterConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            endpoint: config.endpoint.as_str().into(),
            transport,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit a record without blocking. Returns immediately; the outcome
    /// is only visible in the log.
    pub fn submit(&self, record: SubmissionRecord) {
        let endpoint = Arc::clone(&self.endpoint);
        let transport = Arc::clone(&self.transport);

        let spawned = thread::Builder::new()
            .name(SUBMIT_THREAD_NAME.into())
            .spawn(move || match deliver(transport.as_ref(), &endpoint, record) {
                Ok(len) => log::debug!("Submitted {} bytes to {}", len, endpoint),
                Err(e) => log::error!("Error submitting data: {}", e),
            });

        if let Err(e) = spawned {
            log::error!("Could not start submission thread: {}", e);
        }
    }
}

/// Wrap, serialize and post one record. Returns the body length.
fn deliver(
    transport: &dyn Transport,
    endpoint: &str,
    record: SubmissionRecord,
) -> Result<usize, SubmitError> {
    let body = BatchEnvelope::single(record).to_bytes()?;
    transport.post(endpoint, &body)?;
    Ok(body.len())
}
