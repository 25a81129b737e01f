use crate::notice_generation::domain::RawLookupDocument;
use crate::ports::outbound::LookupSourceLoader;
use crate::shared::security::MAX_FILE_SIZE;
use crate::shared::Result;
use std::time::Duration;

/// HttpLookupClient adapter fetching license lookup documents over HTTP(S)
///
/// This adapter implements the LookupSourceLoader port with a blocking
/// reqwest client. Transient failures are retried.
pub struct HttpLookupClient {
    client: reqwest::blocking::Client,
    max_retries: u32,
}

impl HttpLookupClient {
    /// Creates a new client with default configuration
    pub fn new() -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("license-notice/{}", version);
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            max_retries: 3,
        })
    }

    /// Whether a lookup reference names a remote document
    pub fn is_remote(reference: &str) -> bool {
        let lower = reference.trim_start().to_ascii_lowercase();
        lower.starts_with("http://") || lower.starts_with("https://")
    }

    /// Server-side failures may go away on retry; client errors such as 404 do not
    fn is_retryable_status(status: reqwest::StatusCode) -> bool {
        status.is_server_error()
    }

    fn fetch_with_retry(&self, url: &str) -> Result<String> {
        let mut last_error = anyhow::anyhow!("No attempt was made to fetch {}", url);

        for attempt in 1..=self.max_retries {
            match self.fetch(url) {
                Ok(content) => return Ok(content),
                Err(FetchError::Permanent(e)) => return Err(e),
                Err(FetchError::Transient(e)) => {
                    last_error = e;
                    if attempt < self.max_retries {
                        std::thread::sleep(Duration::from_millis(200 * attempt as u64));
                    }
                }
            }
        }

        Err(last_error)
    }

    fn fetch(&self, url: &str) -> std::result::Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::Transient(e.into()))?;

        let status = response.status();
        if !status.is_success() {
            let error = anyhow::anyhow!("Server returned status code {}", status);
            return Err(if Self::is_retryable_status(status) {
                FetchError::Transient(error)
            } else {
                FetchError::Permanent(error)
            });
        }

        if let Some(length) = response.content_length() {
            if length > MAX_FILE_SIZE {
                return Err(FetchError::Permanent(too_large(length)));
            }
        }

        let body = response
            .bytes()
            .map_err(|e| FetchError::Transient(e.into()))?;
        if body.len() as u64 > MAX_FILE_SIZE {
            return Err(FetchError::Permanent(too_large(body.len() as u64)));
        }

        String::from_utf8(body.to_vec()).map_err(|e| {
            FetchError::Permanent(anyhow::anyhow!(
                "Response from {} is not valid UTF-8: {}",
                url,
                e
            ))
        })
    }
}

/// Failure of a single fetch attempt
enum FetchError {
    /// Connection problems and 5xx responses
    Transient(anyhow::Error),
    Permanent(anyhow::Error),
}

fn too_large(length: u64) -> anyhow::Error {
    anyhow::anyhow!(
        "Security: response is too large ({} bytes). Maximum allowed size is {} bytes.",
        length,
        MAX_FILE_SIZE
    )
}

impl LookupSourceLoader for HttpLookupClient {
    fn load(&self, reference: &str) -> Result<RawLookupDocument> {
        let url = reference.trim();
        if !Self::is_remote(url) {
            anyhow::bail!("Not an http(s) URL: {}", reference);
        }
        let content = self.fetch_with_retry(url)?;
        Ok(RawLookupDocument::new(reference, content))
    }
}
