//! Blocking client for the puzzle input endpoint

use crate::error::AocError;
use crate::retry::RetryPolicy;
use reqwest::Url;
use reqwest::blocking::{Client, ClientBuilder};
use reqwest::header::{COOKIE, HeaderValue};
use zeroize::Zeroizing;

const DEFAULT_BASE_URL: &str = "https://adventofcode.com";

/// Downloads personal puzzle inputs.
///
/// [`AocClient::fetch_input`] keeps asking while the puzzle is still locked,
/// as configured by the client's [`RetryPolicy`].
///
/// # Example
///
/// ```no_run
/// use aoc_http_client::AocClient;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = AocClient::new()?;
/// let input = client.fetch_input(2022, 8, "your_session_cookie")?;
/// println!("{} bytes", input.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct AocClient {
    http: Client,
    base_url: Url,
    retry: RetryPolicy,
}

impl AocClient {
    /// Client for adventofcode.com with the default retry policy
    ///
    /// # Errors
    ///
    /// Returns `AocError::ClientInit` if the TLS backend cannot be set up.
    pub fn new() -> Result<Self, AocError> {
        Self::builder().build()
    }

    /// Start configuring a client
    pub fn builder() -> AocClientBuilder {
        AocClientBuilder::default()
    }

    /// The retry policy used by [`AocClient::fetch_input`]
    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    /// `{base}/{year}/day/{day}/input`
    pub fn input_url(&self, year: u16, day: u8) -> Result<Url, AocError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AocError::ClientInit(format!("{} cannot be a base URL", self.base_url)))?
            .clear()
            .extend(&[&year.to_string(), "day", &day.to_string(), "input"]);
        Ok(url)
    }

    /// `session=<token>` as a header value hidden from debug output
    fn session_cookie(session: &str) -> Result<HeaderValue, AocError> {
        let cookie = Zeroizing::new(format!("session={}", session));
        let mut value = HeaderValue::from_str(&cookie)
            .map_err(|_| AocError::ClientInit("session cookie contains invalid characters".to_string()))?;
        value.set_sensitive(true);
        Ok(value)
    }

    /// Request the input once.
    ///
    /// # Errors
    ///
    /// * `AocError::Request` - the request could not be sent
    /// * `AocError::InvalidStatus` - anything but a 2xx answer, e.g. 404 before unlock
    /// * `AocError::Encoding` - the body is not UTF-8
    pub fn get_input(&self, year: u16, day: u8, session: &str) -> Result<String, AocError> {
        let url = self.input_url(year, day)?;
        let response = self
            .http
            .get(url)
            .header(COOKIE, Self::session_cookie(session)?)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(AocError::InvalidStatus { status });
        }
        response.text().map_err(|_| AocError::Encoding)
    }

    /// Request the input, retrying transient failures.
    ///
    /// # Errors
    ///
    /// * `AocError::RetriesExhausted` - every attempt failed, wraps the last error
    /// * anything non-transient from [`AocClient::get_input`], returned at once
    pub fn fetch_input(&self, year: u16, day: u8, session: &str) -> Result<String, AocError> {
        tracing::debug!(year, day, attempts = self.retry.attempts, "fetching puzzle input");
        self.retry.run(|| self.get_input(year, day, session))
    }
}

/// Configures an [`AocClient`].
///
/// # Example
///
/// ```no_run
/// use aoc_http_client::{AocClient, RetryPolicy};
/// use std::time::Duration;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = AocClient::builder()
///     .base_url("http://localhost:1234")?
///     .retry_policy(RetryPolicy { attempts: 3, backoff: Duration::ZERO })
///     .client_builder(reqwest::blocking::Client::builder().timeout(Duration::from_secs(30)))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct AocClientBuilder {
    base_url: Option<Url>,
    http: Option<ClientBuilder>,
    retry: RetryPolicy,
}

impl AocClientBuilder {
    /// Send requests somewhere other than adventofcode.com
    ///
    /// # Errors
    ///
    /// Returns `AocError::Request` if the URL does not parse.
    pub fn base_url(mut self, url: impl reqwest::IntoUrl) -> Result<Self, AocError> {
        self.base_url = Some(url.into_url()?);
        Ok(self)
    }

    /// Supply the underlying HTTP client settings (timeouts, proxies).
    ///
    /// Redirects are always disabled: an expired session answers with a
    /// redirect to the login page, which must surface as an error status.
    pub fn client_builder(mut self, builder: ClientBuilder) -> Self {
        self.http = Some(builder);
        self
    }

    /// Set how often and how patiently to retry input downloads
    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry = policy;
        self
    }

    /// # Errors
    ///
    /// Returns `AocError::ClientInit` if the HTTP client cannot be built.
    pub fn build(self) -> Result<AocClient, AocError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL).map_err(|e| AocError::ClientInit(e.to_string()))?,
        };

        let http = self
            .http
            .unwrap_or_else(|| Client::builder().use_rustls_tls())
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| AocError::ClientInit(e.to_string()))?;

        Ok(AocClient {
            http,
            base_url,
            retry: self.retry,
        })
    }
}
