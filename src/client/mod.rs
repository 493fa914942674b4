//! Remote expense store
//!
//! The controller talks to the store through [`ExpenseStore`]; [`ExpenseClient`]
//! is the HTTP implementation against the `/expenses` REST endpoint.

use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::Response;
use serde::de::DeserializeOwned;
use tracing_log::log::{error, warn};
use url::Url;

use crate::configuration::Settings;
use crate::error::AppError as Error;
use crate::model::{Expense, ExpenseId, NewExpense};

pub mod expenses;

// -- Services -------------------------------------------------------------------------

#[async_trait]
pub trait ExpenseStore {
    /// Fetch the full expense collection, in store order
    async fn list(&self) -> Result<Vec<Expense>, Error>;

    /// Create an expense. The response body is ignored.
    async fn create(&self, expense: &NewExpense) -> Result<(), Error>;

    /// Replace the expense with the given id. The response body is ignored.
    async fn update(&self, id: &ExpenseId, expense: &NewExpense) -> Result<(), Error>;

    /// Remove the expense with the given id
    async fn delete(&self, id: &ExpenseId) -> Result<(), Error>;
}

#[derive(Debug, Clone)]
pub struct ExpenseClient {
    base_url: Url,
    client: reqwest::Client,
}

impl ExpenseClient {
    /// Build a client for the store at `base_url`.
    ///
    /// No request timeout is set; a hung request waits indefinitely.
    ///
    /// # Errors
    /// Will return an error if the url is invalid or the HTTP client can't be built.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let base_url = Url::parse(base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(ExpenseClient { base_url, client })
    }

    /// Build a client from the `api` section of the configuration
    ///
    /// # Errors
    /// Will return an error if the configured url is invalid.
    pub fn new_from_config(config: &Settings) -> Result<Self, Error> {
        Self::new(&config.api.base_url)
    }

    // `{base}/expenses` or `{base}/expenses/{id}`, with the id percent-encoded
    fn expenses_url(&self, id: Option<&ExpenseId>) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| Error::Error(format!("Not a base url: {}", self.base_url)))?;
            segments.pop_if_empty().push("expenses");
            if let Some(id) = id {
                segments.push(id.as_str());
            }
        }
        Ok(url)
    }

    async fn handle_response<T: DeserializeOwned>(
        response: Response,
        failure: Error,
    ) -> Result<T, Error> {
        let response = Self::ensure_success(response, failure).await?;
        let body = response.bytes().await?;

        let deserializer = &mut serde_json::Deserializer::from_slice(&body);
        serde_path_to_error::deserialize(deserializer).map_err(|e| {
            error!("Failed to decode response: {}", e);
            Error::DecodeError {
                path: e.path().to_string(),
                message: e.inner().to_string(),
            }
        })
    }

    async fn ensure_success(response: Response, failure: Error) -> Result<Response, Error> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        warn!("{} Status: {} Body: {}", failure, status, body);

        Err(failure)
    }
}
