//! Registry client: finds a station's record service by name

use std::time::{Duration, Instant};

use precinct_core::errors::{ExError, ExErrorKind, PrecinctError};
use precinct_core::{
    log_op_end, log_op_error, log_op_start, RecordService, ServiceLocator, StationCode,
};
use reqwest::blocking::Client;
use reqwest::StatusCode;

use crate::station::RemoteStationService;
use crate::wire::Binding;

/// Resolves station services through the registry at `http://host:port`
pub struct RegistryLocator {
    base_url: String,
    client: Client,
}

impl RegistryLocator {
    /// Locator for the registry listening on `host:port`
    ///
    /// # Errors
    /// Returns `ExErrorKind::Internal` if the HTTP client cannot be built.
    pub fn new(host: &str, port: u16) -> Result<Self, ExError> {
        Self::with_base_url(format!("http://{}:{}", host, port))
    }

    /// Locator for a registry at an explicit base URL
    ///
    /// Calls block until the transport itself gives up; no request timeout
    /// is imposed on top of it.
    ///
    /// # Errors
    /// Returns `ExErrorKind::Internal` if the HTTP client cannot be built.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ExError> {
        let client = Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| {
                ExError::new(ExErrorKind::Internal)
                    .with_op("registry_client")
                    .with_message(e.to_string())
            })?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the binding registered under `lookup_key`
    ///
    /// # Errors
    /// Returns `ExErrorKind::ServiceUnavailable` if the registry cannot be
    /// reached, has nothing bound under the key, or sends an unreadable reply.
    pub fn lookup(&self, lookup_key: &str) -> Result<Binding, ExError> {
        let unavailable = |reason: String| -> ExError {
            PrecinctError::ServiceUnavailable {
                lookup_key: lookup_key.to_string(),
                reason,
            }
            .into()
        };

        let url = format!("{}/bindings/{}", self.base_url, lookup_key);
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| unavailable(e.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(unavailable("not bound".to_string())),
            status if !status.is_success() => {
                Err(unavailable(format!("registry replied {}", status)))
            }
            _ => response
                .json::<Binding>()
                .map_err(|e| unavailable(format!("unreadable binding: {}", e))),
        }
    }
}

impl ServiceLocator for RegistryLocator {
    fn resolve(&self, station: &StationCode) -> Result<Box<dyn RecordService>, ExError> {
        let lookup_key = station.lookup_key();
        log_op_start!("resolve", lookup_key = lookup_key.as_str());
        let start = Instant::now();

        let binding = self.lookup(&lookup_key).map_err(|e| {
            log_op_error!(
                "resolve",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!(
            "resolve",
            duration_ms = start.elapsed().as_millis() as u64,
            endpoint = binding.endpoint.as_str()
        );

        Ok(Box::new(RemoteStationService::new(
            self.client.clone(),
            binding.endpoint,
        )))
    }
}
