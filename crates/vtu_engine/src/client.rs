use std::time::Duration;

use crate::{FailureKind, ResultsReport, ResultsRequest, SubmitError};

/// Path of the batch submission endpoint, relative to the service base.
pub const RESULTS_PATH: &str = "/api/vtu/results";

#[derive(Debug, Clone)]
pub struct SubmitSettings {
    pub connect_timeout: Duration,
    /// Whole-request deadline. Scraping a large batch is slow, so this is
    /// generous, but a hung backend must not hold the machine forever.
    pub request_timeout: Duration,
}

impl Default for SubmitSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(120),
        }
    }
}

#[async_trait::async_trait]
pub trait ResultService: Send + Sync {
    async fn submit(&self, request: &ResultsRequest) -> Result<ResultsReport, SubmitError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestResultService {
    base_url: String,
    settings: SubmitSettings,
}

impl ReqwestResultService {
    pub fn new(base_url: impl Into<String>, settings: SubmitSettings) -> Self {
        Self {
            base_url: base_url.into(),
            settings,
        }
    }

    fn endpoint(&self) -> Result<reqwest::Url, SubmitError> {
        let base = reqwest::Url::parse(&self.base_url)
            .map_err(|err| SubmitError::new(FailureKind::InvalidUrl, err.to_string()))?;
        base.join(RESULTS_PATH)
            .map_err(|err| SubmitError::new(FailureKind::InvalidUrl, err.to_string()))
    }

    fn build_client(&self) -> Result<reqwest::Client, SubmitError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| SubmitError::new(FailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl ResultService for ReqwestResultService {
    async fn submit(&self, request: &ResultsRequest) -> Result<ResultsReport, SubmitError> {
        let endpoint = self.endpoint()?;
        let client = self.build_client()?;

        let response = client
            .post(endpoint)
            .json(request)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        response
            .json::<ResultsReport>()
            .await
            .map_err(map_reqwest_error)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> SubmitError {
    if err.is_timeout() {
        return SubmitError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return SubmitError::new(FailureKind::InvalidBody, err.to_string());
    }
    SubmitError::new(FailureKind::Network, err.to_string())
}
