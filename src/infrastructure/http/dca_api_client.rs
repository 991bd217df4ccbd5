use gloo_net::http::Request;

use crate::domain::dca::DateLimits;
use crate::domain::errors::AppError;
use crate::domain::form::{DcaResult, FormInputs};
use crate::domain::logging::{LogComponent, get_logger};

/// REST client for the calculator backend, same origin by default.
pub struct DcaApiClient {
    base_url: String,
}

impl DcaApiClient {
    pub fn new() -> Self {
        Self::with_base_url("")
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn calculate_url(&self) -> String {
        format!("{}/", self.base_url)
    }

    pub fn limits_url(&self) -> String {
        format!("{}/limits", self.base_url)
    }

    /// Coverage bounds of the backend's price history, for the date inputs.
    pub async fn date_limits(&self) -> Result<DateLimits, AppError> {
        Request::get(&self.limits_url())
            .send()
            .await
            .map_err(|e| AppError::NetworkError(format!("Request failed: {e:?}")))?
            .json()
            .await
            .map_err(|e| AppError::ParseError(format!("Failed to parse response JSON: {e:?}")))
    }

    /// POST the submitted fields as JSON and parse whatever JSON comes back.
    ///
    /// The HTTP status is not inspected: the backend reports
    /// calculation problems as error bodies without `current_price`, and
    /// those must reach the outcome classifier, not the transport-failure
    /// path. Only a failed request or an unparseable body is an error here.
    pub async fn calculate(&self, inputs: &FormInputs) -> Result<DcaResult, AppError> {
        let url = self.calculate_url();
        get_logger().info(
            LogComponent::Api("DcaBackend"),
            &format!(
                "📤 POST {url} (amount: '{}', cadence: '{}')",
                inputs.investment_value, inputs.repeat_purchase
            ),
        );

        let response = Request::post(&url)
            .json(inputs)
            .map_err(|e| AppError::ParseError(format!("Failed to encode request body: {e:?}")))?
            .send()
            .await
            .map_err(|e| AppError::NetworkError(format!("Request failed: {e:?}")))?;

        let result: DcaResult = response
            .json()
            .await
            .map_err(|e| AppError::ParseError(format!("Failed to parse response JSON: {e:?}")))?;

        get_logger().info(
            LogComponent::Api("DcaBackend"),
            &format!(
                "📥 Response parsed (current_price present: {})",
                result.is_success()
            ),
        );

        Ok(result)
    }
}

impl Default for DcaApiClient {
    fn default() -> Self {
        Self::new()
    }
}
