//! Request dispatch and response decoding.
//!
//! Every operation funnels through here: bearer auth, JSON content type,
//! status classification, typed decode of success bodies.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, Result};

use super::PixelLabClient;

impl PixelLabClient {
    pub(crate) async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &Value,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.secret))
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request to {}: {}", path, e);
                e
            })?;

        decode_response(path, response).await
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.secret))
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request to {}: {}", path, e);
                e
            })?;

        decode_response(path, response).await
    }
}

async fn decode_response<T: DeserializeOwned>(
    path: &str,
    response: reqwest::Response,
) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let error_text = response.text().await?;
        tracing::error!(
            "PixelLab API error on {} (status {}): {}",
            path,
            status,
            error_text
        );
        return Err(Error::from_api_response(status.as_u16(), &error_text));
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| {
        tracing::error!("Failed to parse PixelLab response: {}\nBody: {}", e, body);
        Error::Json(e)
    })
}
