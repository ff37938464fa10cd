//! PixelLab API client
//!
//! One client struct carries the credential, base URL, and reqwest transport;
//! each API operation lives in its own submodule as an inherent method plus
//! its params struct and default table.

use std::collections::HashMap;
use std::path::Path;

use reqwest::Client;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::image::Base64Image;
use crate::types::{Keypoint, Usage};

pub mod animate_with_skeleton;
pub mod animate_with_text;
pub mod balance;
pub mod bitforge;
pub mod estimate_skeleton;
mod http;
pub mod inpaint;
pub mod pixflux;
pub mod rotate;

pub use animate_with_skeleton::AnimateWithSkeletonParams;
pub use animate_with_text::AnimateWithTextParams;
pub use bitforge::GenerateImageBitforgeParams;
pub use inpaint::InpaintParams;
pub use pixflux::GenerateImagePixfluxParams;
pub use rotate::RotateParams;

const DEFAULT_BASE_URL: &str = "https://api.pixellab.ai/v1";

/// Client for the PixelLab image-generation API.
///
/// Configuration is read-only after construction. The client is cheap to
/// clone and any number of in-flight calls may share one instance.
#[derive(Clone)]
pub struct PixelLabClient {
    pub(crate) client: Client,
    pub(crate) secret: String,
    pub(crate) base_url: String,
}

impl PixelLabClient {
    /// Construct a client with the default base URL.
    pub fn new(secret: impl Into<String>) -> Self {
        Self::new_with_client(secret, Client::new())
    }

    /// Construct a client on a caller-configured transport. Timeouts and
    /// connection policy belong to the transport, not this layer.
    pub fn new_with_client(secret: impl Into<String>, client: Client) -> Self {
        Self {
            client,
            secret: secret.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different API host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Construct from the process environment, loading a local `.env` file
    /// first if one exists.
    ///
    /// Reads `PIXELLAB_SECRET` (or the legacy `PIXELLAB_API_KEY`) and the
    /// optional `PIXELLAB_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let secret = read_env_var("PIXELLAB_SECRET")
            .or_else(|| read_env_var("PIXELLAB_API_KEY"))
            .ok_or_else(|| {
                Error::MissingSecret(
                    "PIXELLAB_SECRET or PIXELLAB_API_KEY environment variable is not set"
                        .to_string(),
                )
            })?;
        let base_url = read_env_var("PIXELLAB_BASE_URL");

        Ok(apply_base_url(Self::new(secret), base_url))
    }

    /// Construct from a specific env file without touching the process
    /// environment. Same variables as [`PixelLabClient::from_env`].
    pub async fn from_env_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await?;
        let env = parse_env_content(&content);

        let secret = non_empty(&env, "PIXELLAB_SECRET")
            .or_else(|| non_empty(&env, "PIXELLAB_API_KEY"))
            .ok_or_else(|| {
                Error::MissingSecret(format!(
                    "PIXELLAB_SECRET or PIXELLAB_API_KEY not found in {}",
                    path.display()
                ))
            })?;
        let base_url = non_empty(&env, "PIXELLAB_BASE_URL");

        Ok(apply_base_url(Self::new(secret), base_url))
    }
}

fn apply_base_url(client: PixelLabClient, base_url: Option<String>) -> PixelLabClient {
    match base_url {
        Some(url) => client.with_base_url(url),
        None => client,
    }
}

fn read_env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

fn non_empty(env: &HashMap<String, String>, name: &str) -> Option<String> {
    env.get(name).filter(|value| !value.is_empty()).cloned()
}

/// Parse simple `KEY=value` lines. Blank lines and `#` comments are skipped,
/// the first `=` splits, and surrounding matching quotes are unwrapped.
fn parse_env_content(content: &str) -> HashMap<String, String> {
    let mut env = HashMap::new();
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let Some((key, value)) = trimmed.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        env.insert(key.to_string(), unquote(value).to_string());
    }
    env
}

fn unquote(value: &str) -> &str {
    let quoted = value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')));
    if quoted {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

/// Response to the single-image generation operations.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateImageResponse {
    pub image: Base64Image,
    pub usage: Usage,
}

/// Response to the animation operations, one image per frame.
#[derive(Debug, Clone, Deserialize)]
pub struct AnimateResponse {
    pub images: Vec<Base64Image>,
    pub usage: Usage,
}

/// Response to skeleton estimation.
#[derive(Debug, Clone, Deserialize)]
pub struct EstimateSkeletonResponse {
    pub keypoints: Vec<Keypoint>,
    pub usage: Usage,
}

/// Remaining account credit.
#[derive(Debug, Clone, Deserialize)]
pub struct Balance {
    #[serde(rename = "type")]
    pub balance_type: String,
    pub usd: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_env_content_basics() {
        let env = parse_env_content(
            "# comment\n\
             PIXELLAB_SECRET=abc123\n\
             \n\
             PIXELLAB_BASE_URL=http://localhost:9000/v1\n",
        );
        assert_eq!(env.get("PIXELLAB_SECRET").unwrap(), "abc123");
        assert_eq!(
            env.get("PIXELLAB_BASE_URL").unwrap(),
            "http://localhost:9000/v1"
        );
        assert_eq!(env.len(), 2);
    }

    #[test]
    fn test_parse_env_content_unwraps_matching_quotes() {
        let env = parse_env_content(
            "A=\"double quoted\"\n\
             B='single quoted'\n\
             C=\"mismatched'\n\
             D=\"\n",
        );
        assert_eq!(env.get("A").unwrap(), "double quoted");
        assert_eq!(env.get("B").unwrap(), "single quoted");
        assert_eq!(env.get("C").unwrap(), "\"mismatched'");
        // A lone quote is not a quoted pair.
        assert_eq!(env.get("D").unwrap(), "\"");
    }

    #[test]
    fn test_parse_env_content_splits_on_first_equals() {
        let env = parse_env_content("SECRET=abc=def==\nNOEQUALS\n=orphan\n");
        assert_eq!(env.get("SECRET").unwrap(), "abc=def==");
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn test_client_setup() {
        let client = PixelLabClient::new("test-secret");
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
        assert_eq!(client.secret, "test-secret");

        let client = PixelLabClient::new("test-secret").with_base_url("http://localhost:1234");
        assert_eq!(client.base_url, "http://localhost:1234");
    }

    #[tokio::test]
    async fn test_from_env_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        tokio::fs::write(
            &path,
            "# PixelLab credentials\nPIXELLAB_SECRET='my-secret'\nPIXELLAB_BASE_URL=http://localhost:9000/v1\n",
        )
        .await
        .unwrap();

        let client = PixelLabClient::from_env_file(&path).await.unwrap();
        assert_eq!(client.secret, "my-secret");
        assert_eq!(client.base_url, "http://localhost:9000/v1");
    }

    #[tokio::test]
    async fn test_from_env_file_accepts_legacy_key_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        tokio::fs::write(&path, "PIXELLAB_API_KEY=legacy-secret\n")
            .await
            .unwrap();

        let client = PixelLabClient::from_env_file(&path).await.unwrap();
        assert_eq!(client.secret, "legacy-secret");
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }

    #[tokio::test]
    async fn test_from_env_file_without_secret_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        tokio::fs::write(&path, "PIXELLAB_SECRET=\nOTHER=x\n")
            .await
            .unwrap();

        let result = PixelLabClient::from_env_file(&path).await;
        assert!(matches!(result, Err(Error::MissingSecret(_))));
    }

    #[tokio::test]
    async fn test_from_env_file_missing_file_is_io_error() {
        let result = PixelLabClient::from_env_file("/definitely/not/here.env").await;
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
