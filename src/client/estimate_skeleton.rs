//! Pose skeleton estimation.

use serde_json::json;

use crate::error::Result;
use crate::image::Base64Image;

use super::{EstimateSkeletonResponse, PixelLabClient};

impl PixelLabClient {
    /// Estimate the pose skeleton of a character image.
    pub async fn estimate_skeleton(
        &self,
        image: &Base64Image,
    ) -> Result<EstimateSkeletonResponse> {
        let body = json!({ "image": image });
        self.post_json("/estimate-skeleton", &body).await
    }
}
