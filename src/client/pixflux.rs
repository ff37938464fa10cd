//! Text-to-image generation with the Pixflux model.

use serde_json::json;

use crate::error::Result;
use crate::image::Base64Image;
use crate::types::{CameraView, Detail, Direction, ImageSize, Outline, Shading};
use crate::wire;

use super::{GenerateImageResponse, PixelLabClient};

/// Wire defaults for fields the caller leaves unset.
mod defaults {
    pub const NEGATIVE_DESCRIPTION: &str = "";
    pub const TEXT_GUIDANCE_SCALE: f64 = 8.0;
    pub const ISOMETRIC: bool = false;
    pub const NO_BACKGROUND: bool = false;
    pub const INIT_IMAGE_STRENGTH: u32 = 300;
    pub const SEED: u32 = 0;
}

/// Options for [`PixelLabClient::generate_image_pixflux`]. Construct with
/// [`GenerateImagePixfluxParams::new`] and override fields with struct-update
/// syntax.
#[derive(Debug, Clone)]
pub struct GenerateImagePixfluxParams {
    pub description: String,
    pub image_size: ImageSize,
    pub negative_description: Option<String>,
    pub text_guidance_scale: Option<f64>,
    pub outline: Option<Outline>,
    pub shading: Option<Shading>,
    pub detail: Option<Detail>,
    pub view: Option<CameraView>,
    pub direction: Option<Direction>,
    pub isometric: Option<bool>,
    pub no_background: Option<bool>,
    pub coverage_percentage: Option<f64>,
    pub init_image: Option<Base64Image>,
    pub init_image_strength: Option<u32>,
    pub color_image: Option<Base64Image>,
    pub seed: Option<u32>,
}

impl GenerateImagePixfluxParams {
    pub fn new(description: impl Into<String>, image_size: ImageSize) -> Self {
        Self {
            description: description.into(),
            image_size,
            negative_description: None,
            text_guidance_scale: None,
            outline: None,
            shading: None,
            detail: None,
            view: None,
            direction: None,
            isometric: None,
            no_background: None,
            coverage_percentage: None,
            init_image: None,
            init_image_strength: None,
            color_image: None,
            seed: None,
        }
    }
}

impl PixelLabClient {
    /// Generate a pixel-art image from a text description.
    pub async fn generate_image_pixflux(
        &self,
        params: GenerateImagePixfluxParams,
    ) -> Result<GenerateImageResponse> {
        let body = wire::snake_case_keys(json!({
            "description": params.description,
            "imageSize": params.image_size,
            "negativeDescription": params
                .negative_description
                .unwrap_or_else(|| defaults::NEGATIVE_DESCRIPTION.to_string()),
            "textGuidanceScale": params
                .text_guidance_scale
                .unwrap_or(defaults::TEXT_GUIDANCE_SCALE),
            "outline": params.outline,
            "shading": params.shading,
            "detail": params.detail,
            "view": params.view,
            "direction": params.direction,
            "isometric": params.isometric.unwrap_or(defaults::ISOMETRIC),
            "noBackground": params.no_background.unwrap_or(defaults::NO_BACKGROUND),
            "coveragePercentage": params.coverage_percentage,
            "initImage": params.init_image,
            "initImageStrength": params
                .init_image_strength
                .unwrap_or(defaults::INIT_IMAGE_STRENGTH),
            "colorImage": params.color_image,
            "seed": params.seed.unwrap_or(defaults::SEED),
        }));

        self.post_json("/generate-image-pixflux", &body).await
    }
}
