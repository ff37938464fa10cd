//! Text-driven animation of a reference image.

use serde_json::{json, Value};

use crate::error::Result;
use crate::image::Base64Image;
use crate::types::{CameraView, Direction, ImageSize};
use crate::wire;

use super::{AnimateResponse, PixelLabClient};

/// Wire defaults for fields the caller leaves unset.
mod defaults {
    use crate::types::{CameraView, Direction};

    pub const VIEW: CameraView = CameraView::Side;
    pub const DIRECTION: Direction = Direction::East;
    pub const TEXT_GUIDANCE_SCALE: f64 = 7.5;
    pub const IMAGE_GUIDANCE_SCALE: f64 = 1.5;
    pub const N_FRAMES: usize = 4;
    pub const START_FRAME_INDEX: u32 = 0;
    pub const INIT_IMAGE_STRENGTH: u32 = 300;
    pub const SEED: u32 = 0;
}

/// Options for [`PixelLabClient::animate_with_text`].
///
/// Per-frame image lists (`init_images`, `inpainting_images`, `mask_images`)
/// carry one slot per frame; a `None` slot leaves that frame unconstrained
/// and travels as `null`, in order.
#[derive(Debug, Clone)]
pub struct AnimateWithTextParams {
    pub image_size: ImageSize,
    pub description: String,
    pub action: String,
    pub reference_image: Base64Image,
    pub view: Option<CameraView>,
    pub direction: Option<Direction>,
    pub negative_description: Option<String>,
    pub text_guidance_scale: Option<f64>,
    pub image_guidance_scale: Option<f64>,
    pub n_frames: Option<usize>,
    pub start_frame_index: Option<u32>,
    pub init_images: Option<Vec<Option<Base64Image>>>,
    pub init_image_strength: Option<u32>,
    pub inpainting_images: Option<Vec<Option<Base64Image>>>,
    pub mask_images: Option<Vec<Option<Base64Image>>>,
    pub color_image: Option<Base64Image>,
    pub seed: Option<u32>,
}

impl AnimateWithTextParams {
    pub fn new(
        image_size: ImageSize,
        description: impl Into<String>,
        action: impl Into<String>,
        reference_image: Base64Image,
    ) -> Self {
        Self {
            image_size,
            description: description.into(),
            action: action.into(),
            reference_image,
            view: None,
            direction: None,
            negative_description: None,
            text_guidance_scale: None,
            image_guidance_scale: None,
            n_frames: None,
            start_frame_index: None,
            init_images: None,
            init_image_strength: None,
            inpainting_images: None,
            mask_images: None,
            color_image: None,
            seed: None,
        }
    }
}

impl PixelLabClient {
    /// Animate a character from a text description of the action.
    pub async fn animate_with_text(
        &self,
        params: AnimateWithTextParams,
    ) -> Result<AnimateResponse> {
        let n_frames = params.n_frames.unwrap_or(defaults::N_FRAMES);
        // Omitted inpainting images still travel as one null per frame.
        let inpainting_images = match params.inpainting_images {
            Some(images) => json!(images),
            None => Value::Array(vec![Value::Null; n_frames]),
        };

        let body = wire::snake_case_keys(json!({
            "imageSize": params.image_size,
            "description": params.description,
            "action": params.action,
            "referenceImage": params.reference_image,
            "view": params.view.unwrap_or(defaults::VIEW),
            "direction": params.direction.unwrap_or(defaults::DIRECTION),
            "negativeDescription": params.negative_description,
            "textGuidanceScale": params
                .text_guidance_scale
                .unwrap_or(defaults::TEXT_GUIDANCE_SCALE),
            "imageGuidanceScale": params
                .image_guidance_scale
                .unwrap_or(defaults::IMAGE_GUIDANCE_SCALE),
            "nFrames": n_frames,
            "startFrameIndex": params
                .start_frame_index
                .unwrap_or(defaults::START_FRAME_INDEX),
            "initImages": params.init_images,
            "initImageStrength": params
                .init_image_strength
                .unwrap_or(defaults::INIT_IMAGE_STRENGTH),
            "inpaintingImages": inpainting_images,
            "maskImages": params.mask_images,
            "colorImage": params.color_image,
            "seed": params.seed.unwrap_or(defaults::SEED),
        }));

        self.post_json("/animate-with-text", &body).await
    }
}
