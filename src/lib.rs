//! Typed client for the PixelLab pixel-art generation API
//!
//! Wraps the remote generation endpoints (text-to-image, style-guided
//! generation, inpainting, rotation, skeleton estimation, and animation)
//! behind typed params structs and responses, with API failures classified
//! into a small error taxonomy.
//!
//! ```no_run
//! use pixellab::{Client, GenerateImagePixfluxParams, ImageSize};
//!
//! # async fn run() -> pixellab::Result<()> {
//! let client = Client::from_env()?;
//! let response = client
//!     .generate_image_pixflux(GenerateImagePixfluxParams::new(
//!         "a small robot",
//!         ImageSize { width: 32, height: 32 },
//!     ))
//!     .await?;
//! response.image.save("robot.png").await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod image;
pub mod types;
mod wire;

pub use client::{
    AnimateResponse, AnimateWithSkeletonParams, AnimateWithTextParams, Balance,
    EstimateSkeletonResponse, GenerateImageBitforgeParams, GenerateImagePixfluxParams,
    GenerateImageResponse, InpaintParams, PixelLabClient, PixelLabClient as Client, RotateParams,
};
pub use error::{Error, Result};
pub use image::Base64Image;
pub use types::{
    CameraView, Detail, Direction, ImageSize, Keypoint, Outline, Shading, SkeletonFrame,
    SkeletonInput, SkeletonLabel, Usage,
};
