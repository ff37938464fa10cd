//! Shared payload types used across the API operations.
//!
//! Enum variants serialize to the exact strings the service expects,
//! including the multi-word ones.

use serde::{Deserialize, Serialize};

/// Camera perspective for generated images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CameraView {
    #[serde(rename = "side")]
    Side,
    #[serde(rename = "low top-down")]
    LowTopDown,
    #[serde(rename = "high top-down")]
    HighTopDown,
}

/// Facing direction, the 8 compass points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    South,
    SouthEast,
    East,
    NorthEast,
    North,
    NorthWest,
    West,
    SouthWest,
}

/// Outline style for generated images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outline {
    #[serde(rename = "single color black outline")]
    SingleColorBlackOutline,
    #[serde(rename = "single color outline")]
    SingleColorOutline,
    #[serde(rename = "selective outline")]
    SelectiveOutline,
    #[serde(rename = "lineless")]
    Lineless,
}

/// Shading level for generated images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shading {
    #[serde(rename = "flat shading")]
    FlatShading,
    #[serde(rename = "basic shading")]
    BasicShading,
    #[serde(rename = "medium shading")]
    MediumShading,
    #[serde(rename = "detailed shading")]
    DetailedShading,
    #[serde(rename = "highly detailed shading")]
    HighlyDetailedShading,
}

/// Detail level for generated images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Detail {
    #[serde(rename = "low detail")]
    LowDetail,
    #[serde(rename = "medium detail")]
    MediumDetail,
    #[serde(rename = "highly detailed")]
    HighlyDetailed,
}

/// Body-part label attached to a skeleton keypoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkeletonLabel {
    #[serde(rename = "NOSE")]
    Nose,
    #[serde(rename = "NECK")]
    Neck,
    #[serde(rename = "RIGHT SHOULDER")]
    RightShoulder,
    #[serde(rename = "RIGHT ELBOW")]
    RightElbow,
    #[serde(rename = "RIGHT ARM")]
    RightArm,
    #[serde(rename = "LEFT SHOULDER")]
    LeftShoulder,
    #[serde(rename = "LEFT ELBOW")]
    LeftElbow,
    #[serde(rename = "LEFT ARM")]
    LeftArm,
    #[serde(rename = "RIGHT HIP")]
    RightHip,
    #[serde(rename = "RIGHT KNEE")]
    RightKnee,
    #[serde(rename = "RIGHT LEG")]
    RightLeg,
    #[serde(rename = "LEFT HIP")]
    LeftHip,
    #[serde(rename = "LEFT KNEE")]
    LeftKnee,
    #[serde(rename = "LEFT LEG")]
    LeftLeg,
    #[serde(rename = "RIGHT EYE")]
    RightEye,
    #[serde(rename = "LEFT EYE")]
    LeftEye,
    #[serde(rename = "RIGHT EAR")]
    RightEar,
    #[serde(rename = "LEFT EAR")]
    LeftEar,
}

/// Pixel dimensions of a generated or supplied image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

/// One labeled point of a pose skeleton.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keypoint {
    pub x: f64,
    pub y: f64,
    pub label: SkeletonLabel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<f64>,
}

/// One pose at one time step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkeletonFrame {
    pub keypoints: Vec<Keypoint>,
}

/// Pose input accepted either as a full frame or as a bare keypoint list.
///
/// Variant order matters for `#[serde(untagged)]` decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkeletonInput {
    Frame(SkeletonFrame),
    Keypoints(Vec<Keypoint>),
}

impl SkeletonInput {
    /// Collapse both accepted shapes to the one wire shape.
    pub fn into_frame(self) -> SkeletonFrame {
        match self {
            SkeletonInput::Frame(frame) => frame,
            SkeletonInput::Keypoints(keypoints) => SkeletonFrame { keypoints },
        }
    }
}

impl From<SkeletonFrame> for SkeletonInput {
    fn from(frame: SkeletonFrame) -> Self {
        SkeletonInput::Frame(frame)
    }
}

impl From<Vec<Keypoint>> for SkeletonInput {
    fn from(keypoints: Vec<Keypoint>) -> Self {
        SkeletonInput::Keypoints(keypoints)
    }
}

/// Cost charged for one call.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Usage {
    #[serde(rename = "type")]
    pub usage_type: String,
    pub usd: f64,
}
