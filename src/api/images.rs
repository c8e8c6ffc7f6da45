use serde::{Deserialize, Serialize};

use crate::api::Filter;

#[derive(Debug, Default, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ImageState {
    #[default]
    Pending,
    Available,
    Failed,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct Image {
    pub image_id: String,
    pub name: String,
    pub description: Option<String>,
    pub state: ImageState,
    pub architecture: String,
    pub owner_id: String,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct CreateImageRequest {
    pub instance_id: String,
    pub name: String,
    pub description: Option<String>,
    /// Capture without stopping the instance first; the image may miss
    /// buffered writes.
    pub no_reboot: bool,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct CreateImageResponse {
    pub image_id: String,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct DeregisterImageRequest {
    pub image_id: String,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct DescribeImagesRequest {
    pub image_ids: Vec<String>,
    pub owners: Vec<String>,
    pub filters: Vec<Filter>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct DescribeImagesResponse {
    pub images: Vec<Image>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct CopyImageRequest {
    pub source_region: String,
    pub source_image_id: String,
    pub name: String,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct CopyImageResponse {
    pub image_id: String,
}
