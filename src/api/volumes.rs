use serde::{Deserialize, Serialize};

use crate::api::Filter;

#[derive(Debug, Default, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum VolumeState {
    #[default]
    Creating,
    Available,
    InUse,
    Deleting,
    Error,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentState {
    #[default]
    Attaching,
    Attached,
    Detaching,
    Detached,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct VolumeAttachment {
    pub volume_id: String,
    pub instance_id: String,
    /// Device name exposed to the instance, e.g. `/dev/sdf`.
    pub device: String,
    pub state: AttachmentState,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct Volume {
    pub volume_id: String,
    pub size_gib: u32,
    pub volume_type: String,
    pub state: VolumeState,
    pub availability_zone: String,
    pub attachment: Option<VolumeAttachment>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct CreateVolumeRequest {
    pub availability_zone: String,
    pub size_gib: u32,
    pub volume_type: String,
    pub snapshot_id: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct CreateVolumeResponse {
    pub volume: Volume,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct DeleteVolumeRequest {
    pub volume_id: String,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct AttachVolumeRequest {
    pub volume_id: String,
    pub instance_id: String,
    pub device: String,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct AttachVolumeResponse {
    pub attachment: VolumeAttachment,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct DetachVolumeRequest {
    pub volume_id: String,
    pub instance_id: Option<String>,
    pub force: bool,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct DetachVolumeResponse {
    pub attachment: VolumeAttachment,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct DescribeVolumesRequest {
    pub volume_ids: Vec<String>,
    pub filters: Vec<Filter>,
    pub max_results: Option<u32>,
    pub next_token: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct DescribeVolumesResponse {
    pub volumes: Vec<Volume>,
    pub next_token: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct ModifyVolumeRequest {
    pub volume_id: String,
    pub size_gib: Option<u32>,
    pub volume_type: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct ModifyVolumeResponse {
    pub volume_id: String,
    pub target_size_gib: u32,
    /// Progress of the modification, `modifying`, `optimizing` or `completed`.
    pub modification_state: String,
}
