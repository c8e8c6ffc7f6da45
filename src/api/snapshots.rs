use serde::{Deserialize, Serialize};

use crate::api::Filter;

#[derive(Debug, Default, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotState {
    #[default]
    Pending,
    Completed,
    Error,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct Snapshot {
    pub snapshot_id: String,
    pub volume_id: String,
    pub state: SnapshotState,
    /// Percentage complete, e.g. `73%`.
    pub progress: String,
    pub volume_size_gib: u32,
    pub description: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct CreateSnapshotRequest {
    pub volume_id: String,
    pub description: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct CreateSnapshotResponse {
    pub snapshot: Snapshot,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct DeleteSnapshotRequest {
    pub snapshot_id: String,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct DescribeSnapshotsRequest {
    pub snapshot_ids: Vec<String>,
    pub owners: Vec<String>,
    pub filters: Vec<Filter>,
    pub max_results: Option<u32>,
    pub next_token: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct DescribeSnapshotsResponse {
    pub snapshots: Vec<Snapshot>,
    pub next_token: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct CopySnapshotRequest {
    pub source_region: String,
    pub source_snapshot_id: String,
    pub description: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct CopySnapshotResponse {
    pub snapshot_id: String,
}
