use serde::{Deserialize, Serialize};

use crate::api::tags::Tag;
use crate::api::Filter;

#[derive(Debug, Default, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum InstanceState {
    #[default]
    Pending,
    Running,
    ShuttingDown,
    Terminated,
    Stopping,
    Stopped,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct Instance {
    pub instance_id: String,
    pub image_id: String,
    pub instance_type: String,
    pub state: InstanceState,
    pub availability_zone: String,
    pub private_ip: Option<String>,
    pub public_ip: Option<String>,
    pub tags: Vec<Tag>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct InstanceStateChange {
    pub instance_id: String,
    pub previous_state: InstanceState,
    pub current_state: InstanceState,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct RunInstancesRequest {
    pub image_id: String,
    pub instance_type: String,
    pub min_count: u32,
    pub max_count: u32,
    pub key_name: Option<String>,
    pub security_group_ids: Vec<String>,
    pub subnet_id: Option<String>,
    pub user_data: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct RunInstancesResponse {
    pub reservation_id: String,
    pub instances: Vec<Instance>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct TerminateInstancesRequest {
    pub instance_ids: Vec<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct TerminateInstancesResponse {
    pub state_changes: Vec<InstanceStateChange>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct StartInstancesRequest {
    pub instance_ids: Vec<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct StartInstancesResponse {
    pub state_changes: Vec<InstanceStateChange>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct StopInstancesRequest {
    pub instance_ids: Vec<String>,
    pub force: bool,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct StopInstancesResponse {
    pub state_changes: Vec<InstanceStateChange>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct RebootInstancesRequest {
    pub instance_ids: Vec<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct DescribeInstancesRequest {
    pub instance_ids: Vec<String>,
    pub filters: Vec<Filter>,
    pub max_results: Option<u32>,
    pub next_token: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct DescribeInstancesResponse {
    pub instances: Vec<Instance>,
    pub next_token: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct InstanceStatus {
    pub instance_id: String,
    pub state: InstanceState,
    /// Reachability of the underlying host, `ok` or `impaired`.
    pub system_status: String,
    /// Reachability of the instance itself, `ok` or `impaired`.
    pub instance_status: String,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct DescribeInstanceStatusRequest {
    pub instance_ids: Vec<String>,
    pub include_all_instances: bool,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct DescribeInstanceStatusResponse {
    pub statuses: Vec<InstanceStatus>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct ModifyInstanceAttributeRequest {
    pub instance_id: String,
    pub attribute: String,
    pub value: String,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MonitoringState {
    #[default]
    Disabled,
    Pending,
    Enabled,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct InstanceMonitoring {
    pub instance_id: String,
    pub state: MonitoringState,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct MonitorInstancesRequest {
    pub instance_ids: Vec<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct MonitorInstancesResponse {
    pub monitoring: Vec<InstanceMonitoring>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct UnmonitorInstancesRequest {
    pub instance_ids: Vec<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct UnmonitorInstancesResponse {
    pub monitoring: Vec<InstanceMonitoring>,
}
