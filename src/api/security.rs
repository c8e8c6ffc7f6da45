use serde::{Deserialize, Serialize};

use crate::api::Filter;

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct IpPermission {
    /// `tcp`, `udp`, `icmp`, or `all`.
    pub protocol: String,
    pub from_port: Option<u16>,
    pub to_port: Option<u16>,
    pub cidr_blocks: Vec<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct SecurityGroup {
    pub group_id: String,
    pub group_name: String,
    pub description: String,
    pub vpc_id: Option<String>,
    pub ingress: Vec<IpPermission>,
    pub egress: Vec<IpPermission>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct CreateSecurityGroupRequest {
    pub group_name: String,
    pub description: String,
    pub vpc_id: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct CreateSecurityGroupResponse {
    pub group_id: String,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct DeleteSecurityGroupRequest {
    pub group_id: String,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct DescribeSecurityGroupsRequest {
    pub group_ids: Vec<String>,
    pub group_names: Vec<String>,
    pub filters: Vec<Filter>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct DescribeSecurityGroupsResponse {
    pub security_groups: Vec<SecurityGroup>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct AuthorizeSecurityGroupIngressRequest {
    pub group_id: String,
    pub permissions: Vec<IpPermission>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct RevokeSecurityGroupIngressRequest {
    pub group_id: String,
    pub permissions: Vec<IpPermission>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct AuthorizeSecurityGroupEgressRequest {
    pub group_id: String,
    pub permissions: Vec<IpPermission>,
}
