use serde::{Deserialize, Serialize};

use crate::api::Filter;

#[derive(Debug, Default, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VpcState {
    #[default]
    Pending,
    Available,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct Vpc {
    pub vpc_id: String,
    pub cidr_block: String,
    pub state: VpcState,
    pub is_default: bool,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct Subnet {
    pub subnet_id: String,
    pub vpc_id: String,
    pub cidr_block: String,
    pub availability_zone: String,
    pub available_ip_count: u32,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct CreateVpcRequest {
    pub cidr_block: String,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct CreateVpcResponse {
    pub vpc: Vpc,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct DeleteVpcRequest {
    pub vpc_id: String,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct DescribeVpcsRequest {
    pub vpc_ids: Vec<String>,
    pub filters: Vec<Filter>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct DescribeVpcsResponse {
    pub vpcs: Vec<Vpc>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct CreateSubnetRequest {
    pub vpc_id: String,
    pub cidr_block: String,
    pub availability_zone: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct CreateSubnetResponse {
    pub subnet: Subnet,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct DeleteSubnetRequest {
    pub subnet_id: String,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct DescribeSubnetsRequest {
    pub subnet_ids: Vec<String>,
    pub filters: Vec<Filter>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct DescribeSubnetsResponse {
    pub subnets: Vec<Subnet>,
}
