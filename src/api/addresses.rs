use serde::{Deserialize, Serialize};

use crate::api::Filter;

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct Address {
    pub allocation_id: String,
    pub public_ip: String,
    pub instance_id: Option<String>,
    pub association_id: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct AllocateAddressRequest {
    /// Address scope, e.g. `vpc`. Provider default when unset.
    pub domain: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct AllocateAddressResponse {
    pub allocation_id: String,
    pub public_ip: String,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct ReleaseAddressRequest {
    pub allocation_id: String,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct AssociateAddressRequest {
    pub allocation_id: String,
    pub instance_id: String,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct AssociateAddressResponse {
    pub association_id: String,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct DisassociateAddressRequest {
    pub association_id: String,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct DescribeAddressesRequest {
    pub allocation_ids: Vec<String>,
    pub filters: Vec<Filter>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct DescribeAddressesResponse {
    pub addresses: Vec<Address>,
}
