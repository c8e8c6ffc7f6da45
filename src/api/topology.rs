use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Region {
    pub region_name: String,
    pub endpoint: String,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AvailabilityZone {
    pub zone_name: String,
    pub region_name: String,
    /// `available`, `impaired` or `unavailable`.
    pub state: String,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct DescribeRegionsRequest {
    pub region_names: Vec<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct DescribeRegionsResponse {
    pub regions: Vec<Region>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct DescribeAvailabilityZonesRequest {
    pub zone_names: Vec<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct DescribeAvailabilityZonesResponse {
    pub availability_zones: Vec<AvailabilityZone>,
}
